//! Syllable filter implementation.
//!
//! This module provides the filter that rewrites word tokens into their
//! syllable-marked form. Separator tokens flow through untouched, so the
//! stream can be reassembled into the original line shape afterwards.
//!
//! # Examples
//!
//! ```
//! use syllabize::analysis::token::{Token, TokenKind};
//! use syllabize::analysis::token_filter::Filter;
//! use syllabize::analysis::token_filter::syllable::SyllableFilter;
//! use syllabize::dictionary::Dictionary;
//!
//! let filter = SyllableFilter::new(Dictionary::default());
//! let tokens = vec![Token::new("python", TokenKind::Word, 0)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result[0].text, "py_thon");
//! ```

use std::sync::Arc;

use crate::analysis::segmenter::SyllableSegmenter;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::dictionary::Dictionary;
use crate::error::Result;

/// A filter that rewrites every word token to its segmented form.
#[derive(Clone, Debug)]
pub struct SyllableFilter {
    segmenter: Arc<SyllableSegmenter>,
}

impl SyllableFilter {
    /// Create a new syllable filter over the given dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_segmenter(Arc::new(SyllableSegmenter::new(dictionary)))
    }

    /// Create a new syllable filter sharing an existing segmenter.
    pub fn with_segmenter(segmenter: Arc<SyllableSegmenter>) -> Self {
        SyllableFilter { segmenter }
    }

    /// Get the segmenter used by this filter.
    pub fn segmenter(&self) -> &SyllableSegmenter {
        &self.segmenter
    }
}

impl Filter for SyllableFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let segmenter = Arc::clone(&self.segmenter);

        let filtered: Vec<Token> = tokens
            .map(|token| {
                if token.is_word() {
                    let segmented = segmenter.segment(&token.text);
                    token.with_text(segmented)
                } else {
                    token
                }
            })
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "syllable"
    }
}
