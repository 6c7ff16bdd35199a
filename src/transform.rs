//! Line-level name transformation.
//!
//! This module ties the analysis stages together: a line is tokenized into
//! alternating word and separator runs, word tokens are rewritten by the
//! syllable filter, and the stream is concatenated back into a single string
//! with every separator byte intact. Post-assembly rewrites (gerund
//! demotion) run last, on the reassembled string.
//!
//! # Examples
//!
//! ```
//! use syllabize::dictionary::Dictionary;
//! use syllabize::transform::NameTransformer;
//!
//! let dict = Dictionary::from_words(vec!["spring", "field"]);
//! let transformer = NameTransformer::new(dict).unwrap();
//!
//! let out = transformer.transform("Springfield Manor").unwrap();
//! assert_eq!(out, "Spring__field Ma_nor");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::rewrite::PatternRewrite;
use crate::analysis::token_filter::syllable::SyllableFilter;
use crate::analysis::tokenizer::word_boundary::WordBoundaryTokenizer;
use crate::dictionary::Dictionary;
use crate::error::Result;

/// Transforms whole input lines into their syllable-marked form.
///
/// Built once per run over a read-only [`Dictionary`]; each call to
/// [`transform`](Self::transform) is independent and stateless, so a single
/// transformer can serve any number of lines.
#[derive(Clone, Debug)]
pub struct NameTransformer {
    analyzer: PipelineAnalyzer,
    rewrites: Vec<PatternRewrite>,
}

impl NameTransformer {
    /// Create a transformer over the given dictionary.
    pub fn new(dictionary: Dictionary) -> Result<Self> {
        let tokenizer = Arc::new(WordBoundaryTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(SyllableFilter::new(dictionary)))
            .with_name("names");

        Ok(NameTransformer {
            analyzer,
            rewrites: vec![PatternRewrite::gerund_demotion()?],
        })
    }

    /// Transform one line, returning its syllable-marked form.
    ///
    /// Separators round-trip verbatim; an empty line yields an empty string.
    pub fn transform(&self, line: &str) -> Result<String> {
        let mut output: String = self.analyzer.analyze(line)?.map(|t| t.text).collect();

        for rewrite in &self.rewrites {
            output = rewrite.apply(&output);
        }

        Ok(output)
    }
}
