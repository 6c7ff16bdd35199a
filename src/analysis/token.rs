//! Token types and utilities for text analysis.
//!
//! This module defines the core data structures for representing text tokens,
//! which are the units that flow through the analysis pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A single token with text, kind, position, and offsets
//! - [`TokenKind`] - Whether the token is a word or a separator run
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! A tokenized line alternates between word and separator tokens, and
//! concatenating the token texts in order reproduces the line exactly.
//! Filters rewrite word tokens; separator tokens are opaque.
//!
//! # Examples
//!
//! Creating a simple token:
//!
//! ```
//! use syllabize::analysis::token::{Token, TokenKind};
//!
//! let token = Token::new("hello", TokenKind::Word, 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! assert!(token.is_word());
//! ```
//!
//! Creating a token with offsets:
//!
//! ```
//! use syllabize::analysis::token::{Token, TokenKind};
//!
//! let token = Token::with_offsets("world", TokenKind::Word, 1, 6, 11);
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a token's content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A maximal run of word characters.
    Word,
    /// A maximal run of non-word characters (whitespace, punctuation).
    Separator,
}

/// A token represents a single word or separator run after tokenization.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `kind` - Word or separator classification
/// - `position` - Position in the token stream (0-based)
/// - `start_offset` / `end_offset` - Byte offsets in the original text
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// Whether this token is a word or a separator run
    pub kind: TokenKind,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text, kind, and position.
    pub fn new<S: Into<String>>(text: S, kind: TokenKind, position: usize) -> Self {
        Token {
            text: text.into(),
            kind,
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, kind, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        kind: TokenKind,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            kind,
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if this token is a word.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Check if this token is a separator run.
    pub fn is_separator(&self) -> bool {
        self.kind == TokenKind::Separator
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
