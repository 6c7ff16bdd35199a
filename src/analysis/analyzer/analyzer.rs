//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the main interface for text
//! analysis. Analyzers combine a tokenizer with filters to transform a raw
//! line into a stream of processed tokens.
//!
//! # Role in Analysis Pipeline
//!
//! ```text
//! Raw Line → Analyzer → Token Stream → Reassembly
//!              ↓
//!          Tokenizer
//!              ↓
//!          Filter 1
//!              ↓
//!          Filter N
//! ```
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use syllabize::analysis::analyzer::Analyzer;
//! use syllabize::analysis::token::TokenStream;
//! use syllabize::error::Result;
//!
//! struct MyAnalyzer;
//!
//! impl Analyzer for MyAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "my_analyzer"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared across
/// threads.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This runs the complete pipeline: tokenization followed by every
    /// configured filter, in order.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
