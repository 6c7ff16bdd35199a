//! # Syllabize
//!
//! Rule-based syllable segmentation for name corpora.
//!
//! ## Features
//!
//! - Dictionary-driven compound word decomposition (longest match first)
//! - Vowel-group syllable splitting with digraph protection and silent-e
//!   elision
//! - Separator-preserving tokenization, so punctuation and spacing survive
//!   the round trip untouched
//! - Batch CLI that emits SQL `UPDATE` statements for a names table

pub mod analysis;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod transform;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
