//! Word dictionary used for compound decomposition.
//!
//! The dictionary holds the known-word list that the segmenter scans when it
//! tries to split a long name into two real words. Two access patterns
//! matter: iteration in descending-length order (longest-match-first prefix
//! scanning) and exact membership lookup (suffix testing, skip rules).
//!
//! # Examples
//!
//! ```
//! use syllabize::dictionary::Dictionary;
//!
//! let dict = Dictionary::from_words(vec!["cat", "fish", "catfish", "ox"]);
//!
//! // "ox" is too short to be kept
//! assert_eq!(dict.len(), 3);
//! assert!(dict.contains("fish"));
//! assert!(!dict.contains("ox"));
//!
//! // longest entries come first
//! assert_eq!(dict.iter().next(), Some("catfish"));
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Result, SyllabizeError};

/// Minimum entry length, in characters. Shorter candidates are discarded at
/// construction time; they match almost any prefix or suffix.
pub const MIN_ENTRY_CHARS: usize = 3;

/// A read-only set of known words, ordered by descending length.
///
/// Construction filters out entries shorter than [`MIN_ENTRY_CHARS`] and
/// sorts the survivors longest-first with a stable sort, so entries of equal
/// length keep their input order. Duplicates are harmless and not removed.
///
/// The backing storage is `Arc`-shared: cloning a `Dictionary` is cheap and
/// every clone sees the same entries.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    /// Entries sorted by descending character length (stable).
    words: Arc<Vec<String>>,
    /// The same entries, for exact membership lookup.
    index: Arc<HashSet<String>>,
}

impl Dictionary {
    /// Build a dictionary from a list of candidate words.
    ///
    /// The word list is expected to be lowercase; entries are taken verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use syllabize::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_words(vec!["spring", "field"]);
    /// assert!(dict.contains("spring"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.into())
            .filter(|w| w.chars().count() >= MIN_ENTRY_CHARS)
            .collect();
        words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));

        let index = words.iter().cloned().collect();

        Dictionary {
            words: Arc::new(words),
            index: Arc::new(index),
        }
    }

    /// Load a dictionary from a newline-delimited word list file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SyllabizeError::dictionary(format!(
                "Failed to read word list '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::from_words(content.lines()))
    }

    /// Check whether a word is an exact dictionary member.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Iterate over entries in descending-length order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
