//! Rule-based syllable segmentation.
//!
//! This module implements the core segmentation algorithm. A word is first
//! tested for compound decomposition against the dictionary (longest match
//! first, both halves must be known words), then split on vowel-group
//! boundaries with two phonetic corrections: consonant digraphs are never
//! broken across a boundary, and a trailing silent-e syllable is merged back
//! into the preceding one.
//!
//! Syllable boundaries are marked with `_`; a compound boundary between two
//! independently recognized words is marked with `__`.
//!
//! # Examples
//!
//! ```
//! use syllabize::analysis::segmenter::SyllableSegmenter;
//! use syllabize::dictionary::Dictionary;
//!
//! let dict = Dictionary::from_words(vec!["spring", "field"]);
//! let segmenter = SyllableSegmenter::new(dict);
//!
//! assert_eq!(segmenter.segment("Springfield"), "Spring__field");
//! assert_eq!(segmenter.segment("python"), "py_thon");
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::dictionary::Dictionary;

/// Maximal runs of vowel-class characters; `y` counts as a vowel.
static VOWEL_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[aeiouyAEIOUY]+").unwrap());

/// A marker followed by a single consonant and a final `e`.
static SILENT_E_TAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_.e$").unwrap());

/// Consonants that form an unbreakable digraph with a following `h`.
const DIGRAPH_LEADERS: [char; 7] = ['p', 't', 'c', 'd', 's', 'g', 'b'];

/// Words longer than this many characters try compound decomposition first.
const COMPOUND_MIN_CHARS: usize = 6;

/// Segments words into `_`-marked syllables using a read-only [`Dictionary`].
///
/// The segmenter is pure and total over word tokens (no whitespace or
/// separator characters): every input produces a result, and equal inputs
/// produce equal results.
#[derive(Clone, Debug)]
pub struct SyllableSegmenter {
    dictionary: Dictionary,
}

impl SyllableSegmenter {
    /// Create a new segmenter over the given dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        SyllableSegmenter { dictionary }
    }

    /// Get the dictionary used for compound decomposition.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Segment a single word into its syllable-marked form.
    ///
    /// Matching against the dictionary is done on the lowercased word, but
    /// the returned string preserves the original character case.
    pub fn segment(&self, word: &str) -> String {
        if word.chars().count() > COMPOUND_MIN_CHARS {
            if let Some((head, tail)) = self.split_compound(word) {
                return format!("{}__{}", self.segment(head), self.segment(tail));
            }
        }

        self.split_vowel_groups(word)
    }

    /// Find the first dictionary entry that prefixes the word while the rest
    /// of the word is itself an entry. Entries are scanned longest-first, so
    /// the first hit is the greediest valid split.
    ///
    /// Suffixes shorter than the dictionary's minimum entry length can never
    /// match; a trailing one- or two-letter fragment blocks decomposition.
    fn split_compound<'a>(&self, word: &'a str) -> Option<(&'a str, &'a str)> {
        let lower = word.to_lowercase();

        for entry in self.dictionary.iter() {
            if let Some(rest) = lower.strip_prefix(entry) {
                if self.dictionary.contains(rest) {
                    let split = byte_index_at_char(word, entry.chars().count());
                    return Some(word.split_at(split));
                }
            }
        }

        None
    }

    /// Split a word on vowel-group boundaries and mark each internal
    /// consonant run, then apply the silent-e correction.
    fn split_vowel_groups(&self, word: &str) -> String {
        // Alternating pieces: even indices are consonant runs (possibly empty
        // at the edges), odd indices are vowel runs.
        let mut pieces: Vec<&str> = Vec::new();
        let mut last_end = 0;
        for mat in VOWEL_RUN.find_iter(word) {
            pieces.push(&word[last_end..mat.start()]);
            pieces.push(mat.as_str());
            last_end = mat.end();
        }
        pieces.push(&word[last_end..]);

        let last = pieces.len() - 1;
        let mut result = String::with_capacity(word.len() + pieces.len());
        for (i, piece) in pieces.iter().enumerate() {
            if i % 2 == 0 && i != 0 && i < last {
                push_marked_run(&mut result, piece);
            } else {
                result.push_str(piece);
            }
        }

        strip_silent_e(result)
    }
}

/// Append a consonant run with a syllable marker inserted at its midpoint,
/// shifted where the midpoint would fall inside a digraph.
fn push_marked_run(result: &mut String, piece: &str) {
    let chars: Vec<char> = piece.chars().collect();
    let mut sep = chars.len() / 2;

    if sep > 0 && is_digraph(chars[sep - 1], chars[sep]) {
        if sep == 1 {
            // Keep the digraph whole, attached to the following syllable.
            sep = 0;
        } else {
            // Keep the digraph whole, attached to the preceding syllable.
            sep += 1;
        }
    }

    let split = byte_index_at_char(piece, sep);
    result.push_str(&piece[..split]);
    result.push('_');
    result.push_str(&piece[split..]);
}

fn is_digraph(first: char, second: char) -> bool {
    DIGRAPH_LEADERS.contains(&first.to_ascii_lowercase()) && second.to_ascii_lowercase() == 'h'
}

/// Delete the last marker when the result ends in marker + one consonant +
/// `e`: a single-letter syllable closed by a final `e` is silent, not a
/// syllable of its own.
fn strip_silent_e(mut result: String) -> String {
    if SILENT_E_TAIL.is_match(&result) {
        if let Some(pos) = result.rfind('_') {
            result.remove(pos);
        }
    }
    result
}

/// Byte index of the `n`-th character, or the string's length when the
/// string has fewer than `n` characters.
fn byte_index_at_char(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}
