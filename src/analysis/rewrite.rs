//! Post-assembly rewrites over the output string.

use regex::Regex;

use crate::error::{Result, SyllabizeError};

/// A rewrite that replaces every match of a regex pattern in the assembled
/// output.
///
/// Used after token reassembly, where boundary markers from neighboring
/// stages can combine into shapes that need demoting: the gerund rule
/// rewrites a compound boundary in front of `ing` into a plain syllable
/// boundary.
#[derive(Clone, Debug)]
pub struct PatternRewrite {
    pattern: Regex,
    replacement: String,
}

impl PatternRewrite {
    /// Create a new pattern rewrite.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(PatternRewrite {
            pattern: Regex::new(pattern)
                .map_err(|e| SyllabizeError::analysis(format!("Invalid rewrite pattern: {e}")))?,
            replacement: replacement.to_string(),
        })
    }

    /// The gerund demotion rewrite: `__ing` → `_ing`.
    ///
    /// The suffix `ing` showing up as the second half of a compound split is
    /// a gerund, not an independent word; its boundary is demoted.
    pub fn gerund_demotion() -> Result<Self> {
        Self::new("__ing", "_ing")
    }

    /// Apply this rewrite, replacing every match.
    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    /// Get the name of this rewrite (for debugging and configuration).
    pub fn name(&self) -> &'static str {
        "pattern_rewrite"
    }
}
