//! Separator-preserving word boundary tokenizer.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenKind, TokenStream};
use crate::error::{Result, SyllabizeError};

/// A tokenizer that splits text into alternating word and separator tokens.
///
/// Separator runs are the regex matches; the gaps between them become word
/// tokens. Nothing is discarded, so concatenating the token texts in stream
/// order reproduces the input exactly.
#[derive(Clone, Debug)]
pub struct WordBoundaryTokenizer {
    /// The regex matching separator runs
    pattern: Arc<Regex>,
}

impl WordBoundaryTokenizer {
    /// Create a new tokenizer with the default separator pattern.
    ///
    /// The default pattern `r"\W+"` treats any run of non-word characters
    /// (whitespace, punctuation, apostrophes) as a separator.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\W+")
    }

    /// Create a new tokenizer with a custom separator pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SyllabizeError::analysis(format!("Invalid separator pattern: {e}")))?;

        Ok(WordBoundaryTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the separator pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for WordBoundaryTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut last_end = 0;
        let mut position = 0;

        for mat in self.pattern.find_iter(text) {
            if mat.start() > last_end {
                tokens.push(Token::with_offsets(
                    &text[last_end..mat.start()],
                    TokenKind::Word,
                    position,
                    last_end,
                    mat.start(),
                ));
                position += 1;
            }

            tokens.push(Token::with_offsets(
                mat.as_str(),
                TokenKind::Separator,
                position,
                mat.start(),
                mat.end(),
            ));
            position += 1;
            last_end = mat.end();
        }

        if last_end < text.len() {
            tokens.push(Token::with_offsets(
                &text[last_end..],
                TokenKind::Word,
                position,
                last_end,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word_boundary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_boundary_tokenizer() {
        let tokenizer = WordBoundaryTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("New York").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "New");
        assert!(tokens[0].is_word());
        assert_eq!(tokens[1].text, " ");
        assert!(tokens[1].is_separator());
        assert_eq!(tokens[2].text, "York");
        assert_eq!(tokens[2].start_offset, 4);
        assert_eq!(tokens[2].end_offset, 8);
    }

    #[test]
    fn test_separators_preserved_verbatim() {
        let tokenizer = WordBoundaryTokenizer::new().unwrap();
        let input = "O'Brien-on--Sea, Jr.";
        let joined: String = tokenizer
            .tokenize(input)
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(joined, input);
    }

    #[test]
    fn test_leading_and_trailing_separators() {
        let tokenizer = WordBoundaryTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize(" name ").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].is_separator());
        assert_eq!(tokens[1].text, "name");
        assert!(tokens[2].is_separator());
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WordBoundaryTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("").unwrap().collect();

        assert!(tokens.is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let result = WordBoundaryTokenizer::with_pattern("(unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordBoundaryTokenizer::new().unwrap().name(), "word_boundary");
    }
}
