//! Tokenization for catalog descriptions and queries.

use crate::error::Result;
use crate::text::Tokenizer;

/// Word tokenizer extracting maximal alphanumeric runs.
///
/// Punctuation separates tokens and is discarded, and single-character
/// tokens are dropped: stray letters and digits in product copy carry no
/// retrieval signal.
///
/// # Examples
///
/// ```
/// use sugerir::text::{Tokenizer, tokenize::WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
///
/// let tokens = tokenizer.tokenize("Long-lasting color, SPF 50!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Long", "lasting", "color", "SPF", "50"]);
///
/// // Single characters are dropped
/// let tokens = tokenizer.tokenize("vitamin E cream").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["vitamin", "cream"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.chars().count() >= 2)
            .map(ToString::to_string)
            .collect();

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let tokens = WordTokenizer::new().tokenize("red lipstick").unwrap();
        assert_eq!(tokens, vec!["red", "lipstick"]);
    }

    #[test]
    fn test_punctuation_separates() {
        let tokens = WordTokenizer::new()
            .tokenize("shampoo,conditioner;soap")
            .unwrap();
        assert_eq!(tokens, vec!["shampoo", "conditioner", "soap"]);
    }

    #[test]
    fn test_single_chars_dropped() {
        let tokens = WordTokenizer::new().tokenize("a b cream 5 x").unwrap();
        assert_eq!(tokens, vec!["cream"]);
    }

    #[test]
    fn test_empty_input() {
        let tokens = WordTokenizer::new().tokenize("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = WordTokenizer::new().tokenize("   \t\n ").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_digits_kept() {
        let tokens = WordTokenizer::new().tokenize("SPF 50 sunscreen").unwrap();
        assert_eq!(tokens, vec!["SPF", "50", "sunscreen"]);
    }
}
