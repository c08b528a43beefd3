//! Whitespace tokenizer implementation.
//!
//! Normalized comments are only ever split on whitespace; there is no
//! stemming or sub-word analysis.

use std::collections::HashSet;

/// A tokenizer that splits text on whitespace.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Split `text` into its whitespace-delimited words, in order, keeping
    /// repeated words.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }

    /// The distinct words of `text`.
    pub fn token_set<'a>(&self, text: &'a str) -> TokenSet<'a> {
        TokenSet::new(text)
    }
}

/// The distinct whitespace-delimited words of a comment, used for
/// exact-token checks.
#[derive(Debug, Clone, Default)]
pub struct TokenSet<'a> {
    tokens: HashSet<&'a str>,
}

impl<'a> TokenSet<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace().collect(),
        }
    }

    /// Whether `word` occurs as a whole token.
    ///
    /// Multi-word phrases never match since tokens contain no whitespace.
    pub fn contains(&self, word: &str) -> bool {
        self.tokens.contains(word)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens = tokenizer.tokenize("la maleta y la mochila");
        assert_eq!(tokens, vec!["la", "maleta", "y", "la", "mochila"]);
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = WhitespaceTokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.token_set("   ").is_empty());
    }

    #[test]
    fn test_token_set_dedup() {
        let set = TokenSet::new("la maleta y la mochila");
        assert_eq!(set.len(), 4);
        assert!(set.contains("maleta"));
        assert!(!set.contains("male"));
        assert!(!set.contains("la maleta"));
    }
}
