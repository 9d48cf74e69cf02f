use crate::error::Error;
use crate::Value;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything outside letters, digits, whitespace, hyphens, underscores
    static ref DISALLOWED: Regex = Regex::new(r"[^\p{L}\p{N}\s_-]").unwrap();
    // Lowercase letter immediately followed by an uppercase letter
    static ref CASE_BOUNDARY: Regex = Regex::new(r"(\p{Ll})(\p{Lu})").unwrap();
    // Runs of delimiter characters between words
    static ref DELIMITER_RUN: Regex = Regex::new(r"[\s_-]+").unwrap();
}

/// Ordered lowercase word tokens extracted from a source string.
///
/// Tokens are never empty and never contain whitespace, hyphens,
/// underscores, or punctuation; the normalization pipeline is the only
/// constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    /// Normalize raw text into word tokens.
    ///
    /// Trims the input, treats punctuation as a word boundary, splits
    /// compound-case words at lowercase-to-uppercase transitions, splits
    /// on delimiter runs, and lowercases what survives. Input with no
    /// alphanumeric content produces an empty sequence.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        let cleaned = DISALLOWED.replace_all(trimmed, " ");
        let separated = CASE_BOUNDARY.replace_all(&cleaned, "$1 $2");

        let tokens = DELIMITER_RUN
            .split(&separated)
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .collect();

        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Tokenize caller-supplied input, rejecting anything that is not text.
pub fn tokenize(input: &Value) -> Result<TokenSequence, Error> {
    let text = input
        .as_text()
        .ok_or(Error::ExpectedText(input.type_name()))?;
    Ok(TokenSequence::from_text(text))
}
