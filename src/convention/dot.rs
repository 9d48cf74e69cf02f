use crate::tokenizer::TokenSequence;

/// Join tokens with single dots.
pub fn render(tokens: &TokenSequence) -> String {
    tokens.iter().collect::<Vec<_>>().join(".")
}
