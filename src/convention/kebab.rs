use crate::tokenizer::TokenSequence;

/// Join tokens with single hyphens.
///
/// The shared tokenizer already collapses delimiter runs and strips
/// boundary delimiters, so no residual hyphen cleanup is needed here.
pub fn render(tokens: &TokenSequence) -> String {
    tokens.iter().collect::<Vec<_>>().join("-")
}
