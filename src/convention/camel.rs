use crate::tokenizer::TokenSequence;
use unicode_segmentation::UnicodeSegmentation;

/// Join tokens as camelCase: first token as-is, each later token with its
/// first grapheme upper-cased and the remainder unchanged, no separator.
pub fn render(tokens: &TokenSequence) -> String {
    let mut out = String::new();

    for (i, token) in tokens.iter().enumerate() {
        if i == 0 {
            out.push_str(token);
        } else {
            push_capitalized(&mut out, token);
        }
    }

    out
}

fn push_capitalized(out: &mut String, token: &str) {
    if let Some(first) = token.graphemes(true).next() {
        out.extend(first.chars().flat_map(char::to_uppercase));
        out.push_str(&token[first.len()..]);
    }
}
