//! Text tokenization shared by indexing and querying

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is not a letter or a digit separates terms
static SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\p{L}\p{N}]+").expect("separator regex is valid")
});

/// Split text into lowercase terms
pub fn tokenize(text: &str) -> Vec<String> {
    SEPARATOR
        .split(text)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
        .collect()
}
