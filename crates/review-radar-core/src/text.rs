//! Text tokenization utilities.
//!
//! Three tokenizers, one per consumer:
//! - [`word_tokens`] for rule-based sentiment scoring
//! - [`alpha_terms`] for frequency keyword extraction
//! - [`index_terms`] for TF-IDF term weighting
//!
//! All of them lowercase their output.

use regex::Regex;
use std::sync::LazyLock;

/// Word-boundary tokens of word characters.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

/// Alphabetic runs of three or more ASCII letters.
static ALPHA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").expect("valid regex"));

/// Runs of two or more word characters.
static INDEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

/// Split text into lowercase word tokens.
pub fn word_tokens(text: &str) -> Vec<String> {
    tokens_matching(&WORD_PATTERN, text)
}

/// Extract lowercase alphabetic terms of at least three letters.
pub fn alpha_terms(text: &str) -> Vec<String> {
    tokens_matching(&ALPHA_PATTERN, text)
}

/// Extract lowercase index terms (two or more word characters).
pub fn index_terms(text: &str) -> Vec<String> {
    tokens_matching(&INDEX_PATTERN, text)
}

fn tokens_matching(pattern: &Regex, text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    pattern
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Title-case an attribute key for display (`battery_life` → `Battery Life`).
pub fn display_name(key: &str) -> String {
    key.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_tokens_lowercase_and_split_punctuation() {
        let tokens = word_tokens("Great battery-life, 10/10!");
        assert_eq!(tokens, vec!["great", "battery", "life", "10", "10"]);
    }

    #[test]
    fn word_tokens_empty_input() {
        assert!(word_tokens("").is_empty());
        assert!(word_tokens("  ... !!").is_empty());
    }

    #[test]
    fn alpha_terms_skip_short_and_numeric() {
        let terms = alpha_terms("It is OK, 4K screen and a fab battery2");
        assert_eq!(terms, vec!["screen", "and", "fab"]);
    }

    #[test]
    fn index_terms_keep_two_character_tokens() {
        let terms = index_terms("A TV is ok");
        assert_eq!(terms, vec!["tv", "is", "ok"]);
    }

    #[test]
    fn display_name_title_cases() {
        assert_eq!(display_name("battery"), "Battery");
        assert_eq!(display_name("battery_life"), "Battery Life");
        assert_eq!(display_name("SOUND"), "Sound");
    }
}
