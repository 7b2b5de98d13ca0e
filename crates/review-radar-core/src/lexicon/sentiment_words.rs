//! Sentiment-bearing words for rule-based classification.
//!
//! The two sets are disjoint.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words that count toward a positive label.
pub static POSITIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "good",
        "great",
        "excellent",
        "amazing",
        "awesome",
        "fantastic",
        "wonderful",
        "perfect",
        "love",
        "like",
        "best",
        "brilliant",
        "outstanding",
        "superb",
        "impressive",
        "satisfied",
        "happy",
        "pleased",
        "recommend",
        "beautiful",
        "quality",
        "fast",
        "easy",
        "comfortable",
    ]
    .into_iter()
    .collect()
});

/// Words that count toward a negative label.
pub static NEGATIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "bad",
        "terrible",
        "awful",
        "horrible",
        "worst",
        "hate",
        "disappointing",
        "poor",
        "useless",
        "waste",
        "expensive",
        "slow",
        "difficult",
        "problem",
        "issue",
        "broken",
        "defective",
        "damaged",
        "regret",
        "disappointed",
        "angry",
        "frustrated",
        "annoying",
    ]
    .into_iter()
    .collect()
});
