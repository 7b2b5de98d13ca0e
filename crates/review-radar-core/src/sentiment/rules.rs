//! Lexicon-based sentiment scoring.
//!
//! Counts positive and negative words among a text's tokens. The majority
//! side wins, with confidence `min(0.9, 0.6 + 2 * share)` where `share` is
//! that side's fraction of all tokens. Ties and empty texts are neutral at
//! 0.5.

use std::sync::Arc;

use crate::error::ClassifierError;
use crate::lexicon::Lexicon;
use crate::text;

use super::{SentimentClassifier, SentimentLabel, SentimentResult};

/// Confidence floor for a decided label.
pub const BASE_CONFIDENCE: f64 = 0.6;

/// Confidence ceiling for a decided label.
pub const MAX_CONFIDENCE: f64 = 0.9;

/// Multiplier applied to the winning side's token share.
pub const SHARE_WEIGHT: f64 = 2.0;

/// Deterministic classifier over the lexicon's sentiment word sets.
#[derive(Debug, Clone)]
pub struct RuleBasedClassifier {
    lexicon: Arc<Lexicon>,
}

impl RuleBasedClassifier {
    /// Create a classifier over `lexicon`.
    pub const fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Classify a single text.
    pub fn classify(&self, text: &str) -> SentimentResult {
        let tokens = text::word_tokens(text);
        let total = tokens.len();
        if total == 0 {
            return SentimentResult::NEUTRAL;
        }

        let pos = tokens.iter().filter(|t| self.lexicon.is_positive(t)).count();
        let neg = tokens.iter().filter(|t| self.lexicon.is_negative(t)).count();

        let (label, hits) = match pos.cmp(&neg) {
            std::cmp::Ordering::Greater => (SentimentLabel::Positive, pos),
            std::cmp::Ordering::Less => (SentimentLabel::Negative, neg),
            std::cmp::Ordering::Equal => return SentimentResult::NEUTRAL,
        };

        let share = hits as f64 / total as f64;
        SentimentResult {
            label,
            score: MAX_CONFIDENCE.min(BASE_CONFIDENCE + share * SHARE_WEIGHT),
        }
    }
}

impl SentimentClassifier for RuleBasedClassifier {
    fn name(&self) -> &str {
        "rules"
    }

    fn classify_batch(&self, texts: &[&str]) -> Result<Vec<SentimentResult>, ClassifierError> {
        Ok(texts.iter().map(|t| self.classify(t)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> RuleBasedClassifier {
        RuleBasedClassifier::new(Arc::new(Lexicon::default()))
    }

    #[test]
    fn empty_text_is_neutral() {
        let r = classifier().classify("");
        assert_eq!(r, SentimentResult::NEUTRAL);
        assert_eq!(classifier().classify("?!"), SentimentResult::NEUTRAL);
    }

    #[test]
    fn positive_majority() {
        // 3 positive of 5 tokens: 0.6 + 0.6 * 2 = 1.8, capped.
        let r = classifier().classify("Great battery life, excellent quality");
        assert_eq!(r.label, SentimentLabel::Positive);
        assert_eq!(r.score, 0.9);
    }

    #[test]
    fn negative_majority() {
        let r = classifier().classify("Terrible battery, very disappointing");
        assert_eq!(r.label, SentimentLabel::Negative);
        assert_eq!(r.score, 0.9);
    }

    #[test]
    fn confidence_below_cap_uses_share() {
        // 1 positive of 10 tokens.
        let text = "good one two three four five six seven eight nine";
        let r = classifier().classify(text);
        assert_eq!(r.label, SentimentLabel::Positive);
        assert_eq!(r.score, 0.6 + (1.0 / 10.0) * 2.0);
    }

    #[test]
    fn tie_is_neutral() {
        let r = classifier().classify("good but bad");
        assert_eq!(r, SentimentResult::NEUTRAL);
    }

    #[test]
    fn no_sentiment_words_is_neutral() {
        let r = classifier().classify("It arrived on Tuesday");
        assert_eq!(r, SentimentResult::NEUTRAL);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let r = classifier().classify("AWFUL");
        assert_eq!(r.label, SentimentLabel::Negative);
    }

    #[test]
    fn deterministic() {
        let c = classifier();
        let text = "Fast shipping but the case was broken and the manual was useless";
        assert_eq!(c.classify(text), c.classify(text));
    }

    #[test]
    fn batch_preserves_order() {
        let out = classifier()
            .classify_batch(&["love it", "hate it", "meh"])
            .unwrap();
        let labels: Vec<_> = out.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                SentimentLabel::Positive,
                SentimentLabel::Negative,
                SentimentLabel::Neutral
            ]
        );
    }
}
