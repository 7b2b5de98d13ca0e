//! Keyword extraction.
//!
//! Two interchangeable strategies implement [`KeywordStrategy`]:
//! - [`frequency::FrequencyKeywords`]: stop-word-filtered term counts, always available
//! - [`tfidf::TfIdfKeywords`]: unigram and bigram TF-IDF weighting
//!
//! [`KeywordExtractor`] tries its configured strategies in order and ends
//! with the frequency strategy when every other one fails.

pub mod frequency;
pub mod tfidf;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;
use crate::lexicon::Lexicon;

use self::frequency::FrequencyKeywords;
use self::tfidf::TfIdfKeywords;

/// A keyword extraction strategy: texts in, distinct terms out, best first.
pub trait KeywordStrategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Rank the salient terms of `texts`.
    fn extract(&self, texts: &[&str]) -> Result<Vec<String>, ExtractionError>;
}

/// Which keyword strategy is preferred for corpus-level extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum KeywordStrategyKind {
    /// TF-IDF weighting, falling back to frequency counts.
    #[default]
    Tfidf,
    /// Frequency counts only.
    Frequency,
}

impl KeywordStrategyKind {
    /// Returns the strategy as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tfidf => "tfidf",
            Self::Frequency => "frequency",
        }
    }
}

impl fmt::Display for KeywordStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ranked keyword strategies ending in frequency extraction.
pub struct KeywordExtractor {
    strategies: Vec<Box<dyn KeywordStrategy>>,
    fallback: FrequencyKeywords,
}

impl fmt::Debug for KeywordExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("KeywordExtractor")
            .field("strategies", &names)
            .field("fallback", &self.fallback.name())
            .finish()
    }
}

impl KeywordExtractor {
    /// Build the extractor for `kind`.
    pub fn new(lexicon: Arc<Lexicon>, kind: KeywordStrategyKind) -> Self {
        let strategies: Vec<Box<dyn KeywordStrategy>> = match kind {
            KeywordStrategyKind::Tfidf => vec![Box::new(TfIdfKeywords::new(Arc::clone(&lexicon)))],
            KeywordStrategyKind::Frequency => Vec::new(),
        };
        Self {
            strategies,
            fallback: FrequencyKeywords::new(lexicon),
        }
    }

    /// The always-available frequency strategy.
    pub const fn frequency(&self) -> &FrequencyKeywords {
        &self.fallback
    }

    /// Rank the salient terms of `texts`, falling back on failure.
    #[tracing::instrument(skip_all, fields(texts = texts.len()))]
    pub fn extract(&self, texts: &[&str]) -> Vec<String> {
        for strategy in &self.strategies {
            match strategy.extract(texts) {
                Ok(terms) => {
                    tracing::debug!(strategy = strategy.name(), terms = terms.len(), "keywords extracted");
                    return terms;
                }
                Err(err) => {
                    tracing::warn!(
                        strategy = strategy.name(),
                        error = %err,
                        "keyword strategy failed, using frequency counts"
                    );
                }
            }
        }
        self.fallback.top_terms(texts)
    }
}
