//! Sentiment classification.
//!
//! Classification is a ranked chain of strategies behind one contract,
//! [`SentimentClassifier`]. Pluggable backends (for example
//! [`command::CommandClassifier`]) are tried first, in order; the
//! deterministic [`rules::RuleBasedClassifier`] always ends the chain.
//!
//! A backend either classifies the whole batch or is skipped entirely, so
//! results from different strategies are never mixed within one batch.

pub mod command;
pub mod rules;

use std::fmt;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;
use crate::lexicon::Lexicon;

use self::rules::RuleBasedClassifier;

/// Texts sent to a backend per call.
pub const CLASSIFIER_BATCH_SIZE: usize = 8;

/// Sentiment class of a text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Favourable.
    Positive,
    /// Unfavourable.
    Negative,
    /// Neither, or undecided.
    Neutral,
}

impl SentimentLabel {
    /// All labels in report order.
    pub const ALL: [Self; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// Returns the label as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Map a backend-specific label onto the three standard classes.
    ///
    /// `positive`, `pos` and `label_2` (three-class index 2) are positive;
    /// `negative`, `neg` and `label_0` are negative; anything else is
    /// neutral. Matching ignores case and surrounding whitespace.
    pub fn from_backend_label(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "positive" | "pos" | "label_2" => Self::Positive,
            "negative" | "neg" | "label_0" => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label plus confidence in `[0, 1]` for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentResult {
    /// Predicted class.
    pub label: SentimentLabel,
    /// Confidence of the prediction.
    pub score: f64,
}

impl SentimentResult {
    /// The result used when there is no evidence either way.
    pub const NEUTRAL: Self = Self {
        label: SentimentLabel::Neutral,
        score: 0.5,
    };
}

/// A sentiment classification capability.
pub trait SentimentClassifier {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Classify a batch of texts, returning one result per text in order.
    ///
    /// The chain never passes more than [`CLASSIFIER_BATCH_SIZE`] texts.
    fn classify_batch(&self, texts: &[&str]) -> Result<Vec<SentimentResult>, ClassifierError>;
}

/// Results of classifying a batch, and which strategy produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// One result per input text, in input order.
    pub results: Vec<SentimentResult>,
    /// Name of the strategy that produced every result.
    pub classifier: String,
}

/// Ranked list of classifiers ending in the rule-based fallback.
pub struct SentimentChain {
    backends: Vec<Box<dyn SentimentClassifier>>,
    fallback: RuleBasedClassifier,
}

impl fmt::Debug for SentimentChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.backends.iter().map(|b| b.name()).collect();
        f.debug_struct("SentimentChain")
            .field("backends", &names)
            .field("fallback", &self.fallback.name())
            .finish()
    }
}

impl SentimentChain {
    /// Create a chain with no backends: every batch is rule-classified.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            backends: Vec::new(),
            fallback: RuleBasedClassifier::new(lexicon),
        }
    }

    /// Append a backend; earlier backends take precedence.
    #[must_use]
    pub fn with_backend<C: SentimentClassifier + 'static>(mut self, backend: C) -> Self {
        self.backends.push(Box::new(backend));
        self
    }

    /// Names of the strategies in the order they are tried.
    pub fn strategy_names(&self) -> Vec<&str> {
        self.backends
            .iter()
            .map(|b| b.name())
            .chain(std::iter::once(self.fallback.name()))
            .collect()
    }

    /// Classify every text, falling back strategy by strategy on failure.
    #[tracing::instrument(skip_all, fields(texts = texts.len()))]
    pub fn classify(&self, texts: &[&str]) -> Classification {
        for backend in &self.backends {
            match run_in_batches(backend.as_ref(), texts) {
                Ok(results) => {
                    tracing::debug!(classifier = backend.name(), "sentiment backend succeeded");
                    return Classification {
                        results,
                        classifier: backend.name().to_string(),
                    };
                }
                Err(err) => {
                    tracing::warn!(
                        classifier = backend.name(),
                        error = %err,
                        "sentiment backend failed, trying next strategy"
                    );
                }
            }
        }

        Classification {
            results: texts.iter().map(|t| self.fallback.classify(t)).collect(),
            classifier: self.fallback.name().to_string(),
        }
    }
}

/// Run a classifier over `texts` in fixed-size sub-batches.
///
/// Any failure discards the results gathered so far.
fn run_in_batches(
    classifier: &dyn SentimentClassifier,
    texts: &[&str],
) -> Result<Vec<SentimentResult>, ClassifierError> {
    let mut results = Vec::with_capacity(texts.len());
    for chunk in texts.chunks(CLASSIFIER_BATCH_SIZE) {
        let batch = classifier.classify_batch(chunk)?;
        if batch.len() != chunk.len() {
            return Err(ClassifierError::BatchMismatch {
                expected: chunk.len(),
                actual: batch.len(),
            });
        }
        results.extend(batch);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Returns a fixed result per text and records sub-batch sizes.
    struct Stub {
        result: SentimentResult,
        calls: RefCell<Vec<usize>>,
    }

    impl Stub {
        fn new(label: SentimentLabel, score: f64) -> Self {
            Self {
                result: SentimentResult { label, score },
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl SentimentClassifier for Stub {
        fn name(&self) -> &str {
            "stub"
        }

        fn classify_batch(
            &self,
            texts: &[&str],
        ) -> Result<Vec<SentimentResult>, ClassifierError> {
            self.calls.borrow_mut().push(texts.len());
            Ok(vec![self.result; texts.len()])
        }
    }

    /// Fails on the second sub-batch.
    struct FlakyBackend {
        calls: RefCell<usize>,
    }

    impl SentimentClassifier for FlakyBackend {
        fn name(&self) -> &str {
            "flaky"
        }

        fn classify_batch(
            &self,
            texts: &[&str],
        ) -> Result<Vec<SentimentResult>, ClassifierError> {
            *self.calls.borrow_mut() += 1;
            if *self.calls.borrow() > 1 {
                return Err(ClassifierError::Backend("model crashed".into()));
            }
            Ok(vec![
                SentimentResult {
                    label: SentimentLabel::Positive,
                    score: 0.99,
                };
                texts.len()
            ])
        }
    }

    /// Always drops the last result.
    struct ShortBackend;

    impl SentimentClassifier for ShortBackend {
        fn name(&self) -> &str {
            "short"
        }

        fn classify_batch(
            &self,
            texts: &[&str],
        ) -> Result<Vec<SentimentResult>, ClassifierError> {
            Ok(vec![SentimentResult::NEUTRAL; texts.len().saturating_sub(1)])
        }
    }

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(Lexicon::default())
    }

    #[test]
    fn normalizes_backend_labels() {
        use SentimentLabel::*;
        for (raw, expected) in [
            ("POSITIVE", Positive),
            ("pos", Positive),
            ("LABEL_2", Positive),
            ("negative", Negative),
            (" Neg ", Negative),
            ("label_0", Negative),
            ("LABEL_1", Neutral),
            ("neutral", Neutral),
            ("mixed", Neutral),
            ("", Neutral),
        ] {
            assert_eq!(SentimentLabel::from_backend_label(raw), expected, "{raw}");
        }
    }

    #[test]
    fn label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }

    #[test]
    fn chain_without_backends_uses_rules() {
        let chain = SentimentChain::new(lexicon());
        let out = chain.classify(&["I love it", "awful"]);
        assert_eq!(out.classifier, "rules");
        assert_eq!(out.results[0].label, SentimentLabel::Positive);
        assert_eq!(out.results[1].label, SentimentLabel::Negative);
    }

    #[test]
    fn backend_results_used_when_backend_succeeds() {
        let chain =
            SentimentChain::new(lexicon()).with_backend(Stub::new(SentimentLabel::Neutral, 0.42));
        let out = chain.classify(&["I love it"]);
        assert_eq!(out.classifier, "stub");
        assert_eq!(out.results[0].label, SentimentLabel::Neutral);
        assert_eq!(out.results[0].score, 0.42);
    }

    #[test]
    fn backend_receives_sub_batches_of_eight() {
        let texts = vec!["text"; 19];
        let stub = Stub::new(SentimentLabel::Positive, 0.9);
        let out = run_in_batches(&stub, &texts).unwrap();
        assert_eq!(out.len(), 19);
        assert_eq!(*stub.calls.borrow(), vec![8, 8, 3]);
    }

    #[test]
    fn empty_batch_never_calls_backend() {
        let stub = Stub::new(SentimentLabel::Positive, 0.9);
        let out = run_in_batches(&stub, &[]).unwrap();
        assert!(out.is_empty());
        assert!(stub.calls.borrow().is_empty());
    }

    #[test]
    fn partial_failure_falls_back_for_whole_batch() {
        let chain = SentimentChain::new(lexicon()).with_backend(FlakyBackend {
            calls: RefCell::new(0),
        });
        let texts = vec!["terrible"; 10];
        let out = chain.classify(&texts);
        assert_eq!(out.classifier, "rules");
        assert!(
            out.results
                .iter()
                .all(|r| r.label == SentimentLabel::Negative)
        );
    }

    #[test]
    fn mismatched_batch_falls_back() {
        let chain = SentimentChain::new(lexicon()).with_backend(ShortBackend);
        let out = chain.classify(&["great", "bad"]);
        assert_eq!(out.classifier, "rules");
        assert_eq!(out.results.len(), 2);
    }

    #[test]
    fn later_backend_used_when_earlier_fails() {
        let chain = SentimentChain::new(lexicon())
            .with_backend(ShortBackend)
            .with_backend(Stub::new(SentimentLabel::Negative, 0.7));
        assert_eq!(chain.strategy_names(), vec!["short", "stub", "rules"]);
        let out = chain.classify(&["great", "fine"]);
        assert_eq!(out.classifier, "stub");
    }
}
