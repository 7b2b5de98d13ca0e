//! Review batch analysis.
//!
//! [`ReviewAnalyzer`] runs the full pipeline over a batch:
//! 1. drop reviews without text
//! 2. classify every remaining text once, through the sentiment chain
//! 3. tag attributes and extract per-review keywords
//! 4. aggregate the summary, keyword insights, attribute table and issues
//!
//! The aggregation steps are plain functions in [`aggregate`] and can be
//! called individually.

pub mod aggregate;
pub mod reports;

use std::sync::Arc;

pub use reports::AnalysisReport;

use crate::attributes::AttributeTagger;
use crate::config::Config;
use crate::error::InputResult;
use crate::keywords::{KeywordExtractor, KeywordStrategyKind};
use crate::lexicon::Lexicon;
use crate::review::{self, Review};
use crate::sentiment::command::CommandClassifier;
use crate::sentiment::{Classification, SentimentChain};

use self::reports::AnalyzedReview;

/// Keywords attached to each analyzed review.
pub const REVIEW_KEYWORDS: usize = 5;

/// The review analysis pipeline.
#[derive(Debug)]
pub struct ReviewAnalyzer {
    classifier: SentimentChain,
    tagger: AttributeTagger,
    keywords: KeywordExtractor,
}

impl Default for ReviewAnalyzer {
    fn default() -> Self {
        let lexicon = Arc::new(Lexicon::default());
        Self::new(
            Arc::clone(&lexicon),
            SentimentChain::new(lexicon),
            KeywordStrategyKind::default(),
        )
    }
}

impl ReviewAnalyzer {
    /// Assemble an analyzer from its parts.
    pub fn new(lexicon: Arc<Lexicon>, classifier: SentimentChain, keywords: KeywordStrategyKind) -> Self {
        Self {
            classifier,
            tagger: AttributeTagger::new(&lexicon),
            keywords: KeywordExtractor::new(lexicon, keywords),
        }
    }

    /// Build the analyzer described by `config`.
    ///
    /// A configured classifier command becomes the first sentiment backend.
    #[tracing::instrument(skip_all)]
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Lexicon::builder();
        if let Some(ref path) = config.stopwords_file {
            builder = builder.with_stopwords_file(path);
        }
        if let Some(ref attributes) = config.attributes {
            builder = builder.with_attributes(attributes.clone());
        }
        let lexicon = Arc::new(builder.build());

        let mut chain = SentimentChain::new(Arc::clone(&lexicon));
        if let Some(command) = config
            .classifier_command
            .as_deref()
            .and_then(CommandClassifier::from_argv)
        {
            tracing::debug!(program = command.program(), "using classifier command");
            chain = chain.with_backend(command);
        }

        Self::new(lexicon, chain, config.keyword_strategy)
    }

    /// Sentiment strategies in the order they are tried.
    pub fn classifier_names(&self) -> Vec<&str> {
        self.classifier.strategy_names()
    }

    /// Classify free texts with the sentiment chain.
    pub fn classify(&self, texts: &[&str]) -> Classification {
        self.classifier.classify(texts)
    }

    /// Analyze a batch of reviews.
    ///
    /// Reviews with empty text are skipped. A batch with no text yields
    /// [`AnalysisReport::default`].
    #[tracing::instrument(skip_all, fields(reviews = reviews.len()))]
    pub fn analyze(&self, reviews: &[Review]) -> AnalysisReport {
        let kept: Vec<&Review> = reviews.iter().filter(|r| r.has_text()).collect();
        if kept.is_empty() {
            tracing::debug!("no reviews with text, returning empty report");
            return AnalysisReport::default();
        }
        if kept.len() < reviews.len() {
            tracing::debug!(skipped = reviews.len() - kept.len(), "skipped reviews without text");
        }

        let texts: Vec<&str> = kept.iter().map(|r| r.text.as_str()).collect();
        let classification = self.classifier.classify(&texts);
        tracing::debug!(
            classifier = %classification.classifier,
            reviews = texts.len(),
            "classified reviews"
        );

        let analyzed: Vec<AnalyzedReview> = kept
            .into_iter()
            .zip(classification.results)
            .map(|(review, sentiment)| {
                let mut extracted_keywords = self.keywords.frequency().top_terms(&[review.text.as_str()]);
                extracted_keywords.truncate(REVIEW_KEYWORDS);
                AnalyzedReview {
                    review: review.clone(),
                    sentiment_label: sentiment.label,
                    sentiment_score: sentiment.score,
                    extracted_keywords,
                    detected_attributes: self.tagger.tag(&review.text),
                }
            })
            .collect();

        aggregate::aggregate(analyzed, &self.keywords)
    }

    /// Decode a JSON batch and analyze it.
    pub fn analyze_json(&self, json: &str, limit: Option<usize>) -> InputResult<AnalysisReport> {
        let reviews = review::parse_batch(json, limit)?;
        Ok(self.analyze(&reviews))
    }
}
