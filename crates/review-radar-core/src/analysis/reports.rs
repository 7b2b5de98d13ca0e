//! Report structs for review analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Field
//! names are the wire names consumers rely on.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::review::Review;
use crate::sentiment::{SentimentLabel, SentimentResult};

/// Complete analysis of one review batch.
///
/// The [`Default`] value is the canonical empty report: zero counts and
/// empty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// One entry per review with text, in input order.
    pub analyzed_reviews: Vec<AnalyzedReview>,
    /// Label distribution over analyzed reviews.
    pub sentiment_summary: SentimentSummary,
    /// Salient terms per sentiment class.
    pub keyword_insights: KeywordInsights,
    /// Per-attribute scores, best first.
    pub attributes: Vec<AttributeScore>,
    /// Ranked complaint themes.
    pub issues_overview: IssuesOverview,
}

// -- Analyzed Reviews -------------------------------------------------------

/// A review with its analysis attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzedReview {
    /// The input review, unchanged.
    #[serde(flatten)]
    pub review: Review,
    /// Predicted sentiment class.
    pub sentiment_label: SentimentLabel,
    /// Confidence of the prediction.
    pub sentiment_score: f64,
    /// Most frequent terms of this review (up to 5).
    pub extracted_keywords: Vec<String>,
    /// Attribute keys mentioned in this review.
    pub detected_attributes: BTreeSet<String>,
}

impl AnalyzedReview {
    /// The sentiment result attached to this review.
    pub const fn sentiment(&self) -> SentimentResult {
        SentimentResult {
            label: self.sentiment_label,
            score: self.sentiment_score,
        }
    }
}

// -- Sentiment Summary ------------------------------------------------------

/// Count and share of one sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LabelShare {
    /// Reviews with this label.
    pub count: usize,
    /// Percentage of analyzed reviews (1 decimal).
    pub percentage: f64,
}

/// Label distribution over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentSummary {
    /// Positive reviews.
    pub positive: LabelShare,
    /// Negative reviews.
    pub negative: LabelShare,
    /// Neutral reviews.
    pub neutral: LabelShare,
}

impl SentimentSummary {
    /// The share for `label`.
    pub const fn get(&self, label: SentimentLabel) -> &LabelShare {
        match label {
            SentimentLabel::Positive => &self.positive,
            SentimentLabel::Negative => &self.negative,
            SentimentLabel::Neutral => &self.neutral,
        }
    }

    /// Total reviews counted.
    pub const fn total(&self) -> usize {
        self.positive.count + self.negative.count + self.neutral.count
    }
}

// -- Keyword Insights -------------------------------------------------------

/// A salient term within one sentiment class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordStat {
    /// The term (a word or two-word phrase).
    pub term: String,
    /// Reviews in the class whose text contains the term.
    pub count: usize,
    /// `count` over the class size (3 decimals).
    pub weight: f64,
}

/// Salient terms of positive and negative reviews.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordInsights {
    /// Terms of positive reviews (up to 10).
    pub positive_keywords: Vec<KeywordStat>,
    /// Terms of negative reviews (up to 10).
    pub negative_keywords: Vec<KeywordStat>,
}

// -- Attributes -------------------------------------------------------------

/// Running label counts for one attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeStat {
    /// Mentions in positive reviews.
    pub positive: usize,
    /// Mentions in negative reviews.
    pub negative: usize,
    /// Mentions in neutral reviews.
    pub neutral: usize,
}

impl AttributeStat {
    /// Count one mention under `label`.
    pub const fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    /// Total mentions.
    pub const fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// `(100 * positive + 50 * neutral) / total`, unrounded; `None` without mentions.
    pub fn score(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Some((self.positive as f64 * 100.0 + self.neutral as f64 * 50.0) / total as f64)
    }
}

/// Score table row for one attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AttributeScore {
    /// Attribute key.
    pub key: String,
    /// Title-cased key for display.
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// 0 (all negative) to 100 (all positive), 1 decimal.
    pub score: f64,
    /// Mentions in positive reviews.
    pub positive_count: usize,
    /// Mentions in negative reviews.
    pub negative_count: usize,
    /// Mentions in neutral reviews.
    pub neutral_count: usize,
}

// -- Issues -----------------------------------------------------------------

/// A negative keyword promoted to a complaint theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    /// The complaint term.
    pub issue: String,
    /// Negative reviews mentioning it.
    pub mentions: usize,
    /// Share of negative reviews mentioning it (1 decimal).
    pub percent_of_negatives: f64,
}

/// Ranked complaint themes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IssuesOverview {
    /// Top complaint themes (up to 5).
    pub most_mentioned: Vec<Issue>,
}
