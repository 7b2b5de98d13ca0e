//! Corpus-level aggregation of analyzed reviews.

use crate::keywords::KeywordExtractor;
use crate::rounding::{round1, round3};
use crate::sentiment::SentimentLabel;
use crate::text;

use super::reports::{
    AnalysisReport, AnalyzedReview, AttributeScore, AttributeStat, Issue, IssuesOverview,
    KeywordInsights, KeywordStat, LabelShare, SentimentSummary,
};

/// Keywords reported per sentiment class.
pub const INSIGHT_KEYWORDS: usize = 10;

/// Negative keywords promoted to issues.
pub const TOP_ISSUES: usize = 5;

/// Fold analyzed reviews into a full report.
#[tracing::instrument(skip_all, fields(reviews = reviews.len()))]
pub fn aggregate(reviews: Vec<AnalyzedReview>, extractor: &KeywordExtractor) -> AnalysisReport {
    let sentiment_summary = sentiment_summary(&reviews);
    let keyword_insights = keyword_insights(&reviews, extractor);
    let attributes = attribute_scores(&reviews);
    let most_mentioned = top_issues(&keyword_insights.negative_keywords);

    AnalysisReport {
        analyzed_reviews: reviews,
        sentiment_summary,
        keyword_insights,
        attributes,
        issues_overview: IssuesOverview { most_mentioned },
    }
}

/// Count and percentage of each label.
pub fn sentiment_summary(reviews: &[AnalyzedReview]) -> SentimentSummary {
    let total = reviews.len();
    let share = |label: SentimentLabel| {
        let count = reviews
            .iter()
            .filter(|r| r.sentiment_label == label)
            .count();
        let percentage = if total == 0 {
            0.0
        } else {
            round1(count as f64 / total as f64 * 100.0)
        };
        LabelShare { count, percentage }
    };

    SentimentSummary {
        positive: share(SentimentLabel::Positive),
        negative: share(SentimentLabel::Negative),
        neutral: share(SentimentLabel::Neutral),
    }
}

/// Score every mentioned attribute, best first.
///
/// Equal scores keep the order in which attributes were first mentioned.
pub fn attribute_scores(reviews: &[AnalyzedReview]) -> Vec<AttributeScore> {
    let mut stats: Vec<(&str, AttributeStat)> = Vec::new();
    for review in reviews {
        for key in &review.detected_attributes {
            let idx = match stats.iter().position(|(k, _)| *k == key.as_str()) {
                Some(idx) => idx,
                None => {
                    stats.push((key.as_str(), AttributeStat::default()));
                    stats.len() - 1
                }
            };
            stats[idx].1.record(review.sentiment_label);
        }
    }

    let mut scores: Vec<AttributeScore> = stats
        .into_iter()
        .filter_map(|(key, stat)| {
            let score = stat.score()?;
            Some(AttributeScore {
                key: key.to_string(),
                display_name: text::display_name(key),
                score: round1(score),
                positive_count: stat.positive,
                negative_count: stat.negative,
                neutral_count: stat.neutral,
            })
        })
        .collect();
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores
}

/// Top terms of the positive and negative subsets.
pub fn keyword_insights(reviews: &[AnalyzedReview], extractor: &KeywordExtractor) -> KeywordInsights {
    KeywordInsights {
        positive_keywords: class_keywords(reviews, SentimentLabel::Positive, extractor),
        negative_keywords: class_keywords(reviews, SentimentLabel::Negative, extractor),
    }
}

fn class_keywords(
    reviews: &[AnalyzedReview],
    label: SentimentLabel,
    extractor: &KeywordExtractor,
) -> Vec<KeywordStat> {
    let texts: Vec<&str> = reviews
        .iter()
        .filter(|r| r.sentiment_label == label && r.review.has_text())
        .map(|r| r.review.text.as_str())
        .collect();
    if texts.is_empty() {
        return Vec::new();
    }

    let lowered: Vec<String> = texts.iter().map(|t| t.to_lowercase()).collect();
    extractor
        .extract(&texts)
        .into_iter()
        .take(INSIGHT_KEYWORDS)
        .map(|term| {
            let needle = term.to_lowercase();
            let count = lowered.iter().filter(|t| t.contains(&needle)).count();
            KeywordStat {
                term,
                count,
                weight: round3(count as f64 / texts.len() as f64),
            }
        })
        .collect()
}

/// Reframe the leading negative keywords as issues.
pub fn top_issues(negative_keywords: &[KeywordStat]) -> Vec<Issue> {
    negative_keywords
        .iter()
        .take(TOP_ISSUES)
        .map(|k| Issue {
            issue: k.term.clone(),
            mentions: k.count,
            percent_of_negatives: round1(k.weight * 100.0),
        })
        .collect()
}
