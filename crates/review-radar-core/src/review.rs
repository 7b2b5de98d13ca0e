//! Review records and batch decoding.
//!
//! Reviews arrive from the scraper already extracted. Every field is
//! optional on the wire: missing or `null` strings become empty, missing or
//! `null` star ratings become 0.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{InputError, InputResult};

/// A single scraped product review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Review {
    /// Scraper-assigned identifier.
    #[serde(default, deserialize_with = "nullable")]
    #[schemars(with = "String")]
    pub id: String,
    /// Reviewer display name.
    #[serde(default, deserialize_with = "nullable")]
    #[schemars(with = "String")]
    pub author: String,
    /// Review date, as scraped (not parsed).
    #[serde(default, deserialize_with = "nullable")]
    #[schemars(with = "String")]
    pub date: String,
    /// Star rating, 0 when unknown.
    #[serde(default, deserialize_with = "nullable")]
    #[schemars(with = "f64")]
    pub stars: f64,
    /// Review body.
    #[serde(default, deserialize_with = "nullable")]
    #[schemars(with = "String")]
    pub text: String,
}

impl Review {
    /// Create a review with only its text set.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Whether this review has text to analyze.
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

/// Wire shapes accepted for a batch.
#[derive(Deserialize)]
#[serde(untagged)]
enum BatchInput {
    Bare(Vec<Review>),
    Envelope { reviews: Vec<Review> },
}

/// Decode a review batch from JSON.
///
/// Accepts a bare array of reviews or the scraper's `{"reviews": [...]}`
/// envelope. `limit` caps the input size in bytes.
#[tracing::instrument(skip(json), fields(input_len = json.len()))]
pub fn parse_batch(json: &str, limit: Option<usize>) -> InputResult<Vec<Review>> {
    if let Some(limit) = limit
        && json.len() > limit
    {
        return Err(InputError::TooLarge {
            size: json.len(),
            limit,
        });
    }

    let reviews = match serde_json::from_str::<BatchInput>(json) {
        Ok(BatchInput::Bare(reviews) | BatchInput::Envelope { reviews }) => reviews,
        Err(_) => {
            // Re-run against the bare shape for a precise error location.
            serde_json::from_str::<Vec<Review>>(json)?
        }
    };
    tracing::debug!(reviews = reviews.len(), "decoded review batch");
    Ok(reviews)
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
