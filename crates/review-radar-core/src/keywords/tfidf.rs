//! TF-IDF keyword extraction over unigrams and bigrams.
//!
//! Conventions:
//! - terms are runs of 2+ word characters, lowercased, English stop words
//!   removed; bigrams join adjacent surviving terms
//! - raw counts as term frequency, smoothed idf `ln((1 + n) / (1 + df)) + 1`
//! - each document row is L2-normalized
//! - terms in more than 80% of documents are pruned, then the 15 most
//!   frequent survive
//! - terms are ranked by their mean weight over all documents

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::ExtractionError;
use crate::lexicon::Lexicon;
use crate::text;

use super::KeywordStrategy;

/// Maximum number of candidate terms kept after pruning.
pub const TFIDF_MAX_FEATURES: usize = 15;

/// Maximum share of documents a term may appear in.
pub const TFIDF_MAX_DF: f64 = 0.8;

/// Minimum number of documents a term must appear in.
pub const TFIDF_MIN_DF: usize = 1;

/// Term-weighting keyword extractor.
#[derive(Debug, Clone)]
pub struct TfIdfKeywords {
    lexicon: Arc<Lexicon>,
}

impl TfIdfKeywords {
    /// Create a TF-IDF extractor.
    pub const fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Unigrams followed by bigrams of one document.
    fn analyze(&self, text: &str) -> Vec<String> {
        let unigrams: Vec<String> = text::index_terms(text)
            .into_iter()
            .filter(|t| !self.lexicon.is_english_stop_word(t))
            .collect();
        let bigrams: Vec<String> = unigrams
            .windows(2)
            .map(|pair| format!("{} {}", pair[0], pair[1]))
            .collect();
        unigrams.into_iter().chain(bigrams).collect()
    }

    /// Candidate terms with their mean weight, best first.
    pub fn weighted_terms(&self, texts: &[&str]) -> Result<Vec<(String, f64)>, ExtractionError> {
        if texts.is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        let docs: Vec<BTreeMap<String, usize>> = texts
            .iter()
            .map(|t| {
                let mut counts = BTreeMap::new();
                for term in self.analyze(t) {
                    *counts.entry(term).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        let mut corpus_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in &docs {
            for (term, count) in doc {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
                *corpus_freq.entry(term.as_str()).or_insert(0) += count;
            }
        }
        if doc_freq.is_empty() {
            return Err(ExtractionError::EmptyVocabulary);
        }

        let n = docs.len();
        let max_docs = TFIDF_MAX_DF * n as f64;
        if max_docs < TFIDF_MIN_DF as f64 {
            return Err(ExtractionError::InvalidDocumentBounds {
                max_docs,
                min_docs: TFIDF_MIN_DF,
            });
        }

        let mut vocabulary: Vec<&str> = doc_freq
            .iter()
            .filter(|&(_, &df)| df as f64 <= max_docs && df >= TFIDF_MIN_DF)
            .map(|(term, _)| *term)
            .collect();
        if vocabulary.is_empty() {
            return Err(ExtractionError::NoTermsRemain);
        }

        // Keep the most frequent terms, ties alphabetical, then restore
        // alphabetical vocabulary order.
        vocabulary.sort_by(|a, b| corpus_freq[b].cmp(&corpus_freq[a]).then_with(|| a.cmp(b)));
        vocabulary.truncate(TFIDF_MAX_FEATURES);
        vocabulary.sort_unstable();

        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| ((1 + n) as f64 / (1 + doc_freq[term]) as f64).ln() + 1.0)
            .collect();

        let mut sums = vec![0.0_f64; vocabulary.len()];
        for doc in &docs {
            let row: Vec<f64> = vocabulary
                .iter()
                .zip(&idf)
                .map(|(term, idf)| doc.get(*term).copied().unwrap_or(0) as f64 * idf)
                .collect();
            let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (sum, w) in sums.iter_mut().zip(&row) {
                    *sum += w / norm;
                }
            }
        }

        let mut ranked: Vec<(String, f64)> = vocabulary
            .into_iter()
            .zip(sums)
            .map(|(term, sum)| (term.to_string(), sum / n as f64))
            .collect();
        // Stable: equal weights stay alphabetical.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        Ok(ranked)
    }
}

impl KeywordStrategy for TfIdfKeywords {
    fn name(&self) -> &'static str {
        "tfidf"
    }

    fn extract(&self, texts: &[&str]) -> Result<Vec<String>, ExtractionError> {
        Ok(self
            .weighted_terms(texts)?
            .into_iter()
            .map(|(term, _)| term)
            .collect())
    }
}
