//! Frequency-based keyword extraction.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ExtractionError;
use crate::lexicon::Lexicon;
use crate::text;

use super::KeywordStrategy;

/// Maximum number of terms returned.
pub const FREQUENCY_MAX_TERMS: usize = 15;

/// Ranks alphabetic terms (3+ letters, stop words removed) by count.
#[derive(Debug, Clone)]
pub struct FrequencyKeywords {
    lexicon: Arc<Lexicon>,
}

impl FrequencyKeywords {
    /// Create a frequency extractor over `lexicon`'s stop words.
    pub const fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Most frequent terms across `texts`, ties in first-seen order.
    pub fn top_terms(&self, texts: &[&str]) -> Vec<String> {
        let mut first_seen: Vec<String> = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for text in texts {
            for term in text::alpha_terms(text) {
                if self.lexicon.is_stopword(&term) {
                    continue;
                }
                let count = counts.entry(term.clone()).or_insert(0);
                if *count == 0 {
                    first_seen.push(term);
                }
                *count += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = first_seen
            .into_iter()
            .map(|term| {
                let count = counts[&term];
                (term, count)
            })
            .collect();
        // Stable: equal counts keep first-seen order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(FREQUENCY_MAX_TERMS)
            .map(|(term, _)| term)
            .collect()
    }
}

impl KeywordStrategy for FrequencyKeywords {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn extract(&self, texts: &[&str]) -> Result<Vec<String>, ExtractionError> {
        Ok(self.top_terms(texts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FrequencyKeywords {
        FrequencyKeywords::new(Arc::new(Lexicon::default()))
    }

    #[test]
    fn ranks_by_count() {
        let terms = extractor().top_terms(&["screen battery battery", "battery screen case"]);
        assert_eq!(terms, vec!["battery", "screen", "case"]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let terms = extractor().top_terms(&["zebra apple mango"]);
        assert_eq!(terms, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn drops_stop_words_and_short_tokens() {
        let terms = extractor().top_terms(&["The phone is OK and it was my pick"]);
        assert_eq!(terms, vec!["phone", "pick"]);
    }

    #[test]
    fn caps_term_count() {
        let words: Vec<String> = (0..20)
            .map(|i| format!("term{}", char::from(b'a' + i)))
            .collect();
        let text = words.join(" ");
        // "terma" .. "termt" are all alphabetic 5-letter terms.
        let terms = extractor().top_terms(&[text.as_str()]);
        assert_eq!(terms.len(), FREQUENCY_MAX_TERMS);
        assert_eq!(terms[0], "terma");
    }

    #[test]
    fn empty_input() {
        assert!(extractor().top_terms(&[]).is_empty());
        assert!(extractor().top_terms(&[""]).is_empty());
    }
}
