//! Product attribute tagging.
//!
//! An attribute is mentioned when any of its keywords occurs as a
//! substring of the lowercased text. All keywords are matched in one
//! Aho-Corasick pass.

use std::collections::{BTreeMap, BTreeSet};

use aho_corasick::AhoCorasick;

use crate::lexicon::Lexicon;

/// Maps texts to the attributes they mention.
#[derive(Debug, Clone)]
pub struct AttributeTagger {
    /// `None` when the lexicon has no keywords at all.
    matcher: Option<AhoCorasick>,
    /// Attribute keys triggered by each pattern, by pattern index.
    owners: Vec<Vec<String>>,
}

impl AttributeTagger {
    /// Build a tagger from the lexicon's attribute map.
    pub fn new(lexicon: &Lexicon) -> Self {
        // A keyword shared by several attributes becomes one pattern.
        let mut by_keyword: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for (key, keywords) in lexicon.attributes() {
            for keyword in keywords {
                let owners = by_keyword.entry(keyword.as_str()).or_default();
                if !owners.contains(key) {
                    owners.push(key.clone());
                }
            }
        }

        let patterns: Vec<&str> = by_keyword.keys().copied().collect();
        let owners: Vec<Vec<String>> = by_keyword.into_values().collect();
        let matcher = if patterns.is_empty() {
            None
        } else {
            match AhoCorasick::new(&patterns) {
                Ok(ac) => Some(ac),
                Err(err) => {
                    tracing::warn!(error = %err, "attribute matcher unavailable");
                    None
                }
            }
        };

        Self { matcher, owners }
    }

    /// Attribute keys mentioned in `text`, each at most once.
    pub fn tag(&self, text: &str) -> BTreeSet<String> {
        let Some(ref matcher) = self.matcher else {
            return BTreeSet::new();
        };
        let lowered = text.to_lowercase();
        matcher
            .find_overlapping_iter(&lowered)
            .flat_map(|m| self.owners[m.pattern().as_usize()].iter().cloned())
            .collect()
    }
}
