//! Dictionaries for review analysis.
//!
//! A [`Lexicon`] bundles the three read-only tables the pipeline consults:
//! stop words, positive/negative sentiment words, and the attribute keyword
//! map. It is built once (see [`LexiconBuilder`]) and shared immutably.
//!
//! External resources are optional. When a configured stop word file cannot
//! be read, the built-in list is used and a warning is logged; building a
//! lexicon never fails.

pub mod attributes;
pub mod sentiment_words;
pub mod stopwords;

use std::collections::{BTreeMap, HashSet};

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::LexiconError;

use self::attributes::DEFAULT_ATTRIBUTES;
use self::sentiment_words::{NEGATIVE_WORDS, POSITIVE_WORDS};
use self::stopwords::{BASIC_STOPWORDS, ENGLISH_STOP_WORDS};

/// Read-only word tables used by classification, extraction and tagging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    stopwords: HashSet<String>,
    attributes: BTreeMap<String, Vec<String>>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Lexicon {
    /// Start building a lexicon from the built-in tables.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Stop words dropped by frequency keyword extraction.
    pub const fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    /// Whether `word` (already lowercased) is a stop word.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Whether `word` (already lowercased) is an English stop word for term weighting.
    pub fn is_english_stop_word(&self, word: &str) -> bool {
        ENGLISH_STOP_WORDS.contains(word)
    }

    /// Whether `word` (already lowercased) counts toward a positive label.
    pub fn is_positive(&self, word: &str) -> bool {
        POSITIVE_WORDS.contains(word)
    }

    /// Whether `word` (already lowercased) counts toward a negative label.
    pub fn is_negative(&self, word: &str) -> bool {
        NEGATIVE_WORDS.contains(word)
    }

    /// Attribute key to trigger keywords, ordered by key.
    pub const fn attributes(&self) -> &BTreeMap<String, Vec<String>> {
        &self.attributes
    }
}

/// Builder for a [`Lexicon`].
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    stopwords_file: Option<Utf8PathBuf>,
    extra_attributes: BTreeMap<String, Vec<String>>,
}

impl LexiconBuilder {
    /// Replace the built-in stop words with a list read from `path`.
    ///
    /// One word per line; blank lines and lines starting with `#` are ignored.
    pub fn with_stopwords_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.stopwords_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Add attribute entries. An entry whose key matches a built-in
    /// attribute replaces that attribute's keywords.
    pub fn with_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        for (key, keywords) in attributes {
            self.extra_attributes
                .insert(key.into(), keywords.into_iter().map(Into::into).collect());
        }
        self
    }

    /// Build the lexicon, falling back to built-in tables where needed.
    #[tracing::instrument(skip_all, fields(stopwords_file = ?self.stopwords_file))]
    pub fn build(self) -> Lexicon {
        let stopwords = match self.stopwords_file.as_deref().map(load_word_list) {
            Some(Ok(words)) => {
                tracing::debug!(count = words.len(), "loaded external stop words");
                words
            }
            Some(Err(err)) => {
                tracing::warn!(error = %err, "using built-in stop words");
                builtin_stopwords()
            }
            None => builtin_stopwords(),
        };

        let mut attributes: BTreeMap<String, Vec<String>> = DEFAULT_ATTRIBUTES
            .iter()
            .map(|(key, keywords)| {
                (
                    (*key).to_string(),
                    keywords.iter().map(|k| (*k).to_string()).collect(),
                )
            })
            .collect();

        for (key, keywords) in self.extra_attributes {
            let key = key.trim().to_lowercase();
            let keywords: Vec<String> = keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
            if key.is_empty() || keywords.is_empty() {
                tracing::warn!(attribute = %key, "ignoring attribute without keywords");
                continue;
            }
            attributes.insert(key, keywords);
        }

        Lexicon {
            stopwords,
            attributes,
        }
    }
}

fn builtin_stopwords() -> HashSet<String> {
    BASIC_STOPWORDS.iter().map(|w| (*w).to_string()).collect()
}

fn load_word_list(path: &Utf8Path) -> Result<HashSet<String>, LexiconError> {
    let content =
        std::fs::read_to_string(path.as_std_path()).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let words: HashSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect();

    if words.is_empty() {
        return Err(LexiconError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_lexicon_uses_builtin_tables() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_stopword("the"));
        assert!(lexicon.is_positive("excellent"));
        assert!(lexicon.is_negative("terrible"));
        assert!(lexicon.attributes().contains_key("battery"));
        assert_eq!(lexicon.attributes().len(), 10);
    }

    #[test]
    fn missing_stopwords_file_falls_back_silently() {
        let lexicon = Lexicon::builder()
            .with_stopwords_file("/definitely/not/here/stopwords.txt")
            .build();
        assert_eq!(lexicon.stopwords().len(), BASIC_STOPWORDS.len());
    }

    #[test]
    fn external_stopwords_replace_builtin() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("stop.txt");
        fs::write(&path, "# custom list\nProduct\n\nitem\n").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let lexicon = Lexicon::builder().with_stopwords_file(&path).build();
        assert!(lexicon.is_stopword("product"));
        assert!(lexicon.is_stopword("item"));
        assert!(!lexicon.is_stopword("the"));
        assert_eq!(lexicon.stopwords().len(), 2);
    }

    #[test]
    fn empty_stopwords_file_falls_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("stop.txt");
        fs::write(&path, "# nothing here\n\n").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let lexicon = Lexicon::builder().with_stopwords_file(&path).build();
        assert!(lexicon.is_stopword("the"));
    }

    #[test]
    fn extra_attributes_extend_and_override() {
        let lexicon = Lexicon::builder()
            .with_attributes([
                ("Sound", vec!["Speaker", "volume"]),
                ("battery", vec!["mah"]),
                ("empty", vec![]),
            ])
            .build();

        assert_eq!(lexicon.attributes()["sound"], vec!["speaker", "volume"]);
        assert_eq!(lexicon.attributes()["battery"], vec!["mah"]);
        assert!(!lexicon.attributes().contains_key("empty"));
        assert_eq!(lexicon.attributes().len(), 11);
    }
}
