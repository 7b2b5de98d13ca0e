//! Error types for review-radar-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that reject a review batch before any analysis runs.
///
/// This is the only error class that fails a pipeline invocation; every
/// other failure is recovered inside the pipeline.
#[derive(Error, Debug)]
pub enum InputError {
    /// The batch is not a JSON array of reviews (or a `{"reviews": [...]}` envelope).
    #[error("invalid review batch: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The batch exceeds the configured input size limit.
    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// Size of the rejected input in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Result type alias using [`InputError`].
pub type InputResult<T> = Result<T, InputError>;

/// Failures of a pluggable sentiment backend.
///
/// These never reach the caller: the classifier chain logs them and falls
/// back to the next strategy.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// The backend could not be reached or started.
    #[error("classifier unavailable: {0}")]
    Unavailable(String),

    /// The backend ran but reported a failure.
    #[error("classifier backend failed: {0}")]
    Backend(String),

    /// The backend returned a different number of results than texts sent.
    #[error("classifier returned {actual} results for {expected} texts")]
    BatchMismatch {
        /// Number of texts in the sub-batch.
        expected: usize,
        /// Number of results the backend returned.
        actual: usize,
    },

    /// I/O failure while talking to the backend.
    #[error("classifier I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend output could not be decoded.
    #[error("undecodable classifier output: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures of a keyword extraction strategy.
#[derive(Error, Debug, PartialEq)]
pub enum ExtractionError {
    /// No texts were supplied.
    #[error("no texts to extract keywords from")]
    EmptyInput,

    /// Every token was a stop word.
    #[error("empty vocabulary; the texts only contain stop words")]
    EmptyVocabulary,

    /// The document-frequency bounds exclude every possible term.
    #[error("max document frequency {max_docs:.1} is below the minimum of {min_docs}")]
    InvalidDocumentBounds {
        /// Upper bound on documents containing a term.
        max_docs: f64,
        /// Lower bound on documents containing a term.
        min_docs: usize,
    },

    /// Document-frequency pruning removed every term.
    #[error("after pruning, no terms remain")]
    NoTermsRemain,
}

/// Failures loading an external lexicon resource.
///
/// Never surfaced: the lexicon falls back to its built-in sets.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The resource could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the resource.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The resource contained no entries.
    #[error("{path} contains no entries")]
    Empty {
        /// Path of the resource.
        path: Utf8PathBuf,
    },
}
