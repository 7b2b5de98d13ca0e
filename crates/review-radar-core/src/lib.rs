//! Core library for review-radar.
//!
//! This crate turns a batch of scraped product reviews into an analysis
//! report: per-review sentiment, keywords and attributes, plus corpus-level
//! sentiment distribution, keyword insights, attribute scores and issues.
//!
//! # Modules
//!
//! - [`analysis`] - The pipeline orchestrator and report types
//! - [`sentiment`] - Rule-based and pluggable sentiment classification
//! - [`keywords`] - Frequency and TF-IDF keyword extraction
//! - [`attributes`] - Product attribute tagging
//! - [`lexicon`] - Stop words, sentiment words and attribute keywords
//! - [`review`] - Review records and batch decoding
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use review_radar_core::{ConfigLoader, ReviewAnalyzer};
//!
//! let (config, _sources) = ConfigLoader::new()
//!     .with_user_config(true)
//!     .load()
//!     .expect("Failed to load configuration");
//!
//! let analyzer = ReviewAnalyzer::from_config(&config);
//! let report = analyzer
//!     .analyze_json(r#"[{"text": "Great battery, fast delivery"}]"#, config.input_limit())
//!     .expect("valid input");
//! println!("{}", report.sentiment_summary.positive.count);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod attributes;
pub mod config;
pub mod error;
pub mod keywords;
pub mod lexicon;
pub mod review;
mod rounding;
pub mod sentiment;
pub mod text;

pub use analysis::{AnalysisReport, ReviewAnalyzer};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult, InputError, InputResult};
pub use keywords::KeywordStrategyKind;
pub use lexicon::Lexicon;
pub use review::Review;
pub use sentiment::{SentimentChain, SentimentLabel, SentimentResult};
