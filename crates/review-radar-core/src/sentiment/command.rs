//! External-process sentiment backend.
//!
//! Runs a configured command once per sub-batch. The command receives the
//! texts as a JSON array of strings on stdin and must print a JSON array of
//! `{"label": ..., "score": ...}` objects, one per text, on stdout. Labels
//! may be strings (`"POSITIVE"`, `"LABEL_2"`) or three-class indices (`2`).

use std::io::Write;
use std::process::{Command, Stdio};

use serde::Deserialize;

use crate::error::ClassifierError;
use crate::rounding::round3;

use super::{SentimentClassifier, SentimentLabel, SentimentResult};

/// Backend label as printed by the command.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Text(String),
    Index(i64),
}

impl RawLabel {
    fn normalize(&self) -> SentimentLabel {
        match self {
            Self::Text(label) => SentimentLabel::from_backend_label(label),
            Self::Index(index) => SentimentLabel::from_backend_label(&format!("label_{index}")),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPrediction {
    label: RawLabel,
    score: f64,
}

/// Sentiment backend that shells out to an external classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClassifier {
    program: String,
    args: Vec<String>,
}

impl CommandClassifier {
    /// Create a backend running `program` with `args`.
    pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Create a backend from a full argv; `None` when `argv` is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }

    /// The program this backend runs.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl SentimentClassifier for CommandClassifier {
    fn name(&self) -> &str {
        "command"
    }

    #[tracing::instrument(skip_all, fields(program = %self.program, texts = texts.len()))]
    fn classify_batch(&self, texts: &[&str]) -> Result<Vec<SentimentResult>, ClassifierError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ClassifierError::Unavailable(format!("{}: {e}", self.program)))?;

        let payload = serde_json::to_vec(texts)?;
        if let Some(mut stdin) = child.stdin.take()
            && let Err(e) = stdin.write_all(&payload)
        {
            drop(stdin);
            // Reap the child before reporting.
            let _ = child.kill();
            let _ = child.wait();
            return Err(e.into());
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClassifierError::Backend(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let predictions: Vec<RawPrediction> = serde_json::from_slice(&output.stdout)?;
        if predictions.len() != texts.len() {
            return Err(ClassifierError::BatchMismatch {
                expected: texts.len(),
                actual: predictions.len(),
            });
        }

        if let Some(bad) = predictions.iter().find(|p| !(0.0..=1.0).contains(&p.score)) {
            return Err(ClassifierError::Backend(format!(
                "{} returned score {} outside [0, 1]",
                self.program, bad.score
            )));
        }

        Ok(predictions
            .iter()
            .map(|p| SentimentResult {
                label: p.label.normalize(),
                score: round3(p.score),
            })
            .collect())
    }
}
