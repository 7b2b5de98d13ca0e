//! Sentiment command: classify free texts.

use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use review_radar_core::{Config, ReviewAnalyzer, SentimentLabel};

use super::paint_label;

/// Arguments for the `sentiment` subcommand.
#[derive(Args, Debug)]
pub struct SentimentArgs {
    /// Texts to classify.
    #[arg(required = true)]
    pub texts: Vec<String>,
}

#[derive(Serialize)]
struct TextSentiment<'a> {
    text: &'a str,
    label: SentimentLabel,
    score: f64,
}

#[derive(Serialize)]
struct SentimentOutput<'a> {
    classifier: String,
    results: Vec<TextSentiment<'a>>,
}

/// Classify each text with the configured sentiment chain.
#[instrument(name = "cmd_sentiment", skip_all, fields(texts = args.texts.len()))]
pub fn cmd_sentiment(args: SentimentArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let analyzer = ReviewAnalyzer::from_config(config);
    let texts: Vec<&str> = args.texts.iter().map(String::as_str).collect();
    let classification = analyzer.classify(&texts);
    debug!(classifier = %classification.classifier, "executing sentiment command");

    let output = SentimentOutput {
        classifier: classification.classifier,
        results: texts
            .iter()
            .copied()
            .zip(classification.results)
            .map(|(text, result)| TextSentiment {
                text,
                label: result.label,
                score: result.score,
            })
            .collect(),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for item in &output.results {
        let label = paint_label(item.label, item.label.as_str());
        println!("{label}\t{:.2}\t{}", item.score, item.text);
    }
    Ok(())
}
