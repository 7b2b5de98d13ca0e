//! Analyze command: sentiment, keyword and attribute analysis of a review batch.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use review_radar_core::analysis::reports::AttributeScore;
use review_radar_core::{AnalysisReport, Config, KeywordStrategyKind, ReviewAnalyzer, SentimentLabel};

use super::{paint_label, read_input};

/// Attribute rows shown in text output.
const SHOWN_ATTRIBUTES: usize = 5;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Review batch (JSON array or `{"reviews": [...]}`); `-` or omitted reads stdin.
    pub file: Option<Utf8PathBuf>,

    /// Corpus keyword strategy (overrides config).
    #[arg(long, value_enum)]
    pub keywords: Option<KeywordStrategyKind>,
}

impl AnalyzeArgs {
    /// Whether input comes from stdin.
    pub fn is_stdin(&self) -> bool {
        self.file.as_ref().is_none_or(|f| f.as_str() == "-")
    }

    fn source(&self) -> &str {
        if self.is_stdin() {
            "<stdin>"
        } else {
            self.file.as_ref().map_or("<stdin>", |f| f.as_str())
        }
    }
}

/// Analyze a review batch.
///
/// With `--json`, failures to read or decode the input are also reported
/// as an `{"error": ...}` document on stdout.
#[instrument(name = "cmd_analyze", skip_all, fields(source = args.source()))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(source = args.source(), keywords = ?args.keywords, "executing analyze command");

    let mut config = config.clone();
    if let Some(kind) = args.keywords {
        config.keyword_strategy = kind;
    }
    let analyzer = ReviewAnalyzer::from_config(&config);

    let report = match run(&args, &analyzer, max_input) {
        Ok(report) => report,
        Err(err) => {
            if global_json {
                let doc = serde_json::json!({ "error": format!("{err:#}") });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            }
            return Err(err);
        }
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(args.source(), &report);
    Ok(())
}

fn run(
    args: &AnalyzeArgs,
    analyzer: &ReviewAnalyzer,
    max_input: Option<usize>,
) -> anyhow::Result<AnalysisReport> {
    let path = args.file.as_deref();
    let content = read_input(path, max_input)?;
    analyzer
        .analyze_json(&content, max_input)
        .with_context(|| format!("failed to analyze {}", args.source()))
}

fn print_summary(source: &str, report: &AnalysisReport) {
    let summary = &report.sentiment_summary;
    println!(
        "{} ({} reviews analyzed)",
        source.if_supports_color(Stream::Stdout, |t| t.bold()),
        summary.total()
    );

    println!(
        "\n  {}",
        "Sentiment:".if_supports_color(Stream::Stdout, |t| t.cyan())
    );
    for label in SentimentLabel::ALL {
        let share = summary.get(label);
        let name = paint_label(label, &format!("{:<8}", label.as_str()));
        println!("    {name} {:>4}  ({:.1}%)", share.count, share.percentage);
    }

    if !report.attributes.is_empty() {
        println!(
            "\n  {}",
            "Attributes:".if_supports_color(Stream::Stdout, |t| t.cyan())
        );
        for attr in report.attributes.iter().take(SHOWN_ATTRIBUTES) {
            println!(
                "    {:<12} {}  (+{} / -{} / ={})",
                attr.display_name,
                colored_score(attr),
                attr.positive_count,
                attr.negative_count,
                attr.neutral_count,
            );
        }
    }

    let issues = &report.issues_overview.most_mentioned;
    if !issues.is_empty() {
        println!(
            "\n  {}",
            "Top issues:".if_supports_color(Stream::Stdout, |t| t.yellow())
        );
        for issue in issues {
            println!(
                "    {:<20} {} mentions ({:.1}% of negative reviews)",
                issue.issue, issue.mentions, issue.percent_of_negatives,
            );
        }
    }

    let praised = &report.keyword_insights.positive_keywords;
    if !praised.is_empty() {
        let terms: Vec<&str> = praised.iter().take(5).map(|k| k.term.as_str()).collect();
        println!(
            "\n  {} {}",
            "Praised:".if_supports_color(Stream::Stdout, |t| t.green()),
            terms.join(", ")
        );
    }
}

fn colored_score(attr: &AttributeScore) -> String {
    let text = format!("{:>5.1}", attr.score);
    if attr.score >= 70.0 {
        text.if_supports_color(Stream::Stdout, |t| t.green()).to_string()
    } else if attr.score >= 40.0 {
        text.if_supports_color(Stream::Stdout, |t| t.yellow()).to_string()
    } else {
        text.if_supports_color(Stream::Stdout, |t| t.red()).to_string()
    }
}
