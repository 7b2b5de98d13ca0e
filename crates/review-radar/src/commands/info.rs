//! Info command implementation

use clap::Args;
use owo_colors::{OwoColorize, Stream, Style};
use review_radar_core::config::{Config, ConfigSources};
use review_radar_core::{Lexicon, ReviewAnalyzer};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stopwords_file: Option<String>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_input_bytes: config.input_limit(),
            stopwords_file: config.stopwords_file.as_ref().map(|p| p.to_string()),
        }
    }
}

/// Effective pipeline settings.
#[derive(Serialize)]
struct AnalysisInfo {
    keyword_strategy: &'static str,
    classifiers: Vec<String>,
    attributes: Vec<String>,
}

impl AnalysisInfo {
    fn from_config(config: &Config) -> Self {
        let analyzer = ReviewAnalyzer::from_config(config);
        let mut lexicon = Lexicon::builder();
        if let Some(ref attributes) = config.attributes {
            lexicon = lexicon.with_attributes(attributes.clone());
        }
        Self {
            keyword_strategy: config.keyword_strategy.as_str(),
            classifiers: analyzer
                .classifier_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            attributes: lexicon.build().attributes().keys().cloned().collect(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
    analysis: AnalysisInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
        analysis: AnalysisInfo::from_config(config),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        full_info
            .package
            .name
            .if_supports_color(Stream::Stdout, |t| t.bold()),
        full_info
            .package
            .version
            .if_supports_color(Stream::Stdout, |t| t.green())
    );
    if !full_info.package.description.is_empty() {
        println!("{}", full_info.package.description);
    }
    if !full_info.package.license.is_empty() {
        println!("{}: {}", label("License"), full_info.package.license);
    }
    if !full_info.package.repository.is_empty() {
        println!(
            "{}: {}",
            label("Repository"),
            full_info
                .package
                .repository
                .if_supports_color(Stream::Stdout, |t| t.cyan())
        );
    }

    println!();
    println!("{}", heading("Configuration"));
    if let Some(ref path) = full_info.config.config_file {
        println!(
            "{}: {}",
            label("Config file"),
            path.if_supports_color(Stream::Stdout, |t| t.cyan())
        );
    } else {
        println!(
            "{}: {}",
            label("Config file"),
            "none loaded".if_supports_color(Stream::Stdout, |t| t.yellow())
        );
    }
    println!("{}: {}", label("Log level"), full_info.config.log_level);
    if let Some(ref dir) = full_info.config.log_dir {
        println!("{}: {}", label("Log directory"), dir);
    }
    match full_info.config.max_input_bytes {
        Some(max) => println!("{}: {} bytes", label("Input limit"), max),
        None => println!(
            "{}: {}",
            label("Input limit"),
            "disabled".if_supports_color(Stream::Stdout, |t| t.yellow())
        ),
    }
    if let Some(ref path) = full_info.config.stopwords_file {
        println!("{}: {}", label("Stop words"), path);
    }

    println!();
    println!("{}", heading("Analysis"));
    println!(
        "{}: {}",
        label("Keyword strategy"),
        full_info.analysis.keyword_strategy
    );
    println!(
        "{}: {}",
        label("Classifiers"),
        full_info.analysis.classifiers.join(" → ")
    );
    println!(
        "{}: {}",
        label("Attributes"),
        full_info.analysis.attributes.join(", ")
    );

    Ok(())
}

fn label(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.dimmed())
        .to_string()
}

fn heading(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| {
        t.style(Style::new().bold().underline())
    })
    .to_string()
}
