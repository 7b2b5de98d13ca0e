//! Logging setup for the CLI.
//!
//! Human-readable logs go to stderr. When a log file or directory is
//! configured, every event is also written as a JSON line through a
//! non-blocking appender.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Explicit log file path.
pub const LOG_PATH_ENV: &str = "REVIEW_RADAR_LOG_PATH";

/// Log directory (file name defaults to [`DEFAULT_LOG_FILE`]).
pub const LOG_DIR_ENV: &str = "REVIEW_RADAR_LOG_DIR";

/// File name used inside a log directory.
pub const DEFAULT_LOG_FILE: &str = "review-radar.jsonl";

/// Where JSONL logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file; wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory receiving [`DEFAULT_LOG_FILE`].
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the log environment variables, using `config_log_dir` when
    /// `REVIEW_RADAR_LOG_DIR` is unset.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let from_env = |name: &str| {
            std::env::var_os(name)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        Self {
            log_path: from_env(LOG_PATH_ENV),
            log_dir: from_env(LOG_DIR_ENV).or(config_log_dir),
        }
    }

    /// Directory and file name of the JSONL log.
    pub fn log_file(&self) -> Option<(PathBuf, String)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            let name = path
                .file_name()
                .map_or_else(|| DEFAULT_LOG_FILE.to_string(), |n| n.to_string_lossy().into_owned());
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), DEFAULT_LOG_FILE.to_string()))
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` means errors only, each `-v`
/// raises the level one step, and `default_level` applies without flags.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the whole process.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match config.log_file() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, &name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_current_span(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_wins_over_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("/var/log/radar/run.jsonl")),
            log_dir: Some(PathBuf::from("/tmp/logs")),
        };
        let (dir, name) = config.log_file().unwrap();
        assert_eq!(dir, PathBuf::from("/var/log/radar"));
        assert_eq!(name, "run.jsonl");
    }

    #[test]
    fn log_dir_uses_default_file_name() {
        let config = ObservabilityConfig {
            log_path: None,
            log_dir: Some(PathBuf::from("/tmp/logs")),
        };
        let (dir, name) = config.log_file().unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/logs"));
        assert_eq!(name, DEFAULT_LOG_FILE);
    }

    #[test]
    fn bare_file_name_logs_to_current_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("radar.jsonl")),
            log_dir: None,
        };
        assert_eq!(config.log_file().unwrap().0, PathBuf::from("."));
    }

    #[test]
    fn no_file_logging_by_default() {
        assert!(ObservabilityConfig::default().log_file().is_none());
    }
}
