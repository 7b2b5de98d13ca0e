//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;
use owo_colors::{OwoColorize, Stream};
use review_radar_core::SentimentLabel;

pub mod analyze;
pub mod info;
pub mod sentiment;

/// Read command input from a file, or from stdin when `path` is `None` or `-`.
///
/// Files larger than `max_bytes` are rejected before they are read. Stdin is
/// read up to one byte past the limit so the overflow is detected before any
/// UTF-8 decoding.
pub fn read_input(path: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_str() != "-" => read_input_file(path, max_bytes),
        _ => read_bounded(std::io::stdin().lock(), "<stdin>", max_bytes),
    }
}

/// Read a stream to the end, failing once it exceeds `max_bytes`.
pub fn read_bounded<R: Read>(
    mut reader: R,
    source: &str,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    match max_bytes {
        Some(max) => reader.take(max as u64 + 1).read_to_end(&mut bytes),
        None => reader.read_to_end(&mut bytes),
    }
    .with_context(|| format!("failed to read {source}"))?;

    if let Some(max) = max_bytes
        && bytes.len() > max
    {
        anyhow::bail!("input too large: {source} exceeds {max} bytes");
    }
    String::from_utf8(bytes).with_context(|| format!("{source} is not valid UTF-8"))
}

/// Color a sentiment label for stdout, honoring `--color`.
pub(crate) fn paint_label(label: SentimentLabel, text: &str) -> String {
    match label {
        SentimentLabel::Positive => text.if_supports_color(Stream::Stdout, |t| t.green()).to_string(),
        SentimentLabel::Negative => text.if_supports_color(Stream::Stdout, |t| t.red()).to_string(),
        SentimentLabel::Neutral => text.if_supports_color(Stream::Stdout, |t| t.yellow()).to_string(),
    }
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}
