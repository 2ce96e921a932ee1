//! Shared components for CLI commands
//!
//! This module contains logging setup and rendering helpers used across the
//! command implementations.

use crate::app::models::MonthlySummary;
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use tracing::debug;

/// Set up structured logging from the command's verbosity flags
///
/// Log output goes to stderr so stdout stays clean for reports.
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ridership_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Serialize a report value as pretty-printed JSON
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::configuration(format!("Failed to serialize report: {}", e)))
}

/// Render a monthly summary as a human-readable table
pub fn render_summary_human(title: &str, summary: &MonthlySummary) -> String {
    let mut output = format!(
        "{}\n{}\n",
        title.bright_green().bold(),
        "=".repeat(title.len())
    );

    if summary.is_empty() {
        output.push_str("No CSV files were found or could be read.\n");
    } else {
        let label_width = summary.counts.keys().map(|k| k.len()).max().unwrap_or(0);
        for (label, count) in &summary.counts {
            output.push_str(&format!(
                "  {:<width$}  {:>12} trips\n",
                label,
                format_count(*count),
                width = label_width
            ));
        }
        output.push_str(&format!(
            "  {:<width$}  {:>12} trips\n",
            "Total",
            format_count(summary.total_trips()),
            width = label_width
        ));
    }

    if !summary.skipped.is_empty() {
        output.push_str(&format!(
            "\n{}\n",
            format!("Skipped {} file(s):", summary.skipped.len()).bright_yellow()
        ));
        for skip in &summary.skipped {
            output.push_str(&format!("  - {}: {}\n", skip.path.display(), skip.reason));
        }
    }

    output
}

/// Format a count with thousands separators
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }

    formatted
}
