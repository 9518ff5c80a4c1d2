//! Markdown rendering of the reflection report and the remediation checklist.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use reflect_core::RunStatistics;

const WHY_WHY_PROMPT: &str =
    "hypotheses = unstable preprocessing / dependency conflict / missing boundary cases";
const CHECKLIST_ITEM: &str = "add reproduction steps / preconditions / boundary values";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid report timestamp format {0:?}")]
    TimestampFormat(String),
    #[error("failed to format report: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Render the report body. Failing names appear once each under the
/// Why-Why section, in the order they first failed.
///
/// Fails when `timestamp_format` holds a specifier chrono does not know.
pub fn render_report(
    stats: &RunStatistics,
    generated_at: DateTime<Utc>,
    timestamp_format: &str,
) -> Result<String, RenderError> {
    let items = StrftimeItems::new(timestamp_format);
    if items.clone().any(|item| matches!(item, Item::Error)) {
        return Err(RenderError::TimestampFormat(timestamp_format.to_string()));
    }

    let mut out = String::new();
    writeln!(
        out,
        "# Reflection Report ({})\n",
        generated_at.format_with_items(items)
    )?;
    writeln!(out, "- Total tests: {}", stats.total)?;
    writeln!(out, "- Pass rate: {:.2}%", stats.pass_rate * 100.0)?;
    writeln!(out, "- Duration p95: {} ms", stats.p95_duration_ms)?;
    writeln!(out, "- Failures: {}", stats.failure_count())?;

    if stats.has_failures() {
        out.push_str("\n## Why-Why (draft)\n");
        for name in stats.distinct_failures() {
            writeln!(out, "- {name}: {WHY_WHY_PROMPT}")?;
        }
    }
    Ok(out)
}

/// Render the checklist, or `None` when the run had no failures.
pub fn render_checklist(stats: &RunStatistics) -> Option<String> {
    if !stats.has_failures() {
        return None;
    }
    let items: String = stats
        .distinct_failures()
        .into_iter()
        .map(|name| format!("- [ ] {name}: {CHECKLIST_ITEM}\n"))
        .collect();
    Some(format!("### Reflection TODO\n{items}"))
}
