//! reflect — summarise a JSONL test-run log.
//!
//! One batch pass reads the test log, normalizes every recognised test event,
//! computes the run statistics and writes a Markdown reflection report. When
//! tests failed it also writes a remediation checklist; otherwise any
//! checklist left by an earlier run is cleared.
//!
//! # Architecture
//!
//! ```text
//! log ──► reflect_core (ingest ─► normalize ─► aggregate ─► p95)
//!                                                   │
//!                                                   ▼
//!                                  reflect_report (report, checklist)
//! ```
//!
//! All locations come from [`Config`]; nothing is read from process globals
//! once [`run`] is called.

use chrono::{DateTime, Utc};
use reflect_core::config::Config;
use reflect_core::{analyze_file, IngestSummary, RunStatistics};
use reflect_report::{write_artifacts, ArtifactPaths, ChecklistOutcome};

pub use reflect_core;
pub use reflect_report;

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub statistics: RunStatistics,
    pub summary: IngestSummary,
    pub checklist: ChecklistOutcome,
}

/// Analyse the configured log and write the artifacts.
pub fn run(config: &Config, generated_at: DateTime<Utc>) -> anyhow::Result<RunOutcome> {
    tracing::debug!(log = %config.paths.log.display(), "reading test log");
    let analysis = analyze_file(&config.paths.log)?;

    let paths = ArtifactPaths {
        report: config.paths.report.clone(),
        checklist: config.paths.checklist.clone(),
    };
    let checklist = write_artifacts(
        &analysis.statistics,
        &paths,
        generated_at,
        &config.report.timestamp_format,
    )?;
    tracing::info!(?checklist, report = %paths.report.display(), "artifacts written");

    Ok(RunOutcome {
        statistics: analysis.statistics,
        summary: analysis.summary,
        checklist,
    })
}
