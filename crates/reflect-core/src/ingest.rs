//! Ingest — reads a JSON Lines test log and feeds the [`Aggregator`].
//!
//! Each line is read as raw bytes and converted to UTF-8 lossily, so a
//! corrupt line can only ever be skipped, never abort the pass. Blank lines,
//! undecodable JSON and unrecognised records are counted and dropped.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::aggregate::Aggregator;
use crate::normalizer::{normalize_line, Rejected};
use crate::types::RunStatistics;

/// Line counts from one ingest pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    pub lines: usize,
    pub blank: usize,
    pub accepted: usize,
    /// Lines that were not valid JSON.
    pub malformed: usize,
    /// Valid JSON that matched neither record shape.
    pub rejected: usize,
}

impl IngestSummary {
    pub fn skipped(&self) -> usize {
        self.malformed + self.rejected
    }
}

/// Statistics of one log together with how its lines were handled.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub statistics: RunStatistics,
    pub summary: IngestSummary,
}

/// An error type for log ingestion. Only I/O failures surface; content
/// problems are skipped.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to open test log {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read test log: {0}")]
    Read(#[from] std::io::Error),
}

/// Feed every line of `reader` through the normalizer into `aggregator`.
pub fn ingest_reader<R>(
    mut reader: R,
    aggregator: &mut Aggregator,
) -> Result<IngestSummary, IngestError>
where
    R: BufRead,
{
    let mut summary = IngestSummary::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        summary.lines += 1;
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() {
            summary.blank += 1;
            continue;
        }
        match normalize_line(line) {
            Ok(entry) => {
                summary.accepted += 1;
                aggregator.push(entry);
            }
            Err(reason @ Rejected::InvalidJson(_)) => {
                summary.malformed += 1;
                tracing::debug!(line = summary.lines, %reason, "skipping malformed line");
            }
            Err(reason) => {
                summary.rejected += 1;
                tracing::trace!(line = summary.lines, %reason, "skipping unrecognised record");
            }
        }
    }
    Ok(summary)
}

/// Ingest the log at `path`. A missing file is an empty log.
pub fn ingest_file(
    path: &Path,
    aggregator: &mut Aggregator,
) -> Result<IngestSummary, IngestError> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "test log not found; treating as empty");
            return Ok(IngestSummary::default());
        }
        Err(source) => {
            return Err(IngestError::Open {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    ingest_reader(std::io::BufReader::new(file), aggregator)
}

/// Run a fresh aggregation pass over the log at `path`.
pub fn analyze_file(path: &Path) -> Result<Analysis, IngestError> {
    let mut aggregator = Aggregator::new();
    let summary = ingest_file(path, &mut aggregator)?;
    let statistics = aggregator.finish();
    tracing::info!(
        total = statistics.total,
        failures = statistics.failure_count(),
        skipped = summary.skipped(),
        "analysed test log"
    );
    Ok(Analysis { statistics, summary })
}
