//! Writing the report and checklist artifacts to disk.
//!
//! The checklist only exists while the latest run has failures. A run
//! without failures must remove (or at least empty) any checklist left by a
//! previous run; if neither is possible the run fails.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use reflect_core::RunStatistics;

use crate::render::{render_checklist, render_report, RenderError};

/// Where the artifacts of one run go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub report: PathBuf,
    pub checklist: PathBuf,
}

/// What happened to the checklist artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistOutcome {
    /// Failures were found and the checklist was written.
    Written,
    /// A stale checklist was removed.
    Removed,
    /// A stale checklist could not be removed and was truncated instead.
    Emptied,
    /// No failures and no checklist to clear.
    Absent,
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to render report: {0}")]
    Render(#[from] RenderError),
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write report {path}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write checklist {path}: {source}")]
    WriteChecklist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to clear stale checklist {path} (remove: {remove}; truncate: {source})")]
    ClearChecklist {
        path: PathBuf,
        remove: io::Error,
        #[source]
        source: io::Error,
    },
}

/// Render and write the report, then write or clear the checklist.
pub fn write_artifacts(
    stats: &RunStatistics,
    paths: &ArtifactPaths,
    generated_at: DateTime<Utc>,
    timestamp_format: &str,
) -> Result<ChecklistOutcome, ArtifactError> {
    let report = render_report(stats, generated_at, timestamp_format)?;
    ensure_parent(&paths.report)?;
    std::fs::write(&paths.report, report).map_err(|source| ArtifactError::WriteReport {
        path: paths.report.clone(),
        source,
    })?;
    tracing::debug!(path = %paths.report.display(), "wrote report");

    match render_checklist(stats) {
        Some(checklist) => {
            ensure_parent(&paths.checklist)?;
            std::fs::write(&paths.checklist, checklist).map_err(|source| {
                ArtifactError::WriteChecklist {
                    path: paths.checklist.clone(),
                    source,
                }
            })?;
            tracing::debug!(path = %paths.checklist.display(), "wrote checklist");
            Ok(ChecklistOutcome::Written)
        }
        None => clear_checklist(&paths.checklist),
    }
}

/// Remove a stale checklist, falling back to truncating it.
pub fn clear_checklist(path: &Path) -> Result<ChecklistOutcome, ArtifactError> {
    clear_checklist_with(path, |path| std::fs::remove_file(path))
}

fn clear_checklist_with<F>(
    path: &Path,
    remove_file: F,
) -> Result<ChecklistOutcome, ArtifactError>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    let remove = match remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed stale checklist");
            return Ok(ChecklistOutcome::Removed);
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ChecklistOutcome::Absent),
        Err(e) => e,
    };

    tracing::warn!(
        path = %path.display(),
        error = %remove,
        "could not remove stale checklist; truncating"
    );
    match std::fs::write(path, "") {
        Ok(()) => Ok(ChecklistOutcome::Emptied),
        Err(source) => Err(ArtifactError::ClearChecklist {
            path: path.to_path_buf(),
            remove,
            source,
        }),
    }
}

fn ensure_parent(path: &Path) -> Result<(), ArtifactError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| ArtifactError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
