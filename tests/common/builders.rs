//! Test builders — ergonomic constructors for log files and configurations.
//!
//! These builders are designed for readability in tests, not for production
//! use. They panic on I/O failure rather than returning `Result`.

use std::path::{Path, PathBuf};

use reflect_core::config::Config;
use reflect_core::NormalizedEntry;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Workspace
// ---------------------------------------------------------------------------

/// A temporary directory laid out like a project: `logs/test.jsonl`,
/// `reports/today.md` and `reports/issue_suggestions.md`.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn log_path(&self) -> PathBuf {
        self.root().join("logs").join("test.jsonl")
    }

    pub fn report_path(&self) -> PathBuf {
        self.root().join("reports").join("today.md")
    }

    pub fn checklist_path(&self) -> PathBuf {
        self.root().join("reports").join("issue_suggestions.md")
    }

    /// Write `lines` to the log, one per line.
    pub fn write_log<S: AsRef<str>>(&self, lines: &[S]) -> &Self {
        let path = self.log_path();
        std::fs::create_dir_all(path.parent().unwrap()).expect("create logs dir");
        let body: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
        std::fs::write(&path, body.join("\n")).expect("write log");
        self
    }

    /// Leave a checklist behind as if an earlier run had failures.
    pub fn write_stale_checklist(&self) -> &Self {
        let path = self.checklist_path();
        std::fs::create_dir_all(path.parent().unwrap()).expect("create reports dir");
        std::fs::write(&path, "### Reflection TODO\n- [ ] old: stale\n").expect("write checklist");
        self
    }

    pub fn read_report(&self) -> String {
        std::fs::read_to_string(self.report_path()).expect("read report")
    }

    pub fn read_checklist(&self) -> Option<String> {
        std::fs::read_to_string(self.checklist_path()).ok()
    }

    /// Default configuration with every path pointed into this workspace.
    pub fn config(&self) -> Config {
        let mut config = Config::defaults();
        config.paths.log = self.log_path();
        config.paths.report = self.report_path();
        config.paths.checklist = self.checklist_path();
        config.report.timestamp_format = "%Y-%m-%d".to_string();
        config
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

pub fn passed(name: &str, duration_ms: i64) -> NormalizedEntry {
    NormalizedEntry::new(name, duration_ms, false)
}

pub fn failed(name: &str, duration_ms: i64) -> NormalizedEntry {
    NormalizedEntry::new(name, duration_ms, true)
}
