//! reflect-report — the output side of reflect.
//!
//! Renders [`RunStatistics`](reflect_core::RunStatistics) as a Markdown
//! reflection report and, when there were failures, a remediation checklist.
//! [`write_artifacts`] puts both on disk and clears a checklist left behind by
//! an earlier failing run.

pub mod artifacts;
pub mod render;

pub use artifacts::{
    clear_checklist, write_artifacts, ArtifactError, ArtifactPaths, ChecklistOutcome,
};
pub use render::{render_checklist, render_report, RenderError};
