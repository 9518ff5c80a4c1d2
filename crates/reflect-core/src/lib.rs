//! reflect-core — test-run log normalization and statistics.
//!
//! This crate exposes the pipeline stages as public modules, plus the shared
//! types used across them.
//!
//! # Architecture
//!
//! ```text
//! Ingest ──► Normalizer ──► Aggregator ──► Percentile
//!  (lines)    (entry | rejected)  (running totals)   (p95)
//! ```
//!
//! Everything runs in a single synchronous pass over one log; each run starts
//! from an empty [`Aggregator`].

pub mod aggregate;
pub mod config;
pub mod ingest;
pub mod normalizer;
pub mod percentile;
pub mod types;

pub use aggregate::{aggregate, Aggregator};
pub use ingest::{analyze_file, Analysis, IngestError, IngestSummary};
pub use normalizer::{normalize, normalize_line, Rejected};
pub use percentile::p95;
pub use types::{NormalizedEntry, Outcome, RunStatistics};
