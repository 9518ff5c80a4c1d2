//! Core types for reflect-core.
//!
//! This module defines the data shared across the pipeline: the
//! [`Outcome`] of a single test event, the [`NormalizedEntry`] produced by
//! the normalizer, and the [`RunStatistics`] returned by the aggregator.

use serde::Serialize;

/// Result of a single recognised test event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Pass,
    Fail,
    Skip,
}

impl Outcome {
    /// Map an envelope `type` string (`test:pass`, `test:fail`, `test:skip`).
    pub fn from_event_type(kind: &str) -> Option<Self> {
        match kind {
            "test:pass" => Some(Outcome::Pass),
            "test:fail" => Some(Outcome::Fail),
            "test:skip" => Some(Outcome::Skip),
            _ => None,
        }
    }

    /// Map a legacy `status` string (`pass`, `fail`, `skip`). Case-sensitive.
    pub fn from_status(status: &str) -> Option<Self> {
        match status {
            "pass" => Some(Outcome::Pass),
            "fail" => Some(Outcome::Fail),
            "skip" => Some(Outcome::Skip),
            _ => None,
        }
    }

    pub fn is_failure(self) -> bool {
        self == Outcome::Fail
    }
}

/// A single test event reduced to the fields the statistics need.
///
/// Created by the normalizer from one raw record and consumed immediately by
/// the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEntry {
    /// Test name. Empty when the record carried none.
    pub name: String,
    /// Duration in whole milliseconds, never negative.
    pub duration_ms: i64,
    pub is_failure: bool,
}

impl NormalizedEntry {
    pub fn new(name: impl Into<String>, duration_ms: i64, is_failure: bool) -> Self {
        Self {
            name: name.into(),
            duration_ms,
            is_failure,
        }
    }
}

/// Aggregate result of one pass over the log.
///
/// `pass_rate` is `(total - failures.len()) / total`, or `0.0` for an empty
/// run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStatistics {
    pub total: usize,
    /// Failing test names in first-seen order; repeated failures repeat.
    pub failures: Vec<String>,
    pub pass_rate: f64,
    pub p95_duration_ms: i64,
}

impl RunStatistics {
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Each failing name once, in the order it first failed.
    pub fn distinct_failures(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.failures
            .iter()
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self {
            total: 0,
            failures: Vec::new(),
            pass_rate: crate::aggregate::EMPTY_RUN_PASS_RATE,
            p95_duration_ms: 0,
        }
    }
}
