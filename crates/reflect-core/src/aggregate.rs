//! Aggregator — folds [`NormalizedEntry`] values into [`RunStatistics`].

use crate::percentile::p95;
use crate::types::{NormalizedEntry, RunStatistics};

/// Pass rate reported for a run with no accepted records: no evidence of
/// passing.
pub const EMPTY_RUN_PASS_RATE: f64 = 0.0;

/// Running state of a single aggregation pass.
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    total: usize,
    durations: Vec<i64>,
    failure_names: Vec<String>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: NormalizedEntry) {
        self.total += 1;
        self.durations.push(entry.duration_ms);
        if entry.is_failure {
            self.failure_names.push(entry.name);
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn finish(self) -> RunStatistics {
        let pass_rate = if self.total == 0 {
            EMPTY_RUN_PASS_RATE
        } else {
            (self.total - self.failure_names.len()) as f64 / self.total as f64
        };
        RunStatistics {
            total: self.total,
            p95_duration_ms: p95(&self.durations),
            failures: self.failure_names,
            pass_rate,
        }
    }
}

impl Extend<NormalizedEntry> for Aggregator {
    fn extend<I: IntoIterator<Item = NormalizedEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}

/// Aggregate a sequence of entries in input order.
pub fn aggregate<I>(entries: I) -> RunStatistics
where
    I: IntoIterator<Item = NormalizedEntry>,
{
    let mut aggregator = Aggregator::new();
    aggregator.extend(entries);
    aggregator.finish()
}
