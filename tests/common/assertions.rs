//! Domain-specific assertion macros for reflect harnesses.
//!
//! These add context-rich failure messages that make it clear which record
//! or statistic broke, instead of a bare `left != right`.

/// Assert that a raw line normalizes to the expected triple.
///
/// ```rust
/// assert_normalizes!(r#"{"status":"pass","name":"a","duration_ms":10}"#, "a", 10, false);
/// ```
#[macro_export]
macro_rules! assert_normalizes {
    ($line:expr, $name:expr, $duration:expr, $is_failure:expr) => {{
        let line: &str = $line;
        match reflect_core::normalize_line(line) {
            Ok(entry) => {
                let expected = reflect_core::NormalizedEntry::new($name, $duration, $is_failure);
                if entry != expected {
                    panic!(
                        "assert_normalizes! failed:\n  line:     {}\n  expected: {:?}\n  actual:   {:?}",
                        line, expected, entry
                    );
                }
            }
            Err(reason) => panic!(
                "assert_normalizes! failed: line was rejected ({})\n  line: {}",
                reason, line
            ),
        }
    }};
}

/// Assert that a raw line is dropped by the normalizer.
#[macro_export]
macro_rules! assert_rejected {
    ($line:expr) => {{
        let line: &str = $line;
        if let Ok(entry) = reflect_core::normalize_line(line) {
            panic!(
                "assert_rejected! failed: line was accepted as {:?}\n  line: {}",
                entry, line
            );
        }
    }};
}

/// Assert the headline numbers of a [`RunStatistics`](reflect_core::RunStatistics).
///
/// ```rust
/// assert_stats!(stats, total = 4, failures = 1, p95 = 48);
/// ```
#[macro_export]
macro_rules! assert_stats {
    ($stats:expr, total = $total:expr, failures = $failures:expr, p95 = $p95:expr) => {{
        let stats: &reflect_core::RunStatistics = &$stats;
        let actual = (stats.total, stats.failure_count(), stats.p95_duration_ms);
        let expected = ($total, $failures, $p95);
        if actual != expected {
            panic!(
                "assert_stats! failed:\n  expected (total, failures, p95): {:?}\n  actual:                          {:?}\n  failures: {:?}",
                expected, actual, stats.failures
            );
        }
    }};
}

/// Assert the pass-rate invariant `(total - failures) / total`, or the
/// empty-run default.
pub fn assert_pass_rate_invariant(stats: &reflect_core::RunStatistics) {
    let expected = if stats.total == 0 {
        reflect_core::aggregate::EMPTY_RUN_PASS_RATE
    } else {
        (stats.total - stats.failure_count()) as f64 / stats.total as f64
    };
    assert!(
        (stats.pass_rate - expected).abs() < 1e-12,
        "pass rate {} does not match {} for total {} and {} failures",
        stats.pass_rate,
        expected,
        stats.total,
        stats.failure_count()
    );
}
