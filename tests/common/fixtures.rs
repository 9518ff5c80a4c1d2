//! Static log corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative log lines,
//! one JSON record (or deliberately broken line) per entry.

/// Flat records written by the older ad-hoc test scripts.
pub const CORPUS_LEGACY: &[&str] = &[
    r#"{"name":"parser::empty_input","status":"pass","duration_ms":3}"#,
    r#"{"name":"parser::unicode","status":"fail","duration_ms":41}"#,
    r#"{"name":"store::evict","status":"skip"}"#,
    r#"{"name":"store::flush","status":"pass","duration_ms":"17.2"}"#,
    r#"{"name":"store::replay","status":"fail","details":{"duration_ms":250}}"#,
];

/// Envelope records as emitted by the JSON test reporter, including event
/// kinds that are not test results.
pub const CORPUS_ENVELOPE: &[&str] = &[
    r#"{"type":"test:enqueue","data":{"name":"cli::help","nesting":0}}"#,
    r#"{"type":"test:start","data":{"name":"cli::help","nesting":0}}"#,
    r#"{"type":"test:pass","data":{"name":"cli::help","nesting":0,"details":{"duration_ms":12.31,"type":"test"}}}"#,
    r#"{"type":"test:diagnostic","data":{"message":"tests 2","nesting":0}}"#,
    r#"{"type":"test:fail","data":{"name":"cli::stdin","details":{"duration_ms":88.9,"error":{"name":"AssertionError"}}}}"#,
    r#"{"type":"test:pass","data":{"data":{"name":"serialize::map","duration_ms":5}}}"#,
    r#"{"type":"test:fail","data":{"test":{"name":"serialize::set","duration_ms":"7"}}}"#,
    r#"{"type":"test:plan","data":{"count":4}}"#,
];

/// Lines that must be skipped without affecting any statistic.
pub const CORPUS_MALFORMED: &[&str] = &[
    "{\"name\":\"truncated\",\"status\":\"pa",
    "not json at all",
    "[]",
    "42",
    "\"test:pass\"",
    "null",
    r#"{"status":"PASS","name":"wrong-case"}"#,
    r#"{"status":"bogus"}"#,
    r#"{"name":"no-status"}"#,
    r#"{"type":"pass","name":"bare-type"}"#,
];

/// Envelope events that carry no test result.
pub const CORPUS_NON_RESULT_EVENTS: &[&str] = &[
    r#"{"type":"test:start","data":{"name":"parser::empty_input","nesting":0}}"#,
    r#"{"type":"test:plan","data":{"count":3}}"#,
    r#"{"type":"test:diagnostic","data":{"message":"retrying","status":"pass"}}"#,
    r#"{"type":"test:enqueue","status":"fail","name":"queued"}"#,
];

/// A realistic log mixing both shapes with noise and blank lines.
pub const CORPUS_MIXED: &[&str] = &[
    r#"{"type":"test:start","data":{"name":"auth::login"}}"#,
    r#"{"type":"test:pass","data":{"name":"auth::login","details":{"duration_ms":20}}}"#,
    "",
    r#"{"name":"auth::logout","status":"fail","duration_ms":30}"#,
    "{garbage",
    r#"{"type":"test:fail","data":{"name":"auth::logout","duration_ms":40}}"#,
    "   ",
    r#"{"name":"auth::refresh","status":"pass","duration_ms":10.5}"#,
];

/// `n` legacy records named `case-{i}` with duration `i` ms; every
/// `fail_every`-th record fails (0 disables failures).
pub fn corpus_generated(n: usize, fail_every: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let status = if fail_every != 0 && i % fail_every == 0 {
                "fail"
            } else {
                "pass"
            };
            format!(r#"{{"name":"case-{i}","status":"{status}","duration_ms":{i}}}"#)
        })
        .collect()
}
