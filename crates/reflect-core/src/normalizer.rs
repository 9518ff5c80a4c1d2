//! Normalizer — reduces one decoded log record to a [`NormalizedEntry`].
//!
//! Two record shapes are recognised:
//!
//! - **Envelope**: a top-level `type` string naming the event
//!   (`test:pass`, `test:fail`, `test:skip`) with the payload under `data`.
//!   Older producers wrapped the payload one level deeper under a nested
//!   `data` or `test` key, so the payload is unwrapped at most once.
//! - **Legacy**: a flat mapping with a `status` of `pass`, `fail` or `skip`.
//!
//! [`classify`] picks exactly one [`RecordShape`] for a value; each shape
//! then has its own extractor. Name and duration extraction is shared and
//! never rejects a record.

use serde_json::{Map, Value};

use crate::types::{NormalizedEntry, Outcome};

/// How many times the envelope payload may be unwrapped.
pub const MAX_PAYLOAD_UNWRAP: usize = 1;

/// Keys that mark a mapping as the actual test payload.
const PAYLOAD_MARKERS: &[&str] = &["name", "duration_ms", "status", "ok", "details"];

/// Keys older envelope producers nested the payload under, in probe order.
const NESTED_PAYLOAD_KEYS: &[&str] = &["data", "test"];

/// Why a line or record did not produce an entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejected {
    #[error("line is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("unrecognised event type {0:?}")]
    UnknownEventType(String),
    #[error("record has no recognised status")]
    UnrecognizedStatus,
}

/// The single shape a raw record was classified into.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordShape<'a> {
    Envelope {
        outcome: Outcome,
        record: &'a Map<String, Value>,
    },
    Legacy {
        outcome: Outcome,
        record: &'a Map<String, Value>,
    },
    Unrecognized(Rejected),
}

/// Classify a decoded record. The presence of a string `type` selects the
/// envelope shape; there is no fallback to legacy parsing for unknown types.
pub fn classify(raw: &Value) -> RecordShape<'_> {
    let Some(record) = raw.as_object() else {
        return RecordShape::Unrecognized(Rejected::NotAnObject);
    };

    if let Some(kind) = record.get("type").and_then(Value::as_str) {
        return match Outcome::from_event_type(kind) {
            Some(outcome) => RecordShape::Envelope { outcome, record },
            None => RecordShape::Unrecognized(Rejected::UnknownEventType(kind.to_string())),
        };
    }

    match record
        .get("status")
        .and_then(Value::as_str)
        .and_then(Outcome::from_status)
    {
        Some(outcome) => RecordShape::Legacy { outcome, record },
        None => RecordShape::Unrecognized(Rejected::UnrecognizedStatus),
    }
}

/// Normalize one decoded record.
pub fn normalize(raw: &Value) -> Result<NormalizedEntry, Rejected> {
    match classify(raw) {
        RecordShape::Envelope { outcome, record } => Ok(extract_envelope(outcome, record)),
        RecordShape::Legacy { outcome, record } => Ok(extract_legacy(outcome, record)),
        RecordShape::Unrecognized(reason) => Err(reason),
    }
}

/// Decode and normalize one log line.
pub fn normalize_line(line: &str) -> Result<NormalizedEntry, Rejected> {
    let value: Value =
        serde_json::from_str(line).map_err(|e| Rejected::InvalidJson(e.to_string()))?;
    normalize(&value)
}

fn extract_envelope(outcome: Outcome, envelope: &Map<String, Value>) -> NormalizedEntry {
    match resolve_payload(envelope) {
        Some(payload) => entry_from_payload(payload, outcome),
        None => NormalizedEntry::new(String::new(), 0, outcome.is_failure()),
    }
}

fn extract_legacy(outcome: Outcome, record: &Map<String, Value>) -> NormalizedEntry {
    entry_from_payload(record, outcome)
}

fn entry_from_payload(payload: &Map<String, Value>, outcome: Outcome) -> NormalizedEntry {
    NormalizedEntry::new(
        extract_name(payload),
        extract_duration(payload),
        outcome.is_failure(),
    )
}

/// Find the mapping that carries the test fields of an envelope.
///
/// Starts at `data` and descends into a nested `data`/`test` mapping only
/// while the current mapping has none of the payload marker keys.
fn resolve_payload(envelope: &Map<String, Value>) -> Option<&Map<String, Value>> {
    let mut payload = envelope.get("data")?.as_object()?;
    for _ in 0..MAX_PAYLOAD_UNWRAP {
        if has_payload_marker(payload) {
            break;
        }
        let nested = NESTED_PAYLOAD_KEYS
            .iter()
            .find_map(|key| payload.get(*key).and_then(Value::as_object));
        match nested {
            Some(inner) => payload = inner,
            None => break,
        }
    }
    Some(payload)
}

fn has_payload_marker(map: &Map<String, Value>) -> bool {
    PAYLOAD_MARKERS.iter().any(|key| map.contains_key(*key))
}

/// `name` verbatim when it is a string, its JSON text otherwise, empty when
/// absent or `null`.
fn extract_name(payload: &Map<String, Value>) -> String {
    match payload.get("name") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// `duration_ms` on the payload, falling back to `details.duration_ms`.
fn extract_duration(payload: &Map<String, Value>) -> i64 {
    let value = present(payload.get("duration_ms")).or_else(|| {
        payload
            .get("details")
            .and_then(Value::as_object)
            .and_then(|details| present(details.get("duration_ms")))
    });
    value.map(duration_from_value).unwrap_or(0)
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Coerce a duration value to whole, non-negative milliseconds.
///
/// Numbers and numeric strings round half away from zero. Anything that is
/// not a finite number degrades to `0`.
pub fn duration_from_value(value: &Value) -> i64 {
    let millis = match value {
        Value::Number(n) => match n.as_i64() {
            Some(whole) => return whole.max(0),
            None => n.as_f64(),
        },
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match millis {
        Some(ms) if ms.is_finite() => (ms.round() as i64).max(0),
        _ => 0,
    }
}
