//! Parse LLM output into mock data

use crate::error::{GeneratorError, Result};
use crate::types::MockData;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Parse a model reply into mock data
///
/// Surrounding prose and markdown fences are ignored: the first balanced
/// JSON object or array that parses is used. With `count == 1` the result is
/// one record (the first element of an array); otherwise a list of records,
/// wrapping a lone object into a one-element list.
///
/// A bracket left open at the end of the reply ends the search, so a
/// truncated payload never yields one of its inner objects.
///
/// # Errors
///
/// - `NoValidJsonFound` when the reply holds no balanced object or array
/// - `MalformedJson` when balanced regions exist but none parse, or the
///   payload holds something other than objects
pub fn extract_payload(raw: &str, count: usize) -> Result<MockData> {
    let payload = find_json(raw)?;
    shape_payload(payload, count)
}

/// Top-level JSON value found in a reply
#[derive(Debug)]
enum Payload {
    Object(Map<String, Value>),
    Array(Vec<Value>),
}

/// Outcome of scanning from one opening bracket
#[derive(Debug, PartialEq, Eq)]
enum Scan {
    /// Byte offset just past the matching closer
    Closed(usize),
    /// Byte offset just past a closer that does not match
    Mismatched(usize),
    /// Text ended with brackets still open
    Unterminated,
}

/// Locate and parse the first balanced JSON value in `raw`
fn find_json(raw: &str) -> Result<Payload> {
    let mut last_error: Option<String> = None;
    let mut pos = 0;

    while let Some(found) = raw[pos..].find(['{', '[']) {
        let start = pos + found;

        let end = match balanced_end(raw, start) {
            Scan::Closed(end) => end,
            Scan::Mismatched(end) => {
                pos = end;
                continue;
            }
            Scan::Unterminated => {
                warn!("JSON payload at offset {} is never closed", start);
                break;
            }
        };

        let candidate = &raw[start..end];
        match parse_candidate(candidate) {
            Ok(payload) => {
                debug!("Found JSON payload at offset {} ({} chars)", start, candidate.len());
                return Ok(payload);
            }
            Err(e) => {
                warn!("Skipping unparseable JSON candidate at offset {}: {}", start, e);
                last_error = Some(e.to_string());
            }
        }
        pos = end;
    }

    match last_error {
        Some(error) => Err(GeneratorError::MalformedJson(error)),
        None => Err(GeneratorError::NoValidJsonFound),
    }
}

fn parse_candidate(candidate: &str) -> serde_json::Result<Payload> {
    if candidate.starts_with('{') {
        serde_json::from_str(candidate).map(Payload::Object)
    } else {
        serde_json::from_str(candidate).map(Payload::Array)
    }
}

/// Scan from the bracket at `start` to its matching closer
///
/// Brackets inside JSON strings are ignored and escapes are honored.
fn balanced_end(raw: &str, start: usize) -> Scan {
    let mut expected: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => expected.push('}'),
            '[' => expected.push(']'),
            '}' | ']' => {
                let end = start + offset + ch.len_utf8();
                if expected.pop() != Some(ch) {
                    return Scan::Mismatched(end);
                }
                if expected.is_empty() {
                    return Scan::Closed(end);
                }
            }
            _ => {}
        }
    }

    Scan::Unterminated
}

fn shape_payload(payload: Payload, count: usize) -> Result<MockData> {
    match payload {
        Payload::Object(record) if count == 1 => Ok(MockData::Record(record)),
        Payload::Object(record) => Ok(MockData::Records(vec![record])),
        Payload::Array(items) => {
            let mut records = into_records(items)?;
            if count == 1 {
                if records.is_empty() {
                    return Err(GeneratorError::MalformedJson(
                        "expected one object, got an empty array".to_string(),
                    ));
                }
                Ok(MockData::Record(records.swap_remove(0)))
            } else {
                Ok(MockData::Records(records))
            }
        }
    }
}

fn into_records(items: Vec<Value>) -> Result<Vec<Map<String, Value>>> {
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(GeneratorError::MalformedJson(format!(
                "element {} is not a JSON object: {}",
                idx, other
            ))),
        })
        .collect()
}
