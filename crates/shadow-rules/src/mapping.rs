//! Helpers for reading serialized rule mappings

use crate::error::{Result, ValidationError};
use serde_json::{Map, Value};

/// Read the mandatory `name` field
pub(crate) fn name(obj: &Map<String, Value>) -> Result<String> {
    match obj.get("name") {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(invalid("name", "a string")),
        None => Err(ValidationError::MissingField("name")),
    }
}

/// Read an optional string field; `null` counts as absent
pub(crate) fn opt_string(obj: &Map<String, Value>, field: &str) -> Result<Option<String>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid(field, "a string")),
    }
}

/// Read an optional list of strings
pub(crate) fn opt_string_list(obj: &Map<String, Value>, field: &str) -> Result<Option<Vec<String>>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                // Numbers and booleans are accepted and kept in their JSON form
                Value::Number(_) | Value::Bool(_) => Ok(item.to_string()),
                _ => Err(invalid(field, "a list of strings")),
            })
            .collect::<Result<Vec<_>>>()
            .map(Some),
        Some(_) => Err(invalid(field, "a list of strings")),
    }
}

/// Read an optional mapping field
pub(crate) fn opt_object<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
) -> Result<Option<&'a Map<String, Value>>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(invalid(field, "a mapping")),
    }
}

/// Read the member list of a combination or package; absent means empty
pub(crate) fn members<'a>(obj: &'a Map<String, Value>) -> Result<&'a [Value]> {
    match obj.get("rules") {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(invalid("rules", "a list")),
    }
}

/// Treat empty strings the same as a missing description
pub(crate) fn non_empty(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.is_empty())
}

pub(crate) fn invalid(field: &str, expected: &'static str) -> ValidationError {
    ValidationError::InvalidField {
        field: field.to_string(),
        expected,
    }
}
