//! Generic segment traversal over mixed value shapes
//!
//! Each remaining segment advances the cursor by exhaustive dispatch on its
//! shape. Absence anywhere along the walk is terminal but benign: the whole
//! evaluation collapses to `<none>` without an error.

use crate::fieldpath::error::{EvalError, EvalResult};
use crate::fieldpath::value::{NONE, Record, Value};

/// Walk the remaining segments from a positioned cursor and render the
/// final value.
pub fn walk<'a>(mut cursor: Value<'a>, segments: &[String]) -> EvalResult<String> {
    for segment in segments {
        cursor = match cursor {
            Value::Absent => return Ok(NONE.to_string()),
            Value::Map(map) => match map.get(segment) {
                Some(entry) => Value::Str(entry),
                None => return Ok(NONE.to_string()),
            },
            Value::Record(record) => resolve_field(record, segment)?,
            other => return Err(EvalError::not_traversable(segment, other.kind())),
        };
    }

    Ok(cursor.to_string())
}

/// Two-tier field resolution: wire alias first, capitalized declared name
/// as fallback.
fn resolve_field<'a>(record: &'a dyn Record, segment: &str) -> EvalResult<Value<'a>> {
    if let Some(value) = record.field(segment) {
        return Ok(value);
    }
    if let Some(value) = record.field_named(&capitalize_first(segment)) {
        return Ok(value);
    }
    Err(EvalError::field_not_found(segment))
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
