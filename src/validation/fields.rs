//! Field extraction from raw records.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::money::parse_decimal;

use super::RawRecord;

/// Returns the field's value, treating `null` as absent.
fn present<'a>(raw: &'a RawRecord, field: &str) -> Option<&'a Value> {
    raw.get(field).filter(|value| !value.is_null())
}

fn missing(field: &str) -> EngineError {
    EngineError::validation(field, "missing required field")
}

pub(super) fn require_decimal(raw: &RawRecord, field: &str) -> EngineResult<Decimal> {
    optional_decimal(raw, field)?.ok_or_else(|| missing(field))
}

pub(super) fn optional_decimal(raw: &RawRecord, field: &str) -> EngineResult<Option<Decimal>> {
    let Some(value) = present(raw, field) else {
        return Ok(None);
    };

    let text = match value {
        Value::String(s) => {
            if s.trim().is_empty() {
                return Err(EngineError::validation(field, "must not be empty"));
            }
            s.clone()
        }
        // Parsed from the number's text so no binary float arithmetic is involved.
        Value::Number(n) => n.to_string(),
        other => {
            return Err(EngineError::validation(
                field,
                format!("expected a decimal number, got {}", type_name(other)),
            ));
        }
    };

    parse_decimal(&text)
        .map(Some)
        .ok_or_else(|| EngineError::validation(field, format!("'{}' is not a decimal", text)))
}

pub(super) fn require_integer(raw: &RawRecord, field: &str) -> EngineResult<i64> {
    optional_integer(raw, field)?.ok_or_else(|| missing(field))
}

pub(super) fn optional_integer(raw: &RawRecord, field: &str) -> EngineResult<Option<i64>> {
    let Some(value) = present(raw, field) else {
        return Ok(None);
    };

    match value {
        Value::Number(n) => n.as_i64().map(Some).ok_or_else(|| {
            EngineError::validation(field, format!("expected a whole number, got {}", n))
        }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(EngineError::validation(field, "must not be empty"));
            }
            trimmed.parse::<i64>().map(Some).map_err(|_| {
                EngineError::validation(field, format!("'{}' is not a whole number", s))
            })
        }
        other => Err(EngineError::validation(
            field,
            format!("expected a whole number, got {}", type_name(other)),
        )),
    }
}

/// Narrows an integer to a count no smaller than `min`.
pub(super) fn to_count(field: &str, value: i64, min: u32) -> EngineResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|count| *count >= min)
        .ok_or_else(|| {
            let message = if min == 0 {
                format!("must be a non-negative integer, got {}", value)
            } else {
                format!("must be an integer of at least {}, got {}", min, value)
            };
            EngineError::validation(field, message)
        })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
