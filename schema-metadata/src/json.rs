//! Coercion rules for reading loosely typed JSON into message fields.
//!
//! Absent and `null` values become the zero value. Values of a different JSON
//! type are coerced: strings take the JSON text of whatever they are given,
//! booleans follow truthiness, and a nested message that is not an object is
//! the zero value. Integer fields are the exception. A string that is not a
//! number, a fraction, or a value out of the field's range is an error rather
//! than a silent zero.

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use crate::codec::is_safe_integer;

pub(crate) fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(coerce_string(Value::deserialize(deserializer)?))
}

pub(crate) fn optional_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => Ok(Some(coerce_string(value))),
    }
}

pub(crate) fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Array(values) => Ok(values.into_iter().map(coerce_string).collect()),
        _ => Ok(Vec::new()),
    }
}

pub(crate) fn int32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let integer = coerce_integer(&value).map_err(D::Error::custom)?;
    i32::try_from(integer).map_err(|_| D::Error::custom(format!("{} does not fit in an int32", integer)))
}

/// JSON numbers past `2^53 - 1` are not exact, so they are refused here regardless of codec options.
pub(crate) fn int64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let integer = coerce_integer(&value).map_err(D::Error::custom)?;
    if is_safe_integer(integer) {
        Ok(integer)
    } else {
        Err(D::Error::custom(format!("{} is not a safe integer", integer)))
    }
}

pub(crate) fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(coerce_bool(&Value::deserialize(deserializer)?))
}

/// Anything but an array is an empty list. Entries that are not objects become the entry's zero value.
pub(crate) fn message_list<'de, D, M>(deserializer: D) -> Result<Vec<M>, D::Error>
where
    D: Deserializer<'de>,
    M: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .map(|value| match value {
                Value::Object(_) => M::deserialize(value),
                _ => Ok(M::default()),
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(D::Error::custom),
        _ => Ok(Vec::new()),
    }
}

fn coerce_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn coerce_integer(value: &Value) -> Result<i64, String> {
    match value {
        Value::Null => Ok(0),
        Value::Bool(b) => Ok(*b as i64),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if n.is_u64() {
                Err(format!("{} is out of range for an integer field", n))
            } else {
                integral_float(n.as_f64().unwrap_or(f64::NAN))
                    .ok_or_else(|| format!("{} is not an integer", n))
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            if let Ok(i) = trimmed.parse::<i64>() {
                return Ok(i);
            }
            trimmed
                .parse::<f64>()
                .ok()
                .and_then(integral_float)
                .ok_or_else(|| format!("'{}' is not an integer", s))
        }
        Value::Array(_) => Err("expected an integer, found an array".to_string()),
        Value::Object(_) => Err("expected an integer, found an object".to_string()),
    }
}

fn integral_float(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() <= crate::codec::MAX_SAFE_INTEGER as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Truthiness: `null`, `false`, zero and the empty string are false, everything else is true.
fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
