// Scalar semantics for data record values

use serde_json::{Map, Value};
use std::borrow::Cow;

/// A data record: an ordered mapping from field name to value.
///
/// Nested objects are recursed into, arrays are opaque leaves, everything
/// else is a scalar leaf.
pub type Record = Map<String, Value>;

/// Whether a value counts as present.
///
/// `null`, `false`, `0`, `NaN` and the empty string are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_none_or(|x| x != 0.0 && !x.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Character length of a string value. Other values have no length.
pub(crate) fn char_length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        _ => None,
    }
}

/// Numeric reading of a value, for the min/max value rules.
pub(crate) fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                parse_number(trimmed)
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parse numeric text. Of the spelled-out forms only `Infinity` is a number;
/// `inf`, `infinity` and `NaN` are not.
fn parse_number(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        return None;
    }
    text.parse::<f64>().ok()
}

/// String form of a value, as matched by the pattern rules.
pub(crate) fn string_form(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Null => Cow::Borrowed("null"),
        Value::Number(n) => Cow::Owned(n.to_string()),
        other => Cow::Owned(other.to_string()),
    }
}
