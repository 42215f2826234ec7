//! Tolerant field deserializers for documents written by hand or by older
//! front ends.
//!
//! The site treats these fields loosely (a year typed as a number, a
//! negative skill level, a `null` id), so a strict parse would reject a
//! document the site itself renders. Use with
//! `#[serde(deserialize_with = "crate::lenient::...")]`.

use serde::de::{self, Deserializer, Unexpected};
use serde::Deserialize;
use serde_json::Value;

/// Text field: strings as-is, `null` as empty, numbers and booleans as text.
pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Array(_) => Err(de::Error::invalid_type(Unexpected::Seq, &"a string")),
        Value::Object(_) => Err(de::Error::invalid_type(Unexpected::Map, &"a string")),
    }
}

/// Integer field read the way the admin form writes it (`parseInt(v) || 0`).
///
/// Any JSON number is accepted (fractions truncate, out-of-range values
/// saturate), a numeric string contributes its leading integer, and
/// anything else scalar reads as `0`.
pub fn integer<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    match Value::deserialize(d)? {
        Value::Number(n) => Ok(number(&n)),
        Value::String(s) => Ok(leading_integer(&s)),
        Value::Null | Value::Bool(_) => Ok(0),
        Value::Array(_) => Err(de::Error::invalid_type(Unexpected::Seq, &"an integer")),
        Value::Object(_) => Err(de::Error::invalid_type(Unexpected::Map, &"an integer")),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn number(n: &serde_json::Number) -> i64 {
    if let Some(i) = n.as_i64() {
        i
    } else if n.as_u64().is_some() {
        i64::MAX
    } else {
        // `as` saturates and maps NaN to 0.
        n.as_f64().map_or(0, |f| f.trunc() as i64)
    }
}

fn leading_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse::<i64>()
        .map_or(0, |value| sign * value)
}
