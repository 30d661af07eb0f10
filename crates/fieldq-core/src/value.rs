//! The closed set of typed values a lookup can produce.
//!
//! Raw records hold strings, numbers, booleans, and nulls; the lookup layer
//! narrows everything a caller can observe down to this variant. Integers do
//! not survive past coercion -- they widen to `f64` so downstream comparison
//! logic deals with a single numeric kind.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A value resolved from a record, after coercion.
///
/// Serializes untagged: `Null` becomes JSON null, `Timestamp` an RFC 3339
/// string, the rest their natural JSON forms.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// True when the lookup found nothing meaningfully convertible.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}
