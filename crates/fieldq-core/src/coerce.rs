//! String scalar coercion -- booleans, SI-suffixed numbers, and two date
//! layouts.
//!
//! Records frequently store typed-looking data as strings (`"512Mi"`,
//! `"True"`, `"2021-05-01"`). [`coerce`] interprets such strings through an
//! ordered rule pipeline, first match wins:
//!
//! 1. SI-suffixed number (`K,M,G,T,P`, optional trailing `i`) -- power of 1024
//! 2. Boolean literal (`true`/`True`/`false`/`False`, nothing else)
//! 3. Timestamp (RFC 3339, then bare `YYYY-MM-DD`)
//! 4. Passthrough as string
//!
//! A deliberate asymmetry: a plain digit string carries no suffix, so rule 1
//! is skipped and no later rule claims it -- `"123"` stays the string
//! `"123"` while `"123K"` becomes `123 * 1024`.

use crate::value::FieldValue;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

/// Coerce a raw string scalar into its canonical typed value.
///
/// Total over all inputs: a string matching no rule comes back unchanged as
/// [`FieldValue::String`].
pub fn coerce(raw: &str) -> FieldValue {
    if let Some(n) = parse_si_number(raw) {
        return FieldValue::Number(n);
    }
    match raw {
        "true" | "True" => return FieldValue::Bool(true),
        "false" | "False" => return FieldValue::Bool(false),
        _ => {}
    }
    if let Some(t) = parse_timestamp(raw) {
        return FieldValue::Timestamp(t);
    }
    FieldValue::String(raw.to_string())
}

/// Parse an SI-suffixed integer like `5K`, `-3M`, or `120Gi`.
///
/// The trailing `i` is a binary-unit marker with no numeric effect of its
/// own. A string with no recognized suffix letter is not a number at all.
/// The length guards keep bare suffixes (`"K"`, `"Ki"`) out of this rule.
fn parse_si_number(raw: &str) -> Option<f64> {
    let mut s = raw;
    if s.len() > 1 && s.ends_with('i') {
        s = &s[..s.len() - 1];
    }
    if s.len() <= 1 {
        return None;
    }
    let multiplier = match s.as_bytes()[s.len() - 1] {
        b'K' => 1024f64,
        b'M' => 1024f64.powi(2),
        b'G' => 1024f64.powi(3),
        b'T' => 1024f64.powi(4),
        b'P' => 1024f64.powi(5),
        _ => return None,
    };
    let n: i64 = s[..s.len() - 1].parse().ok()?;
    Some(n as f64 * multiplier)
}

/// Try RFC 3339 first (offset normalized to UTC), then the short calendar
/// layout interpreted as midnight UTC of that day.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)));
    }
    None
}
