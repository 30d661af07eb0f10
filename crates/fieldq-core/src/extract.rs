//! Reserved-field interception and the generic extraction fallback.
//!
//! A handful of key names resolve against record identity rather than the
//! record tree: `name`, `namespace`, `created`, `deleted`, and the
//! `labels.`/`annotations.` namespaces. These are checked as an ordered rule
//! table, first match wins; everything else goes through [`resolve`] plus
//! string coercion.
//!
//! The extractor is total: every failure mode (absent path, mid-path type
//! mismatch, bad index, unconvertible node) collapses into
//! [`FieldValue::Null`]. Callers cannot distinguish a truly absent key from
//! a present-but-null one, and the found flag reported by [`bind`] is always
//! true.

use crate::coerce::coerce;
use crate::path::resolve;
use crate::record::Record;
use crate::value::FieldValue;
use serde_json::Value;

/// Reserved-key rules, evaluated top-to-bottom. A rule returns `None` when
/// the key is not its business, passing it along to the next rule.
const RULES: &[fn(&Record<'_>, &str) -> Option<FieldValue>] =
    &[identity_rule, labels_rule, annotations_rule];

/// Extract one field from a record. Never fails; absence reads as `Null`.
pub fn extract(record: &Record<'_>, key: &str) -> FieldValue {
    for rule in RULES {
        if let Some(value) = rule(record, key) {
            return value;
        }
    }
    generic(record, key)
}

/// Bind a record into the lookup-function shape an expression evaluator
/// consumes: `key -> (value, found)`, found always true.
pub fn bind<'a>(record: Record<'a>) -> impl Fn(&str) -> (FieldValue, bool) + 'a {
    move |key| (extract(&record, key), true)
}

/// `name`, `namespace`, `created`, `deleted`.
fn identity_rule(record: &Record<'_>, key: &str) -> Option<FieldValue> {
    match key {
        "name" => Some(FieldValue::String(record.name().to_string())),
        "namespace" => Some(FieldValue::String(record.namespace().to_string())),
        "created" => Some(FieldValue::Timestamp(record.created())),
        "deleted" => Some(FieldValue::Timestamp(record.deleted())),
        _ => None,
    }
}

/// `labels.<name>` -- coerced when non-empty, `true` as a bare presence
/// flag when the label exists with an empty value, `Null` when absent.
fn labels_rule(record: &Record<'_>, key: &str) -> Option<FieldValue> {
    let name = nonempty_suffix(key, "labels.")?;
    Some(tag_value(record.label(name)))
}

/// `annotations.<name>` -- same policy as labels.
fn annotations_rule(record: &Record<'_>, key: &str) -> Option<FieldValue> {
    let name = nonempty_suffix(key, "annotations.")?;
    Some(tag_value(record.annotation(name)))
}

/// Strip `prefix` and require a non-empty remainder; a bare `labels.` key
/// is not a reserved lookup.
fn nonempty_suffix<'k>(key: &'k str, prefix: &str) -> Option<&'k str> {
    match key.strip_prefix(prefix) {
        Some(rest) if !rest.is_empty() => Some(rest),
        _ => None,
    }
}

/// Shared label/annotation value policy.
fn tag_value(entry: Option<&str>) -> FieldValue {
    match entry {
        Some("") => FieldValue::Bool(true),
        Some(value) => coerce(value),
        None => FieldValue::Null,
    }
}

/// Generic fallback: resolve the dotted path, then narrow the node.
/// Numbers widen to float, strings run through coercion, and every other
/// node kind (bool, object, array, explicit null) is opaque to the
/// evaluator and reads as `Null` -- as does a failed resolution.
fn generic(record: &Record<'_>, key: &str) -> FieldValue {
    match resolve(record.root(), key) {
        Some(Value::Number(n)) => n.as_f64().map_or(FieldValue::Null, FieldValue::Number),
        Some(Value::String(s)) => coerce(s),
        _ => FieldValue::Null,
    }
}
