//! Two-record key routing for join-style evaluation.
//!
//! When an expression compares fields across two records, each key carries a
//! prefix naming which record it addresses (`old.name` vs `new.name`). The
//! router strips the matching prefix and dispatches to that record's
//! extractor; keys matching neither prefix fall through to the second
//! record with the key untouched.

use crate::extract::extract;
use crate::record::Record;
use crate::value::FieldValue;

/// Route one key to the record it addresses and extract the field.
///
/// `prefix_a` is tried before `prefix_b`; an unprefixed key addresses the
/// second record with the full key. There is no error path for unmatched
/// keys -- the default extraction simply yields `Null` for absent fields.
pub fn route(
    a: &Record<'_>,
    b: &Record<'_>,
    prefix_a: &str,
    prefix_b: &str,
    key: &str,
) -> FieldValue {
    if let Some(rest) = strip_record_prefix(key, prefix_a) {
        return extract(a, rest);
    }
    if let Some(rest) = strip_record_prefix(key, prefix_b) {
        return extract(b, rest);
    }
    extract(b, key)
}

/// Bind a record pair into the evaluator lookup shape. `prefix_a` addresses
/// the first record, `prefix_b` the second; the second is also the default
/// for unprefixed keys. The found flag is always true.
pub fn bind_pair<'a>(
    a: Record<'a>,
    b: Record<'a>,
    prefix_a: &str,
    prefix_b: &str,
) -> impl Fn(&str) -> (FieldValue, bool) + 'a {
    let prefix_a = prefix_a.to_string();
    let prefix_b = prefix_b.to_string();
    move |key| (route(&a, &b, &prefix_a, &prefix_b, key), true)
}

/// Match `prefix` followed by a dot, returning the remainder.
fn strip_record_prefix<'k>(key: &'k str, prefix: &str) -> Option<&'k str> {
    key.strip_prefix(prefix)?.strip_prefix('.')
}
