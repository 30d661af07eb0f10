//! Dotted key-path resolution over a `serde_json::Value` tree.
//!
//! A key like `spec.containers.2.image` walks objects by field name and
//! arrays by 1-based index. A segment acts as an index only when it parses
//! as a strictly positive integer AND the current node is an array; `"0"` is
//! always a literal field name (it fails the `> 0` guard).

use serde_json::Value;

/// Resolve a dot-separated key against a value tree.
///
/// Returns `None` at the first failing segment: a field absent from an
/// object, a non-container node mid-path, or an index outside `[1, len]`.
/// The final node may itself be any value kind, including objects and
/// arrays -- narrowing to a scalar is the extractor's job, not this one's.
pub fn resolve<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    let mut node = root;
    for segment in key.split('.') {
        node = step(node, segment)?;
    }
    Some(node)
}

/// Advance one segment: 1-based array index when applicable, object field
/// otherwise.
fn step<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    if let (Ok(i), Value::Array(items)) = (segment.parse::<u64>(), node) {
        if i > 0 {
            return items.get(i as usize - 1);
        }
    }
    node.as_object()?.get(segment)
}
