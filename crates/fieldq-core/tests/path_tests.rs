use fieldq_core::resolve;
use serde_json::{json, Value};

fn sample() -> Value {
    json!({
        "a": [{"b": 1}, {"b": 2}],
        "spec": {
            "replicas": 3,
            "containers": [
                {"name": "app", "ports": [80, 443]},
                {"name": "sidecar"},
            ],
        },
        "0": "zero-field",
        "2": "two-field",
    })
}

// ============================================================================
// Field navigation
// ============================================================================

#[test]
fn top_level_field() {
    let root = sample();
    assert_eq!(resolve(&root, "spec.replicas"), Some(&json!(3)));
}

#[test]
fn final_node_may_be_a_container() {
    let root = sample();
    assert_eq!(resolve(&root, "spec.containers.2"), Some(&json!({"name": "sidecar"})));
    assert!(resolve(&root, "spec").is_some());
}

#[test]
fn absent_field_fails() {
    let root = sample();
    assert_eq!(resolve(&root, "spec.image"), None);
}

#[test]
fn field_lookup_through_scalar_fails() {
    let root = sample();
    // replicas is a number; it has no children
    assert_eq!(resolve(&root, "spec.replicas.x"), None);
}

// ============================================================================
// 1-based list indexing
// ============================================================================

#[test]
fn one_based_index() {
    let root = sample();
    assert_eq!(resolve(&root, "a.2.b"), Some(&json!(2)));
    assert_eq!(resolve(&root, "a.1.b"), Some(&json!(1)));
}

#[test]
fn index_zero_is_a_field_name() {
    // "0" fails the strictly-positive guard, so it is looked up as a field
    // name -- which fails against a list.
    let root = sample();
    assert_eq!(resolve(&root, "a.0.b"), None);
}

#[test]
fn index_out_of_range_fails() {
    let root = sample();
    assert_eq!(resolve(&root, "a.9.b"), None);
    assert_eq!(resolve(&root, "a.3"), None);
}

#[test]
fn nested_indexing() {
    let root = sample();
    assert_eq!(resolve(&root, "spec.containers.1.ports.2"), Some(&json!(443)));
}

#[test]
fn leading_zero_index_still_parses() {
    let root = sample();
    assert_eq!(resolve(&root, "a.01.b"), Some(&json!(1)));
}

#[test]
fn numeric_segment_against_object_is_a_field_name() {
    // An integer segment only indexes when the node is a list; against an
    // object it falls back to a literal field lookup.
    let root = sample();
    assert_eq!(resolve(&root, "2"), Some(&json!("two-field")));
    assert_eq!(resolve(&root, "0"), Some(&json!("zero-field")));
}

// ============================================================================
// Degenerate keys
// ============================================================================

#[test]
fn empty_key_fails_on_empty_field_name() {
    let root = sample();
    assert_eq!(resolve(&root, ""), None);
}

#[test]
fn scalar_root_fails_field_lookup() {
    let root = json!("bare");
    assert_eq!(resolve(&root, "anything"), None);
}

#[test]
fn trailing_dot_fails() {
    let root = sample();
    assert_eq!(resolve(&root, "spec."), None);
}
