//! Read-only identity view over a record's well-known metadata fields.
//!
//! Records carry identity under `metadata`: name, namespace, creation and
//! deletion timestamps, plus the `labels` and `annotations` string maps. The
//! view borrows the record tree and never copies or mutates it; the full
//! tree stays reachable through [`Record::root`], so generic paths
//! (including `metadata.*` itself) keep working.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Timestamp reported for a record whose creation or deletion time is
/// absent or unparseable.
pub const UNSET_TIMESTAMP: DateTime<Utc> = DateTime::UNIX_EPOCH;

/// A borrowed view over one semi-structured record.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    root: &'a Value,
}

impl<'a> Record<'a> {
    /// Wrap an existing record tree. Any value is accepted; a non-object
    /// root simply has no metadata.
    pub fn new(root: &'a Value) -> Self {
        Record { root }
    }

    /// The full record tree, for generic path resolution.
    pub fn root(&self) -> &'a Value {
        self.root
    }

    /// `metadata.name`, or the empty string.
    pub fn name(&self) -> &'a str {
        self.meta_str("name")
    }

    /// `metadata.namespace`, or the empty string.
    pub fn namespace(&self) -> &'a str {
        self.meta_str("namespace")
    }

    /// `metadata.creationTimestamp` as an instant, [`UNSET_TIMESTAMP`] when
    /// missing.
    pub fn created(&self) -> DateTime<Utc> {
        self.meta_time("creationTimestamp")
    }

    /// `metadata.deletionTimestamp` as an instant, [`UNSET_TIMESTAMP`] when
    /// missing (live records have no deletion timestamp).
    pub fn deleted(&self) -> DateTime<Utc> {
        self.meta_time("deletionTimestamp")
    }

    /// A label's value. Non-string entries count as absent.
    pub fn label(&self, name: &str) -> Option<&'a str> {
        self.meta_map_entry("labels", name)
    }

    /// An annotation's value. Non-string entries count as absent.
    pub fn annotation(&self, name: &str) -> Option<&'a str> {
        self.meta_map_entry("annotations", name)
    }

    fn metadata(&self) -> Option<&'a Value> {
        self.root.as_object()?.get("metadata")
    }

    fn meta_str(&self, field: &str) -> &'a str {
        self.metadata()
            .and_then(|m| m.as_object()?.get(field)?.as_str())
            .unwrap_or("")
    }

    fn meta_time(&self, field: &str) -> DateTime<Utc> {
        self.metadata()
            .and_then(|m| m.as_object()?.get(field)?.as_str())
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map_or(UNSET_TIMESTAMP, |t| t.with_timezone(&Utc))
    }

    fn meta_map_entry(&self, map: &str, name: &str) -> Option<&'a str> {
        self.metadata()?
            .as_object()?
            .get(map)?
            .as_object()?
            .get(name)?
            .as_str()
    }
}
