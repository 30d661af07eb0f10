//! # fieldq-core
//!
//! Typed field lookup over semi-structured resource records, for driving a
//! generic boolean/comparison expression evaluator.
//!
//! A record is an arbitrary `serde_json::Value` tree. Given a dot-separated
//! key, this crate resolves the addressed node (objects by field name,
//! arrays by 1-based index), coerces raw string scalars into canonical
//! typed values (booleans, power-of-1024 SI numbers, timestamps), and
//! short-circuits the reserved identity keys (`name`, `namespace`,
//! `created`, `deleted`, `labels.*`, `annotations.*`).
//!
//! ## Quick start
//!
//! ```rust
//! use fieldq_core::{extract, FieldValue, Record};
//! use serde_json::json;
//!
//! let pod = json!({
//!     "metadata": {"name": "api-0", "labels": {"tier": "backend"}},
//!     "spec": {"containers": [{"memory": "512Mi"}]},
//! });
//! let record = Record::new(&pod);
//!
//! assert_eq!(extract(&record, "name"), FieldValue::String("api-0".into()));
//! assert_eq!(extract(&record, "labels.tier"), FieldValue::String("backend".into()));
//! assert_eq!(
//!     extract(&record, "spec.containers.1.memory"),
//!     FieldValue::Number(512.0 * 1024.0 * 1024.0),
//! );
//! ```
//!
//! Lookups are total: absent paths, type mismatches, and bad indexes all
//! read as [`FieldValue::Null`] -- never an error. An expression evaluator
//! consumes this crate through the closures returned by [`bind`] (one
//! record) and [`bind_pair`] (a record pair under distinguishing prefixes).
//!
//! ## Modules
//!
//! - [`value`] — `FieldValue`, the closed set of coerced value kinds
//! - [`coerce`] — raw string → typed value rules
//! - [`path`] — dotted key-path resolution over a value tree
//! - [`record`] — read-only identity view over a record's metadata
//! - [`extract`] — reserved-key interception + generic extraction
//! - [`route`] — two-record prefix routing for join-style evaluation

pub mod coerce;
pub mod extract;
pub mod path;
pub mod record;
pub mod route;
pub mod value;

pub use coerce::coerce;
pub use extract::{bind, extract};
pub use path::resolve;
pub use record::{Record, UNSET_TIMESTAMP};
pub use route::{bind_pair, route};
pub use value::FieldValue;
