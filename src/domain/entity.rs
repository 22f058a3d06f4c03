//! Entity domain model: references, state records, and snapshots.
//!
//! This module defines the types describing externally-owned entity state. An
//! entity is a named record supplied by the host dashboard and replaced
//! wholesale on every update; the card only ever reads it. Entity references
//! name both the entity and, optionally, a nested attribute to display.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Name of an entity record's primary value field.
pub const STATE_FIELD: &str = "state";

/// Name of an entity record's update-timestamp field.
pub const LAST_UPDATED_FIELD: &str = "last_updated";

/// A parsed entity reference.
///
/// A reference such as `sensor.shopping_list.attributes.items` is split on `.`:
/// the first two segments joined form the base entity id
/// (`sensor.shopping_list`), and the remaining segments form a lookup path into
/// the entity record (`["attributes", "items"]`). When no residual segments
/// exist, the path defaults to the primary value field.
///
/// # Examples
///
/// ```
/// use listcard::EntityRef;
///
/// let entity_ref = EntityRef::parse("sensor.shopping_list.attributes.items");
/// assert_eq!(entity_ref.base_id, "sensor.shopping_list");
/// assert_eq!(entity_ref.residual_path, vec!["attributes", "items"]);
///
/// let plain = EntityRef::parse("sensor.shopping_list");
/// assert_eq!(plain.residual_path, vec!["state"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    /// Base entity id used to look up the record in a snapshot.
    pub base_id: String,

    /// Path walked into the entity record to reach the display value.
    pub residual_path: Vec<String>,
}

impl EntityRef {
    /// Parses a raw entity reference into a base id and residual path.
    ///
    /// The reference is split on `.`. Up to two leading segments form the base
    /// id; anything beyond becomes the residual path. A reference with no
    /// residual segments points at the record's primary value field.
    #[must_use]
    pub fn parse(reference: &str) -> Self {
        let segments: Vec<&str> = reference.split('.').collect();
        let base_len = segments.len().min(2);

        let base_id = segments[..base_len].join(".");
        let residual_path = if segments.len() > 2 {
            segments[2..].iter().map(ToString::to_string).collect()
        } else {
            vec![STATE_FIELD.to_string()]
        };

        Self {
            base_id,
            residual_path,
        }
    }
}

/// A single entity record as supplied by the host.
///
/// The record is an opaque JSON object carrying at least a `state` value field
/// and a `last_updated` timestamp field; hosts are free to attach arbitrary
/// additional attributes, which remain reachable through residual paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityState(Value);

impl EntityState {
    /// Wraps a raw JSON record.
    #[must_use]
    pub fn new(record: Value) -> Self {
        Self(record)
    }

    /// Returns the underlying record.
    #[must_use]
    pub fn record(&self) -> &Value {
        &self.0
    }

    /// Returns the record's update timestamp, if present and textual.
    #[must_use]
    pub fn last_updated(&self) -> Option<&str> {
        self.0.get(LAST_UPDATED_FIELD).and_then(Value::as_str)
    }
}

/// A full state snapshot: mapping from entity id to entity record.
///
/// Snapshots are owned by the host and pushed to the card on every state
/// change, potentially very frequently. Each push replaces the previous
/// snapshot wholesale; the card never mutates one.
///
/// # Examples
///
/// ```
/// use listcard::{EntityState, StateSnapshot};
/// use serde_json::json;
///
/// let mut snapshot = StateSnapshot::new();
/// snapshot.insert(
///     "sensor.shopping_list",
///     EntityState::new(json!({
///         "state": "[\"milk\", \"eggs\"]",
///         "last_updated": "2024-06-01T12:30:00",
///     })),
/// );
/// assert!(snapshot.get("sensor.shopping_list").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSnapshot {
    entities: HashMap<String, EntityState>,
}

impl StateSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entity record.
    pub fn insert(&mut self, id: impl Into<String>, state: EntityState) {
        self.entities.insert(id.into(), state);
    }

    /// Looks up an entity record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&EntityState> {
        self.entities.get(id)
    }

    /// Returns the number of entities in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` when the snapshot holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
