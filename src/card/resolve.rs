//! Value resolution and decoding.
//!
//! This module implements the pipeline that turns an entity record into an
//! ordered item sequence: a lenient descent along the residual attribute path,
//! followed by format-driven decoding of textual values.
//!
//! Descent is deliberately forgiving. A path segment that cannot be followed,
//! because the current value is not an object or lacks the key, stops the walk
//! and keeps the last successfully resolved value. Decoding is not: a malformed
//! JSON payload is an error the card surfaces to the host rather than papering
//! over with fallback content.

use crate::card::config::FORMAT_JSON;
use crate::domain::entity::{EntityRef, StateSnapshot};
use crate::domain::error::{CardError, Result};
use serde_json::Value;

/// One step of the attribute-path walk.
///
/// `Found` carries a value reached by following a path segment; `Stopped`
/// carries the last good value once a segment could not be followed. Folding
/// with an explicit tag keeps the short-circuit policy in one place instead of
/// scattering type probes through the walk.
#[derive(Debug, Clone, Copy)]
enum Descent<'a> {
    Found(&'a Value),
    Stopped(&'a Value),
}

impl<'a> Descent<'a> {
    fn value(self) -> &'a Value {
        match self {
            Self::Found(value) | Self::Stopped(value) => value,
        }
    }
}

/// Walks `path` into `root`, stopping at the first unfollowable segment.
///
/// Returns the deepest value reached. Missing segments degrade silently: the
/// walk never fails, it just stops early and hands back whatever it had.
///
/// # Examples
///
/// ```
/// use listcard::card::resolve::descend;
/// use serde_json::json;
///
/// let record = json!({ "state": { "a": { "b": 1 } } });
/// assert_eq!(descend(&record, &["state", "a", "b"]), &json!(1));
/// // "z" is absent, so the walk stops at the value reached for "a".
/// assert_eq!(descend(&record, &["state", "a", "z"]), &json!({ "b": 1 }));
/// ```
pub fn descend<'a, S: AsRef<str>>(root: &'a Value, path: &[S]) -> &'a Value {
    let mut step = Descent::Found(root);

    for segment in path {
        let current = step.value();
        match current.as_object().and_then(|map| map.get(segment.as_ref())) {
            Some(next) => step = Descent::Found(next),
            None => {
                step = Descent::Stopped(current);
                break;
            }
        }
    }

    step.value()
}

/// Decodes a resolved value according to the configured format.
///
/// Only textual values are decoded:
/// - `"json"` parses the text into a structured value
/// - an empty format leaves the text unchanged
/// - any other format is treated as a delimiter and splits the text at every
///   occurrence
///
/// Values that are already structured pass through untouched, covering data
/// sources that deliver native sequences instead of encoded text.
///
/// # Errors
///
/// Returns [`CardError::Decode`] when the format is `"json"` and the text is
/// not valid JSON.
pub fn decode(value: &Value, format: &str) -> Result<Value> {
    let Value::String(text) = value else {
        return Ok(value.clone());
    };

    if format == FORMAT_JSON {
        Ok(serde_json::from_str(text)?)
    } else if format.is_empty() {
        Ok(value.clone())
    } else {
        let parts = text
            .split(format)
            .map(|part| Value::String(part.to_string()))
            .collect();
        Ok(Value::Array(parts))
    }
}

/// Converts a decoded value into an ordered item sequence.
///
/// # Errors
///
/// Returns [`CardError::NotASequence`] when the value is not an array. A bare
/// string combined with an empty decode format lands here; surfacing the error
/// beats guessing a split the configuration never asked for.
pub fn into_items(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(CardError::NotASequence),
    }
}

/// Resolves an entity reference against a snapshot into an item sequence.
///
/// Looks up the base entity id, walks the residual path, decodes, and
/// sequences. The ordering of the returned items is the ordering of the
/// decoded value.
///
/// # Errors
///
/// - [`CardError::UnknownEntity`] when the base id is absent from the snapshot
/// - [`CardError::Decode`] on a malformed JSON payload
/// - [`CardError::NotASequence`] when decoding leaves a non-array value
pub fn resolve_items(
    snapshot: &StateSnapshot,
    entity_ref: &EntityRef,
    format: &str,
) -> Result<Vec<Value>> {
    let entity = snapshot
        .get(&entity_ref.base_id)
        .ok_or_else(|| CardError::UnknownEntity(entity_ref.base_id.clone()))?;

    let resolved = descend(entity.record(), &entity_ref.residual_path);
    tracing::trace!(
        entity = %entity_ref.base_id,
        path_len = entity_ref.residual_path.len(),
        "resolved state value"
    );

    into_items(decode(resolved, format)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::EntityState;
    use serde_json::json;

    fn snapshot_with(id: &str, record: Value) -> StateSnapshot {
        let mut snapshot = StateSnapshot::new();
        snapshot.insert(id, EntityState::new(record));
        snapshot
    }

    #[test]
    fn descend_follows_nested_path() {
        let record = json!({ "state": { "a": { "b": 1 } } });
        assert_eq!(descend(&record, &["state", "a", "b"]), &json!(1));
    }

    #[test]
    fn descend_stops_at_missing_segment() {
        let record = json!({ "state": { "a": { "b": 1 } } });
        assert_eq!(descend(&record, &["state", "a", "z"]), &json!({ "b": 1 }));
    }

    #[test]
    fn descend_stops_at_non_object() {
        let record = json!({ "state": "plain" });
        assert_eq!(descend(&record, &["state", "deeper"]), &json!("plain"));
    }

    #[test]
    fn descend_with_empty_path_returns_root() {
        let record = json!({ "state": 1 });
        let path: &[&str] = &[];
        assert_eq!(descend(&record, path), &record);
    }

    #[test]
    fn decode_json_round_trips() {
        let items = json!(["x", { "content": "y" }, 3]);
        let encoded = Value::String(serde_json::to_string(&items).unwrap());
        assert_eq!(decode(&encoded, "json").unwrap(), items);
    }

    #[test]
    fn decode_json_failure_propagates() {
        let err = decode(&json!("not json"), "json").unwrap_err();
        assert!(matches!(err, CardError::Decode(_)));
    }

    #[test]
    fn decode_splits_on_delimiter() {
        let decoded = decode(&json!("x,y,z"), ",").unwrap();
        assert_eq!(decoded, json!(["x", "y", "z"]));
    }

    #[test]
    fn decode_empty_format_passes_text_through() {
        let decoded = decode(&json!("x,y,z"), "").unwrap();
        assert_eq!(decoded, json!("x,y,z"));
    }

    #[test]
    fn decode_leaves_structured_values_alone() {
        let native = json!([1, 2, 3]);
        assert_eq!(decode(&native, "json").unwrap(), native);
        assert_eq!(decode(&native, ",").unwrap(), native);
    }

    #[test]
    fn into_items_rejects_non_sequences() {
        assert!(matches!(
            into_items(json!("loose string")),
            Err(CardError::NotASequence)
        ));
        assert!(matches!(
            into_items(json!({ "a": 1 })),
            Err(CardError::NotASequence)
        ));
    }

    #[test]
    fn resolve_items_end_to_end() {
        let snapshot = snapshot_with(
            "sensor.list",
            json!({ "state": "[\"a\", \"b\"]", "last_updated": "2024-01-01T00:00:00" }),
        );
        let entity_ref = EntityRef::parse("sensor.list");

        let items = resolve_items(&snapshot, &entity_ref, "json").unwrap();
        assert_eq!(items, vec![json!("a"), json!("b")]);
    }

    #[test]
    fn resolve_items_reports_unknown_entity() {
        let snapshot = StateSnapshot::new();
        let entity_ref = EntityRef::parse("sensor.absent");

        let err = resolve_items(&snapshot, &entity_ref, "json").unwrap_err();
        assert!(matches!(err, CardError::UnknownEntity(id) if id == "sensor.absent"));
    }

    #[test]
    fn resolve_items_walks_residual_path() {
        let snapshot = snapshot_with(
            "sensor.feed",
            json!({
                "state": "idle",
                "attributes": { "entries": [{ "title": "first" }] }
            }),
        );
        let entity_ref = EntityRef::parse("sensor.feed.attributes.entries");

        let items = resolve_items(&snapshot, &entity_ref, "json").unwrap();
        assert_eq!(items, vec![json!({ "title": "first" })]);
    }
}
