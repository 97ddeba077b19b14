//! Tolerant unwrapping of backend response envelopes.
//!
//! The backend nests collections under a key that varies by content type
//! (`news`, `Article`, `Story`, ...), sometimes under a generic `data`
//! key, and occasionally returns the bare array. The priority list is
//! explicit and ordered; anything unrecognized degrades to an empty
//! sequence instead of a parse error.

use serde_json::Value;

use crate::models::{ContentKind, ContentRecord};

/// Ordered, type-specific envelope keys tried before the generic fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeKeys(pub &'static [&'static str]);

/// Keys used by `GET /general/get-banner`.
pub const BANNER_KEYS: EnvelopeKeys = EnvelopeKeys(&["banner", "banners"]);

impl ContentKind {
    /// Envelope keys this collection has been observed under. Casing
    /// follows the backend responses, inconsistencies included.
    pub fn envelope_keys(&self) -> EnvelopeKeys {
        match self {
            ContentKind::Magazine => EnvelopeKeys(&["magazines", "magazine"]),
            ContentKind::News => EnvelopeKeys(&["news"]),
            ContentKind::Article => EnvelopeKeys(&["Article", "articles"]),
            ContentKind::Story => EnvelopeKeys(&["Story", "stories"]),
        }
    }
}

/// Select the content array from one response body.
///
/// Fallback order: each type-specific key, then `data`, then the top-level
/// value itself if it already is an array. No match yields an empty vec.
pub fn unwrap_collection(keys: EnvelopeKeys, body: Value) -> Vec<Value> {
    match body {
        Value::Object(mut map) => {
            for key in keys.0.iter().copied().chain(std::iter::once("data")) {
                if let Some(Value::Array(items)) = map.remove(key) {
                    return items;
                }
            }
            Vec::new()
        },
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

/// Select a single record from a detail response.
///
/// Same priority order as [`unwrap_collection`], with the bare top-level
/// object accepted last.
pub fn unwrap_single(keys: EnvelopeKeys, body: Value) -> Option<Value> {
    match body {
        Value::Object(mut map) => {
            for key in keys.0.iter().copied().chain(std::iter::once("data")) {
                match map.remove(key) {
                    Some(found @ Value::Object(_)) => return Some(found),
                    Some(Value::Array(items)) => return items.into_iter().next(),
                    _ => {},
                }
            }
            Some(Value::Object(map))
        },
        Value::Array(items) => items.into_iter().next(),
        _ => None,
    }
}

/// Unwrap and deserialize a collection of content records. Elements that
/// fail to deserialize are dropped rather than failing the whole response.
pub fn records(keys: EnvelopeKeys, body: Value) -> Vec<ContentRecord> {
    unwrap_collection(keys, body)
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

/// Unwrap and deserialize a single content record.
pub fn record(keys: EnvelopeKeys, body: Value) -> Option<ContentRecord> {
    unwrap_single(keys, body).and_then(|item| serde_json::from_value(item).ok())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn prefers_type_specific_key_over_data() {
        let body = json!({
            "Article": [{"_id": "1", "title": "kept"}],
            "data": [{"_id": "2", "title": "shadowed"}],
        });
        let records = records(ContentKind::Article.envelope_keys(), body);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "1");
    }

    #[test]
    fn falls_back_to_data_key() {
        let body = json!({
            "data": [{"_id": "1", "title": "A", "category": "Tech", "description": "x"}],
        });
        let records = records(ContentKind::News.envelope_keys(), body);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "Tech");
    }

    #[test]
    fn accepts_bare_top_level_array() {
        let body = json!([{"_id": "9", "title": "S"}]);
        let records = records(ContentKind::Story.envelope_keys(), body);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "9");
    }

    #[test]
    fn unknown_shape_yields_empty_not_error() {
        assert!(records(ContentKind::Magazine.envelope_keys(), json!({"ok": true})).is_empty());
        assert!(records(ContentKind::Magazine.envelope_keys(), json!("nope")).is_empty());
    }

    #[test]
    fn malformed_elements_are_dropped() {
        let body = json!({"news": [{"_id": "1", "title": "A"}, 42]});
        let records = records(ContentKind::News.envelope_keys(), body);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn single_record_unwraps_nested_and_bare_objects() {
        let nested = json!({"magazine": {"_id": "m1", "title": "Issue 4"}});
        let bare = json!({"_id": "m2", "title": "Issue 5"});
        let keys = ContentKind::Magazine.envelope_keys();
        assert_eq!(record(keys, nested).map(|r| r.id), Some("m1".to_string()));
        assert_eq!(record(keys, bare).map(|r| r.id), Some("m2".to_string()));
        assert_eq!(record(keys, json!(null)), None);
    }
}
