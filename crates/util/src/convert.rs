//! Conversions between host state, record JSON and wire scalars.

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use sonarr_types::{AttrValue, Schema, State, StateError};

/// Record JSON for the named attributes of `state`. Unknown values become null.
pub fn record_map<'a>(state: &State, names: impl IntoIterator<Item = &'a str>) -> Map<String, Value> {
    names
        .into_iter()
        .map(|name| (name.to_string(), state.get(name).to_record_json()))
        .collect()
}

/// Overlay record JSON onto `state`, typed by the attributes declared in `schema`.
///
/// Keys the schema does not declare are skipped.
pub fn overlay_record(state: &mut State, schema: &Schema, record: &Map<String, Value>) -> Result<(), StateError> {
    for (name, value) in record {
        if let Some(attribute) = schema.attribute(name) {
            state.set(name.clone(), AttrValue::from_json_typed(name, value, &attribute.r#type)?);
        }
    }
    Ok(())
}

/// Render a wire scalar as the decimal or plain string the host stores.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Stable identifier derived from a set of attributes.
///
/// SHA-256 over `key=value\n` lines in sorted key order, values as compact
/// JSON. The first eight digest bytes, big-endian, with the sign bit cleared.
pub fn attributes_hash(attributes: &Map<String, Value>) -> i64 {
    let mut keys: Vec<&String> = attributes.keys().collect();
    keys.sort();
    let mut hasher = Sha256::new();
    for key in keys {
        hasher.update(key.as_bytes());
        hasher.update(b"=");
        hasher.update(attributes[key].to_string().as_bytes());
        hasher.update(b"\n");
    }
    let digest = hasher.finalize();
    let mut prefix = [0_u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(prefix) & i64::MAX as u64) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sonarr_types::{Attribute, AttributeType};

    #[test]
    fn hash_ignores_key_order() {
        let left: Map<String, Value> = serde_json::from_value(json!({"name": "x", "negate": false})).unwrap();
        let right: Map<String, Value> = serde_json::from_value(json!({"negate": false, "name": "x"})).unwrap();
        assert_eq!(attributes_hash(&left), attributes_hash(&right));
        assert!(attributes_hash(&left) >= 0);

        let other: Map<String, Value> = serde_json::from_value(json!({"name": "y", "negate": false})).unwrap();
        assert_ne!(attributes_hash(&left), attributes_hash(&other));
    }

    #[test]
    fn hash_is_pinned_across_builds() {
        let attributes: Map<String, Value> = serde_json::from_value(json!({"negate": false, "name": "x"})).unwrap();
        assert_eq!(attributes_hash(&attributes), 845_897_746_145_824_099);
    }

    #[test]
    fn overlay_types_values_by_schema() {
        let schema = Schema::new("test")
            .with("seed_ratio", Attribute::optional(AttributeType::Float64))
            .with("categories", Attribute::optional(AttributeType::set_of(AttributeType::Int64)));
        let record: Map<String, Value> =
            serde_json::from_value(json!({"seed_ratio": 1, "categories": [1, 2], "ignored": true})).unwrap();
        let mut state = State::new();
        overlay_record(&mut state, &schema, &record).unwrap();
        assert_eq!(state.get("seed_ratio"), &AttrValue::Float(1.0));
        assert_eq!(state.get("categories"), &AttrValue::int_set([2, 1]));
        assert!(state.get("ignored").is_null());
    }

    #[test]
    fn scalars_render_as_strings() {
        assert_eq!(scalar_to_string(&json!(3)).as_deref(), Some("3"));
        assert_eq!(scalar_to_string(&json!("x")).as_deref(), Some("x"));
        assert_eq!(scalar_to_string(&json!([1])), None);
    }
}
