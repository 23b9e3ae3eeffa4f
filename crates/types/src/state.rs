//! Attribute maps for configurations, plans and persisted state.

use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{AttrValue, Schema};

static NULL: AttrValue = AttrValue::Null;

/// Errors raised while converting between JSON, records and [`State`].
#[derive(Debug, Error)]
pub enum StateError {
    #[error("attribute `{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("state must be a JSON object")]
    NotAnObject,
    #[error("record projection failed: {0}")]
    Record(String),
}

/// An ordered attribute map.
///
/// Lookups of absent attributes yield `Null`, mirroring how the host treats
/// attributes missing from a configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State(IndexMap<String, AttrValue>);

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> &AttrValue {
        self.0.get(name).unwrap_or(&NULL)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.0.shift_remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric `id`, when known.
    pub fn id(&self) -> Option<i64> {
        self.get("id").as_i64()
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.set("id", id);
        self
    }

    /// Whether any attribute still holds an unknown value.
    pub fn has_unknown(&self) -> bool {
        self.0.values().any(contains_unknown)
    }

    /// Build a state from host JSON, typed by `schema`.
    ///
    /// Attributes the schema does not declare are kept as loosely typed
    /// values so validation can report them.
    pub fn from_json(value: &Value, schema: &Schema) -> Result<Self, StateError> {
        let object = value.as_object().ok_or(StateError::NotAnObject)?;
        Self::from_json_map(object, schema)
    }

    pub fn from_json_map(object: &Map<String, Value>, schema: &Schema) -> Result<Self, StateError> {
        let mut out = IndexMap::with_capacity(schema.attributes.len());
        for (name, attribute) in &schema.attributes {
            let raw = object.get(name).unwrap_or(&Value::Null);
            out.insert(name.clone(), AttrValue::from_json_typed(name, raw, &attribute.r#type)?);
        }
        for (name, raw) in object {
            if !out.contains_key(name) && !raw.is_null() {
                out.insert(name.clone(), untyped(raw));
            }
        }
        Ok(Self(out))
    }

    /// Render for the host bridge, unknown values as the sentinel string.
    pub fn to_json(&self) -> Value {
        Value::Object(self.to_json_map())
    }

    pub fn to_json_map(&self) -> Map<String, Value> {
        self.0.iter().map(|(name, value)| (name.clone(), value.to_json())).collect()
    }

    /// Project a typed record into state.
    ///
    /// Every schema attribute is present in the result; fields the record
    /// does not carry come back as `Null`.
    pub fn from_record<T: Serialize>(record: &T, schema: &Schema) -> Result<Self, StateError> {
        let json = serde_json::to_value(record).map_err(|err| StateError::Record(err.to_string()))?;
        Self::from_json(&json, schema)
    }

    /// Project state into a typed record. Unknown values become `null`.
    pub fn to_record<T: DeserializeOwned>(&self) -> Result<T, StateError> {
        let json: Map<String, Value> = self
            .0
            .iter()
            .map(|(name, value)| (name.clone(), value.to_record_json()))
            .collect();
        serde_json::from_value(Value::Object(json)).map_err(|err| StateError::Record(err.to_string()))
    }
}

fn contains_unknown(value: &AttrValue) -> bool {
    match value {
        AttrValue::Unknown => true,
        AttrValue::List(items) | AttrValue::Set(items) => items.iter().any(contains_unknown),
        AttrValue::Object(map) => map.values().any(contains_unknown),
        _ => false,
    }
}

fn untyped(value: &Value) -> AttrValue {
    match value {
        Value::Null => AttrValue::Null,
        Value::Bool(flag) => AttrValue::Bool(*flag),
        Value::Number(number) => number
            .as_i64()
            .map(AttrValue::Int)
            .unwrap_or_else(|| AttrValue::Float(number.as_f64().unwrap_or_default())),
        Value::String(text) if text == crate::UNKNOWN_SENTINEL => AttrValue::Unknown,
        Value::String(text) => AttrValue::String(text.clone()),
        Value::Array(items) => AttrValue::List(items.iter().map(untyped).collect()),
        Value::Object(map) => AttrValue::Object(map.iter().map(|(key, item)| (key.clone(), untyped(item))).collect()),
    }
}

impl FromIterator<(String, AttrValue)> for State {
    fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attribute, AttributeType};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TagRecord {
        id: Option<i64>,
        label: String,
    }

    fn tag_schema() -> Schema {
        Schema::new("Tag")
            .with("id", Attribute::id())
            .with("label", Attribute::required(AttributeType::String))
    }

    #[test]
    fn missing_attributes_read_as_null() {
        let state = State::new();
        assert!(state.get("label").is_null());
        assert_eq!(state.id(), None);
    }

    #[test]
    fn record_projection_round_trips_through_schema() {
        let record = TagRecord {
            id: Some(3),
            label: "hd".into(),
        };
        let state = State::from_record(&record, &tag_schema()).unwrap();
        assert_eq!(state.id(), Some(3));
        assert_eq!(state.to_record::<TagRecord>().unwrap(), record);
    }

    #[test]
    fn unknown_id_projects_as_none() {
        let state = State::from_json(&json!({"id": crate::UNKNOWN_SENTINEL, "label": "hd"}), &tag_schema()).unwrap();
        assert!(state.has_unknown());
        let record: TagRecord = state.to_record().unwrap();
        assert_eq!(record.id, None);
    }

    #[test]
    fn undeclared_attributes_are_kept_for_validation() {
        let state = State::from_json(&json!({"label": "hd", "colour": "red"}), &tag_schema()).unwrap();
        assert_eq!(state.get("colour").as_str(), Some("red"));
        assert!(tag_schema().validate(&state).has_error());
    }

    #[test]
    fn type_mismatch_names_the_attribute() {
        let err = State::from_json(&json!({"label": 5}), &tag_schema()).unwrap_err();
        assert!(matches!(err, StateError::TypeMismatch { ref path, .. } if path == "label"));
    }
}
