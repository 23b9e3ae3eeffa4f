//! Typed attribute values as exchanged with the host runtime.

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

use crate::{AttributeType, StateError};

/// String the host bridge uses to mark a value that is not known until apply.
pub const UNKNOWN_SENTINEL: &str = "74D93920-ED26-11E3-AC10-0800200C9A66";

/// A single attribute value.
///
/// `Null` and `Unknown` are distinct: `Null` means the attribute is known to
/// be unset, `Unknown` means the host will only learn the value after apply.
/// `Set` compares without regard to element order.
#[derive(Debug, Clone, Default)]
pub enum AttrValue {
    #[default]
    Null,
    Unknown,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<AttrValue>),
    Set(Vec<AttrValue>),
    Object(IndexMap<String, AttrValue>),
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) | (Self::Unknown, Self::Unknown) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Set(a), Self::Set(b)) => set_eq(a, b),
            (Self::Object(a), Self::Object(b)) => {
                a.len() == b.len() && a.iter().all(|(key, value)| b.get(key) == Some(value))
            }
            _ => false,
        }
    }
}

fn set_eq(left: &[AttrValue], right: &[AttrValue]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut matched = vec![false; right.len()];
    left.iter().all(|item| {
        let found = right
            .iter()
            .enumerate()
            .position(|(index, candidate)| !matched[index] && candidate == item);
        match found {
            Some(index) => {
                matched[index] = true;
                true
            }
            None => false,
        }
    })
}

impl AttrValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn int_set(values: impl IntoIterator<Item = i64>) -> Self {
        Self::Set(values.into_iter().map(Self::Int).collect())
    }

    pub fn string_set<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::Set(values.into_iter().map(|value| Self::String(value.into())).collect())
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// True for every value except `Unknown`, including `Null`.
    pub const fn is_known(&self) -> bool {
        !self.is_unknown()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, AttrValue>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Elements of a list or set.
    pub fn elements(&self) -> Option<&[AttrValue]> {
        match self {
            Self::List(items) | Self::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the value's shape, used in diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Unknown => "unknown",
            Self::Bool(_) => "bool",
            Self::Int(_) => "number",
            Self::Float(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Object(_) => "object",
        }
    }

    /// Render for the host bridge. Unknown values become [`UNKNOWN_SENTINEL`].
    pub fn to_json(&self) -> Value {
        self.render(true)
    }

    /// Render for record projection. Unknown values become `null`.
    pub fn to_record_json(&self) -> Value {
        self.render(false)
    }

    fn render(&self, keep_unknown: bool) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Unknown if keep_unknown => Value::String(UNKNOWN_SENTINEL.to_string()),
            Self::Unknown => Value::Null,
            Self::Bool(value) => Value::Bool(*value),
            Self::Int(value) => Value::Number(Number::from(*value)),
            Self::Float(value) => Number::from_f64(*value).map(Value::Number).unwrap_or(Value::Null),
            Self::String(value) => Value::String(value.clone()),
            Self::List(items) | Self::Set(items) => {
                Value::Array(items.iter().map(|item| item.render(keep_unknown)).collect())
            }
            Self::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (key, value) in map {
                    out.insert(key.clone(), value.render(keep_unknown));
                }
                Value::Object(out)
            }
        }
    }

    /// Convert a JSON value into a typed attribute value.
    ///
    /// `path` names the attribute for error messages. The sentinel string is
    /// accepted for every type and yields `Unknown`.
    pub fn from_json_typed(path: &str, value: &Value, ty: &AttributeType) -> Result<Self, StateError> {
        if value.is_null() {
            return Ok(Self::Null);
        }
        if value.as_str() == Some(UNKNOWN_SENTINEL) {
            return Ok(Self::Unknown);
        }
        let mismatch = || StateError::TypeMismatch {
            path: path.to_string(),
            expected: ty.name(),
            found: json_kind(value),
        };
        match ty {
            AttributeType::String => value.as_str().map(Self::string).ok_or_else(mismatch),
            AttributeType::Bool => value.as_bool().map(Self::Bool).ok_or_else(mismatch),
            AttributeType::Int64 => match value {
                Value::Number(number) => number
                    .as_i64()
                    .or_else(|| number.as_f64().filter(|float| float.fract() == 0.0).map(|float| float as i64))
                    .map(Self::Int)
                    .ok_or_else(mismatch),
                _ => Err(mismatch()),
            },
            AttributeType::Float64 => value.as_f64().map(Self::Float).ok_or_else(mismatch),
            AttributeType::List(element) | AttributeType::Set(element) => {
                let items = value.as_array().ok_or_else(mismatch)?;
                let converted = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| Self::from_json_typed(&format!("{path}[{index}]"), item, element))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(if matches!(ty, AttributeType::Set(_)) {
                    Self::Set(converted)
                } else {
                    Self::List(converted)
                })
            }
            AttributeType::Object(attributes) => {
                let object = value.as_object().ok_or_else(mismatch)?;
                let mut out = IndexMap::with_capacity(attributes.len());
                for (name, attribute) in attributes {
                    let nested = object.get(name).unwrap_or(&Value::Null);
                    out.insert(
                        name.clone(),
                        Self::from_json_typed(&format!("{path}.{name}"), nested, &attribute.r#type)?,
                    );
                }
                Ok(Self::Object(out))
            }
        }
    }

    /// Whether the value fits the declared type. Null and unknown always fit.
    pub fn conforms_to(&self, ty: &AttributeType) -> bool {
        match (self, ty) {
            (Self::Null | Self::Unknown, _) => true,
            (Self::String(_), AttributeType::String)
            | (Self::Bool(_), AttributeType::Bool)
            | (Self::Int(_), AttributeType::Int64)
            | (Self::Int(_) | Self::Float(_), AttributeType::Float64) => true,
            (Self::List(items), AttributeType::List(element)) | (Self::Set(items), AttributeType::Set(element)) => {
                items.iter().all(|item| item.conforms_to(element))
            }
            (Self::Object(map), AttributeType::Object(attributes)) => map.iter().all(|(key, value)| {
                attributes
                    .get(key)
                    .is_some_and(|attribute| value.conforms_to(&attribute.r#type))
            }),
            _ => false,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
