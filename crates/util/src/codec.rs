//! Field codec for provider-item envelopes.
//!
//! Provider items carry their implementation-specific settings as a
//! `fields: [{name, value, type}]` array whose values are weakly typed on the
//! wire. A [`FieldSpec`] declares which flat host attributes belong to the
//! envelope and which wire type bucket each one uses; [`encode_fields`] and
//! [`decode_fields`] translate between the two representations.
//!
//! Host attribute names are snake_case. The wire name defaults to the
//! lowerCamelCase form of the host name unless the `FieldSpec` lists a rename.

use std::borrow::Cow;

use heck::ToLowerCamelCase;
use serde_json::{Map, Number, Value};
use sonarr_api::models::Field;
use thiserror::Error;

/// Placeholder the server echoes in place of a stored secret.
pub const MASKED_SENTINEL: &str = "********";

/// Wire `type` hint marking a bracketed tag value.
const TAG_FIELD_KIND: &str = "tag";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("field `{field}`: expected {expected}, found {found}")]
    Decode {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("attribute `{field}`: expected {expected}, found {found}")]
    Encode {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl CodecError {
    /// Name of the offending field or attribute.
    pub fn field(&self) -> &str {
        match self {
            Self::Decode { field, .. } | Self::Encode { field, .. } => field,
        }
    }
}

/// Wire type bucket of a recognised field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Int,
    Bool,
    Float,
    IntSlice,
    StringSlice,
}

impl FieldKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "integer",
            Self::Bool => "boolean",
            Self::Float => "number",
            Self::IntSlice => "array of integers",
            Self::StringSlice => "array of strings",
        }
    }
}

/// Recognised fields of one provider-item variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub strings: &'static [&'static str],
    pub ints: &'static [&'static str],
    pub bools: &'static [&'static str],
    pub floats: &'static [&'static str],
    pub int_slices: &'static [&'static str],
    pub string_slices: &'static [&'static str],
    /// Attributes whose server echo is masked; decode keeps the prior value.
    pub sensitive: &'static [&'static str],
    /// `(host, wire)` pairs for names that do not follow the camelCase rule.
    pub renames: &'static [(&'static str, &'static str)],
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FieldSpec {
    pub const EMPTY: FieldSpec = FieldSpec {
        strings: &[],
        ints: &[],
        bools: &[],
        floats: &[],
        int_slices: &[],
        string_slices: &[],
        sensitive: &[],
        renames: &[],
    };

    /// Every recognised host attribute with its bucket, in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, FieldKind)> + '_ {
        let buckets = [
            (self.strings, FieldKind::String),
            (self.ints, FieldKind::Int),
            (self.bools, FieldKind::Bool),
            (self.floats, FieldKind::Float),
            (self.int_slices, FieldKind::IntSlice),
            (self.string_slices, FieldKind::StringSlice),
        ];
        buckets
            .into_iter()
            .flat_map(|(names, kind)| names.iter().map(move |name| (*name, kind)))
    }

    pub fn kind_of(&self, host: &str) -> Option<FieldKind> {
        self.attributes().find(|(name, _)| *name == host).map(|(_, kind)| kind)
    }

    pub fn is_sensitive(&self, host: &str) -> bool {
        self.sensitive.contains(&host)
    }

    pub fn wire_name(&self, host: &str) -> Cow<'static, str> {
        match self.renames.iter().find(|(name, _)| *name == host) {
            Some((_, wire)) => Cow::Borrowed(wire),
            None => Cow::Owned(host.to_lower_camel_case()),
        }
    }

    /// Host attribute for a wire field name, if the field is recognised.
    pub fn host_name(&self, wire: &str) -> Option<(&'static str, FieldKind)> {
        self.attributes().find(|(host, _)| self.wire_name(host) == wire)
    }

    pub fn len(&self) -> usize {
        self.attributes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Encode host attributes into a field envelope.
///
/// One field is emitted per recognised attribute whose value is set; null
/// attributes are omitted entirely. Attributes the `FieldSpec` does not recognise
/// are ignored.
pub fn encode_fields(spec: &FieldSpec, record: &Map<String, Value>) -> Result<Vec<Field>, CodecError> {
    let mut fields = Vec::new();
    for (host, kind) in spec.attributes() {
        let Some(value) = record.get(host).filter(|value| !value.is_null()) else {
            continue;
        };
        let value = coerce(value, kind).ok_or_else(|| CodecError::Encode {
            field: host.to_string(),
            expected: kind.name(),
            found: json_kind(value),
        })?;
        fields.push(Field::new(spec.wire_name(host), value));
    }
    Ok(fields)
}

/// Decode a field envelope into host attributes.
///
/// Every recognised attribute is present in the result. Fields that are
/// absent on the wire or carry no value decode to null; sensitive fields
/// that come back empty or masked keep their value from `prior`.
pub fn decode_fields(spec: &FieldSpec, fields: &[Field], prior: &Map<String, Value>) -> Result<Map<String, Value>, CodecError> {
    let mut out: Map<String, Value> = spec.attributes().map(|(host, _)| (host.to_string(), Value::Null)).collect();

    for field in fields {
        let Some((host, kind)) = spec.host_name(&field.name) else {
            continue;
        };
        let raw = field.value.clone().unwrap_or(Value::Null);
        let raw = if field.kind.as_deref() == Some(TAG_FIELD_KIND) {
            strip_tag_brackets(raw, kind)
        } else {
            raw
        };
        let value = if raw.is_null() {
            Value::Null
        } else {
            coerce(&raw, kind).ok_or_else(|| CodecError::Decode {
                field: field.name.clone(),
                expected: kind.name(),
                found: json_kind(&raw),
            })?
        };
        out.insert(host.to_string(), value);
    }

    for host in spec.sensitive {
        if out.get(*host).is_none_or(is_masked) {
            let kept = prior.get(*host).cloned().unwrap_or(Value::Null);
            out.insert(host.to_string(), kept);
        }
    }
    Ok(out)
}

fn is_masked(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty() || text == MASKED_SENTINEL,
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Unwrap a tag value: `"[3]"` becomes `"3"`, `[3]` becomes `3`.
///
/// Exactly one leading `[` and one trailing `]` are removed. An unwrapped
/// string bound for an integer attribute is parsed as a decimal.
fn strip_tag_brackets(value: Value, kind: FieldKind) -> Value {
    match value {
        Value::String(text) => {
            let inner = text.strip_prefix('[').unwrap_or(&text);
            let inner = inner.strip_suffix(']').unwrap_or(inner);
            match kind {
                FieldKind::Int => inner
                    .trim()
                    .parse::<i64>()
                    .map_or_else(|_| Value::String(inner.to_string()), |int| Value::Number(int.into())),
                _ => Value::String(inner.to_string()),
            }
        }
        Value::Array(mut items) if items.len() == 1 => items.remove(0),
        other => other,
    }
}

/// Convert a JSON value into the canonical JSON shape of `kind`.
fn coerce(value: &Value, kind: FieldKind) -> Option<Value> {
    match kind {
        FieldKind::String => value.as_str().map(|text| Value::String(text.to_string())),
        FieldKind::Bool => value.as_bool().map(Value::Bool),
        FieldKind::Int => as_integer(value).map(|int| Value::Number(int.into())),
        FieldKind::Float => value.as_f64().and_then(Number::from_f64).map(Value::Number),
        FieldKind::IntSlice => value
            .as_array()?
            .iter()
            .map(|item| as_integer(item).map(|int| Value::Number(int.into())))
            .collect::<Option<Vec<_>>>()
            .map(Value::Array),
        FieldKind::StringSlice => value
            .as_array()?
            .iter()
            .map(|item| item.as_str().map(|text| Value::String(text.to_string())))
            .collect::<Option<Vec<_>>>()
            .map(Value::Array),
    }
}

/// Integral JSON numbers only; floats must be whole and inside the `i64` range.
fn as_integer(value: &Value) -> Option<i64> {
    let number = value.as_number()?;
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    let float = number.as_f64()?;
    let in_range = float >= i64::MIN as f64 && float < -(i64::MIN as f64);
    (float.fract() == 0.0 && in_range).then_some(float as i64)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NEWZNAB: FieldSpec = FieldSpec {
        strings: &["base_url", "api_path", "api_key", "additional_parameters"],
        ints: &["minimum_seeders"],
        floats: &["seed_ratio"],
        int_slices: &["categories", "anime_categories"],
        sensitive: &["api_key"],
        renames: &[("seed_ratio", "seedCriteria.seedRatio")],
        ..FieldSpec::EMPTY
    };

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test records are objects"),
        }
    }

    fn wire(fields: Value) -> Vec<Field> {
        serde_json::from_value(fields).unwrap()
    }

    #[test]
    fn encode_omits_null_attributes_and_renames() {
        let host = record(json!({
            "base_url": "http://indexer",
            "api_key": "secret",
            "additional_parameters": null,
            "categories": [5030, 5040],
            "seed_ratio": 1.5,
            "name": "not a field"
        }));
        let fields = encode_fields(&NEWZNAB, &host).unwrap();
        let names: Vec<_> = fields.iter().map(|field| field.name.as_str()).collect();
        assert_eq!(names, ["baseUrl", "apiKey", "seedCriteria.seedRatio", "categories"]);
        assert_eq!(fields[3].value, Some(json!([5030, 5040])));
    }

    #[test]
    fn encode_keeps_zero_and_false_values() {
        let spec = FieldSpec {
            ints: &["priority"],
            bools: &["add_paused"],
            ..FieldSpec::EMPTY
        };
        let fields = encode_fields(&spec, &record(json!({"priority": 0, "add_paused": false}))).unwrap();
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn encode_rejects_mismatched_types() {
        let err = encode_fields(&NEWZNAB, &record(json!({"minimum_seeders": "many"}))).unwrap_err();
        assert_eq!(err.field(), "minimum_seeders");
    }

    #[test]
    fn decode_ignores_unknown_fields_and_nulls_missing_ones() {
        let fields = wire(json!([
            {"name": "baseUrl", "value": "http://indexer"},
            {"name": "apiPath", "value": "/api"},
            {"name": "somethingNew", "value": 42},
            {"name": "minimumSeeders"}
        ]));
        let decoded = decode_fields(&NEWZNAB, &fields, &Map::new()).unwrap();
        assert_eq!(decoded["base_url"], json!("http://indexer"));
        assert_eq!(decoded["minimum_seeders"], Value::Null);
        assert_eq!(decoded["additional_parameters"], Value::Null);
        assert!(!decoded.contains_key("something_new"));
    }

    #[test]
    fn decode_keeps_prior_sensitive_value_when_masked_or_empty() {
        let prior = record(json!({"api_key": "secret"}));
        for echoed in [json!(MASKED_SENTINEL), json!(""), Value::Null] {
            let fields = wire(json!([{"name": "apiKey", "value": echoed}]));
            let decoded = decode_fields(&NEWZNAB, &fields, &prior).unwrap();
            assert_eq!(decoded["api_key"], json!("secret"));
        }

        let fields = wire(json!([{"name": "apiKey", "value": "rotated"}]));
        let decoded = decode_fields(&NEWZNAB, &fields, &prior).unwrap();
        assert_eq!(decoded["api_key"], json!("rotated"));
    }

    #[test]
    fn decode_preserves_empty_slices() {
        let fields = wire(json!([{"name": "categories", "value": []}]));
        let decoded = decode_fields(&NEWZNAB, &fields, &Map::new()).unwrap();
        assert_eq!(decoded["categories"], json!([]));
        assert_eq!(decoded["anime_categories"], Value::Null);
    }

    #[test]
    fn decode_strips_tag_brackets() {
        let spec = FieldSpec {
            strings: &["value"],
            ..FieldSpec::EMPTY
        };
        let fields = wire(json!([{"name": "value", "value": "[42]", "type": "tag"}]));
        let decoded = decode_fields(&spec, &fields, &Map::new()).unwrap();
        assert_eq!(decoded["value"], json!("42"));

        let nested = wire(json!([{"name": "value", "value": "[[1]]", "type": "tag"}]));
        let decoded = decode_fields(&spec, &nested, &Map::new()).unwrap();
        assert_eq!(decoded["value"], json!("[1]"));
    }

    #[test]
    fn decode_reports_type_mismatch_with_field_name() {
        let fields = wire(json!([{"name": "categories", "value": "5030"}]));
        let err = decode_fields(&NEWZNAB, &fields, &Map::new()).unwrap_err();
        assert!(matches!(err, CodecError::Decode { ref field, .. } if field == "categories"));
    }

    #[test]
    fn decode_parses_tag_strings_into_integers() {
        let spec = FieldSpec {
            ints: &["value"],
            ..FieldSpec::EMPTY
        };
        let fields = wire(json!([{"name": "value", "value": "[7]", "type": "tag"}]));
        let decoded = decode_fields(&spec, &fields, &Map::new()).unwrap();
        assert_eq!(decoded["value"], json!(7));
    }

    #[test]
    fn decode_rejects_numeric_strings_outside_tags() {
        let fields = wire(json!([{"name": "minimumSeeders", "value": "5"}]));
        let err = decode_fields(&NEWZNAB, &fields, &Map::new()).unwrap_err();
        assert!(matches!(err, CodecError::Decode { ref field, .. } if field == "minimumSeeders"));

        let fields = wire(json!([{"name": "categories", "value": ["5030"]}]));
        assert!(matches!(
            decode_fields(&NEWZNAB, &fields, &Map::new()),
            Err(CodecError::Decode { .. })
        ));
    }

    #[test]
    fn decode_rejects_fractional_and_out_of_range_integers() {
        for value in [json!(2.5), json!(1e19), json!(-1e19)] {
            let fields = wire(json!([{"name": "minimumSeeders", "value": value}]));
            let err = decode_fields(&NEWZNAB, &fields, &Map::new()).unwrap_err();
            assert!(matches!(err, CodecError::Decode { .. }), "{value} should not decode as an integer");
        }

        let fields = wire(json!([{"name": "minimumSeeders", "value": 3.0}]));
        let decoded = decode_fields(&NEWZNAB, &fields, &Map::new()).unwrap();
        assert_eq!(decoded["minimum_seeders"], json!(3));
    }

    #[test]
    fn decode_widens_integers_into_floats() {
        let fields = wire(json!([{"name": "seedCriteria.seedRatio", "value": 2}]));
        let decoded = decode_fields(&NEWZNAB, &fields, &Map::new()).unwrap();
        assert_eq!(decoded["seed_ratio"].as_f64(), Some(2.0));
    }
}
