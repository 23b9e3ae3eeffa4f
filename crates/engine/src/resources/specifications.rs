//! Auto tags and custom formats.
//!
//! Both carry a set of conditions whose `value` (and, for custom formats,
//! `min`/`max`) travel in a field envelope. Conditions go through the field
//! codec so that tag values are unwrapped and numeric values are coerced the
//! same way provider items are.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sonarr_api::{models, paths};
use sonarr_registry::{enums, resources};
use sonarr_types::Schema;
use sonarr_util::{FieldSpec, decode_fields, encode_fields, scalar_to_string};

use crate::entity::RestEntity;
use crate::errors::HandlerError;

const TEXT_VALUE: FieldSpec = FieldSpec {
    strings: &["value"],
    ..FieldSpec::EMPTY
};

const NUMERIC_VALUE: FieldSpec = FieldSpec {
    ints: &["value"],
    ..FieldSpec::EMPTY
};

const TEXT_VALUE_RANGE: FieldSpec = FieldSpec {
    strings: &["value"],
    ints: &["min", "max"],
    ..FieldSpec::EMPTY
};

const NUMERIC_VALUE_RANGE: FieldSpec = FieldSpec {
    ints: &["value", "min", "max"],
    ..FieldSpec::EMPTY
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecificationModel {
    pub name: Option<String>,
    pub implementation: Option<String>,
    pub negate: Option<bool>,
    pub required: Option<bool>,
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

/// Which condition family a specification belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conditions {
    AutoTag,
    CustomFormat,
}

impl Conditions {
    fn field_spec(self, implementation: &str) -> &'static FieldSpec {
        match self {
            Self::AutoTag if enums::NUMERIC_AUTO_TAG_IMPLEMENTATIONS.contains(&implementation) => &NUMERIC_VALUE,
            Self::AutoTag => &TEXT_VALUE,
            Self::CustomFormat if enums::NUMERIC_CUSTOM_FORMAT_IMPLEMENTATIONS.contains(&implementation) => {
                &NUMERIC_VALUE_RANGE
            }
            Self::CustomFormat => &TEXT_VALUE_RANGE,
        }
    }

    pub fn encode(self, model: SpecificationModel) -> Result<models::Specification, HandlerError> {
        let implementation = model.implementation.unwrap_or_default();
        let mut record = Map::new();
        record.insert("value".into(), model.value.map(Value::String).unwrap_or(Value::Null));
        if self == Self::CustomFormat {
            record.insert("min".into(), model.min.map(Value::from).unwrap_or(Value::Null));
            record.insert("max".into(), model.max.map(Value::from).unwrap_or(Value::Null));
        }
        let fields = encode_fields(self.field_spec(&implementation), &record)?;
        Ok(models::Specification {
            name: model.name,
            implementation: Some(implementation),
            negate: model.negate,
            required: model.required,
            fields,
        })
    }

    pub fn decode(self, wire: models::Specification) -> Result<SpecificationModel, HandlerError> {
        let implementation = wire.implementation.unwrap_or_default();
        let record = decode_fields(self.field_spec(&implementation), &wire.fields, &Map::new())?;
        let int = |name: &str| record.get(name).and_then(Value::as_i64);
        let (min, max) = match self {
            Self::CustomFormat => (int("min"), int("max")),
            Self::AutoTag => (None, None),
        };
        Ok(SpecificationModel {
            name: wire.name,
            implementation: Some(implementation),
            negate: wire.negate,
            required: wire.required,
            value: record.get("value").and_then(scalar_to_string),
            min,
            max,
        })
    }

    fn encode_all(self, models: Vec<SpecificationModel>) -> Result<Vec<models::Specification>, HandlerError> {
        models.into_iter().map(|model| self.encode(model)).collect()
    }

    fn decode_all(self, wire: Vec<models::Specification>) -> Result<Vec<SpecificationModel>, HandlerError> {
        wire.into_iter().map(|spec| self.decode(spec)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoTagModel {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub remove_tags_automatically: Option<bool>,
    pub tags: Option<Vec<i64>>,
    pub specifications: Option<Vec<SpecificationModel>>,
}

pub struct AutoTagEntity;

impl RestEntity for AutoTagEntity {
    type Wire = models::AutoTag;
    type Model = AutoTagModel;

    const NAME: &'static str = "auto_tag";
    const PATH: &'static str = paths::AUTO_TAG;

    fn schema() -> Schema {
        resources::auto_tag()
    }

    fn to_model(wire: models::AutoTag) -> Result<AutoTagModel, HandlerError> {
        Ok(AutoTagModel {
            id: wire.id,
            name: wire.name,
            remove_tags_automatically: wire.remove_tags_automatically,
            tags: Some(wire.tags),
            specifications: Some(Conditions::AutoTag.decode_all(wire.specifications)?),
        })
    }

    fn to_wire(model: AutoTagModel, base: models::AutoTag) -> Result<models::AutoTag, HandlerError> {
        let specifications = match model.specifications {
            Some(specs) => Conditions::AutoTag.encode_all(specs)?,
            None => base.specifications,
        };
        Ok(models::AutoTag {
            id: model.id.or(base.id),
            name: model.name.or(base.name),
            remove_tags_automatically: model.remove_tags_automatically.or(base.remove_tags_automatically),
            tags: model.tags.unwrap_or(base.tags),
            specifications,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomFormatModel {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub include_custom_format_when_renaming: Option<bool>,
    pub specifications: Option<Vec<SpecificationModel>>,
}

pub struct CustomFormatEntity;

impl RestEntity for CustomFormatEntity {
    type Wire = models::CustomFormat;
    type Model = CustomFormatModel;

    const NAME: &'static str = "custom_format";
    const PATH: &'static str = paths::CUSTOM_FORMAT;

    fn schema() -> Schema {
        resources::custom_format()
    }

    fn to_model(wire: models::CustomFormat) -> Result<CustomFormatModel, HandlerError> {
        Ok(CustomFormatModel {
            id: wire.id,
            name: wire.name,
            include_custom_format_when_renaming: wire.include_custom_format_when_renaming,
            specifications: Some(Conditions::CustomFormat.decode_all(wire.specifications)?),
        })
    }

    fn to_wire(model: CustomFormatModel, base: models::CustomFormat) -> Result<models::CustomFormat, HandlerError> {
        let specifications = match model.specifications {
            Some(specs) => Conditions::CustomFormat.encode_all(specs)?,
            None => base.specifications,
        };
        Ok(models::CustomFormat {
            id: model.id.or(base.id),
            name: model.name.or(base.name),
            include_custom_format_when_renaming: model
                .include_custom_format_when_renaming
                .or(base.include_custom_format_when_renaming),
            specifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn condition(implementation: &str, value: &str) -> SpecificationModel {
        SpecificationModel {
            name: Some("condition".into()),
            implementation: Some(implementation.into()),
            negate: Some(false),
            required: Some(true),
            value: Some(value.into()),
            ..SpecificationModel::default()
        }
    }

    #[test]
    fn numeric_conditions_travel_as_integers() {
        let wire = Conditions::CustomFormat
            .encode(condition("ResolutionSpecification", "1080"))
            .unwrap();
        assert_eq!(wire.fields, vec![models::Field::new("value", json!(1080))]);

        let model = Conditions::CustomFormat.decode(wire).unwrap();
        assert_eq!(model.value.as_deref(), Some("1080"));
    }

    #[test]
    fn text_conditions_stay_strings() {
        let wire = Conditions::CustomFormat
            .encode(condition("ReleaseTitleSpecification", r"\bHDR\b"))
            .unwrap();
        assert_eq!(wire.fields[0].value, Some(json!(r"\bHDR\b")));
    }

    #[test]
    fn size_ranges_are_encoded() {
        let mut model = condition("SizeSpecification", "");
        model.value = None;
        model.min = Some(1);
        model.max = Some(10);
        let wire = Conditions::CustomFormat.encode(model).unwrap();
        let names: Vec<_> = wire.fields.iter().map(|field| field.name.as_str()).collect();
        assert_eq!(names, ["min", "max"]);
    }

    #[test]
    fn tag_conditions_drop_brackets() {
        let wire: models::Specification = serde_json::from_value(json!({
            "name": "tagged",
            "implementation": "TagSpecification",
            "negate": false,
            "required": false,
            "fields": [{"name": "value", "value": "[42]", "type": "tag"}]
        }))
        .unwrap();
        let model = Conditions::AutoTag.decode(wire).unwrap();
        assert_eq!(model.value.as_deref(), Some("42"));
        assert_eq!(model.min, None);
    }

    #[test]
    fn non_numeric_values_for_numeric_conditions_fail_to_encode() {
        let err = Conditions::AutoTag
            .encode(condition("StatusSpecification", "continuing"))
            .unwrap_err();
        assert!(matches!(err, HandlerError::Codec(_)));
    }
}
