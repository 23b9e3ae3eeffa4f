//! Attribute declarations for resources, data sources and the provider.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{AttrValue, Diagnostic, Diagnostics, State};

/// Semantic type of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int64,
    Float64,
    Bool,
    List(Box<AttributeType>),
    Set(Box<AttributeType>),
    /// Nested object with its own attribute declarations.
    Object(IndexMap<String, Attribute>),
}

impl AttributeType {
    pub fn set_of(element: AttributeType) -> Self {
        Self::Set(Box::new(element))
    }

    pub fn list_of(element: AttributeType) -> Self {
        Self::List(Box::new(element))
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::Bool => "bool",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Object(_) => "object",
        }
    }
}

/// Value constraint checked before any upstream call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    OneOfStrings(&'static [&'static str]),
    OneOfInts(&'static [i64]),
    IntBetween { min: i64, max: i64 },
    FloatAtLeast(f64),
}

impl Validator {
    /// Check one scalar value. Null and unknown always pass.
    pub fn check(&self, value: &AttrValue) -> Result<(), String> {
        if value.is_null() || value.is_unknown() {
            return Ok(());
        }
        match self {
            Self::OneOfStrings(allowed) => match value.as_str() {
                Some(actual) if allowed.contains(&actual) => Ok(()),
                _ => Err(format!("value must be one of: {}", quoted(allowed.iter()))),
            },
            Self::OneOfInts(allowed) => match value.as_i64() {
                Some(actual) if allowed.contains(&actual) => Ok(()),
                _ => Err(format!(
                    "value must be one of: {}",
                    allowed.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
                )),
            },
            Self::IntBetween { min, max } => match value.as_i64() {
                Some(actual) if (*min..=*max).contains(&actual) => Ok(()),
                _ => Err(format!("value must be between {min} and {max}")),
            },
            Self::FloatAtLeast(min) => match value.as_f64() {
                Some(actual) if actual >= *min => Ok(()),
                _ => Err(format!("value must be at least {min}")),
            },
        }
    }
}

fn quoted<'a>(values: impl Iterator<Item = &'a &'a str>) -> String {
    values.map(|value| format!("\"{value}\"")).collect::<Vec<_>>().join(", ")
}

/// Plan-time behaviour attached to an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanModifier {
    /// Keep the prior state value when the planned value is unknown.
    UseStateForUnknown,
    /// A change to this attribute replaces the resource.
    RequiresReplace,
}

/// Declaration of one attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub description: String,
    pub r#type: AttributeType,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
}

impl Attribute {
    fn new(r#type: AttributeType, required: bool, optional: bool, computed: bool) -> Self {
        Self {
            description: String::new(),
            r#type,
            required,
            optional,
            computed,
            sensitive: false,
            validators: Vec::new(),
            plan_modifiers: Vec::new(),
        }
    }

    pub fn required(r#type: AttributeType) -> Self {
        Self::new(r#type, true, false, false)
    }

    pub fn optional(r#type: AttributeType) -> Self {
        Self::new(r#type, false, true, false)
    }

    /// Optional in configuration, filled in by the upstream service when omitted.
    pub fn optional_computed(r#type: AttributeType) -> Self {
        Self::new(r#type, false, true, true)
    }

    pub fn computed(r#type: AttributeType) -> Self {
        Self::new(r#type, false, false, true)
    }

    /// The numeric `id` attribute every resource carries.
    pub fn id() -> Self {
        Self::computed(AttributeType::Int64)
            .describe("Upstream identifier.")
            .modify(PlanModifier::UseStateForUnknown)
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn modify(mut self, modifier: PlanModifier) -> Self {
        if !self.plan_modifiers.contains(&modifier) {
            self.plan_modifiers.push(modifier);
        }
        self
    }

    /// Computed-only copy used by data sources.
    pub fn as_computed(&self) -> Self {
        let r#type = match &self.r#type {
            AttributeType::Object(attributes) => AttributeType::Object(computed_attributes(attributes)),
            AttributeType::List(element) => AttributeType::List(Box::new(computed_element(element))),
            AttributeType::Set(element) => AttributeType::Set(Box::new(computed_element(element))),
            other => other.clone(),
        };
        Self {
            description: self.description.clone(),
            r#type,
            required: false,
            optional: false,
            computed: true,
            sensitive: self.sensitive,
            validators: Vec::new(),
            plan_modifiers: Vec::new(),
        }
    }

    fn check(&self, path: &str, value: &AttrValue, diags: &mut Diagnostics) {
        if value.is_unknown() {
            return;
        }
        if value.is_null() {
            if self.required {
                diags.push(
                    Diagnostic::error("Missing required argument", format!("The argument \"{path}\" is required."))
                        .with_attribute(path),
                );
            }
            return;
        }
        if !value.conforms_to(&self.r#type) {
            diags.push(
                Diagnostic::error(
                    "Incorrect attribute value type",
                    format!("Attribute \"{path}\" must be {}, got {}.", self.r#type.name(), value.kind()),
                )
                .with_attribute(path),
            );
            return;
        }
        let scalars: Vec<&AttrValue> = match value.elements() {
            Some(items) => items.iter().collect(),
            None => vec![value],
        };
        for validator in &self.validators {
            for scalar in &scalars {
                if let Err(message) = validator.check(scalar) {
                    diags.push(
                        Diagnostic::error("Invalid Attribute Value", format!("Attribute \"{path}\" {message}."))
                            .with_attribute(path),
                    );
                }
            }
        }
        match (&self.r#type, value) {
            (AttributeType::Object(attributes), AttrValue::Object(map)) => check_object(path, attributes, map, diags),
            (AttributeType::List(element) | AttributeType::Set(element), _) => {
                if let AttributeType::Object(attributes) = element.as_ref() {
                    for (index, item) in value.elements().unwrap_or_default().iter().enumerate() {
                        if let AttrValue::Object(map) = item {
                            check_object(&format!("{path}[{index}]"), attributes, map, diags);
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

fn check_object(
    path: &str,
    attributes: &IndexMap<String, Attribute>,
    map: &IndexMap<String, AttrValue>,
    diags: &mut Diagnostics,
) {
    for (name, attribute) in attributes {
        let nested = map.get(name).unwrap_or(&AttrValue::Null);
        attribute.check(&format!("{path}.{name}"), nested, diags);
    }
}

fn computed_attributes(attributes: &IndexMap<String, Attribute>) -> IndexMap<String, Attribute> {
    attributes
        .iter()
        .map(|(name, attribute)| (name.clone(), attribute.as_computed()))
        .collect()
}

fn computed_element(element: &AttributeType) -> AttributeType {
    match element {
        AttributeType::Object(attributes) => AttributeType::Object(computed_attributes(attributes)),
        other => other.clone(),
    }
}

/// Attribute map for one resource, data source or the provider itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    pub description: String,
    pub attributes: IndexMap<String, Attribute>,
}

impl Schema {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Add or replace an attribute.
    pub fn with(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, attribute: Attribute) {
        self.attributes.insert(name.into(), attribute);
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Names of top-level attributes flagged sensitive.
    pub fn sensitive_attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .filter(|(_, attribute)| attribute.sensitive)
            .map(|(name, _)| name.as_str())
    }

    /// Object type whose attributes are this schema's attributes.
    pub fn object_type(&self) -> AttributeType {
        AttributeType::Object(self.attributes.clone())
    }

    /// Computed-only copy, used to expose a resource shape through a data source.
    pub fn data_source_view(&self) -> Self {
        Self {
            description: self.description.clone(),
            attributes: computed_attributes(&self.attributes),
        }
    }

    /// Mark `name` as the required lookup key of a data source view.
    pub fn with_lookup_key(mut self, name: &str) -> Self {
        if let Some(attribute) = self.attributes.get_mut(name) {
            attribute.required = true;
            attribute.optional = false;
            attribute.computed = false;
        }
        self
    }

    /// Validate a configuration or planned state.
    ///
    /// Checks required attributes, declared types and validators. Unknown
    /// values are skipped; they are validated once known.
    pub fn validate(&self, state: &State) -> Diagnostics {
        let mut diags = Diagnostics::new();
        for (name, attribute) in &self.attributes {
            attribute.check(name, state.get(name), &mut diags);
        }
        for name in state.names() {
            if !self.attributes.contains_key(name) {
                diags.push(
                    Diagnostic::error("Unsupported argument", format!("An argument named \"{name}\" is not expected here."))
                        .with_attribute(name),
                );
            }
        }
        diags
    }

    /// Apply plan modifiers to a proposed new state.
    ///
    /// Returns the names of attributes whose change requires replacement.
    pub fn apply_plan_modifiers(&self, prior: Option<&State>, planned: &mut State) -> Vec<String> {
        let mut replace = Vec::new();
        let Some(prior) = prior else {
            return replace;
        };
        for (name, attribute) in &self.attributes {
            let prior_value = prior.get(name);
            if attribute.plan_modifiers.contains(&PlanModifier::UseStateForUnknown)
                && planned.get(name).is_unknown()
                && !prior_value.is_null()
            {
                planned.set(name.clone(), prior_value.clone());
            }
            if attribute.plan_modifiers.contains(&PlanModifier::RequiresReplace)
                && planned.get(name).is_known()
                && planned.get(name) != prior_value
            {
                replace.push(name.clone());
            }
        }
        replace
    }
}
