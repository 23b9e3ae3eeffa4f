//! Schemas of the read-only data sources.

use sonarr_types::{Attribute, AttributeType, Schema, Validator};

use crate::enums;
use crate::variants::ItemFamily;

/// Singular lookup over a resource shape, keyed by `key`.
pub fn lookup(resource: &Schema, key: &str) -> Schema {
    resource.data_source_view().with_lookup_key(key)
}

/// Plural listing: a synthetic string `id` plus a computed set of elements.
pub fn listing(plural: &str, element: &Schema) -> Schema {
    Schema::new(format!("List of {}.", plural.replace('_', " ")))
        .with("id", Attribute::computed(AttributeType::String))
        .with(
            plural,
            Attribute::computed(AttributeType::set_of(element.data_source_view().object_type())),
        )
}

/// Shape of one provider item as seen by family lookups and listings.
///
/// Variant fields are not exposed; the discriminators are informational.
pub fn family_item(family: ItemFamily) -> Schema {
    let mut schema = family.generic_schema();
    schema.description = format!("Generic {} attributes.", family.name().replace('_', " "));
    schema.insert("implementation", Attribute::computed(AttributeType::String));
    schema.insert("config_contract", Attribute::computed(AttributeType::String));
    if family.has_protocol() {
        schema.insert("protocol", Attribute::computed(AttributeType::String));
    }
    if family == ItemFamily::ImportList {
        schema.insert("list_type", Attribute::computed(AttributeType::String));
    }
    schema.data_source_view()
}

pub fn system_status() -> Schema {
    let schema = Schema::new("System status of the connected server.").with("id", Attribute::computed(AttributeType::Int64));
    let strings = [
        "app_name",
        "instance_name",
        "version",
        "build_time",
        "branch",
        "os_name",
        "os_version",
        "runtime_name",
        "runtime_version",
        "database_type",
        "database_version",
        "authentication",
        "url_base",
        "startup_path",
        "app_data",
        "mode",
        "package_version",
        "package_author",
        "package_update_mechanism",
    ];
    let flags = ["is_docker", "is_linux", "is_windows", "is_osx"];
    let schema = strings
        .into_iter()
        .fold(schema, |schema, name| schema.with(name, Attribute::computed(AttributeType::String)));
    flags
        .into_iter()
        .fold(schema, |schema, name| schema.with(name, Attribute::computed(AttributeType::Bool)))
}

pub fn language() -> Schema {
    Schema::new("Language known to the server.")
        .with("id", Attribute::computed(AttributeType::Int64))
        .with("name", Attribute::required(AttributeType::String))
        .with("name_lower", Attribute::computed(AttributeType::String))
}

fn condition(description: &str, implementations: &'static [&'static str]) -> Schema {
    Schema::new(description)
        .with("id", Attribute::computed(AttributeType::Int64).describe("Hash of the condition attributes."))
        .with("name", Attribute::required(AttributeType::String))
        .with(
            "implementation",
            Attribute::required(AttributeType::String).validate(Validator::OneOfStrings(implementations)),
        )
        .with("negate", Attribute::required(AttributeType::Bool))
        .with("required", Attribute::required(AttributeType::Bool))
        .with("value", Attribute::optional(AttributeType::String))
}

pub fn custom_format_condition() -> Schema {
    condition(
        "Custom format specification, to be used in a custom format's specifications.",
        enums::CUSTOM_FORMAT_IMPLEMENTATIONS,
    )
    .with("min", Attribute::optional(AttributeType::Int64))
    .with("max", Attribute::optional(AttributeType::Int64))
}

pub fn auto_tag_condition() -> Schema {
    condition(
        "Auto tag specification, to be used in an auto tag's specifications.",
        enums::AUTO_TAG_IMPLEMENTATIONS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources;

    #[test]
    fn lookup_requires_only_the_key() {
        let schema = lookup(&resources::tag(), "label");
        assert!(schema.attribute("label").unwrap().required);
        let id = schema.attribute("id").unwrap();
        assert!(id.computed && !id.optional && !id.required);
    }

    #[test]
    fn listing_nests_a_computed_element_set() {
        let schema = listing("root_folders", &resources::root_folder());
        let AttributeType::Set(element) = &schema.attribute("root_folders").unwrap().r#type else {
            panic!("listing is a set");
        };
        let AttributeType::Object(attributes) = element.as_ref() else {
            panic!("elements are objects");
        };
        assert!(attributes["path"].computed);
        assert_eq!(schema.attribute("id").unwrap().r#type, AttributeType::String);
    }

    #[test]
    fn family_items_expose_discriminators() {
        assert!(family_item(ItemFamily::Indexer).contains("protocol"));
        assert!(!family_item(ItemFamily::Notification).contains("protocol"));
        assert!(family_item(ItemFamily::ImportList).contains("list_type"));
    }

    #[test]
    fn conditions_validate_implementation() {
        let schema = custom_format_condition();
        assert!(schema.contains("min"));
        assert!(!auto_tag_condition().contains("min"));
    }
}
