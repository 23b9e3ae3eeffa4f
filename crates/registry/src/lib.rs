//! Schema registry for the Sonarr provider.
//!
//! Declares the attribute surface of the provider itself, of every resource
//! and data source, and the closed catalogue of provider-item variants.

pub mod data_sources;
pub mod enums;
pub mod resources;
pub mod variants;

use sonarr_types::{Attribute, AttributeType, Schema};

pub use variants::{ItemFamily, VARIANTS, VariantSpec, variant};

/// Prefix of every resource and data-source type name.
pub const PROVIDER_TYPE_NAME: &str = "sonarr";

/// Full host type name of an entity, e.g. `sonarr_download_client_pneumatic`.
pub fn type_name(entity: &str) -> String {
    format!("{PROVIDER_TYPE_NAME}_{entity}")
}

/// Provider configuration block.
pub fn provider() -> Schema {
    Schema::new("Interact with a Sonarr server.")
        .with(
            "url",
            Attribute::optional(AttributeType::String)
                .describe("Full Sonarr URL with protocol and port, e.g. `http://localhost:8989`. Falls back to `SONARR_URL`."),
        )
        .with(
            "api_key",
            Attribute::optional(AttributeType::String)
                .sensitive()
                .describe("API key for the Sonarr server. Falls back to `SONARR_API_KEY`."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_carry_the_provider_prefix() {
        assert_eq!(type_name("tag"), "sonarr_tag");
        let qbittorrent = variant(ItemFamily::DownloadClient, "qbittorrent").unwrap();
        assert_eq!(type_name(&qbittorrent.entity_name()), "sonarr_download_client_qbittorrent");
    }

    #[test]
    fn provider_api_key_is_sensitive_and_optional() {
        let schema = provider();
        let api_key = schema.attribute("api_key").unwrap();
        assert!(api_key.sensitive && api_key.optional && !api_key.required);
        assert!(schema.attribute("url").unwrap().optional);
    }
}
