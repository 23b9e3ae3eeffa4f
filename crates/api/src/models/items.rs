//! Provider items: polymorphic entities with an `implementation`
//! discriminator and a weakly typed `fields` envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One `(name, value)` pair of a provider item's field envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Rendering hint sent by the server (`textbox`, `tag`, `select`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            kind: None,
        }
    }
}

/// Envelope accessors shared by every provider-item family.
pub trait ProviderItem {
    fn id(&self) -> Option<i64>;
    fn implementation(&self) -> Option<&str>;
    fn fields(&self) -> &[Field];
}

macro_rules! provider_item {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ProviderItem for $ty {
                fn id(&self) -> Option<i64> {
                    self.id
                }

                fn implementation(&self) -> Option<&str> {
                    self.implementation.as_deref()
                }

                fn fields(&self) -> &[Field] {
                    &self.fields
                }
            }
        )+
    };
}

provider_item!(DownloadClient, Indexer, Notification, ImportList, Metadata);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadClient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_completed_downloads: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_failed_downloads: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_contract: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default)]
    pub tags: Vec<i64>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indexer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_automatic_search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_interactive_search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_rss: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_client_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_search_maximum_single_episode_age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_contract: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default)]
    pub tags: Vec<i64>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_grab: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_download: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_upgrade: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_rename: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_series_add: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_series_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_episode_file_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_episode_file_delete_for_upgrade: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_health_issue: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_health_restored: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_application_update: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_manual_interaction_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_health_warnings: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_contract: Option<String>,
    #[serde(default)]
    pub tags: Vec<i64>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_automatic_add: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_for_missing_episodes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_monitor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_new_items: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_folder_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_profile_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_folder: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_contract: Option<String>,
    #[serde(default)]
    pub tags: Vec<i64>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_contract: Option<String>,
    #[serde(default)]
    pub tags: Vec<i64>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_envelope_keeps_the_type_hint() {
        let client: DownloadClient = serde_json::from_value(json!({
            "id": 2,
            "implementation": "Pneumatic",
            "fields": [
                {"name": "nzbFolder", "value": "/a/", "type": "path", "label": "Nzb Folder"},
                {"name": "strmFolder"}
            ]
        }))
        .unwrap();
        assert_eq!(client.implementation(), Some("Pneumatic"));
        assert_eq!(client.fields()[0].kind.as_deref(), Some("path"));
        assert_eq!(client.fields()[1].value, None);
    }
}
