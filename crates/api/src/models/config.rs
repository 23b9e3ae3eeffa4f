//! Server-wide configuration singletons. Each exists exactly once, with id 1.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rename_episodes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_illegal_characters: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colon_replacement_format: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_episode_style: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_episode_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anime_episode_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_folder_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_folder_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specials_folder_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_episode_format: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaManagementConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_unmonitor_previously_downloaded_episodes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recycle_bin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recycle_bin_cleanup_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_propers_and_repacks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_empty_series_folders: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_empty_folders: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rescan_after_refresh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_permissions_linux: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chmod_folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chown_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_title_required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_free_space_check_when_importing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_free_space_when_importing: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_using_hardlinks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_extra_files: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_file_extensions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_media_info: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Host settings. The wire shape is flat; the provider groups it into
/// authentication, proxy, ssl, logging, backup and update blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_browser: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_port: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_bypass_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_bypass_local_addresses: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_ssl: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_port: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_cert_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_cert_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_validation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_log_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_interval: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_retention: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_automatically: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_mechanism: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_script_path: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadClientConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_client_working_folders: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_completed_download_handling: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_redownload_failed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_redownload_failed_from_interactive_search: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rss_sync_interval: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
