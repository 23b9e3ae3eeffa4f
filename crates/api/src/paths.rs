//! Endpoint paths relative to the server base URL.

pub const TAG: &str = "/api/v3/tag";
pub const ROOT_FOLDER: &str = "/api/v3/rootfolder";
pub const DELAY_PROFILE: &str = "/api/v3/delayprofile";
pub const QUALITY_PROFILE: &str = "/api/v3/qualityprofile";
pub const QUALITY_DEFINITION: &str = "/api/v3/qualitydefinition";
pub const RELEASE_PROFILE: &str = "/api/v3/releaseprofile";
pub const REMOTE_PATH_MAPPING: &str = "/api/v3/remotepathmapping";
pub const SERIES: &str = "/api/v3/series";
pub const AUTO_TAG: &str = "/api/v3/autotagging";
pub const CUSTOM_FORMAT: &str = "/api/v3/customformat";
pub const IMPORT_LIST_EXCLUSION: &str = "/api/v3/importlistexclusion";

pub const NAMING_CONFIG: &str = "/api/v3/config/naming";
pub const MEDIA_MANAGEMENT_CONFIG: &str = "/api/v3/config/mediamanagement";
pub const HOST_CONFIG: &str = "/api/v3/config/host";
pub const DOWNLOAD_CLIENT_CONFIG: &str = "/api/v3/config/downloadclient";
pub const INDEXER_CONFIG: &str = "/api/v3/config/indexer";

pub const DOWNLOAD_CLIENT: &str = "/api/v3/downloadclient";
pub const INDEXER: &str = "/api/v3/indexer";
pub const NOTIFICATION: &str = "/api/v3/notification";
pub const IMPORT_LIST: &str = "/api/v3/importlist";
pub const METADATA: &str = "/api/v3/metadata";

pub const SYSTEM_STATUS: &str = "/api/v3/system/status";
pub const LANGUAGE: &str = "/api/v3/language";

/// Path of one entity under a collection.
pub fn item(collection: &str, id: i64) -> String {
    format!("{collection}/{id}")
}
