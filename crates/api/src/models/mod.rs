//! Wire models for the Sonarr v3 REST API.
//!
//! Every model uses camelCase keys and omits unset fields when serialized,
//! so request bodies only carry what the caller set. Models that are written
//! back after a read (series, quality definitions, configuration singletons)
//! keep the fields they do not model in `extra` so that updates do not drop
//! server-side settings.

mod config;
mod entities;
mod items;
mod system;

pub use config::{DownloadClientConfig, HostConfig, IndexerConfig, MediaManagementConfig, NamingConfig};
pub use entities::{
    AddSeriesOptions, AutoTag, CustomFormat, DelayProfile, FormatItem, ImportListExclusion, Quality,
    QualityDefinition, QualityProfile, QualityProfileItem, ReleaseProfile, RemotePathMapping, RootFolder, Series,
    Specification, Tag, UnmappedFolder,
};
pub use items::{DownloadClient, Field, ImportList, Indexer, Metadata, Notification, ProviderItem};
pub use system::{Language, SystemStatus};
