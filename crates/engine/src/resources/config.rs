//! Server-wide configuration singletons with a flat shape.

use serde::{Deserialize, Serialize};
use sonarr_api::{models, paths};
use sonarr_registry::resources;
use sonarr_types::Schema;

use crate::entity::{Lifecycle, RestEntity};
use crate::errors::HandlerError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamingModel {
    pub id: Option<i64>,
    pub rename_episodes: Option<bool>,
    pub replace_illegal_characters: Option<bool>,
    pub colon_replacement_format: Option<i64>,
    pub multi_episode_style: Option<i64>,
    pub daily_episode_format: Option<String>,
    pub anime_episode_format: Option<String>,
    pub series_folder_format: Option<String>,
    pub season_folder_format: Option<String>,
    pub specials_folder_format: Option<String>,
    pub standard_episode_format: Option<String>,
}

pub struct NamingEntity;

impl RestEntity for NamingEntity {
    type Wire = models::NamingConfig;
    type Model = NamingModel;

    const NAME: &'static str = "naming";
    const PATH: &'static str = paths::NAMING_CONFIG;
    const LIFECYCLE: Lifecycle = Lifecycle::Singleton;
    const MERGE_ON_UPDATE: bool = true;

    fn schema() -> Schema {
        resources::naming()
    }

    fn to_model(wire: models::NamingConfig) -> Result<NamingModel, HandlerError> {
        Ok(NamingModel {
            id: wire.id,
            rename_episodes: wire.rename_episodes,
            replace_illegal_characters: wire.replace_illegal_characters,
            colon_replacement_format: wire.colon_replacement_format,
            multi_episode_style: wire.multi_episode_style,
            daily_episode_format: wire.daily_episode_format,
            anime_episode_format: wire.anime_episode_format,
            series_folder_format: wire.series_folder_format,
            season_folder_format: wire.season_folder_format,
            specials_folder_format: wire.specials_folder_format,
            standard_episode_format: wire.standard_episode_format,
        })
    }

    fn to_wire(model: NamingModel, base: models::NamingConfig) -> Result<models::NamingConfig, HandlerError> {
        Ok(models::NamingConfig {
            id: model.id.or(base.id),
            rename_episodes: model.rename_episodes.or(base.rename_episodes),
            replace_illegal_characters: model.replace_illegal_characters.or(base.replace_illegal_characters),
            colon_replacement_format: model.colon_replacement_format.or(base.colon_replacement_format),
            multi_episode_style: model.multi_episode_style.or(base.multi_episode_style),
            daily_episode_format: model.daily_episode_format.or(base.daily_episode_format),
            anime_episode_format: model.anime_episode_format.or(base.anime_episode_format),
            series_folder_format: model.series_folder_format.or(base.series_folder_format),
            season_folder_format: model.season_folder_format.or(base.season_folder_format),
            specials_folder_format: model.specials_folder_format.or(base.specials_folder_format),
            standard_episode_format: model.standard_episode_format.or(base.standard_episode_format),
            extra: base.extra,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaManagementModel {
    pub id: Option<i64>,
    pub auto_unmonitor_previously_downloaded_episodes: Option<bool>,
    pub recycle_bin: Option<String>,
    pub recycle_bin_cleanup_days: Option<i64>,
    pub download_propers_repacks: Option<String>,
    pub create_empty_series_folders: Option<bool>,
    pub delete_empty_folders: Option<bool>,
    pub file_date: Option<String>,
    pub rescan_after_refresh: Option<String>,
    pub set_permissions_linux: Option<bool>,
    pub chmod_folder: Option<String>,
    pub chown_group: Option<String>,
    pub episode_title_required: Option<String>,
    pub skip_free_space_check_when_importing: Option<bool>,
    pub minimum_free_space_when_importing: Option<i64>,
    pub copy_using_hardlinks: Option<bool>,
    pub import_extra_files: Option<bool>,
    pub extra_file_extensions: Option<String>,
    pub enable_media_info: Option<bool>,
}

pub struct MediaManagementEntity;

impl RestEntity for MediaManagementEntity {
    type Wire = models::MediaManagementConfig;
    type Model = MediaManagementModel;

    const NAME: &'static str = "media_management";
    const PATH: &'static str = paths::MEDIA_MANAGEMENT_CONFIG;
    const LIFECYCLE: Lifecycle = Lifecycle::Singleton;
    const MERGE_ON_UPDATE: bool = true;

    fn schema() -> Schema {
        resources::media_management()
    }

    fn to_model(wire: models::MediaManagementConfig) -> Result<MediaManagementModel, HandlerError> {
        Ok(MediaManagementModel {
            id: wire.id,
            auto_unmonitor_previously_downloaded_episodes: wire.auto_unmonitor_previously_downloaded_episodes,
            recycle_bin: wire.recycle_bin,
            recycle_bin_cleanup_days: wire.recycle_bin_cleanup_days,
            download_propers_repacks: wire.download_propers_and_repacks,
            create_empty_series_folders: wire.create_empty_series_folders,
            delete_empty_folders: wire.delete_empty_folders,
            file_date: wire.file_date,
            rescan_after_refresh: wire.rescan_after_refresh,
            set_permissions_linux: wire.set_permissions_linux,
            chmod_folder: wire.chmod_folder,
            chown_group: wire.chown_group,
            episode_title_required: wire.episode_title_required,
            skip_free_space_check_when_importing: wire.skip_free_space_check_when_importing,
            minimum_free_space_when_importing: wire.minimum_free_space_when_importing,
            copy_using_hardlinks: wire.copy_using_hardlinks,
            import_extra_files: wire.import_extra_files,
            extra_file_extensions: wire.extra_file_extensions,
            enable_media_info: wire.enable_media_info,
        })
    }

    fn to_wire(
        model: MediaManagementModel,
        base: models::MediaManagementConfig,
    ) -> Result<models::MediaManagementConfig, HandlerError> {
        Ok(models::MediaManagementConfig {
            id: model.id.or(base.id),
            auto_unmonitor_previously_downloaded_episodes: model
                .auto_unmonitor_previously_downloaded_episodes
                .or(base.auto_unmonitor_previously_downloaded_episodes),
            recycle_bin: model.recycle_bin.or(base.recycle_bin),
            recycle_bin_cleanup_days: model.recycle_bin_cleanup_days.or(base.recycle_bin_cleanup_days),
            download_propers_and_repacks: model.download_propers_repacks.or(base.download_propers_and_repacks),
            create_empty_series_folders: model.create_empty_series_folders.or(base.create_empty_series_folders),
            delete_empty_folders: model.delete_empty_folders.or(base.delete_empty_folders),
            file_date: model.file_date.or(base.file_date),
            rescan_after_refresh: model.rescan_after_refresh.or(base.rescan_after_refresh),
            set_permissions_linux: model.set_permissions_linux.or(base.set_permissions_linux),
            chmod_folder: model.chmod_folder.or(base.chmod_folder),
            chown_group: model.chown_group.or(base.chown_group),
            episode_title_required: model.episode_title_required.or(base.episode_title_required),
            skip_free_space_check_when_importing: model
                .skip_free_space_check_when_importing
                .or(base.skip_free_space_check_when_importing),
            minimum_free_space_when_importing: model
                .minimum_free_space_when_importing
                .or(base.minimum_free_space_when_importing),
            copy_using_hardlinks: model.copy_using_hardlinks.or(base.copy_using_hardlinks),
            import_extra_files: model.import_extra_files.or(base.import_extra_files),
            extra_file_extensions: model.extra_file_extensions.or(base.extra_file_extensions),
            enable_media_info: model.enable_media_info.or(base.enable_media_info),
            extra: base.extra,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownloadClientConfigModel {
    pub id: Option<i64>,
    pub download_client_working_folders: Option<String>,
    pub enable_completed_download_handling: Option<bool>,
    pub auto_redownload_failed: Option<bool>,
    pub auto_redownload_failed_from_interactive_search: Option<bool>,
}

pub struct DownloadClientConfigEntity;

impl RestEntity for DownloadClientConfigEntity {
    type Wire = models::DownloadClientConfig;
    type Model = DownloadClientConfigModel;

    const NAME: &'static str = "download_client_config";
    const PATH: &'static str = paths::DOWNLOAD_CLIENT_CONFIG;
    const LIFECYCLE: Lifecycle = Lifecycle::Singleton;
    const MERGE_ON_UPDATE: bool = true;

    fn schema() -> Schema {
        resources::download_client_config()
    }

    fn to_model(wire: models::DownloadClientConfig) -> Result<DownloadClientConfigModel, HandlerError> {
        Ok(DownloadClientConfigModel {
            id: wire.id,
            download_client_working_folders: wire.download_client_working_folders,
            enable_completed_download_handling: wire.enable_completed_download_handling,
            auto_redownload_failed: wire.auto_redownload_failed,
            auto_redownload_failed_from_interactive_search: wire.auto_redownload_failed_from_interactive_search,
        })
    }

    fn to_wire(
        model: DownloadClientConfigModel,
        base: models::DownloadClientConfig,
    ) -> Result<models::DownloadClientConfig, HandlerError> {
        Ok(models::DownloadClientConfig {
            id: model.id.or(base.id),
            download_client_working_folders: model
                .download_client_working_folders
                .or(base.download_client_working_folders),
            enable_completed_download_handling: model
                .enable_completed_download_handling
                .or(base.enable_completed_download_handling),
            auto_redownload_failed: model.auto_redownload_failed.or(base.auto_redownload_failed),
            auto_redownload_failed_from_interactive_search: model
                .auto_redownload_failed_from_interactive_search
                .or(base.auto_redownload_failed_from_interactive_search),
            extra: base.extra,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexerConfigModel {
    pub id: Option<i64>,
    pub minimum_age: Option<i64>,
    pub retention: Option<i64>,
    pub maximum_size: Option<i64>,
    pub rss_sync_interval: Option<i64>,
}

pub struct IndexerConfigEntity;

impl RestEntity for IndexerConfigEntity {
    type Wire = models::IndexerConfig;
    type Model = IndexerConfigModel;

    const NAME: &'static str = "indexer_config";
    const PATH: &'static str = paths::INDEXER_CONFIG;
    const LIFECYCLE: Lifecycle = Lifecycle::Singleton;
    const MERGE_ON_UPDATE: bool = true;

    fn schema() -> Schema {
        resources::indexer_config()
    }

    fn to_model(wire: models::IndexerConfig) -> Result<IndexerConfigModel, HandlerError> {
        Ok(IndexerConfigModel {
            id: wire.id,
            minimum_age: wire.minimum_age,
            retention: wire.retention,
            maximum_size: wire.maximum_size,
            rss_sync_interval: wire.rss_sync_interval,
        })
    }

    fn to_wire(model: IndexerConfigModel, base: models::IndexerConfig) -> Result<models::IndexerConfig, HandlerError> {
        Ok(models::IndexerConfig {
            id: model.id.or(base.id),
            minimum_age: model.minimum_age.or(base.minimum_age),
            retention: model.retention.or(base.retention),
            maximum_size: model.maximum_size.or(base.maximum_size),
            rss_sync_interval: model.rss_sync_interval.or(base.rss_sync_interval),
            extra: base.extra,
        })
    }
}
