use serde::{Deserialize, Serialize};
use sonarr_api::{models, paths};
use sonarr_registry::resources;
use sonarr_types::Schema;

use crate::entity::RestEntity;
use crate::errors::HandlerError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesModel {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub title_slug: Option<String>,
    pub tvdb_id: Option<i64>,
    pub monitored: Option<bool>,
    pub season_folder: Option<bool>,
    pub use_scene_numbering: Option<bool>,
    pub quality_profile_id: Option<i64>,
    pub root_folder_path: Option<String>,
    pub path: Option<String>,
    pub series_type: Option<String>,
    pub tags: Option<Vec<i64>>,
}

/// Add options sent with a new series: monitor everything, search nothing.
fn add_options() -> models::AddSeriesOptions {
    models::AddSeriesOptions {
        monitor: Some("all".into()),
        search_for_missing_episodes: Some(false),
        search_for_cutoff_unmet_episodes: Some(false),
    }
}

pub struct SeriesEntity;

impl RestEntity for SeriesEntity {
    type Wire = models::Series;
    type Model = SeriesModel;

    const NAME: &'static str = "series";
    const PATH: &'static str = paths::SERIES;
    const MERGE_ON_UPDATE: bool = true;
    const DELETE_QUERY: &'static [(&'static str, &'static str)] =
        &[("deleteFiles", "false"), ("addImportListExclusion", "false")];

    fn schema() -> Schema {
        resources::series()
    }

    fn to_model(wire: models::Series) -> Result<SeriesModel, HandlerError> {
        Ok(SeriesModel {
            id: wire.id,
            title: wire.title,
            title_slug: wire.title_slug,
            tvdb_id: wire.tvdb_id,
            monitored: wire.monitored,
            season_folder: wire.season_folder,
            use_scene_numbering: wire.use_scene_numbering,
            quality_profile_id: wire.quality_profile_id,
            root_folder_path: wire.root_folder_path,
            path: wire.path,
            series_type: wire.series_type,
            tags: Some(wire.tags),
        })
    }

    fn to_wire(model: SeriesModel, base: models::Series) -> Result<models::Series, HandlerError> {
        let add_options = match base.id {
            None => Some(add_options()),
            Some(_) => base.add_options,
        };
        Ok(models::Series {
            id: model.id.or(base.id),
            title: model.title.or(base.title),
            title_slug: model.title_slug.or(base.title_slug),
            tvdb_id: model.tvdb_id.or(base.tvdb_id),
            monitored: model.monitored.or(base.monitored),
            season_folder: model.season_folder.or(base.season_folder),
            use_scene_numbering: model.use_scene_numbering.or(base.use_scene_numbering),
            quality_profile_id: model.quality_profile_id.or(base.quality_profile_id),
            root_folder_path: model.root_folder_path.or(base.root_folder_path),
            path: model.path.or(base.path),
            series_type: model.series_type.or(base.series_type),
            tags: model.tags.unwrap_or(base.tags),
            add_options,
            extra: base.extra,
        })
    }
}
