use serde::{Deserialize, Serialize};
use sonarr_api::{models, paths};
use sonarr_registry::resources;
use sonarr_types::Schema;

use crate::entity::RestEntity;
use crate::errors::HandlerError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportListExclusionModel {
    pub id: Option<i64>,
    pub tvdb_id: Option<i64>,
    pub title: Option<String>,
}

pub struct ImportListExclusionEntity;

impl RestEntity for ImportListExclusionEntity {
    type Wire = models::ImportListExclusion;
    type Model = ImportListExclusionModel;

    const NAME: &'static str = "import_list_exclusion";
    const PATH: &'static str = paths::IMPORT_LIST_EXCLUSION;

    fn schema() -> Schema {
        resources::import_list_exclusion()
    }

    fn to_model(wire: models::ImportListExclusion) -> Result<ImportListExclusionModel, HandlerError> {
        Ok(ImportListExclusionModel {
            id: wire.id,
            tvdb_id: wire.tvdb_id,
            title: wire.title,
        })
    }

    fn to_wire(model: ImportListExclusionModel, base: models::ImportListExclusion) -> Result<models::ImportListExclusion, HandlerError> {
        Ok(models::ImportListExclusion {
            id: model.id.or(base.id),
            tvdb_id: model.tvdb_id.or(base.tvdb_id),
            title: model.title.or(base.title),
        })
    }
}
