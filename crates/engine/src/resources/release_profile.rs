use serde::{Deserialize, Serialize};
use sonarr_api::{models, paths};
use sonarr_registry::resources;
use sonarr_types::Schema;

use crate::entity::RestEntity;
use crate::errors::HandlerError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReleaseProfileModel {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub indexer_id: Option<i64>,
    pub required: Option<Vec<String>>,
    pub ignored: Option<Vec<String>>,
    pub tags: Option<Vec<i64>>,
}

pub struct ReleaseProfileEntity;

impl RestEntity for ReleaseProfileEntity {
    type Wire = models::ReleaseProfile;
    type Model = ReleaseProfileModel;

    const NAME: &'static str = "release_profile";
    const PATH: &'static str = paths::RELEASE_PROFILE;

    fn schema() -> Schema {
        resources::release_profile()
    }

    fn to_model(wire: models::ReleaseProfile) -> Result<ReleaseProfileModel, HandlerError> {
        Ok(ReleaseProfileModel {
            id: wire.id,
            name: wire.name,
            enabled: wire.enabled,
            indexer_id: wire.indexer_id,
            required: Some(wire.required),
            ignored: Some(wire.ignored),
            tags: Some(wire.tags),
        })
    }

    fn to_wire(model: ReleaseProfileModel, base: models::ReleaseProfile) -> Result<models::ReleaseProfile, HandlerError> {
        Ok(models::ReleaseProfile {
            id: model.id.or(base.id),
            name: model.name.or(base.name),
            enabled: model.enabled.or(base.enabled),
            indexer_id: model.indexer_id.or(base.indexer_id),
            required: model.required.unwrap_or(base.required),
            ignored: model.ignored.unwrap_or(base.ignored),
            tags: model.tags.unwrap_or(base.tags),
        })
    }
}
