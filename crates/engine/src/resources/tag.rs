use serde::{Deserialize, Serialize};
use sonarr_api::{models, paths};
use sonarr_registry::resources;
use sonarr_types::Schema;

use crate::entity::RestEntity;
use crate::errors::HandlerError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagModel {
    pub id: Option<i64>,
    pub label: Option<String>,
}

pub struct TagEntity;

impl RestEntity for TagEntity {
    type Wire = models::Tag;
    type Model = TagModel;

    const NAME: &'static str = "tag";
    const PATH: &'static str = paths::TAG;

    fn schema() -> Schema {
        resources::tag()
    }

    fn to_model(wire: models::Tag) -> Result<TagModel, HandlerError> {
        Ok(TagModel {
            id: wire.id,
            label: wire.label,
        })
    }

    fn to_wire(model: TagModel, base: models::Tag) -> Result<models::Tag, HandlerError> {
        Ok(models::Tag {
            id: model.id.or(base.id),
            label: model.label.or(base.label),
        })
    }
}
