use serde::{Deserialize, Serialize};
use sonarr_api::{models, paths};
use sonarr_registry::resources;
use sonarr_types::Schema;

use crate::entity::{Lifecycle, RestEntity};
use crate::errors::HandlerError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityDefinitionModel {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub min_size: Option<f64>,
    pub max_size: Option<f64>,
    pub preferred_size: Option<f64>,
    pub quality_id: Option<i64>,
    pub quality_name: Option<String>,
    pub source: Option<String>,
    pub resolution: Option<i64>,
}

pub struct QualityDefinitionEntity;

impl RestEntity for QualityDefinitionEntity {
    type Wire = models::QualityDefinition;
    type Model = QualityDefinitionModel;

    const NAME: &'static str = "quality_definition";
    const PATH: &'static str = paths::QUALITY_DEFINITION;
    const LIFECYCLE: Lifecycle = Lifecycle::Predefined;
    const MERGE_ON_UPDATE: bool = true;

    fn schema() -> Schema {
        resources::quality_definition()
    }

    fn to_model(wire: models::QualityDefinition) -> Result<QualityDefinitionModel, HandlerError> {
        let quality = wire.quality.unwrap_or_default();
        Ok(QualityDefinitionModel {
            id: wire.id,
            title: wire.title,
            min_size: wire.min_size,
            max_size: wire.max_size,
            preferred_size: wire.preferred_size,
            quality_id: quality.id,
            quality_name: quality.name,
            source: quality.source,
            resolution: quality.resolution,
        })
    }

    /// The quality itself is fixed upstream and always comes from `base`.
    fn to_wire(model: QualityDefinitionModel, base: models::QualityDefinition) -> Result<models::QualityDefinition, HandlerError> {
        Ok(models::QualityDefinition {
            id: model.id.or(base.id),
            title: model.title.or(base.title),
            min_size: model.min_size.or(base.min_size),
            max_size: model.max_size.or(base.max_size),
            preferred_size: model.preferred_size.or(base.preferred_size),
            ..base
        })
    }
}
