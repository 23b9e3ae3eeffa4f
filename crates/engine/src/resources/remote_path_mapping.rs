use serde::{Deserialize, Serialize};
use sonarr_api::{models, paths};
use sonarr_registry::resources;
use sonarr_types::Schema;

use crate::entity::RestEntity;
use crate::errors::HandlerError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemotePathMappingModel {
    pub id: Option<i64>,
    pub host: Option<String>,
    pub remote_path: Option<String>,
    pub local_path: Option<String>,
}

pub struct RemotePathMappingEntity;

impl RestEntity for RemotePathMappingEntity {
    type Wire = models::RemotePathMapping;
    type Model = RemotePathMappingModel;

    const NAME: &'static str = "remote_path_mapping";
    const PATH: &'static str = paths::REMOTE_PATH_MAPPING;

    fn schema() -> Schema {
        resources::remote_path_mapping()
    }

    fn to_model(wire: models::RemotePathMapping) -> Result<RemotePathMappingModel, HandlerError> {
        Ok(RemotePathMappingModel {
            id: wire.id,
            host: wire.host,
            remote_path: wire.remote_path,
            local_path: wire.local_path,
        })
    }

    fn to_wire(model: RemotePathMappingModel, base: models::RemotePathMapping) -> Result<models::RemotePathMapping, HandlerError> {
        Ok(models::RemotePathMapping {
            id: model.id.or(base.id),
            host: model.host.or(base.host),
            remote_path: model.remote_path.or(base.remote_path),
            local_path: model.local_path.or(base.local_path),
        })
    }
}
