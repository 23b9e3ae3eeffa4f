use serde::{Deserialize, Serialize};
use sonarr_api::{models, paths};
use sonarr_registry::resources;
use sonarr_types::Schema;

use crate::entity::RestEntity;
use crate::errors::HandlerError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnmappedFolderModel {
    pub name: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootFolderModel {
    pub id: Option<i64>,
    pub path: Option<String>,
    pub accessible: Option<bool>,
    pub unmapped_folders: Option<Vec<UnmappedFolderModel>>,
}

pub struct RootFolderEntity;

impl RestEntity for RootFolderEntity {
    type Wire = models::RootFolder;
    type Model = RootFolderModel;

    const NAME: &'static str = "root_folder";
    const PATH: &'static str = paths::ROOT_FOLDER;
    // A path change replaces the folder; nothing else is writable.
    const UPDATABLE: bool = false;

    fn schema() -> Schema {
        resources::root_folder()
    }

    fn to_model(wire: models::RootFolder) -> Result<RootFolderModel, HandlerError> {
        Ok(RootFolderModel {
            id: wire.id,
            path: wire.path,
            accessible: wire.accessible,
            unmapped_folders: Some(
                wire.unmapped_folders
                    .into_iter()
                    .map(|folder| UnmappedFolderModel {
                        name: folder.name,
                        path: folder.path,
                    })
                    .collect(),
            ),
        })
    }

    fn to_wire(model: RootFolderModel, base: models::RootFolder) -> Result<models::RootFolder, HandlerError> {
        Ok(models::RootFolder {
            id: model.id.or(base.id),
            path: model.path.or(base.path),
            ..base
        })
    }
}
