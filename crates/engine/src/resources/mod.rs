//! Concrete non-polymorphic resources.

mod config;
mod delay_profile;
mod host;
mod import_list_exclusion;
mod quality_definition;
mod quality_profile;
mod release_profile;
mod remote_path_mapping;
mod root_folder;
mod series;
mod specifications;
mod tag;

pub use config::{DownloadClientConfigEntity, IndexerConfigEntity, MediaManagementEntity, NamingEntity};
pub use delay_profile::DelayProfileEntity;
pub use host::HostEntity;
pub use import_list_exclusion::ImportListExclusionEntity;
pub use quality_definition::QualityDefinitionEntity;
pub use quality_profile::QualityProfileEntity;
pub use release_profile::ReleaseProfileEntity;
pub use remote_path_mapping::RemotePathMappingEntity;
pub use root_folder::RootFolderEntity;
pub use series::SeriesEntity;
pub use specifications::{AutoTagEntity, Conditions, CustomFormatEntity, SpecificationModel};
pub use tag::TagEntity;

use sonarr_api::models;

use crate::entity::{EntityResource, RestEntity};
use crate::handler::Resource;
use crate::items::family_resources;

fn boxed<E: RestEntity>() -> Box<dyn Resource> {
    Box::new(EntityResource::<E>::new())
}

/// Every resource the provider serves, provider-item variants included.
pub fn all() -> Vec<Box<dyn Resource>> {
    let mut resources = vec![
        boxed::<TagEntity>(),
        boxed::<RootFolderEntity>(),
        boxed::<DelayProfileEntity>(),
        boxed::<QualityProfileEntity>(),
        boxed::<QualityDefinitionEntity>(),
        boxed::<ReleaseProfileEntity>(),
        boxed::<RemotePathMappingEntity>(),
        boxed::<SeriesEntity>(),
        boxed::<AutoTagEntity>(),
        boxed::<CustomFormatEntity>(),
        boxed::<ImportListExclusionEntity>(),
        boxed::<NamingEntity>(),
        boxed::<MediaManagementEntity>(),
        boxed::<HostEntity>(),
        boxed::<DownloadClientConfigEntity>(),
        boxed::<IndexerConfigEntity>(),
    ];
    resources.extend(family_resources::<models::DownloadClient>());
    resources.extend(family_resources::<models::Indexer>());
    resources.extend(family_resources::<models::Notification>());
    resources.extend(family_resources::<models::ImportList>());
    resources.extend(family_resources::<models::Metadata>());
    resources
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn resource_names_are_unique() {
        let resources = all();
        let names: HashSet<_> = resources.iter().map(|resource| resource.entity().to_string()).collect();
        assert_eq!(names.len(), resources.len());
        assert_eq!(resources.len(), 16 + 64);
        assert!(names.contains("download_client_qbittorrent"));
        assert!(names.contains("indexer_config"));
    }

    #[test]
    fn every_schema_has_an_id() {
        for resource in all() {
            assert!(resource.schema().contains("id"), "{} has no id", resource.entity());
        }
    }
}
