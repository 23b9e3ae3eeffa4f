use serde::{Deserialize, Serialize};
use sonarr_api::{models, paths};
use sonarr_registry::resources;
use sonarr_types::Schema;

use crate::entity::RestEntity;
use crate::errors::HandlerError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityModel {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub source: Option<String>,
    pub resolution: Option<i64>,
}

/// An allowed entry of the profile. Without an `id` it stands for the single
/// quality it holds; with one it is a named group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityGroupModel {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub qualities: Option<Vec<QualityModel>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatItemModel {
    pub format: Option<i64>,
    pub name: Option<String>,
    pub score: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityProfileModel {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub upgrade_allowed: Option<bool>,
    pub cutoff: Option<i64>,
    pub cutoff_format_score: Option<i64>,
    pub min_format_score: Option<i64>,
    pub min_upgrade_format_score: Option<i64>,
    pub quality_groups: Option<Vec<QualityGroupModel>>,
    pub format_items: Option<Vec<FormatItemModel>>,
}

impl From<models::Quality> for QualityModel {
    fn from(quality: models::Quality) -> Self {
        Self {
            id: quality.id,
            name: quality.name,
            source: quality.source,
            resolution: quality.resolution,
        }
    }
}

impl From<QualityModel> for models::Quality {
    fn from(quality: QualityModel) -> Self {
        Self {
            id: quality.id,
            name: quality.name,
            source: quality.source,
            resolution: quality.resolution,
        }
    }
}

fn allowed_quality(quality: QualityModel) -> models::QualityProfileItem {
    models::QualityProfileItem {
        quality: Some(quality.into()),
        allowed: Some(true),
        ..models::QualityProfileItem::default()
    }
}

fn groups_to_items(groups: Vec<QualityGroupModel>) -> Vec<models::QualityProfileItem> {
    let mut items = Vec::with_capacity(groups.len());
    for group in groups {
        let qualities = group.qualities.unwrap_or_default();
        match group.id {
            Some(id) => items.push(models::QualityProfileItem {
                id: Some(id),
                name: group.name,
                quality: None,
                items: qualities.into_iter().map(allowed_quality).collect(),
                allowed: Some(true),
            }),
            None => items.extend(qualities.into_iter().map(allowed_quality)),
        }
    }
    items
}

/// Allowed entries only; disallowed ones are upstream bookkeeping.
fn items_to_groups(items: Vec<models::QualityProfileItem>) -> Vec<QualityGroupModel> {
    items
        .into_iter()
        .filter(|item| item.allowed.unwrap_or(false))
        .filter_map(|item| match item.quality {
            Some(quality) => Some(QualityGroupModel {
                id: None,
                name: quality.name.clone(),
                qualities: Some(vec![quality.into()]),
            }),
            None if !item.items.is_empty() => Some(QualityGroupModel {
                id: item.id,
                name: item.name,
                qualities: Some(
                    item.items
                        .into_iter()
                        .filter_map(|nested| nested.quality.map(QualityModel::from))
                        .collect(),
                ),
            }),
            None => None,
        })
        .collect()
}

pub struct QualityProfileEntity;

impl RestEntity for QualityProfileEntity {
    type Wire = models::QualityProfile;
    type Model = QualityProfileModel;

    const NAME: &'static str = "quality_profile";
    const PATH: &'static str = paths::QUALITY_PROFILE;

    fn schema() -> Schema {
        resources::quality_profile()
    }

    fn to_model(wire: models::QualityProfile) -> Result<QualityProfileModel, HandlerError> {
        Ok(QualityProfileModel {
            id: wire.id,
            name: wire.name,
            upgrade_allowed: wire.upgrade_allowed,
            cutoff: wire.cutoff,
            cutoff_format_score: wire.cutoff_format_score,
            min_format_score: wire.min_format_score,
            min_upgrade_format_score: wire.min_upgrade_format_score,
            quality_groups: Some(items_to_groups(wire.items)),
            format_items: Some(
                wire.format_items
                    .into_iter()
                    .map(|item| FormatItemModel {
                        format: item.format,
                        name: item.name,
                        score: item.score,
                    })
                    .collect(),
            ),
        })
    }

    fn to_wire(model: QualityProfileModel, base: models::QualityProfile) -> Result<models::QualityProfile, HandlerError> {
        let format_items = match model.format_items {
            Some(items) => items
                .into_iter()
                .map(|item| models::FormatItem {
                    format: item.format,
                    name: item.name,
                    score: item.score,
                })
                .collect(),
            None => base.format_items,
        };
        Ok(models::QualityProfile {
            id: model.id.or(base.id),
            name: model.name.or(base.name),
            upgrade_allowed: model.upgrade_allowed.or(base.upgrade_allowed),
            cutoff: model.cutoff.or(base.cutoff),
            cutoff_format_score: model.cutoff_format_score.or(base.cutoff_format_score),
            min_format_score: model.min_format_score.or(base.min_format_score),
            min_upgrade_format_score: model.min_upgrade_format_score.or(base.min_upgrade_format_score),
            items: model.quality_groups.map(groups_to_items).unwrap_or(base.items),
            format_items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quality(id: i64, name: &str) -> QualityModel {
        QualityModel {
            id: Some(id),
            name: Some(name.into()),
            source: Some("web".into()),
            resolution: Some(1080),
        }
    }

    #[test]
    fn groups_and_single_qualities_map_to_profile_items() {
        let groups = vec![
            QualityGroupModel {
                id: Some(1001),
                name: Some("WEB 1080p".into()),
                qualities: Some(vec![quality(3, "WEBDL-1080p"), quality(15, "WEBRip-1080p")]),
            },
            QualityGroupModel {
                id: None,
                name: Some("Bluray-1080p".into()),
                qualities: Some(vec![quality(7, "Bluray-1080p")]),
            },
        ];
        let items = groups_to_items(groups.clone());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, Some(1001));
        assert_eq!(items[0].items.len(), 2);
        assert_eq!(items[1].quality.as_ref().and_then(|q| q.id), Some(7));
        assert!(items.iter().all(|item| item.allowed == Some(true)));

        assert_eq!(items_to_groups(items), groups);
    }

    #[test]
    fn disallowed_items_are_not_projected() {
        let items = vec![models::QualityProfileItem {
            quality: Some(quality(1, "SDTV").into()),
            allowed: Some(false),
            ..models::QualityProfileItem::default()
        }];
        assert!(items_to_groups(items).is_empty());
    }
}
