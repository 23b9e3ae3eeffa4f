use serde::{Deserialize, Serialize};
use sonarr_api::{models, paths};
use sonarr_registry::resources;
use sonarr_types::Schema;

use crate::entity::RestEntity;
use crate::errors::HandlerError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DelayProfileModel {
    pub id: Option<i64>,
    pub enable_usenet: Option<bool>,
    pub enable_torrent: Option<bool>,
    pub bypass_if_highest_quality: Option<bool>,
    pub bypass_if_above_custom_format_score: Option<bool>,
    pub minimum_custom_format_score: Option<i64>,
    pub usenet_delay: Option<i64>,
    pub torrent_delay: Option<i64>,
    pub order: Option<i64>,
    pub preferred_protocol: Option<String>,
    pub tags: Option<Vec<i64>>,
}

pub struct DelayProfileEntity;

impl RestEntity for DelayProfileEntity {
    type Wire = models::DelayProfile;
    type Model = DelayProfileModel;

    const NAME: &'static str = "delay_profile";
    const PATH: &'static str = paths::DELAY_PROFILE;

    fn schema() -> Schema {
        resources::delay_profile()
    }

    fn to_model(wire: models::DelayProfile) -> Result<DelayProfileModel, HandlerError> {
        Ok(DelayProfileModel {
            id: wire.id,
            enable_usenet: wire.enable_usenet,
            enable_torrent: wire.enable_torrent,
            bypass_if_highest_quality: wire.bypass_if_highest_quality,
            bypass_if_above_custom_format_score: wire.bypass_if_above_custom_format_score,
            minimum_custom_format_score: wire.minimum_custom_format_score,
            usenet_delay: wire.usenet_delay,
            torrent_delay: wire.torrent_delay,
            order: wire.order,
            preferred_protocol: wire.preferred_protocol,
            tags: Some(wire.tags),
        })
    }

    fn to_wire(model: DelayProfileModel, base: models::DelayProfile) -> Result<models::DelayProfile, HandlerError> {
        Ok(models::DelayProfile {
            id: model.id.or(base.id),
            enable_usenet: model.enable_usenet.or(base.enable_usenet),
            enable_torrent: model.enable_torrent.or(base.enable_torrent),
            preferred_protocol: model.preferred_protocol.or(base.preferred_protocol),
            usenet_delay: model.usenet_delay.or(base.usenet_delay),
            torrent_delay: model.torrent_delay.or(base.torrent_delay),
            bypass_if_highest_quality: model.bypass_if_highest_quality.or(base.bypass_if_highest_quality),
            bypass_if_above_custom_format_score: model
                .bypass_if_above_custom_format_score
                .or(base.bypass_if_above_custom_format_score),
            minimum_custom_format_score: model.minimum_custom_format_score.or(base.minimum_custom_format_score),
            order: model.order.or(base.order),
            tags: model.tags.unwrap_or(base.tags),
        })
    }
}
