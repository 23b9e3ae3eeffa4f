//! Provider-item adapter.
//!
//! Every variant of a polymorphic family is served by one
//! [`ProviderItemResource`]. Writes pin the variant's discriminators and
//! encode its flat field attributes into the `fields` envelope; reads check
//! the discriminator, decode the envelope against the prior state and drop the
//! discriminators again, so they never reach host state.

use std::marker::PhantomData;

use async_trait::async_trait;
use heck::ToLowerCamelCase;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sonarr_api::models::{self, ProviderItem};
use sonarr_api::{Query, SonarrClient, paths};
use sonarr_registry::{ItemFamily, VariantSpec};
use sonarr_types::{Context, Diagnostics, ErrorKind, Intent, ProviderData, Schema, State};
use sonarr_util::{decode_fields, encode_fields, parse_import_id, record_map};
use tracing::{debug, warn};

use crate::entity::preserve_sensitive;
use crate::errors::{HandlerError, import_error, resource_error};
use crate::handler::{ClientSlot, Resource, Response};

/// Provider-item writes skip the server's connection test.
pub const FORCE_SAVE: Query<'static> = &[("forceSave", "true")];

/// Wire record of one provider-item family.
pub trait FamilyWire: ProviderItem + Serialize + DeserializeOwned + Default + Send + Sync + 'static {
    const FAMILY: ItemFamily;
}

impl FamilyWire for models::DownloadClient {
    const FAMILY: ItemFamily = ItemFamily::DownloadClient;
}

impl FamilyWire for models::Indexer {
    const FAMILY: ItemFamily = ItemFamily::Indexer;
}

impl FamilyWire for models::Notification {
    const FAMILY: ItemFamily = ItemFamily::Notification;
}

impl FamilyWire for models::ImportList {
    const FAMILY: ItemFamily = ItemFamily::ImportList;
}

impl FamilyWire for models::Metadata {
    const FAMILY: ItemFamily = ItemFamily::Metadata;
}

pub const fn family_path(family: ItemFamily) -> &'static str {
    match family {
        ItemFamily::DownloadClient => paths::DOWNLOAD_CLIENT,
        ItemFamily::Indexer => paths::INDEXER,
        ItemFamily::Notification => paths::NOTIFICATION,
        ItemFamily::ImportList => paths::IMPORT_LIST,
        ItemFamily::Metadata => paths::METADATA,
    }
}

/// Pick the attributes of `schema` out of a camelCase wire document.
pub fn project(document: &Map<String, Value>, schema: &Schema) -> Map<String, Value> {
    schema
        .attributes
        .keys()
        .map(|name| {
            let value = document.get(&name.to_lower_camel_case()).cloned().unwrap_or(Value::Null);
            (name.clone(), value)
        })
        .collect()
}

/// Serialize a wire record into its JSON document.
pub fn wire_document<W: Serialize>(wire: &W) -> Result<Map<String, Value>, HandlerError> {
    match serde_json::to_value(wire)? {
        Value::Object(document) => Ok(document),
        _ => Ok(Map::new()),
    }
}

/// Build the wire record for `plan`.
pub fn encode_item<W: FamilyWire>(spec: &VariantSpec, generic: &Schema, plan: &State) -> Result<W, HandlerError> {
    let mut document = Map::new();
    for name in generic.attributes.keys() {
        let value = plan.get(name).to_record_json();
        if !value.is_null() {
            document.insert(name.to_lower_camel_case(), value);
        }
    }
    document.insert("implementation".into(), spec.implementation.into());
    document.insert("configContract".into(), spec.config_contract.into());
    if let Some(protocol) = spec.protocol {
        document.insert("protocol".into(), protocol.into());
    }
    if let Some(list_type) = spec.list_type {
        document.insert("listType".into(), list_type.into());
    }

    let record = record_map(plan, spec.fields.attributes().map(|(name, _)| name));
    let fields = encode_fields(&spec.fields, &record)?;
    document.insert("fields".into(), serde_json::to_value(fields)?);
    Ok(serde_json::from_value(Value::Object(document))?)
}

/// Project a wire record into variant state.
///
/// Sensitive fields echoed empty or masked keep their value from `prior`.
pub fn decode_item<W: FamilyWire>(
    spec: &VariantSpec,
    schema: &Schema,
    wire: &W,
    prior: &State,
) -> Result<State, HandlerError> {
    if let Some(found) = wire.implementation()
        && found != spec.implementation
    {
        return Err(HandlerError::ImplementationMismatch {
            expected: spec.implementation,
            found: found.to_string(),
        });
    }

    let prior_fields = record_map(prior, spec.fields.attributes().map(|(name, _)| name));
    let fields = decode_fields(&spec.fields, wire.fields(), &prior_fields)?;

    let mut record = project(&wire_document(wire)?, &W::FAMILY.generic_schema());
    record.extend(fields);
    let mut state = State::from_json_map(&record, schema)?;
    preserve_sensitive(schema, prior, &mut state);
    Ok(state)
}

/// Lifecycle handler for one provider-item variant.
pub struct ProviderItemResource<W: FamilyWire> {
    spec: &'static VariantSpec,
    entity: String,
    schema: Schema,
    generic: Schema,
    client: ClientSlot,
    wire: PhantomData<fn() -> W>,
}

impl<W: FamilyWire> ProviderItemResource<W> {
    pub fn new(spec: &'static VariantSpec) -> Self {
        Self {
            spec,
            entity: spec.entity_name(),
            schema: spec.schema(),
            generic: W::FAMILY.generic_schema(),
            client: ClientSlot::default(),
            wire: PhantomData,
        }
    }

    fn item_path(id: i64) -> String {
        paths::item(family_path(W::FAMILY), id)
    }

    async fn write(&self, ctx: &Context, plan: &State, id: Option<i64>) -> Result<State, HandlerError> {
        let client = self.client.get()?;
        let mut body: W = encode_item(self.spec, &self.generic, plan)?;
        let written: W = match id {
            None => client.post_json(ctx, family_path(W::FAMILY), FORCE_SAVE, &body).await?,
            Some(id) => {
                // The id travels in the body as well as the path.
                body = with_id(body, id)?;
                client.put_json(ctx, &Self::item_path(id), FORCE_SAVE, &body).await?
            }
        };
        let state = decode_item(self.spec, &self.schema, &written, plan)?;
        debug!(entity = %self.entity, id = state.id(), "written");
        Ok(state)
    }

    async fn fetch(&self, client: &SonarrClient, ctx: &Context, id: i64, prior: &State) -> Result<State, HandlerError> {
        let wire: W = client.get_json(ctx, &Self::item_path(id), &[]).await?;
        decode_item(self.spec, &self.schema, &wire, prior)
    }

    fn failure(&self, intent: Intent, state: Option<State>, err: &HandlerError) -> Response {
        let mut diags = Diagnostics::new();
        diags.push(resource_error(intent, &self.entity, err));
        Response::failed(state, diags)
    }
}

fn with_id<W: FamilyWire>(wire: W, id: i64) -> Result<W, HandlerError> {
    let mut document = wire_document(&wire)?;
    document.insert("id".into(), id.into());
    Ok(serde_json::from_value(Value::Object(document))?)
}

#[async_trait]
impl<W: FamilyWire> Resource for ProviderItemResource<W> {
    fn entity(&self) -> &str {
        &self.entity
    }

    fn schema(&self) -> Schema {
        self.schema.clone()
    }

    fn configure(&mut self, data: Option<&ProviderData>) -> Diagnostics {
        self.client
            .configure(data, ErrorKind::UnexpectedResourceConfigureType, &self.entity)
    }

    async fn create(&self, ctx: &Context, plan: &State) -> Response {
        let diags = self.schema.validate(plan);
        if diags.has_error() {
            return Response::failed(None, diags);
        }
        match self.write(ctx, plan, None).await {
            Ok(state) => Response::state(state),
            Err(err) => {
                warn!(entity = %self.entity, error = %err, "create failed");
                self.failure(Intent::Create, None, &err)
            }
        }
    }

    async fn read(&self, ctx: &Context, state: &State) -> Response {
        let result = async {
            let client = self.client.get()?;
            let id = state.id().ok_or(HandlerError::MissingId)?;
            self.fetch(client, ctx, id, state).await
        }
        .await;
        match result {
            Ok(next) => Response::state(next),
            Err(err) if err.is_not_found() => {
                warn!(entity = %self.entity, id = state.id(), "resource not found, removing from state");
                Response::removed()
            }
            Err(err) => self.failure(Intent::Read, Some(state.clone()), &err),
        }
    }

    async fn update(&self, ctx: &Context, plan: &State, prior: &State) -> Response {
        let diags = self.schema.validate(plan);
        if diags.has_error() {
            return Response::failed(Some(prior.clone()), diags);
        }
        let Some(id) = plan.id().or_else(|| prior.id()) else {
            return self.failure(Intent::Update, Some(prior.clone()), &HandlerError::MissingId);
        };
        match self.write(ctx, plan, Some(id)).await {
            Ok(state) => Response::state(state),
            Err(err) => {
                warn!(entity = %self.entity, id, error = %err, "update failed");
                self.failure(Intent::Update, Some(prior.clone()), &err)
            }
        }
    }

    async fn delete(&self, ctx: &Context, state: &State) -> Response {
        let result = async {
            let client = self.client.get()?;
            let id = state.id().ok_or(HandlerError::MissingId)?;
            client.delete(ctx, &Self::item_path(id), &[]).await?;
            Ok::<_, HandlerError>(id)
        }
        .await;
        match result {
            Ok(id) => {
                debug!(entity = %self.entity, id, "deleted");
                Response::removed()
            }
            Err(err) => self.failure(Intent::Delete, Some(state.clone()), &err),
        }
    }

    async fn import(&self, ctx: &Context, raw: &str) -> Response {
        let id = match parse_import_id(raw) {
            Ok(id) => id,
            Err(err) => {
                let mut diags = Diagnostics::new();
                diags.push(import_error(&self.entity, raw, &err));
                return Response::failed(None, diags);
            }
        };
        let result = async {
            let client = self.client.get()?;
            self.fetch(client, ctx, id, &State::new()).await
        }
        .await;
        match result {
            Ok(state) => Response::state(state),
            Err(err) => self.failure(Intent::Read, None, &err),
        }
    }
}

/// One handler per variant of the family of `W`.
pub fn family_resources<W: FamilyWire>() -> Vec<Box<dyn Resource>> {
    W::FAMILY
        .variants()
        .map(|spec| Box::new(ProviderItemResource::<W>::new(spec)) as Box<dyn Resource>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sonarr_registry::variant;
    use sonarr_types::AttrValue;

    fn pneumatic() -> &'static VariantSpec {
        variant(ItemFamily::DownloadClient, "pneumatic").unwrap()
    }

    fn pneumatic_plan() -> State {
        let mut plan = State::new();
        plan.set("name", "x");
        plan.set("nzb_folder", "/a/");
        plan.set("strm_folder", "/b/");
        plan.set("tags", AttrValue::int_set([]));
        plan.set("id", AttrValue::Unknown);
        plan
    }

    #[test]
    fn encode_pins_the_discriminators() {
        let spec = pneumatic();
        let wire: models::DownloadClient =
            encode_item(spec, &ItemFamily::DownloadClient.generic_schema(), &pneumatic_plan()).unwrap();
        assert_eq!(wire.implementation.as_deref(), Some("Pneumatic"));
        assert_eq!(wire.config_contract.as_deref(), Some("PneumaticSettings"));
        assert_eq!(wire.protocol.as_deref(), Some("usenet"));
        assert_eq!(wire.name.as_deref(), Some("x"));
        assert_eq!(wire.id, None);
        let names: Vec<_> = wire.fields.iter().map(|field| field.name.as_str()).collect();
        assert!(names.contains(&"nzbFolder") && names.contains(&"strmFolder"));
    }

    #[test]
    fn decode_drops_the_discriminators() {
        let spec = pneumatic();
        let wire: models::DownloadClient = serde_json::from_value(json!({
            "id": 7,
            "name": "x",
            "enable": true,
            "priority": 1,
            "implementation": "Pneumatic",
            "configContract": "PneumaticSettings",
            "protocol": "usenet",
            "tags": [],
            "fields": [
                {"name": "nzbFolder", "value": "/a/"},
                {"name": "strmFolder", "value": "/b/"},
                {"name": "unknownField", "value": 3}
            ]
        }))
        .unwrap();
        let state = decode_item(spec, &spec.schema(), &wire, &State::new()).unwrap();
        assert_eq!(state.id(), Some(7));
        assert_eq!(state.get("nzb_folder").as_str(), Some("/a/"));
        assert_eq!(state.get("enable").as_bool(), Some(true));
        assert!(!state.names().any(|name| matches!(name, "implementation" | "config_contract" | "protocol")));
    }

    #[test]
    fn decode_rejects_another_variant() {
        let spec = pneumatic();
        let wire = models::DownloadClient {
            id: Some(7),
            implementation: Some("Sabnzbd".into()),
            ..models::DownloadClient::default()
        };
        let err = decode_item(spec, &spec.schema(), &wire, &State::new()).unwrap_err();
        assert!(matches!(err, HandlerError::ImplementationMismatch { expected: "Pneumatic", .. }));
    }

    #[test]
    fn masked_secrets_keep_the_prior_value() {
        let spec = variant(ItemFamily::Indexer, "newznab").unwrap();
        let wire: models::Indexer = serde_json::from_value(json!({
            "id": 3,
            "name": "nz",
            "implementation": "Newznab",
            "fields": [
                {"name": "baseUrl", "value": "https://nz.example"},
                {"name": "apiKey", "value": "********"},
                {"name": "categories", "value": []}
            ]
        }))
        .unwrap();
        let mut prior = State::new();
        prior.set("api_key", "secret");
        let state = decode_item(spec, &spec.schema(), &wire, &prior).unwrap();
        assert_eq!(state.get("api_key").as_str(), Some("secret"));
        assert_eq!(state.get("categories"), &AttrValue::int_set([]));
    }

    #[test]
    fn import_lists_carry_the_list_type() {
        let spec = variant(ItemFamily::ImportList, "sonarr").unwrap();
        let mut plan = State::new();
        plan.set("name", "upstream");
        plan.set("root_folder_path", "/tv");
        plan.set("quality_profile_id", 1_i64);
        let wire: models::ImportList = encode_item(spec, &ItemFamily::ImportList.generic_schema(), &plan).unwrap();
        assert_eq!(wire.list_type.as_deref(), spec.list_type);
        assert_eq!(wire.root_folder_path.as_deref(), Some("/tv"));
    }

    #[test]
    fn every_family_variant_gets_a_handler() {
        assert_eq!(family_resources::<models::DownloadClient>().len(), 16);
        assert_eq!(family_resources::<models::Metadata>().len(), 4);
        let handlers = family_resources::<models::Notification>();
        assert!(handlers.iter().any(|handler| handler.entity() == "notification_webhook"));
    }
}
