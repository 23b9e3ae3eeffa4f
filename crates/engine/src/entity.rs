//! Generic lifecycle skeleton for non-polymorphic entities.
//!
//! A [`RestEntity`] describes one upstream collection: its wire model, the
//! host model projected into state, and how the two convert. [`EntityResource`]
//! runs the lifecycle operations on top of it.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sonarr_api::{SonarrClient, paths};
use sonarr_types::{AttrValue, AttributeType, Context, Diagnostics, ErrorKind, Intent, ProviderData, Schema, State};
use sonarr_util::{MASKED_SENTINEL, parse_import_id};
use tracing::{debug, warn};

use crate::errors::{HandlerError, import_error, resource_error};
use crate::handler::{ClientSlot, Resource, Response};

/// How an entity's instances come and go upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// POST to create, PUT `/{id}` to update, DELETE `/{id}` to delete.
    Managed,
    /// Exactly one instance with id 1. Create and update PUT; delete detaches.
    Singleton,
    /// A fixed upstream set addressed by a user-supplied id. Delete detaches.
    Predefined,
}

/// Id every singleton instance carries.
pub const SINGLETON_ID: i64 = 1;

pub trait RestEntity: Send + Sync + 'static {
    type Wire: Serialize + DeserializeOwned + Default + Send + Sync;
    type Model: Serialize + DeserializeOwned + Send;

    /// Entity name without the provider prefix.
    const NAME: &'static str;
    const PATH: &'static str;
    const LIFECYCLE: Lifecycle = Lifecycle::Managed;
    /// Writes start from the current upstream document so unmodelled fields survive.
    const MERGE_ON_UPDATE: bool = false;
    /// The upstream service accepts PUT for this entity.
    const UPDATABLE: bool = true;
    const DELETE_QUERY: &'static [(&'static str, &'static str)] = &[];

    fn schema() -> Schema;

    fn to_model(wire: Self::Wire) -> Result<Self::Model, HandlerError>;

    /// Write `model` onto `base`: the current upstream document, or a default.
    fn to_wire(model: Self::Model, base: Self::Wire) -> Result<Self::Wire, HandlerError>;
}

/// Project a wire document into host state, keeping sensitive values from `prior`.
pub fn wire_to_state<E: RestEntity>(wire: E::Wire, schema: &Schema, prior: &State) -> Result<State, HandlerError> {
    let mut state = State::from_record(&E::to_model(wire)?, schema)?;
    preserve_sensitive(schema, prior, &mut state);
    Ok(state)
}

pub async fn list_states<E: RestEntity>(client: &SonarrClient, ctx: &Context, schema: &Schema) -> Result<Vec<State>, HandlerError> {
    let items: Vec<E::Wire> = client.list_json(ctx, E::PATH, &[]).await?;
    items
        .into_iter()
        .map(|wire| wire_to_state::<E>(wire, schema, &State::new()))
        .collect()
}

/// Restore sensitive values the server echoed back empty or masked.
///
/// Applies to top-level attributes and to attributes of nested objects.
pub fn preserve_sensitive(schema: &Schema, prior: &State, next: &mut State) {
    for (name, attribute) in &schema.attributes {
        let prior_value = prior.get(name);
        if attribute.sensitive {
            if is_masked(next.get(name)) && !prior_value.is_null() {
                next.set(name.clone(), prior_value.clone());
            }
            continue;
        }
        if let (AttributeType::Object(nested), AttrValue::Object(prior_map)) = (&attribute.r#type, prior_value)
            && let AttrValue::Object(next_map) = next.get(name)
        {
            let mut merged = next_map.clone();
            for (key, nested_attribute) in nested {
                let kept = prior_map.get(key).filter(|value| !value.is_null());
                if nested_attribute.sensitive
                    && merged.get(key).is_none_or(is_masked)
                    && let Some(kept) = kept
                {
                    merged.insert(key.clone(), kept.clone());
                }
            }
            next.set(name.clone(), AttrValue::Object(merged));
        }
    }
}

fn is_masked(value: &AttrValue) -> bool {
    match value {
        AttrValue::Null => true,
        AttrValue::String(text) => text.is_empty() || text == MASKED_SENTINEL,
        _ => false,
    }
}

/// Lifecycle handler for one [`RestEntity`].
pub struct EntityResource<E: RestEntity> {
    client: ClientSlot,
    schema: Schema,
    entity: PhantomData<fn() -> E>,
}

impl<E: RestEntity> Default for EntityResource<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: RestEntity> EntityResource<E> {
    pub fn new() -> Self {
        Self {
            client: ClientSlot::default(),
            schema: E::schema(),
            entity: PhantomData,
        }
    }

    fn item_path(id: i64) -> String {
        paths::item(E::PATH, id)
    }

    /// GET the single instance of a singleton, or one entity by id.
    async fn fetch(&self, client: &SonarrClient, ctx: &Context, id: i64) -> Result<E::Wire, HandlerError> {
        let path = match E::LIFECYCLE {
            Lifecycle::Singleton => E::PATH.to_string(),
            Lifecycle::Managed | Lifecycle::Predefined => Self::item_path(id),
        };
        Ok(client.get_json(ctx, &path, &[]).await?)
    }

    async fn write(&self, ctx: &Context, plan: &State, id: Option<i64>) -> Result<State, HandlerError> {
        let client = self.client.get()?;
        let model: E::Model = plan.to_record()?;
        let base = match id {
            Some(id) if E::MERGE_ON_UPDATE => self.fetch(client, ctx, id).await?,
            _ => E::Wire::default(),
        };
        let body = E::to_wire(model, base)?;
        let written: E::Wire = match (E::LIFECYCLE, id) {
            (Lifecycle::Managed, None) => client.post_json(ctx, E::PATH, &[], &body).await?,
            (_, Some(id)) => client.put_json(ctx, &Self::item_path(id), &[], &body).await?,
            (_, None) => return Err(HandlerError::MissingId),
        };
        let state = wire_to_state::<E>(written, &self.schema, plan)?;
        debug!(entity = E::NAME, id = state.id(), "written");
        Ok(state)
    }

    /// Fetch the upstream document behind `state`.
    async fn refresh(&self, ctx: &Context, state: &State) -> Result<State, HandlerError> {
        let client = self.client.get()?;
        let id = match E::LIFECYCLE {
            Lifecycle::Singleton => SINGLETON_ID,
            Lifecycle::Managed | Lifecycle::Predefined => state.id().ok_or(HandlerError::MissingId)?,
        };
        let wire = self.fetch(client, ctx, id).await?;
        wire_to_state::<E>(wire, &self.schema, state)
    }

    fn validate(&self, plan: &State) -> Option<Response> {
        let diags = self.schema.validate(plan);
        diags.has_error().then(|| Response::failed(None, diags))
    }

    /// Id a plan writes to, for lifecycles that do not let the server assign it.
    fn fixed_id(plan: &State) -> Option<i64> {
        match E::LIFECYCLE {
            Lifecycle::Managed => None,
            Lifecycle::Singleton => Some(SINGLETON_ID),
            Lifecycle::Predefined => plan.id(),
        }
    }
}

#[async_trait]
impl<E: RestEntity> Resource for EntityResource<E> {
    fn entity(&self) -> &str {
        E::NAME
    }

    fn schema(&self) -> Schema {
        self.schema.clone()
    }

    fn configure(&mut self, data: Option<&ProviderData>) -> Diagnostics {
        self.client.configure(data, ErrorKind::UnexpectedResourceConfigureType, E::NAME)
    }

    async fn create(&self, ctx: &Context, plan: &State) -> Response {
        if let Some(invalid) = self.validate(plan) {
            return invalid;
        }
        match self.write(ctx, plan, Self::fixed_id(plan)).await {
            Ok(state) => Response::state(state),
            Err(err) => {
                warn!(entity = E::NAME, error = %err, "create failed");
                let mut diags = Diagnostics::new();
                diags.push(resource_error(Intent::Create, E::NAME, &err));
                Response::failed(None, diags)
            }
        }
    }

    async fn read(&self, ctx: &Context, state: &State) -> Response {
        match self.refresh(ctx, state).await {
            Ok(next) => Response::state(next),
            Err(err) if err.is_not_found() => {
                warn!(entity = E::NAME, id = state.id(), "resource not found, removing from state");
                Response::removed()
            }
            Err(err) => {
                let mut diags = Diagnostics::new();
                diags.push(resource_error(Intent::Read, E::NAME, &err));
                Response::failed(Some(state.clone()), diags)
            }
        }
    }

    async fn update(&self, ctx: &Context, plan: &State, prior: &State) -> Response {
        if let Some(invalid) = self.validate(plan) {
            return Response::failed(Some(prior.clone()), invalid.diagnostics);
        }
        if !E::UPDATABLE {
            debug!(entity = E::NAME, "no upstream update, refreshing");
            return self.read(ctx, prior).await;
        }
        let id = Self::fixed_id(plan).or_else(|| prior.id());
        match self.write(ctx, plan, id).await {
            Ok(state) => Response::state(state),
            Err(err) => {
                warn!(entity = E::NAME, id, error = %err, "update failed");
                let mut diags = Diagnostics::new();
                diags.push(resource_error(Intent::Update, E::NAME, &err));
                Response::failed(Some(prior.clone()), diags)
            }
        }
    }

    async fn delete(&self, ctx: &Context, state: &State) -> Response {
        if E::LIFECYCLE != Lifecycle::Managed {
            debug!(entity = E::NAME, "detaching from state without upstream delete");
            return Response::removed();
        }
        let result = async {
            let client = self.client.get()?;
            let id = state.id().ok_or(HandlerError::MissingId)?;
            client.delete(ctx, &Self::item_path(id), E::DELETE_QUERY).await?;
            Ok::<_, HandlerError>(id)
        }
        .await;
        match result {
            Ok(id) => {
                debug!(entity = E::NAME, id, "deleted");
                Response::removed()
            }
            Err(err) => {
                let mut diags = Diagnostics::new();
                diags.push(resource_error(Intent::Delete, E::NAME, &err));
                Response::failed(Some(state.clone()), diags)
            }
        }
    }

    async fn import(&self, ctx: &Context, id: &str) -> Response {
        let id = match E::LIFECYCLE {
            Lifecycle::Singleton => SINGLETON_ID,
            Lifecycle::Managed | Lifecycle::Predefined => match parse_import_id(id) {
                Ok(id) => id,
                Err(err) => {
                    let mut diags = Diagnostics::new();
                    diags.push(import_error(E::NAME, id, &err));
                    return Response::failed(None, diags);
                }
            },
        };
        // A missing entity is an ordinary read failure here, not drift.
        match self.refresh(ctx, &State::new().with_id(id)).await {
            Ok(state) => Response::state(state),
            Err(err) => {
                let mut diags = Diagnostics::new();
                diags.push(resource_error(Intent::Read, E::NAME, &err));
                Response::failed(None, diags)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonarr_types::Attribute;

    fn schema() -> Schema {
        let auth = AttributeType::Object(
            [
                ("username".to_string(), Attribute::optional(AttributeType::String)),
                ("password".to_string(), Attribute::optional(AttributeType::String).sensitive()),
            ]
            .into_iter()
            .collect(),
        );
        Schema::new("")
            .with("api_key", Attribute::optional(AttributeType::String).sensitive())
            .with("authentication", Attribute::optional(auth))
    }

    fn object(pairs: &[(&str, &str)]) -> AttrValue {
        AttrValue::Object(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), AttrValue::string(*value)))
                .collect(),
        )
    }

    #[test]
    fn masked_top_level_and_nested_secrets_keep_prior_values() {
        let mut prior = State::new();
        prior.set("api_key", "secret");
        prior.set("authentication", object(&[("username", "admin"), ("password", "hunter2")]));

        let mut next = State::new();
        next.set("api_key", MASKED_SENTINEL);
        next.set("authentication", object(&[("username", "root"), ("password", "")]));
        preserve_sensitive(&schema(), &prior, &mut next);

        assert_eq!(next.get("api_key").as_str(), Some("secret"));
        let auth = next.get("authentication").as_object().unwrap();
        assert_eq!(auth["username"].as_str(), Some("root"));
        assert_eq!(auth["password"].as_str(), Some("hunter2"));
    }

    #[test]
    fn fresh_secrets_replace_prior_values() {
        let mut prior = State::new();
        prior.set("api_key", "old");
        let mut next = State::new();
        next.set("api_key", "new");
        preserve_sensitive(&schema(), &prior, &mut next);
        assert_eq!(next.get("api_key").as_str(), Some("new"));
    }
}
