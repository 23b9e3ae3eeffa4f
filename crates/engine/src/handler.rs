//! Resource and data-source handler interfaces.
//!
//! Handlers are built unconfigured, receive the provider data once through
//! `configure`, and then serve lifecycle calls concurrently through `&self`.

use async_trait::async_trait;
use sonarr_api::SonarrClient;
use sonarr_types::{Context, Diagnostics, ErrorKind, ProviderData, Schema, State};

use crate::errors::{HandlerError, configure_type_error};

/// Outcome of one lifecycle call.
///
/// `state` is the state the host should persist afterwards; `None` removes
/// the resource from host state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub state: Option<State>,
    pub diagnostics: Diagnostics,
}

impl Response {
    pub fn state(state: State) -> Self {
        Self {
            state: Some(state),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn removed() -> Self {
        Self::default()
    }

    pub fn failed(state: Option<State>, diagnostics: Diagnostics) -> Self {
        Self { state, diagnostics }
    }
}

/// A managed upstream entity with a full lifecycle.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Entity name without the provider prefix, e.g. `tag`.
    fn entity(&self) -> &str;

    fn schema(&self) -> Schema;

    /// Receive the provider data. `None` means the provider is not configured yet.
    fn configure(&mut self, data: Option<&ProviderData>) -> Diagnostics;

    async fn create(&self, ctx: &Context, plan: &State) -> Response;

    /// Refresh `state`. A missing upstream entity clears the state.
    async fn read(&self, ctx: &Context, state: &State) -> Response;

    async fn update(&self, ctx: &Context, plan: &State, prior: &State) -> Response;

    async fn delete(&self, ctx: &Context, state: &State) -> Response;

    /// Populate state from an import identifier.
    async fn import(&self, ctx: &Context, id: &str) -> Response;
}

/// A read-only view of upstream state.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn entity(&self) -> &str;

    fn schema(&self) -> Schema;

    fn configure(&mut self, data: Option<&ProviderData>) -> Diagnostics;

    async fn read(&self, ctx: &Context, config: &State) -> Response;
}

/// Slot holding the client a handler received during configure.
#[derive(Debug, Clone, Default)]
pub struct ClientSlot(Option<SonarrClient>);

impl ClientSlot {
    /// Store the client carried by `data`, reporting `kind` on a type mismatch.
    pub fn configure(&mut self, data: Option<&ProviderData>, kind: ErrorKind, entity: &str) -> Diagnostics {
        let mut diags = Diagnostics::new();
        let Some(data) = data else {
            return diags;
        };
        match (**data).downcast_ref::<SonarrClient>() {
            Some(client) => self.0 = Some(client.clone()),
            None => diags.push(configure_type_error(kind, entity)),
        }
        diags
    }

    pub fn get(&self) -> Result<&SonarrClient, HandlerError> {
        self.0.as_ref().ok_or(HandlerError::Unconfigured)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn client_slot_rejects_foreign_provider_data() {
        let mut slot = ClientSlot::default();
        let data: ProviderData = Arc::new("not a client");
        let diags = slot.configure(Some(&data), ErrorKind::UnexpectedResourceConfigureType, "tag");
        assert_eq!(diags.errors().next().and_then(|diag| diag.kind), Some(ErrorKind::UnexpectedResourceConfigureType));
        assert!(matches!(slot.get(), Err(HandlerError::Unconfigured)));
    }

    #[test]
    fn client_slot_stores_the_client() {
        let mut slot = ClientSlot::default();
        let client = SonarrClient::new("http://localhost:8989", "key").unwrap();
        let data: ProviderData = Arc::new(client);
        assert!(slot.configure(Some(&data), ErrorKind::UnexpectedResourceConfigureType, "tag").is_empty());
        assert_eq!(slot.get().unwrap().base_url(), "http://localhost:8989");
        assert!(slot.configure(None, ErrorKind::UnexpectedResourceConfigureType, "tag").is_empty());
    }
}
