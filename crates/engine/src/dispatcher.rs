//! Routes host requests to the provider root and its handlers.
//!
//! The dispatcher owns every resource and data-source handler keyed by full
//! type name (`sonarr_tag`, `sonarr_download_client_pneumatic`, ...). Typed
//! entry points take [`State`]; [`Dispatcher::handle`] bridges the JSON line
//! protocol the executable speaks.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sonarr_registry::type_name;
use sonarr_types::{Context, Diagnostic, Diagnostics, ErrorKind, Schema, State, StateError};
use tracing::{debug, warn};

use crate::handler::{DataSource, Resource, Response};
use crate::provider::Provider;

/// One request of the line protocol.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Request {
    GetSchemas,
    Configure {
        #[serde(default)]
        config: Value,
    },
    Create {
        type_name: String,
        plan: Value,
    },
    Read {
        type_name: String,
        state: Value,
    },
    Update {
        type_name: String,
        plan: Value,
        prior: Value,
    },
    Delete {
        type_name: String,
        state: Value,
    },
    Import {
        type_name: String,
        id: String,
    },
    ReadDataSource {
        type_name: String,
        #[serde(default)]
        config: Value,
    },
}

impl Request {
    pub fn method(&self) -> &'static str {
        match self {
            Self::GetSchemas => "get_schemas",
            Self::Configure { .. } => "configure",
            Self::Create { .. } => "create",
            Self::Read { .. } => "read",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::Import { .. } => "import",
            Self::ReadDataSource { .. } => "read_data_source",
        }
    }
}

/// One response line: the state to persist (`null` removes it) and diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outcome {
    pub state: Option<Value>,
    pub diagnostics: Diagnostics,
}

impl From<Response> for Outcome {
    fn from(response: Response) -> Self {
        Self {
            state: response.state.as_ref().map(State::to_json),
            diagnostics: response.diagnostics,
        }
    }
}

/// Every schema the provider serves.
#[derive(Debug, Clone, Serialize)]
pub struct Schemas {
    pub provider: Schema,
    pub resources: IndexMap<String, Schema>,
    pub data_sources: IndexMap<String, Schema>,
}

pub struct Dispatcher {
    provider: Provider,
    resources: IndexMap<String, Box<dyn Resource>>,
    data_sources: IndexMap<String, Box<dyn DataSource>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        let provider = Provider::new();
        let resources = provider
            .resources()
            .into_iter()
            .map(|resource| (type_name(resource.entity()), resource))
            .collect();
        let data_sources = provider
            .data_sources()
            .into_iter()
            .map(|source| (type_name(source.entity()), source))
            .collect();
        Self {
            provider,
            resources,
            data_sources,
        }
    }

    pub fn schemas(&self) -> Schemas {
        Schemas {
            provider: Provider::schema(),
            resources: self.resources.iter().map(|(name, resource)| (name.clone(), resource.schema())).collect(),
            data_sources: self.data_sources.iter().map(|(name, source)| (name.clone(), source.schema())).collect(),
        }
    }

    pub fn resource_names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn data_source_names(&self) -> impl Iterator<Item = &str> {
        self.data_sources.keys().map(String::as_str)
    }

    /// Configure the provider and hand its data to every handler.
    pub fn configure(&mut self, config: &State) -> Diagnostics {
        let mut diags = self.provider.configure(config);
        let data = self.provider.provider_data();
        for resource in self.resources.values_mut() {
            diags.append(resource.configure(data.as_ref()));
        }
        for source in self.data_sources.values_mut() {
            diags.append(source.configure(data.as_ref()));
        }
        diags
    }

    pub async fn create(&self, ctx: &Context, type_name: &str, plan: &State) -> Response {
        match self.resource(type_name) {
            Ok(resource) => resource.create(ctx, plan).await,
            Err(diags) => Response::failed(None, diags),
        }
    }

    pub async fn read(&self, ctx: &Context, type_name: &str, state: &State) -> Response {
        match self.resource(type_name) {
            Ok(resource) => resource.read(ctx, state).await,
            Err(diags) => Response::failed(Some(state.clone()), diags),
        }
    }

    /// Update in place. Plans that change a replace-only attribute are refused.
    pub async fn update(&self, ctx: &Context, type_name: &str, plan: &State, prior: &State) -> Response {
        let resource = match self.resource(type_name) {
            Ok(resource) => resource,
            Err(diags) => return Response::failed(Some(prior.clone()), diags),
        };
        let mut plan = plan.clone();
        let replace = resource.schema().apply_plan_modifiers(Some(prior), &mut plan);
        if !replace.is_empty() {
            debug!(type_name, attributes = ?replace, "update requires replacement");
            let mut diags = Diagnostics::new();
            for attribute in replace {
                diags.push(
                    Diagnostic::error(
                        "Resource replacement required",
                        format!("Changing `{attribute}` requires destroying and recreating the resource."),
                    )
                    .with_attribute(attribute)
                    .with_entity(resource.entity()),
                );
            }
            return Response::failed(Some(prior.clone()), diags);
        }
        resource.update(ctx, &plan, prior).await
    }

    pub async fn delete(&self, ctx: &Context, type_name: &str, state: &State) -> Response {
        match self.resource(type_name) {
            Ok(resource) => resource.delete(ctx, state).await,
            Err(diags) => Response::failed(Some(state.clone()), diags),
        }
    }

    pub async fn import(&self, ctx: &Context, type_name: &str, id: &str) -> Response {
        match self.resource(type_name) {
            Ok(resource) => resource.import(ctx, id).await,
            Err(diags) => Response::failed(None, diags),
        }
    }

    pub async fn read_data_source(&self, ctx: &Context, type_name: &str, config: &State) -> Response {
        match self.data_sources.get(type_name) {
            Some(source) => source.read(ctx, config).await,
            None => Response::failed(None, unknown_type("data source", type_name)),
        }
    }

    /// Serve one protocol request.
    pub async fn handle(&mut self, ctx: &Context, request: Request) -> Result<Value, serde_json::Error> {
        debug!(method = request.method(), "dispatching request");
        let outcome = match request {
            Request::GetSchemas => return serde_json::to_value(self.schemas()),
            Request::Configure { config } => match State::from_json(&config, &Provider::schema()) {
                Ok(config) => Outcome {
                    state: None,
                    diagnostics: self.configure(&config),
                },
                Err(err) => decode_failure(&err),
            },
            Request::Create { type_name, plan } => match self.resource_state(&type_name, &plan) {
                Ok(plan) => self.create(ctx, &type_name, &plan).await.into(),
                Err(outcome) => outcome,
            },
            Request::Read { type_name, state } => match self.resource_state(&type_name, &state) {
                Ok(state) => self.read(ctx, &type_name, &state).await.into(),
                Err(outcome) => outcome,
            },
            Request::Update { type_name, plan, prior } => {
                match (self.resource_state(&type_name, &plan), self.resource_state(&type_name, &prior)) {
                    (Ok(plan), Ok(prior)) => self.update(ctx, &type_name, &plan, &prior).await.into(),
                    (Err(outcome), _) | (_, Err(outcome)) => outcome,
                }
            }
            Request::Delete { type_name, state } => match self.resource_state(&type_name, &state) {
                Ok(state) => self.delete(ctx, &type_name, &state).await.into(),
                Err(outcome) => outcome,
            },
            Request::Import { type_name, id } => self.import(ctx, &type_name, &id).await.into(),
            Request::ReadDataSource { type_name, config } => {
                let schema = match self.data_sources.get(&type_name) {
                    Some(source) => source.schema(),
                    None => return serde_json::to_value(Outcome::from(Response::failed(None, unknown_type("data source", &type_name)))),
                };
                match State::from_json(&config, &schema) {
                    Ok(config) => self.read_data_source(ctx, &type_name, &config).await.into(),
                    Err(err) => decode_failure(&err),
                }
            }
        };
        serde_json::to_value(outcome)
    }

    fn resource(&self, type_name: &str) -> Result<&dyn Resource, Diagnostics> {
        self.resources
            .get(type_name)
            .map(Box::as_ref)
            .ok_or_else(|| unknown_type("resource", type_name))
    }

    /// Type a JSON document against the schema of `type_name`.
    fn resource_state(&self, type_name: &str, document: &Value) -> Result<State, Outcome> {
        let resource = self.resource(type_name).map_err(|diagnostics| Outcome {
            state: None,
            diagnostics,
        })?;
        State::from_json(document, &resource.schema()).map_err(|err| decode_failure(&err))
    }
}

fn unknown_type(kind: &str, type_name: &str) -> Diagnostics {
    warn!(type_name, "request for an unknown {kind} type");
    let mut diags = Diagnostics::new();
    diags.add_error(
        format!("Unknown {kind} type"),
        format!("The provider does not serve a {kind} named \"{type_name}\"."),
    );
    diags
}

fn decode_failure(err: &StateError) -> Outcome {
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(
        Diagnostic::error(ErrorKind::Decode.summary(), format!("Unable to decode request state: {err}"))
            .with_kind(ErrorKind::Decode),
    );
    Outcome {
        state: None,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn handlers_are_keyed_by_full_type_name() {
        let dispatcher = Dispatcher::new();
        let resources: Vec<_> = dispatcher.resource_names().collect();
        assert!(resources.contains(&"sonarr_tag"));
        assert!(resources.contains(&"sonarr_download_client_pneumatic"));
        assert!(resources.contains(&"sonarr_notification_webhook"));
        let sources: Vec<_> = dispatcher.data_source_names().collect();
        assert!(sources.contains(&"sonarr_tags"));
        assert!(sources.contains(&"sonarr_system_status"));
    }

    #[test]
    fn requests_parse_from_protocol_lines() {
        let request: Request = serde_json::from_value(json!({
            "method": "import",
            "type_name": "sonarr_tag",
            "id": "7"
        }))
        .unwrap();
        assert!(matches!(request, Request::Import { ref id, .. } if id == "7"));
        assert_eq!(request.method(), "import");
    }

    #[tokio::test]
    async fn unknown_types_are_reported() {
        let dispatcher = Dispatcher::new();
        let response = dispatcher.create(&Context::new(), "sonarr_nope", &State::new()).await;
        assert!(response.state.is_none());
        assert_eq!(response.diagnostics.errors().next().unwrap().summary, "Unknown resource type");
    }

    #[tokio::test]
    async fn replace_only_changes_are_refused_on_update() {
        let dispatcher = Dispatcher::new();
        let mut prior = State::new();
        prior.set("id", 1_i64);
        prior.set("path", "/tv");
        let mut plan = prior.clone();
        plan.set("path", "/media/tv");

        let response = dispatcher.update(&Context::new(), "sonarr_root_folder", &plan, &prior).await;
        assert_eq!(response.state.as_ref(), Some(&prior));
        let error = response.diagnostics.errors().next().unwrap();
        assert_eq!(error.summary, "Resource replacement required");
        assert_eq!(error.attribute.as_deref(), Some("path"));
    }

    #[tokio::test]
    async fn badly_typed_requests_become_decode_diagnostics() {
        let mut dispatcher = Dispatcher::new();
        let line = json!({"method": "create", "type_name": "sonarr_tag", "plan": {"label": 5}});
        let request: Request = serde_json::from_value(line).unwrap();
        let outcome = dispatcher.handle(&Context::new(), request).await.unwrap();
        assert_eq!(outcome["state"], Value::Null);
        assert_eq!(outcome["diagnostics"][0]["kind"], "decode");
    }

    #[tokio::test]
    async fn schemas_cover_every_handler() {
        let mut dispatcher = Dispatcher::new();
        let schemas = dispatcher.handle(&Context::new(), Request::GetSchemas).await.unwrap();
        assert!(schemas["provider"]["attributes"]["api_key"]["sensitive"].as_bool().unwrap());
        assert!(schemas["resources"]["sonarr_tag"].is_object());
        assert!(schemas["data_sources"]["sonarr_custom_format_condition"].is_object());
    }
}
