#![allow(dead_code)]

use serde_json::Value;
use sonarr_engine::Dispatcher;
use sonarr_types::{AttrValue, State};
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";

/// A dispatcher configured against `server`.
pub fn dispatcher(server: &MockServer) -> Dispatcher {
    let mut dispatcher = Dispatcher::new();
    let mut config = State::new();
    config.set("url", server.uri());
    config.set("api_key", API_KEY);
    let diags = dispatcher.configure(&config);
    assert!(!diags.has_error(), "configure failed: {diags:?}");
    dispatcher
}

pub fn state(pairs: &[(&str, AttrValue)]) -> State {
    pairs.iter().map(|(name, value)| (name.to_string(), value.clone())).collect()
}

pub fn int_set(values: &[i64]) -> AttrValue {
    AttrValue::Set(values.iter().copied().map(AttrValue::Int).collect())
}

/// Bodies of every request the server saw for `method` on `path`.
pub async fn bodies(server: &MockServer, method: &str, path: &str) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.method.as_str() == method && request.url.path() == path)
        .map(|request| serde_json::from_slice(&request.body).unwrap_or(Value::Null))
        .collect()
}

/// Look up a provider-item field by wire name.
pub fn field<'a>(body: &'a Value, name: &str) -> Option<&'a Value> {
    body["fields"]
        .as_array()?
        .iter()
        .find(|field| field["name"] == name)
        .map(|field| &field["value"])
}
