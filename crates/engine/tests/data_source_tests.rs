mod common;

use common::{dispatcher, state};
use serde_json::json;
use sonarr_engine::{API_KEY_ENV, Dispatcher, URL_ENV};
use sonarr_types::{AttrValue, Context, ErrorKind, State};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn tags(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v3/tag"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "label": "anime"},
            {"id": 2, "label": "4k"}
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn tag_lookup_by_label() {
    let server = MockServer::start().await;
    tags(&server).await;
    let dispatcher = dispatcher(&server);

    let response = dispatcher
        .read_data_source(&Context::new(), "sonarr_tag", &state(&[("label", "4k".into())]))
        .await;
    let found = response.state.expect("tag found");
    assert_eq!(found.id(), Some(2));
    assert_eq!(found.get("label").as_str(), Some("4k"));
}

#[tokio::test]
async fn lookup_miss_names_the_key() {
    let server = MockServer::start().await;
    tags(&server).await;
    let dispatcher = dispatcher(&server);

    let response = dispatcher
        .read_data_source(&Context::new(), "sonarr_tag", &state(&[("label", "missing".into())]))
        .await;
    assert!(response.state.is_none());
    let error = response.diagnostics.errors().next().expect("not found diagnostic");
    assert_eq!(error.kind, Some(ErrorKind::DataSource));
    assert_eq!(error.detail, "tag label=missing not found");
}

#[tokio::test]
async fn listings_use_the_plural_as_id() {
    let server = MockServer::start().await;
    tags(&server).await;
    let dispatcher = dispatcher(&server);

    let listed = dispatcher
        .read_data_source(&Context::new(), "sonarr_tags", &State::new())
        .await
        .state
        .expect("listing");
    assert_eq!(listed.get("id").as_str(), Some("tags"));
    let AttrValue::Set(items) = listed.get("tags") else {
        panic!("tags should be a set, got {:?}", listed.get("tags"));
    };
    let labels: Vec<_> = items
        .iter()
        .filter_map(|item| item.as_object()?.get("label")?.as_str())
        .collect();
    assert_eq!(labels, ["anime", "4k"]);
}

#[tokio::test]
async fn notification_lookup_exposes_the_implementation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/notification"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 7,
            "name": "hook",
            "onGrab": true,
            "implementation": "Webhook",
            "configContract": "WebhookSettings",
            "tags": [3],
            "fields": [{"name": "url", "value": "http://h:9091"}]
        }])))
        .mount(&server)
        .await;
    let dispatcher = dispatcher(&server);

    let found = dispatcher
        .read_data_source(&Context::new(), "sonarr_notification", &state(&[("name", "hook".into())]))
        .await
        .state
        .expect("notification found");
    assert_eq!(found.id(), Some(7));
    assert_eq!(found.get("implementation").as_str(), Some("Webhook"));
    assert_eq!(found.get("config_contract").as_str(), Some("WebhookSettings"));
    assert_eq!(found.get("on_grab"), &AttrValue::Bool(true));
}

#[tokio::test]
async fn system_status_reads_the_server_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/system/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "appName": "Sonarr",
            "version": "4.0.9.2244",
            "branch": "main",
            "isDocker": true
        })))
        .mount(&server)
        .await;
    let dispatcher = dispatcher(&server);

    let status = dispatcher
        .read_data_source(&Context::new(), "sonarr_system_status", &State::new())
        .await
        .state
        .expect("status");
    assert_eq!(status.id(), Some(1));
    assert_eq!(status.get("version").as_str(), Some("4.0.9.2244"));
    assert_eq!(status.get("is_docker"), &AttrValue::Bool(true));
}

#[tokio::test]
async fn condition_builders_need_no_server() {
    let dispatcher = Dispatcher::new();
    let config = state(&[
        ("name", "anime".into()),
        ("implementation", "SeriesTypeSpecification".into()),
        ("negate", false.into()),
        ("required", true.into()),
        ("value", "2".into()),
    ]);

    let built = dispatcher
        .read_data_source(&Context::new(), "sonarr_auto_tag_condition", &config)
        .await
        .state
        .expect("condition");
    assert!(built.id().is_some());
    assert_eq!(built.get("value").as_str(), Some("2"));
}

#[tokio::test]
async fn environment_configures_the_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/tag"))
        .and(header("X-Api-Key", "from-env"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "label": "anime"}])))
        .expect(1)
        .mount(&server)
        .await;

    let mut dispatcher = Dispatcher::new();
    let diags = temp_env::with_vars([(URL_ENV, Some(server.uri())), (API_KEY_ENV, Some("from-env".to_string()))], || {
        dispatcher.configure(&State::new())
    });
    assert!(diags.is_empty(), "configure diagnostics: {diags:?}");

    let response = dispatcher
        .read_data_source(&Context::new(), "sonarr_tags", &State::new())
        .await;
    assert!(response.state.is_some(), "diagnostics: {:?}", response.diagnostics);
}

#[tokio::test]
async fn unconfigured_handlers_report_a_client_error() {
    let dispatcher = Dispatcher::new();
    let response = dispatcher
        .read_data_source(&Context::new(), "sonarr_tags", &State::new())
        .await;
    assert!(response.state.is_none());
    let error = response.diagnostics.errors().next().expect("client diagnostic");
    assert_eq!(error.kind, Some(ErrorKind::Client));
}
