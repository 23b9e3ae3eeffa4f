mod common;

use common::{bodies, dispatcher, int_set, state};
use serde_json::json;
use sonarr_types::{AttrValue, Context, Intent};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn tag_create_read_import_delete() {
    let server = MockServer::start().await;
    let tag = json!({"id": 1, "label": "foo"});
    Mock::given(method("POST"))
        .and(path("/api/v3/tag"))
        .and(body_partial_json(json!({"label": "foo"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(&tag))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/tag/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&tag))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v3/tag/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher(&server);
    let ctx = Context::new();
    let plan = state(&[("id", AttrValue::Unknown), ("label", "foo".into())]);

    let created = dispatcher.create(&ctx, "sonarr_tag", &plan).await;
    assert!(created.diagnostics.is_empty(), "create diagnostics: {:?}", created.diagnostics);
    let created = created.state.expect("created state");
    assert_eq!(created.id(), Some(1));
    assert_eq!(created.get("label").as_str(), Some("foo"));

    let read = dispatcher.read(&ctx, "sonarr_tag", &created).await;
    assert_eq!(read.state.as_ref(), Some(&created));

    let imported = dispatcher.import(&ctx, "sonarr_tag", "1").await;
    assert_eq!(imported.state.as_ref(), Some(&created));

    let deleted = dispatcher.delete(&ctx, "sonarr_tag", &created).await;
    assert!(deleted.state.is_none());
    assert!(deleted.diagnostics.is_empty());

    Mock::given(method("GET"))
        .and(path("/api/v3/tag/1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("NotFound"))
        .with_priority(1)
        .mount(&server)
        .await;
    let gone = dispatcher.read(&ctx, "sonarr_tag", &created).await;
    assert!(gone.state.is_none(), "a vanished tag leaves state");
    assert!(gone.diagnostics.is_empty());
}

#[tokio::test]
async fn import_rejects_non_numeric_identifiers() {
    let server = MockServer::start().await;
    let dispatcher = dispatcher(&server);

    let response = dispatcher.import(&Context::new(), "sonarr_tag", "abc").await;
    assert!(response.state.is_none());
    let error = response.diagnostics.errors().next().expect("import diagnostic");
    assert_eq!(error.summary, "Unexpected Import Identifier");
    assert!(error.detail.contains("abc"), "detail: {}", error.detail);
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn delay_profile_update_changes_protocol() {
    let server = MockServer::start().await;
    let profile = |protocol: &str| {
        json!({
            "id": 2,
            "enableUsenet": true,
            "enableTorrent": true,
            "order": 100,
            "preferredProtocol": protocol,
            "tags": [5]
        })
    };
    Mock::given(method("POST"))
        .and(path("/api/v3/delayprofile"))
        .respond_with(ResponseTemplate::new(201).set_body_json(profile("usenet")))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v3/delayprofile/2"))
        .and(body_partial_json(json!({"id": 2, "preferredProtocol": "torrent"})))
        .respond_with(ResponseTemplate::new(202).set_body_json(profile("torrent")))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher(&server);
    let ctx = Context::new();
    let plan = state(&[
        ("enable_usenet", true.into()),
        ("enable_torrent", true.into()),
        ("order", 100_i64.into()),
        ("preferred_protocol", "usenet".into()),
        ("tags", int_set(&[5])),
    ]);

    let created = dispatcher.create(&ctx, "sonarr_delay_profile", &plan).await.state.expect("created");
    assert_eq!(created.get("preferred_protocol").as_str(), Some("usenet"));
    assert_eq!(created.get("tags"), &int_set(&[5]));

    let mut next = created.clone();
    next.set("preferred_protocol", "torrent");
    let updated = dispatcher.update(&ctx, "sonarr_delay_profile", &next, &created).await;
    assert!(updated.diagnostics.is_empty(), "update diagnostics: {:?}", updated.diagnostics);
    let updated = updated.state.expect("updated");
    assert_eq!(updated.get("preferred_protocol").as_str(), Some("torrent"));
    assert_eq!(updated.id(), Some(2));
}

#[tokio::test]
async fn invalid_plans_never_reach_upstream() {
    let server = MockServer::start().await;
    let dispatcher = dispatcher(&server);
    let plan = state(&[("order", 1_i64.into()), ("preferred_protocol", "carrier-pigeon".into())]);

    let response = dispatcher.create(&Context::new(), "sonarr_delay_profile", &plan).await;
    assert!(response.state.is_none());
    assert!(response.diagnostics.has_error());
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn quality_definition_keeps_its_fixed_id() {
    let server = MockServer::start().await;
    let definition = |title: &str| {
        json!({
            "id": 21,
            "quality": {"id": 19, "name": "Bluray-2160p", "source": "bluray", "resolution": 2160},
            "title": title,
            "weight": 22,
            "minSize": 35.0,
            "maxSize": 400.0,
            "preferredSize": 399.0
        })
    };
    Mock::given(method("GET"))
        .and(path("/api/v3/qualitydefinition/21"))
        .respond_with(ResponseTemplate::new(200).set_body_json(definition("Bluray-2160p")))
        .mount(&server)
        .await;
    for title in ["example-4k", "example-HD"] {
        Mock::given(method("PUT"))
            .and(path("/api/v3/qualitydefinition/21"))
            .and(body_partial_json(json!({"title": title})))
            .respond_with(ResponseTemplate::new(202).set_body_json(definition(title)))
            .mount(&server)
            .await;
    }

    let dispatcher = dispatcher(&server);
    let ctx = Context::new();
    let plan = state(&[
        ("id", 21_i64.into()),
        ("title", "example-4k".into()),
        ("min_size", 35.0.into()),
        ("max_size", 400.0.into()),
    ]);

    let created = dispatcher.create(&ctx, "sonarr_quality_definition", &plan).await;
    assert!(created.diagnostics.is_empty(), "create diagnostics: {:?}", created.diagnostics);
    let created = created.state.expect("created");
    assert_eq!(created.id(), Some(21));
    assert_eq!(created.get("quality_name").as_str(), Some("Bluray-2160p"));
    assert_eq!(created.get("source").as_str(), Some("bluray"));
    assert_eq!(created.get("resolution").as_i64(), Some(2160));

    let mut next = created.clone();
    next.set("title", "example-HD");
    let updated = dispatcher
        .update(&ctx, "sonarr_quality_definition", &next, &created)
        .await
        .state
        .expect("updated");
    assert_eq!(updated.id(), Some(21));
    assert_eq!(updated.get("title").as_str(), Some("example-HD"));

    // Writes start from the upstream document so the quality and unmodelled fields survive.
    let puts = bodies(&server, "PUT", "/api/v3/qualitydefinition/21").await;
    assert_eq!(puts.len(), 2);
    for body in &puts {
        assert_eq!(body["quality"]["id"], 19);
        assert_eq!(body["weight"], 22);
    }
}

#[tokio::test]
async fn singleton_delete_only_detaches() {
    let server = MockServer::start().await;
    let naming = json!({
        "id": 1,
        "renameEpisodes": true,
        "replaceIllegalCharacters": true,
        "colonReplacementFormat": 4,
        "multiEpisodeStyle": 5,
        "standardEpisodeFormat": "{Series Title} - S{season:00}E{episode:00}",
        "dailyEpisodeFormat": "{Series Title} - {Air-Date}",
        "animeEpisodeFormat": "{Series Title} - {absolute:000}",
        "seriesFolderFormat": "{Series Title}",
        "seasonFolderFormat": "Season {season}",
        "specialsFolderFormat": "Specials",
        "includeQuality": true
    });
    Mock::given(method("GET"))
        .and(path("/api/v3/config/naming"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&naming))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v3/config/naming/1"))
        .respond_with(ResponseTemplate::new(202).set_body_json(&naming))
        .mount(&server)
        .await;

    let dispatcher = dispatcher(&server);
    let ctx = Context::new();
    let plan = state(&[
        ("rename_episodes", true.into()),
        ("replace_illegal_characters", true.into()),
        ("colon_replacement_format", 4_i64.into()),
        ("multi_episode_style", 5_i64.into()),
        ("standard_episode_format", "{Series Title} - S{season:00}E{episode:00}".into()),
        ("daily_episode_format", "{Series Title} - {Air-Date}".into()),
        ("anime_episode_format", "{Series Title} - {absolute:000}".into()),
        ("series_folder_format", "{Series Title}".into()),
        ("season_folder_format", "Season {season}".into()),
        ("specials_folder_format", "Specials".into()),
    ]);

    let created = dispatcher.create(&ctx, "sonarr_naming", &plan).await;
    assert!(created.diagnostics.is_empty(), "create diagnostics: {:?}", created.diagnostics);
    let created = created.state.expect("created");
    assert_eq!(created.id(), Some(1));
    assert_eq!(created.get("season_folder_format").as_str(), Some("Season {season}"));
    let put = &bodies(&server, "PUT", "/api/v3/config/naming/1").await[0];
    assert_eq!(put["includeQuality"], true, "unmodelled settings are written back");

    let deleted = dispatcher.delete(&ctx, "sonarr_naming", &created).await;
    assert!(deleted.state.is_none());
    assert!(bodies(&server, "DELETE", "/api/v3/config/naming/1").await.is_empty());

    let read = dispatcher.read(&ctx, "sonarr_naming", &created).await.state.expect("still readable");
    assert_eq!(read.get("rename_episodes"), &AttrValue::Bool(true));

    let imported = dispatcher.import(&ctx, "sonarr_naming", "anything").await.state.expect("imported");
    assert_eq!(imported, read);
}

#[tokio::test]
async fn upstream_failures_carry_the_intent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/tag"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database is locked"))
        .mount(&server)
        .await;

    let dispatcher = dispatcher(&server);
    let response = dispatcher
        .create(&Context::new(), "sonarr_tag", &state(&[("label", "x".into())]))
        .await;
    assert!(response.state.is_none());
    let error = response.diagnostics.errors().next().expect("create diagnostic");
    assert_eq!(error.intent, Some(Intent::Create));
    assert_eq!(error.summary, "Resource Error");
    assert!(error.detail.contains("database is locked"), "detail: {}", error.detail);
}

#[tokio::test]
async fn failed_writes_and_reads_keep_prior_state() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v3/tag/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("update exploded"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v3/tag/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("delete exploded"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/tag/1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let dispatcher = dispatcher(&server);
    let ctx = Context::new();
    let prior = state(&[("id", 1_i64.into()), ("label", "foo".into())]);
    let plan = state(&[("id", 1_i64.into()), ("label", "bar".into())]);

    let updated = dispatcher.update(&ctx, "sonarr_tag", &plan, &prior).await;
    assert_eq!(updated.state.as_ref(), Some(&prior));
    let error = updated.diagnostics.errors().next().expect("update diagnostic");
    assert_eq!(error.intent, Some(Intent::Update));
    assert!(error.detail.contains("update exploded"), "detail: {}", error.detail);

    let deleted = dispatcher.delete(&ctx, "sonarr_tag", &prior).await;
    assert_eq!(deleted.state.as_ref(), Some(&prior));
    assert_eq!(deleted.diagnostics.errors().next().and_then(|diag| diag.intent), Some(Intent::Delete));

    let read = dispatcher.read(&ctx, "sonarr_tag", &prior).await;
    assert_eq!(read.state.as_ref(), Some(&prior), "only a 404 drops state");
    assert_eq!(read.diagnostics.errors().next().and_then(|diag| diag.intent), Some(Intent::Read));
}
