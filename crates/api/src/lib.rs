//! Sonarr API client.
//!
//! This crate provides a small async client for the Sonarr v3 REST API:
//!
//! - Constructing an HTTP client with the API key and JSON headers preset
//! - Validating the configured base URL
//! - Racing every request against the caller's cancellation [`Context`]
//! - Typed wire models for every entity the provider manages
//!
//! The primary entry point is [`SonarrClient`].
//!
//! # Example
//!
//! ```ignore
//! use sonarr_api::{SonarrClient, models::Tag, paths};
//! use sonarr_types::Context;
//!
//! async fn tags() -> Result<Vec<Tag>, sonarr_api::ApiError> {
//!     let client = SonarrClient::new("http://localhost:8989", "0123456789abcdef")?;
//!     client.list_json(&Context::new(), paths::TAG, &[]).await
//! }
//! ```

mod error;
pub mod models;
pub mod paths;

use std::sync::Once;
use std::time::{Duration, Instant};

pub use error::ApiError;
pub use reqwest::StatusCode;
use reqwest::{Client, Method, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sonarr_types::Context;
use tracing::{debug, warn};
use url::Url;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-Api-Key";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Query pairs appended to a request.
pub type Query<'a> = &'a [(&'a str, &'a str)];

/// Thin wrapper around a configured `reqwest::Client` for Sonarr API access.
///
/// Cloning is cheap; clones share the connection pool. The client is never
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct SonarrClient {
    base_url: String,
    http: Client,
}

impl SonarrClient {
    /// Build a client for `base_url`, authenticating with `api_key`.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ApiError> {
        let base_url = validate_base_url(base_url)?;
        install_crypto_provider();

        let mut default_headers = header::HeaderMap::new();
        let mut key = header::HeaderValue::from_str(api_key).map_err(|_| ApiError::InvalidApiKey)?;
        key.set_sensitive(true);
        default_headers.insert(API_KEY_HEADER, key);
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .user_agent(concat!("terraform-provider-sonarr/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the body.
    pub async fn get_json<T: DeserializeOwned>(&self, ctx: &Context, path: &str, query: Query<'_>) -> Result<T, ApiError> {
        let body = self.execute(ctx, Method::GET, path, query, None::<&()>).await?;
        decode(path, &body)
    }

    /// GET a collection endpoint.
    pub async fn list_json<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        path: &str,
        query: Query<'_>,
    ) -> Result<Vec<T>, ApiError> {
        self.get_json(ctx, path, query).await
    }

    pub async fn post_json<B, T>(&self, ctx: &Context, path: &str, query: Query<'_>, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(ctx, Method::POST, path, query, Some(body)).await?;
        decode(path, &response)
    }

    pub async fn put_json<B, T>(&self, ctx: &Context, path: &str, query: Query<'_>, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(ctx, Method::PUT, path, query, Some(body)).await?;
        decode(path, &response)
    }

    pub async fn delete(&self, ctx: &Context, path: &str, query: Query<'_>) -> Result<(), ApiError> {
        self.execute(ctx, Method::DELETE, path, query, None::<&()>).await?;
        Ok(())
    }

    /// Send one request and return the raw body of a 2xx response.
    async fn execute<B: Serialize + ?Sized>(
        &self,
        ctx: &Context,
        method: Method,
        path: &str,
        query: Query<'_>,
        body: Option<&B>,
    ) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method.clone(), url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let started = Instant::now();
        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<_, reqwest::Error>((status, text))
        };
        let (status, text) = tokio::select! {
            biased;
            _ = ctx.cancelled() => {
                warn!(%method, path, "request cancelled");
                return Err(ApiError::Cancelled);
            }
            result = exchange => result.map_err(|err| {
                warn!(%method, path, error = %err, "transport error");
                ApiError::Transport(err)
            })?,
        };
        let duration_ms = started.elapsed().as_millis() as u64;

        if !status.is_success() {
            warn!(%method, path, status = status.as_u16(), duration_ms, "upstream returned error status");
            return Err(ApiError::Status { status, body: text });
        }
        debug!(%method, path, status = status.as_u16(), duration_ms, "request completed");
        Ok(text)
    }
}

/// Register the ring provider for rustls once per process.
///
/// A provider installed earlier by the host process is left in place.
fn install_crypto_provider() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        if rustls::crypto::CryptoProvider::get_default().is_none() {
            let _ = rustls::crypto::ring::default_provider().install_default();
        }
    });
}

fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        path: path.to_string(),
        source,
    })
}

/// Validate a base URL and return it without trailing slashes.
///
/// Rules:
/// - scheme must be `http` or `https`
/// - a host must be present
pub fn validate_base_url(base: &str) -> Result<String, ApiError> {
    let parsed = Url::parse(base.trim()).map_err(|err| ApiError::invalid_url(base, err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiError::invalid_url(
            base,
            format!("scheme must be http or https; got '{}://'", parsed.scheme()),
        ));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ApiError::invalid_url(base, "url must include a host"));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Tag;
    use wiremock::matchers::{body_json, header as header_is, method, path as path_is, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        assert_eq!(validate_base_url("http://localhost:8989/").unwrap(), "http://localhost:8989");
        assert_eq!(validate_base_url("https://tv.example.com/sonarr//").unwrap(), "https://tv.example.com/sonarr");
    }

    #[test]
    fn base_url_rejects_other_schemes_and_garbage() {
        assert!(matches!(validate_base_url("ftp://localhost"), Err(ApiError::InvalidUrl { .. })));
        assert!(matches!(validate_base_url("not a url"), Err(ApiError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn https_urls_reach_the_connect_stage() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = SonarrClient::new(&format!("https://127.0.0.1:{port}"), "k").unwrap();
        let err = client.get_json::<Tag>(&Context::new(), "/api/v3/tag/1", &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)), "unexpected error: {err}");

        let mut chain = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            chain.push_str(&format!(" <- {cause}"));
            source = cause.source();
        }
        assert!(!chain.contains("scheme is not http"), "https rejected before connecting: {chain}");
    }

    #[tokio::test]
    async fn requests_carry_the_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_is("/api/v3/tag/1"))
            .and(header_is("X-Api-Key", "secret-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 1, "label": "hd"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = SonarrClient::new(&server.uri(), "secret-key").unwrap();
        let tag: Tag = client.get_json(&Context::new(), "/api/v3/tag/1", &[]).await.unwrap();
        assert_eq!(tag.label.as_deref(), Some("hd"));
    }

    #[tokio::test]
    async fn post_sends_query_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_is("/api/v3/tag"))
            .and(query_param("forceSave", "true"))
            .and(body_json(serde_json::json!({"label": "4k"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 9, "label": "4k"})))
            .mount(&server)
            .await;

        let client = SonarrClient::new(&server.uri(), "k").unwrap();
        let body = Tag {
            id: None,
            label: Some("4k".into()),
        };
        let created: Tag = client
            .post_json(&Context::new(), "/api/v3/tag", &[("forceSave", "true")], &body)
            .await
            .unwrap();
        assert_eq!(created.id, Some(9));
    }

    #[tokio::test]
    async fn error_statuses_keep_the_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(404).set_body_string("NotFound"))
            .mount(&server)
            .await;

        let client = SonarrClient::new(&server.uri(), "k").unwrap();
        let err = client.delete(&Context::new(), "/api/v3/tag/3", &[]).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("NotFound"));
    }

    #[tokio::test]
    async fn cancelled_context_aborts_the_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
            .mount(&server)
            .await;

        let client = SonarrClient::new(&server.uri(), "k").unwrap();
        let ctx = Context::new();
        ctx.cancel();
        let err = client.list_json::<Tag>(&ctx, "/api/v3/tag", &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Cancelled));
    }
}
