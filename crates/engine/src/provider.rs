//! Provider root: configuration resolution and client construction.

use std::sync::Arc;

use sonarr_api::{ApiError, SonarrClient};
use sonarr_types::{AttrValue, Diagnostic, Diagnostics, ErrorKind, ProviderData, Schema, State};
use thiserror::Error;
use tracing::{debug, info};

use crate::handler::{DataSource, Resource};
use crate::{data_sources, resources};

pub const URL_ENV: &str = "SONARR_URL";
pub const API_KEY_ENV: &str = "SONARR_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "The provider cannot create the Sonarr API client as there is a missing or empty value for the Sonarr {attribute}. \
         Set the {attribute} value in the configuration or use the {env} environment variable."
    )]
    Missing { attribute: &'static str, env: &'static str },

    #[error("Unable to create the Sonarr API client: {0}")]
    Client(#[from] ApiError),
}

impl ConfigError {
    fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(ErrorKind::Client.summary(), self.to_string()).with_kind(ErrorKind::Client);
        match self {
            Self::Missing { attribute, .. } => diag.with_attribute(*attribute),
            Self::Client(_) => diag.with_attribute("url"),
        }
    }
}

/// Connection settings after environment fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub url: String,
    pub api_key: String,
}

impl ProviderConfig {
    /// Resolve the settings from the provider block.
    ///
    /// A set attribute wins over the environment, even when it is empty; only
    /// a null attribute falls back. Returns `Ok(None)` with a warning pushed
    /// onto `diags` when either value is not known yet.
    pub fn resolve(config: &State, diags: &mut Diagnostics) -> Result<Option<Self>, ConfigError> {
        let url = setting(config, "url", URL_ENV, diags);
        let api_key = setting(config, "api_key", API_KEY_ENV, diags);
        let (Some(url), Some(api_key)) = (url, api_key) else {
            return Ok(None);
        };
        Ok(Some(Self {
            url: required(url, "url", URL_ENV)?,
            api_key: required(api_key, "api_key", API_KEY_ENV)?,
        }))
    }
}

/// The raw value of one setting, or `None` when it is unknown.
fn setting(config: &State, attribute: &'static str, env: &'static str, diags: &mut Diagnostics) -> Option<String> {
    match config.get(attribute) {
        AttrValue::Unknown => {
            diags.push(
                Diagnostic::warning(
                    format!("Unknown Sonarr {attribute}"),
                    format!(
                        "The provider cannot create the Sonarr API client as there is an unknown configuration value for the Sonarr {attribute}. \
                         Either target apply the source of the value first, set the value statically in the configuration, or use the {env} environment variable."
                    ),
                )
                .with_attribute(attribute),
            );
            None
        }
        AttrValue::String(value) => Some(value.clone()),
        _ => Some(std::env::var(env).unwrap_or_default()),
    }
}

fn required(value: String, attribute: &'static str, env: &'static str) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Missing { attribute, env });
    }
    Ok(value)
}

/// The provider root. Owns the client every handler shares after configure.
#[derive(Debug, Default)]
pub struct Provider {
    client: Option<SonarrClient>,
}

impl Provider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema() -> Schema {
        sonarr_registry::provider()
    }

    /// Resolve the configuration and build the client.
    ///
    /// Leaves the provider unconfigured when a value is unknown or invalid.
    pub fn configure(&mut self, config: &State) -> Diagnostics {
        let mut diags = Self::schema().validate(config);
        if diags.has_error() {
            return diags;
        }
        let resolved = ProviderConfig::resolve(config, &mut diags).and_then(|resolved| {
            resolved
                .map(|config| SonarrClient::new(&config.url, &config.api_key))
                .transpose()
                .map_err(ConfigError::from)
        });
        match resolved {
            Ok(Some(client)) => {
                info!(url = client.base_url(), "provider configured");
                self.client = Some(client);
            }
            Ok(None) => debug!("provider configuration not yet known"),
            Err(err) => diags.push(err.to_diagnostic()),
        }
        diags
    }

    pub fn client(&self) -> Option<&SonarrClient> {
        self.client.as_ref()
    }

    /// Data handed to every handler's configure.
    pub fn provider_data(&self) -> Option<ProviderData> {
        self.client.clone().map(|client| Arc::new(client) as ProviderData)
    }

    pub fn resources(&self) -> Vec<Box<dyn Resource>> {
        resources::all()
    }

    pub fn data_sources(&self) -> Vec<Box<dyn DataSource>> {
        data_sources::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: Option<AttrValue>, api_key: Option<AttrValue>) -> State {
        let mut state = State::new();
        state.set("url", url.unwrap_or_default());
        state.set("api_key", api_key.unwrap_or_default());
        state
    }

    #[test]
    fn explicit_attributes_win_over_the_environment() {
        temp_env::with_vars(
            [(URL_ENV, Some("http://env:8989")), (API_KEY_ENV, Some("env-key"))],
            || {
                let mut diags = Diagnostics::new();
                let resolved = ProviderConfig::resolve(
                    &config(Some("http://attr:8989".into()), Some("attr-key".into())),
                    &mut diags,
                )
                .unwrap()
                .unwrap();
                assert_eq!(resolved.url, "http://attr:8989");
                assert_eq!(resolved.api_key, "attr-key");
                assert!(diags.is_empty());
            },
        );
    }

    #[test]
    fn null_attributes_fall_back_to_the_environment() {
        temp_env::with_vars(
            [(URL_ENV, Some("http://env:8989")), (API_KEY_ENV, Some("env-key"))],
            || {
                let mut diags = Diagnostics::new();
                let resolved = ProviderConfig::resolve(&config(None, None), &mut diags).unwrap().unwrap();
                assert_eq!(resolved.url, "http://env:8989");
                assert_eq!(resolved.api_key, "env-key");
            },
        );
    }

    #[test]
    fn missing_values_are_fatal() {
        temp_env::with_vars_unset([URL_ENV, API_KEY_ENV], || {
            let mut provider = Provider::new();
            let diags = provider.configure(&config(Some("http://localhost:8989".into()), None));
            let error = diags.errors().next().unwrap();
            assert_eq!(error.kind, Some(ErrorKind::Client));
            assert_eq!(error.attribute.as_deref(), Some("api_key"));
            assert!(error.detail.contains(API_KEY_ENV));
            assert!(provider.client().is_none());
        });
    }

    #[test]
    fn unknown_values_warn_and_leave_the_provider_unconfigured() {
        temp_env::with_vars_unset([URL_ENV, API_KEY_ENV], || {
            let mut provider = Provider::new();
            let diags = provider.configure(&config(Some(AttrValue::Unknown), Some("key".into())));
            assert!(!diags.has_error());
            assert_eq!(diags.warnings().count(), 1);
            assert!(provider.provider_data().is_none());
        });
    }

    #[test]
    fn explicit_empty_values_do_not_fall_back() {
        temp_env::with_vars(
            [(URL_ENV, Some("http://env:8989")), (API_KEY_ENV, Some("env-key"))],
            || {
                let mut diags = Diagnostics::new();
                let err = ProviderConfig::resolve(&config(Some("".into()), None), &mut diags).unwrap_err();
                assert!(matches!(err, ConfigError::Missing { attribute: "url", .. }));
            },
        );
    }

    #[test]
    fn unknown_url_suppresses_missing_api_key() {
        temp_env::with_vars_unset([URL_ENV, API_KEY_ENV], || {
            let mut provider = Provider::new();
            let diags = provider.configure(&config(Some(AttrValue::Unknown), None));
            assert!(!diags.has_error(), "diagnostics: {diags:?}");
            assert_eq!(diags.warnings().count(), 1);
            assert!(provider.client().is_none());
        });
    }

    #[test]
    fn invalid_urls_are_client_errors() {
        let mut provider = Provider::new();
        let diags = provider.configure(&config(Some("ftp://localhost".into()), Some("key".into())));
        assert_eq!(diags.errors().next().and_then(|diag| diag.attribute.as_deref()), Some("url"));
    }

    #[test]
    fn configured_providers_hand_out_the_client() {
        let mut provider = Provider::new();
        let diags = provider.configure(&config(Some("http://localhost:8989/".into()), Some("key".into())));
        assert!(diags.is_empty());
        let data = provider.provider_data().unwrap();
        let client = data.downcast_ref::<SonarrClient>().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8989");
    }
}
