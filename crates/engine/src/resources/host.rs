//! Host settings: a flat upstream document grouped into nested blocks.

use serde::{Deserialize, Serialize};
use sonarr_api::{models, paths};
use sonarr_registry::resources;
use sonarr_types::Schema;

use crate::entity::{Lifecycle, RestEntity};
use crate::errors::HandlerError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationModel {
    pub method: Option<String>,
    pub required: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyModel {
    pub enabled: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<i64>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bypass_filter: Option<String>,
    pub bypass_local_addresses: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SslModel {
    pub enabled: Option<bool>,
    pub port: Option<i64>,
    pub cert_path: Option<String>,
    pub cert_password: Option<String>,
    pub certificate_validation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingModel {
    pub log_level: Option<String>,
    pub console_log_level: Option<String>,
    pub analytics_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackupModel {
    pub folder: Option<String>,
    pub interval: Option<i64>,
    pub retention: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateModel {
    pub mechanism: Option<String>,
    pub branch: Option<String>,
    pub automatically: Option<bool>,
    pub script_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostModel {
    pub id: Option<i64>,
    pub bind_address: Option<String>,
    pub port: Option<i64>,
    pub url_base: Option<String>,
    pub instance_name: Option<String>,
    pub application_url: Option<String>,
    pub launch_browser: Option<bool>,
    pub authentication: Option<AuthenticationModel>,
    pub proxy: Option<ProxyModel>,
    pub ssl: Option<SslModel>,
    pub logging: Option<LoggingModel>,
    pub backup: Option<BackupModel>,
    pub update: Option<UpdateModel>,
}

pub struct HostEntity;

impl RestEntity for HostEntity {
    type Wire = models::HostConfig;
    type Model = HostModel;

    const NAME: &'static str = "host";
    const PATH: &'static str = paths::HOST_CONFIG;
    const LIFECYCLE: Lifecycle = Lifecycle::Singleton;
    const MERGE_ON_UPDATE: bool = true;

    fn schema() -> Schema {
        resources::host()
    }

    fn to_model(wire: models::HostConfig) -> Result<HostModel, HandlerError> {
        Ok(HostModel {
            id: wire.id,
            bind_address: wire.bind_address,
            port: wire.port,
            url_base: wire.url_base,
            instance_name: wire.instance_name,
            application_url: wire.application_url,
            launch_browser: wire.launch_browser,
            authentication: Some(AuthenticationModel {
                method: wire.authentication_method,
                required: wire.authentication_required,
                username: wire.username,
                password: wire.password,
            }),
            proxy: Some(ProxyModel {
                enabled: wire.proxy_enabled,
                kind: wire.proxy_type,
                hostname: wire.proxy_hostname,
                port: wire.proxy_port,
                username: wire.proxy_username,
                password: wire.proxy_password,
                bypass_filter: wire.proxy_bypass_filter,
                bypass_local_addresses: wire.proxy_bypass_local_addresses,
            }),
            ssl: Some(SslModel {
                enabled: wire.enable_ssl,
                port: wire.ssl_port,
                cert_path: wire.ssl_cert_path,
                cert_password: wire.ssl_cert_password,
                certificate_validation: wire.certificate_validation,
            }),
            logging: Some(LoggingModel {
                log_level: wire.log_level,
                console_log_level: wire.console_log_level,
                analytics_enabled: wire.analytics_enabled,
            }),
            backup: Some(BackupModel {
                folder: wire.backup_folder,
                interval: wire.backup_interval,
                retention: wire.backup_retention,
            }),
            update: Some(UpdateModel {
                mechanism: wire.update_mechanism,
                branch: wire.branch,
                automatically: wire.update_automatically,
                script_path: wire.update_script_path,
            }),
        })
    }

    /// Unset blocks keep the upstream values. The password is always
    /// confirmed with itself.
    fn to_wire(model: HostModel, base: models::HostConfig) -> Result<models::HostConfig, HandlerError> {
        let auth = model.authentication.unwrap_or_default();
        let proxy = model.proxy.unwrap_or_default();
        let ssl = model.ssl.unwrap_or_default();
        let logging = model.logging.unwrap_or_default();
        let backup = model.backup.unwrap_or_default();
        let update = model.update.unwrap_or_default();
        let password = auth.password.or(base.password);
        Ok(models::HostConfig {
            id: model.id.or(base.id),
            bind_address: model.bind_address.or(base.bind_address),
            port: model.port.or(base.port),
            url_base: model.url_base.or(base.url_base),
            instance_name: model.instance_name.or(base.instance_name),
            application_url: model.application_url.or(base.application_url),
            launch_browser: model.launch_browser.or(base.launch_browser),
            authentication_method: auth.method.or(base.authentication_method),
            authentication_required: auth.required.or(base.authentication_required),
            username: auth.username.or(base.username),
            password_confirmation: password.clone(),
            password,
            proxy_enabled: proxy.enabled.or(base.proxy_enabled),
            proxy_type: proxy.kind.or(base.proxy_type),
            proxy_hostname: proxy.hostname.or(base.proxy_hostname),
            proxy_port: proxy.port.or(base.proxy_port),
            proxy_username: proxy.username.or(base.proxy_username),
            proxy_password: proxy.password.or(base.proxy_password),
            proxy_bypass_filter: proxy.bypass_filter.or(base.proxy_bypass_filter),
            proxy_bypass_local_addresses: proxy.bypass_local_addresses.or(base.proxy_bypass_local_addresses),
            enable_ssl: ssl.enabled.or(base.enable_ssl),
            ssl_port: ssl.port.or(base.ssl_port),
            ssl_cert_path: ssl.cert_path.or(base.ssl_cert_path),
            ssl_cert_password: ssl.cert_password.or(base.ssl_cert_password),
            certificate_validation: ssl.certificate_validation.or(base.certificate_validation),
            log_level: logging.log_level.or(base.log_level),
            console_log_level: logging.console_log_level.or(base.console_log_level),
            analytics_enabled: logging.analytics_enabled.or(base.analytics_enabled),
            backup_folder: backup.folder.or(base.backup_folder),
            backup_interval: backup.interval.or(base.backup_interval),
            backup_retention: backup.retention.or(base.backup_retention),
            branch: update.branch.or(base.branch),
            update_automatically: update.automatically.or(base.update_automatically),
            update_mechanism: update.mechanism.or(base.update_mechanism),
            update_script_path: update.script_path.or(base.update_script_path),
            extra: base.extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonarr_types::State;

    #[test]
    fn nested_blocks_flatten_onto_the_wire() {
        let model = HostModel {
            authentication: Some(AuthenticationModel {
                method: Some("forms".into()),
                username: Some("admin".into()),
                password: Some("hunter2".into()),
                ..AuthenticationModel::default()
            }),
            proxy: Some(ProxyModel {
                kind: Some("socks5".into()),
                ..ProxyModel::default()
            }),
            ..HostModel::default()
        };
        let base = models::HostConfig {
            port: Some(8989),
            ..models::HostConfig::default()
        };
        let wire = HostEntity::to_wire(model, base).unwrap();
        assert_eq!(wire.authentication_method.as_deref(), Some("forms"));
        assert_eq!(wire.password_confirmation.as_deref(), Some("hunter2"));
        assert_eq!(wire.proxy_type.as_deref(), Some("socks5"));
        assert_eq!(wire.port, Some(8989));
    }

    #[test]
    fn proxy_type_projects_onto_the_type_attribute() {
        let wire = models::HostConfig {
            proxy_type: Some("http".into()),
            ..models::HostConfig::default()
        };
        let state = State::from_record(&HostEntity::to_model(wire).unwrap(), &HostEntity::schema()).unwrap();
        let proxy = state.get("proxy").as_object().unwrap();
        assert_eq!(proxy["type"].as_str(), Some("http"));
    }
}
