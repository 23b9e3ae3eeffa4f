//! Error mapper: turns handler failures into host diagnostics.
//!
//! Every diagnostic carries the error kind, the operation intent and the
//! entity name. Free text that may contain credentials is redacted before it
//! reaches the host.

use sonarr_api::ApiError;
use sonarr_types::{Diagnostic, ErrorKind, Intent, StateError};
use sonarr_util::{CodecError, ImportIdError, redact_sensitive};
use thiserror::Error;

/// Failures raised inside a lifecycle operation.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("wire document: {0}")]
    Wire(#[from] serde_json::Error),

    #[error("implementation mismatch: expected {expected}, got {found}")]
    ImplementationMismatch { expected: &'static str, found: String },

    #[error("state has no id")]
    MissingId,

    #[error("the provider has not been configured")]
    Unconfigured,
}

impl HandlerError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(err) if err.is_not_found())
    }

    /// Map to a diagnostic of `kind`, or `Decode` for codec failures.
    pub fn to_diagnostic(&self, kind: ErrorKind, intent: Intent, entity: &str) -> Diagnostic {
        match self {
            Self::Codec(err) => operation_error(ErrorKind::Decode, intent, entity, err).with_attribute(err.field()),
            Self::Unconfigured => operation_error(ErrorKind::Client, intent, entity, self),
            _ => operation_error(kind, intent, entity, self),
        }
    }
}

/// `Unable to {intent} {entity}, got error: {err}`.
pub fn operation_error(kind: ErrorKind, intent: Intent, entity: &str, err: &dyn std::fmt::Display) -> Diagnostic {
    let detail = redact_sensitive(&format!("Unable to {intent} {entity}, got error: {err}"));
    Diagnostic::error(kind.summary(), detail)
        .with_kind(kind)
        .with_intent(intent)
        .with_entity(entity)
}

pub fn resource_error(intent: Intent, entity: &str, err: &HandlerError) -> Diagnostic {
    err.to_diagnostic(ErrorKind::Resource, intent, entity)
}

pub fn data_source_error(entity: &str, err: &HandlerError) -> Diagnostic {
    err.to_diagnostic(ErrorKind::DataSource, Intent::Read, entity)
}

/// Lookup miss in a data source.
pub fn not_found(entity: &str, field: &str, value: &str) -> Diagnostic {
    Diagnostic::error(ErrorKind::DataSource.summary(), format!("{entity} {field}={value} not found"))
        .with_kind(ErrorKind::DataSource)
        .with_intent(Intent::Read)
        .with_entity(entity)
        .with_attribute(field)
}

pub fn import_error(entity: &str, raw: &str, err: &ImportIdError) -> Diagnostic {
    let kind = ErrorKind::UnexpectedImportIdentifier;
    Diagnostic::error(
        kind.summary(),
        format!("Expected import identifier with format: <id>. Got: {raw:?} ({err})"),
    )
    .with_kind(kind)
    .with_intent(Intent::Import)
    .with_entity(entity)
}

/// Provider data of an unexpected type was handed to a handler.
pub fn configure_type_error(kind: ErrorKind, entity: &str) -> Diagnostic {
    Diagnostic::error(
        kind.summary(),
        format!("Expected a configured Sonarr client for {entity}. Please report this issue to the provider developers."),
    )
    .with_kind(kind)
    .with_entity(entity)
}
