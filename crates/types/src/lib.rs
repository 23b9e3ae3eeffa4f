//! Shared host-side types for the Sonarr provider.
//!
//! The host runtime talks to the provider in terms of typed attribute values,
//! schemas describing those attributes, and diagnostics describing failures.
//! This crate models those three concepts without depending on the host's
//! wire protocol:
//!
//! - [`AttrValue`] and [`State`]: typed attribute values keyed by name
//! - [`Schema`], [`Attribute`], [`AttributeType`]: attribute declarations with
//!   validators and plan modifiers
//! - [`Diagnostic`] and [`Diagnostics`]: host-visible errors and warnings
//! - [`Context`]: per-operation cancellation signal

mod context;
mod diagnostics;
mod schema;
mod state;
mod value;

pub use context::Context;
pub use diagnostics::{Diagnostic, Diagnostics, ErrorKind, Intent, Severity};
pub use schema::{Attribute, AttributeType, PlanModifier, Schema, Validator};
pub use state::{State, StateError};
pub use value::{AttrValue, UNKNOWN_SENTINEL};

/// Type-erased data handed from the provider root to every handler during
/// configure. Handlers downcast it to the concrete client they expect.
pub type ProviderData = std::sync::Arc<dyn std::any::Any + Send + Sync>;
