//! # Sonarr Engine
//!
//! Lifecycle handlers for every Sonarr entity the provider manages, plus the
//! provider root that configures them and the dispatcher that routes host
//! requests to them.
//!
//! ## Architecture
//!
//! - **`handler`**: the [`Resource`] and [`DataSource`] traits and the shared
//!   [`Response`] shape
//! - **`entity`**: the generic create/read/update/delete/import skeleton for
//!   non-polymorphic entities ([`RestEntity`], [`EntityResource`])
//! - **`items`**: the provider-item adapter, one resource per download client,
//!   indexer, notification, import list and metadata variant
//! - **`resources`**: concrete entities and their host models
//! - **`data_sources`**: lookups, listings, singleton views and condition builders
//! - **`errors`**: the error mapper turning failures into diagnostics
//! - **`provider`**: configuration with environment fallback and client construction
//! - **`dispatcher`**: type-name routing and the JSON line protocol
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sonarr_engine::Dispatcher;
//! use sonarr_types::{Context, State};
//!
//! # async fn run() {
//! let mut dispatcher = Dispatcher::new();
//! let mut config = State::new();
//! config.set("url", "http://localhost:8989");
//! config.set("api_key", "0123456789abcdef");
//! assert!(!dispatcher.configure(&config).has_error());
//!
//! let mut plan = State::new();
//! plan.set("label", "anime");
//! let response = dispatcher.create(&Context::new(), "sonarr_tag", &plan).await;
//! println!("{:?}", response.state);
//! # }
//! ```

pub mod data_sources;
pub mod dispatcher;
pub mod entity;
pub mod errors;
pub mod handler;
pub mod items;
pub mod provider;
pub mod resources;

pub use dispatcher::{Dispatcher, Outcome, Request, Schemas};
pub use entity::{EntityResource, Lifecycle, RestEntity, SINGLETON_ID};
pub use errors::HandlerError;
pub use handler::{ClientSlot, DataSource, Resource, Response};
pub use items::{FORCE_SAVE, FamilyWire, ProviderItemResource};
pub use provider::{API_KEY_ENV, ConfigError, Provider, ProviderConfig, URL_ENV};
