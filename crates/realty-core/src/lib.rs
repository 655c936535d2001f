//! # Realty Core
//!
//! Platform-independent client core for the real-estate management API.
//!
//! This crate holds everything the Dioxus app and the CLI share: the typed
//! resources, the REST client, and the panel state machine that drives the
//! list / form / delete workflow for each resource.
//!
//! ## Modules
//!
//! - [`resource`] - Agency, realtor and property records, drafts and forms
//! - [`api`] - REST client over a pluggable transport (reqwest in production)
//! - [`panel`] - Per-resource list and form state
//! - [`workflow`] - Async load/edit/save/delete operations over a panel host
//! - [`notify`] - Single-slot transient notifications
//! - [`tabs`] - Active resource tab
//! - [`connectivity`] - Startup reachability check
//! - [`format`] - Display formatting (prices)
//! - [`config`] - Defaults and base URL resolution
//! - [`error`] - Error types for requests and form input

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod format;
pub mod notify;
pub mod panel;
pub mod resource;
pub mod tabs;
pub mod workflow;

pub use api::{ApiClient, HttpTransport, Transport};
pub use error::{ApiError, FormError};
pub use resource::{Agency, Property, Realtor, RecordId, Resource, ResourceKind};
