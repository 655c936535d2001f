//! Realty Desk - browser and desktop client for the real-estate management API.
//!
//! One window with a tab per resource collection (agencies, realtors,
//! properties). Each tab lists its records and offers create, edit and delete
//! through a shared panel component. All request and state logic lives in
//! [`realty_core`]; this crate only wires it to Dioxus signals.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: default `web` feature, requests go through browser `fetch()`
//! - **Desktop**: `desktop` feature, native HTTP via reqwest

#![forbid(unsafe_code)]

pub mod components;
pub mod platform;
pub mod utils;
