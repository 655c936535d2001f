//! API endpoint resolution for the CLI.
//!
//! The base URL is taken from, in order:
//! 1. `--api-url`
//! 2. `$REALTY_API_URL`
//! 3. the built-in default (`http://localhost:7070/api`)

use realty_core::api::{ApiClient, HttpTransport};
use realty_core::config::resolve_base_url;
use tracing::info;

/// Builds the client for `--api-url` (or its fallbacks).
pub fn client(api_url: Option<&str>) -> ApiClient<HttpTransport> {
    let base_url = resolve_base_url(api_url);
    info!("Using API at {}", base_url);
    ApiClient::new(HttpTransport::new(base_url))
}
