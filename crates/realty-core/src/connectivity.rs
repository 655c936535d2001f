//! Startup reachability check.

use crate::api::{ApiClient, Transport};
use crate::error::ApiError;
use tracing::{info, warn};

/// Connection indicator state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// Check has not finished yet
    #[default]
    Checking,
    Connected {
        message: String,
    },
    Disconnected {
        message: String,
    },
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            ConnectionStatus::Checking => "Checking server connection…",
            ConnectionStatus::Connected { message } | ConnectionStatus::Disconnected { message } => {
                message
            }
        }
    }

    pub fn from_ping(result: Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => ConnectionStatus::Connected {
                message: "Connected to server".to_string(),
            },
            Err(ApiError::Transport(_)) => ConnectionStatus::Disconnected {
                message: "Cannot connect to server".to_string(),
            },
            Err(_) => ConnectionStatus::Disconnected {
                message: "Server error".to_string(),
            },
        }
    }
}

/// Pings the API once. No retry, no polling.
pub async fn check<T: Transport>(client: &ApiClient<T>) -> ConnectionStatus {
    let result = client.ping().await;
    if let Err(e) = &result {
        warn!("Connectivity check failed: {}", e);
    }
    let status = ConnectionStatus::from_ping(result);
    info!("Connectivity: {}", status.message());
    status
}
