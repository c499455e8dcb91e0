//! # Infrastructure Layer
//!
//! Concrete implementations of the remote collaborators used by the core:
//!
//! - **Landing page client**: `GET /api/lp/resolve-lp-domain/` over reqwest
//! - **PIN service**: PIN generation and verification over reqwest
//!
//! Both share one `reqwest::Client` built from [`RemoteApiConfig`].

use std::sync::Arc;

use pl_shared::{AppConfig, RemoteApiConfig};

// Re-export core types for convenience
pub use pl_core::errors::*;

/// HTTP module - reqwest implementations of the core client traits
pub mod http;

pub use http::{build_http_client, HttpLandingPageClient, HttpPinService};

/// Infrastructure service container
#[derive(Clone)]
pub struct InfrastructureServices {
    pub landing_page_client: Arc<HttpLandingPageClient>,
    pub pin_service: Arc<HttpPinService>,
}

impl InfrastructureServices {
    /// Build every client against the given remote API
    pub fn new(remote: &RemoteApiConfig) -> Result<Self, InfrastructureError> {
        let client = build_http_client(remote)?;

        Ok(Self {
            landing_page_client: Arc::new(HttpLandingPageClient::new(client.clone(), remote)),
            pin_service: Arc::new(HttpPinService::new(client, remote)),
        })
    }
}

/// Initialize infrastructure services
///
/// This function sets up the shared HTTP client and the clients for the
/// landing page and PIN endpoints.
pub fn initialize(config: &AppConfig) -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!(
        base_url = %config.remote.base_url,
        timeout_secs = config.remote.request_timeout_secs,
        "Initializing infrastructure services..."
    );

    let services = InfrastructureServices::new(&config.remote)?;

    tracing::info!("Infrastructure services initialized successfully");

    Ok(services)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
