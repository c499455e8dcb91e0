//! Remote API configuration
//!
//! All remote collaborators live on a single host: the landing page
//! resolution endpoint and the two publisher PIN endpoints.

use serde::{Deserialize, Serialize};
use std::env;

/// Default remote host serving landing pages and PIN operations
pub const DEFAULT_BASE_URL: &str = "https://kidoz.xyz";
/// Landing page resolution path, queried with `?domain=<hostname>`
pub const RESOLVE_DOMAIN_PATH: &str = "/api/lp/resolve-lp-domain/";
/// PIN generation path
pub const PIN_GENERATION_PATH: &str = "/api/publisher/pin-generation/";
/// PIN verification path
pub const PIN_VERIFICATION_PATH: &str = "/api/publisher/pin-verification/";

/// Remote API endpoints and HTTP client settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteApiConfig {
    /// Scheme and host of the remote API, without trailing slash
    pub base_url: String,

    #[serde(default = "default_resolve_domain_path")]
    pub resolve_domain_path: String,

    #[serde(default = "default_pin_generation_path")]
    pub pin_generation_path: String,

    #[serde(default = "default_pin_verification_path")]
    pub pin_verification_path: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for RemoteApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            resolve_domain_path: default_resolve_domain_path(),
            pin_generation_path: default_pin_generation_path(),
            pin_verification_path: default_pin_verification_path(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl RemoteApiConfig {
    /// Create a configuration pointing at another host, keeping the fixed paths
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Load from `LP_API_BASE_URL` and `LP_API_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let mut config = match env::var("LP_API_BASE_URL") {
            Ok(base_url) if !base_url.trim().is_empty() => Self::with_base_url(base_url.trim()),
            _ => Self::default(),
        };
        if let Some(timeout) = env::var("LP_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.request_timeout_secs = timeout;
        }
        config
    }

    pub fn resolve_domain_url(&self) -> String {
        format!("{}{}", self.base_url, self.resolve_domain_path)
    }

    pub fn pin_generation_url(&self) -> String {
        format!("{}{}", self.base_url, self.pin_generation_path)
    }

    pub fn pin_verification_url(&self) -> String {
        format!("{}{}", self.base_url, self.pin_verification_path)
    }
}

fn default_resolve_domain_path() -> String {
    String::from(RESOLVE_DOMAIN_PATH)
}

fn default_pin_generation_path() -> String {
    String::from(PIN_GENERATION_PATH)
}

fn default_pin_verification_path() -> String {
    String::from(PIN_VERIFICATION_PATH)
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("pin-landing/{}", env!("CARGO_PKG_VERSION"))
}
