//! Landing page resolution configuration

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;

/// Hostname used when neither an override nor a detected host is available
pub const DEFAULT_FALLBACK_DOMAIN: &str = "localhost";

/// Hostname resolution and fallback campaign identifiers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LandingConfig {
    /// Development override, wins over any detected hostname
    #[serde(default)]
    pub override_domain: Option<String>,

    /// Last-resort hostname
    #[serde(default = "default_fallback_domain")]
    pub fallback_domain: String,

    /// Service identifier forwarded when the campaign carries none
    #[serde(default = "default_service_id")]
    pub default_service_id: Value,

    /// Publisher identifier forwarded when the campaign carries none
    #[serde(default = "default_publisher_id")]
    pub default_publisher_id: Value,

    /// How long a page load keeps its resolved configuration, in seconds
    #[serde(default = "default_page_session_ttl_secs")]
    pub page_session_ttl_secs: u64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            override_domain: None,
            fallback_domain: default_fallback_domain(),
            default_service_id: default_service_id(),
            default_publisher_id: default_publisher_id(),
            page_session_ttl_secs: default_page_session_ttl_secs(),
        }
    }
}

impl LandingConfig {
    /// Load from `LP_OVERRIDE_DOMAIN`, `LP_FALLBACK_DOMAIN`,
    /// `LP_DEFAULT_SERVICE_ID`, `LP_DEFAULT_PUBLISHER_ID` and `LP_PAGE_SESSION_TTL_SECS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            override_domain: env::var("LP_OVERRIDE_DOMAIN")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            fallback_domain: env::var("LP_FALLBACK_DOMAIN").unwrap_or(defaults.fallback_domain),
            default_service_id: env::var("LP_DEFAULT_SERVICE_ID")
                .map(|v| parse_identifier(&v))
                .unwrap_or(defaults.default_service_id),
            default_publisher_id: env::var("LP_DEFAULT_PUBLISHER_ID")
                .map(|v| parse_identifier(&v))
                .unwrap_or(defaults.default_publisher_id),
            page_session_ttl_secs: env::var("LP_PAGE_SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.page_session_ttl_secs),
        }
    }
}

/// Numeric identifiers stay numbers on the wire, anything else is a string
pub fn parse_identifier(raw: &str) -> Value {
    let raw = raw.trim();
    raw.parse::<u64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(raw))
}

fn default_fallback_domain() -> String {
    String::from(DEFAULT_FALLBACK_DOMAIN)
}

fn default_service_id() -> Value {
    Value::from(37)
}

fn default_publisher_id() -> Value {
    Value::from(13)
}

fn default_page_session_ttl_secs() -> u64 {
    30 * 60
}
