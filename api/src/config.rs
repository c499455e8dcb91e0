use pl_shared::{AppConfig, Environment};
use serde::{Deserialize, Serialize};
use std::env;

/// API server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub cors: CorsConfig,
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed in production; any origin is allowed elsewhere
    pub allowed_origins: Vec<String>,
    /// Preflight cache lifetime in seconds
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age: 3600,
        }
    }
}

impl CorsConfig {
    /// Load from `ALLOWED_ORIGINS` (comma separated) and `CORS_MAX_AGE`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or(defaults.allowed_origins),
            max_age: env::var("CORS_MAX_AGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_age),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig::from_env(),
            cors: CorsConfig::from_env(),
        }
    }

    pub fn environment(&self) -> Environment {
        self.app.environment
    }

    pub fn is_production(&self) -> bool {
        self.app.environment.is_production()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
