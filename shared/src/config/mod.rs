//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `landing` - Hostname resolution and fallback campaign identifiers
//! - `remote` - Remote landing/PIN API endpoints and HTTP client settings
//! - `server` - HTTP server configuration

pub mod environment;
pub mod landing;
pub mod remote;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use landing::LandingConfig;
pub use remote::RemoteApiConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Remote API configuration
    pub remote: RemoteApiConfig,

    /// Landing page resolution configuration
    pub landing: LandingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            remote: RemoteApiConfig::default(),
            landing: LandingConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            remote: RemoteApiConfig::from_env(),
            landing: LandingConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }
}
