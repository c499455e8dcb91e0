//! Deployment environment and logging settings

use serde::{Deserialize, Serialize};
use std::{env, fmt, str::FromStr};

/// Where the landing service is running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    /// Read `APP_ENV`, falling back to `ENVIRONMENT`; unknown values mean development
    pub fn from_env() -> Self {
        ["APP_ENV", "ENVIRONMENT"]
            .iter()
            .find_map(|key| env::var(key).ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment `{other}`")),
        }
    }
}

/// Output shape of the log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!("unknown log format `{other}`")),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Level applied to the service's own crates
    pub level: String,

    /// Level applied to actix and the HTTP client stack
    pub dependency_level: String,

    pub format: LogFormat,

    /// Include file and line in each event
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    /// Defaults per environment, then `LOG_LEVEL` and `LOG_FORMAT` overrides
    pub fn for_environment(env: Environment) -> Self {
        let mut config = match env {
            Environment::Development => Self {
                level: "debug".into(),
                dependency_level: "info".into(),
                format: LogFormat::Pretty,
                source_location: true,
            },
            Environment::Staging => Self {
                level: "info".into(),
                dependency_level: "info".into(),
                format: LogFormat::Json,
                source_location: false,
            },
            Environment::Production => Self {
                level: "info".into(),
                dependency_level: "warn".into(),
                format: LogFormat::Json,
                source_location: false,
            },
        };

        if let Ok(level) = env::var("LOG_LEVEL") {
            config.level = level;
        }
        if let Some(format) = env::var("LOG_FORMAT").ok().and_then(|f| f.parse().ok()) {
            config.format = format;
        }
        config
    }

    /// `EnvFilter` directive; `RUST_LOG` replaces it entirely when set
    pub fn filter_directive(&self) -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| self.crate_directive())
    }

    fn crate_directive(&self) -> String {
        format!(
            "{dep},pl_api={own},pl_core={own},pl_infra={own},pl_shared={own}",
            dep = self.dependency_level,
            own = self.level,
        )
    }
}
