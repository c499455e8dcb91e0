//! Shared utilities and common types for the PinLanding server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (server, remote API endpoints, landing defaults, logging)
//! - Language and text direction types
//! - API response envelopes
//! - Phone number helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, LandingConfig, LogFormat, LoggingConfig, RemoteApiConfig,
    ServerConfig,
};
pub use types::{ApiResponse, ErrorResponse, Language, TextDirection};
pub use utils::phone;
