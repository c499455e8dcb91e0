//! CORS middleware configuration for cross-origin requests.
//!
//! The landing page front end may be served from any of the landing
//! domains, so development allows any origin while production restricts
//! origins to the configured list.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use crate::config::Config;

/// Creates a CORS middleware instance configured for the current environment.
///
/// # Environment Variables
/// - `APP_ENV`: Set to "production" for production settings
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors(config: &Config) -> Cors {
    if config.is_production() {
        create_production_cors(&config.cors.allowed_origins, config.cors.max_age)
    } else {
        create_development_cors(config.cors.max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    tracing::debug!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::CACHE_CONTROL,
            header::PRAGMA,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(max_age)
}

fn create_production_cors(allowed_origins: &[String], max_age: usize) -> Cors {
    tracing::debug!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(max_age);

    for origin in allowed_origins {
        tracing::info!(origin = %origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }

    cors
}
