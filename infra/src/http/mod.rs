//! HTTP implementations of the remote collaborators

pub mod client;
pub mod landing_page;
pub mod pin_service;

pub use client::build_http_client;
pub use landing_page::HttpLandingPageClient;
pub use pin_service::HttpPinService;
