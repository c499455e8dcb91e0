//! Landing page configuration resolution
//!
//! This module resolves branding, copy and campaign data for the hostname a
//! page was requested on:
//! - Hostname selection (development override, detected host, fallback)
//! - A single uncached lookup against the remote landing page service
//! - Mapping of the landing page and campaign records into a `Configuration`
//! - Collapse of every failure into the built-in default configuration

mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use service::{resolve_hostname, ConfigResolver};
pub use traits::LandingPageClient;
pub use types::{CampaignRecord, LandingPageRecord, ResolveDomainResponse};
