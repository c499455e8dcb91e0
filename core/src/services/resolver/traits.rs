//! Trait for the remote landing page lookup

use async_trait::async_trait;

use crate::errors::RemoteError;

use super::types::ResolveDomainResponse;

/// Remote landing page service
#[async_trait]
pub trait LandingPageClient: Send + Sync {
    /// Look up the landing page and campaign serving a hostname.
    ///
    /// Implementations must not cache: every call fetches fresh data.
    async fn resolve_domain(&self, domain: &str) -> Result<ResolveDomainResponse, RemoteError>;
}
