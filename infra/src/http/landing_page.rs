//! Landing page resolution over HTTP

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::{debug, warn};

use pl_core::errors::RemoteError;
use pl_core::services::resolver::{LandingPageClient, ResolveDomainResponse};
use pl_shared::RemoteApiConfig;

use super::client::remote_error;

/// Client for `GET /api/lp/resolve-lp-domain/?domain=<hostname>`
pub struct HttpLandingPageClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpLandingPageClient {
    pub fn new(client: reqwest::Client, config: &RemoteApiConfig) -> Self {
        Self {
            client,
            endpoint: config.resolve_domain_url(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LandingPageClient for HttpLandingPageClient {
    async fn resolve_domain(&self, domain: &str) -> Result<ResolveDomainResponse, RemoteError> {
        debug!(domain = %domain, endpoint = %self.endpoint, "Resolving landing page domain");

        // Always fetch fresh: the landing page may be toggled at any time
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("domain", domain)])
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(remote_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(domain = %domain, status = status.as_u16(), "Landing page resolution returned error status");
            return Err(RemoteError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<ResolveDomainResponse>()
            .await
            .map_err(remote_error)
    }
}
