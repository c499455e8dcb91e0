//! Mock landing page client for testing the resolver

use async_trait::async_trait;
use std::sync::Mutex;

use crate::errors::RemoteError;
use crate::services::resolver::{LandingPageClient, ResolveDomainResponse};

pub struct MockLandingPageClient {
    pub result: Result<ResolveDomainResponse, RemoteError>,
    pub requested_domains: Mutex<Vec<String>>,
}

impl MockLandingPageClient {
    pub fn returning(response: ResolveDomainResponse) -> Self {
        Self {
            result: Ok(response),
            requested_domains: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: RemoteError) -> Self {
        Self {
            result: Err(error),
            requested_domains: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested_domains.lock().unwrap().clone()
    }
}

#[async_trait]
impl LandingPageClient for MockLandingPageClient {
    async fn resolve_domain(&self, domain: &str) -> Result<ResolveDomainResponse, RemoteError> {
        self.requested_domains.lock().unwrap().push(domain.to_string());
        self.result.clone()
    }
}
