//! Shared stubs for the route tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use pl_api::routes::AppState;
use pl_core::errors::RemoteError;
use pl_core::services::resolver::{LandingPageClient, ResolveDomainResponse};
use pl_core::services::verification::{
    PinApiResponse, PinGenerationRequest, PinServiceTrait, PinVerificationRequest,
};
use pl_shared::LandingConfig;

pub struct StubLandingPageClient {
    /// Answers for the first lookups, in order
    pub queued: Mutex<VecDeque<Result<ResolveDomainResponse, RemoteError>>>,
    /// Answer once the queue is drained
    pub result: Result<ResolveDomainResponse, RemoteError>,
    pub domains: Mutex<Vec<String>>,
}

impl StubLandingPageClient {
    pub fn returning(response: ResolveDomainResponse) -> Self {
        Self::with_result(Ok(response))
    }

    pub fn failing(error: RemoteError) -> Self {
        Self::with_result(Err(error))
    }

    /// Answer `response` for the first lookup and fail every later one
    pub fn returning_once(response: ResolveDomainResponse, then: RemoteError) -> Self {
        let stub = Self::failing(then);
        stub.queued.lock().unwrap().push_back(Ok(response));
        stub
    }

    fn with_result(result: Result<ResolveDomainResponse, RemoteError>) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            result,
            domains: Mutex::new(Vec::new()),
        }
    }

    pub fn domains(&self) -> Vec<String> {
        self.domains.lock().unwrap().clone()
    }
}

#[async_trait]
impl LandingPageClient for StubLandingPageClient {
    async fn resolve_domain(&self, domain: &str) -> Result<ResolveDomainResponse, RemoteError> {
        self.domains.lock().unwrap().push(domain.to_string());
        self.queued
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.result.clone())
    }
}

pub struct StubPinService {
    pub generation: Result<PinApiResponse, RemoteError>,
    pub verification: Result<PinApiResponse, RemoteError>,
    pub generation_calls: Mutex<Vec<PinGenerationRequest>>,
    pub verification_calls: Mutex<Vec<PinVerificationRequest>>,
}

impl StubPinService {
    pub fn new(
        generation: Result<PinApiResponse, RemoteError>,
        verification: Result<PinApiResponse, RemoteError>,
    ) -> Self {
        Self {
            generation,
            verification,
            generation_calls: Mutex::new(Vec::new()),
            verification_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(Ok(PinApiResponse::success()), Ok(PinApiResponse::success()))
    }

    pub fn generation_calls(&self) -> Vec<PinGenerationRequest> {
        self.generation_calls.lock().unwrap().clone()
    }

    pub fn verification_calls(&self) -> Vec<PinVerificationRequest> {
        self.verification_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PinServiceTrait for StubPinService {
    async fn request_pin(
        &self,
        request: &PinGenerationRequest,
    ) -> Result<PinApiResponse, RemoteError> {
        self.generation_calls.lock().unwrap().push(request.clone());
        self.generation.clone()
    }

    async fn verify_pin(
        &self,
        request: &PinVerificationRequest,
    ) -> Result<PinApiResponse, RemoteError> {
        self.verification_calls.lock().unwrap().push(request.clone());
        self.verification.clone()
    }
}

/// An active Omani landing page with a redirect
pub fn oman_landing_page() -> ResolveDomainResponse {
    serde_json::from_value(json!({
        "landing_page": {
            "id": 7,
            "domain_name": "oman.example",
            "country_code": "968",
            "footer_text": "Line one\\nLine two",
            "bg_color": "#112233",
            "submit_button_text": "Subscribe",
            "language": "ar",
            "redirect_url": "https://example.test/done",
            "is_active": true
        },
        "campaign": {"id": 3, "service_id": 101, "publisher_id": "pub-7", "is_active": true}
    }))
    .unwrap()
}

pub fn app_state(
    landing: Arc<StubLandingPageClient>,
    pins: Arc<StubPinService>,
) -> AppState<StubLandingPageClient, StubPinService> {
    AppState::new(landing, pins, LandingConfig::default())
}
