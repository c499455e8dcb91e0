//! Trait for the remote PIN service

use async_trait::async_trait;

use crate::errors::RemoteError;

use super::types::{PinApiResponse, PinGenerationRequest, PinVerificationRequest};

/// Remote PIN generation and verification service
#[async_trait]
pub trait PinServiceTrait: Send + Sync {
    /// Ask the service to send a PIN to the subscriber
    async fn request_pin(&self, request: &PinGenerationRequest) -> Result<PinApiResponse, RemoteError>;
    /// Check a PIN typed by the subscriber
    async fn verify_pin(&self, request: &PinVerificationRequest) -> Result<PinApiResponse, RemoteError>;
}
