//! PIN generation and verification over HTTP

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use pl_core::errors::RemoteError;
use pl_core::services::verification::{
    PinApiResponse, PinGenerationRequest, PinServiceTrait, PinVerificationRequest,
};
use pl_shared::phone::mask_phone_number;
use pl_shared::RemoteApiConfig;

use super::client::remote_error;

/// Client for the publisher PIN endpoints
pub struct HttpPinService {
    client: reqwest::Client,
    generation_endpoint: String,
    verification_endpoint: String,
}

impl HttpPinService {
    pub fn new(client: reqwest::Client, config: &RemoteApiConfig) -> Self {
        Self {
            client,
            generation_endpoint: config.pin_generation_url(),
            verification_endpoint: config.pin_verification_url(),
        }
    }

    pub fn generation_endpoint(&self) -> &str {
        &self.generation_endpoint
    }

    pub fn verification_endpoint(&self) -> &str {
        &self.verification_endpoint
    }

    /// POST `body` and read a `{status, message}` reply.
    ///
    /// The reply body is honoured whatever the HTTP status, since the remote
    /// API reports rejections in it. A body that does not parse is a
    /// `Status` error on a non-2xx reply and a `Decode` error otherwise.
    async fn post<B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<PinApiResponse, RemoteError> {
        let response = self
            .client
            .post(endpoint)
            .json(body)
            .send()
            .await
            .map_err(remote_error)?;

        let status = response.status();
        let text = response.text().await.map_err(remote_error)?;

        match serde_json::from_str::<PinApiResponse>(&text) {
            Ok(reply) => {
                if !status.is_success() {
                    debug!(status = status.as_u16(), "PIN endpoint replied with error status and a body");
                }
                Ok(reply)
            }
            Err(_) if !status.is_success() => {
                warn!(endpoint = %endpoint, status = status.as_u16(), "PIN endpoint returned error status");
                Err(RemoteError::Status {
                    status: status.as_u16(),
                })
            }
            Err(e) => Err(RemoteError::Decode {
                message: e.to_string(),
            }),
        }
    }
}

#[async_trait]
impl PinServiceTrait for HttpPinService {
    async fn request_pin(
        &self,
        request: &PinGenerationRequest,
    ) -> Result<PinApiResponse, RemoteError> {
        debug!(
            phone = %mask_phone_number(&request.msisdn),
            click_id = %request.click_id,
            "Sending PIN generation request"
        );
        self.post(&self.generation_endpoint, request).await
    }

    async fn verify_pin(
        &self,
        request: &PinVerificationRequest,
    ) -> Result<PinApiResponse, RemoteError> {
        debug!(
            phone = %mask_phone_number(&request.msisdn),
            click_id = %request.click_id,
            "Sending PIN verification request"
        );
        self.post(&self.verification_endpoint, request).await
    }
}
