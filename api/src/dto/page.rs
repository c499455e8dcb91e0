use pl_core::domain::entities::{Configuration, VerificationSession};
use pl_shared::TextDirection;
use serde::Serialize;

/// Title shown on every landing page
pub const PAGE_TITLE: &str = "OTP Verification";

/// Everything the renderer needs to draw a landing page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub title: String,
    pub text_direction: TextDirection,
    pub configuration: Configuration,
    pub session: VerificationSession,
}

impl PageResponse {
    pub fn new(configuration: &Configuration, session: &VerificationSession) -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
            text_direction: configuration.text_direction(),
            configuration: configuration.clone(),
            session: session.clone(),
        }
    }
}
