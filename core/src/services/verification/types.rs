//! Request, response and outcome types of the verification flow

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ClickId, OpaqueId};

/// Body of `POST /api/publisher/pin-generation/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinGenerationRequest {
    pub msisdn: String,
    pub service: OpaqueId,
    pub pub_id: OpaqueId,
    pub click_id: ClickId,
}

/// Body of `POST /api/publisher/pin-verification/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinVerificationRequest {
    pub msisdn: String,
    pub service: OpaqueId,
    pub pub_id: OpaqueId,
    pub click_id: ClickId,
    pub pin: String,
}

/// Reply of both PIN endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinApiResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl PinApiResponse {
    pub const SUCCESS: &'static str = "success";

    pub fn success() -> Self {
        Self {
            status: Self::SUCCESS.to_string(),
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            status: "failed".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case(Self::SUCCESS)
    }

    /// Message to surface, blank messages count as absent
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }
}

/// First half of a two-phase operation
#[derive(Debug, Clone, PartialEq)]
pub enum Step<R, O> {
    /// Send this request, then hand the result back to the flow
    Dispatch(R),
    /// Nothing to send, the operation is already settled
    Settled(O),
}

/// Result of a `submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// PIN sent, session now awaits it
    PinSent,
    /// Phone number too short, nothing was sent
    Invalid,
    /// The PIN service answered without success
    Rejected,
    /// The PIN service could not be reached
    TransportFailed,
    /// Busy or wrong stage, the call was a no-op
    Ignored,
}

/// Result of a `verify`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Verified, navigate to this URL
    Navigate(String),
    /// Verified, no redirect configured
    Verified,
    /// OTP too short, nothing was sent
    Invalid,
    /// The PIN service rejected the PIN
    Rejected,
    /// The PIN service could not be reached
    TransportFailed,
    /// Busy or wrong stage, the call was a no-op
    Ignored,
}

impl VerifyOutcome {
    /// Navigation target, if this outcome navigates
    pub fn navigation(&self) -> Option<&str> {
        match self {
            VerifyOutcome::Navigate(url) => Some(url),
            _ => None,
        }
    }
}
