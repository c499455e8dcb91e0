use pl_core::domain::entities::VerificationSession;
use pl_core::services::verification::{SubmitOutcome, VerifyOutcome};
use pl_shared::phone::is_digits;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Body of `POST /api/v1/pin/request`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PinRequestBody {
    /// National number, digits only
    #[validate(length(max = 20), custom(function = "validate_digits"))]
    pub phone: String,

    /// Dial code with or without '+' prefix, e.g. "+968" or "968"
    #[validate(length(min = 1, max = 6))]
    pub country_code: Option<String>,

    /// Click id from an earlier page load; a new one is generated if absent
    #[validate(length(max = 128))]
    pub click_id: Option<String>,
}

/// Body of `POST /api/v1/pin/verify`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PinVerifyBody {
    #[validate(length(min = 1, max = 20), custom(function = "validate_digits"))]
    pub phone: String,

    #[validate(length(min = 1, max = 128))]
    pub click_id: String,

    #[validate(length(max = 6), custom(function = "validate_digits"))]
    pub pin: String,

    #[validate(length(min = 1, max = 6))]
    pub country_code: Option<String>,
}

fn validate_digits(value: &str) -> Result<(), ValidationError> {
    if is_digits(value) {
        Ok(())
    } else {
        let mut error = ValidationError::new("digits");
        error.message = Some("Only digits are allowed".into());
        Err(error)
    }
}

/// Reply of `POST /api/v1/pin/request`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinRequestResponse {
    pub outcome: &'static str,
    pub session: VerificationSession,
}

/// Reply of `POST /api/v1/pin/verify`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinVerifyResponse {
    pub outcome: &'static str,
    /// Where the browser should go next, only once verified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    pub session: VerificationSession,
}

pub fn submit_outcome_code(outcome: &SubmitOutcome) -> &'static str {
    match outcome {
        SubmitOutcome::PinSent => "pinSent",
        SubmitOutcome::Invalid => "invalid",
        SubmitOutcome::Rejected => "rejected",
        SubmitOutcome::TransportFailed => "networkError",
        SubmitOutcome::Ignored => "ignored",
    }
}

pub fn verify_outcome_code(outcome: &VerifyOutcome) -> &'static str {
    match outcome {
        VerifyOutcome::Navigate(_) | VerifyOutcome::Verified => "verified",
        VerifyOutcome::Invalid => "invalid",
        VerifyOutcome::Rejected => "rejected",
        VerifyOutcome::TransportFailed => "networkError",
        VerifyOutcome::Ignored => "ignored",
    }
}
