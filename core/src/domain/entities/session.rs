//! Client-local verification session.
//!
//! A session lives for one page load. Its stage is an explicit variant so
//! that fields only meaningful in one stage (the OTP) cannot leak into
//! another.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::country::CountryCode;

/// Correlation token tying a PIN generation call to its verification call
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClickId(String);

impl ClickId {
    /// Generate a fresh, process-unique click id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Adopt a click id handed back by a client; blank values are rejected
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || value.len() > 128 {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ClickId {
    fn default() -> Self {
        Self::generate()
    }
}

impl std::fmt::Display for ClickId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a verified session ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Completion {
    /// Navigation to the configured redirect target
    Redirected { url: String },
    /// No redirect configured, a confirmation message is shown instead
    Confirmed { message: String },
}

/// Verification stage, each variant carrying only what is valid in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum Stage {
    CollectingPhone,
    AwaitingPin { otp: String },
    Verified { completion: Completion },
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::CollectingPhone => "CollectingPhone",
            Stage::AwaitingPin { .. } => "AwaitingPin",
            Stage::Verified { .. } => "Verified",
        }
    }
}

/// Observable state of one verification attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationSession {
    pub(crate) phone_number: String,
    pub(crate) selected_country: CountryCode,
    pub(crate) click_id: ClickId,
    pub(crate) stage: Stage,
    pub(crate) error_message: Option<String>,
    pub(crate) busy: bool,
}

impl VerificationSession {
    /// Fresh session collecting a phone number
    pub fn new(selected_country: CountryCode, click_id: ClickId) -> Self {
        Self {
            phone_number: String::new(),
            selected_country,
            click_id,
            stage: Stage::CollectingPhone,
            error_message: None,
            busy: false,
        }
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn selected_country(&self) -> &CountryCode {
        &self.selected_country
    }

    pub fn click_id(&self) -> &ClickId {
        &self.click_id
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// The OTP typed so far, only while awaiting a PIN
    pub fn otp(&self) -> Option<&str> {
        match &self.stage {
            Stage::AwaitingPin { otp } => Some(otp),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// A remote call is in flight; every control is disabled
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_verified(&self) -> bool {
        matches!(self.stage, Stage::Verified { .. })
    }
}
