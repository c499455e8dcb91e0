//! Configuration for the verification flow

/// Minimum digits for a phone number to be submittable
pub const MIN_PHONE_LENGTH: usize = 9;
/// Minimum digits for an OTP to be submittable
pub const MIN_OTP_LENGTH: usize = 4;
/// Maximum digits accepted in the OTP field
pub const MAX_OTP_LENGTH: usize = 6;

/// Flow messages not covered by the landing page translations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowMessages {
    /// Verify attempted with too short an OTP
    pub pin_required: String,
    /// The request never produced a response
    pub network_error: String,
    /// PIN generation rejected without a message
    pub pin_request_rejected: String,
    /// PIN verification rejected without a message
    pub pin_verification_rejected: String,
    /// Verified with no redirect configured
    pub verification_success: String,
}

impl Default for FlowMessages {
    fn default() -> Self {
        Self {
            pin_required: "Please enter the PIN".to_string(),
            network_error: "Network error. Please try again.".to_string(),
            pin_request_rejected: "Failed to send PIN. Please try again.".to_string(),
            pin_verification_rejected: "Invalid PIN. Please try again.".to_string(),
            verification_success: "Verification successful".to_string(),
        }
    }
}

/// Configuration for the verification flow
#[derive(Debug, Clone)]
pub struct VerificationFlowConfig {
    /// Minimum phone length accepted by `submit`
    pub min_phone_length: usize,
    /// Minimum OTP length accepted by `verify`
    pub min_otp_length: usize,
    /// Maximum OTP length accepted by the OTP input
    pub max_otp_length: usize,
    /// User-facing messages
    pub messages: FlowMessages,
}

impl Default for VerificationFlowConfig {
    fn default() -> Self {
        Self {
            min_phone_length: MIN_PHONE_LENGTH,
            min_otp_length: MIN_OTP_LENGTH,
            max_otp_length: MAX_OTP_LENGTH,
            messages: FlowMessages::default(),
        }
    }
}
