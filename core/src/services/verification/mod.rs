//! Phone verification flow
//!
//! This module drives the two-step PIN verification:
//! - Phone number collection and validation
//! - PIN generation through the remote PIN service
//! - OTP collection and PIN verification
//! - Redirect or confirmation once verified
//!
//! The session keeps a busy flag so that at most one request is in flight.

mod config;
mod service;
mod traits;
mod types;


pub use config::{
    FlowMessages, VerificationFlowConfig, MAX_OTP_LENGTH, MIN_OTP_LENGTH, MIN_PHONE_LENGTH,
};
pub use service::VerificationFlow;
pub use traits::PinServiceTrait;
pub use types::{
    PinApiResponse, PinGenerationRequest, PinVerificationRequest, Step, SubmitOutcome,
    VerifyOutcome,
};
