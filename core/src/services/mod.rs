//! Business services: configuration resolution and the verification flow.

pub mod resolver;
pub mod verification;

// Re-export commonly used types
pub use resolver::{resolve_hostname, ConfigResolver, LandingPageClient, ResolveDomainResponse};
pub use verification::{
    FlowMessages, PinApiResponse, PinGenerationRequest, PinServiceTrait, PinVerificationRequest,
    Step, SubmitOutcome, VerificationFlow, VerificationFlowConfig, VerifyOutcome,
};
