//! # PinLanding Core
//!
//! Core domain layer for the PinLanding backend.
//! This crate contains the landing page configuration model, the
//! configuration resolver, the two-step PIN verification flow, the traits
//! implemented by the remote API clients, and the error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
