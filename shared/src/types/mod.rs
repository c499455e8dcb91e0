//! Type definitions module
//!
//! - `language` - Switcher languages and text direction
//! - `response` - API response wrappers

pub mod language;
pub mod response;

pub use language::{Language, TextDirection};
pub use response::{ApiResponse, ErrorResponse};
