pub mod error;

pub use error::{not_found, ApiError};
