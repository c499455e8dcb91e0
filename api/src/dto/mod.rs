pub mod page;
pub mod pin;

pub use page::{PageResponse, PAGE_TITLE};
pub use pin::{PinRequestBody, PinRequestResponse, PinVerifyBody, PinVerifyResponse};
