use std::collections::HashMap;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use pl_core::errors::DomainError;
use serde_json::json;
use validator::ValidationErrors;

use pl_shared::types::response::ErrorResponse;

/// Errors surfaced by the API handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body failed validation
    #[error("{message}")]
    Validation {
        message: String,
        fields: HashMap<String, Vec<String>>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    /// A single-field validation failure
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut fields = HashMap::new();
        fields.insert(field.to_string(), vec![message.clone()]);
        ApiError::Validation { message, fields }
    }

    /// Convert `validator` errors, keeping one message list per field
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        ApiError::Validation {
            message: "Invalid request data".to_string(),
            fields,
        }
    }

    fn fields(&self) -> HashMap<String, Vec<String>> {
        match self {
            ApiError::Validation { fields, .. } => fields.clone(),
            ApiError::Domain(DomainError::Validation { field, message }) => {
                HashMap::from([(field.to_string(), vec![message.clone()])])
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        tracing::warn!(error = %self, "Request rejected");

        let mut response = ErrorResponse::new("validation_error", self.to_string());
        let fields = self.fields();
        if !fields.is_empty() {
            let mut details = HashMap::new();
            details.insert("fields".to_string(), json!(fields));
            response = response.with_details(details);
        }

        HttpResponse::build(self.status_code()).json(response)
    }
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found",
    ))
}
