//! Shared reqwest client and error mapping

use std::time::Duration;

use pl_core::errors::RemoteError;
use pl_shared::RemoteApiConfig;

use crate::InfrastructureError;

/// Build the client shared by every remote call
pub fn build_http_client(config: &RemoteApiConfig) -> Result<reqwest::Client, InfrastructureError> {
    if config.request_timeout_secs == 0 {
        return Err(InfrastructureError::Config(
            "Remote API timeout must be at least one second".to_string(),
        ));
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()?;

    Ok(client)
}

/// Classify a reqwest failure
pub(crate) fn remote_error(error: reqwest::Error) -> RemoteError {
    if error.is_timeout() {
        RemoteError::Timeout
    } else if error.is_decode() {
        RemoteError::Decode {
            message: error.to_string(),
        }
    } else if let Some(status) = error.status() {
        RemoteError::Status {
            status: status.as_u16(),
        }
    } else {
        RemoteError::Transport {
            message: error.to_string(),
        }
    }
}
