//! Error classification for outbound webhook requests.

use reqwest::StatusCode;
use std::time::Duration;

/// Ways a webhook request can fail. Every failure is terminal for the call.
#[derive(Debug)]
pub enum RequestError {
    /// Webhook URL is malformed or uses an unsupported scheme
    InvalidUrl(String),
    /// Payload could not be serialized
    Serialize(serde_json::Error),
    /// Network failure: DNS, connection refused, reset
    Transport(reqwest::Error),
    /// No complete response within the deadline
    Timeout(Duration),
    /// Endpoint answered with anything other than 200 OK
    Status { status: StatusCode, body: String },
}

impl RequestError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RequestError::Timeout(_))
    }

    /// HTTP status of a non-success response, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::InvalidUrl(msg) => {
                write!(f, "Invalid webhook URL: {}", msg)
            }
            RequestError::Serialize(e) => {
                write!(f, "Failed to serialize payload: {}", e)
            }
            RequestError::Transport(e) => {
                write!(f, "Failed to send request: {}", e)
            }
            RequestError::Timeout(timeout) => {
                write!(f, "Request timed out after {}ms", timeout.as_millis())
            }
            RequestError::Status { status, body } => {
                write!(f, "request didn't respond with 200 OK: {}, {}", status, body)
            }
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Serialize(e) => Some(e),
            RequestError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

/// Maps a failed `send()` to a timeout or a transport error.
pub fn classify_send_error(error: reqwest::Error, timeout: Duration) -> RequestError {
    if error.is_timeout() {
        RequestError::Timeout(timeout)
    } else if error.is_builder() {
        RequestError::InvalidUrl(error.to_string())
    } else {
        RequestError::Transport(error)
    }
}
