//! HTTP client module for webhook delivery and request error classification.

mod client;
mod error;

pub use client::{HttpClient, redact_url};
pub use error::{RequestError, classify_send_error};
