//! HTTP client for single-shot webhook deliveries.

use log::debug;
use reqwest::{Client, Response, StatusCode, Url};
use std::time::Duration;

use super::error::{RequestError, classify_send_error};

/// Wraps a reqwest Client. Cloning shares the underlying connection pool.
#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// POSTs a raw body and succeeds only on `200 OK`.
    ///
    /// No headers are added. The deadline covers the whole exchange, from connecting
    /// to reading the response. A single attempt is made.
    pub async fn post_body(
        &self,
        url: &Url,
        body: Vec<u8>,
        timeout: Duration,
    ) -> Result<(), RequestError> {
        debug!("POST {} bytes to {}...", body.len(), redact_url(url));

        let response = self
            .client
            .post(url.clone())
            .body(body)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_send_error(e, timeout))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = read_body_best_effort(response).await;
            return Err(RequestError::Status { status, body });
        }

        debug!("{} responded with {}", redact_url(url), status);
        Ok(())
    }
}

/// Reads the response body as text, keeping whatever arrived before a read failure.
async fn read_body_best_effort(mut response: Response) -> String {
    let mut body = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(e) => {
                debug!(
                    "Failed to read error response body after {} bytes: {}",
                    body.len(),
                    e
                );
                break;
            }
        }
    }
    String::from_utf8_lossy(&body).into_owned()
}

/// Renders a URL without its path or query, which may carry a secret.
pub fn redact_url(url: &Url) -> String {
    let host = url.host_str().unwrap_or("<unknown>");
    match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    }
}
