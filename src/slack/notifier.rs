use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use std::fmt;
use std::time::Duration;

use crate::http::{HttpClient, RequestError, redact_url};
use crate::model::Repository;
use crate::notify::Notify;

use super::payload::SlackPayload;

/// Deadline for a single webhook delivery.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Posts release announcements to a Slack incoming webhook.
#[derive(Clone)]
pub struct SlackNotifier {
    http_client: HttpClient,
    webhook_url: Url,
    timeout: Duration,
}

impl SlackNotifier {
    /// Create a notifier with its own HTTP client.
    pub fn new(webhook_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Self::with_client(client, webhook_url)
    }

    /// Create a notifier on top of a shared client.
    pub fn with_client(client: Client, webhook_url: &str) -> Result<Self> {
        let webhook_url = parse_webhook_url(webhook_url)?;
        Ok(Self {
            http_client: HttpClient::new(client),
            webhook_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Override the delivery deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn webhook_url(&self) -> &Url {
        &self.webhook_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends the release notification for `repository`.
    ///
    /// Succeeds only when the webhook answers `200 OK`. Failures are returned as
    /// [`RequestError`] inside the `anyhow::Error` and are never retried.
    #[tracing::instrument(skip(self, repository), fields(repository = %repository))]
    pub async fn send(&self, repository: &Repository) -> Result<()> {
        debug!(
            "Notifying {} about {} {}...",
            redact_url(&self.webhook_url),
            repository,
            repository.release.name
        );

        let body = SlackPayload::from_repository(repository).to_bytes()?;
        self.http_client
            .post_body(&self.webhook_url, body, self.timeout)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl Notify for SlackNotifier {
    async fn notify(&self, repository: &Repository) -> Result<()> {
        self.send(repository).await
    }
}

impl fmt::Debug for SlackNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackNotifier")
            .field("webhook_url", &redact_url(&self.webhook_url))
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_webhook_url(raw: &str) -> Result<Url, RequestError> {
    let url = Url::parse(raw).map_err(|e| RequestError::InvalidUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RequestError::InvalidUrl(format!(
            "unsupported scheme '{}'",
            other
        ))),
    }
}
