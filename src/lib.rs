//! Release announcements for Slack incoming webhooks.
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use slack_release_notifier::{Release, Repository, SlackNotifier};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let notifier = SlackNotifier::new("https://hooks.slack.com/services/T000/B000/XXXX")?;
//! let repository = Repository {
//!     owner: "acme".to_string(),
//!     name: "widget".to_string(),
//!     url: "https://github.com/acme/widget".to_string(),
//!     release: Release {
//!         name: "v1.2.0".to_string(),
//!         description: "Bug fixes".to_string(),
//!         url: "https://github.com/acme/widget/releases/v1.2.0".to_string(),
//!         published_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
//!         prerelease: false,
//!     },
//! };
//! notifier.send(&repository).await?;
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod model;
pub mod notify;
pub mod slack;

pub use http::RequestError;
pub use model::{Release, Repository};
pub use notify::Notify;
pub use slack::{SlackNotifier, SlackPayload};
