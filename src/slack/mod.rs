//! Slack incoming-webhook delivery of release announcements.

mod notifier;
pub mod payload;

pub use notifier::{DEFAULT_TIMEOUT, SlackNotifier};
pub use payload::{AttachmentField, SlackAttachment, SlackPayload};
