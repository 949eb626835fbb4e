//! Fixed-layout Slack attachment rendered for a release.

use serde::{Deserialize, Serialize};

use crate::http::RequestError;
use crate::model::Repository;

/// Border color for pre-releases.
pub const PRERELEASE_COLOR: &str = "#FFC600";
/// Border color for regular releases.
pub const RELEASE_COLOR: &str = "#15e415";
pub const FOOTER: &str = " ";
pub const FOOTER_ICON: &str =
    "https://assets-cdn.github.com/images/modules/logos_page/GitHub-Mark.png";
/// Attachment fields Slack may render as markup.
pub const MARKDOWN_IN: &[&str] = &["pretext"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

/// Slack's legacy rich-message attachment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlackAttachment {
    pub fallback: String,
    pub text: String,
    pub pretext: String,
    pub color: String,
    pub title: String,
    pub title_link: String,
    pub fields: Vec<AttachmentField>,
    pub footer: String,
    pub footer_icon: String,
    #[serde(rename = "mrkdwn_in")]
    pub markdown_in: Vec<String>,
    pub ts: i64,
}

/// Body POSTed to an incoming webhook. Always holds exactly one attachment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlackPayload {
    pub attachments: Vec<SlackAttachment>,
}

impl SlackPayload {
    /// Renders the release announcement for `repository`.
    pub fn from_repository(repository: &Repository) -> Self {
        let release = &repository.release;

        let color = if release.prerelease {
            PRERELEASE_COLOR
        } else {
            RELEASE_COLOR
        };

        let text = format!(
            "<{}|{}/{}>: <{}|{}> released",
            repository.url, repository.owner, repository.name, release.url, release.name,
        );

        let attachment = SlackAttachment {
            fallback: text.clone(),
            text,
            pretext: format!(
                "*{}/{}* - _{}_",
                repository.owner, repository.name, release.name
            ),
            color: color.to_string(),
            title: release.name.clone(),
            title_link: release.url.clone(),
            fields: vec![AttachmentField {
                title: "Description".to_string(),
                value: release.description.clone(),
                short: false,
            }],
            footer: FOOTER.to_string(),
            footer_icon: FOOTER_ICON.to_string(),
            markdown_in: MARKDOWN_IN.iter().map(|s| s.to_string()).collect(),
            ts: release.published_unix(),
        };

        Self {
            attachments: vec![attachment],
        }
    }

    /// Serializes the payload to JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RequestError> {
        serde_json::to_vec(self).map_err(RequestError::Serialize)
    }
}

impl From<&Repository> for SlackPayload {
    fn from(repository: &Repository) -> Self {
        Self::from_repository(repository)
    }
}
