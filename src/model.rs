use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A published release.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Release {
    /// Release name/title (e.g., "v1.2.0")
    pub name: String,
    /// Release notes, passed through verbatim
    #[serde(default)]
    pub description: String,
    /// Canonical URL of the release page
    pub url: String,
    /// Publication time
    pub published_at: DateTime<Utc>,
    /// Whether this is a pre-release
    #[serde(default)]
    pub prerelease: bool,
}

impl Release {
    /// Publication time as Unix seconds, truncated toward zero.
    pub fn published_unix(&self) -> i64 {
        let secs = self.published_at.timestamp();
        // chrono floors; pre-epoch times with a fractional part round up to zero instead
        if secs < 0 && self.published_at.timestamp_subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }
}

/// A repository together with the release being announced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
    pub url: String,
    pub release: Release,
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
