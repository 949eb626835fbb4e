use anyhow::Result;
use async_trait::async_trait;

use crate::model::Repository;

/// Delivers a release announcement somewhere.
#[async_trait]
pub trait Notify: Send + Sync {
    async fn notify(&self, repository: &Repository) -> Result<()>;
}
