use async_trait::async_trait;

use crate::domain::change::DiffSummary;
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    async fn stage_all(&self) -> AppResult<()>;
    async fn staged_changes(&self) -> AppResult<DiffSummary>;
    async fn commit(&self, message: &str) -> AppResult<()>;
    async fn push(&self) -> AppResult<()>;
}
