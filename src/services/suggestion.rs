use async_trait::async_trait;

use crate::error::AppResult;

/// External tool that turns a prompt into a suggested commit message.
#[async_trait]
pub trait SuggestionService: Send + Sync {
    /// Cheap probe with no side effects; must succeed before `suggest` is used.
    async fn ensure_available(&self) -> AppResult<()>;
    async fn suggest(&self, prompt: &str) -> AppResult<String>;
    fn name(&self) -> &str;
}
