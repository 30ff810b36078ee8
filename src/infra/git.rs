use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::change::DiffSummary;
use crate::error::{AppError, AppResult};
use crate::infra::process::{CommandRunner, Invocation};
use crate::services::VersionControlService;

pub struct GitCli {
    workspace_root: PathBuf,
    runner: Arc<dyn CommandRunner>,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            workspace_root,
            runner,
        }
    }

    fn git<'a>(&self, args: impl IntoIterator<Item = &'a str>) -> Invocation {
        Invocation::new("git", args).in_dir(self.workspace_root.clone())
    }
}

fn failed(operation: &str) -> impl FnOnce(AppError) -> AppError + '_ {
    move |err| AppError::VersionControl(format!("failed to {operation}: {err}"))
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn stage_all(&self) -> AppResult<()> {
        self.runner
            .run_silent(&self.git(["add", "."]))
            .await
            .map_err(failed("stage changes"))
    }

    async fn staged_changes(&self) -> AppResult<DiffSummary> {
        let raw = self
            .runner
            .run_capture(&self.git(["diff", "--cached", "--name-status"]))
            .await
            .map_err(failed("read staged diff"))?;
        Ok(DiffSummary::new(raw))
    }

    async fn commit(&self, message: &str) -> AppResult<()> {
        info!(%message, "committing");
        self.runner
            .run_silent(&self.git(["commit", "-m", message]))
            .await
            .map_err(failed("commit changes"))
    }

    async fn push(&self) -> AppResult<()> {
        self.runner
            .run_silent(&self.git(["push"]))
            .await
            .map_err(failed("push changes"))
    }
}
