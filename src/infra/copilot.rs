use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::Builder;
use tracing::{debug, warn};

use crate::config::CommandLine;
use crate::error::{AppError, AppResult};
use crate::infra::process::{CommandRunner, Invocation};
use crate::services::SuggestionService;

const INSTALL_HINT: &str = "install the GitHub Copilot CLI first: https://github.com/github/gh-copilot";

/// Suggestion tool driven through a CLI such as `gh copilot suggest`.
pub struct CopilotCli {
    runner: Arc<dyn CommandRunner>,
    command: CommandLine,
    probe: CommandLine,
}

impl CopilotCli {
    pub fn new(runner: Arc<dyn CommandRunner>, command: CommandLine, probe: CommandLine) -> Self {
        Self {
            runner,
            command,
            probe,
        }
    }
}

#[async_trait]
impl SuggestionService for CopilotCli {
    async fn ensure_available(&self) -> AppResult<()> {
        let probe = Invocation::new(&self.probe.program, &self.probe.args);
        self.runner.run_capture(&probe).await.map_err(|err| {
            AppError::OracleUnavailable(format!(
                "`{}` is not installed or not accessible ({err}); {INSTALL_HINT}",
                self.probe
            ))
        })?;
        Ok(())
    }

    async fn suggest(&self, prompt: &str) -> AppResult<String> {
        // Removed when `prompt_file` drops, on every return path.
        let mut prompt_file = Builder::new()
            .prefix("commitcop-prompt-")
            .suffix(".txt")
            .tempfile()?;
        prompt_file.write_all(prompt.as_bytes())?;
        prompt_file.flush()?;
        debug!(path = %prompt_file.path().display(), "prompt written");

        let invocation = Invocation::new(&self.command.program, &self.command.args)
            .with_stdin_file(prompt_file.path());
        let output = self
            .runner
            .run_capture(&invocation)
            .await
            .map_err(|err| AppError::Oracle(err.to_string()))?;

        let suggestion = output.trim();
        if suggestion.is_empty() {
            warn!(tool = %self.command, "suggestion tool returned no text");
        }
        Ok(suggestion.to_string())
    }

    fn name(&self) -> &str {
        &self.command.program
    }
}
