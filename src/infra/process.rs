use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// A single external command: program, arguments, and where it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
    /// File whose contents are fed to the child's stdin.
    pub stdin_file: Option<PathBuf>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            current_dir: None,
            stdin_file: None,
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn with_stdin_file(mut self, path: &Path) -> Self {
        self.stdin_file = Some(path.to_path_buf());
        self
    }

    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn failure(&self, detail: impl Into<String>) -> AppError {
        AppError::Process {
            command: self.display(),
            detail: detail.into(),
        }
    }
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs with the terminal attached; only success matters.
    async fn run_silent(&self, invocation: &Invocation) -> AppResult<()>;
    /// Runs with stdout captured; failures carry the captured stderr.
    async fn run_capture(&self, invocation: &Invocation) -> AppResult<String>;
}

/// Spawns real processes through `tokio::process`.
#[derive(Debug, Default, Clone)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(&self, invocation: &Invocation) -> AppResult<Command> {
        let program = which::which(&invocation.program)
            .map_err(|err| invocation.failure(format!("executable not found: {err}")))?;

        let mut cmd = Command::new(program);
        cmd.args(&invocation.args);
        if let Some(dir) = &invocation.current_dir {
            cmd.current_dir(dir);
        }
        if let Some(path) = &invocation.stdin_file {
            let file = File::open(path)?;
            cmd.stdin(Stdio::from(file));
        }
        Ok(cmd)
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run_silent(&self, invocation: &Invocation) -> AppResult<()> {
        debug!(command = %invocation.display(), "running");
        let status = self
            .command(invocation)?
            .status()
            .await
            .map_err(|err| invocation.failure(format!("failed to spawn: {err}")))?;

        if !status.success() {
            return Err(invocation.failure(format!("exited with {status}")));
        }
        Ok(())
    }

    async fn run_capture(&self, invocation: &Invocation) -> AppResult<String> {
        debug!(command = %invocation.display(), "running with captured output");
        let output = self
            .command(invocation)?
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|err| invocation.failure(format!("failed to spawn: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(invocation.failure(format!(
                "exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_full_command_line() {
        let invocation = Invocation::new("git", ["diff", "--cached", "--name-status"]);
        assert_eq!(invocation.display(), "git diff --cached --name-status");
    }

    #[tokio::test]
    async fn missing_executable_is_reported() {
        let invocation = Invocation::new("commitcop-definitely-not-installed", ["--version"]);
        let err = SystemRunner::new()
            .run_capture(&invocation)
            .await
            .unwrap_err();
        match err {
            AppError::Process { command, detail } => {
                assert_eq!(command, "commitcop-definitely-not-installed --version");
                assert!(detail.contains("executable not found"), "{detail}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captures_stdout_of_shell() {
        let output = SystemRunner::new()
            .run_capture(&Invocation::new("sh", ["-c", "printf hello"]))
            .await
            .unwrap();
        assert_eq!(output, "hello");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failed_capture_carries_stderr() {
        let invocation = Invocation::new("sh", ["-c", "printf oops >&2; exit 3"]);
        let err = SystemRunner::new()
            .run_capture(&invocation)
            .await
            .unwrap_err();
        assert!(err.to_string().ends_with("oops"), "{err}");
    }
}
