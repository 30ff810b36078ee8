use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::infra::process::{CommandRunner, Invocation};

/// What the runner saw for one call, including any stdin file contents.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub invocation: Invocation,
    pub stdin: Option<String>,
}

/// Replays queued responses in call order and records every invocation.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: Mutex<VecDeque<AppResult<String>>>,
    calls: Mutex<Vec<Recorded>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(self, stdout: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(stdout.to_string()));
        self
    }

    pub fn fail(self, detail: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(AppError::Process {
                command: "scripted".to_string(),
                detail: detail.to_string(),
            }));
        self
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, invocation: &Invocation) -> AppResult<String> {
        let stdin = invocation
            .stdin_file
            .as_ref()
            .map(|path| std::fs::read_to_string(path).unwrap());
        self.calls.lock().unwrap().push(Recorded {
            invocation: invocation.clone(),
            stdin,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run_silent(&self, invocation: &Invocation) -> AppResult<()> {
        self.next(invocation).map(|_| ())
    }

    async fn run_capture(&self, invocation: &Invocation) -> AppResult<String> {
        self.next(invocation)
    }
}
