use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("command `{command}` failed: {detail}")]
    Process { command: String, detail: String },
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error("suggestion tool unavailable: {0}")]
    OracleUnavailable(String),
    #[error("suggestion tool error: {0}")]
    Oracle(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
