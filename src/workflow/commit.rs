use tracing::{info, warn};

use crate::context::AppContext;
use crate::domain::message::{build_prompt, enforce_conventional, fallback_message};
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    Suggestion,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct CommitOutcome {
    pub message: String,
    pub source: MessageSource,
    pub pushed: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct CommitOptions {
    pub push: bool,
}

/// Stages everything, commits under a conventional message and optionally pushes.
///
/// The suggestion tool is probed before anything is staged. A failed
/// suggestion is not fatal: the message is synthesized from the changed paths.
pub async fn commit_all_changes(
    ctx: &AppContext,
    options: CommitOptions,
) -> AppResult<CommitOutcome> {
    ctx.suggestions.ensure_available().await?;

    ctx.version_control.stage_all().await?;
    let changes = ctx.version_control.staged_changes().await?;
    if changes.is_empty() {
        warn!("nothing staged; git will likely refuse the commit");
    }
    info!(
        files = changes.changed_files().len(),
        "collected staged changes"
    );

    info!(tool = ctx.suggestions.name(), "generating commit message");
    let (candidate, source) = match ctx.suggestions.suggest(&build_prompt(&changes)).await {
        Ok(suggestion) => (suggestion, MessageSource::Suggestion),
        Err(err) => {
            warn!(error = %err, "suggestion failed, using fallback message");
            (fallback_message(&changes), MessageSource::Fallback)
        }
    };

    let message = enforce_conventional(&candidate, &changes);
    println!("Committing with message: {message}");
    ctx.version_control.commit(&message).await?;

    if options.push {
        ctx.version_control.push().await?;
    }

    Ok(CommitOutcome {
        message,
        source,
        pushed: options.push,
    })
}
