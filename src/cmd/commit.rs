use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::commit::{CommitOptions, CommitOutcome, commit_all_changes};

#[derive(Debug, Clone)]
pub struct CommitCommandArgs {
    pub no_push: bool,
}

pub async fn run(ctx: &AppContext, args: CommitCommandArgs) -> AppResult<CommitOutcome> {
    let options = CommitOptions {
        push: ctx.config.push && !args.no_push,
    };
    commit_all_changes(ctx, options).await
}
