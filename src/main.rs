mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::commit::{self, CommitCommandArgs};
use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::copilot::CopilotCli;
use crate::infra::git::GitCli;
use crate::infra::process::{CommandRunner, SystemRunner};
use crate::workflow::commit::MessageSource;

#[derive(Parser)]
#[command(
    name = "commitcop",
    author,
    version,
    about = "Stage, describe, commit and push in one step"
)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Stage all changes, commit with a generated message and push (default).
    Run(RunArgs),
    /// Manage CLI configuration.
    Config(ConfigArgs),
}

#[derive(Args, Default)]
struct RunArgs {
    /// Commit without pushing.
    #[arg(long)]
    no_push: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Config(args)) => {
            config_cmd::run(args.command)?;
            Ok(())
        }
        Some(Commands::Run(args)) => run_commit(args).await,
        None => run_commit(RunArgs::default()).await,
    }
}

async fn run_commit(args: RunArgs) -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd)?;

    let runner: Arc<dyn CommandRunner> = Arc::new(SystemRunner::new());
    let git = Arc::new(GitCli::new(config.workspace_root.clone(), runner.clone()));
    let copilot = Arc::new(CopilotCli::new(
        runner,
        config.oracle_command.clone(),
        config.oracle_probe.clone(),
    ));

    let context = AppContext::new(config, git, copilot);

    let outcome = commit::run(
        &context,
        CommitCommandArgs {
            no_push: args.no_push,
        },
    )
    .await?;

    if outcome.source == MessageSource::Fallback {
        eprintln!("Warning: suggestion tool failed; used a message built from the changed files.");
    }
    if outcome.pushed {
        println!("Changes pushed successfully!");
    }

    Ok(())
}
