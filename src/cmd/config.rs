use std::io::{self, BufRead, Write};

use clap::{Args, Subcommand};

use crate::config::{CommandLine, StoredConfig, config_file_path, parse_bool};
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Run the interactive configuration wizard.
    Init,
    /// Show the stored configuration.
    Show,
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Init => run_init(),
        ConfigCommand::Show => run_show(),
    }
}

fn run_init() -> AppResult<()> {
    let mut cfg = StoredConfig::load()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    println!("Configuring commitcop.");
    println!("Press Enter to keep the current value, '-' to clear it.");
    println!();

    edit_config(&mut cfg, &mut input, &mut output)?;
    cfg.save()?;

    let path = config_file_path()?;
    println!("\nConfiguration saved to {}", path.display());
    Ok(())
}

fn edit_config(
    cfg: &mut StoredConfig,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> AppResult<()> {
    apply_command_prompt(
        "Suggestion command (e.g., gh copilot suggest)",
        &mut cfg.oracle_command,
        input,
        output,
    )?;
    apply_command_prompt(
        "Availability probe (e.g., gh copilot --version)",
        &mut cfg.oracle_probe,
        input,
        output,
    )?;

    let current = cfg.push.map(|push| push.to_string());
    match prompt("Push after commit (true/false)", current.as_deref(), input, output)? {
        PromptAction::Keep => {}
        PromptAction::Clear => cfg.push = None,
        PromptAction::Set(value) => cfg.push = Some(parse_bool("push", &value)?),
    }
    Ok(())
}

fn run_show() -> AppResult<()> {
    let cfg = StoredConfig::load()?;
    let path = config_file_path()?;

    println!("Configuration file: {}", path.display());
    println!("Suggestion command: {}", display_value(&cfg.oracle_command));
    println!("Availability probe: {}", display_value(&cfg.oracle_probe));
    println!(
        "Push after commit: {}",
        display_value(&cfg.push.map(|push| push.to_string()))
    );

    Ok(())
}

fn apply_command_prompt(
    field: &str,
    target: &mut Option<String>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> AppResult<()> {
    match prompt(field, target.as_deref(), input, output)? {
        PromptAction::Keep => {}
        PromptAction::Clear => *target = None,
        PromptAction::Set(value) => {
            CommandLine::parse(&value)?;
            *target = Some(value);
        }
    }
    Ok(())
}

fn prompt(
    field: &str,
    current: Option<&str>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> AppResult<PromptAction> {
    match current {
        Some(value) => write!(output, "{field} [{value}] (Enter to keep, '-' to clear): ")?,
        None => write!(output, "{field} (Enter to skip): ")?,
    }
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim();

    if trimmed.is_empty() {
        Ok(PromptAction::Keep)
    } else if trimmed == "-" {
        Ok(PromptAction::Clear)
    } else {
        Ok(PromptAction::Set(trimmed.to_string()))
    }
}

fn display_value(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "<not set>".to_string())
}

enum PromptAction {
    Keep,
    Clear,
    Set(String),
}
