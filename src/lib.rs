mod collector;
pub mod command;
pub mod config;
pub mod error;
mod lines;
pub mod process;
pub mod prompt;
mod report;
pub mod session;

pub use config::{Config, ToolInvocation};
pub use process::{ProcessOutcome, ProcessRunner, SystemRunner};
pub use prompt::Console;
pub use session::SessionConfig;

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

const EXECUTE_GATE: &str = "\nDo you want to execute this command now?";

/// How a run ended. Every variant is a normal termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    NoKeywords,
    Cancelled { command: Vec<String> },
    Completed { command: Vec<String> },
    Failed { command: Vec<String>, diagnostic: String },
    ToolMissing { command: Vec<String>, diagnostic: String },
}

pub fn run(config: Config) -> Result<RunOutcome> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let mut runner = SystemRunner::new(&config.tool);
    run_with(&config, &mut console, &mut runner)
}

/// Collect, assemble, display, then optionally execute. Never loops back.
pub fn run_with<R: BufRead, W: Write>(
    config: &Config,
    console: &mut Console<R, W>,
    runner: &mut dyn ProcessRunner,
) -> Result<RunOutcome> {
    if !config.quiet {
        console.banner()?;
    }

    let Some(session) =
        collector::collect_session(console).context("Failed to collect answers")?
    else {
        console.no_keywords()?;
        return Ok(RunOutcome::NoKeywords);
    };

    let command = command::assemble(&config.tool, &session);
    let line = command::render(&command);
    console.generated_command(&line)?;

    if !console.ask_yes_no(EXECUTE_GATE).context("Failed to read confirmation")? {
        console.cancelled(&line)?;
        return Ok(RunOutcome::Cancelled { command });
    }

    let outcome = match runner.run(&command) {
        ProcessOutcome::Success => {
            console.completed(&session.output_file)?;
            RunOutcome::Completed { command }
        }
        ProcessOutcome::Failed { diagnostic } => {
            console.failed(&diagnostic)?;
            RunOutcome::Failed {
                command,
                diagnostic,
            }
        }
        ProcessOutcome::Missing { diagnostic } => {
            tracing::warn!(%diagnostic, "mutation tool unavailable");
            console.tool_missing(&config.tool.script)?;
            RunOutcome::ToolMissing {
                command,
                diagnostic,
            }
        }
    };
    Ok(outcome)
}
