use crate::command::render;
use crate::config::ToolInvocation;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    Success,
    /// The process ran and exited non-zero or was killed.
    Failed { diagnostic: String },
    /// The program or the script could not be located or started.
    Missing { diagnostic: String },
}

pub trait ProcessRunner {
    fn run(&mut self, tokens: &[String]) -> ProcessOutcome;
}

/// Runs the tool directly, without a shell, inheriting stdio and blocking until exit.
pub struct SystemRunner {
    script: PathBuf,
}

impl SystemRunner {
    pub fn new(tool: &ToolInvocation) -> Self {
        Self {
            script: tool.script.clone(),
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&mut self, tokens: &[String]) -> ProcessOutcome {
        let Some((program, args)) = tokens.split_first() else {
            return ProcessOutcome::Missing {
                diagnostic: "empty command".into(),
            };
        };

        if !self.script.is_file() {
            return ProcessOutcome::Missing {
                diagnostic: format!("script {:?} not found", self.script),
            };
        }

        tracing::info!(program = %program, args = args.len(), "spawning mutation tool");
        match Command::new(program).args(args).status() {
            Ok(status) if status.success() => {
                tracing::info!("mutation tool finished successfully");
                ProcessOutcome::Success
            }
            Ok(status) => {
                tracing::info!(%status, "mutation tool failed");
                ProcessOutcome::Failed {
                    diagnostic: format!("command '{}' failed with {}", render(tokens), status),
                }
            }
            Err(err) => {
                let diagnostic = match err.kind() {
                    ErrorKind::NotFound => format!("program {program:?} not found"),
                    _ => format!("could not start {program:?}: {err}"),
                };
                ProcessOutcome::Missing { diagnostic }
            }
        }
    }
}
