use clap::Parser;
use psudohash_helper::config::{DEFAULT_PROGRAM, DEFAULT_SCRIPT};
use psudohash_helper::{Config, ToolInvocation};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "psudohash-helper",
    version,
    about = "Builds a psudohash.py command line through interactive questions and optionally runs it."
)]
pub struct Cli {
    #[arg(
        long,
        default_value = DEFAULT_PROGRAM,
        value_name = "PROG",
        help = "Interpreter placed first in the generated command"
    )]
    pub program: String,

    #[arg(
        long,
        default_value = DEFAULT_SCRIPT,
        value_name = "PATH",
        help = "Path to psudohash.py, placed second in the generated command"
    )]
    pub script: PathBuf,

    #[arg(
        short,
        long,
        help = "Skips the welcome banner",
        action = clap::ArgAction::SetTrue
    )]
    pub quiet: bool,

    #[arg(
        short,
        long,
        help = "Raises diagnostic logging on stderr (repeat for more detail)",
        action = clap::ArgAction::Count
    )]
    pub verbose: u8,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            tool: ToolInvocation {
                program: self.program,
                script: self.script,
            },
            quiet: self.quiet,
            verbosity: self.verbose,
        }
    }
}
