use std::path::PathBuf;

pub const DEFAULT_PROGRAM: &str = "python3";
pub const DEFAULT_SCRIPT: &str = "psudohash.py";

#[derive(Debug, Clone)]
pub struct Config {
    pub tool: ToolInvocation,
    pub quiet: bool,
    pub verbosity: u8,
}

/// The first two tokens of every generated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub script: PathBuf,
}

impl Default for ToolInvocation {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.into(),
            script: PathBuf::from(DEFAULT_SCRIPT),
        }
    }
}

impl Config {
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_log_level() {
        let mut config = Config {
            tool: ToolInvocation::default(),
            quiet: false,
            verbosity: 0,
        };
        assert_eq!(config.log_filter(), "warn");
        config.verbosity = 2;
        assert_eq!(config.log_filter(), "debug");
        config.verbosity = 9;
        assert_eq!(config.log_filter(), "trace");
    }
}
