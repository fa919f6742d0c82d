use crate::error::PromptError;
use crate::lines::read_next_line;
use std::io::{BufRead, Write};

pub const RETRY_HINT: &str = "Please respond 'y' for yes or 'n' for no.";

/// An answer to a yes/no question that has to be asked again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryRequest;

pub fn parse_yes_no(raw: &str) -> Result<bool, RetryRequest> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(RetryRequest),
    }
}

pub fn format_text_prompt(prompt: &str, default: Option<&str>) -> String {
    match default {
        Some(value) if !value.is_empty() => format!("{prompt} [{value}]: "),
        _ => format!("{prompt}: "),
    }
}

/// Line-oriented operator dialogue over an injected input and output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the trimmed answer, or `default` when the answer is empty.
    pub fn ask_text(
        &mut self,
        prompt: &str,
        default: Option<&str>,
    ) -> Result<String, PromptError> {
        write!(self.output, "{}", format_text_prompt(prompt, default))?;
        self.output.flush()?;

        let line = read_next_line(&mut self.input)?.ok_or(PromptError::InputClosed)?;
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(default.unwrap_or_default().to_string());
        }
        Ok(answer.to_string())
    }

    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, PromptError> {
        loop {
            write!(self.output, "{prompt} (y/n): ")?;
            self.output.flush()?;

            let line = read_next_line(&mut self.input)?.ok_or(PromptError::InputClosed)?;
            match parse_yes_no(&line) {
                Ok(answer) => return Ok(answer),
                Err(RetryRequest) => {
                    tracing::trace!(answer = %line, "rejected yes/no answer");
                    self.say(RETRY_HINT)?;
                }
            }
        }
    }

    pub fn say(&mut self, line: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
