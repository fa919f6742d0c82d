use crate::error::PromptError;
use crate::prompt::Console;
use std::io::{BufRead, Write};
use std::path::Path;

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn banner(&mut self) -> Result<(), PromptError> {
        self.say("\n|-- Welcome to the Interactive Command Generator for psudohash.py --|\n")?;
        self.say("|   Keep in mind that each additional configuration you add,        |")?;
        self.say("|   will make the generated dictionary much larger.                 |\n")
    }

    pub fn no_keywords(&mut self) -> Result<(), PromptError> {
        self.say("You must enter at least one keyword.")
    }

    pub fn generated_command(&mut self, line: &str) -> Result<(), PromptError> {
        self.say("\nGenerated command:")?;
        self.say(line)
    }

    pub fn completed(&mut self, output_file: &str) -> Result<(), PromptError> {
        self.say(&format!(
            "\nExecution completed. The results are in {output_file}."
        ))
    }

    pub fn failed(&mut self, diagnostic: &str) -> Result<(), PromptError> {
        self.say(&format!("Error during command execution: {diagnostic}"))
    }

    pub fn tool_missing(&mut self, script: &Path) -> Result<(), PromptError> {
        self.say(&format!(
            "Error: Make sure {} is in the same directory or the correct path.",
            script.display()
        ))
    }

    pub fn cancelled(&mut self, line: &str) -> Result<(), PromptError> {
        self.say(
            "\nExecution canceled. Copy and paste the command if you want to run it manually.",
        )?;
        self.say(line)
    }
}
