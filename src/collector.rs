use crate::error::PromptError;
use crate::prompt::Console;
use crate::session::{Numbering, Paddings, SessionConfig, DEFAULT_OUTPUT_FILE};
use std::io::{BufRead, Write};

const KEYWORD_PROMPT: &str = "Enter a keyword to mutate on (or press Enter to finish)";
const NUMBERING_GATE: &str = "\nDo you want to add numbering to the end of the words?";
const NUMBERING_LEVEL: &str =
    "\tNumbering level (example: 1 -ex.: 1-, 2 -ex.: 01-, or 3 -ex.: 001-)";
const NUMBERING_LIMIT: &str = "\tNumbering limit (example: 50)";
const YEARS_GATE: &str = "\nDo you want to add years to the end of the words?";
const YEARS_VALUE: &str = "\tEnter the years (example: 2020 or 1990-2022 or 2000,2022)";
const PADDINGS_GATE: &str = "\nDo you want to add common symbols at the start or end of the words?";
const PAD_BEFORE: &str = "\tAdd symbols to the start of the words?";
const PAD_AFTER: &str = "\tAdd symbols to the end of the words?";
const CUSTOM_PADDINGS: &str = "\tEnter your own symbols separated by commas (optional)";
const OUTPUT_FILE: &str = "\nOutput file name";

/// Asks the fixed question sequence. `None` means no keyword was entered.
pub fn collect_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<SessionConfig>, PromptError> {
    let keywords = collect_keywords(console)?;
    if keywords.is_empty() {
        return Ok(None);
    }
    tracing::debug!(count = keywords.len(), "keywords collected");

    let mut session = SessionConfig::new(keywords);
    session.numbering = collect_numbering(console)?;
    session.years = collect_years(console)?;
    session.paddings = collect_paddings(console)?;
    session.output_file = console.ask_text(OUTPUT_FILE, Some(DEFAULT_OUTPUT_FILE))?;

    Ok(Some(session))
}

fn collect_keywords<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Vec<String>, PromptError> {
    let mut keywords = Vec::new();
    loop {
        let word = console.ask_text(KEYWORD_PROMPT, None)?;
        if word.is_empty() {
            return Ok(keywords);
        }
        keywords.push(word);
    }
}

fn collect_numbering<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<Numbering>, PromptError> {
    if !console.ask_yes_no(NUMBERING_GATE)? {
        return Ok(None);
    }
    let level = console.ask_text(NUMBERING_LEVEL, Some("1"))?;
    let limit = console.ask_text(NUMBERING_LIMIT, Some("50"))?;
    Ok(Some(Numbering { level, limit }))
}

fn collect_years<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<String>, PromptError> {
    if !console.ask_yes_no(YEARS_GATE)? {
        return Ok(None);
    }
    console.ask_text(YEARS_VALUE, None).map(Some)
}

fn collect_paddings<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<Paddings>, PromptError> {
    if !console.ask_yes_no(PADDINGS_GATE)? {
        return Ok(None);
    }
    let before = console.ask_yes_no(PAD_BEFORE)?;
    let after = console.ask_yes_no(PAD_AFTER)?;
    let custom_symbols = console.ask_text(CUSTOM_PADDINGS, Some(""))?;
    Ok(Some(Paddings {
        before,
        after,
        custom_symbols,
    }))
}
