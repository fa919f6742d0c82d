use crate::config::ToolInvocation;
use crate::session::SessionConfig;

pub const WORDS_FLAG: &str = "-w";
pub const OUTPUT_FLAG: &str = "-o";
pub const NUMBERING_LEVEL_FLAG: &str = "-an";
pub const NUMBERING_LIMIT_FLAG: &str = "-nl";
pub const YEARS_FLAG: &str = "-y";
pub const PAD_START_FLAG: &str = "-cpb";
pub const PAD_END_FLAG: &str = "-cpa";
pub const CUSTOM_PADDINGS_FLAG: &str = "-ap";

/// Maps a session onto discrete argument tokens, program and script first.
pub fn assemble(tool: &ToolInvocation, session: &SessionConfig) -> Vec<String> {
    let mut tokens = vec![
        tool.program.clone(),
        tool.script.display().to_string(),
        WORDS_FLAG.to_string(),
        session.words_option(),
        OUTPUT_FLAG.to_string(),
        session.output_file.clone(),
    ];

    if let Some(numbering) = &session.numbering {
        push_option(&mut tokens, NUMBERING_LEVEL_FLAG, &numbering.level);
        push_option(&mut tokens, NUMBERING_LIMIT_FLAG, &numbering.limit);
    }

    // The gate alone is not enough: an accepted but blank answer adds nothing.
    if let Some(years) = session.years.as_deref().filter(|y| !y.is_empty()) {
        push_option(&mut tokens, YEARS_FLAG, years);
    }

    if let Some(paddings) = &session.paddings {
        if paddings.before {
            tokens.push(PAD_START_FLAG.to_string());
        }
        if paddings.after {
            tokens.push(PAD_END_FLAG.to_string());
        }
        if !paddings.custom_symbols.is_empty() {
            push_option(&mut tokens, CUSTOM_PADDINGS_FLAG, &paddings.custom_symbols);
        }
    }

    tracing::debug!(?tokens, "command assembled");
    tokens
}

/// Human-readable form for display only; never handed to a shell.
pub fn render(tokens: &[String]) -> String {
    tokens.join(" ")
}

fn push_option(tokens: &mut Vec<String>, flag: &str, value: &str) {
    tokens.push(flag.to_string());
    tokens.push(value.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Numbering, Paddings};

    fn session(keywords: &[&str]) -> SessionConfig {
        SessionConfig::new(keywords.iter().map(|k| k.to_string()).collect())
    }

    fn position(tokens: &[String], flag: &str) -> Option<usize> {
        tokens.iter().position(|t| t == flag)
    }

    #[test]
    fn base_command_matches_defaults() {
        let tokens = assemble(&ToolInvocation::default(), &session(&["admin", "root"]));
        assert_eq!(
            render(&tokens),
            "python3 psudohash.py -w admin,root -o output.txt"
        );
    }

    #[test]
    fn keywords_keep_input_order() {
        let tokens = assemble(&ToolInvocation::default(), &session(&["zeta", "alpha", "mid"]));
        assert_eq!(tokens[3], "zeta,alpha,mid");
    }

    #[test]
    fn numbering_appends_level_then_limit() {
        let mut s = session(&["test"]);
        s.numbering = Some(Numbering {
            level: "2".into(),
            limit: "100".into(),
        });
        let tokens = assemble(&ToolInvocation::default(), &s);
        assert_eq!(tokens[6..], ["-an", "2", "-nl", "100"]);
    }

    #[test]
    fn declined_numbering_adds_neither_flag() {
        let tokens = assemble(&ToolInvocation::default(), &session(&["test"]));
        assert_eq!(position(&tokens, NUMBERING_LEVEL_FLAG), None);
        assert_eq!(position(&tokens, NUMBERING_LIMIT_FLAG), None);
    }

    #[test]
    fn blank_years_are_skipped_even_when_accepted() {
        let mut s = session(&["test"]);
        s.years = Some(String::new());
        let tokens = assemble(&ToolInvocation::default(), &s);
        assert_eq!(position(&tokens, YEARS_FLAG), None);

        s.years = Some("2020".into());
        let tokens = assemble(&ToolInvocation::default(), &s);
        let idx = position(&tokens, YEARS_FLAG).unwrap();
        assert_eq!(tokens[idx + 1], "2020");
    }

    #[test]
    fn paddings_emit_only_the_selected_flags() {
        let mut s = session(&["test"]);
        s.paddings = Some(Paddings {
            before: true,
            after: false,
            custom_symbols: "!,@".into(),
        });
        let tokens = assemble(&ToolInvocation::default(), &s);
        assert!(position(&tokens, PAD_START_FLAG).is_some());
        assert_eq!(position(&tokens, PAD_END_FLAG), None);
        let idx = position(&tokens, CUSTOM_PADDINGS_FLAG).unwrap();
        assert_eq!(tokens[idx + 1], "!,@");
    }

    #[test]
    fn values_with_spaces_stay_single_tokens() {
        let mut s = session(&["john smith"]);
        s.output_file = "my words.txt".into();
        let tokens = assemble(&ToolInvocation::default(), &s);
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[3], "john smith");
        assert_eq!(tokens[5], "my words.txt");
    }

    #[test]
    fn custom_tool_location_replaces_base_tokens() {
        let tool = ToolInvocation {
            program: "python".into(),
            script: "tools/psudohash.py".into(),
        };
        let tokens = assemble(&tool, &session(&["x"]));
        assert_eq!(tokens[..2], ["python", "tools/psudohash.py"]);
    }
}
