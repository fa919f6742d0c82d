pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Answers gathered for one run. Gated sub-options only exist when their gate was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub keywords: Vec<String>,
    pub numbering: Option<Numbering>,
    /// `Some("")` means years were accepted but left blank.
    pub years: Option<String>,
    pub paddings: Option<Paddings>,
    pub output_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numbering {
    pub level: String,
    pub limit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paddings {
    pub before: bool,
    pub after: bool,
    pub custom_symbols: String,
}

impl SessionConfig {
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords,
            numbering: None,
            years: None,
            paddings: None,
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }

    pub fn words_option(&self) -> String {
        self.keywords.join(",")
    }
}
