use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before an answer was given")]
    InputClosed,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
