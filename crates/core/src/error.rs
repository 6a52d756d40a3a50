use sirs_types::AnswerError;

/// Errors raised at the edges of the calculator.
///
/// Evaluating an assessment never fails; these cover parsing user input, looking up reference
/// content and resolving startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum SirsError {
    #[error("invalid answer: {0}")]
    InvalidAnswer(#[from] AnswerError),
    #[error("unknown reference section: {0}")]
    UnknownSection(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type SirsResult<T> = std::result::Result<T, SirsError>;
