/// Errors that can occur when parsing a form answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    /// The input text was not a recognised yes/no answer
    #[error("unrecognised answer {0:?}: expected yes or no")]
    Unrecognised(String),
}

/// A yes/no answer to a single form question.
///
/// The calculator form asks every question as a No/Yes choice with "No" preselected, so
/// `Answer::No` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Answer {
    #[default]
    No,
    Yes,
}

impl Answer {
    /// Returns `true` for `Answer::Yes`.
    pub fn is_yes(self) -> bool {
        matches!(self, Answer::Yes)
    }

    /// Returns the display label used on the form.
    pub fn as_str(self) -> &'static str {
        match self {
            Answer::No => "No",
            Answer::Yes => "Yes",
        }
    }
}

impl std::str::FromStr for Answer {
    type Err = AnswerError;

    /// Parses an answer case-insensitively.
    ///
    /// Accepts `yes`, `y`, `true` and `1` for [`Answer::Yes`], and `no`, `n`, `false` and `0`
    /// for [`Answer::No`]. Leading and trailing whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Ok(Answer::Yes),
            "no" | "n" | "false" | "0" => Ok(Answer::No),
            _ => Err(AnswerError::Unrecognised(s.trim().to_owned())),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
