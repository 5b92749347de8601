use std::fmt;

/// Errors produced when an email address fails syntactic validation.
///
/// Matchers treat this as "cannot be restricted" rather than surfacing it;
/// it is public so integrations can validate inputs up front if they wish.
#[derive(Debug)]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid email address: {}", self.message)
    }
}

impl std::error::Error for ParseError {}
