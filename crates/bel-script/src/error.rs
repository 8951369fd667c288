//! Parse errors.
//!
//! Every error is fatal to the pass that raised it and carries the source
//! location it refers to.

use crate::location::Location;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Unterminated string or dangling line continuation.
    #[error("{location}: malformed line: {message}")]
    MalformedLine { location: Location, message: String },

    /// A `SET`/`UNSET`/`DEFINE` keyword was recognised but the rest of the
    /// line does not follow the directive's grammar.
    #[error("{location}: invalid {keyword} directive: {message}")]
    InvalidDirective {
        location: Location,
        keyword: String,
        message: String,
    },

    #[error("{location}: unrecognized token `{text}`")]
    UnrecognizedToken { location: Location, text: String },

    #[error("{location}: expected {expected}, found {found}")]
    UnexpectedToken {
        location: Location,
        expected: String,
        found: String,
    },

    #[error("{location}: unbalanced parentheses: {message}")]
    UnbalancedParentheses { location: Location, message: String },

    /// Terms or statements nested deeper than the configured limit.
    #[error("{location}: nesting exceeds the recursion limit of {limit}")]
    RecursionLimitExceeded { location: Location, limit: u32 },
}

impl Error {
    pub fn location(&self) -> Location {
        match self {
            Error::MalformedLine { location, .. }
            | Error::InvalidDirective { location, .. }
            | Error::UnrecognizedToken { location, .. }
            | Error::UnexpectedToken { location, .. }
            | Error::UnbalancedParentheses { location, .. }
            | Error::RecursionLimitExceeded { location, .. } => *location,
        }
    }

    /// 1-based source line.
    pub fn line(&self) -> u32 {
        self.location().line
    }

    /// The message without the location prefix.
    pub fn message(&self) -> String {
        match self {
            Error::MalformedLine { message, .. } => format!("malformed line: {message}"),
            Error::InvalidDirective {
                keyword, message, ..
            } => format!("invalid {keyword} directive: {message}"),
            Error::UnrecognizedToken { text, .. } => format!("unrecognized token `{text}`"),
            Error::UnexpectedToken {
                expected, found, ..
            } => format!("expected {expected}, found {found}"),
            Error::UnbalancedParentheses { message, .. } => {
                format!("unbalanced parentheses: {message}")
            }
            Error::RecursionLimitExceeded { limit, .. } => {
                format!("nesting exceeds the recursion limit of {limit}")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
