//! iCalendar value parse error types.

use std::fmt;

/// Result type for value parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while parsing a single value or content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The offending text or additional detail.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Attaches context to the error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{}: {context}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Text matches neither the compact nor the extended date-time profile.
    InvalidDateTime,
    /// Text does not match the duration grammar.
    InvalidDuration,
    /// Content line has no property name.
    MissingPropertyName,
    /// Property name contains invalid characters.
    InvalidPropertyName,
    /// Malformed parameter.
    InvalidParameter,
    /// Quoted parameter value is not closed.
    UnclosedQuote,
    /// Content line has no `:` before the value.
    MissingColon,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDateTime => write!(f, "invalid date-time"),
            Self::InvalidDuration => write!(f, "invalid duration"),
            Self::MissingPropertyName => write!(f, "missing property name"),
            Self::InvalidPropertyName => write!(f, "invalid property name"),
            Self::InvalidParameter => write!(f, "invalid parameter"),
            Self::UnclosedQuote => write!(f, "unclosed quote"),
            Self::MissingColon => write!(f, "missing colon"),
        }
    }
}
