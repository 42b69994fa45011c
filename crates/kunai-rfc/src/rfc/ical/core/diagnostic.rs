//! Recoverable parse notices.

use std::fmt;

/// The kind of a recoverable parse problem.
///
/// The numeric codes are stable and shared by every profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// An xCal `period` element has no `start` child.
    MissingPeriodStart,
    /// The start of a period is not a valid date-time.
    InvalidStartDate,
    /// An xCal `end` element is not a valid date-time.
    InvalidEndDate,
    /// An xCal `duration` element is not a valid duration.
    InvalidDuration,
    /// A period token has no `/`, an xCal period has neither `end` nor
    /// `duration`, or a jCal entry is not a string.
    MalformedPeriod,
    /// The part after `/` is neither a date-time nor a duration.
    InvalidPeriodEnd,
    /// A TZID could not be resolved; system-local time was used instead.
    UnknownTimezone,
}

impl DiagnosticKind {
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::MissingPeriodStart => 9,
            Self::InvalidStartDate => 10,
            Self::InvalidEndDate => 11,
            Self::InvalidDuration => 12,
            Self::MalformedPeriod => 13,
            Self::InvalidPeriodEnd => 14,
            Self::UnknownTimezone => 38,
        }
    }

    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            9 => Some(Self::MissingPeriodStart),
            10 => Some(Self::InvalidStartDate),
            11 => Some(Self::InvalidEndDate),
            12 => Some(Self::InvalidDuration),
            13 => Some(Self::MalformedPeriod),
            14 => Some(Self::InvalidPeriodEnd),
            38 => Some(Self::UnknownTimezone),
            _ => None,
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPeriodStart => write!(f, "period is missing its start"),
            Self::InvalidStartDate => write!(f, "invalid period start date"),
            Self::InvalidEndDate => write!(f, "invalid period end date"),
            Self::InvalidDuration => write!(f, "invalid period duration"),
            Self::MalformedPeriod => write!(f, "malformed period"),
            Self::InvalidPeriodEnd => write!(f, "period end is neither a date nor a duration"),
            Self::UnknownTimezone => write!(f, "unknown timezone, using local time"),
        }
    }
}

/// A single recoverable parse notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The offending text, when there is any.
    pub context: Option<String>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(kind: DiagnosticKind, context: Option<String>) -> Self {
        Self { kind, context }
    }

    #[must_use]
    pub const fn code(&self) -> u16 {
        self.kind.code()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(context) => write!(f, "[{}] {}: {context}", self.code(), self.kind),
            None => write!(f, "[{}] {}", self.code(), self.kind),
        }
    }
}

/// Ordered, append-only list of notices produced by one parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a notice and emits it as a `warn` event.
    pub fn push(&mut self, kind: DiagnosticKind, context: Option<&str>) {
        tracing::warn!(code = kind.code(), context = ?context, "{kind}");
        self.entries
            .push(Diagnostic::new(kind, context.map(str::to_owned)));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the numeric codes in recording order.
    #[must_use]
    pub fn codes(&self) -> Vec<u16> {
        self.entries.iter().map(Diagnostic::code).collect()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
