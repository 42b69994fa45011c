//! PERIOD value type (RFC 5545 §3.3.9).

use chrono::{DateTime, Datelike, SubsecRound, Utc};
use thiserror::Error;

use super::Duration;

/// An absolute point in time.
///
/// Floating and zoned date-times are resolved to UTC while parsing.
pub type Instant = DateTime<Utc>;

/// Earliest and latest years a DATE-TIME can spell out.
const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

/// An instant that a period cannot carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("Period start {0} is outside years 0000-9999")]
    StartOutOfRange(Instant),

    #[error("Period end {0} is outside years 0000-9999")]
    EndOutOfRange(Instant),
}

/// How a period ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodEnd {
    /// An explicit end instant (`start/end`).
    Explicit(Instant),
    /// A duration from the start (`start/duration`).
    Duration(Duration),
    /// No end and no duration (`start/`).
    Open,
}

/// One busy/free interval.
///
/// A period always has a start; tokens whose start cannot be parsed are
/// never turned into a `Period`. Instants are held at whole-second
/// precision within years 0000 to 9999, the range every profile can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    start: Instant,
    end: PeriodEnd,
}

impl Period {
    /// Creates a period, dropping sub-second precision from its instants.
    ///
    /// ## Errors
    /// Returns an error if the start or the explicit end falls outside
    /// years 0000 to 9999.
    pub fn new(start: Instant, end: PeriodEnd) -> Result<Self, PeriodError> {
        let start = representable(start).ok_or(PeriodError::StartOutOfRange(start))?;
        let end = match end {
            PeriodEnd::Explicit(end) => PeriodEnd::Explicit(
                representable(end).ok_or(PeriodError::EndOutOfRange(end))?,
            ),
            other => other,
        };
        Ok(Self { start, end })
    }

    /// Creates a period with an explicit end.
    ///
    /// ## Errors
    /// See [`Period::new`].
    pub fn explicit(start: Instant, end: Instant) -> Result<Self, PeriodError> {
        Self::new(start, PeriodEnd::Explicit(end))
    }

    /// Creates a period with a duration.
    ///
    /// ## Errors
    /// See [`Period::new`].
    pub fn with_duration(start: Instant, duration: Duration) -> Result<Self, PeriodError> {
        Self::new(start, PeriodEnd::Duration(duration))
    }

    /// Creates an open period.
    ///
    /// ## Errors
    /// See [`Period::new`].
    pub fn open(start: Instant) -> Result<Self, PeriodError> {
        Self::new(start, PeriodEnd::Open)
    }

    #[must_use]
    pub const fn start(&self) -> Instant {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> &PeriodEnd {
        &self.end
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.end, PeriodEnd::Open)
    }

    /// Returns the instant the period ends, deriving it from the duration
    /// when needed. Open periods have no end instant.
    #[must_use]
    pub fn end_instant(&self) -> Option<Instant> {
        match self.end {
            PeriodEnd::Explicit(end) => Some(end),
            PeriodEnd::Duration(duration) => {
                self.start.checked_add_signed(duration.to_time_delta())
            }
            PeriodEnd::Open => None,
        }
    }
}

/// Truncates to whole seconds, or `None` outside the writable years.
fn representable(instant: Instant) -> Option<Instant> {
    let instant = instant.trunc_subsecs(0);
    (MIN_YEAR..=MAX_YEAR)
        .contains(&instant.year())
        .then_some(instant)
}
