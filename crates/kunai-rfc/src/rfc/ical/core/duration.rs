//! DURATION value type (RFC 5545 §3.3.6).

use std::fmt;

use chrono::TimeDelta;

/// A signed duration.
///
/// The week form (`P2W`) and the day/time form (`P1DT2H`) are mutually
/// exclusive. Fields are private so only [`Duration::weeks`] and
/// [`Duration::new`] build one, and each fills a single form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    negative: bool,
    weeks: u32,
    days: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl Duration {
    /// Creates a zero-length duration.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            negative: false,
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// Creates a duration in the week form.
    #[must_use]
    pub const fn weeks(weeks: u32) -> Self {
        Self {
            weeks,
            ..Self::zero()
        }
    }

    /// Creates a duration in the day/time form.
    #[must_use]
    pub const fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            negative: false,
            weeks: 0,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Returns the same magnitude with the sign flipped.
    #[must_use]
    pub const fn negated(self) -> Self {
        Self {
            negative: !self.negative,
            ..self
        }
    }

    /// Returns the duration with the given sign.
    #[must_use]
    pub const fn with_sign(self, negative: bool) -> Self {
        Self { negative, ..self }
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    #[must_use]
    pub const fn num_weeks(&self) -> u32 {
        self.weeks
    }

    #[must_use]
    pub const fn num_days(&self) -> u32 {
        self.days
    }

    #[must_use]
    pub const fn num_hours(&self) -> u32 {
        self.hours
    }

    #[must_use]
    pub const fn num_minutes(&self) -> u32 {
        self.minutes
    }

    #[must_use]
    pub const fn num_seconds(&self) -> u32 {
        self.seconds
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.weeks == 0 && self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Converts to a `chrono` time delta.
    #[must_use]
    pub fn to_time_delta(&self) -> TimeDelta {
        let total = i64::from(self.weeks) * 604_800
            + i64::from(self.days) * 86_400
            + i64::from(self.hours) * 3_600
            + i64::from(self.minutes) * 60
            + i64::from(self.seconds);
        let total = if self.negative { -total } else { total };
        TimeDelta::try_seconds(total).unwrap_or(TimeDelta::MAX)
    }
}

impl fmt::Display for Duration {
    /// Writes the canonical form, e.g. `P2W`, `-P1DT2H30M`, `PT0S`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;

        if self.is_zero() {
            return f.write_str("T0S");
        }

        if self.weeks > 0 {
            write!(f, "{}W", self.weeks)?;
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }
        if self.hours > 0 || self.minutes > 0 || self.seconds > 0 {
            f.write_str("T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds > 0 {
                write!(f, "{}S", self.seconds)?;
            }
        }
        Ok(())
    }
}
