//! Value type parsers for iCalendar (RFC 5545 §3.3.5, §3.3.6).
//!
//! Date-times are accepted in two profiles:
//! - compact: `YYYYMMDD["T"HHMMSS]["Z" | ±HHMM]` (plain-text profile)
//! - extended: `YYYY-MM-DD["T"HH:MM:SS]["Z" | ±HH:MM]` (xCal and jCal profiles)

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{Duration, Instant};
use crate::rfc::ical::expand::LocalZone;

/// How a parsed date-time is anchored in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeForm {
    /// Trailing `Z`.
    Utc,
    /// Explicit numeric offset.
    Offset(FixedOffset),
    /// No designator; interpreted in the TZID zone or system-local time.
    Floating,
}

/// A date-time as written, before it is anchored to an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeValue {
    pub local: NaiveDateTime,
    pub form: DateTimeForm,
    /// False for DATE values, which denote midnight.
    pub has_time: bool,
}

impl DateTimeValue {
    /// ## Summary
    /// Anchors the value to an instant. Only floating values use `zone`.
    ///
    /// ## Errors
    /// Returns an error if the local time does not exist in `zone`.
    pub fn to_instant(&self, zone: LocalZone) -> ParseResult<Instant> {
        match self.form {
            DateTimeForm::Utc => Ok(self.local.and_utc()),
            DateTimeForm::Offset(offset) => offset
                .from_local_datetime(&self.local)
                .single()
                .map(|dt| dt.to_utc())
                .ok_or_else(|| invalid_datetime(&self.local.to_string())),
            DateTimeForm::Floating => zone
                .to_utc(self.local)
                .map_err(|e| invalid_datetime(&e.to_string())),
        }
    }
}

/// Parses a DATE or DATE-TIME value and anchors it to an instant.
///
/// ## Errors
/// Returns `InvalidDateTime` if the text matches neither profile.
pub fn parse_datetime(s: &str, zone: LocalZone) -> ParseResult<Instant> {
    parse_datetime_value(s)?.to_instant(zone)
}

/// Parses a DATE or DATE-TIME value without anchoring it.
///
/// ## Errors
/// Returns `InvalidDateTime` if the text matches neither profile.
pub fn parse_datetime_value(s: &str) -> ParseResult<DateTimeValue> {
    if !s.is_ascii() {
        return Err(invalid_datetime(s));
    }

    let extended = s.as_bytes().get(4) == Some(&b'-');
    let (date_len, time_len) = if extended { (10, 8) } else { (8, 6) };

    if s.len() < date_len {
        return Err(invalid_datetime(s));
    }
    let (date_str, rest) = s.split_at(date_len);
    let date = parse_date(date_str, extended).ok_or_else(|| invalid_datetime(s))?;

    if rest.is_empty() {
        return Ok(DateTimeValue {
            local: date.and_time(NaiveTime::MIN),
            form: DateTimeForm::Floating,
            has_time: false,
        });
    }

    let rest = rest.strip_prefix('T').ok_or_else(|| invalid_datetime(s))?;
    if rest.len() < time_len {
        return Err(invalid_datetime(s));
    }
    let (time_str, suffix) = rest.split_at(time_len);
    let time = parse_time(time_str, extended).ok_or_else(|| invalid_datetime(s))?;
    let form = parse_designator(suffix, extended).ok_or_else(|| invalid_datetime(s))?;

    Ok(DateTimeValue {
        local: date.and_time(time),
        form,
        has_time: true,
    })
}

fn parse_date(s: &str, extended: bool) -> Option<NaiveDate> {
    let (year, month, day) = if extended {
        if &s[4..5] != "-" || &s[7..8] != "-" {
            return None;
        }
        (&s[0..4], &s[5..7], &s[8..10])
    } else {
        (&s[0..4], &s[4..6], &s[6..8])
    };

    NaiveDate::from_ymd_opt(
        i32::try_from(digits(year)?).ok()?,
        digits(month)?,
        digits(day)?,
    )
}

fn parse_time(s: &str, extended: bool) -> Option<NaiveTime> {
    let (hour, minute, second) = if extended {
        if &s[2..3] != ":" || &s[5..6] != ":" {
            return None;
        }
        (&s[0..2], &s[3..5], &s[6..8])
    } else {
        (&s[0..2], &s[2..4], &s[4..6])
    };

    NaiveTime::from_hms_opt(digits(hour)?, digits(minute)?, digits(second)?)
}

/// Parses the trailing `Z`, a numeric offset, or nothing.
fn parse_designator(s: &str, extended: bool) -> Option<DateTimeForm> {
    if s.is_empty() {
        return Some(DateTimeForm::Floating);
    }
    if s == "Z" {
        return Some(DateTimeForm::Utc);
    }

    let sign = match s.as_bytes()[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let body = &s[1..];
    let (hours, minutes) = if extended {
        if body.len() != 5 || &body[2..3] != ":" {
            return None;
        }
        (&body[0..2], &body[3..5])
    } else {
        if body.len() != 4 {
            return None;
        }
        (&body[0..2], &body[2..4])
    };

    let hours = i32::try_from(digits(hours)?).ok()?;
    let minutes = i32::try_from(digits(minutes)?).ok()?;
    if minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).map(DateTimeForm::Offset)
}

/// Parses a run of ASCII digits. Rejects signs and whitespace that `str::parse` would accept.
fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn invalid_datetime(s: &str) -> ParseError {
    ParseError::new(ParseErrorKind::InvalidDateTime).with_context(s)
}

/// Parses a DURATION value (RFC 5545 §3.3.6).
///
/// Format: `[+|-]P(nW | nD[T[nH][nM][nS]] | T[nH][nM][nS])`
///
/// ## Errors
/// Returns an error if the string is not a valid duration format.
pub fn parse_duration(s: &str) -> ParseResult<Duration> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidDuration).with_context(s);

    let (negative, unsigned) = if let Some(stripped) = s.strip_prefix('-') {
        (true, stripped)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    };

    let body = unsigned.strip_prefix('P').ok_or_else(invalid)?;
    if body.is_empty() {
        return Err(invalid());
    }

    // Week form excludes every other component
    if let Some(weeks) = body.strip_suffix('W') {
        let weeks = digits(weeks).ok_or_else(invalid)?;
        return Ok(Duration::weeks(weeks).with_sign(negative));
    }

    let (date_part, time_part) = match body.split_once('T') {
        Some((date_part, time_part)) => (date_part, Some(time_part)),
        None => (body, None),
    };

    let days = if date_part.is_empty() {
        0
    } else {
        let days = date_part.strip_suffix('D').ok_or_else(invalid)?;
        digits(days).ok_or_else(invalid)?
    };

    let [hours, minutes, seconds] = match time_part {
        Some(time_part) => parse_duration_time(time_part).ok_or_else(invalid)?,
        None => [0; 3],
    };

    Ok(Duration::new(days, hours, minutes, seconds).with_sign(negative))
}

/// Parses `[nH][nM][nS]` (at least one, in that order).
fn parse_duration_time(s: &str) -> Option<[u32; 3]> {
    if s.is_empty() {
        return None;
    }

    let mut parts = [0; 3];
    let mut remaining = s;
    let mut last_rank = 0;
    while !remaining.is_empty() {
        let split = remaining.find(|c: char| !c.is_ascii_digit())?;
        let (number, tail) = remaining.split_at(split);
        let value = digits(number)?;

        let rank = match tail.as_bytes()[0] {
            b'H' => 1,
            b'M' => 2,
            b'S' => 3,
            _ => return None,
        };
        if rank <= last_rank {
            return None;
        }
        parts[rank - 1] = value;
        last_rank = rank;
        remaining = &tail[1..];
    }
    Some(parts)
}
