//! The period grammar shared by every profile: `start ["/" (end | duration)]`.

use crate::rfc::ical::build::{write_datetime, write_duration};
use crate::rfc::ical::core::{DiagnosticKind, Diagnostics, Period, PeriodEnd, PeriodError};
use crate::rfc::ical::expand::LocalZone;
use crate::rfc::ical::parse::{parse_datetime, parse_duration};

/// Renders one period token.
///
/// Open periods render as `start/`.
#[must_use]
pub fn render_one(period: &Period, extended: bool) -> String {
    let mut token = write_datetime(&period.start(), extended);
    token.push('/');
    match period.end() {
        PeriodEnd::Explicit(end) => token.push_str(&write_datetime(end, extended)),
        PeriodEnd::Duration(duration) => token.push_str(&write_duration(duration)),
        PeriodEnd::Open => {}
    }
    token
}

/// Parses one period token.
///
/// Problems are recorded in `diagnostics` and the token is dropped.
pub fn parse_one(
    token: &str,
    tzid: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> Option<Period> {
    let zone = resolve_zone(tzid, diagnostics);
    parse_token(token, zone, diagnostics)
}

/// Parses every token in order, skipping the ones that fail.
///
/// The TZID is resolved once for the whole list.
pub fn parse_list<'a, I>(
    tokens: I,
    tzid: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> Vec<Period>
where
    I: IntoIterator<Item = &'a str>,
{
    let zone = resolve_zone(tzid, diagnostics);
    tokens
        .into_iter()
        .filter_map(|token| parse_token(token, zone, diagnostics))
        .collect()
}

/// Resolves the zone floating date-times are read in.
///
/// An unknown TZID is recorded and system-local time is used instead.
pub(super) fn resolve_zone(tzid: Option<&str>, diagnostics: &mut Diagnostics) -> LocalZone {
    match LocalZone::from_tzid(tzid) {
        Ok(zone) => zone,
        Err(e) => {
            tracing::debug!(error = %e, "Falling back to system-local time");
            diagnostics.push(DiagnosticKind::UnknownTimezone, tzid);
            LocalZone::System
        }
    }
}

pub(super) fn parse_token(
    token: &str,
    zone: LocalZone,
    diagnostics: &mut Diagnostics,
) -> Option<Period> {
    let Some((start_text, end_text)) = token.split_once('/') else {
        diagnostics.push(
            DiagnosticKind::MalformedPeriod,
            (!token.is_empty()).then_some(token),
        );
        return None;
    };

    let Ok(start) = parse_datetime(start_text, zone) else {
        diagnostics.push(DiagnosticKind::InvalidStartDate, Some(start_text));
        return None;
    };

    let built = if end_text.is_empty() {
        Period::open(start)
    } else if let Ok(end) = parse_datetime(end_text, zone) {
        // Date first; only a failed date parse falls through to a duration.
        Period::explicit(start, end)
    } else if let Ok(duration) = parse_duration(end_text) {
        Period::with_duration(start, duration)
    } else {
        diagnostics.push(DiagnosticKind::InvalidPeriodEnd, Some(end_text));
        return None;
    };

    match built {
        Ok(period) => Some(period),
        Err(PeriodError::StartOutOfRange(_)) => {
            diagnostics.push(DiagnosticKind::InvalidStartDate, Some(start_text));
            None
        }
        Err(PeriodError::EndOutOfRange(_)) => {
            diagnostics.push(DiagnosticKind::InvalidPeriodEnd, Some(end_text));
            None
        }
    }
}
