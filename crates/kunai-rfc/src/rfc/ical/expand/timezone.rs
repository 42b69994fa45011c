//! The TZID collaborator: maps a TZID parameter to a zone and anchors
//! floating local times in it.
//!
//! Nothing is cached, so concurrent parses never share state.

use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;

/// Vendor prefixes some clients put in front of IANA names.
const VENDOR_PREFIXES: [&str; 2] = ["/mozilla.org/", "/softwarestudio.org/"];

#[derive(Debug, thiserror::Error)]
pub enum ZoneError {
    #[error("Unknown timezone: {0}")]
    Unknown(String),

    /// The local time falls in a DST gap.
    #[error("Local time {local} does not exist in {zone}")]
    Skipped { local: NaiveDateTime, zone: String },
}

/// The zone a floating date-time is interpreted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalZone {
    /// A zone named by a TZID parameter.
    Named(Tz),
    /// The host's zone.
    System,
}

impl LocalZone {
    /// ## Summary
    /// Resolves an optional TZID. No TZID means system-local time.
    ///
    /// ## Errors
    /// Returns `ZoneError::Unknown` if the TZID cannot be resolved.
    pub fn from_tzid(tzid: Option<&str>) -> Result<Self, ZoneError> {
        tzid.map_or(Ok(Self::System), |tzid| resolve_tzid(tzid).map(Self::Named))
    }

    /// ## Summary
    /// Anchors a local time in this zone.
    ///
    /// A repeated local time (DST fold) maps to its earlier instant. A skipped
    /// local time (DST gap) is moved one hour later first.
    ///
    /// ## Errors
    /// Returns `ZoneError::Skipped` if the time is still missing after the shift.
    pub fn to_utc(self, local: NaiveDateTime) -> Result<DateTime<Utc>, ZoneError> {
        let (instant, zone) = match self {
            Self::Named(tz) => (earliest_with_gap_shift(&tz, local), tz.name()),
            Self::System => (earliest_with_gap_shift(&Local, local), "local time"),
        };
        instant.ok_or_else(|| ZoneError::Skipped {
            local,
            zone: zone.to_string(),
        })
    }
}

/// ## Summary
/// Resolves a TZID to a `chrono_tz` zone after [`normalize_tzid`].
///
/// ## Errors
/// Returns `ZoneError::Unknown` with the original TZID if no zone matches.
pub fn resolve_tzid(tzid: &str) -> Result<Tz, ZoneError> {
    Tz::from_str(&normalize_tzid(tzid)).map_err(|_e| ZoneError::Unknown(tzid.to_string()))
}

/// Maps a TZID to a canonical IANA name where ICU4X knows one.
///
/// Handles vendor prefixes, Windows zone names (`Eastern Standard Time`) and
/// IANA aliases (`Europe/Kiev`, `US/Eastern`). Anything else comes back
/// without its vendor prefix.
#[must_use]
pub fn normalize_tzid(tzid: &str) -> String {
    let bare = VENDOR_PREFIXES
        .iter()
        .find_map(|prefix| tzid.strip_prefix(prefix))
        .unwrap_or(tzid);

    windows_to_iana(bare)
        .or_else(|| canonical_iana(bare))
        .unwrap_or_else(|| bare.to_string())
}

fn windows_to_iana(name: &str) -> Option<String> {
    let zone = WindowsParser::new().parse(name, None)?;
    IanaParserExtended::new()
        .iter()
        .find(|entry| entry.time_zone == zone)
        .map(|entry| entry.canonical.to_string())
}

fn canonical_iana(name: &str) -> Option<String> {
    let parsed = IanaParserExtended::new().parse(name);
    (parsed.time_zone != icu::time::TimeZone::UNKNOWN).then(|| parsed.canonical.to_string())
}

/// ## Summary
/// Anchors a local time in `tz` without adjusting DST gaps.
///
/// ## Errors
/// Returns `ZoneError::Skipped` if the time falls in a DST gap.
pub fn local_to_utc(tz: Tz, local: NaiveDateTime) -> Result<DateTime<Utc>, ZoneError> {
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| ZoneError::Skipped {
            local,
            zone: tz.name().to_string(),
        })
}

fn earliest_with_gap_shift<Z: TimeZone>(zone: &Z, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    zone.from_local_datetime(&local)
        .earliest()
        .or_else(|| {
            let shifted = local.checked_add_signed(TimeDelta::hours(1))?;
            zone.from_local_datetime(&shifted).earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
}
