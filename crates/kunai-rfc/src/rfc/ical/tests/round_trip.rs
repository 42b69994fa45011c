//! Round-trip and fixture tests across the three profiles.

use chrono::{TimeZone, Utc};

use super::fixtures::*;
use crate::rfc::ical::core::{Duration, FreeBusy, FreeBusyType, Instant, Period};
use crate::rfc::ical::marshal::FreeBusyCodec;

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Instant {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

/// Writes and re-reads a property through every profile.
fn round_trip_all(property: &FreeBusy) -> Result<(), String> {
    let codec = FreeBusyCodec::new();

    let text = codec.write_text(property);
    let from_text = codec
        .parse_text(&text)
        .map_err(|e| format!("Text parse failed: {e}\n{text}"))?;
    if &from_text.value != property {
        return Err(format!("Text mismatch: {:?}\n{text}", from_text.value));
    }

    let xml = codec
        .write_xml(property)
        .map_err(|e| format!("XML write failed: {e}"))?;
    let from_xml = codec
        .parse_xml(&xml)
        .map_err(|e| format!("XML parse failed: {e}\n{xml}"))?;
    if &from_xml.value != property {
        return Err(format!("XML mismatch: {:?}\n{xml}", from_xml.value));
    }

    let json = codec.write_json(property);
    let from_json = codec
        .parse_json(&json)
        .map_err(|e| format!("JSON parse failed: {e}\n{json}"))?;
    if &from_json.value != property {
        return Err(format!("JSON mismatch: {:?}\n{json}", from_json.value));
    }

    Ok(())
}

#[test_log::test]
fn round_trip_explicit_and_duration() {
    let mut property = FreeBusy::new(vec![
        Period::explicit(utc(1997, 3, 8, 16, 0), utc(1997, 3, 8, 18, 0)).unwrap(),
        Period::with_duration(utc(1997, 3, 8, 20, 0), Duration::new(0, 8, 30, 0)).unwrap(),
        Period::with_duration(utc(1997, 3, 9, 0, 0), Duration::weeks(1)).unwrap(),
        Period::explicit(utc(1997, 3, 8, 16, 0), utc(1997, 3, 8, 18, 0)).unwrap(),
    ]);
    property.set_fb_type(&FreeBusyType::BusyTentative);
    round_trip_all(&property).expect("round trip should succeed");
}

#[test_log::test]
fn round_trip_long_folded_line() {
    let periods = (0..12)
        .map(|h| {
            Period::with_duration(utc(2020, 2, 29, h, 15), Duration::new(0, 0, 45, 0)).unwrap()
        })
        .collect();
    round_trip_all(&FreeBusy::new(periods)).expect("round trip should succeed");
}

#[test_log::test]
fn fixture_text_explicit() {
    let parsed = FreeBusyCodec::new().parse_text(TEXT_EXPLICIT).unwrap();
    assert_eq!(
        parsed.value.periods,
        vec![Period::explicit(utc(1997, 3, 8, 16, 0), utc(1997, 3, 8, 18, 0)).unwrap()]
    );
    assert_eq!(parsed.value.fb_type(), FreeBusyType::Busy);
    assert!(parsed.diagnostics.is_empty());
}

#[test_log::test]
fn fixture_text_duration_fbtype() {
    let parsed = FreeBusyCodec::new().parse_text(TEXT_DURATION_FBTYPE).unwrap();
    assert_eq!(
        parsed.value.periods,
        vec![Period::with_duration(utc(1997, 3, 8, 16, 0), Duration::new(0, 8, 30, 0)).unwrap()]
    );
    assert_eq!(parsed.value.fb_type(), FreeBusyType::BusyUnavailable);
}

#[test_log::test]
fn fixture_text_folded_list() {
    let parsed = FreeBusyCodec::new().parse_text(TEXT_FOLDED_LIST).unwrap();
    assert_eq!(parsed.value.periods.len(), 3);
    assert_eq!(parsed.value.fb_type(), FreeBusyType::Free);
    assert_eq!(
        parsed.value.periods[2].end_instant(),
        Some(utc(1997, 3, 9, 0, 0))
    );
}

#[test_log::test]
fn fixture_text_partially_broken() {
    let parsed = FreeBusyCodec::new().parse_text(TEXT_PARTIALLY_BROKEN).unwrap();
    assert_eq!(
        parsed.value.periods,
        vec![Period::with_duration(utc(1997, 3, 8, 20, 0), Duration::new(0, 1, 0, 0)).unwrap()]
    );
    assert_eq!(parsed.diagnostics.codes(), vec![13, 10, 14]);
}

#[test_log::test]
fn fixture_text_floating_tzid() {
    let parsed = FreeBusyCodec::new().parse_text(TEXT_FLOATING_TZID).unwrap();
    assert_eq!(
        parsed.value.periods,
        vec![Period::explicit(utc(2015, 7, 1, 13, 0), utc(2015, 7, 1, 14, 0)).unwrap()]
    );
    assert_eq!(parsed.value.tzid(), Some("America/New_York"));
}

#[test_log::test]
fn fixture_xcal_two_periods() {
    let parsed = FreeBusyCodec::new().parse_xml(XCAL_TWO_PERIODS).unwrap();
    assert_eq!(
        parsed.value.periods,
        vec![
            Period::with_duration(utc(2011, 5, 17, 12, 0), Duration::new(0, 1, 0, 0)).unwrap(),
            Period::explicit(utc(2011, 5, 17, 15, 0), utc(2011, 5, 17, 16, 0)).unwrap(),
        ]
    );
    assert_eq!(parsed.value.fb_type(), FreeBusyType::Busy);
    assert!(parsed.diagnostics.is_empty());
}

#[test_log::test]
fn fixture_xcal_incomplete() {
    let parsed = FreeBusyCodec::new().parse_xml(XCAL_INCOMPLETE).unwrap();
    assert!(parsed.value.periods.is_empty());
    assert_eq!(parsed.diagnostics.codes(), vec![13, 9]);
}

#[test_log::test]
fn fixture_jcal_two_periods() {
    let codec = FreeBusyCodec::new();
    let parsed = codec.parse_json_str(JCAL_TWO_PERIODS).unwrap();
    assert_eq!(parsed.value.periods.len(), 2);
    assert_eq!(parsed.value.fb_type(), FreeBusyType::BusyTentative);

    // The same periods read through every profile agree.
    let from_xml = codec.parse_xml(XCAL_TWO_PERIODS).unwrap();
    assert_eq!(parsed.value.periods, from_xml.value.periods);
}
