//! Cross-profile behavior of the FREEBUSY period-list codec.
//!
//! These tests use only the public API.

use chrono::{TimeDelta, TimeZone, Utc};
use serde_json::json;

use kunai_rfc::error::RfcError;
use kunai_rfc::rfc::ical::core::{
    Diagnostics, Duration, Instant, Period, PeriodEnd, PeriodError,
};
use kunai_rfc::rfc::ical::marshal::{
    JsonFormat, PeriodFormat, TextFormat, XmlFormat, parse_one,
};
use kunai_rfc::rfc::ical::parse::{parse_datetime, parse_duration};
use kunai_rfc::rfc::ical::expand::LocalZone;

fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn text_round_trip(periods: &[Period]) -> (Vec<Period>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let parsed = TextFormat::parse(&TextFormat::write(periods), None, &mut diagnostics).unwrap();
    (parsed, diagnostics)
}

fn xml_round_trip(periods: &[Period]) -> (Vec<Period>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let parsed = XmlFormat::parse(&XmlFormat::write(periods), None, &mut diagnostics).unwrap();
    (parsed, diagnostics)
}

fn json_round_trip(periods: &[Period]) -> (Vec<Period>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let parsed = JsonFormat::parse(&JsonFormat::write(periods), None, &mut diagnostics).unwrap();
    (parsed, diagnostics)
}

#[test_log::test]
fn explicit_end_round_trips_in_every_profile() {
    let periods = vec![
        Period::explicit(instant(2015, 1, 1, 0, 0, 0), instant(2015, 1, 1, 1, 30, 15)).unwrap(),
    ];

    for (profile, (parsed, diagnostics)) in [
        ("text", text_round_trip(&periods)),
        ("xml", xml_round_trip(&periods)),
        ("json", json_round_trip(&periods)),
    ] {
        assert_eq!(parsed, periods, "{profile}");
        assert!(diagnostics.is_empty(), "{profile}");
    }
}

#[test_log::test]
fn duration_round_trips_in_every_profile() {
    let periods = vec![
        Period::with_duration(instant(2015, 1, 1, 0, 0, 0), Duration::new(1, 2, 3, 4)).unwrap(),
        Period::with_duration(instant(2015, 1, 2, 0, 0, 0), Duration::weeks(2)).unwrap(),
    ];

    for (profile, (parsed, diagnostics)) in [
        ("text", text_round_trip(&periods)),
        ("xml", xml_round_trip(&periods)),
        ("json", json_round_trip(&periods)),
    ] {
        assert_eq!(parsed, periods, "{profile}");
        assert!(diagnostics.is_empty(), "{profile}");
    }
}

#[test_log::test]
fn every_buildable_duration_round_trips() {
    let start = instant(2015, 1, 1, 0, 0, 0);
    let periods: Vec<Period> = [
        Duration::zero(),
        Duration::weeks(1),
        Duration::weeks(3).negated(),
        Duration::new(2, 0, 0, 0),
        Duration::new(0, 0, 0, 59),
        Duration::new(1, 2, 0, 4).with_sign(true),
        Duration::weeks(1).with_sign(false),
    ]
    .into_iter()
    .map(|duration| Period::with_duration(start, duration).unwrap())
    .collect();

    for (profile, (parsed, diagnostics)) in [
        ("text", text_round_trip(&periods)),
        ("xml", xml_round_trip(&periods)),
        ("json", json_round_trip(&periods)),
    ] {
        assert_eq!(parsed, periods, "{profile}");
        assert!(diagnostics.is_empty(), "{profile}");
    }
}

#[test_log::test]
fn sub_second_instants_round_trip() {
    let half = TimeDelta::milliseconds(500);
    let periods = vec![
        Period::explicit(
            instant(2015, 1, 1, 0, 0, 0) + half,
            instant(2015, 1, 1, 1, 0, 0) + half,
        )
        .unwrap(),
        Period::open(instant(2015, 1, 2, 0, 0, 0) + half).unwrap(),
    ];

    let (parsed, diagnostics) = text_round_trip(&periods);
    assert_eq!(parsed, periods);
    assert!(diagnostics.is_empty());

    let (parsed, _) = json_round_trip(&periods);
    assert_eq!(parsed, periods);
}

#[test_log::test]
fn instants_past_year_9999_are_not_representable() {
    let far = instant(10_000, 1, 1, 0, 0, 0);
    assert_eq!(Period::open(far), Err(PeriodError::StartOutOfRange(far)));

    // A valid local time whose offset pushes it past 9999 in UTC.
    let mut diagnostics = Diagnostics::new();
    let parsed = TextFormat::parse(
        &"99991231T233000-0100/PT1H".to_string(),
        None,
        &mut diagnostics,
    )
    .unwrap();
    assert!(parsed.is_empty());
    assert_eq!(diagnostics.codes(), vec![10]);
}

#[test_log::test]
fn open_period_is_lost_in_xml_only() {
    let open = Period::open(instant(2015, 1, 1, 0, 0, 0)).unwrap();
    let periods = vec![open];

    let (parsed, _) = text_round_trip(&periods);
    assert_eq!(parsed, periods);

    let (parsed, _) = json_round_trip(&periods);
    assert_eq!(parsed, periods);

    let written = XmlFormat::write(&periods);
    assert_eq!(written[0].start.as_deref(), Some("2015-01-01T00:00:00Z"));
    assert_eq!(written[0].end, None);
    assert_eq!(written[0].duration, None);

    let (parsed, diagnostics) = xml_round_trip(&periods);
    assert!(!parsed.contains(&open));
    assert_eq!(diagnostics.codes(), vec![13]);
}

#[test_log::test]
fn bad_start_yields_one_diagnostic() {
    let mut diagnostics = Diagnostics::new();
    let parsed = TextFormat::parse(
        &"not-a-date/20150101T000000Z".to_string(),
        None,
        &mut diagnostics,
    )
    .unwrap();

    assert!(parsed.is_empty());
    assert_eq!(diagnostics.codes(), vec![10]);
    let context = diagnostics.iter().next().and_then(|d| d.context.clone());
    assert!(context.is_some_and(|c| c.contains("not-a-date")));
}

#[test_log::test]
fn date_then_duration_fallback() {
    let mut diagnostics = Diagnostics::new();

    let parsed = TextFormat::parse(&"20150101T000000Z/PT1H".to_string(), None, &mut diagnostics)
        .unwrap();
    assert_eq!(
        parsed,
        vec![
            Period::with_duration(instant(2015, 1, 1, 0, 0, 0), Duration::new(0, 1, 0, 0))
                .unwrap()
        ]
    );

    let parsed = TextFormat::parse(
        &"20150101T000000Z/20150101T010000Z".to_string(),
        None,
        &mut diagnostics,
    )
    .unwrap();
    assert_eq!(
        parsed,
        vec![Period::explicit(instant(2015, 1, 1, 0, 0, 0), instant(2015, 1, 1, 1, 0, 0)).unwrap()]
    );

    assert!(diagnostics.is_empty());
}

#[test_log::test]
fn empty_json_list_sentinel() {
    let written = JsonFormat::write(&[]);
    assert_eq!(written, vec![json!("")]);

    let mut diagnostics = Diagnostics::new();
    let parsed = JsonFormat::parse(&written, None, &mut diagnostics).unwrap();
    assert!(parsed.is_empty());
    assert_eq!(diagnostics.codes(), vec![13]);
}

#[test_log::test]
fn xml_without_period_children_is_fatal() {
    let mut diagnostics = Diagnostics::new();
    let result = XmlFormat::parse(&Vec::new(), None, &mut diagnostics);
    assert!(matches!(
        result,
        Err(RfcError::MissingXmlElements { element: "period" })
    ));

    let codec = kunai_rfc::FreeBusyCodec::new();
    let result = codec.parse_xml(
        r#"<freebusy xmlns="urn:ietf:params:xml:ns:icalendar-2.0"><parameters/></freebusy>"#,
    );
    assert!(matches!(
        result,
        Err(RfcError::MissingXmlElements { element: "period" })
    ));
}

/// Classifies the part after `/` by its leading characters instead of by
/// trying a date-time first.
fn classify_by_prefix(right: &str) -> Option<PeriodEnd> {
    let unsigned = right.strip_prefix(['+', '-']).unwrap_or(right);
    if unsigned.starts_with('P') {
        parse_duration(right).ok().map(PeriodEnd::Duration)
    } else {
        parse_datetime(right, LocalZone::System)
            .ok()
            .map(PeriodEnd::Explicit)
    }
}

#[test_log::test]
fn fallback_agrees_with_prefix_dispatch() {
    let rights = [
        "20150101T010000Z",
        "2015-01-01T01:00:00Z",
        "20150101T010000+0200",
        "2015-01-01T01:00:00-05:30",
        "20150102",
        "2015-01-02",
        "PT1H",
        "+PT1H",
        "-PT15M",
        "P1W",
        "P2D",
        "P1DT2H3M4S",
        "PT0S",
        "-P3W",
        "P",
        "PT",
        "P1W2D",
        "1H",
        "T010000Z",
        "2015-13-01",
        "20150101T250000Z",
        "PT1H30",
        "soon",
    ];

    for right in rights {
        let token = format!("20150101T000000Z/{right}");
        let mut diagnostics = Diagnostics::new();
        let by_fallback = parse_one(&token, None, &mut diagnostics).map(|p| *p.end());
        assert_eq!(by_fallback, classify_by_prefix(right), "{right}");
        assert_eq!(by_fallback.is_none(), diagnostics.codes() == vec![14], "{right}");
    }
}
