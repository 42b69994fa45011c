//! FREEBUSY test fixtures.
//!
//! Content lines from RFC 5545 §3.8.2.6 plus malformed variants seen in the wild.

/// RFC 5545 §3.8.2.6 - Explicit end
pub const TEXT_EXPLICIT: &str = "FREEBUSY:19970308T160000Z/19970308T180000Z\r\n";

/// RFC 5545 §3.8.2.6 - Duration with FBTYPE
pub const TEXT_DURATION_FBTYPE: &str =
    "FREEBUSY;FBTYPE=BUSY-UNAVAILABLE:19970308T160000Z/PT8H30M\r\n";

/// RFC 5545 §3.8.2.6 - Several periods on one line, folded
pub const TEXT_FOLDED_LIST: &str = "\
FREEBUSY;FBTYPE=FREE:19970308T160000Z/PT3H,19970308T200000Z/PT1H\r\n \
,19970308T230000Z/19970309T000000Z\r\n";

/// One good period between a token with no `/` and a bad start.
pub const TEXT_PARTIALLY_BROKEN: &str =
    "FREEBUSY:19970308T160000Z,junk/PT1H,19970308T200000Z/PT1H,19970308T160000Z/soon\r\n";

/// Floating times with a TZID parameter.
pub const TEXT_FLOATING_TZID: &str =
    "FREEBUSY;TZID=America/New_York:20150701T090000/20150701T100000\r\n";

/// RFC 6321 §3.4.1.7 style property element.
pub const XCAL_TWO_PERIODS: &str = r#"<freebusy xmlns="urn:ietf:params:xml:ns:icalendar-2.0">
  <parameters>
    <fbtype><text>BUSY</text></fbtype>
  </parameters>
  <period>
    <start>2011-05-17T12:00:00Z</start>
    <duration>PT1H</duration>
  </period>
  <period>
    <start>2011-05-17T15:00:00Z</start>
    <end>2011-05-17T16:00:00Z</end>
  </period>
</freebusy>"#;

/// A property element with one incomplete period and one without a start.
pub const XCAL_INCOMPLETE: &str = r#"<freebusy xmlns="urn:ietf:params:xml:ns:icalendar-2.0">
  <period><start>2011-05-17T12:00:00Z</start></period>
  <period><end>2011-05-17T16:00:00Z</end></period>
</freebusy>"#;

/// RFC 7265 style property array.
pub const JCAL_TWO_PERIODS: &str = r#"["freebusy", {"fbtype": "BUSY-TENTATIVE"}, "period",
  "2011-05-17T12:00:00Z/PT1H",
  "2011-05-17T15:00:00Z/2011-05-17T16:00:00Z"]"#;
