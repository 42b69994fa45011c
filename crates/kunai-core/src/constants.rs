/// Property name as it appears on a content line.
pub const FREEBUSY_PROPERTY: &str = "FREEBUSY";
/// Property name as used by the xCal and jCal profiles.
pub const FREEBUSY_PROPERTY_LOWER: &str =
    const_str::convert_ascii_case!(lower, FREEBUSY_PROPERTY);

/// Value type name for period values.
pub const PERIOD_VALUE_TYPE: &str = "PERIOD";
pub const PERIOD_VALUE_TYPE_LOWER: &str =
    const_str::convert_ascii_case!(lower, PERIOD_VALUE_TYPE);

/// xCal namespace (RFC 6321 §3).
pub const XCAL_NAMESPACE: &str = "urn:ietf:params:xml:ns:icalendar-2.0";

/// Parameter names used by FREEBUSY.
pub const TZID_PARAM: &str = "TZID";
pub const FBTYPE_PARAM: &str = "FBTYPE";

/// Maximum content line length in octets before folding (RFC 5545 §3.1).
pub const MAX_LINE_OCTETS: usize = 75;

/// Optional codec configuration file read from the working directory.
pub const CONFIG_FILE_NAME: &str = "kunai.toml";
