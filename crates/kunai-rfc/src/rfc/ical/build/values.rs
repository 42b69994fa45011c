//! Value writers.

use crate::rfc::ical::core::{Duration, Instant, Parameter};

use super::escape::escape_param_value;

/// Writes an instant in UTC.
///
/// `extended = false` yields the compact profile (`20150101T000000Z`),
/// `extended = true` the extended profile (`2015-01-01T00:00:00Z`).
#[must_use]
pub fn write_datetime(instant: &Instant, extended: bool) -> String {
    if extended {
        instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        instant.format("%Y%m%dT%H%M%SZ").to_string()
    }
}

/// Writes a duration in canonical form.
#[must_use]
pub fn write_duration(duration: &Duration) -> String {
    duration.to_string()
}

/// Writes an unfolded content line: `NAME *(";" param) ":" value`.
#[must_use]
pub fn write_content_line(name: &str, params: &[Parameter], value: &str) -> String {
    let mut line = String::with_capacity(name.len() + value.len() + 1);
    line.push_str(name);

    for param in params {
        line.push(';');
        line.push_str(&param.name);
        line.push('=');
        let values: Vec<String> = param
            .values
            .iter()
            .map(|v| escape_param_value(v))
            .collect();
        line.push_str(&values.join(","));
    }

    line.push(':');
    line.push_str(value);
    line
}
