use serde_json::Value;

use crate::error::RfcResult;
use crate::rfc::ical::core::{DiagnosticKind, Diagnostics, Period};

use super::PeriodFormat;
use super::period_list::{parse_token, render_one, resolve_zone};

/// jCal profile: extended date-times, one string per period.
///
/// An empty list is written as `[""]` so the property keeps a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl PeriodFormat for JsonFormat {
    type Wire = Vec<Value>;

    fn write(periods: &[Period]) -> Vec<Value> {
        if periods.is_empty() {
            return vec![Value::String(String::new())];
        }

        periods
            .iter()
            .map(|p| Value::String(render_one(p, true)))
            .collect()
    }

    #[tracing::instrument(skip(wire, diagnostics), fields(values = wire.len()))]
    fn parse(
        wire: &Vec<Value>,
        tzid: Option<&str>,
        diagnostics: &mut Diagnostics,
    ) -> RfcResult<Vec<Period>> {
        let zone = resolve_zone(tzid, diagnostics);
        let mut periods = Vec::with_capacity(wire.len());

        for value in wire {
            match value.as_str() {
                Some(token) => periods.extend(parse_token(token, zone, diagnostics)),
                None => {
                    let text = value.to_string();
                    diagnostics.push(DiagnosticKind::MalformedPeriod, Some(text.as_str()));
                }
            }
        }

        tracing::debug!(count = periods.len(), "Parsed jCal period list");
        Ok(periods)
    }
}
