use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::build::{write_datetime, write_duration};
use crate::rfc::ical::core::{DiagnosticKind, Diagnostics, Period, PeriodEnd, PeriodError};
use crate::rfc::ical::parse::{parse_datetime, parse_duration};

use kunai_core::constants::PERIOD_VALUE_TYPE_LOWER;

use super::PeriodFormat;
use super::period_list::resolve_zone;

/// The child text of one xCal `<period>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlPeriod {
    pub start: Option<String>,
    pub end: Option<String>,
    pub duration: Option<String>,
}

/// xCal profile: extended date-times, one element per period.
///
/// Open periods are written with only a `start` child and are dropped when
/// read back, since xCal requires `end` or `duration`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFormat;

impl PeriodFormat for XmlFormat {
    type Wire = Vec<XmlPeriod>;

    fn write(periods: &[Period]) -> Vec<XmlPeriod> {
        periods
            .iter()
            .map(|period| {
                let mut element = XmlPeriod {
                    start: Some(write_datetime(&period.start(), true)),
                    ..XmlPeriod::default()
                };
                match period.end() {
                    PeriodEnd::Explicit(end) => element.end = Some(write_datetime(end, true)),
                    PeriodEnd::Duration(duration) => {
                        element.duration = Some(write_duration(duration));
                    }
                    PeriodEnd::Open => {}
                }
                element
            })
            .collect()
    }

    #[tracing::instrument(skip(wire, diagnostics), fields(elements = wire.len()))]
    fn parse(
        wire: &Vec<XmlPeriod>,
        tzid: Option<&str>,
        diagnostics: &mut Diagnostics,
    ) -> RfcResult<Vec<Period>> {
        if wire.is_empty() {
            return Err(RfcError::MissingXmlElements {
                element: PERIOD_VALUE_TYPE_LOWER,
            });
        }

        let zone = resolve_zone(tzid, diagnostics);
        let mut periods = Vec::with_capacity(wire.len());

        for element in wire {
            let Some(start_text) = element.start.as_deref() else {
                diagnostics.push(DiagnosticKind::MissingPeriodStart, None);
                continue;
            };
            let Ok(start) = parse_datetime(start_text, zone) else {
                diagnostics.push(DiagnosticKind::InvalidStartDate, Some(start_text));
                continue;
            };

            // `end` wins when both children are present.
            let built = if let Some(end_text) = element.end.as_deref() {
                let Ok(end) = parse_datetime(end_text, zone) else {
                    diagnostics.push(DiagnosticKind::InvalidEndDate, Some(end_text));
                    continue;
                };
                Period::explicit(start, end)
            } else if let Some(duration_text) = element.duration.as_deref() {
                let Ok(duration) = parse_duration(duration_text) else {
                    diagnostics.push(DiagnosticKind::InvalidDuration, Some(duration_text));
                    continue;
                };
                Period::with_duration(start, duration)
            } else {
                diagnostics.push(DiagnosticKind::MalformedPeriod, Some(start_text));
                continue;
            };

            match built {
                Ok(period) => periods.push(period),
                Err(PeriodError::StartOutOfRange(_)) => {
                    diagnostics.push(DiagnosticKind::InvalidStartDate, Some(start_text));
                }
                Err(PeriodError::EndOutOfRange(_)) => {
                    diagnostics.push(DiagnosticKind::InvalidEndDate, element.end.as_deref());
                }
            }
        }

        tracing::debug!(count = periods.len(), "Parsed xCal period list");
        Ok(periods)
    }
}
