use crate::error::RfcResult;
use crate::rfc::ical::core::{Diagnostics, Period};

use super::PeriodFormat;
use super::period_list::{parse_list, render_one};

/// Plain-text profile: compact date-times, tokens joined with `,`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormat;

impl PeriodFormat for TextFormat {
    type Wire = String;

    fn write(periods: &[Period]) -> String {
        periods
            .iter()
            .map(|p| render_one(p, false))
            .collect::<Vec<_>>()
            .join(",")
    }

    #[tracing::instrument(skip(wire, diagnostics), fields(value_len = wire.len()))]
    fn parse(
        wire: &String,
        tzid: Option<&str>,
        diagnostics: &mut Diagnostics,
    ) -> RfcResult<Vec<Period>> {
        if wire.is_empty() {
            return Ok(Vec::new());
        }

        let periods = parse_list(wire.split(','), tzid, diagnostics);
        tracing::debug!(count = periods.len(), "Parsed text period list");
        Ok(periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn write_empty_list() {
        assert_eq!(TextFormat::write(&[]), "");
    }

    #[test_log::test]
    fn parse_empty_value() {
        let mut diagnostics = Diagnostics::new();
        let periods = TextFormat::parse(&String::new(), None, &mut diagnostics).unwrap();
        assert!(periods.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test_log::test]
    fn parse_skips_bad_token_only() {
        let mut diagnostics = Diagnostics::new();
        let periods = TextFormat::parse(
            &"20150101T000000Z/PT1H,,20150102T000000Z/".to_string(),
            None,
            &mut diagnostics,
        )
        .unwrap();

        assert_eq!(periods.len(), 2);
        assert_eq!(
            periods[1],
            Period::open(Utc.with_ymd_and_hms(2015, 1, 2, 0, 0, 0).unwrap()).unwrap()
        );
        assert_eq!(diagnostics.codes(), vec![13]);
    }
}
