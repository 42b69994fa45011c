//! Whole-property FREEBUSY reading and writing.

use serde_json::{Map, Value};

use std::path::Path;

use kunai_core::config::{CodecConfig, load_config, load_config_from};
use kunai_core::constants::{
    FREEBUSY_PROPERTY, FREEBUSY_PROPERTY_LOWER, PERIOD_VALUE_TYPE_LOWER, TZID_PARAM,
};

use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::build::{fold_line, write_content_line, xcal::write_property};
use crate::rfc::ical::core::{Diagnostics, FreeBusy, Parameter, find_param_value};
use crate::rfc::ical::parse::{parse_content_line, read_property, unfold};

use super::{JsonFormat, PeriodFormat, TextFormat, XmlFormat};

/// A parsed value together with the notices recorded while parsing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    pub diagnostics: Diagnostics,
}

/// Reads and writes FREEBUSY properties in all three profiles.
#[derive(Debug, Clone)]
pub struct FreeBusyCodec {
    default_tzid: Option<String>,
    fold_lines: bool,
}

impl Default for FreeBusyCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl FreeBusyCodec {
    /// Creates a codec that folds written lines and reads floating times in
    /// system-local time.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&CodecConfig::default())
    }

    #[must_use]
    pub fn from_config(config: &CodecConfig) -> Self {
        Self {
            default_tzid: config.default_tzid.clone(),
            fold_lines: config.fold_lines,
        }
    }

    /// ## Summary
    /// Builds a codec from a `.env` file, `KUNAI_*` environment variables and
    /// `kunai.toml`.
    ///
    /// ## Errors
    /// Returns an error if the settings cannot be loaded or are invalid.
    pub fn load() -> RfcResult<Self> {
        let settings = load_config()?;
        Ok(Self::from_config(&settings.codec))
    }

    /// ## Summary
    /// Same as [`FreeBusyCodec::load`] with an explicit `.env` file.
    ///
    /// ## Errors
    /// Returns an error if the settings cannot be loaded or are invalid.
    pub fn load_from(env_file: &Path) -> RfcResult<Self> {
        let settings = load_config_from(env_file)?;
        Ok(Self::from_config(&settings.codec))
    }

    /// Sets the zone used for floating times when a property has no TZID.
    #[must_use]
    pub fn with_default_tzid(mut self, tzid: impl Into<String>) -> Self {
        self.default_tzid = Some(tzid.into());
        self
    }

    fn tzid_for<'a>(&'a self, property_tzid: Option<&'a str>) -> Option<&'a str> {
        property_tzid.or(self.default_tzid.as_deref())
    }

    /// ## Summary
    /// Writes a `FREEBUSY` content line, folded unless disabled.
    /// The line has no trailing line break.
    #[must_use]
    pub fn write_text(&self, property: &FreeBusy) -> String {
        let value = TextFormat::write(&property.periods);
        let line = write_content_line(FREEBUSY_PROPERTY, &property.params, &value);
        if self.fold_lines {
            fold_line(&line)
        } else {
            line
        }
    }

    /// ## Summary
    /// Parses one (possibly folded) `FREEBUSY` content line.
    ///
    /// ## Errors
    /// Returns an error if the line cannot be lexed, holds more than one
    /// content line, or names a different property.
    #[tracing::instrument(skip(self, input), fields(input_len = input.len()))]
    pub fn parse_text(&self, input: &str) -> RfcResult<Parsed<FreeBusy>> {
        let unfolded = unfold(input);
        if unfolded.contains('\n') {
            return Err(RfcError::ParseError(
                "expected a single content line".to_string(),
            ));
        }

        let line = parse_content_line(&unfolded)?;
        expect_freebusy(&line.name)?;

        let mut diagnostics = Diagnostics::new();
        let tzid = self.tzid_for(line.get_param_value(TZID_PARAM));
        let periods = TextFormat::parse(&line.raw_value, tzid, &mut diagnostics)?;

        tracing::debug!(
            periods = periods.len(),
            diagnostics = diagnostics.len(),
            "Parsed FREEBUSY content line"
        );

        Ok(Parsed {
            value: FreeBusy {
                params: line.params,
                periods,
            },
            diagnostics,
        })
    }

    /// ## Summary
    /// Writes an xCal `<freebusy>` element.
    ///
    /// ## Errors
    /// Returns an error if XML writing fails.
    #[expect(clippy::unused_self)]
    pub fn write_xml(&self, property: &FreeBusy) -> RfcResult<String> {
        let periods = XmlFormat::write(&property.periods);
        Ok(write_property(
            FREEBUSY_PROPERTY_LOWER,
            &property.params,
            &periods,
        )?)
    }

    /// ## Summary
    /// Parses an xCal `<freebusy>` element.
    ///
    /// ## Errors
    /// Returns an error if the XML is malformed, the element is not
    /// `freebusy`, or it has no `period` child.
    #[tracing::instrument(skip(self, xml), fields(xml_len = xml.len()))]
    pub fn parse_xml(&self, xml: &str) -> RfcResult<Parsed<FreeBusy>> {
        let element = read_property(xml.as_bytes())?;
        expect_freebusy(&element.name)?;

        let mut diagnostics = Diagnostics::new();
        let tzid = self.tzid_for(find_param_value(&element.params, TZID_PARAM));
        let periods = XmlFormat::parse(&element.periods, tzid, &mut diagnostics)?;

        tracing::debug!(
            periods = periods.len(),
            diagnostics = diagnostics.len(),
            "Parsed FREEBUSY xCal element"
        );

        Ok(Parsed {
            value: FreeBusy {
                params: element.params,
                periods,
            },
            diagnostics,
        })
    }

    /// ## Summary
    /// Writes a jCal property array: `["freebusy", {params}, "period", ...]`.
    #[must_use]
    #[expect(clippy::unused_self)]
    pub fn write_json(&self, property: &FreeBusy) -> Value {
        let params: Map<String, Value> = property
            .params
            .iter()
            .map(|param| {
                let value = match param.values.as_slice() {
                    [single] => Value::String(single.clone()),
                    values => Value::Array(values.iter().cloned().map(Value::String).collect()),
                };
                (param.name.to_ascii_lowercase(), value)
            })
            .collect();

        let mut array = vec![
            Value::String(FREEBUSY_PROPERTY_LOWER.to_string()),
            Value::Object(params),
            Value::String(PERIOD_VALUE_TYPE_LOWER.to_string()),
        ];
        array.extend(JsonFormat::write(&property.periods));
        Value::Array(array)
    }

    /// ## Summary
    /// Parses a jCal property array.
    ///
    /// ## Errors
    /// Returns an error if the value is not a jCal property array or names a
    /// different property.
    #[tracing::instrument(skip(self, json))]
    pub fn parse_json(&self, json: &Value) -> RfcResult<Parsed<FreeBusy>> {
        let Some([name, params, value_type, values @ ..]) = json.as_array().map(Vec::as_slice)
        else {
            return Err(RfcError::JsonError(
                "expected [name, params, type, value...]".to_string(),
            ));
        };

        let name = name
            .as_str()
            .ok_or_else(|| RfcError::JsonError("property name is not a string".to_string()))?;
        expect_freebusy(name)?;

        let params = parse_json_params(params)?;
        let value_type = value_type
            .as_str()
            .ok_or_else(|| RfcError::JsonError("value type is not a string".to_string()))?;
        if !value_type.eq_ignore_ascii_case(PERIOD_VALUE_TYPE_LOWER) {
            tracing::debug!(value_type, "Unexpected FREEBUSY value type");
        }

        let mut diagnostics = Diagnostics::new();
        let tzid = self.tzid_for(find_param_value(&params, TZID_PARAM));
        let periods = JsonFormat::parse(&values.to_vec(), tzid, &mut diagnostics)?;

        tracing::debug!(
            periods = periods.len(),
            diagnostics = diagnostics.len(),
            "Parsed FREEBUSY jCal property"
        );

        Ok(Parsed {
            value: FreeBusy { params, periods },
            diagnostics,
        })
    }

    /// ## Summary
    /// Parses a jCal property array from JSON text.
    ///
    /// ## Errors
    /// Returns an error if the text is not JSON or `parse_json` fails.
    pub fn parse_json_str(&self, json: &str) -> RfcResult<Parsed<FreeBusy>> {
        let value: Value = serde_json::from_str(json)?;
        self.parse_json(&value)
    }
}

fn expect_freebusy(name: &str) -> RfcResult<()> {
    if name.eq_ignore_ascii_case(FREEBUSY_PROPERTY) {
        Ok(())
    } else {
        Err(RfcError::ParseError(format!(
            "expected {FREEBUSY_PROPERTY} property, found {name}"
        )))
    }
}

/// Reads a jCal parameter object. Values are strings or arrays of strings.
fn parse_json_params(params: &Value) -> RfcResult<Vec<Parameter>> {
    let object = params
        .as_object()
        .ok_or_else(|| RfcError::JsonError("parameters are not an object".to_string()))?;

    object
        .iter()
        .map(|(name, value)| {
            let values = match value {
                Value::String(s) => vec![s.clone()],
                Value::Array(items) => items
                    .iter()
                    .map(|item| {
                        item.as_str().map(str::to_owned).ok_or_else(|| {
                            RfcError::JsonError(format!("parameter {name} has a non-string value"))
                        })
                    })
                    .collect::<RfcResult<Vec<_>>>()?,
                _ => {
                    return Err(RfcError::JsonError(format!(
                        "parameter {name} has a non-string value"
                    )));
                }
            };
            Ok(Parameter::with_values(name.as_str(), values))
        })
        .collect()
}
