//! xCal (RFC 6321) property element reading.

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

use kunai_core::constants::PERIOD_VALUE_TYPE_LOWER;

use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::Parameter;
use crate::rfc::ical::marshal::XmlPeriod;

/// The parts of an xCal property element the FREEBUSY codec needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XcalProperty {
    /// Local name of the property element (e.g. `freebusy`).
    pub name: String,
    pub params: Vec<Parameter>,
    /// One entry per `<period>` child, in document order.
    pub periods: Vec<XmlPeriod>,
}

/// Reads a property element.
///
/// Namespace prefixes are ignored. Only the first `start`, `end` and
/// `duration` child of each period is kept; unknown children are skipped.
///
/// ## Errors
/// Returns an error if the XML is malformed or contains no element at all.
#[tracing::instrument(skip(xml), fields(xml_len = xml.len()))]
pub fn read_property(xml: &[u8]) -> RfcResult<XcalProperty> {
    // Text arrives in pieces around entity references, so it is trimmed
    // once per element rather than per event.
    let mut reader = Reader::from_reader(xml);

    let mut buf = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut property: Option<XcalProperty> = None;
    let mut text_buf = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let local_name = local_name(e)?;
                open_element(&local_name, &stack, &mut property);
                stack.push(local_name);
                text_buf.clear();
            }
            Ok(Event::Empty(ref e)) => {
                let local_name = local_name(e)?;
                open_element(&local_name, &stack, &mut property);
                stack.push(local_name);
                close_element(&stack, "", &mut property);
                stack.pop();
            }
            Ok(Event::Text(ref e)) => {
                let decoded = reader.decoder().decode(e.as_ref())?;
                text_buf.push_str(&decoded);
            }
            Ok(Event::CData(ref e)) => {
                let decoded = reader.decoder().decode(&e[..])?;
                text_buf.push_str(&decoded);
            }
            Ok(Event::GeneralRef(ref e)) => {
                if let Some(ch) = e.resolve_char_ref()? {
                    text_buf.push(ch);
                } else {
                    let entity = e.decode()?;
                    let resolved = resolve_predefined_entity(&entity).ok_or_else(|| {
                        RfcError::XmlError(format!("unknown entity reference: &{entity};"))
                    })?;
                    text_buf.push_str(resolved);
                }
            }
            Ok(Event::End(_)) => {
                close_element(&stack, text_buf.trim(), &mut property);
                stack.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(RfcError::XmlError(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    let property =
        property.ok_or_else(|| RfcError::XmlError("no property element found".to_string()))?;
    tracing::debug!(
        name = %property.name,
        periods = property.periods.len(),
        "Read xCal property element"
    );
    Ok(property)
}

fn local_name(e: &BytesStart<'_>) -> RfcResult<String> {
    let local_name_bytes = e.local_name();
    Ok(std::str::from_utf8(local_name_bytes.as_ref())?.to_owned())
}

/// Handles an element start. `parents` does not yet include the element.
fn open_element(local_name: &str, parents: &[String], property: &mut Option<XcalProperty>) {
    match (parents.len(), property.as_mut()) {
        (0, None) => {
            *property = Some(XcalProperty {
                name: local_name.to_string(),
                ..XcalProperty::default()
            });
        }
        (1, Some(prop)) if local_name == PERIOD_VALUE_TYPE_LOWER => {
            prop.periods.push(XmlPeriod::default());
        }
        (2, Some(prop)) if parents[1] == "parameters" => {
            prop.params
                .push(Parameter::with_values(local_name, Vec::new()));
        }
        _ => {}
    }
}

/// Handles an element end. `path` includes the element being closed.
fn close_element(path: &[String], text: &str, property: &mut Option<XcalProperty>) {
    let Some(prop) = property.as_mut() else {
        return;
    };

    match path.len() {
        3 if path[1] == PERIOD_VALUE_TYPE_LOWER => {
            let Some(period) = prop.periods.last_mut() else {
                return;
            };
            let slot = match path[2].as_str() {
                "start" => &mut period.start,
                "end" => &mut period.end,
                "duration" => &mut period.duration,
                _ => return,
            };
            if slot.is_none() {
                *slot = Some(text.to_string());
            }
        }
        4 if path[1] == "parameters" => {
            if let Some(param) = prop.params.last_mut() {
                param.values.push(text.to_string());
            }
        }
        _ => {}
    }
}
