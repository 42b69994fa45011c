//! xCal (RFC 6321) property element serialization.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use kunai_core::constants::{PERIOD_VALUE_TYPE_LOWER, XCAL_NAMESPACE};

use crate::rfc::ical::core::Parameter;
use crate::rfc::ical::marshal::XmlPeriod;

/// Serializes a property element with its parameters and period children.
///
/// ## Errors
/// Returns an error if XML writing fails or if the generated XML is not valid UTF-8
/// (which should never happen with well-formed input).
pub fn write_property(
    name: &str,
    params: &[Parameter],
    periods: &[XmlPeriod],
) -> Result<String, quick_xml::Error> {
    let mut writer = Writer::new(Vec::new());

    let mut elem = BytesStart::new(name);
    elem.push_attribute(("xmlns", XCAL_NAMESPACE));
    writer.write_event(Event::Start(elem))?;

    if !params.is_empty() {
        write_parameters(&mut writer, params)?;
    }

    for period in periods {
        writer.write_event(Event::Start(BytesStart::new(PERIOD_VALUE_TYPE_LOWER)))?;
        if let Some(ref start) = period.start {
            write_text_element(&mut writer, "start", start)?;
        }
        if let Some(ref end) = period.end {
            write_text_element(&mut writer, "end", end)?;
        }
        if let Some(ref duration) = period.duration {
            write_text_element(&mut writer, "duration", duration)?;
        }
        writer.write_event(Event::End(BytesEnd::new(PERIOD_VALUE_TYPE_LOWER)))?;
    }

    writer.write_event(Event::End(BytesEnd::new(name)))?;

    let result = writer.into_inner();
    String::from_utf8(result).map_err(|e| {
        tracing::error!("Generated invalid UTF-8 in xCal output: {}", e);
        quick_xml::Error::Io(std::sync::Arc::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Invalid UTF-8 in XML output",
        )))
    })
}

/// Writes `<parameters>` with one `<name><text>value</text></name>` per parameter.
fn write_parameters<W: std::io::Write>(
    writer: &mut Writer<W>,
    params: &[Parameter],
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new("parameters")))?;
    for param in params {
        let elem_name = param.name.to_ascii_lowercase();
        writer.write_event(Event::Start(BytesStart::new(elem_name.as_str())))?;
        for value in &param.values {
            write_text_element(writer, "text", value)?;
        }
        writer.write_event(Event::End(BytesEnd::new(elem_name.as_str())))?;
    }
    writer.write_event(Event::End(BytesEnd::new("parameters")))?;
    Ok(())
}

/// Writes a simple text element.
fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_open_period_with_start_only() {
        let periods = vec![XmlPeriod {
            start: Some("2015-01-01T00:00:00Z".to_string()),
            end: None,
            duration: None,
        }];

        let xml = write_property("freebusy", &[], &periods).unwrap();
        assert_eq!(
            xml,
            "<freebusy xmlns=\"urn:ietf:params:xml:ns:icalendar-2.0\">\
             <period><start>2015-01-01T00:00:00Z</start></period>\
             </freebusy>"
        );
    }

    #[test]
    fn writes_parameters_block() {
        let params = vec![Parameter::new("FBTYPE", "BUSY-TENTATIVE")];
        let xml = write_property("freebusy", &params, &[]).unwrap();
        assert!(xml.contains(
            "<parameters><fbtype><text>BUSY-TENTATIVE</text></fbtype></parameters>"
        ));
    }

    #[test]
    fn escapes_text_content() {
        let params = vec![Parameter::new("X-NOTE", "a<b&c")];
        let xml = write_property("freebusy", &params, &[]).unwrap();
        assert!(xml.contains("<text>a&lt;b&amp;c</text>"));
    }
}
