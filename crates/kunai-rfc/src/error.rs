use thiserror::Error;

/// Codec errors that abort a whole property.
///
/// Problems confined to a single period are never reported here; they are
/// recorded as diagnostics and the period is dropped.
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Missing required XML element: <{element}>")]
    MissingXmlElements { element: &'static str },

    #[error("XML error: {0}")]
    XmlError(String),

    #[error("JSON error: {0}")]
    JsonError(String),

    #[error(transparent)]
    CoreError(#[from] kunai_core::error::CoreError),
}

impl From<crate::rfc::ical::parse::ParseError> for RfcError {
    fn from(err: crate::rfc::ical::parse::ParseError) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<quick_xml::Error> for RfcError {
    fn from(err: quick_xml::Error) -> Self {
        Self::XmlError(err.to_string())
    }
}

impl From<quick_xml::encoding::EncodingError> for RfcError {
    fn from(err: quick_xml::encoding::EncodingError) -> Self {
        Self::XmlError(err.to_string())
    }
}

impl From<std::str::Utf8Error> for RfcError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::XmlError(err.to_string())
    }
}

impl From<serde_json::Error> for RfcError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
