//! FREEBUSY property (RFC 5545 §3.8.2.6).

use std::fmt;

use kunai_core::constants::{FBTYPE_PARAM, TZID_PARAM};

use super::{Parameter, Period};

/// Free/busy time type (RFC 5545 §3.2.9).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FreeBusyType {
    Free,
    Busy,
    BusyUnavailable,
    BusyTentative,
    /// An `x-name` or IANA-registered value this codec does not know.
    Other(String),
}

impl FreeBusyType {
    /// Parses an FBTYPE value (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "FREE" => Self::Free,
            "BUSY" => Self::Busy,
            "BUSY-UNAVAILABLE" => Self::BusyUnavailable,
            "BUSY-TENTATIVE" => Self::BusyTentative,
            _ => Self::Other(s.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Free => "FREE",
            Self::Busy => "BUSY",
            Self::BusyUnavailable => "BUSY-UNAVAILABLE",
            Self::BusyTentative => "BUSY-TENTATIVE",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for FreeBusyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A FREEBUSY property occurrence: its parameters and its period list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreeBusy {
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Periods in document order. May be empty or contain duplicates.
    pub periods: Vec<Period>,
}

impl FreeBusy {
    #[must_use]
    pub fn new(periods: Vec<Period>) -> Self {
        Self {
            params: Vec::new(),
            periods,
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params
            .iter()
            .find(|p| p.is_named(name))
    }

    /// Replaces (or adds) a single-valued parameter.
    pub fn set_param(&mut self, name: &str, value: impl Into<String>) {
        let param = Parameter::new(name, value);
        if let Some(existing) = self
            .params
            .iter_mut()
            .find(|p| p.is_named(name))
        {
            *existing = param;
        } else {
            self.params.push(param);
        }
    }

    /// Returns the FBTYPE parameter. RFC 5545 defaults an absent FBTYPE to BUSY.
    #[must_use]
    pub fn fb_type(&self) -> FreeBusyType {
        self.get_param(FBTYPE_PARAM)
            .and_then(Parameter::value)
            .map_or(FreeBusyType::Busy, FreeBusyType::parse)
    }

    pub fn set_fb_type(&mut self, fb_type: &FreeBusyType) {
        self.set_param(FBTYPE_PARAM, fb_type.as_str());
    }

    /// Returns the TZID parameter if present.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.get_param(TZID_PARAM).and_then(Parameter::value)
    }
}
