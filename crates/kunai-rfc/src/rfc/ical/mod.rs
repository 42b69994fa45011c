//! iCalendar FREEBUSY codec (RFC 5545, RFC 6321, RFC 7265).
//!
//! ## Submodules
//!
//! - [`core`] - Value types (`Period`, `Duration`, `FreeBusy`, `Diagnostics`)
//! - [`parse`] - Date-time, duration and content line parsers
//! - [`build`] - Date-time and duration writers, content line and xCal output
//! - [`expand`] - Timezone resolution for floating date-times
//! - [`marshal`] - The period-list marshaller and per-format adapters

pub mod build;
pub mod core;
pub mod expand;
pub mod marshal;
pub mod parse;

#[cfg(test)]
mod tests;

pub use marshal::{FreeBusyCodec, Parsed};
