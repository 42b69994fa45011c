//! Period-list marshalling.
//!
//! [`period_list`] owns the period grammar. Each profile adapter only moves
//! tokens in and out of its wire shape:
//!
//! - [`TextFormat`] - comma-separated tokens on a content line
//! - [`XmlFormat`] - one `<period>` element per period (xCal)
//! - [`JsonFormat`] - one string per period (jCal)
//!
//! [`FreeBusyCodec`] handles whole FREEBUSY properties on top of the adapters.

mod codec;
mod json;
pub mod period_list;
mod text;
mod xml;

pub use codec::{FreeBusyCodec, Parsed};
pub use json::JsonFormat;
pub use period_list::{parse_list, parse_one, render_one};
pub use text::TextFormat;
pub use xml::{XmlFormat, XmlPeriod};

use crate::error::RfcResult;
use crate::rfc::ical::core::{Diagnostics, Period};

/// Reads and writes a period list in one wire shape.
pub trait PeriodFormat {
    /// The wire representation of a whole period list.
    type Wire;

    /// Writes a period list. Writing never fails.
    fn write(periods: &[Period]) -> Self::Wire;

    /// Reads a period list.
    ///
    /// Floating date-times are read in `tzid`, or system-local time when
    /// there is none. Dropped periods are recorded in `diagnostics`.
    ///
    /// ## Errors
    /// Returns an error only when the whole value is unusable.
    fn parse(
        wire: &Self::Wire,
        tzid: Option<&str>,
        diagnostics: &mut Diagnostics,
    ) -> RfcResult<Vec<Period>>;
}
