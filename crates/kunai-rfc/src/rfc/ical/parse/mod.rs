//! iCalendar value and content line parsing.
//!
//! - [`values`] - DATE-TIME and DURATION codecs (compact and extended profiles)
//! - [`lexer`] - Content line tokenization for the text profile
//! - [`xcal`] - Reading a FREEBUSY property element from xCal

mod error;
pub mod lexer;
pub mod values;
pub mod xcal;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, parse_content_line, unfold};
pub use values::{DateTimeForm, DateTimeValue, parse_datetime, parse_datetime_value, parse_duration};
pub use xcal::{XcalProperty, read_property};
