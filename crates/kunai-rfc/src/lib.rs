//! Period-list value codec for the iCalendar `FREEBUSY` property.
//!
//! A FREEBUSY value is converted between its in-memory form and the three
//! encodings of RFC 5545: the plain-text content line, xCal (RFC 6321) and
//! jCal (RFC 7265).
//!
//! ```rust
//! use kunai_rfc::rfc::ical::core::Diagnostics;
//! use kunai_rfc::rfc::ical::marshal::{PeriodFormat, TextFormat};
//!
//! let mut diagnostics = Diagnostics::new();
//! let periods = TextFormat::parse(
//!     &"19970308T160000Z/PT8H30M,19970308T230000Z/19970309T000000Z".to_string(),
//!     None,
//!     &mut diagnostics,
//! )
//! .unwrap();
//!
//! assert_eq!(periods.len(), 2);
//! assert!(diagnostics.is_empty());
//! assert_eq!(
//!     TextFormat::write(&periods),
//!     "19970308T160000Z/PT8H30M,19970308T230000Z/19970309T000000Z"
//! );
//! ```

pub mod error;
pub mod rfc;

pub use rfc::ical::{FreeBusyCodec, Parsed};
