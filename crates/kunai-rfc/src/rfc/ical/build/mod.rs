//! iCalendar serialization.
//!
//! - Values: DATE-TIME and DURATION writers
//! - Escape: Parameter value quoting for content lines
//! - Fold: Content line folding at 75 octets
//! - Xcal: FREEBUSY property element output

mod escape;
mod fold;
mod values;
pub mod xcal;

pub use escape::escape_param_value;
pub use fold::fold_line;
pub use values::{write_content_line, write_datetime, write_duration};
