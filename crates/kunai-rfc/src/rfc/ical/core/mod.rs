//! FREEBUSY core models (RFC 5545 §3.3.6, §3.3.9, §3.8.2.6).
//!
//! These types carry no wire syntax; the format adapters in
//! [`crate::rfc::ical::marshal`] translate them to and from each profile.

mod diagnostic;
mod duration;
mod freebusy;
mod parameter;
mod period;

pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
pub use duration::Duration;
pub use freebusy::{FreeBusy, FreeBusyType};
pub use parameter::{Parameter, find_param_value};
pub use period::{Instant, Period, PeriodEnd, PeriodError};
