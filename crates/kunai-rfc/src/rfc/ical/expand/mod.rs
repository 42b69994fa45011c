//! Resolution of floating and zoned date-times to absolute instants.

pub mod timezone;

pub use timezone::{LocalZone, ZoneError, local_to_utc, normalize_tzid, resolve_tzid};
