//! Shared building blocks for the `kunai` iCalendar codec crates.

pub mod config;
pub mod constants;
pub mod error;
