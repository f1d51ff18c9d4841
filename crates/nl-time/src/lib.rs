//! # nl-time
//!
//! Gregorian date and weekday types, and the pattern-based date
//! formatter used to print and read calendar values.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Pattern formatting and parsing.
pub mod format;

/// Day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use format::{DateFormat, FormatOptions, DATE_FORMAT};
pub use weekday::Weekday;
