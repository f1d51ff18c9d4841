//! # nl-lunar
//!
//! The Chinese lunisolar calendar for 1900–2100: the packed year table,
//! Gregorian ↔ lunar conversion, the 24 solar terms, festival lookup, the
//! Chinese names of lunar days and months, and the month-page model that
//! puts all of these on a calendar grid.
//!
//! ```
//! use nl_lunar::{day_label, to_lunar};
//! use nl_time::Date;
//!
//! let date = Date::from_ymd(2024, 2, 10).unwrap();
//! let lunar = to_lunar(date).unwrap();
//! assert_eq!((lunar.year, lunar.month, lunar.day), (2024, 0, 1));
//! assert_eq!(day_label(date).unwrap(), "春节");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Packed year table and its decoders.
pub mod table;

/// Gregorian ↔ lunar conversion.
pub mod converter;

/// Solar terms.
pub mod solar_term;

/// Festival rules and the resolver chain.
pub mod festival;

/// Chinese day and month names.
pub mod names;

/// Cell labels.
pub mod label;

/// Month pages and their cache.
pub mod month_view;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use converter::{from_lunar, is_supported, lunar_new_year, supported_range, to_lunar, LunarDate};
pub use festival::{Festival, FestivalKind, FestivalResolver, FestivalRule};
pub use label::{day_label, festival_label};
pub use month_view::{CellKind, DateRange, DayCell, MonthCache, MonthView, MonthViewOptions};
pub use names::{lunar_day_name, lunar_month_name};
pub use solar_term::{day_of_term, term_date, term_on, SolarTerm};
pub use table::LunarYearInfo;
