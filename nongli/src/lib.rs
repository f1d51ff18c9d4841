//! # nongli
//!
//! Gregorian to Chinese lunisolar (农历) calendar conversion for
//! 1900-01-31 through 2100-12-31, with the 24 solar terms, traditional and
//! public festivals, Chinese day names and a month-page model for
//! calendar widgets.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `nl-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! nongli = "0.1"
//! ```
//!
//! ```rust
//! use nongli::lunar::{day_label, to_lunar};
//! use nongli::time::{Date, DateFormat};
//!
//! let date = DateFormat::new("yyyy-M-d").parse("1981-9-17").unwrap();
//! let lunar = to_lunar(date).unwrap();
//! assert_eq!((lunar.year, lunar.month_number(), lunar.day), (1981, 8, 20));
//! assert_eq!(day_label(date).unwrap(), "二十");
//! assert_eq!(DateFormat::new("yyyy-MM-dd WW").format(date), "1981-09-17 周四");
//! ```
//!
//! ## Month pages
//!
//! ```rust
//! use nongli::lunar::{MonthCache, MonthViewOptions};
//!
//! let page = MonthCache::global()
//!     .get_or_build(2024, 2, &MonthViewOptions::default())
//!     .unwrap();
//! let labels: Vec<&str> = page.current_days().map(|c| c.label.as_str()).collect();
//! assert_eq!(labels[9], "春节");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and process-wide settings.
pub use nl_core as core;

/// Gregorian dates, weekdays and pattern formatting.
pub use nl_time as time;

/// Lunar conversion, solar terms, festivals and month pages.
pub use nl_lunar as lunar;

pub use nl_core::{Error, Result, Settings};
pub use nl_lunar::{day_label, festival_label, to_lunar, LunarDate};
pub use nl_time::{Date, DateFormat};
