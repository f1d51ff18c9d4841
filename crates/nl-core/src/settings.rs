//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**: the date treated as "today"
//! whenever a caller asks for the current date, most notably when a date
//! string is empty or cannot be parsed.  It is a process-wide singleton
//! accessed via a `std::sync::OnceLock`.
//!
//! When no evaluation date is set, "today" is the local calendar date
//! reported by `chrono`.

use std::sync::{Mutex, OnceLock};

use chrono::Datelike;

/// Process-wide settings used by the nongli-rs library.
pub struct Settings {
    /// The evaluation date as `(year, month, day)`, if overridden.
    evaluation_date: Mutex<Option<(u16, u8, u8)>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the overridden evaluation date, or `None` if "today" follows
    /// the system clock.
    pub fn evaluation_date(&self) -> Option<(u16, u8, u8)> {
        *self
            .evaluation_date
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Pin "today" to the given `(year, month, day)`.
    ///
    /// The triple is not validated here; `nl-time` validates it when it
    /// builds a `Date` from it.
    pub fn set_evaluation_date(&self, year: u16, month: u8, day: u8) {
        tracing::debug!(year, month, day, "evaluation date pinned");
        *self
            .evaluation_date
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some((year, month, day));
    }

    /// Clear the evaluation date, resetting it to "use the system clock".
    pub fn reset_evaluation_date(&self) {
        *self
            .evaluation_date
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    /// Return "today" as `(year, month, day)`.
    pub fn today(&self) -> (u16, u8, u8) {
        if let Some(ymd) = self.evaluation_date() {
            return ymd;
        }
        let now = chrono::Local::now().date_naive();
        // Year is clamped into u16; callers range-check it anyway.
        let year = now.year().clamp(0, i32::from(u16::MAX)) as u16;
        (year, now.month() as u8, now.day() as u8)
    }
}
