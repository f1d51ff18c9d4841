//! Gregorian ↔ lunar date conversion.
//!
//! Lunar year 1900 begins on 1900-01-31.  A Gregorian date is converted by
//! counting the days elapsed since then, finding the lunar year that
//! contains that count, and walking the months of that year (the leap month
//! sits right after the regular month it follows).
//!
//! A remainder of exactly zero after a month always lands on day 1 of the
//! next month, including when the next month is the leap month.

use std::sync::LazyLock;

use nl_core::errors::{Error, Result};
use nl_core::fail;
use nl_time::Date;

use crate::table::{total_days_of, LunarYearInfo, FIRST_YEAR, LAST_YEAR};

/// Serial of 1900-01-31, the first day of lunar year 1900.
const EPOCH_SERIAL: i32 = 31;

/// Serial of 2100-12-31, the last convertible date.
const LAST_SERIAL: i32 = 73_414;

/// Day offset (from the epoch) at which each lunar year starts, plus one
/// trailing entry for the end of the table.
static YEAR_STARTS: LazyLock<Vec<i32>> = LazyLock::new(|| {
    let mut starts = Vec::with_capacity(usize::from(LAST_YEAR - FIRST_YEAR) + 2);
    let mut acc = 0;
    for year in FIRST_YEAR..=LAST_YEAR {
        starts.push(acc);
        acc += i32::from(total_days_of(year).unwrap_or_default());
    }
    starts.push(acc);
    starts
});

/// A date in the Chinese lunisolar calendar.
///
/// `month` is 0-based (0 = 正月) and `day` is 1-based, the layout the
/// festival tables and the name tables index with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    /// Lunar year.
    pub year: u16,
    /// Month index, 0–11.
    pub month: u8,
    /// Day of the month, 1–30.
    pub day: u8,
    /// Whether the month is the leap occurrence of `month`.
    pub is_leap: bool,
    /// The Gregorian date this was converted from.
    pub solar: Date,
}

impl LunarDate {
    /// Return the 1-based month number.
    pub fn month_number(&self) -> u8 {
        self.month + 1
    }

    /// Return `true` on the first day of a lunar month.
    pub fn is_month_start(&self) -> bool {
        self.day == 1
    }
}

impl TryFrom<Date> for LunarDate {
    type Error = Error;

    fn try_from(date: Date) -> Result<Self> {
        to_lunar(date)
    }
}

/// Return the first and last Gregorian dates [`to_lunar`] accepts
/// (1900-01-31 and 2100-12-31).
pub fn supported_range() -> Result<(Date, Date)> {
    Ok((Date::from_serial(EPOCH_SERIAL)?, Date::from_serial(LAST_SERIAL)?))
}

/// Return `true` if `date` lies inside the conversion window.
pub fn is_supported(date: Date) -> bool {
    (EPOCH_SERIAL..=LAST_SERIAL).contains(&date.serial())
}

/// Convert a Gregorian date to its lunar date.
///
/// # Errors
/// [`Error::OutOfRange`] for dates before 1900-01-31 or after 2100-12-31.
///
/// # Example
/// ```
/// use nl_lunar::converter::to_lunar;
/// use nl_time::Date;
///
/// let lunar = to_lunar(Date::from_ymd(1981, 9, 17).unwrap()).unwrap();
/// assert_eq!((lunar.year, lunar.month, lunar.day, lunar.is_leap), (1981, 7, 20, false));
/// ```
pub fn to_lunar(date: Date) -> Result<LunarDate> {
    if !is_supported(date) {
        return Err(Error::OutOfRange(format!(
            "{date} is outside [1900-01-31, 2100-12-31]"
        )));
    }
    let mut offset = date.serial() - EPOCH_SERIAL;

    let starts = &*YEAR_STARTS;
    let idx = starts.partition_point(|&s| s <= offset) - 1;
    offset -= starts[idx];
    let year = FIRST_YEAR + idx as u16;

    for seg in LunarYearInfo::of(year)?.months()? {
        let len = i32::from(seg.days);
        if offset < len {
            return Ok(LunarDate {
                year,
                month: seg.month - 1,
                day: offset as u8 + 1,
                is_leap: seg.is_leap,
                solar: date,
            });
        }
        offset -= len;
    }
    fail!("day offset overran lunar year {year} converting {date}")
}

/// Convert a lunar date back to the Gregorian calendar.
///
/// `month` is 0-based, as in [`LunarDate`].
///
/// # Errors
/// * [`Error::Range`] if `year` is outside the table.
/// * [`Error::InvalidArgument`] if the month does not exist (e.g. a leap
///   month the year does not have) or `day` exceeds its length.
/// * [`Error::OutOfRange`] if the result is past 2100-12-31.
pub fn from_lunar(year: u16, month: u8, day: u8, is_leap: bool) -> Result<Date> {
    let info = LunarYearInfo::of(year)?;
    if month > 11 {
        return Err(Error::InvalidArgument(format!(
            "lunar month index {month} not in 0..=11"
        )));
    }
    let mut offset = YEAR_STARTS[usize::from(year - FIRST_YEAR)];
    for seg in info.months()? {
        if seg.month == month + 1 && seg.is_leap == is_leap {
            if day == 0 || day > seg.days {
                return Err(Error::InvalidArgument(format!(
                    "lunar {year}-{:02} has {} days, got day {day}",
                    seg.month, seg.days
                )));
            }
            let serial = EPOCH_SERIAL + offset + i32::from(day) - 1;
            if serial > LAST_SERIAL {
                return Err(Error::OutOfRange(format!(
                    "lunar {year}-{:02}-{day:02} falls after 2100-12-31",
                    seg.month
                )));
            }
            return Date::from_serial(serial);
        }
        offset += i32::from(seg.days);
    }
    Err(Error::InvalidArgument(format!(
        "lunar year {year} has no {}month {}",
        if is_leap { "leap " } else { "" },
        u16::from(month) + 1
    )))
}

/// Return the Gregorian date of lunar New Year (正月初一) of `year`.
pub fn lunar_new_year(year: u16) -> Result<Date> {
    from_lunar(year, 0, 1, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_first_day() {
        let l = to_lunar(date(1900, 1, 31)).unwrap();
        assert_eq!((l.year, l.month, l.day, l.is_leap), (1900, 0, 1, false));
        assert!(matches!(to_lunar(date(1900, 1, 30)), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn window_end() {
        let l = to_lunar(date(2100, 12, 31)).unwrap();
        assert_eq!((l.year, l.month, l.day), (2100, 11, 1));
        assert!(matches!(to_lunar(date(2101, 1, 1)), Err(Error::OutOfRange(_))));
        let (first, last) = supported_range().unwrap();
        assert_eq!(first, date(1900, 1, 31));
        assert_eq!(last, date(2100, 12, 31));
    }

    #[test]
    fn golden_value() {
        let l = to_lunar(date(1981, 9, 17)).unwrap();
        assert_eq!((l.year, l.month, l.day, l.is_leap), (1981, 7, 20, false));
        assert_eq!(l.solar, date(1981, 9, 17));
        assert_eq!(l.month_number(), 8);
    }

    #[test]
    fn leap_boundaries() {
        // 2023 has a leap 2nd month: 2023-03-22 .. 2023-04-19
        let start = to_lunar(date(2023, 3, 22)).unwrap();
        assert_eq!((start.month, start.day, start.is_leap), (1, 1, true));
        let end = to_lunar(date(2023, 4, 19)).unwrap();
        assert_eq!((end.month, end.day, end.is_leap), (1, 29, true));
        let after = to_lunar(date(2023, 4, 20)).unwrap();
        assert_eq!((after.month, after.day, after.is_leap), (2, 1, false));
        let before = to_lunar(date(2023, 3, 21)).unwrap();
        assert_eq!((before.month, before.is_leap), (1, false));
    }

    #[test]
    fn inverse() {
        assert_eq!(from_lunar(1981, 7, 20, false).unwrap(), date(1981, 9, 17));
        assert_eq!(from_lunar(2023, 1, 1, true).unwrap(), date(2023, 3, 22));
        assert_eq!(lunar_new_year(2024).unwrap(), date(2024, 2, 10));
        assert!(matches!(from_lunar(2024, 1, 1, true), Err(Error::InvalidArgument(_))));
        assert!(matches!(from_lunar(2023, 1, 30, true), Err(Error::InvalidArgument(_))));
        assert!(matches!(from_lunar(2101, 0, 1, false), Err(Error::Range { .. })));
    }

    #[test]
    fn month_index_out_of_range() {
        assert!(matches!(from_lunar(2024, 12, 1, false), Err(Error::InvalidArgument(_))));
        assert!(matches!(from_lunar(2024, 255, 1, false), Err(Error::InvalidArgument(_))));
        assert!(matches!(from_lunar(2024, 255, 1, true), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn idempotent() {
        let d = date(2020, 5, 23);
        assert_eq!(to_lunar(d).unwrap(), to_lunar(d).unwrap());
        assert_eq!(LunarDate::try_from(d).unwrap(), to_lunar(d).unwrap());
    }
}
