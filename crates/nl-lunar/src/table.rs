//! The packed lunar-year table and its decoders.
//!
//! Each year 1900–2100 is described by one 16-bit word:
//!
//! ```text
//!  15                              4 3        0
//! +----------------------------------+----------+
//! | month 1 … month 12 (1 = 30 days) | leap idx |
//! +----------------------------------+----------+
//! ```
//!
//! The low nibble is the regular month the leap month follows (1–12), or 0
//! when the year has none.  The nibble value `0xF` is not a month: it marks
//! that the *previous* year's leap month has 30 days.  That is why
//! [`leap_days_of`] reads the entry one year ahead of [`leap_month_of`].

use nl_core::errors::{Error, Result};

/// First lunar year in the table.
pub const FIRST_YEAR: u16 = 1900;

/// Last lunar year in the table.
pub const LAST_YEAR: u16 = 2100;

/// One packed descriptor per lunar year, `LUNAR_INFO[0]` is 1900.
#[rustfmt::skip]
pub static LUNAR_INFO: [u16; 201] = [
    0x4bd8, 0x4ae0, 0xa570, 0x54d5, 0xd260, 0xd950, 0x5554, 0x56af, 0x9ad0, 0x55d2, // 1900
    0x4ae0, 0xa5b6, 0xa4d0, 0xd250, 0xd295, 0xb54f, 0xd6a0, 0xada2, 0x95b0, 0x4977, // 1910
    0x497f, 0xa4b0, 0xb4b5, 0x6a50, 0x6d40, 0xab54, 0x2b6f, 0x9570, 0x52f2, 0x4970, // 1920
    0x6566, 0xd4a0, 0xea50, 0x6a95, 0x5adf, 0x2b60, 0x86e3, 0x92ef, 0xc8d7, 0xc95f, // 1930
    0xd4a0, 0xd8a6, 0xb55f, 0x56a0, 0xa5b4, 0x25df, 0x92d0, 0xd2b2, 0xa950, 0xb557, // 1940
    0x6ca0, 0xb550, 0x5355, 0x4daf, 0xa5b0, 0x4573, 0x52bf, 0xa9a8, 0xe950, 0x6aa0, // 1950
    0xaea6, 0xab50, 0x4b60, 0xaae4, 0xa570, 0x5260, 0xf263, 0xd950, 0x5b57, 0x56a0, // 1960
    0x96d0, 0x4dd5, 0x4ad0, 0xa4d0, 0xd4d4, 0xd250, 0xd558, 0xb540, 0xb6a0, 0x95a6, // 1970
    0x95bf, 0x49b0, 0xa974, 0xa4b0, 0xb27a, 0x6a50, 0x6d40, 0xaf46, 0xab60, 0x9570, // 1980
    0x4af5, 0x4970, 0x64b0, 0x74a3, 0xea50, 0x6b58, 0x5ac0, 0xab60, 0x96d5, 0x92e0, // 1990
    0xc960, 0xd954, 0xd4a0, 0xda50, 0x7552, 0x56a0, 0xabb7, 0x25d0, 0x92d0, 0xcab5, // 2000
    0xa950, 0xb4a0, 0xbaa4, 0xad50, 0x55d9, 0x4ba0, 0xa5b0, 0x5176, 0x52bf, 0xa930, // 2010
    0x7954, 0x6aa0, 0xad50, 0x5b52, 0x4b60, 0xa6e6, 0xa4e0, 0xd260, 0xea65, 0xd530, // 2020
    0x5aa0, 0x76a3, 0x96d0, 0x4afb, 0x4ad0, 0xa4d0, 0xd0b6, 0xd25f, 0xd520, 0xdd45, // 2030
    0xb5a0, 0x56d0, 0x55b2, 0x49b0, 0xa577, 0xa4b0, 0xaa50, 0xb255, 0x6d2f, 0xada0, // 2040
    0x4b63, 0x937f, 0x49f8, 0x4970, 0x64b0, 0x68a6, 0xea5f, 0x6b20, 0xa6c4, 0xaaef, // 2050
    0x92e0, 0xd2e3, 0xc960, 0xd557, 0xd4a0, 0xda50, 0x5d55, 0x56a0, 0xa6d0, 0x55d4, // 2060
    0x52d0, 0xa9b8, 0xa950, 0xb4a0, 0xb6a6, 0xad50, 0x55a0, 0xaba4, 0xa5b0, 0x52b0, // 2070
    0xb273, 0x6930, 0x7337, 0x6aa0, 0xad50, 0x4b55, 0x4b6f, 0xa570, 0x54e4, 0xd260, // 2080
    0xe968, 0xd520, 0xdaa0, 0x6aa6, 0x56df, 0x4ae0, 0xa9d4, 0xa4d0, 0xd150, 0xf252, // 2090
    0xd520, // 2100
];

const LEAP_MASK: u16 = 0xF;

fn descriptor(year: u16) -> Result<u16> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(Error::year_out_of_range(year, FIRST_YEAR, LAST_YEAR));
    }
    Ok(LUNAR_INFO[usize::from(year - FIRST_YEAR)])
}

/// Return which regular month (1–12) the leap month of `year` follows, or
/// 0 if `year` has no leap month.
pub fn leap_month_of(year: u16) -> Result<u8> {
    let lm = (descriptor(year)? & LEAP_MASK) as u8;
    Ok(if u16::from(lm) == LEAP_MASK { 0 } else { lm })
}

/// Return the length of the leap month of `year`: 0 without a leap month,
/// otherwise 29 or 30.
pub fn leap_days_of(year: u16) -> Result<u8> {
    if leap_month_of(year)? == 0 {
        return Ok(0);
    }
    // The flag lives in the following year's entry; past the table end it
    // reads as "short".
    let next = LUNAR_INFO
        .get(usize::from(year - FIRST_YEAR) + 1)
        .copied()
        .unwrap_or(0);
    Ok(if next & LEAP_MASK == LEAP_MASK { 30 } else { 29 })
}

/// Return the length (29 or 30) of regular month `month` (1–12) of `year`.
pub fn regular_month_days(year: u16, month: u8) -> Result<u8> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidArgument(format!(
            "lunar month {month} not in 1..=12"
        )));
    }
    let bit = (0x10000u32 >> month) as u16;
    Ok(if descriptor(year)? & bit != 0 { 30 } else { 29 })
}

/// Return the total number of days in lunar year `year`.
pub fn total_days_of(year: u16) -> Result<u16> {
    let big_months = (descriptor(year)? >> 4).count_ones() as u16;
    Ok(348 + big_months + u16::from(leap_days_of(year)?))
}

/// Decoded summary of one lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarYearInfo {
    /// The lunar year.
    pub year: u16,
    /// Total number of days (348–385).
    pub total_days: u16,
    /// Regular month the leap month follows, 0 if none.
    pub leap_month: u8,
    /// Length of the leap month, 0 if none.
    pub leap_days: u8,
}

impl LunarYearInfo {
    /// Decode the descriptor of `year`.
    pub fn of(year: u16) -> Result<Self> {
        Ok(LunarYearInfo {
            year,
            total_days: total_days_of(year)?,
            leap_month: leap_month_of(year)?,
            leap_days: leap_days_of(year)?,
        })
    }

    /// Return `true` if the year has 13 months.
    pub fn has_leap_month(&self) -> bool {
        self.leap_month != 0
    }

    /// Return the months of the year in calendar order, the leap month
    /// directly after the regular month it follows.
    pub fn months(&self) -> Result<Vec<MonthSegment>> {
        let mut out = Vec::with_capacity(13);
        for month in 1..=12 {
            out.push(MonthSegment {
                month,
                is_leap: false,
                days: regular_month_days(self.year, month)?,
            });
            if month == self.leap_month {
                out.push(MonthSegment {
                    month,
                    is_leap: true,
                    days: self.leap_days,
                });
            }
        }
        Ok(out)
    }
}

/// One month of a lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSegment {
    /// Month number, 1–12.
    pub month: u8,
    /// Whether this is the leap occurrence of `month`.
    pub is_leap: bool,
    /// Length in days, 29 or 30.
    pub days: u8,
}
