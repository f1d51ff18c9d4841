//! Short display labels for a calendar cell.

use nl_core::errors::Result;
use nl_time::Date;

use crate::converter::{to_lunar, LunarDate};
use crate::festival::FestivalResolver;
use crate::names::{lunar_day_name, lunar_month_name};

/// Return the festival name for `date`, or an empty string.
pub fn festival_label(date: Date) -> Result<String> {
    Ok(FestivalResolver::standard()
        .resolve(date)?
        .map(|f| f.name.to_owned())
        .unwrap_or_default())
}

/// Return the label shown under `date` in a month grid.
///
/// In order: the festival name; the month name on the first day of a lunar
/// month (`闰` prefixed for a leap month); otherwise the day in words.
///
/// ```
/// use nl_lunar::label::day_label;
/// use nl_time::Date;
///
/// assert_eq!(day_label(Date::from_ymd(2024, 9, 17).unwrap()).unwrap(), "中秋节");
/// assert_eq!(day_label(Date::from_ymd(2023, 3, 22).unwrap()).unwrap(), "闰二月");
/// assert_eq!(day_label(Date::from_ymd(2024, 3, 1).unwrap()).unwrap(), "廿一");
/// ```
pub fn day_label(date: Date) -> Result<String> {
    label_for(FestivalResolver::standard(), &to_lunar(date)?)
}

/// Same as [`day_label`], with an explicit resolver and converted date.
pub fn label_for(resolver: &FestivalResolver, lunar: &LunarDate) -> Result<String> {
    if let Some(festival) = resolver.resolve_lunar(lunar)? {
        return Ok(festival.name.to_owned());
    }
    Ok(if lunar.is_month_start() {
        lunar_month_name(lunar.month, lunar.is_leap)
    } else {
        lunar_day_name(lunar.day)
    })
}
