//! Chinese names for lunar months and days.

/// Tens prefixes: 初 (1–10), 十 (11–19), 廿 (21–29), 卅, 卌.
const DECIMALS: [&str; 5] = ["初", "十", "廿", "卅", "卌"];

/// Unit digits, index 10 is 十.
const UNITS: [&str; 11] = ["日", "一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];

/// Month names without the trailing 月, 0 = 正.
const MONTHS: [&str; 12] = ["正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "十一", "腊"];

/// Return the day-in-words name of lunar day `day` (1–30).
///
/// ```
/// use nl_lunar::names::lunar_day_name;
///
/// assert_eq!(lunar_day_name(1), "初一");
/// assert_eq!(lunar_day_name(15), "十五");
/// assert_eq!(lunar_day_name(20), "二十");
/// assert_eq!(lunar_day_name(30), "三十");
/// ```
pub fn lunar_day_name(day: u8) -> String {
    let tens = usize::from(day / 10);
    let unit = usize::from(day % 10);
    match (tens, unit) {
        (0 | 1, 0) => format!("{}{}", DECIMALS[0], UNITS[10]),
        (_, 0) => format!("{}{}", UNITS[tens.min(10)], UNITS[10]),
        _ => format!("{}{}", DECIMALS[tens.min(4)], UNITS[unit]),
    }
}

/// Return the name of lunar month `month` (0-based), e.g. `正月`, `闰二月`,
/// `腊月`.
///
/// `month` must be in 0–11. Debug builds assert this; release builds clamp
/// larger values to 11 (`腊月`).
pub fn lunar_month_name(month: u8, is_leap: bool) -> String {
    debug_assert!(month < 12, "lunar month index {month} not in 0..=11");
    let base = MONTHS[usize::from(month.min(11))];
    if is_leap {
        format!("闰{base}月")
    } else {
        format!("{base}月")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_names() {
        for (d, name) in [
            (1, "初一"),
            (9, "初九"),
            (10, "初十"),
            (11, "十一"),
            (19, "十九"),
            (20, "二十"),
            (21, "廿一"),
            (29, "廿九"),
            (30, "三十"),
        ] {
            assert_eq!(lunar_day_name(d), name);
        }
    }

    #[test]
    fn month_names() {
        assert_eq!(lunar_month_name(0, false), "正月");
        assert_eq!(lunar_month_name(1, true), "闰二月");
        assert_eq!(lunar_month_name(10, false), "十一月");
        assert_eq!(lunar_month_name(11, false), "腊月");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not in 0..=11")]
    fn month_index_past_twelfth_month() {
        lunar_month_name(12, false);
    }
}
