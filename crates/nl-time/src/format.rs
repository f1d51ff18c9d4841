//! Pattern-based date formatting and parsing.
//!
//! A pattern is free text in which runs of `y`, `M`, `d` and `W` (matched
//! case-insensitively) are placeholders:
//!
//! | token  | meaning                                   | 2013-05-01 |
//! |--------|-------------------------------------------|------------|
//! | `yyyy` | four-digit year                           | `2013`     |
//! | `yy`   | two-digit year                            | `13`       |
//! | `y`    | year                                      | `2013`     |
//! | `MM`   | zero-padded month                         | `05`       |
//! | `M`    | month                                     | `5`        |
//! | `dd`   | zero-padded day                           | `01`       |
//! | `d`    | day                                       | `1`        |
//! | `W`    | weekday name                              | `三`       |
//! | `WW`   | week prefix followed by the weekday name  | `周三`     |
//!
//! A run of any other length (`yyy`, `MMM`, …) renders as nothing.
//! Everything else is copied through.
//!
//! Parsing is positional: the pattern is cut on runs of non-token
//! characters, the value on runs of non-digits, and the *i*-th pattern piece
//! names the *i*-th value piece.  A piece is only taken when the token is a
//! single character or its length matches the value piece exactly; other
//! pieces are silently dropped.

use nl_core::errors::{Error, Result};
use nl_core::utilities::data_formatters::pad2;
use nl_core::utilities::data_parsers::split_runs;

use crate::date::Date;
use crate::weekday::Weekday;

/// Default pattern.
pub const DATE_FORMAT: &str = "yyyy-MM-dd";

/// Weekday naming used by the `W` / `WW` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Weekday names, starting with `first_day`.
    pub day_names: [String; 7],
    /// Text placed before the weekday name by `WW`.
    pub week_prefix: String,
    /// The weekday `day_names[0]` refers to.
    pub first_day: Weekday,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::sunday_first()
    }
}

impl FormatOptions {
    /// `日,一,二,三,四,五,六` with prefix `周`.
    pub fn sunday_first() -> Self {
        Self::starting_on(Weekday::Sunday)
    }

    /// `一,二,三,四,五,六,日` with prefix `周`.
    pub fn monday_first() -> Self {
        Self::starting_on(Weekday::Monday)
    }

    fn starting_on(first_day: Weekday) -> Self {
        let day_names = std::array::from_fn(|i| {
            let n = (first_day.days_from_sunday() + i as u8) % 7;
            Weekday::from_days_from_sunday(n)
                .map(|w| w.chinese_name())
                .unwrap_or_default()
                .to_owned()
        });
        FormatOptions {
            day_names,
            week_prefix: "周".to_owned(),
            first_day,
        }
    }

    /// Return the configured name for `weekday`.
    pub fn day_name(&self, weekday: Weekday) -> &str {
        let idx = (weekday.days_from_sunday() + 7 - self.first_day.days_from_sunday()) % 7;
        &self.day_names[idx as usize]
    }
}

/// A date pattern together with its weekday naming.
///
/// # Example
/// ```
/// use nl_time::{Date, DateFormat};
///
/// let fmt = DateFormat::new("yyyy-MM-dd W");
/// let date = Date::from_ymd(2013, 5, 1).unwrap();
/// assert_eq!(fmt.format(date), "2013-05-01 三");
/// assert_eq!(fmt.parse("2013-05-01 三").unwrap(), date);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
    options: FormatOptions,
}

impl Default for DateFormat {
    fn default() -> Self {
        DateFormat::new(DATE_FORMAT)
    }
}

impl DateFormat {
    /// Create a format for `pattern` with the default weekday naming.
    pub fn new(pattern: impl Into<String>) -> Self {
        DateFormat {
            pattern: pattern.into(),
            options: FormatOptions::default(),
        }
    }

    /// Replace the weekday naming.
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Return the pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Return the weekday naming.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Render `date`.
    pub fn format(&self, date: Date) -> String {
        let (y, m, d) = date.ymd();
        let chars: Vec<char> = self.pattern.chars().collect();
        let mut out = String::with_capacity(self.pattern.len() + 8);
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i].to_ascii_lowercase();
            if !is_token_char(c) {
                out.push(chars[i]);
                i += 1;
                continue;
            }
            let run = chars[i..]
                .iter()
                .take_while(|x| x.to_ascii_lowercase() == c)
                .count();
            i += run;
            match (c, run) {
                ('y', 4) | ('y', 1) => out.push_str(&y.to_string()),
                ('y', 2) => out.push_str(&pad2(u32::from(y % 100))),
                ('m', 2) => out.push_str(&pad2(u32::from(m))),
                ('m', 1) => out.push_str(&m.to_string()),
                ('d', 2) => out.push_str(&pad2(u32::from(d))),
                ('d', 1) => out.push_str(&d.to_string()),
                ('w', 1) => out.push_str(self.options.day_name(date.weekday())),
                ('w', 2) => {
                    out.push_str(&self.options.week_prefix);
                    out.push_str(self.options.day_name(date.weekday()));
                }
                _ => {}
            }
        }
        out
    }

    /// Parse `value` against the pattern.
    ///
    /// # Errors
    /// [`Error::Format`] when no complete year/month/day can be extracted
    /// or the extracted triple is not a valid date.
    pub fn parse(&self, value: &str) -> Result<Date> {
        let format_err = || Error::Format {
            value: value.to_owned(),
            pattern: self.pattern.clone(),
        };

        let tokens = split_runs(&self.pattern, |c| !is_token_char(c.to_ascii_lowercase()));
        let pieces = split_runs(value, |c| !c.is_ascii_digit());

        let mut fields = Fields::default();
        for (token, piece) in tokens.iter().zip(pieces.iter()) {
            let len = token.chars().count();
            if len == 0 || piece.is_empty() || (len > 1 && piece.len() != len) {
                continue;
            }
            fields.set(&token.to_ascii_lowercase(), piece);
        }

        let year = fields.year().ok_or_else(format_err)?;
        let month = fields.month().ok_or_else(format_err)?;
        let day = fields.day().ok_or_else(format_err)?;
        Date::from_ymd(year, month, day).map_err(|_| format_err())
    }

    /// Parse `value`, falling back to [`Date::today`] when it is empty or
    /// cannot be parsed.
    pub fn parse_or_today(&self, value: &str) -> Result<Date> {
        if value.trim().is_empty() {
            return Date::today();
        }
        match self.parse(value) {
            Ok(date) => Ok(date),
            Err(err) => {
                tracing::warn!(%err, "unparseable date, using today");
                Date::today()
            }
        }
    }
}

fn is_token_char(c: char) -> bool {
    matches!(c, 'y' | 'm' | 'd' | 'w')
}

/// Value pieces captured per token.
#[derive(Default)]
struct Fields<'a> {
    yyyy: Option<&'a str>,
    yy: Option<&'a str>,
    y: Option<&'a str>,
    m: Option<&'a str>,
    mm: Option<&'a str>,
    d: Option<&'a str>,
    dd: Option<&'a str>,
}

impl<'a> Fields<'a> {
    fn set(&mut self, token: &str, piece: &'a str) {
        let slot = match token {
            "yyyy" => &mut self.yyyy,
            "yy" => &mut self.yy,
            "y" => &mut self.y,
            "m" => &mut self.m,
            "mm" => &mut self.mm,
            "d" => &mut self.d,
            "dd" => &mut self.dd,
            _ => return,
        };
        *slot = Some(piece);
    }

    fn year(&self) -> Option<u16> {
        if let Some(y) = self.yyyy.or(self.y) {
            return y.parse().ok();
        }
        let yy: u16 = self.yy?.parse().ok()?;
        Some(if yy < 50 { 2000 + yy } else { 1900 + yy })
    }

    fn month(&self) -> Option<u8> {
        self.m.or(self.mm)?.parse().ok()
    }

    fn day(&self) -> Option<u8> {
        self.d.or(self.dd)?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn format_tokens() {
        let d = date(2013, 5, 1);
        assert_eq!(DateFormat::new("yyyy-M-d").format(d), "2013-5-1");
        assert_eq!(DateFormat::new("yyyy-MM-d").format(d), "2013-05-1");
        assert_eq!(DateFormat::new("yyyy-MM-dd").format(d), "2013-05-01");
        assert_eq!(DateFormat::new("yyyy-MM-dd W").format(d), "2013-05-01 三");
        assert_eq!(DateFormat::new("WW").format(d), "周三");
        assert_eq!(DateFormat::new("yyyyMM").format(d), "201305");
        assert_eq!(DateFormat::new("yy/mm/dd").format(d), "13/05/01");
        assert_eq!(DateFormat::new("yyy").format(d), "");
    }

    #[test]
    fn monday_first_names() {
        let fmt = DateFormat::new("W").with_options(FormatOptions::monday_first());
        assert_eq!(fmt.options().day_names[0], "一");
        assert_eq!(fmt.format(date(2013, 5, 5)), "日");
        assert_eq!(fmt.format(date(2013, 5, 6)), "一");
    }

    #[test]
    fn parse_drops_mismatched_lengths() {
        // "MM" expects two digits; "5" is dropped, leaving no month.
        let fmt = DateFormat::new("yyyy-MM-dd");
        assert!(matches!(fmt.parse("2013-5-01"), Err(Error::Format { .. })));
        assert_eq!(fmt.parse("2013-05-01").unwrap(), date(2013, 5, 1));
    }

    #[test]
    fn parse_two_digit_year() {
        let fmt = DateFormat::new("yy-MM-dd");
        assert_eq!(fmt.parse("13-05-01").unwrap(), date(2013, 5, 1));
        assert_eq!(fmt.parse("81-09-17").unwrap(), date(1981, 9, 17));
    }

    #[test]
    fn parse_rejects_invalid_dates() {
        let fmt = DateFormat::default();
        assert!(fmt.parse("2013-02-30").is_err());
        assert!(fmt.parse("").is_err());
        assert!(fmt.parse("hello").is_err());
    }
}
