//! Festival lookup.
//!
//! A [`FestivalResolver`] holds an ordered list of [`FestivalRule`]s and
//! asks each in turn; the first rule that names the date wins.  The
//! standard chain is:
//!
//! 1. [`LunarFestivals`]: fixed lunar month/day (春节, 中秋节, …), never on a
//!    leap month, with 除夕 resolved on whichever day ends the 12th month;
//! 2. [`SolarFestivals`]: fixed Gregorian month/day (元旦, 国庆节, …);
//! 3. [`WeekdayFestivals`]: the *n*-th weekday of a month, counted from
//!    either end (母亲节, 感恩节, …);
//! 4. [`SolarTerms`]: the name of the solar term falling on the date.

use std::sync::LazyLock;

use nl_core::errors::Result;
use nl_time::{Date, Weekday};

use crate::converter::{is_supported, to_lunar, LunarDate};
use crate::solar_term::term_name_for_date;

/// Key of 除夕: "day 0 of 正月", the day before 正月初一.
const NEW_YEARS_EVE: (u8, u8) = (1, 0);

/// Lunar festivals keyed by `(month, day)`, month 1-based.
const LUNAR_FESTIVALS: &[((u8, u8), &str)] = &[
    (NEW_YEARS_EVE, "除夕"),
    ((1, 1), "春节"),
    ((1, 15), "元宵节"),
    ((2, 2), "龙抬头"),
    ((5, 5), "端午节"),
    ((7, 7), "七夕"),
    ((7, 15), "中元节"),
    ((8, 15), "中秋节"),
    ((9, 9), "重阳节"),
    ((12, 8), "腊八节"),
    ((12, 23), "小年"),
];

/// Gregorian festivals keyed by `(month, day)`.
const SOLAR_FESTIVALS: &[((u8, u8), &str)] = &[
    ((1, 1), "元旦"),
    ((2, 14), "情人节"),
    ((3, 8), "妇女节"),
    ((3, 12), "植树节"),
    ((4, 1), "愚人节"),
    ((4, 22), "地球日"),
    ((5, 1), "劳动节"),
    ((5, 4), "青年节"),
    ((5, 31), "无烟日"),
    ((6, 1), "儿童节"),
    ((6, 6), "爱眼日"),
    ((7, 1), "建党日"),
    ((7, 7), "抗战纪念日"),
    ((8, 1), "建军节"),
    ((9, 10), "教师节"),
    ((9, 18), "九·一八纪念日"),
    ((10, 1), "国庆节"),
    ((10, 31), "万圣节"),
    ((11, 11), "光棍节"),
    ((12, 1), "艾滋病日"),
    ((12, 13), "南京大屠杀纪念日"),
    ((12, 24), "平安夜"),
    ((12, 25), "圣诞节"),
];

/// Which occurrence of a weekday within its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occurrence {
    /// The *n*-th counted from the first day of the month.
    FromStart(u8),
    /// The *n*-th counted back from the last day (1 = last).
    FromEnd(u8),
}

impl Occurrence {
    /// Return the date of this occurrence of `weekday` in `year`/`month`.
    ///
    /// # Errors
    /// [`Error::Date`](nl_core::Error::Date) if the month has no such
    /// occurrence (e.g. a fifth Wednesday in February 2024).
    pub fn date_in(self, weekday: Weekday, year: u16, month: u8) -> Result<Date> {
        match self {
            Occurrence::FromStart(n) => Date::nth_weekday(n, weekday, year, month),
            Occurrence::FromEnd(n) => Date::nth_last_weekday(n, weekday, year, month),
        }
    }
}

/// Weekday festivals: `(month, occurrence, weekday, name)`.
const WEEKDAY_FESTIVALS: &[(u8, Occurrence, Weekday, &str)] = &[
    (1, Occurrence::FromEnd(1), Weekday::Sunday, "国际麻风节"),
    (5, Occurrence::FromStart(2), Weekday::Sunday, "母亲节"),
    (6, Occurrence::FromStart(3), Weekday::Sunday, "父亲节"),
    (11, Occurrence::FromStart(4), Weekday::Thursday, "感恩节"),
];

/// Which rule produced a festival name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FestivalKind {
    /// Fixed lunar date.
    Lunar,
    /// Fixed Gregorian date.
    Solar,
    /// *n*-th weekday of a month.
    Weekday,
    /// Solar term.
    SolarTerm,
    /// A caller-supplied rule.
    Custom,
}

/// A resolved festival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Festival {
    /// Display name.
    pub name: &'static str,
    /// The rule that matched.
    pub kind: FestivalKind,
}

/// One link of the resolution chain.
pub trait FestivalRule: std::fmt::Debug + Send + Sync {
    /// The kind reported for names this rule produces.
    fn kind(&self) -> FestivalKind;

    /// Return the festival name for the day described by `lunar` (whose
    /// `solar` field is the Gregorian date), if this rule has one.
    fn festival(&self, lunar: &LunarDate) -> Result<Option<&'static str>>;
}

fn lookup(table: &[((u8, u8), &'static str)], key: (u8, u8)) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, name)| *name)
}

/// Fixed lunar festivals, including 除夕.
#[derive(Debug, Clone, Copy, Default)]
pub struct LunarFestivals;

impl LunarFestivals {
    /// Return `true` if `lunar` is the last day of the 12th month.
    ///
    /// The 12th month has 29 or 30 days, so this asks whether the next
    /// Gregorian day starts a new lunar month.
    fn is_new_years_eve(lunar: &LunarDate) -> Result<bool> {
        if lunar.is_leap || lunar.month != 11 || lunar.day <= 28 {
            return Ok(false);
        }
        match lunar.solar.add_days(1) {
            Ok(next) if is_supported(next) => Ok(to_lunar(next)?.day == 1),
            _ => Ok(false),
        }
    }
}

impl FestivalRule for LunarFestivals {
    fn kind(&self) -> FestivalKind {
        FestivalKind::Lunar
    }

    fn festival(&self, lunar: &LunarDate) -> Result<Option<&'static str>> {
        if lunar.is_leap {
            return Ok(None);
        }
        let key = if Self::is_new_years_eve(lunar)? {
            NEW_YEARS_EVE
        } else {
            (lunar.month_number(), lunar.day)
        };
        Ok(lookup(LUNAR_FESTIVALS, key))
    }
}

/// Fixed Gregorian festivals.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolarFestivals;

impl FestivalRule for SolarFestivals {
    fn kind(&self) -> FestivalKind {
        FestivalKind::Solar
    }

    fn festival(&self, lunar: &LunarDate) -> Result<Option<&'static str>> {
        let (_, m, d) = lunar.solar.ymd();
        Ok(lookup(SOLAR_FESTIVALS, (m, d)))
    }
}

/// *n*-th weekday of month festivals.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekdayFestivals;

impl FestivalRule for WeekdayFestivals {
    fn kind(&self) -> FestivalKind {
        FestivalKind::Weekday
    }

    fn festival(&self, lunar: &LunarDate) -> Result<Option<&'static str>> {
        let date = lunar.solar;
        let (year, month, _) = date.ymd();
        let weekday = date.weekday();
        for &(m, occurrence, w, name) in WEEKDAY_FESTIVALS {
            if m == month && w == weekday && occurrence.date_in(w, year, m)? == date {
                return Ok(Some(name));
            }
        }
        Ok(None)
    }
}

/// Solar term names.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolarTerms;

impl FestivalRule for SolarTerms {
    fn kind(&self) -> FestivalKind {
        FestivalKind::SolarTerm
    }

    fn festival(&self, lunar: &LunarDate) -> Result<Option<&'static str>> {
        term_name_for_date(lunar.solar)
    }
}

/// An ordered chain of [`FestivalRule`]s, first match wins.
#[derive(Debug)]
pub struct FestivalResolver {
    rules: Vec<Box<dyn FestivalRule>>,
}

impl Default for FestivalResolver {
    fn default() -> Self {
        FestivalResolver {
            rules: vec![
                Box::new(LunarFestivals),
                Box::new(SolarFestivals),
                Box::new(WeekdayFestivals),
                Box::new(SolarTerms),
            ],
        }
    }
}

static STANDARD: LazyLock<FestivalResolver> = LazyLock::new(FestivalResolver::default);

impl FestivalResolver {
    /// Create a resolver from an explicit rule list.
    pub fn new(rules: Vec<Box<dyn FestivalRule>>) -> Self {
        FestivalResolver { rules }
    }

    /// Return the shared resolver with the standard chain.
    pub fn standard() -> &'static FestivalResolver {
        &STANDARD
    }

    /// Append a rule at the lowest priority.
    pub fn push(&mut self, rule: Box<dyn FestivalRule>) {
        self.rules.push(rule);
    }

    /// Return the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Return `true` if the chain has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve an already converted date.
    pub fn resolve_lunar(&self, lunar: &LunarDate) -> Result<Option<Festival>> {
        for rule in &self.rules {
            if let Some(name) = rule.festival(lunar)? {
                return Ok(Some(Festival {
                    name,
                    kind: rule.kind(),
                }));
            }
        }
        Ok(None)
    }

    /// Resolve a Gregorian date.
    ///
    /// # Errors
    /// [`Error::OutOfRange`](nl_core::Error::OutOfRange) outside the
    /// conversion window.
    pub fn resolve(&self, date: Date) -> Result<Option<Festival>> {
        self.resolve_lunar(&to_lunar(date)?)
    }
}

/// Return the festival name for `date` under the standard chain, if any.
///
/// ```
/// use nl_lunar::festival::resolve;
/// use nl_time::Date;
///
/// assert_eq!(resolve(Date::from_ymd(2024, 2, 10).unwrap()).unwrap(), Some("春节"));
/// ```
pub fn resolve(date: Date) -> Result<Option<&'static str>> {
    Ok(resolve_detailed(date)?.map(|f| f.name))
}

/// Same as [`resolve`], also reporting which rule matched.
pub fn resolve_detailed(date: Date) -> Result<Option<Festival>> {
    FestivalResolver::standard().resolve(date)
}
