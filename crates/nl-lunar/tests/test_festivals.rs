//! Integration tests for festivals, solar terms and day labels.

use nl_lunar::festival::{resolve, resolve_detailed};
use nl_lunar::{day_label, day_of_term, festival_label, term_date, FestivalKind, SolarTerm};
use nl_time::Date;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn label(y: u16, m: u8, d: u8) -> String {
    day_label(date(y, m, d)).unwrap()
}

#[test]
fn spring_festival_2024() {
    assert_eq!(festival_label(date(2024, 2, 10)).unwrap(), "春节");
    assert_eq!(festival_label(date(2024, 2, 9)).unwrap(), "除夕");
}

#[test]
fn new_years_eve_every_year() {
    for (y, m, d) in [
        (2019, 2, 4),
        (2020, 1, 24),
        (2021, 2, 11),
        (2022, 1, 31),
        (2023, 1, 21),
        (2024, 2, 9),
        (2025, 1, 28),
        (2026, 2, 16),
    ] {
        let eve = date(y, m, d);
        assert_eq!(day_label(eve).unwrap(), "除夕", "{eve}");
        assert_eq!(day_label(eve + 1).unwrap(), "春节", "{eve}");
    }
}

#[test]
fn lunar_festivals() {
    assert_eq!(label(2024, 9, 17), "中秋节");
    assert_eq!(label(2024, 6, 10), "端午节");
    assert_eq!(label(2024, 2, 24), "元宵节");
    assert_eq!(label(2025, 1, 22), "小年");
    assert_eq!(label(2025, 1, 7), "腊八节");
    assert_eq!(label(2024, 1, 18), "腊八节");
    assert_eq!(label(2024, 8, 10), "七夕");
    assert_eq!(label(2024, 10, 11), "重阳节");
}

#[test]
fn solar_festivals() {
    assert_eq!(label(2024, 3, 12), "植树节");
    assert_eq!(label(2024, 12, 25), "圣诞节");
    assert_eq!(label(2024, 2, 14), "情人节");
    assert_eq!(label(2013, 5, 1), "劳动节");
}

#[test]
fn weekday_festivals() {
    assert_eq!(label(2024, 5, 12), "母亲节");
    assert_eq!(label(2023, 5, 14), "母亲节");
    assert_eq!(label(2024, 6, 16), "父亲节");
    assert_eq!(label(2020, 6, 21), "父亲节");
    assert_eq!(label(2024, 1, 28), "国际麻风节");
    assert_eq!(label(2025, 1, 26), "国际麻风节");
    assert_eq!(label(2024, 11, 28), "感恩节");
    let f = resolve_detailed(date(2024, 11, 28)).unwrap().unwrap();
    assert_eq!(f.kind, FestivalKind::Weekday);
}

#[test]
fn thanksgiving_is_the_fourth_thursday() {
    for year in 1901..=2100 {
        let day = Date::nth_weekday(4, nl_time::Weekday::Thursday, year, 11).unwrap();
        let festival = resolve_detailed(day).unwrap().unwrap();
        // A lunar or solar festival could shadow it; none does in November.
        assert_eq!(festival.name, "感恩节", "{day}");
    }
}

#[test]
fn solar_terms() {
    assert_eq!(day_of_term(2000, 0).unwrap(), 6);
    assert_eq!(day_of_term(2000, 5).unwrap(), 20);
    assert_eq!(day_of_term(2024, 6).unwrap(), 4);
    assert_eq!(day_of_term(2020, 22).unwrap(), 7);
    assert_eq!(term_date(2024, SolarTerm::SpringEquinox).unwrap(), date(2024, 3, 20));
    assert_eq!(label(2024, 2, 4), "立春");
    assert_eq!(label(2024, 2, 19), "雨水");
    assert_eq!(label(2024, 3, 20), "春分");
    assert_eq!(label(2024, 4, 4), "清明");
    assert_eq!(label(2024, 12, 21), "冬至");
    assert_eq!(label(2025, 8, 23), "处暑");
}

#[test]
fn every_term_falls_in_its_month() {
    for year in 1900..=2100 {
        let mut prev = None;
        for term in SolarTerm::ALL {
            let d = term_date(year, term).unwrap();
            assert_eq!(d.month(), term.month(), "{year} {term}");
            if let Some(p) = prev {
                assert!(d > p, "{year} {term}");
            }
            prev = Some(d);
        }
    }
}

#[test]
fn term_labels_yield_to_month_names_only_when_no_festival() {
    // 2023-04-20 starts 三月 and is 谷雨: the term wins over the month name.
    assert_eq!(label(2023, 4, 20), "谷雨");
    assert_eq!(label(2023, 3, 22), "闰二月");
    assert_eq!(label(2023, 4, 19), "廿九");
}

#[test]
fn plain_days() {
    assert_eq!(label(2023, 12, 30), "十八");
    assert_eq!(label(2024, 3, 1), "廿一");
    assert_eq!(label(2024, 2, 20), "十一");
    assert_eq!(resolve(date(2024, 3, 1)).unwrap(), None);
}

#[test]
fn last_day_of_window() {
    // The next day is outside the window, so the New Year's Eve check
    // is skipped.
    assert_eq!(label(2100, 12, 31), "腊月");
}
