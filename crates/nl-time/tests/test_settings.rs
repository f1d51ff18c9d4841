//! The evaluation date is process-wide, so everything touching it lives in
//! this single test.

use nl_core::Settings;
use nl_time::{Date, DateFormat};

#[test]
fn parse_falls_back_to_evaluation_date() {
    let settings = Settings::instance();
    settings.set_evaluation_date(1981, 9, 17);
    let pinned = Date::from_ymd(1981, 9, 17).unwrap();

    let fmt = DateFormat::default();
    assert_eq!(Date::today().unwrap(), pinned);
    assert_eq!(fmt.parse_or_today("").unwrap(), pinned);
    assert_eq!(fmt.parse_or_today("not a date").unwrap(), pinned);
    assert_eq!(
        fmt.parse_or_today("2024-02-10").unwrap(),
        Date::from_ymd(2024, 2, 10).unwrap()
    );

    settings.reset_evaluation_date();
    assert_eq!(settings.evaluation_date(), None);
}
