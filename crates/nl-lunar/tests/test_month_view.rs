//! Integration tests for month pages and the page cache.

use std::sync::Arc;
use std::thread;

use nl_lunar::month_view::cache_key;
use nl_lunar::{CellKind, MonthCache, MonthView, MonthViewOptions};
use nl_time::{Date, Weekday};

fn monday_first() -> MonthViewOptions {
    MonthViewOptions {
        first_day: Weekday::Monday,
        ..MonthViewOptions::default()
    }
}

#[test]
fn every_page_is_whole_weeks() {
    for options in [MonthViewOptions::default(), monday_first()] {
        for year in [1950, 2000, 2024, 2100] {
            for month in 1..=12 {
                let view = MonthView::build(year, month, &options).unwrap();
                let cells = view.cells();
                assert_eq!(cells.len() % 7, 0, "{year}-{month}");
                assert!((28..=42).contains(&cells.len()));
                assert_eq!(cells[0].column, 0);
                assert_eq!(cells[0].date.weekday(), options.first_day);
                for pair in cells.windows(2) {
                    assert_eq!(pair[1].date - pair[0].date, 1);
                    assert_eq!(pair[1].column, (pair[0].column + 1) % 7);
                }
                assert!(view.weeks().iter().all(|w| w.len() == 7));
            }
        }
    }
}

#[test]
fn kinds_are_ordered() {
    let view = MonthView::build(2024, 9, &MonthViewOptions::default()).unwrap();
    // 2024-09-01 is a Sunday: the page opens on it.
    assert_eq!(view.cells()[0].kind, CellKind::Current);
    let kinds: Vec<_> = view.cells().iter().map(|c| c.kind).collect();
    let first_next = kinds.iter().position(|k| *k == CellKind::Next).unwrap();
    assert!(kinds[..first_next].iter().all(|k| *k == CellKind::Current));
    assert!(kinds[first_next..].iter().all(|k| *k == CellKind::Next));
    assert_eq!(view.current_days().count(), 30);
    let mid_autumn = view.cell(Date::from_ymd(2024, 9, 17).unwrap()).unwrap();
    assert_eq!(mid_autumn.label, "中秋节");
    assert!(!mid_autumn.is_weekend);
}

#[test]
fn page_after_window_has_no_labels_past_it() {
    let view = MonthView::build(2100, 12, &MonthViewOptions::default()).unwrap();
    for cell in view.cells() {
        let past = cell.date > Date::from_ymd(2100, 12, 31).unwrap();
        assert_eq!(cell.label.is_empty(), past, "{}", cell.date);
        assert_eq!(cell.in_range, !past, "{}", cell.date);
    }
}

#[test]
fn global_cache_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                MonthCache::global()
                    .get_or_build(2031, 7, &MonthViewOptions::default())
                    .unwrap()
            })
        })
        .collect();
    let views: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for view in &views[1..] {
        assert!(Arc::ptr_eq(&views[0], view));
    }
    assert!(MonthCache::global().get(&cache_key(2031, 7)).is_some());
}
