use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nl_lunar::{day_label, day_of_term, to_lunar, MonthCache, MonthView, MonthViewOptions};
use nl_time::Date;

fn conversion_bench(c: &mut Criterion) {
    let early = Date::from_ymd(1901, 3, 4).unwrap();
    let late = Date::from_ymd(2099, 11, 28).unwrap();

    let mut group = c.benchmark_group("conversion");
    group.bench_function("to_lunar_1901", |b| b.iter(|| to_lunar(black_box(early))));
    group.bench_function("to_lunar_2099", |b| b.iter(|| to_lunar(black_box(late))));
    group.bench_function("day_of_term", |b| {
        b.iter(|| day_of_term(black_box(2024), black_box(23)))
    });
    group.finish();
}

fn label_bench(c: &mut Criterion) {
    let plain = Date::from_ymd(2024, 3, 1).unwrap();
    let eve = Date::from_ymd(2024, 2, 9).unwrap();

    let mut group = c.benchmark_group("labels");
    group.bench_function("plain_day", |b| b.iter(|| day_label(black_box(plain))));
    group.bench_function("new_years_eve", |b| b.iter(|| day_label(black_box(eve))));
    group.finish();
}

fn month_view_bench(c: &mut Criterion) {
    let options = MonthViewOptions::default();
    let cache = MonthCache::new();

    let mut group = c.benchmark_group("month_view");
    group.bench_function("build", |b| {
        b.iter(|| MonthView::build(black_box(2024), black_box(2), &options))
    });
    group.bench_function("cached", |b| {
        b.iter(|| cache.get_or_build(black_box(2024), black_box(2), &options))
    });
    group.finish();
}

criterion_group!(benches, conversion_bench, label_bench, month_view_bench);
criterion_main!(benches);
