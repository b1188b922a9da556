//! Criterion benchmarks for the market pipeline hot path.
//!
//! Benchmarks:
//! 1. Series build over a month of records
//! 2. Full derivation (series + momentum + enrichment + synthesis)
//! 3. Pagination slicing over a large record set

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use agrolens_core::present::paginate;
use agrolens_core::sample::generate_records;
use agrolens_core::series::build_series;
use agrolens_core::signals::{compute_momentum, enrich, synthesize};
use chrono::NaiveDate;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn bench_build_series(c: &mut Criterion) {
    let records = generate_records("Kerala_Kottayam", "Banana", start(), 30);
    c.bench_function("build_series_30d", |b| {
        b.iter(|| build_series(black_box(&records), black_box(14)).unwrap())
    });
}

fn bench_full_derivation(c: &mut Criterion) {
    let records = generate_records("Kerala_Kottayam", "Banana", start(), 30);
    c.bench_function("derive_summary_30d", |b| {
        b.iter(|| {
            let series = build_series(black_box(&records), 14).unwrap();
            let momentum = compute_momentum(&series);
            let enriched = enrich(&records, &series);
            synthesize(enriched.trend, enriched.buyer_signal, momentum.momentum)
        })
    });
}

fn bench_pagination(c: &mut Criterion) {
    let records = generate_records("Punjab_Ludhiana", "Wheat", start(), 365);
    c.bench_function("paginate_365d_page3", |b| {
        b.iter(|| paginate(black_box(&records), black_box(3), black_box(50)))
    });
}

criterion_group!(
    benches,
    bench_build_series,
    bench_full_derivation,
    bench_pagination
);
criterion_main!(benches);
