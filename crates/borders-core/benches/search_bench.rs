//! Criterion benchmarks for [`CountryMatcher::search`].
//!
//! Search runs on every keystroke, so both the exact-hit path and the fuzzy
//! fallback over the whole catalog are measured.
//!
//! Run with:
//! ```bash
//! cargo bench --package borders-core --bench search_bench
//! ```

use borders_core::{Catalog, CountryMatcher, LocaleTable};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn build_matcher(locale: &str) -> CountryMatcher {
    let catalog = Catalog::builtin().expect("built-in catalog must be valid");
    let table = LocaleTable::builtin(locale, &catalog).expect("built-in locale must be valid");
    CountryMatcher::new(&catalog, &table)
}

fn bench_search_exact(c: &mut Criterion) {
    let matcher = build_matcher("en");
    let none: &[&str] = &[];
    let mut group = c.benchmark_group("search");

    group.bench_function("exact_alias_uk", |b| {
        b.iter(|| matcher.search(black_box("UK"), none))
    });

    group.bench_function("exact_prefix_single_letter", |b| {
        b.iter(|| matcher.search(black_box("a"), none))
    });

    group.finish();
}

/// Typos fall through to the similarity scan over every name and alias.
fn bench_search_fuzzy(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_fuzzy");
    let none: &[&str] = &[];

    for locale in ["en", "de"] {
        let matcher = build_matcher(locale);
        group.bench_with_input(BenchmarkId::new("typo", locale), &"Gremany", |b, q| {
            b.iter(|| matcher.search(black_box(q), none))
        });
        group.bench_with_input(BenchmarkId::new("no_match", locale), &"qqqqqqqq", |b, q| {
            b.iter(|| matcher.search(black_box(q), none))
        });
    }

    group.finish();
}

fn bench_search_with_exclusions(c: &mut Criterion) {
    let matcher = build_matcher("en");
    let excluded = ["Germany", "France", "Spain", "Italy", "Austria", "Poland"];
    let mut group = c.benchmark_group("search_exclude");

    group.bench_function("six_excluded", |b| {
        b.iter(|| matcher.search(black_box("an"), black_box(&excluded[..])))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_search_exact,
    bench_search_fuzzy,
    bench_search_with_exclusions
);
criterion_main!(benches);
