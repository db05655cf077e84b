//! Scoring and pipeline benchmarks over the shipped catalog.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use find7_catalog::CatalogStore;
use find7_search::{apply, levenshtein_distance, score_item, FilterSet, SortBy};

fn bench_levenshtein(c: &mut Criterion) {
    c.bench_function("levenshtein_title_vs_query", |b| {
        b.iter(|| {
            levenshtein_distance(
                black_box("performance pick #1"),
                black_box("performince"),
            )
        })
    });
}

fn bench_score_catalog(c: &mut Criterion) {
    let catalog = CatalogStore::builtin();
    c.bench_function("score_full_catalog", |b| {
        b.iter(|| {
            for item in catalog.all_items() {
                black_box(score_item(item, black_box("premium pick")));
            }
        })
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let catalog = CatalogStore::builtin();
    let filters = FilterSet {
        price: Some((50.0, 400.0)),
        sort: SortBy::PriceLow,
        ..FilterSet::default()
    };
    c.bench_function("pipeline_query_price_sort", |b| {
        b.iter(|| apply(catalog.all_items(), black_box("pick"), black_box(&filters)))
    });
}

criterion_group!(benches, bench_levenshtein, bench_score_catalog, bench_pipeline);
criterion_main!(benches);
