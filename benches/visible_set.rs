// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the query pipeline and viewer navigation.
//!
//! Measures the performance of:
//! - Computing the visible set for each sort key
//! - Text search over titles, descriptions and tags
//! - Stepping the viewer through the visible set

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_gallery::application::browser::{Browser, BrowserOptions, Command};
use iced_gallery::application::query::{compute_visible, Direction, QueryState, SortKey};
use iced_gallery::domain::catalog::{Catalog, Item, ItemId};
use std::hint::black_box;

const CATEGORIES: [&str; 5] = ["prints", "posters", "photos", "frames", "cards"];

/// Builds a catalog of `count` items with varied dates, categories and tags.
fn synthetic_catalog(count: usize) -> Catalog {
    let items = (0..count)
        .map(|i| {
            let mut item = Item::new(
                i.to_string(),
                format!("Item {:05}", (i * 7919) % count),
                CATEGORIES[i % CATEGORIES.len()],
            )
            .with_description(format!("Description of item number {i}"))
            .with_tags([format!("tag{}", i % 13), format!("series{}", i % 4)]);
            // Every tenth item has no usable date.
            if i % 10 != 0 {
                item = item.with_date(format!(
                    "20{:02}-{:02}-{:02}",
                    10 + i % 15,
                    1 + i % 12,
                    1 + i % 28
                ));
            }
            item
        })
        .collect();
    Catalog::new(items).expect("synthetic ids are unique")
}

/// Benchmark computing the visible set with each sort key.
fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_set");

    for size in [100, 1_000, 10_000] {
        let catalog = synthetic_catalog(size);
        for sort in SortKey::ALL {
            let query = QueryState {
                sort,
                ..QueryState::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("sort_{sort}"), size),
                &query,
                |b, query| {
                    b.iter(|| black_box(compute_visible(&catalog, query)));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark text search combined with a category filter.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_set");
    let catalog = synthetic_catalog(10_000);

    let query = QueryState {
        search: "TAG7".to_string(),
        ..QueryState::default()
    };
    group.bench_function("search_tag", |b| {
        b.iter(|| black_box(compute_visible(&catalog, &query)));
    });

    group.finish();
}

/// Benchmark viewer steps, which recompute the visible set each time.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    for size in [100, 1_000] {
        let mut browser = Browser::new(synthetic_catalog(size), BrowserOptions::default());
        browser.dispatch(Command::Open(ItemId::new("1")));

        group.bench_with_input(BenchmarkId::new("step_next", size), &size, |b, _| {
            b.iter(|| black_box(browser.dispatch(Command::Step(Direction::Next))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort, bench_search, bench_navigate);
criterion_main!(benches);
