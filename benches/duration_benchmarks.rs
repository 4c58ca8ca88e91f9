//! Benchmarks for the duration codec and paginator.

#![allow(missing_docs, clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use recipe_book::duration::{is_valid_duration, parse_iso8601_duration, pretty_print_duration};
use recipe_book::pagination::{compute_window, trim_to_page, PaginationRequest};

fn bench_duration(c: &mut Criterion) {
    c.bench_function("parse_iso8601_duration", |b| {
        b.iter(|| parse_iso8601_duration(black_box(Some("P1Y2M3DT4H5M6S"))));
    });

    c.bench_function("is_valid_duration", |b| {
        b.iter(|| is_valid_duration(black_box(Some("P1Y2M3W4DT5H6M7S"))));
    });

    let parsed = parse_iso8601_duration(Some("P1Y2M3DT4H5M6S")).unwrap();
    c.bench_function("pretty_print_duration", |b| {
        b.iter(|| pretty_print_duration(black_box(&parsed)));
    });
}

fn bench_pagination(c: &mut Criterion) {
    c.bench_function("compute_window", |b| {
        b.iter(|| compute_window(black_box(&PaginationRequest::new(7, 25))));
    });

    c.bench_function("trim_to_page", |b| {
        b.iter(|| trim_to_page(black_box((0..101).collect::<Vec<u32>>()), 100));
    });
}

criterion_group!(benches, bench_duration, bench_pagination);
criterion_main!(benches);
