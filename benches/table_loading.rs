//! Benchmarks for result table loading.
//!
//! These benchmarks measure CSV parsing with and without per-column type
//! inference on the bundled sample tables.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use etl_docs_tui::tables::{
    self, infer_dtype, load_first_time_login, load_login_aggregate, Tables,
};
use std::path::PathBuf;

fn tables_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tables")
}

fn bench_load_login_aggregate(c: &mut Criterion) {
    let path = tables_dir().join(tables::LOGIN_AGGREGATE_FILE);
    c.bench_function("load_login_aggregate_inferred", |b| {
        b.iter(|| load_login_aggregate(black_box(&path)))
    });
}

fn bench_load_first_time_login(c: &mut Criterion) {
    let path = tables_dir().join(tables::FIRST_TIME_LOGIN_FILE);
    c.bench_function("load_first_time_login_text", |b| {
        b.iter(|| load_first_time_login(black_box(&path)))
    });
}

fn bench_load_both(c: &mut Criterion) {
    let dir = tables_dir();
    c.bench_function("load_both_tables", |b| b.iter(|| Tables::load(black_box(&dir))));
}

fn bench_infer_dtype(c: &mut Criterion) {
    let column: Vec<String> = (0..1_000)
        .map(|i| if i % 97 == 0 { String::new() } else { i.to_string() })
        .collect();
    c.bench_function("infer_dtype_1000_with_missing", |b| {
        b.iter(|| infer_dtype(black_box(&column).iter().map(String::as_str)))
    });
}

criterion_group!(
    benches,
    bench_load_login_aggregate,
    bench_load_first_time_login,
    bench_load_both,
    bench_infer_dtype
);
criterion_main!(benches);
