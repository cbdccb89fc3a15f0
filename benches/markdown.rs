//! Benchmarks for markdown conversion.
//!
//! These benchmarks measure how long the page prose takes to become styled
//! terminal lines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use etl_docs_tui::content::Locale;
use etl_docs_tui::ui::{markdown, Theme};

fn bench_cloud_page(c: &mut Criterion) {
    let theme = Theme::default();
    let body = Locale::En.strings().cloud.body;
    c.bench_function("markdown_cloud_page", |b| {
        b.iter(|| markdown::to_lines(black_box(body), &theme))
    });
}

fn bench_local_page(c: &mut Criterion) {
    let theme = Theme::default();
    let body = Locale::Pt.strings().local.body;
    c.bench_function("markdown_local_page_pt", |b| {
        b.iter(|| markdown::to_lines(black_box(body), &theme))
    });
}

fn bench_inline(c: &mut Criterion) {
    let theme = Theme::default();
    let text = "Go to **IAM → Roles → Create Role** and attach `AmazonS3ReadOnlyAccess`, see [docs](https://docs.aws.amazon.com/)";
    c.bench_function("markdown_inline_spans", |b| {
        b.iter(|| markdown::inline(black_box(text), Default::default(), &theme))
    });
}

criterion_group!(benches, bench_cloud_page, bench_local_page, bench_inline);
criterion_main!(benches);
