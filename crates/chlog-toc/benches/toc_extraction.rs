//! Benchmarks for version heading extraction.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use chlog_renderer::MarkdownConverter;
use chlog_toc::{HeadingFilter, find_version_headings};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate a changelog with `releases` version sections.
fn generate_changelog(releases: usize) -> String {
    let mut md = String::with_capacity(releases * 300);
    md.push_str("# Changelog\n\n## Unreleased\n\n");

    for i in (0..releases).rev() {
        md.push_str(&format!("## [1.{i}.0] - 2024-01-01\n\n"));
        md.push_str("### Added\n\n- New **feature** with `code`.\n\n");
        md.push_str("### Fixed\n\n- A bug. Contact <dev@example.com>.\n\n");
    }
    md
}

fn bench_extract_varying_sizes(c: &mut Criterion) {
    let converter = MarkdownConverter::default();
    let mut group = c.benchmark_group("extract_version_headings");

    for releases in [10, 100, 1000] {
        let html = converter.convert(&generate_changelog(releases));
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(releases), &html, |b, html| {
            b.iter(|| find_version_headings(html));
        });
    }
    group.finish();
}

fn bench_extract_restricted_levels(c: &mut Criterion) {
    let converter = MarkdownConverter::default();
    let html = converter.convert(&generate_changelog(100));
    let filter = HeadingFilter::new().with_levels(2, 2).unwrap();

    c.bench_function("extract_h2_only_100_releases", |b| {
        b.iter(|| filter.extract(&html));
    });
}

fn bench_convert_and_extract(c: &mut Criterion) {
    let converter = MarkdownConverter::default();
    let markdown = generate_changelog(100);

    c.bench_function("convert_and_extract_100_releases", |b| {
        b.iter(|| find_version_headings(&converter.convert(&markdown)));
    });
}

criterion_group!(
    benches,
    bench_extract_varying_sizes,
    bench_extract_restricted_levels,
    bench_convert_and_extract
);
criterion_main!(benches);
