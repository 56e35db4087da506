//! Benchmarks for template rendering.
//!
//! Run with: cargo bench -p weft-markup

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use weft_markup::{RenderOptions, render_line, tokenize};

// =============================================================================
// Test Data
// =============================================================================

/// ASCII-only template of roughly the given length, no markers.
fn ascii_template(len: usize) -> Vec<u8> {
    "The quick brown fox jumps over the lazy dog. "
        .bytes()
        .cycle()
        .take(len)
        .collect()
}

/// CJK text (three bytes per character).
fn cjk_template(chars: usize) -> Vec<u8> {
    "\u{4E2D}\u{6587}\u{6D4B}\u{8BD5}\u{6587}\u{672C}"
        .chars()
        .cycle()
        .take(chars)
        .collect::<String>()
        .into_bytes()
}

/// Marker-heavy template: a colour change every word.
fn marker_template(words: usize) -> Vec<u8> {
    let mut template = Vec::new();
    for i in 0..words {
        let color: &[u8] = if i % 2 == 0 { b"red" } else { b"blue" };
        template.extend_from_slice(b"$[");
        template.extend_from_slice(color);
        template.extend_from_slice(b"]word ");
    }
    template
}

/// Tab-heavy template.
fn tab_template(tabs: usize) -> Vec<u8> {
    let mut template = Vec::new();
    for _ in 0..tabs {
        template.extend_from_slice(b"col\t");
    }
    template
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_render_ascii(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/ascii");
    let options = RenderOptions::new();

    for len in [10, 100, 1000, 10000] {
        let template = ascii_template(len);
        group.throughput(Throughput::Bytes(template.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &template, |b, t| {
            b.iter(|| black_box(render_line(t, &options)))
        });
    }

    group.finish();
}

fn bench_render_cjk(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/cjk");
    let options = RenderOptions::new();

    for chars in [10, 100, 1000] {
        let template = cjk_template(chars);
        group.throughput(Throughput::Bytes(template.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(chars), &template, |b, t| {
            b.iter(|| black_box(render_line(t, &options)))
        });
    }

    group.finish();
}

fn bench_render_markers(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/markers");
    let options = RenderOptions::new();

    for words in [1, 10, 100] {
        let template = marker_template(words);
        group.throughput(Throughput::Bytes(template.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(words), &template, |b, t| {
            b.iter(|| black_box(render_line(t, &options)))
        });
    }

    group.finish();
}

fn bench_render_tabs(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/tabs");
    let options = RenderOptions::new();

    for tabs in [1, 10, 100] {
        let template = tab_template(tabs);
        group.throughput(Throughput::Bytes(template.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(tabs), &template, |b, t| {
            b.iter(|| black_box(render_line(t, &options)))
        });
    }

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    let test_cases = [
        ("ascii", ascii_template(1000)),
        ("markers", marker_template(100)),
        ("cjk", cjk_template(300)),
    ];

    for (name, template) in test_cases {
        group.throughput(Throughput::Bytes(template.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &template, |b, t| {
            b.iter(|| black_box(tokenize(t)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_ascii,
    bench_render_cjk,
    bench_render_markers,
    bench_render_tabs,
    bench_tokenize,
);

criterion_main!(benches);
