//! Performance benchmarks for literal decoding
//!
//! Measures the lexers on their own and end-to-end delivery into the reference records:
//! - Entity lexing with raw property views
//! - Path lexing over growing chains
//! - Structural property decode through `BasicPath`
//!
//! Run with: cargo bench

use agscan::{
    basic::{BasicPath, BasicVertex},
    codec::{entity::lex_entity, path::lex_path},
    config::ScanConfig,
    properties::EntityKind,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn chain_literal(edges: usize) -> String {
    let mut parts = Vec::with_capacity(2 * edges + 1);
    for i in 0..=edges {
        parts.push(format!("v{i}[1.{i}]{{\"i\":{i},\"tags\":[\"a\",\"b]\"]}}"));
        if i < edges {
            parts.push(format!(
                "e{i}[2.{i}][1.{i},1.{}]{{\"note\":\"hop, [{i}]\"}}",
                i + 1
            ));
        }
    }
    format!("[{}]", parts.join(","))
}

fn bench_lex_entity(c: &mut Criterion) {
    let config = ScanConfig::default();
    let text = br#"person[3.1]{"name": "ann", "address": {"city": "Oslo", "lines": ["a", "b"]}}"#;

    c.bench_function("lex_entity", |b| {
        b.iter(|| lex_entity(black_box(text), 0, EntityKind::Vertex, &config).unwrap());
    });
}

fn bench_lex_path(c: &mut Criterion) {
    let config = ScanConfig::default();
    let mut group = c.benchmark_group("lex_path");
    for edges in [1usize, 16, 256] {
        let text = chain_literal(edges);
        group.bench_with_input(BenchmarkId::from_parameter(edges), &text, |b, text| {
            b.iter(|| lex_path(black_box(text.as_bytes()), 0, &config).unwrap());
        });
    }
    group.finish();
}

fn bench_scan_records(c: &mut Criterion) {
    let vertex_text = r#"person[3.1]{"name": "ann", "age": 41}"#;
    c.bench_function("scan_basic_vertex", |b| {
        let mut vertex = BasicVertex::default();
        b.iter(|| vertex.scan(black_box(vertex_text)).unwrap());
    });

    let path_text = chain_literal(16);
    c.bench_function("scan_basic_path", |b| {
        let mut path = BasicPath::default();
        b.iter(|| path.scan(black_box(&path_text)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_lex_entity,
    bench_lex_path,
    bench_scan_records
);
criterion_main!(benches);
