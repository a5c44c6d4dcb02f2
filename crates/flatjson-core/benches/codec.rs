use criterion::{criterion_group, criterion_main, Criterion};
use flatjson_core::{parse, serialize, Document, Value};
use std::hint::black_box;

/// A wide document in the shape of the original throughput workload: many
/// short word keys, mostly string values with some numbers mixed in.
fn wide_document(entries: usize) -> Document {
    (0..entries)
        .map(|i| {
            let value = match i % 4 {
                0 => Value::Integer(i as i64),
                1 => Value::Float(i as f64 / 8.0),
                _ => Value::String(format!("word{i}")),
            };
            (format!("key{i}"), value)
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let text = serialize(&wide_document(2_000)).unwrap();
    c.bench_function("parse_2k_entries", |b| {
        b.iter(|| parse(black_box(&text)).unwrap());
    });
}

fn bench_serialize(c: &mut Criterion) {
    let doc = wide_document(2_000);
    c.bench_function("serialize_2k_entries", |b| {
        b.iter(|| serialize(black_box(&doc)).unwrap());
    });
}

fn bench_serde_json_baseline(c: &mut Criterion) {
    let text = serialize(&wide_document(2_000)).unwrap();
    c.bench_function("serde_json_parse_2k_entries", |b| {
        b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(&text)).unwrap());
    });
}

criterion_group!(benches, bench_parse, bench_serialize, bench_serde_json_baseline);
criterion_main!(benches);
