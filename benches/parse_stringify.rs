use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jsontree::{from_str, parse, stringify, to_string, StringifyOptions, Value};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn products(size: usize) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU-{:05}", i),
            name: format!("Product \"{}\"", i),
            price: 9.99 + i as f64 * 0.25,
            quantity: i as u32 * 3,
        })
        .collect()
}

fn nested(depth: usize) -> String {
    let mut text = String::from("1");
    for i in 0..depth {
        text = format!("{{\"level{}\":[{}, true, null]}}", i, text);
    }
    text
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let text = r#"{"active":true,"email":"alice@example.com","id":123,"name":"Alice"}"#;

    c.bench_function("parse_simple_object", |b| b.iter(|| parse(black_box(text))));
    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(text)))
    });
}

fn benchmark_parse_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_array");

    for size in [10, 100, 1000].iter() {
        let text = to_string(&products(*size)).unwrap_or_default();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }

    group.finish();
}

fn benchmark_parse_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_nested");

    for depth in [8, 32, 60].iter() {
        let text = nested(*depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }

    group.finish();
}

fn benchmark_stringify(c: &mut Criterion) {
    let mut group = c.benchmark_group("stringify");
    let text = to_string(&products(500)).unwrap_or_default();
    let value = parse(&text).unwrap_or(Value::Null);

    group.bench_function("compact", |b| {
        b.iter(|| stringify(black_box(&value), &StringifyOptions::new()))
    });
    group.bench_function("pretty", |b| {
        b.iter(|| stringify(black_box(&value), &StringifyOptions::pretty()))
    });
    group.bench_function("serde_struct", |b| {
        let data = products(500);
        b.iter(|| to_string(black_box(&data)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_simple,
    benchmark_parse_array,
    benchmark_parse_nested,
    benchmark_stringify
);
criterion_main!(benches);
