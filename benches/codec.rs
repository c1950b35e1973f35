//! Codec Benchmark for FlashKV CLI
//!
//! This benchmark measures the per-request work done on the client:
//! tokenizing input, encoding commands, decoding and rendering replies.

use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use flashkv_cli::protocol::{encode_command, tokenize, RespDecoder, RespValue};
use flashkv_cli::render::render;

/// A reply shaped like `LRANGE` over `n` short elements
fn flat_array_reply(n: usize) -> Vec<u8> {
    RespValue::array(
        (0..n)
            .map(|i| RespValue::bulk_string(Bytes::from(format!("value:{}", i))))
            .collect(),
    )
    .serialize()
}

/// A reply with `depth` arrays nested in each other, two elements per level
fn nested_array_reply(depth: usize) -> Vec<u8> {
    let mut value = RespValue::integer(0);
    for i in 0..depth {
        value = RespValue::array(vec![RespValue::integer(i as i64), value]);
    }
    value.serialize()
}

/// Benchmark input tokenizing and command encoding
fn bench_request(c: &mut Criterion) {
    let mut group = c.benchmark_group("request");
    group.throughput(Throughput::Elements(1));

    group.bench_function("tokenize", |b| {
        b.iter(|| black_box(tokenize(black_box(r#"SET "user:101 name" Ariz EX 60"#))));
    });

    group.bench_function("encode_small", |b| {
        let tokens = vec!["SET", "user:101", "Ariz"];
        b.iter(|| black_box(encode_command(black_box(&tokens))));
    });

    group.bench_function("encode_large", |b| {
        let value = "x".repeat(64 * 1024); // 64KB value
        let tokens = vec!["SET", "big", value.as_str()];
        b.iter(|| black_box(encode_command(black_box(&tokens))));
    });

    group.finish();
}

/// Benchmark reply decoding
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(1));

    let simple = Bytes::from_static(b"+OK\r\n");
    group.bench_function("simple_string", |b| {
        b.iter(|| black_box(RespDecoder::new(simple.clone()).decode_next().unwrap()));
    });

    let bulk = Bytes::from(RespValue::bulk_string("x".repeat(64 * 1024)).serialize());
    group.bench_function("bulk_string_64k", |b| {
        b.iter(|| black_box(RespDecoder::new(bulk.clone()).decode_next().unwrap()));
    });

    let flat = Bytes::from(flat_array_reply(1_000));
    group.bench_function("array_1000", |b| {
        b.iter(|| black_box(RespDecoder::new(flat.clone()).decode_next().unwrap()));
    });

    let nested = Bytes::from(nested_array_reply(64));
    group.bench_function("nested_64", |b| {
        b.iter(|| black_box(RespDecoder::new(nested.clone()).decode_next().unwrap()));
    });

    group.finish();
}

/// Benchmark reply rendering
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    let (flat, _) = flashkv_cli::decode_reply(&flat_array_reply(1_000)).unwrap();
    group.bench_function("array_1000", |b| {
        b.iter(|| black_box(render(black_box(&flat))));
    });

    let (nested, _) = flashkv_cli::decode_reply(&nested_array_reply(64)).unwrap();
    group.bench_function("nested_64", |b| {
        b.iter(|| black_box(render(black_box(&nested))));
    });

    group.finish();
}

criterion_group!(benches, bench_request, bench_decode, bench_render);

criterion_main!(benches);
