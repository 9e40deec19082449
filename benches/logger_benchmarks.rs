//! Criterion benchmarks for fanout_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fanout_logger::prelude::*;
use std::sync::Arc;

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("default", |b| {
        b.iter(|| black_box(Logger::new()));
    });

    group.bench_function("child_derivation", |b| {
        let parent = Logger::builder()
            .metadata(Metadata::new().with_field("service", "bench"))
            .transport(Arc::new(MemoryTransport::new()))
            .build()
            .unwrap();
        b.iter(|| {
            black_box(parent.with_metadata(Metadata::new().with_field("component", "worker")))
        });
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let sink = Arc::new(MemoryTransport::new());
    let logger = Logger::builder()
        .min_level(LogLevel::Info)
        .transport(sink.clone())
        .build()
        .unwrap();

    group.bench_function("filtered_out", |b| {
        b.iter(|| logger.debug(black_box("below minimum")));
    });

    group.bench_function("single_transport", |b| {
        b.iter(|| {
            logger.info(black_box("delivered message"));
            sink.clear();
        });
    });

    group.bench_function("with_metadata", |b| {
        b.iter(|| {
            logger.info_with(
                black_box("delivered message"),
                Metadata::new().with_field("request_id", 42),
            );
            sink.clear();
        });
    });

    group.finish();
}

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let entry = LogEntry::new(LogLevel::Info, "benchmark entry".to_string());
    let now = chrono::Utc::now();

    group.bench_function("timestamp_datetime", |b| {
        b.iter(|| black_box(TimestampFormat::DateTime.format(&now)));
    });

    group.bench_function("text_format", |b| {
        b.iter(|| black_box(OutputFormat::Text.format(&entry, "2025-01-08 10:30:45")));
    });

    group.bench_function("json_format", |b| {
        b.iter(|| black_box(OutputFormat::Json.format(&entry, "2025-01-08 10:30:45")));
    });

    group.finish();
}

criterion_group!(benches, bench_logger_creation, bench_dispatch, bench_formatting);
criterion_main!(benches);
