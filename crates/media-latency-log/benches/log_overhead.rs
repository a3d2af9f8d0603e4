//! Benchmark tests for producer-side logging overhead

use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use media_latency_log::{
    Category, LatencyEvent, LatencyLogger, LatencySink, LoggerConfig, SystemClock,
};

struct NullSink;

impl LatencySink for NullSink {
    fn enabled(&self) -> bool {
        true
    }

    fn write(&self, _line: &str) {}
}

struct DisabledSink;

impl LatencySink for DisabledSink {
    fn enabled(&self) -> bool {
        false
    }

    fn write(&self, _line: &str) {}
}

fn bench_event_creation(c: &mut Criterion) {
    c.bench_function("create_event", |b| {
        b.iter(|| {
            LatencyEvent::new(
                std::hint::black_box(Category::AudioBackend),
                std::hint::black_box(42),
                std::hint::black_box(1000),
            )
        })
    });
}

fn bench_log_dispatch(c: &mut Criterion) {
    let logger = LatencyLogger::new(
        LoggerConfig::default(),
        Arc::new(NullSink),
        Arc::new(SystemClock::new()),
    )
    .expect("default config is valid");
    logger.init();

    c.bench_function("log_enqueue", |b| {
        b.iter(|| {
            logger.log(
                std::hint::black_box(Category::AudioBackend),
                std::hint::black_box(1),
                std::hint::black_box(42),
            )
        })
    });

    logger.shutdown().expect("worker drains cleanly");
}

fn bench_log_disabled(c: &mut Criterion) {
    let logger = LatencyLogger::new(
        LoggerConfig::default(),
        Arc::new(DisabledSink),
        Arc::new(SystemClock::new()),
    )
    .expect("default config is valid");
    logger.init();

    c.bench_function("log_disabled", |b| {
        b.iter(|| {
            logger.log(
                std::hint::black_box(Category::NetStat),
                std::hint::black_box(1),
                std::hint::black_box(42),
            )
        })
    });

    logger.shutdown().expect("worker drains cleanly");
}

criterion_group!(
    benches,
    bench_event_creation,
    bench_log_dispatch,
    bench_log_disabled
);
criterion_main!(benches);
