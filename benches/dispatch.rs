use criterion::{Criterion, criterion_group, criterion_main};
use linelog::{Level, Logger, Sink, SourceInfo, Value};
use std::hint::black_box;
use std::io;

fn logger(caller_info: bool, source_info: SourceInfo, colorize: bool) -> Logger {
    Logger::builder()
        .level(Level::Info)
        .sink(Sink::writer(io::sink()), colorize)
        .caller_info(caller_info)
        .source_info(source_info)
        .build()
}

fn bench_gated(c: &mut Criterion) {
    let logger = logger(true, SourceInfo::Short, true);
    let mut group = c.benchmark_group("gated");

    group.bench_function("debugf", |b| {
        b.iter(|| logger.debugf(black_box("n=%d"), &[Value::from(1)]));
    });
    group.bench_function("debugf!", |b| {
        b.iter(|| linelog::debugf!(logger, "n=%d", black_box(1)));
    });

    group.finish();
}

fn bench_formatted(c: &mut Criterion) {
    let mut group = c.benchmark_group("infof");

    let plain = logger(false, SourceInfo::None, false);
    group.bench_function("bare", |b| {
        b.iter(|| plain.infof(black_box("request %s took %dms"), &["/api".into(), 12.into()]));
    });

    let annotated = logger(true, SourceInfo::Short, true);
    group.bench_function("caller+source+color", |b| {
        b.iter(|| {
            linelog::infof!(annotated, "request %s took %dms", black_box("/api"), 12)
        });
    });

    group.finish();
}

fn bench_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("infoln");

    let plain = logger(false, SourceInfo::None, false);
    group.bench_function("bare", |b| {
        b.iter(|| plain.infoln(&["request".into(), black_box("/api").into(), 12.into()]));
    });

    let annotated = logger(true, SourceInfo::Long, false);
    group.bench_function("caller+source", |b| {
        b.iter(|| linelog::infoln!(annotated, "request", black_box("/api"), 12));
    });

    group.finish();
}

fn bench_raw(c: &mut Criterion) {
    let logger = logger(false, SourceInfo::None, false);
    let mut group = c.benchmark_group("raw");

    group.bench_function("tagged", |b| {
        b.iter(|| logger.rawf(black_box("[W] disk at %d%%"), &[Value::from(91)]));
    });
    group.bench_function("verbatim", |b| {
        b.iter(|| logger.rawf(black_box("disk at %d%%\n"), &[Value::from(91)]));
    });

    group.finish();
}

criterion_group!(benches, bench_gated, bench_formatted, bench_line, bench_raw);
criterion_main!(benches);
