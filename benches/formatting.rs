use commonlog::fmt::{FormatTemplate, FormatValues};
use commonlog::{Level, LogRecord};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_format_template_parse(c: &mut Criterion) {
    c.bench_function("FormatTemplate::parse", |b| {
        b.iter(|| FormatTemplate::parse(black_box("{timestamp} - {name} - {level} - {msg}")));
    });
}

fn bench_format_template_render(c: &mut Criterion) {
    let template = FormatTemplate::default();
    let values = FormatValues::new()
        .timestamp("2025-01-15 14:30:00,123")
        .name("test_logger")
        .level("INFO")
        .msg("Application started successfully");

    c.bench_function("FormatTemplate::render", |b| {
        b.iter(|| template.render(black_box(&values)));
    });
}

fn bench_record_values(c: &mut Criterion) {
    let record = LogRecord::new("test_logger", Level::Warning, "Disk usage at 91%");

    c.bench_function("LogRecord::values", |b| {
        b.iter(|| record.values(black_box("%Y-%m-%d %H:%M:%S,%3f")));
    });
}

criterion_group!(
    benches,
    bench_format_template_parse,
    bench_format_template_render,
    bench_record_values
);
criterion_main!(benches);
