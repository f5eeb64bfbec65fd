//! Benchmark for the conversion hot path

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use tabcast::{Converter, MemorySource, Schema, ValueType};

fn mixed_source(rows: usize) -> MemorySource {
    let mut source = MemorySource::new(["id", "score", "label"]);
    for i in 0..rows {
        source.push_text_row([
            format!("{}", i % 100),
            format!("{}.5", i % 50),
            format!("row-{}", i % 10),
        ]);
    }
    source
}

fn mixed_schema() -> Schema {
    Schema::new()
        .with_column("id", ValueType::Int)
        .unwrap()
        .with_column("score", ValueType::Float)
        .unwrap()
        .with_column("label", ValueType::Text)
        .unwrap()
}

fn convert_benchmark(c: &mut Criterion) {
    let schema = mixed_schema();

    c.bench_function("convert_10k_mixed_rows", |b| {
        b.iter_batched(
            || mixed_source(10_000),
            |source| black_box(Converter::new().convert(source, &schema).unwrap()),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, convert_benchmark);
criterion_main!(benches);
