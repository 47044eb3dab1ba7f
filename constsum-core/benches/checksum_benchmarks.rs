//! Throughput of the normalize + evaluate pipeline

use constsum_core::{normalize, Alphabet, ChecksumConfig, Evaluator};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Generate a name list of the given length
fn generate_names(count: usize) -> Vec<String> {
    let names = [
        "Ada Lovelace",
        "José Martí",
        "Émilie du Châtelet",
        "Srinivasa Ramanujan",
        "Lise Meitner",
    ];

    names
        .iter()
        .cycle()
        .take(count)
        .map(|s| s.to_string())
        .collect()
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    for alphabet in Alphabet::ALL {
        let config = ChecksumConfig::builder()
            .alphabet(alphabet)
            .lowercase(true)
            .build();

        for count in [10, 100, 1000].iter() {
            let names = generate_names(*count);
            group.bench_with_input(
                BenchmarkId::new(alphabet.name(), count),
                &names,
                |b, names| {
                    b.iter(|| {
                        for name in names {
                            black_box(config.compute(black_box(name)));
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

fn benchmark_stages(c: &mut Criterion) {
    let text = generate_names(100).join(" ");
    let folded = normalize::fold_accents(&text);
    let evaluator = Evaluator::new(Alphabet::Latin, false);

    c.bench_function("fold_accents", |b| {
        b.iter(|| normalize::fold_accents(black_box(&text)))
    });
    c.bench_function("to_greek", |b| {
        b.iter(|| normalize::to_greek(black_box(&folded)))
    });
    c.bench_function("evaluate_latin", |b| {
        b.iter(|| evaluator.evaluate(black_box(&folded)))
    });
}

criterion_group!(benches, benchmark_pipeline, benchmark_stages);
criterion_main!(benches);
