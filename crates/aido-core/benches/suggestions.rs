use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use aido_core::words::WordIndex;

const PREFIXES: &[(&str, &str)] = &[
    ("one_char", "t"),
    ("two_char", "th"),
    ("narrow", "thro"),
    ("no_match", "zq"),
];

fn bench_smart(c: &mut Criterion) {
    let index = WordIndex::new(aido_core::words::builtin_words(), 10);
    let mut group = c.benchmark_group("words/smart");
    for &(label, prefix) in PREFIXES {
        group.bench_with_input(BenchmarkId::new(label, prefix.len()), &prefix, |b, &prefix| {
            b.iter(|| index.smart_suggestions(prefix, 6));
        });
    }
    group.finish();
}

fn bench_plain(c: &mut Criterion) {
    let index = WordIndex::new(aido_core::words::builtin_words(), 10);
    let mut group = c.benchmark_group("words/plain");
    for &(label, prefix) in PREFIXES {
        group.bench_with_input(BenchmarkId::new(label, prefix.len()), &prefix, |b, &prefix| {
            b.iter(|| index.suggestions(prefix, 6));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_smart, bench_plain);
criterion_main!(benches);
