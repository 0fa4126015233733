//! Latency benchmarks for the keyword classifiers
//!
//! Classification runs on every debounce fire, so it has to stay well under
//! a millisecond even for long descriptions.
//!
//! Run with: cargo bench -p campuswatch-classifiers

use campuswatch_classifiers::{CategoryClassifier, IssueAnalyzer, UrgencyClassifier};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn test_cases() -> Vec<(&'static str, String)> {
    vec![
        ("short_none", "hello there".to_string()),
        ("short_match", "light bulb flickering in room 204".to_string()),
        (
            "medium_mixed",
            "The washroom near the main gate is dirty, the tap is leaking and the light \
             above the mirror is broken. Someone should fix it soon."
                .to_string(),
        ),
        ("long_repeated", "broken door near the stairs ".repeat(400)),
    ]
}

fn benchmark_category_classifier(c: &mut Criterion) {
    let classifier = CategoryClassifier::default();

    let mut group = c.benchmark_group("Category_Classifier");
    group.sample_size(100);

    for (name, text) in test_cases() {
        group.bench_with_input(BenchmarkId::new("classify", name), &text, |b, text| {
            b.iter(|| classifier.classify(black_box(text)));
        });
    }

    group.finish();
}

fn benchmark_urgency_classifier(c: &mut Criterion) {
    let classifier = UrgencyClassifier::default();

    let mut group = c.benchmark_group("Urgency_Classifier");
    group.sample_size(100);

    for (name, text) in test_cases() {
        group.bench_with_input(BenchmarkId::new("classify", name), &text, |b, text| {
            b.iter(|| classifier.classify(black_box(text)));
        });
    }

    group.finish();
}

fn benchmark_analyzer(c: &mut Criterion) {
    let analyzer = IssueAnalyzer::default();

    let mut group = c.benchmark_group("Issue_Analyzer");
    group.sample_size(100);

    for (name, text) in test_cases() {
        group.bench_with_input(BenchmarkId::new("analyze", name), &text, |b, text| {
            b.iter(|| analyzer.analyze(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_category_classifier,
    benchmark_urgency_classifier,
    benchmark_analyzer
);
criterion_main!(benches);
