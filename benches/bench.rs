//! Criterion benchmarks for Glosa.
//!
//! Covers the hot paths of a categorization run:
//! - Text normalization
//! - Classification, single and batched
//! - Confidence scoring
//! - Learning passes

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use glosa::analysis::{TextNormalizer, normalize};
use glosa::classification::{Classifier, Comment, ConfidenceCalculator};
use glosa::knowledge::KnowledgeBase;
use glosa::learning::WeightLearner;
use glosa::lexicon::Lexicon;
use std::hint::black_box;

/// Generate comments for benchmarking.
fn generate_test_comments(count: usize) -> Vec<String> {
    let words = vec![
        "mi", "maleta", "llegó", "rota", "la", "página", "está", "muy", "lenta", "no", "pude",
        "pagar", "con", "tarjeta", "vuelo", "retrasado", "asiento", "reserva", "error", "nombre",
        "pasajero", "cambio", "fecha", "tarifa", "reembolso", "horrible", "excelente", "servicio",
        "atención", "aeropuerto",
    ];

    let mut comments = Vec::with_capacity(count);
    for i in 0..count {
        let length = 6 + (i % 15);
        let comment: Vec<&str> = (0..length)
            .map(|j| words[(i * 7 + j * 13) % words.len()])
            .collect();
        comments.push(comment.join(" "));
    }
    comments
}

/// Label each comment with a (category, type) pair from the built-in lexicon.
fn generate_labeled_comments(texts: &[String]) -> Vec<Comment> {
    let labels = [
        ("Equipaje", "Daño"),
        ("Website", "Lentitud"),
        ("Proceso_Pago", "Error"),
        ("Datos_Pasajero", "Error"),
    ];
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let (category, type_id) = labels[i % labels.len()];
            Comment::labeled(text.as_str(), category, type_id)
        })
        .collect()
}

fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");
    let texts = generate_test_comments(1000);
    let normalizer = TextNormalizer::spanish().unwrap();

    group.bench_function("normalize_single_comment", |b| {
        b.iter(|| black_box(normalize(black_box(&texts[0]))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("normalize_batch_comments", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let _ = black_box(normalizer.normalize(black_box(text)));
            }
        })
    });

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");
    let lexicon = Lexicon::builtin().unwrap();
    let knowledge = KnowledgeBase::new();
    let classifier = Classifier::new(&lexicon, &knowledge);
    let texts = generate_test_comments(1000);

    group.bench_function("classify_single_comment", |b| {
        b.iter(|| black_box(classifier.classify(black_box(&texts[0]))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("classify_sequential", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let _ = black_box(classifier.classify(text));
            }
        })
    });

    let batch: Vec<Option<&str>> = texts.iter().take(1000).map(|t| Some(t.as_str())).collect();
    group.throughput(Throughput::Elements(batch.len() as u64));
    group.bench_function("classify_batch_parallel", |b| {
        b.iter(|| black_box(classifier.classify_batch(black_box(&batch))))
    });

    group.finish();
}

fn bench_confidence(c: &mut Criterion) {
    let mut group = c.benchmark_group("confidence");
    let lexicon = Lexicon::builtin().unwrap();
    let texts = generate_test_comments(500);
    let comments = generate_labeled_comments(&texts);

    let empty = KnowledgeBase::new();
    let calculator = ConfidenceCalculator::new(&lexicon, &empty);
    group.throughput(Throughput::Elements(comments.len() as u64));
    group.bench_function("confidence_default_weights", |b| {
        b.iter(|| {
            for comment in &comments {
                let _ = black_box(calculator.confidence(comment));
            }
        })
    });

    let mut learned = KnowledgeBase::new();
    WeightLearner::new(&lexicon).learn(&mut learned, &comments);
    let calculator = ConfidenceCalculator::new(&lexicon, &learned);
    group.bench_function("confidence_learned_knowledge", |b| {
        b.iter(|| {
            for comment in &comments {
                let _ = black_box(calculator.confidence(comment));
            }
        })
    });

    group.finish();
}

fn bench_learning(c: &mut Criterion) {
    let mut group = c.benchmark_group("learning");
    group.sample_size(20);
    let lexicon = Lexicon::builtin().unwrap();
    let texts = generate_test_comments(500);
    let comments = generate_labeled_comments(&texts);
    let learner = WeightLearner::new(&lexicon);

    group.throughput(Throughput::Elements(comments.len() as u64));
    group.bench_function("learn_fresh_knowledge", |b| {
        b.iter_with_setup(KnowledgeBase::new, |mut knowledge| {
            black_box(learner.learn(&mut knowledge, &comments))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalization,
    bench_classification,
    bench_confidence
);

// Separate group for slower benchmarks
criterion_group!(slow_benches, bench_learning);

criterion_main!(benches, slow_benches);
