//! Criterion benchmarks for the Syllabize segmenter.
//!
//! Covers the two hot paths:
//! - Word-level syllable segmentation (compound scan + vowel splitting)
//! - Full line transformation (tokenize, segment, reassemble)

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use syllabize::analysis::segmenter::SyllableSegmenter;
use syllabize::dictionary::Dictionary;
use syllabize::transform::NameTransformer;

/// A small word list shaped like the production corpus.
fn test_dictionary() -> Dictionary {
    Dictionary::from_words(vec![
        "spring", "field", "wood", "stone", "bridge", "ford", "castle", "church", "mill", "brook",
        "river", "lake", "hill", "dale", "glen", "marsh", "thorn", "ash", "oak", "elm", "berry",
        "black", "white", "green", "north", "south", "east", "west", "king", "queen", "fish",
        "ing",
    ])
}

/// Generate name-like inputs for benchmarking.
fn generate_test_names(count: usize) -> Vec<String> {
    let heads = ["Spring", "Black", "North", "Stone", "King", "Marsh", "Thorn"];
    let tails = ["field", "wood", "bridge", "castle", "brook", "ford", "ing"];

    let mut names = Vec::with_capacity(count);
    for i in 0..count {
        let head = heads[i % heads.len()];
        let tail = tails[(i / heads.len()) % tails.len()];
        names.push(format!("{head}{tail}"));
    }
    names
}

fn bench_segmenter(c: &mut Criterion) {
    let segmenter = SyllableSegmenter::new(test_dictionary());
    let names = generate_test_names(1000);

    let mut group = c.benchmark_group("segmenter");
    group.throughput(Throughput::Elements(names.len() as u64));
    group.bench_function("segment_1000_names", |b| {
        b.iter(|| {
            for name in &names {
                black_box(segmenter.segment(black_box(name)));
            }
        })
    });
    group.finish();
}

fn bench_transformer(c: &mut Criterion) {
    let transformer = NameTransformer::new(test_dictionary()).unwrap();
    let names = generate_test_names(500);
    let lines: Vec<String> = names
        .chunks(2)
        .map(|pair| pair.join("-upon-"))
        .collect();

    let mut group = c.benchmark_group("transformer");
    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("transform_lines", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(transformer.transform(black_box(line)).unwrap());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_segmenter, bench_transformer);
criterion_main!(benches);
