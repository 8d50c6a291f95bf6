//! Benchmarks for cleaning and segmentation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lesstof::{clean, SegmentBounds, Segmenter, TextSegmenter};

fn sample_text(size: usize) -> String {
    // Paragraphs of a few sentences, with some extractor debris.
    let sentences = [
        "De cel is de kleinste eenheid van leven. ",
        "Mitochondriën leveren de energie.\t",
        "Waarom deelt een cel zich? ",
        "Het DNA ligt opgeslagen in de kern!  ",
        "Eiwitten worden gemaakt door ribosomen.\r\n",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(sentences[i % sentences.len()]);
        if i % 7 == 6 {
            text.push_str("\n\n\n");
        }
        i += 1;
    }
    text
}

fn bench_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("clean", size), &text, |b, text| {
            b.iter(|| clean(black_box(text)))
        });
    }

    group.finish();
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");

    for size in [1_000, 10_000, 100_000, 500_000] {
        let text = clean(&sample_text(size));
        let segmenter = TextSegmenter::default();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("default", size), &text, |b, text| {
            b.iter(|| segmenter.segment(black_box(text)))
        });
    }

    group.finish();
}

fn bench_sentence_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("sentence_fallback");

    // One paragraph, so every segment comes from sentence packing.
    let text = clean(&sample_text(100_000).replace("\n\n\n", " "));
    let segmenter = TextSegmenter::new(SegmentBounds::new(200, 600).unwrap());

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("single_paragraph", |b| {
        b.iter(|| segmenter.segment(black_box(&text)))
    });

    group.finish();
}

criterion_group!(benches, bench_clean, bench_segment, bench_sentence_fallback);
criterion_main!(benches);
