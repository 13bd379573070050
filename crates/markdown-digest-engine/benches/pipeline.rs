use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use markdown_digest_engine::{Markdown, MetadataExtension, SnippetExtension};
use pulldown_cmark::Parser;

fn generate_document(sections: usize) -> String {
    let mut doc = String::from("---\ntitle: Benchmark\ntags: [a, b, c]\n---\n");
    let body = "## Section\n\nParagraph with *some* content and a [link](x).\nWrapped line.\n\n- Bullet point\n  - Nested item\n\n> Quoted text.\n\n```rust\nfn example() {}\n```\n\n";
    for i in 0..sections {
        doc.push_str(&format!("# Part {i}\n\n"));
        doc.push_str(body);
    }
    doc
}

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("baseline");
    group.sample_size(10);

    let content = generate_document(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let events: Vec<_> = Parser::new(std::hint::black_box(&content)).collect();
            std::hint::black_box(events);
        });
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);

    let plain = Markdown::new();
    let full = Markdown::builder()
        .extension(MetadataExtension)
        .extension(SnippetExtension::new(200))
        .build();

    for sections in [10, 100] {
        let content = generate_document(sections);
        group.bench_with_input(BenchmarkId::new("plain", sections), &content, |b, src| {
            b.iter(|| std::hint::black_box(plain.convert(src)));
        });
        group.bench_with_input(BenchmarkId::new("digest", sections), &content, |b, src| {
            b.iter(|| std::hint::black_box(full.convert(src)));
        });
    }

    group.finish();
}

fn bench_snippet_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("snippet_capacity");
    group.sample_size(10);

    let content = generate_document(100);
    for max in [16, 200, 100_000] {
        let md = Markdown::builder().extension(SnippetExtension::new(max)).build();
        group.bench_with_input(BenchmarkId::from_parameter(max), &content, |b, src| {
            b.iter(|| std::hint::black_box(md.parse(src).context));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pulldown_cmark_baseline,
    bench_pipeline,
    bench_snippet_capacity
);
criterion_main!(benches);
