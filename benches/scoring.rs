use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use fieldmatch::{compute_match_result, edit_distance, token_set_ratio, FieldSpec};

const OCR_TEXT: &str =
    "HARRY POTTER and the Chamber of Secrets, J.K. Rowling. Bloomsbury, London 1998";

fn sample_specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(
            "Title",
            vec![
                "Harry Potter".into(),
                "Harry Potter and the Chamber of Secrets".into(),
            ],
            0.5,
        ),
        FieldSpec::new("Authors", vec!["J. K. Rowling".into()], 0.3),
        FieldSpec::new("Publisher", vec!["Bloomsbury".into()], 0.2),
    ]
}

fn bench_edit_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance");
    group.throughput(Throughput::Bytes(OCR_TEXT.len() as u64));
    group.bench_function("ocr_vs_title", |b| {
        b.iter(|| edit_distance(black_box(OCR_TEXT), black_box("harry potter and the sorcerer")))
    });
    group.finish();
}

fn bench_token_set_ratio(c: &mut Criterion) {
    c.bench_function("token_set_ratio/ocr_vs_title", |b| {
        b.iter(|| token_set_ratio(black_box(OCR_TEXT), black_box("Harry Potter")))
    });
}

fn bench_full_match(c: &mut Criterion) {
    let specs = sample_specs();
    c.bench_function("compute_match_result/three_fields", |b| {
        b.iter(|| compute_match_result(black_box(&specs), black_box(OCR_TEXT), 70.0, 60))
    });
}

criterion_group!(
    benches,
    bench_edit_distance,
    bench_token_set_ratio,
    bench_full_match
);
criterion_main!(benches);
