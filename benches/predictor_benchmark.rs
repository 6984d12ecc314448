use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use showroom::{CategoryDomains, InputRecord, ModelStore, Predictor};

fn setup_benchmark_predictor(num_zip_codes: usize) -> Predictor {
    let domains = CategoryDomains {
        age_ranges: vec!["18–24".into(), "25–34".into(), "35–44".into(), "45+".into()],
        income_levels: vec![
            "Under $50,000".into(),
            "$50,000–$100,000".into(),
            "Over $100,000".into(),
        ],
        genders: vec!["Female".into(), "Male".into()],
        zip_codes: (0..num_zip_codes).map(|i| format!("{:05}", i)).collect(),
    };
    let feature_len = domains.feature_len();
    let classes: Vec<String> = (0..20).map(|i| format!("Model {}", i)).collect();
    let weights: Vec<Vec<f32>> = (0..classes.len())
        .map(|i| (0..feature_len).map(|j| ((i + j) % 7) as f32 * 0.1).collect())
        .collect();
    let bias: Vec<f32> = (0..classes.len()).map(|i| i as f32 * 0.05).collect();

    let store = ModelStore::new("bench", classes, domains, (5_000.0, 100_000.0), weights, bias)
        .unwrap();
    Predictor::new(Arc::new(store))
}

fn bench_prediction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Prediction");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    // Small ZIP domain, like a single-region model
    let predictor = setup_benchmark_predictor(10);
    let record = InputRecord::new("25–34", "Under $50,000", "Female", "00003", 25_000.0);
    group.bench_function("few_zip_codes", |b| {
        b.iter(|| predictor.predict(black_box(&record)).unwrap())
    });

    // Wide ZIP domain, like a national model
    let predictor = setup_benchmark_predictor(2_000);
    let record = InputRecord::new("25–34", "Under $50,000", "Female", "01500", 25_000.0);
    group.bench_function("many_zip_codes", |b| {
        b.iter(|| predictor.predict(black_box(&record)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_prediction);
criterion_main!(benches);
