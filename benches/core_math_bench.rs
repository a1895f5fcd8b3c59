use chart_scale::core::{BandConfig, LinearScale, band, bisect, ticks};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (0.0, 1_920.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.apply(black_box(4_321.123));
            let _ = scale.invert(px).expect("invert");
        })
    });
}

fn bench_linear_scale_apply_10k(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_001.0), (0.0, 1_920.0)).expect("valid scale");
    let values: Vec<f64> = (0..10_000).map(|i| i as f64 * 0.75).collect();

    c.bench_function("linear_scale_apply_10k", |b| {
        b.iter(|| {
            let _ = scale.apply_all(black_box(&values));
        })
    });
}

fn bench_ticks_and_nice(c: &mut Criterion) {
    c.bench_function("ticks_awkward_domain", |b| {
        b.iter(|| {
            let _ = ticks(black_box(-3.7), black_box(123.4), black_box(10)).expect("ticks");
        })
    });

    c.bench_function("nice_awkward_domain", |b| {
        b.iter(|| {
            let mut scale =
                LinearScale::new(black_box((0.1, 14.2)), (0.0, 1.0)).expect("valid scale");
            scale.nice(black_box(10)).expect("nice");
        })
    });
}

fn bench_band_and_bisect(c: &mut Criterion) {
    let config = BandConfig::new((0..1_000).collect::<Vec<u32>>(), (0.0, 1_920.0)).with_padding(0.1);
    c.bench_function("band_layout_1k", |b| {
        b.iter(|| {
            let _ = band(black_box(&config)).expect("band");
        })
    });

    let sorted: Vec<f64> = (0..100_000).map(|i| i as f64 * 0.5).collect();
    c.bench_function("bisect_100k", |b| {
        b.iter(|| {
            let _ = bisect(black_box(&sorted), black_box(&12_345.25));
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_linear_scale_apply_10k,
    bench_ticks_and_nice,
    bench_band_and_bisect
);
criterion_main!(benches);
