use criterion::{Criterion, black_box, criterion_group, criterion_main};

use kaala_model::normalize_360;
use kaala_panchanga::{
    DEFAULT_PRECISION_DAYS, PanchangaConfig, compute_panchanga, find_boundary_crossing,
};
use kaala_time::Instant;
use kaala_vedic::GeoLocation;

fn bench_transition(c: &mut Criterion) {
    let f = |jd: f64| normalize_360(5.0 + 12.19 * (jd - 2_460_876.5));
    c.bench_function("find_boundary_crossing", |b| {
        b.iter(|| find_boundary_crossing(black_box(2_460_876.5), f, 17.0, 2.0, DEFAULT_PRECISION_DAYS))
    });
}

fn bench_full_panchanga(c: &mut Criterion) {
    let instant = Instant::new(2025, 7, 20, 12, 0, 0.0, -7.0);
    let location = GeoLocation::new(49.888, -119.496, 0.0);
    let config = PanchangaConfig::default();
    c.bench_function("compute_panchanga", |b| {
        b.iter(|| compute_panchanga(black_box(&instant), &location, &config, None))
    });
}

criterion_group!(benches, bench_transition, bench_full_panchanga);
criterion_main!(benches);
