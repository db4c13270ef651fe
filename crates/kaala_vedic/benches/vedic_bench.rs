use criterion::{Criterion, black_box, criterion_group, criterion_main};

use kaala_vedic::{
    AyanamshaSystem, GeoLocation, RiseSetConfig, SunEvent, ayanamsha_deg, catalogue,
    compute_sun_event, karana_from_elongation, nakshatra_from_longitude, tithi_from_elongation,
    yoga_from_sum,
};

fn bench_classification(c: &mut Criterion) {
    c.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(302.938)))
    });
    c.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(36.756)))
    });
    c.bench_function("yoga_from_sum", |b| {
        b.iter(|| yoga_from_sum(black_box(130.573)))
    });
    c.bench_function("karana_from_elongation", |b| {
        b.iter(|| karana_from_elongation(black_box(302.938)))
    });
}

fn bench_ayanamsha(c: &mut Criterion) {
    c.bench_function("ayanamsha_deg_lahiri", |b| {
        b.iter(|| ayanamsha_deg(AyanamshaSystem::Lahiri, black_box(2_460_877.0)))
    });
    c.bench_function("ayanamsha_catalogue", |b| {
        b.iter(|| catalogue(black_box(2_460_877.0)))
    });
}

fn bench_riseset(c: &mut Criterion) {
    let location = GeoLocation::new(49.888, -119.496, 0.0);
    let config = RiseSetConfig::default();
    c.bench_function("compute_sun_event", |b| {
        b.iter(|| {
            compute_sun_event(
                black_box(2_460_876.5),
                &location,
                SunEvent::Sunrise,
                &config,
            )
        })
    });
}

criterion_group!(benches, bench_classification, bench_ayanamsha, bench_riseset);
criterion_main!(benches);
