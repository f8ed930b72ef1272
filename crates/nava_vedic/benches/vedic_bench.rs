use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nava_vedic::{
    Ayanamsha, HouseSystem, ascendant_deg, compute_cusps, house_of, rashi_from_longitude,
    sidereal_from_tropical,
};

fn ayanamsha_bench(c: &mut Criterion) {
    let t = 0.24;

    let mut group = c.benchmark_group("ayanamsha");
    group.bench_function("lahiri", |b| {
        b.iter(|| Ayanamsha::Lahiri.at_centuries(black_box(t)))
    });
    group.bench_function("sidereal_from_tropical", |b| {
        b.iter(|| sidereal_from_tropical(black_box(123.456), Ayanamsha::Lahiri, black_box(t)))
    });
    group.finish();
}

fn zodiac_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("zodiac");
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(211.75)))
    });
    group.finish();
}

fn house_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("houses");
    group.bench_function("ascendant", |b| {
        b.iter(|| ascendant_deg(black_box(143.2), black_box(28.6)))
    });
    group.bench_function("placidus_cusps", |b| {
        b.iter(|| {
            compute_cusps(
                HouseSystem::Placidus,
                black_box(123.0),
                black_box(33.0),
                black_box(30.0),
                black_box(28.6),
                black_box(24.1),
            )
        })
    });
    let cusps = compute_cusps(HouseSystem::Placidus, 123.0, 33.0, 30.0, 28.6, 24.1).unwrap();
    group.bench_function("house_of", |b| {
        b.iter(|| house_of(black_box(&cusps), black_box(211.75)))
    });
    group.finish();
}

criterion_group!(benches, ayanamsha_bench, zodiac_bench, house_bench);
criterion_main!(benches);
