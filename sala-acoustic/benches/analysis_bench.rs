//! Benchmarks da análise de sala

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sala_acoustic::{
    aggregate, analyze, compute_modes, compute_rt, Catalog, RoomGeometry, SurfaceContribution,
};

fn office_surfaces() -> Vec<SurfaceContribution> {
    vec![
        SurfaceContribution::new("Gypsum", 15.0),
        SurfaceContribution::new("Gypsum", 12.0),
        SurfaceContribution::new("Glass", 14.97),
        SurfaceContribution::new("Gypsum", 12.0),
        SurfaceContribution::new("Carpet", 20.0),
        SurfaceContribution::new("Acoustic Ceiling Tile", 20.0),
    ]
}

fn bench_aggregate(c: &mut Criterion) {
    let surfaces = office_surfaces();

    c.bench_function("aggregate_6_surfaces", |b| {
        b.iter(|| aggregate(black_box(&surfaces)))
    });
}

fn bench_compute_rt(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let areas = aggregate(&office_surfaces());

    c.bench_function("compute_rt_6_bands", |b| {
        b.iter(|| compute_rt(&catalog, black_box(&areas), black_box(60.0)))
    });
}

fn bench_modes(c: &mut Criterion) {
    c.bench_function("compute_modes", |b| {
        b.iter(|| {
            compute_modes(
                black_box(5.0),
                black_box(4.0),
                black_box(3.0),
                black_box(60.0),
            )
        })
    });
}

fn bench_full_analysis(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let surfaces = office_surfaces();
    let geometry = RoomGeometry::new(5.0, 4.0, 3.0, 60.0);

    c.bench_function("analyze_office", |b| {
        b.iter(|| analyze(&catalog, black_box(&surfaces), black_box(geometry)))
    });
}

criterion_group!(
    benches,
    bench_aggregate,
    bench_compute_rt,
    bench_modes,
    bench_full_analysis
);
criterion_main!(benches);
