//! Criterion benchmarks for the void probability estimator.
//!
//! Benchmarks cover:
//! - Distance transform (plain and wrapped paths)
//! - Sequential estimation with varying catalogue sizes
//! - Sequential vs parallel estimation over a radius list

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vpf_kernel::input::{radius_range, uniform_catalogue};
use vpf_kernel::mc::{estimate_parallel, estimate_with};
use vpf_kernel::rng::VpfRng;
use vpf_kernel::torus::{toroidal_distance, ShiftVector};

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("toroidal_distance");

    let interior = [0.5, 0.5, 0.5];
    let interior_shift = ShiftVector::new(interior, 0.1);
    group.bench_function("plain", |b| {
        b.iter(|| toroidal_distance(black_box(interior), black_box([0.55, 0.48, 0.52]), &interior_shift))
    });

    let corner = [0.01, 0.99, 0.01];
    let corner_shift = ShiftVector::new(corner, 0.1);
    group.bench_function("wrapped", |b| {
        b.iter(|| toroidal_distance(black_box(corner), black_box([0.98, 0.02, 0.97]), &corner_shift))
    });

    group.finish();
}

fn bench_catalogue_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_catalogue_size");

    for &n_galaxies in &[100usize, 1_000, 10_000] {
        let galaxies = uniform_catalogue(&mut VpfRng::from_seed(1), n_galaxies);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_galaxies),
            &galaxies,
            |b, galaxies| {
                b.iter(|| {
                    let mut rng = VpfRng::from_seed(42);
                    estimate_with(&mut rng, black_box(&[0.05]), galaxies, 100)
                })
            },
        );
    }

    group.finish();
}

fn bench_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_radius_list");
    let galaxies = uniform_catalogue(&mut VpfRng::from_seed(2), 250);
    let radii = radius_range(0.005, 0.35, 0.005).unwrap_or_default();

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let mut rng = VpfRng::from_seed(42);
            estimate_with(&mut rng, black_box(&radii), &galaxies, 100)
        })
    });

    group.bench_function("parallel", |b| {
        let base = VpfRng::from_seed(42);
        b.iter(|| estimate_parallel(&base, black_box(&radii), &galaxies, 100))
    });

    group.finish();
}

criterion_group!(benches, bench_distance, bench_catalogue_size, bench_execution);
criterion_main!(benches);
