use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use plasma_fractal::fractal::{FractalGenerator, FractalParams};
use plasma_fractal::grid::Grid;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark: full generation across grid sizes
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in [64u32, 256, 1024] {
        let params = FractalParams::new(0.28, 255.0, size);
        let mut generator = FractalGenerator::new(params).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                black_box(generator.generate(&mut rng).filled_count());
            })
        });
    }

    group.finish();
}

/// Benchmark: parallel placeholder fill
fn bench_grid_init(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_init");

    for dim in [257usize, 1025, 4097] {
        group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |b, &dim| {
            b.iter(|| black_box(Grid::new(dim, dim)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_grid_init);
criterion_main!(benches);
