/**
 * Performance benchmarks for pencil-noise
 *
 * Run with:
 *   cargo bench
 *
 * View HTML reports in:
 *   target/criterion/report/index.html
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pencil_noise::{EdgeMode, GaussianBlur, PencilNoiseConfig, PencilNoiseGenerator, StripePattern};

/// Benchmark full texture generation for different sizes
fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for size in [64, 128, 256].iter() {
        let config = PencilNoiseConfig {
            size: *size,
            seed: Some(42),
            ..Default::default()
        };

        group.bench_with_input(BenchmarkId::new("five_layers", size), size, |b, _| {
            let generator = PencilNoiseGenerator::new(config.clone()).unwrap();
            b.iter(|| black_box(generator.generate().unwrap()));
        });
    }

    group.finish();
}

/// Benchmark reflect blur against FFT and spatial wrap blur
fn bench_gaussian_blur(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian_blur");

    let data_128: Vec<f32> = (0..128 * 128).map(|i| ((i * 31) % 97) as f32 / 97.0).collect();
    let data_120: Vec<f32> = (0..120 * 120).map(|i| ((i * 31) % 97) as f32 / 97.0).collect();

    let reflect = GaussianBlur::new(128, 2.0, EdgeMode::Reflect);
    group.bench_function("reflect_128x128", |b| {
        b.iter(|| black_box(reflect.apply(&data_128)))
    });

    // FFT-optimized (power of two)
    let wrap_fft = GaussianBlur::new(128, 2.0, EdgeMode::Wrap);
    group.bench_function("wrap_fft_128x128", |b| {
        b.iter(|| black_box(wrap_fft.apply(&data_128)))
    });

    // Spatial domain (non-power of two)
    let wrap_spatial = GaussianBlur::new(120, 2.0, EdgeMode::Wrap);
    group.bench_function("wrap_spatial_120x120", |b| {
        b.iter(|| black_box(wrap_spatial.apply(&data_120)))
    });

    group.finish();
}

/// Benchmark the blur sigma schedule of successive layers
fn bench_sigma_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("sigma_values");
    let data: Vec<f32> = (0..64 * 64).map(|i| ((i * 17) % 53) as f32 / 53.0).collect();

    for sigma in [1.0f32, 2.0, 3.0].iter() {
        let blur = GaussianBlur::new(64, *sigma, EdgeMode::Reflect);
        group.bench_with_input(BenchmarkId::new("sigma", sigma), sigma, |b, _| {
            b.iter(|| black_box(blur.apply(&data)))
        });
    }

    group.finish();
}

/// Benchmark stripe grating rendering
fn bench_stripes(c: &mut Criterion) {
    let pattern = StripePattern::new(0.8, 20.0);
    c.bench_function("stripes_256x256", |b| b.iter(|| black_box(pattern.render(256))));
}

criterion_group!(
    benches,
    bench_generation,
    bench_gaussian_blur,
    bench_sigma_values,
    bench_stripes
);
criterion_main!(benches);
