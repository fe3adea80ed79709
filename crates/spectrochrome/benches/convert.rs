use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spectrochrome::spectrum::{xyz_from_samples, xyz_from_spectrum};
use spectrochrome::{illuminant, physics, ColorConverter};

pub fn run_benchmarks(c: &mut Criterion) {
    let converter = ColorConverter::builder()
        .build()
        .expect("default configuration is valid");

    // Integration of spectra on and off the standard grid.
    let mut group = c.benchmark_group("spectrum");

    let d65 = illuminant::d65();
    group.bench_function("integrate-d65", |b| {
        b.iter(|| xyz_from_spectrum(black_box(&d65)))
    });

    group.bench_function("generate-blackbody", |b| {
        b.iter(|| physics::blackbody_color(black_box(5_778.0)))
    });

    let wavelengths: Vec<f64> = (0..=80).map(|n| 380.0 + 5.0 * n as f64).collect();
    let intensities: Vec<f64> = wavelengths.iter().map(|w| (w / 555.0).powi(-4)).collect();
    group.bench_function("resample-and-integrate", |b| {
        b.iter(|| xyz_from_samples(black_box(&wavelengths), black_box(&intensities)))
    });

    group.finish();

    // Conversion and clipping of individual colors.
    let mut group = c.benchmark_group("convert");

    group.bench_function("rgb-from-xyz", |b| {
        b.iter(|| converter.rgb_from_xyz(black_box([0.2, 0.3, 0.4])))
    });

    group.bench_function("lab-roundtrip", |b| {
        b.iter(|| converter.xyz_from_lab(converter.lab_from_xyz(black_box([0.2, 0.3, 0.4]))))
    });

    group.bench_function("clip-out-of-gamut", |b| {
        b.iter(|| converter.clip_rgb(black_box([1.2, 0.5, -0.3])))
    });

    group.bench_function("hex-from-xyz", |b| {
        b.iter(|| converter.hex_from_xyz(black_box([0.2, 0.3, 0.4])))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
