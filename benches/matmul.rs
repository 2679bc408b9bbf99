use criterion::{criterion_group, criterion_main, Criterion};
use linmat::Matrix;

// ---------------------------------------------------------------------------
// Matrix multiply
// ---------------------------------------------------------------------------

fn matmul_4x4(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul_4x4");

    g.bench_function("f64_f64", |b| {
        let a = Matrix::<f64, 4, 4>::from_fn(|i, j| (i * 4 + j + 1) as f64);
        let m = Matrix::<f64, 4, 4>::from_fn(|i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("i32_f64", |b| {
        let a = Matrix::<i32, 4, 4>::from_fn(|i, j| (i * 4 + j + 1) as i32);
        let m = Matrix::<f64, 4, 4>::from_fn(|i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("i64_i64", |b| {
        let a = Matrix::<i64, 4, 4>::from_fn(|i, j| (i * 4 + j + 1) as i64);
        let m = Matrix::<i64, 4, 4>::from_fn(|i, j| (i + j + 1) as i64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.finish();
}

fn matmul_8x8(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul_8x8");

    g.bench_function("f64_f64", |b| {
        let a = Matrix::<f64, 8, 8>::from_fn(|i, j| (i * 8 + j + 1) as f64);
        let m = Matrix::<f64, 8, 8>::from_fn(|i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("f32_f64", |b| {
        let a = Matrix::<f32, 8, 8>::from_fn(|i, j| (i * 8 + j + 1) as f32);
        let m = Matrix::<f64, 8, 8>::from_fn(|i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Elementwise
// ---------------------------------------------------------------------------

fn scale_and_add_6x6(c: &mut Criterion) {
    let mut g = c.benchmark_group("elementwise_6x6");

    let a = Matrix::<f64, 6, 6>::from_fn(|i, j| (i * 6 + j) as f64 * 0.5);
    let m = Matrix::<i32, 6, 6>::from_fn(|i, j| (i + j) as i32);

    g.bench_function("scale", |b| {
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(2.5_f64))
    });

    g.bench_function("add_mixed", |b| {
        b.iter(|| std::hint::black_box(&a) + std::hint::black_box(&m))
    });

    g.finish();
}

criterion_group!(benches, matmul_4x4, matmul_8x8, scale_and_add_6x6);
criterion_main!(benches);
