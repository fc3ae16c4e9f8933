//! Benchmarks for array creation, accumulation and matrix products.
//!
//! Run with:
//! ```bash
//! cargo bench --bench ndarray_ops
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndint::{NDArray, Point, Shape};
use std::hint::black_box;

fn shape(dims: &[usize]) -> Shape {
    Shape::new(dims).expect("benchmark shapes are valid")
}

fn bench_zeros(c: &mut Criterion) {
    let mut group = c.benchmark_group("zeros");

    let sizes = vec![
        ("small_2d", vec![100, 100]),
        ("medium_2d", vec![1000, 1000]),
        ("small_3d", vec![50, 50, 50]),
        ("small_4d", vec![10, 20, 30, 40]),
    ];

    for (name, dims) in sizes {
        let total: usize = dims.iter().product();
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &dims, |b, dims| {
            b.iter(|| black_box(NDArray::zeros(shape(dims))));
        });
    }

    group.finish();
}

fn bench_point_access(c: &mut Criterion) {
    let array = NDArray::ones(shape(&[64, 64, 64]));
    let point = Point::new([31, 17, 63]);

    c.bench_function("at_3d", |b| {
        b.iter(|| black_box(array.at(black_box(&point)).expect("in bounds")));
    });
    c.bench_function("set_3d", |b| {
        b.iter(|| array.set(black_box(&point), 7).expect("in bounds"));
    });
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for n in [64usize, 256, 1024] {
        let target = NDArray::zeros(shape(&[n, n]));
        let same = NDArray::ones(shape(&[n, n]));
        let leading = NDArray::ones(shape(&[n]));
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_with_input(BenchmarkId::new("same_shape", n), &n, |b, _| {
            b.iter(|| target.add(black_box(&same)).expect("shapes match"));
        });
        group.bench_with_input(BenchmarkId::new("broadcast", n), &n, |b, _| {
            b.iter(|| target.add(black_box(&leading)).expect("leading axes match"));
        });
    }

    group.finish();
}

fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot");

    for n in [16usize, 64, 128] {
        let a = NDArray::ones(shape(&[n, n]));
        let b_matrix = NDArray::ones(shape(&[n, n]));
        let b_vector = NDArray::ones(shape(&[n]));

        group.bench_with_input(BenchmarkId::new("matrix", n), &n, |b, _| {
            b.iter(|| black_box(a.dot(black_box(&b_matrix)).expect("inner axes match")));
        });
        group.bench_with_input(BenchmarkId::new("vector", n), &n, |b, _| {
            b.iter(|| black_box(a.dot(black_box(&b_vector)).expect("inner axes match")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_zeros, bench_point_access, bench_add, bench_dot);
criterion_main!(benches);
