use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use kerpy_filters::{
    diff,
    shapes::{self, ShapeMode},
    smoothing, Orientation,
};
use kerpy_kernel::{KernelSize, ToReals};

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("Kernels");

    for side in [3, 7, 15, 31, 63].iter() {
        group.throughput(criterion::Throughput::Elements((*side * *side) as u64));

        let parameter_string = format!("{}x{}", side, side);
        let size = KernelSize::square(*side);

        group.bench_with_input(BenchmarkId::new("sobel", &parameter_string), &size, |b, s| {
            b.iter(|| black_box(diff::sobel(Orientation::Forward, Orientation::Forward, *s)))
        });

        group.bench_with_input(
            BenchmarkId::new("sobel_divergence", &parameter_string),
            &size,
            |b, s| {
                b.iter(|| {
                    diff::sobel(Orientation::Forward, Orientation::Forward, *s)
                        .map(|k| black_box(k.divergence()))
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("gaussian", &parameter_string),
            &size,
            |b, s| b.iter(|| black_box(smoothing::gaussian(*s, (1.5, 1.5), true))),
        );

        group.bench_with_input(
            BenchmarkId::new("circle_outline", &parameter_string),
            &size,
            |b, s| {
                let scale = ((*side / 2) as f64, (*side / 2) as f64);
                b.iter(|| black_box(shapes::circle(*s, scale, ShapeMode::Outline)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("padded_laplacian", &parameter_string),
            &size,
            |b, s| {
                b.iter(|| diff::laplacian(*s).map(|k| black_box(k.pad(2, 2, 2, 2, 0.0).rot90())))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
