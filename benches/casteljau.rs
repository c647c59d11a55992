//! Benchmarks for the evaluation and subdivision engines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use casteljau::{evaluate, evaluate_with, subdivide, subdivide_with, BezierCurve, Vec2};

/// Control polygon along x with deterministic jitter in y.
fn generate_polygon(count: usize) -> Vec<Vec2<f64>> {
    let dx = 2.0 / (count.max(2) - 1) as f64;
    (0..count)
        .map(|i| {
            let jitter = ((i * 37) % 100) as f64 / 50.0 - 1.0;
            Vec2::new(-1.0 + dx * i as f64, jitter)
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for degree in [3, 7, 15, 31] {
        let polygon = generate_polygon(degree + 1);
        let mut scratch = polygon.clone();

        group.bench_with_input(BenchmarkId::new("native", degree), &polygon, |b, p| {
            b.iter(|| {
                scratch.copy_from_slice(p);
                evaluate(black_box(&mut scratch), black_box(0.5)).copied()
            })
        });

        group.bench_with_input(BenchmarkId::new("closures", degree), &polygon, |b, p| {
            b.iter(|| {
                scratch.copy_from_slice(p);
                evaluate_with(
                    black_box(&mut scratch),
                    black_box(0.5),
                    |a: f64, v: Vec2<f64>| Vec2::new(a * v.x, a * v.y),
                    |v: Vec2<f64>, u: Vec2<f64>| Vec2::new(v.x + u.x, v.y + u.y),
                )
                .copied()
            })
        });
    }

    group.finish();
}

fn bench_subdivide(c: &mut Criterion) {
    let mut group = c.benchmark_group("subdivide");

    for degree in [3, 7, 15, 31] {
        let polygon = generate_polygon(degree + 1);
        let mut output = vec![Vec2::zero(); 2 * degree + 1];

        group.bench_with_input(BenchmarkId::new("native", degree), &polygon, |b, p| {
            b.iter(|| subdivide(black_box(p), black_box(&mut output), black_box(0.5)))
        });

        group.bench_with_input(BenchmarkId::new("closures", degree), &polygon, |b, p| {
            b.iter(|| {
                subdivide_with(
                    black_box(p),
                    black_box(&mut output),
                    black_box(0.5),
                    |a: f64, v: Vec2<f64>| Vec2::new(a * v.x, a * v.y),
                    |v: Vec2<f64>, u: Vec2<f64>| Vec2::new(v.x + u.x, v.y + u.y),
                )
            })
        });
    }

    group.finish();
}

fn bench_curve_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_eval");

    let curve = match BezierCurve::new(generate_polygon(8)) {
        Ok(curve) => curve,
        Err(err) => panic!("invalid benchmark curve: {}", err),
    };

    for count in [10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("batch", count), &count, |b, &count| {
            b.iter(|| {
                for i in 0..count {
                    let t = i as f64 / count as f64;
                    let _ = curve.eval(black_box(t));
                }
            })
        });
    }

    group.bench_function("split_at_0.5", |b| b.iter(|| curve.split(black_box(0.5))));
    group.bench_function("split_at_0.25", |b| b.iter(|| curve.split(black_box(0.25))));

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_subdivide, bench_curve_sampling);
criterion_main!(benches);
