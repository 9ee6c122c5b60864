use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quickdraw::{CaptureConfig, CurveFitter, Point, StrokeCapture, StyleParameters};
use std::hint::black_box;

fn build_stroke(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let f = i as f64;
            Point::new(f * 2.0, (f * 0.05).sin() * 80.0 + (f * 0.31).sin() * 4.0)
        })
        .collect()
}

fn bench_curve_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_fit");
    for count in [50usize, 500, 5_000] {
        let points = build_stroke(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            let fitter = CurveFitter::new(10.0);
            b.iter(|| black_box(fitter.fit(black_box(points)).len()))
        });
    }
    group.finish();
}

fn bench_stroke_capture(c: &mut Criterion) {
    let points = build_stroke(5_000);

    c.bench_function("stroke_capture_5000_samples", |b| {
        b.iter(|| {
            let mut capture = StrokeCapture::new(CaptureConfig::default());
            let mut path = capture.begin(points[0], 0.0, StyleParameters::default());
            for (i, p) in points.iter().enumerate().skip(1) {
                capture.sample(&mut path, *p, i as f64 * 8.0);
            }
            black_box(path.raw_points().len())
        })
    });
}

criterion_group!(benches, bench_curve_fit, bench_stroke_capture);
criterion_main!(benches);
