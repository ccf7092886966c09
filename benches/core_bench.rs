use bezier_scenes::{CubicBezier, CurveTessellation, EvalStrategy, KeyFrame, KeyFrameTrack};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use std::hint::black_box;

fn bench_evaluation(c: &mut Criterion) {
    let curve = CubicBezier::default();
    let params: Vec<f32> = (0..1024).map(|i| i as f32 / 1023.0).collect();

    let mut group = c.benchmark_group("bezier_evaluate");
    for strategy in [EvalStrategy::Matrix, EvalStrategy::Bernstein] {
        group.bench_with_input(
            BenchmarkId::new("batch_1024", format!("{:?}", strategy)),
            &strategy,
            |b, &strategy| {
                b.iter(|| {
                    let mut acc = Vec3::ZERO;
                    for &t in &params {
                        acc += curve.evaluate_with(strategy, black_box(t));
                    }
                    black_box(acc)
                })
            },
        );
    }
    group.finish();
}

fn bench_tessellation(c: &mut Criterion) {
    let curve = CubicBezier::default();

    let mut group = c.benchmark_group("tessellation_update");
    for &vertex_count in &[100usize, 10_000usize] {
        let mut tessellation =
            CurveTessellation::new(vertex_count).expect("vertex_count >= 2");

        group.bench_with_input(
            BenchmarkId::new("matrix", vertex_count),
            &vertex_count,
            |b, _| {
                b.iter(|| {
                    tessellation.update(black_box(&curve), EvalStrategy::Matrix);
                    black_box(tessellation.positions().len())
                })
            },
        );
    }
    group.finish();
}

fn bench_track_sampling(c: &mut Criterion) {
    let frames: Vec<KeyFrame> = (0..64)
        .map(|i| {
            KeyFrame::from_axis_angle_degrees(
                i as f32 * 100.0,
                Vec3::new(i as f32, (i % 7) as f32, 0.0),
                Vec3::Z,
                i as f32 * 15.0,
            )
        })
        .collect();
    let track = KeyFrameTrack::new(frames);

    c.bench_function("keyframe_sample_batch", |b| {
        b.iter(|| {
            let mut acc = Vec3::ZERO;
            for step in 0..1000 {
                acc += track.sample(black_box(step as f32 * 6.3)).position;
            }
            black_box(acc)
        })
    });
}

criterion_group!(
    benches,
    bench_evaluation,
    bench_tessellation,
    bench_track_sampling
);
criterion_main!(benches);
