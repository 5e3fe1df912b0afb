use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use keyframe::{AnimationConfig, Animator, OrientationInterpolator, OrientationMode, SplineMode};

fn animator(spline: SplineMode, interpolator: OrientationInterpolator) -> Animator {
    let config = AnimationConfig::default()
        .with_spline(spline)
        .with_orientation(OrientationMode::Quaternion)
        .with_interpolator(interpolator);
    Animator::from_config(&config).expect("default config is valid")
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for (name, spline, interpolator) in [
        ("catmull_rom", SplineMode::CatmullRom, OrientationInterpolator::ComponentWise),
        ("b_spline", SplineMode::BSpline, OrientationInterpolator::ComponentWise),
        ("catmull_rom_slerp", SplineMode::CatmullRom, OrientationInterpolator::Slerp),
    ] {
        let mut animator = animator(spline, interpolator);
        group.bench_function(name, |b| b.iter(|| black_box(animator.tick(black_box(1)))));
    }

    group.finish();
}

fn bench_basis(c: &mut Criterion) {
    c.bench_function("catmull_rom_scalar", |b| {
        b.iter(|| {
            keyframe::animation::catmull_rom(
                black_box(0.0),
                black_box(2.0),
                black_box(0.0),
                black_box(2.0),
                black_box(0.37),
            )
        });
    });
}

criterion_group!(benches, bench_tick, bench_basis);
criterion_main!(benches);
