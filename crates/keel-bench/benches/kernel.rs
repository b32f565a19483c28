use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keel_bench::*;
use keel_geom::{Quat as QuatR, Shape, Vec3 as Vec3R};

// ============================================================
// Vec3
// ============================================================

fn vec3_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/dot");

    group.bench_function("f32", |b| {
        let a = random_vec3f32(1)[0];
        let v = random_vec3f32(2)[1];
        b.iter(|| black_box(black_box(a).dot(black_box(v))))
    });

    group.bench_function("f64", |b| {
        let a = random_vec3f64(1)[0];
        let v = random_vec3f64(2)[1];
        b.iter(|| black_box(black_box(a).dot(black_box(v))))
    });

    group.finish();
}

fn vec3_cross(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3/cross");

    group.bench_function("f64", |b| {
        let a = random_vec3f64(1)[0];
        let v = random_vec3f64(2)[1];
        b.iter(|| black_box(black_box(a).cross(black_box(v))))
    });

    group.finish();
}

// ============================================================
// Mat3 / Mat4
// ============================================================

fn mat3_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat3/try_inverse");

    group.bench_function("f64", |b| {
        let m = random_mat3f64(1)[0];
        b.iter(|| black_box(black_box(m).try_inverse()))
    });

    group.finish();
}

fn mat4_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4");

    group.bench_function("mul", |b| {
        let ms = random_mat4f64(2);
        b.iter(|| black_box(black_box(ms[0]) * black_box(ms[1])))
    });

    group.bench_function("try_inverse", |b| {
        let m = random_mat4f64(1)[0];
        b.iter(|| black_box(black_box(m).try_inverse()))
    });

    group.finish();
}

// ============================================================
// Quat
// ============================================================

fn quat_slerp(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat/slerp");

    group.bench_function("f64", |b| {
        let qs = random_unit_quatf64(2);
        b.iter(|| black_box(black_box(qs[0]).slerp(&black_box(qs[1]), black_box(0.37))))
    });

    group.finish();
}

// ============================================================
// Shapes
// ============================================================

fn shape_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape");

    let cube = Shape::box_from_points(&[Vec3R::splat(-1.0), Vec3R::splat(1.0)]);
    let orient = QuatR::from_axis_angle(Vec3R::new(0.0, 1.0, 0.0), 0.6);

    group.bench_function("box_inertia", |b| {
        b.iter(|| black_box(black_box(&cube).inertia_tensor()))
    });

    group.bench_function("box_support", |b| {
        b.iter(|| {
            black_box(cube.support(
                black_box(Vec3R::new(0.3, -0.8, 0.5)),
                Vec3R::zero(),
                orient,
                0.0,
            ))
        })
    });

    group.bench_function("box_world_bounds", |b| {
        b.iter(|| black_box(cube.bounds(black_box(Vec3R::new(1.0, 2.0, 3.0)), orient)))
    });

    group.finish();
}

criterion_group!(
    benches,
    vec3_dot,
    vec3_cross,
    mat3_inverse,
    mat4_ops,
    quat_slerp,
    shape_queries
);
criterion_main!(benches);
