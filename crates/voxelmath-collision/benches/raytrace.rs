//! Benchmarks for the collision hot paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::DVec3;
use voxelmath_collision::{Aabb, VoxelRaycast};

fn aabb_intercept(c: &mut Criterion) {
    let bb = Aabb::from_bounds(0.0, 0.0, 0.0, 1.0, 1.0, 1.0).unwrap();
    c.bench_function("aabb_intercept", |b| {
        b.iter(|| {
            bb.calculate_intercept(
                black_box(DVec3::new(0.5, 0.5, 2.0)),
                black_box(DVec3::new(0.5, 0.5, -2.0)),
            )
        });
    });
}

fn voxel_raycast(c: &mut Criterion) {
    c.bench_function("voxel_raycast_90_cells", |b| {
        b.iter(|| {
            VoxelRaycast::between_points(
                black_box(DVec3::new(0.3, 0.4, 0.5)),
                black_box(DVec3::new(40.6, 30.1, 20.2)),
            )
            .unwrap()
            .count()
        });
    });
}

criterion_group!(benches, aabb_intercept, voxel_raycast);
criterion_main!(benches);
