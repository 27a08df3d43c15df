// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Tiling Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for building and walking spectre tilings.
//!
//! Covers:
//!   - Supertile build at depths 3 and 5
//!   - Leaf enumeration from the `Delta` root
//!   - Orientation lookup and classification
//!   - Record export

use std::ops::ControlFlow;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use spectre_core::{
    build, build_supertiles, classify_leaf, collect_records, for_each_leaf, OrientationHistogram,
    TileCensus,
};
use spectre_geometry::{rotation_degrees, trot, Transform};
use spectre_types::{Label, LeafLabel};

// ── Builder ───────────────────────────────────────────────────────────

fn bench_build_depth_3(c: &mut Criterion) {
    c.bench_function("build_depth_3", |b| {
        b.iter(|| build(black_box(10.0), black_box(10.0), 3, 30))
    });
}

fn bench_build_depth_5(c: &mut Criterion) {
    c.bench_function("build_depth_5", |b| {
        b.iter(|| build(black_box(10.0), black_box(10.0), 5, 30))
    });
}

fn bench_single_substitution(c: &mut Criterion) {
    let Ok(g) = build(10.0, 10.0, 4, 30) else {
        return;
    };
    c.bench_function("build_supertiles_step", |b| {
        b.iter(|| build_supertiles(black_box(&g)))
    });
}

// ── Traversal ─────────────────────────────────────────────────────────

fn bench_walk_depth_4(c: &mut Criterion) {
    let Ok(g) = build(10.0, 10.0, 4, 30) else {
        return;
    };
    c.bench_function("walk_depth_4_4401_leaves", |b| {
        b.iter(|| {
            let mut n = 0usize;
            let _ = for_each_leaf(&g, Label::Delta, &mut |t: &Transform, _: LeafLabel| {
                n += black_box(t).tx.is_finite() as usize;
                ControlFlow::Continue(())
            });
            n
        })
    });
}

fn bench_census_depth_4(c: &mut Criterion) {
    let Ok(g) = build(10.0, 10.0, 4, 30) else {
        return;
    };
    c.bench_function("census_depth_4", |b| {
        b.iter(|| TileCensus::of(black_box(&g), Label::Delta))
    });
}

// ── Orientation ───────────────────────────────────────────────────────

fn bench_rotation_lookup(c: &mut Criterion) {
    let t = Transform::MIRROR_X.compose(&trot(150)).with_translation(3.0, 4.0);
    c.bench_function("rotation_degrees", |b| {
        b.iter(|| rotation_degrees(black_box(&t)))
    });
}

fn bench_classify_leaf(c: &mut Criterion) {
    let t = trot(240);
    c.bench_function("classify_leaf", |b| {
        b.iter(|| classify_leaf(black_box(&t), LeafLabel::Phi, 3))
    });
}

fn bench_histogram_depth_4(c: &mut Criterion) {
    let Ok(g) = build(10.0, 10.0, 4, 30) else {
        return;
    };
    c.bench_function("orientation_histogram_depth_4", |b| {
        b.iter(|| OrientationHistogram::of(black_box(&g), Label::Delta))
    });
}

// ── Export ────────────────────────────────────────────────────────────

fn bench_collect_records_depth_3(c: &mut Criterion) {
    let Ok(g) = build(10.0, 10.0, 3, 30) else {
        return;
    };
    c.bench_function("collect_records_depth_3", |b| {
        b.iter(|| collect_records(black_box(&g), Label::Delta, None))
    });
}

criterion_group!(
    benches,
    bench_build_depth_3,
    bench_build_depth_5,
    bench_single_substitution,
    bench_walk_depth_4,
    bench_census_depth_4,
    bench_rotation_lookup,
    bench_classify_leaf,
    bench_histogram_depth_4,
    bench_collect_records_depth_3,
);
criterion_main!(benches);
