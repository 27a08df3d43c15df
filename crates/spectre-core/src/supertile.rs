// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Supertile Builder
// ─────────────────────────────────────────────────────────────────────
//! Base generation and the generation n → n+1 substitution step.
//!
//! Each step derives eight canonical child transforms from the current
//! reference quad, reflects them through `diag(-1, 1)`, and assembles
//! every label's supertile from its substitution row. The previous
//! generation is only borrowed; its tiles become shared children.

use std::sync::Arc;

use spectre_geometry::{reference_quad, spectre_points, trot, Point, Transform, GAMMA2_ANCHOR};
use spectre_types::config::{validate_iterations, validate_rotation};
use spectre_types::{Label, LeafLabel, SpectreResult, TilingConfig};

use crate::substitution::{substitution, SLOT_COUNT};
use crate::tile::{Generation, GenerationParams, ReferenceQuad, Tile};

/// `(rotation step in degrees, quad index on the previous child,
/// quad index on the next child)` for canonical transforms `T1..T7`.
const BUILD_STEPS: [(i32, usize, usize); SLOT_COUNT - 1] = [
    (60, 3, 1),
    (0, 2, 0),
    (60, 3, 1),
    (60, 3, 1),
    (0, 2, 0),
    (60, 3, 1),
    (-120, 3, 3),
];

/// Depth-0 generation: eight single-prototile leaves plus `Gamma`, which
/// pairs `Gamma1` with the mystic `Gamma2` rotated by `rotation` about
/// vertex 8.
pub fn base_generation(edge_a: f64, edge_b: f64, rotation: i32) -> SpectreResult<Generation> {
    validate_rotation(rotation)?;
    let points = spectre_points(edge_a, edge_b)?;
    let quad = reference_quad(&points);

    let anchor = points[GAMMA2_ANCHOR];
    let gamma2_place = Transform::translation(anchor.x, anchor.y).compose(&trot(rotation));

    let tiles = Label::ALL.map(|label| match label.as_leaf() {
        Some(leaf) => Tile::leaf(leaf),
        None => Arc::new(Tile::Meta {
            children: vec![
                (Tile::leaf(LeafLabel::Gamma1), Transform::IDENTITY),
                (Tile::leaf(LeafLabel::Gamma2), gamma2_place),
            ],
            quad,
        }),
    });

    Ok(Generation::new(
        0,
        tiles,
        quad,
        GenerationParams {
            edge_a,
            edge_b,
            rotation,
        },
    ))
}

/// Canonical slot transforms `T0..T7` for a reference quad, already
/// reflected.
pub fn canonical_transforms(quad: &ReferenceQuad) -> [Transform; SLOT_COUNT] {
    let mut transforms = [Transform::IDENTITY; SLOT_COUNT];
    let mut total_angle = 0;
    let mut rotation = Transform::IDENTITY;

    for (i, &(angle, from, to)) in BUILD_STEPS.iter().enumerate() {
        if angle != 0 {
            total_angle += angle;
            rotation = trot(total_angle);
        }
        let offset: Point = transforms[i].apply(quad[from]) - rotation.apply(quad[to]);
        transforms[i + 1] = Transform::translation(offset.x, offset.y).compose(&rotation);
    }

    transforms.map(|t| Transform::MIRROR_X.compose(&t))
}

/// Reference quad of the next generation.
pub fn next_quad(quad: &ReferenceQuad, transforms: &[Transform; SLOT_COUNT]) -> ReferenceQuad {
    [
        transforms[6].apply(quad[2]),
        transforms[5].apply(quad[1]),
        transforms[3].apply(quad[2]),
        transforms[0].apply(quad[1]),
    ]
}

/// One substitution step.
pub fn build_supertiles(prev: &Generation) -> Generation {
    let transforms = canonical_transforms(prev.quad());
    let quad = next_quad(prev.quad(), &transforms);

    let tiles = Label::ALL.map(|label| {
        let children = substitution(label)
            .iter()
            .zip(transforms.iter())
            .filter_map(|(slot, t)| slot.map(|child| (Arc::clone(prev.get(child)), *t)))
            .collect();
        Arc::new(Tile::Meta { children, quad })
    });

    let depth = prev.depth() + 1;
    log::debug!("built supertile generation {depth}");
    Generation::new(depth, tiles, quad, *prev.params())
}

/// Base generation followed by `iterations` substitution steps.
pub fn build(
    edge_a: f64,
    edge_b: f64,
    iterations: i32,
    rotation: i32,
) -> SpectreResult<Generation> {
    validate_iterations(i64::from(iterations))?;
    let mut generation = base_generation(edge_a, edge_b, rotation)?;
    for _ in 0..iterations {
        generation = build_supertiles(&generation);
    }
    Ok(generation)
}

pub fn build_from_config(config: &TilingConfig) -> SpectreResult<Generation> {
    config.validate()?;
    build(
        config.edge_a,
        config.edge_b,
        config.iterations,
        config.rotation,
    )
}
