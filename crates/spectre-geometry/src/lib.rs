// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Geometry
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Affine transforms, the orientation lookup table and the spectre
//! prototile polygons.

pub mod orientation;
pub mod prototile;
pub mod transform;

pub use orientation::{rotation_degrees, Orientation, RotationTable, ROTATION_TABLE};
pub use prototile::{
    circumradius, mystic_spectre_points, overlap_rate, placed, polygon_area, prototile_points,
    radius_scale_factor, reference_quad, spectre_points, vertex_centroid, Polygon, GAMMA2_ANCHOR,
    QUAD_INDICES, SPECTRE_VERTEX_COUNT,
};
pub use transform::{apply, compose, trot, Point, Transform, TRANSFORM_EPS};
