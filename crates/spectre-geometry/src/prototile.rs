// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Prototile Catalog
// ─────────────────────────────────────────────────────────────────────
//! The 14-vertex spectre polygon `Tile(a, b)` and its mystic twin.
//!
//! Vertices are produced by walking the boundary with edge directions on
//! the 30°/60° lattice. With `a == b` the polygon is the equilateral
//! spectre; the mystic twin swaps the two edge lengths.

use spectre_types::config::validate_edge;
use spectre_types::{LeafLabel, SpectreResult};

use crate::transform::{Point, Transform};

pub const SPECTRE_VERTEX_COUNT: usize = 14;

/// Vertices that form the depth-0 reference quad.
pub const QUAD_INDICES: [usize; 4] = [3, 5, 7, 11];

/// Vertex the mystic `Gamma2` half is anchored to inside `Gamma`.
pub const GAMMA2_ANCHOR: usize = 8;

pub type Polygon = [Point; SPECTRE_VERTEX_COUNT];

/// Boundary vertices of `Tile(a, b)`.
pub fn spectre_points(a: f64, b: f64) -> SpectreResult<Polygon> {
    validate_edge("edge_a", a)?;
    validate_edge("edge_b", b)?;
    Ok(spectre_points_unchecked(a, b))
}

/// Mirrored prototile used for `Gamma2` leaves: `Tile(b, a)`.
pub fn mystic_spectre_points(a: f64, b: f64) -> SpectreResult<Polygon> {
    spectre_points(b, a)
}

/// Prototile a leaf of `label` is drawn with.
pub fn prototile_points(label: LeafLabel, a: f64, b: f64) -> SpectreResult<Polygon> {
    if label.is_mystic() {
        mystic_spectre_points(a, b)
    } else {
        spectre_points(a, b)
    }
}

pub(crate) fn spectre_points_unchecked(a: f64, b: f64) -> Polygon {
    let sqrt3 = 3f64.sqrt();
    let a_sqrt3_d2 = a * sqrt3 / 2.0; // a·sin 60°
    let a_d2 = a * 0.5; // a·cos 60°
    let b_sqrt3_d2 = b * sqrt3 / 2.0;
    let b_d2 = b * 0.5;

    [
        Point::new(0.0, 0.0),
        Point::new(a, 0.0),
        Point::new(a + a_d2, -a_sqrt3_d2),
        Point::new(a + a_d2 + b_sqrt3_d2, -a_sqrt3_d2 + b_d2),
        Point::new(a + a_d2 + b_sqrt3_d2, -a_sqrt3_d2 + b + b_d2),
        Point::new(a + a + a_d2 + b_sqrt3_d2, -a_sqrt3_d2 + b + b_d2),
        Point::new(a + a + a + b_sqrt3_d2, b + b_d2),
        Point::new(a + a + a, b + b),
        Point::new(a + a + a - b_sqrt3_d2, b + b - b_d2),
        Point::new(a + a + a_d2 - b_sqrt3_d2, a_sqrt3_d2 + b + b - b_d2),
        Point::new(a + a_d2 - b_sqrt3_d2, a_sqrt3_d2 + b + b - b_d2),
        Point::new(a_d2 - b_sqrt3_d2, a_sqrt3_d2 + b + b - b_d2),
        Point::new(-b_sqrt3_d2, b + b - b_d2),
        Point::new(0.0, b),
    ]
}

/// Depth-0 reference quad of a polygon.
pub fn reference_quad(points: &Polygon) -> [Point; 4] {
    QUAD_INDICES.map(|i| points[i])
}

/// Polygon placed by `t`.
pub fn placed(points: &Polygon, t: &Transform) -> Polygon {
    points.map(|p| t.apply(p))
}

/// Mean of the vertices, where consumers put a tile's sensor.
pub fn vertex_centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }
    let n = points.len() as f64;
    let sum = points.iter().fold(Point::default(), |acc, &p| acc + p);
    Point::new(sum.x / n, sum.y / n)
}

/// Largest vertex distance from the vertex centroid: the radius of the
/// sensor circle that covers the whole tile.
pub fn circumradius(points: &[Point]) -> f64 {
    let c = vertex_centroid(points);
    points
        .iter()
        .map(|&p| p.distance(c))
        .fold(0.0, f64::max)
}

/// Factor that makes the tile's circumradius equal `sensor_radius`.
///
/// Scale the prototile edges (or [`Transform::scaled`] placements) by it
/// to inscribe each tile in a sensor circle.
pub fn radius_scale_factor(points: &[Point], sensor_radius: f64) -> SpectreResult<f64> {
    validate_edge("sensor_radius", sensor_radius)?;
    let r = circumradius(points);
    validate_edge("circumradius", r)?;
    Ok(sensor_radius / r)
}

/// Share of a sensor circle not covered by its inscribed tile.
pub fn overlap_rate(sensor_radius: f64, tile_area: f64) -> f64 {
    let circle = std::f64::consts::PI * sensor_radius * sensor_radius;
    (circle - tile_area) / circle
}

/// Unsigned shoelace area.
pub fn polygon_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let p = points[i];
            let q = points[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum();
    0.5 * twice.abs()
}
