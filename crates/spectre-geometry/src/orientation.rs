// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Orientation Lookup Table
// ─────────────────────────────────────────────────────────────────────
//! Recovers `(angle, mirrored)` from a transform's linear part.
//!
//! The table maps quantized `(cos θ, sin θ)` at the twelve multiples of
//! 30° back to the integer angle. It is built once on first use and is
//! read-only afterwards, so lookups from concurrent traversals need no
//! locking.
//!
//! Mirrored linear parts are read as `trot(θ) · diag(1, -1)`, i.e.
//!
//! ```text
//! unmirrored: | c  -s |     mirrored: | c   s |
//!             | s   c |               | s  -c |
//! ```
//!
//! Both share the first column `(c, s)`, which is the lookup key.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use spectre_types::{SpectreError, SpectreResult, ROTATION_STEP_DEG};

use crate::transform::{trot, Transform};

/// Number of distinct rotations on the 30° lattice.
pub const STEP_COUNT: usize = 12;

/// Maximum per-entry deviation accepted when matching a linear part.
pub const ORIENTATION_TOLERANCE: f64 = 1e-6;

/// Key resolution: 1e-4 keeps every lattice value well away from a
/// rounding boundary.
const QUANT: f64 = 1e4;

const SQRT3_2: f64 = 0.866_025_403_784_438_6;

/// `(cos, sin)` of `k · 30°` for k = 0..12.
const UNIT_CIRCLE: [(f64, f64); STEP_COUNT] = [
    (1.0, 0.0),
    (SQRT3_2, 0.5),
    (0.5, SQRT3_2),
    (0.0, 1.0),
    (-0.5, SQRT3_2),
    (-SQRT3_2, 0.5),
    (-1.0, 0.0),
    (-SQRT3_2, -0.5),
    (-0.5, -SQRT3_2),
    (0.0, -1.0),
    (0.5, -SQRT3_2),
    (SQRT3_2, -0.5),
];

/// Exact `(cos, sin)` for angles on the 30° lattice, `None` otherwise.
pub fn unit_step(deg: i32) -> Option<(f64, f64)> {
    if deg % ROTATION_STEP_DEG != 0 {
        return None;
    }
    let k = (deg.rem_euclid(360) / ROTATION_STEP_DEG) as usize;
    Some(UNIT_CIRCLE[k])
}

/// Rotation and mirror state of a placed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Orientation {
    /// Degrees, normalised to [0, 360).
    pub angle: i32,
    pub mirrored: bool,
}

impl Orientation {
    pub fn new(angle: i32, mirrored: bool) -> Self {
        Self {
            angle: angle.rem_euclid(360),
            mirrored,
        }
    }

    /// Linear part this orientation stands for.
    pub fn linear(&self) -> Transform {
        let r = trot(self.angle);
        if self.mirrored {
            r.compose(&Transform::MIRROR_Y)
        } else {
            r
        }
    }
}

#[inline]
fn quantize(c: f64, s: f64) -> (i64, i64) {
    ((c * QUANT).round() as i64, (s * QUANT).round() as i64)
}

/// Build-once `(cos, sin) → angle` table.
pub struct RotationTable {
    angles: HashMap<(i64, i64), i32>,
}

impl RotationTable {
    fn build() -> Self {
        let angles = UNIT_CIRCLE
            .iter()
            .enumerate()
            .map(|(k, &(c, s))| (quantize(c, s), k as i32 * ROTATION_STEP_DEG))
            .collect();
        log::debug!("orientation table built with {STEP_COUNT} rotation entries");
        Self { angles }
    }

    /// Number of distinct rotations (mirror doubles the orientation set).
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Match a linear part against the 24 valid orientations.
    pub fn lookup(&self, t: &Transform) -> SpectreResult<Orientation> {
        let det = t.determinant();
        let unrecognized = || {
            log::error!(
                "orientation lookup failed for [[{}, {}], [{}, {}]] (det {det})",
                t.a,
                t.b,
                t.c,
                t.d
            );
            SpectreError::UnrecognizedOrientation {
                a: t.a,
                b: t.b,
                c: t.c,
                d: t.d,
            }
        };

        if (det.abs() - 1.0).abs() > ORIENTATION_TOLERANCE {
            return Err(unrecognized());
        }
        let angle = *self
            .angles
            .get(&quantize(t.a, t.c))
            .ok_or_else(unrecognized)?;
        let orientation = Orientation::new(angle, det < 0.0);

        if !orientation
            .linear()
            .approx_eq(&t.linear(), ORIENTATION_TOLERANCE)
        {
            return Err(unrecognized());
        }
        Ok(orientation)
    }
}

/// Process-wide orientation table.
pub static ROTATION_TABLE: Lazy<RotationTable> = Lazy::new(RotationTable::build);

/// Recover `(angle, mirrored)` from a composed transform.
pub fn rotation_degrees(t: &Transform) -> SpectreResult<Orientation> {
    ROTATION_TABLE.lookup(t)
}
