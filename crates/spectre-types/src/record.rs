// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Exported Tile Records
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{SpectreError, SpectreResult};

/// One enumerated leaf, flattened for file export.
///
/// Field names match the JSON layout the sensor-network scripts read
/// (`name, index, x, y, angle, color`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileRecord {
    /// Leaf label name, e.g. `"Gamma2"`.
    pub name: String,
    /// Position in enumeration order.
    pub index: usize,
    /// Polygon centroid x.
    pub x: f64,
    /// Polygon centroid y.
    pub y: f64,
    /// Rotation in degrees, [0, 360).
    pub angle: i32,
    /// Display colour, RGB in [0, 1].
    pub color: [f64; 3],
}

/// Serialize a record list as a JSON array.
pub fn records_to_json(records: &[TileRecord]) -> SpectreResult<String> {
    serde_json::to_string(records)
        .map_err(|e| SpectreError::Config(format!("JSON encode error: {e}")))
}

pub fn records_from_json(json: &str) -> SpectreResult<Vec<TileRecord>> {
    serde_json::from_str(json)
        .map_err(|e| SpectreError::Config(format!("JSON parse error: {e}")))
}
