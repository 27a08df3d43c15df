// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{SpectreError, SpectreResult};
use crate::label::Label;

/// Base rotation step of the substitution geometry, in degrees.
pub const ROTATION_STEP_DEG: i32 = 30;

/// Parameters for building and walking one spectre tiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilingConfig {
    /// Length of the `a` edges of the prototile.
    /// Default: 10.0.
    pub edge_a: f64,

    /// Length of the `b` edges of the prototile.
    /// Default: 10.0.
    pub edge_b: f64,

    /// Substitution depth. Leaf counts grow by ≈7.46× per level.
    /// Default: 3.
    pub iterations: i32,

    /// Rotation of the mystic `Gamma2` half inside `Gamma`, in degrees.
    /// Must be a multiple of 30.
    /// Default: 30.
    pub rotation: i32,

    /// Supertile enumerated by consumers.
    /// Default: Delta.
    pub root: Label,

    /// Stop enumeration after this many leaves. `None` walks everything.
    pub max_tiles: Option<usize>,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            edge_a: 10.0,
            edge_b: 10.0,
            iterations: 3,
            rotation: ROTATION_STEP_DEG,
            root: Label::Delta,
            max_tiles: None,
        }
    }
}

impl TilingConfig {
    /// Config for the given edge lengths and depth, other fields default.
    pub fn new(edge_a: f64, edge_b: f64, iterations: i32) -> Self {
        Self {
            edge_a,
            edge_b,
            iterations,
            ..Self::default()
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> SpectreResult<()> {
        validate_edge("edge_a", self.edge_a)?;
        validate_edge("edge_b", self.edge_b)?;
        validate_iterations(self.iterations as i64)?;
        validate_rotation(self.rotation)?;
        if self.max_tiles == Some(0) {
            return Err(SpectreError::Config(
                "max_tiles must be > 0 when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> SpectreResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SpectreError::Config(format!("JSON parse error: {e}")))
    }

    pub fn to_json(&self) -> SpectreResult<String> {
        serde_json::to_string(self)
            .map_err(|e| SpectreError::Config(format!("JSON encode error: {e}")))
    }
}

/// Reject non-finite and non-positive edge lengths.
pub fn validate_edge(edge: &'static str, value: f64) -> SpectreResult<()> {
    if !value.is_finite() || value <= 0.0 {
        log::warn!("rejecting {edge} = {value}");
        return Err(SpectreError::InvalidEdgeLength { edge, value });
    }
    Ok(())
}

pub fn validate_iterations(iterations: i64) -> SpectreResult<()> {
    if iterations < 0 {
        return Err(SpectreError::InvalidIterationCount(iterations));
    }
    Ok(())
}

/// Only multiples of the 30° step keep every composed transform inside
/// the finite orientation table.
pub fn validate_rotation(rotation: i32) -> SpectreResult<()> {
    if rotation % ROTATION_STEP_DEG != 0 {
        log::warn!("rejecting mystic rotation {rotation}°");
        return Err(SpectreError::InvalidRotation(rotation));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(TilingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_edges() {
        let cfg = TilingConfig::new(0.0, 10.0, 1);
        assert!(matches!(
            cfg.validate(),
            Err(SpectreError::InvalidEdgeLength { edge: "edge_a", .. })
        ));
        let cfg = TilingConfig::new(10.0, f64::NAN, 1);
        assert!(matches!(
            cfg.validate(),
            Err(SpectreError::InvalidEdgeLength { edge: "edge_b", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_iterations() {
        let cfg = TilingConfig::new(10.0, 10.0, -1);
        assert_eq!(cfg.validate(), Err(SpectreError::InvalidIterationCount(-1)));
    }

    #[test]
    fn test_rotation_must_be_multiple_of_step() {
        for ok in [0, 30, -30, 90, 330, 720] {
            assert!(validate_rotation(ok).is_ok(), "{ok} should be accepted");
        }
        assert_eq!(validate_rotation(45), Err(SpectreError::InvalidRotation(45)));
    }

    #[test]
    fn test_zero_max_tiles_rejected() {
        let cfg = TilingConfig {
            max_tiles: Some(0),
            ..TilingConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(SpectreError::Config(_))));
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let cfg = TilingConfig::from_json(r#"{"iterations": 2, "root": "Sigma"}"#).unwrap();
        assert_eq!(cfg.iterations, 2);
        assert_eq!(cfg.root, Label::Sigma);
        assert_eq!(cfg.edge_a, 10.0);
        assert_eq!(cfg.rotation, 30);
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = TilingConfig {
            max_tiles: Some(500),
            ..TilingConfig::new(4.0, 6.0, 2)
        };
        let back = TilingConfig::from_json(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_from_json_garbage() {
        assert!(matches!(
            TilingConfig::from_json("{not json"),
            Err(SpectreError::Config(_))
        ));
    }
}
