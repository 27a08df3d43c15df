// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Leaf Classifier
// ─────────────────────────────────────────────────────────────────────
//! Orientation, mystic and flip status of a placed leaf, and the colour
//! class renderers fill it with.

use serde::{Deserialize, Serialize};

use spectre_geometry::{rotation_degrees, Orientation, Transform};
use spectre_types::{LeafLabel, SpectreResult};

/// Fill for mystic (`Gamma2`) leaves.
pub const MYSTIC_RGB: [f64; 3] = [0.25, 0.25, 0.25];

/// Fill for leaves whose mirror state disagrees with their depth.
pub const FLIPPED_RGB: [f64; 3] = [0.75, 0.75, 0.75];

/// Mirror state an unflipped leaf has at `depth`.
///
/// Every substitution step reflects its children once, so the parity of
/// the depth fixes the expected state.
#[inline]
pub fn expected_mirrored(depth: u32) -> bool {
    depth % 2 == 1
}

/// Display category of a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorClass {
    Mystic,
    Flipped,
    Label(LeafLabel),
}

impl ColorClass {
    /// RGB fill in [0, 1].
    pub fn rgb(self) -> [f64; 3] {
        match self {
            ColorClass::Mystic => MYSTIC_RGB,
            ColorClass::Flipped => FLIPPED_RGB,
            ColorClass::Label(label) => label_rgb(label),
        }
    }
}

fn rgb8(r: u8, g: u8, b: u8) -> [f64; 3] {
    [f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0]
}

fn label_rgb(label: LeafLabel) -> [f64; 3] {
    match label {
        LeafLabel::Gamma1 | LeafLabel::Gamma2 => rgb8(255, 255, 255),
        LeafLabel::Delta => rgb8(220, 220, 220),
        LeafLabel::Theta => rgb8(255, 191, 191),
        LeafLabel::Lambda => rgb8(255, 160, 122),
        LeafLabel::Xi => rgb8(255, 242, 0),
        LeafLabel::Pi => rgb8(135, 206, 250),
        LeafLabel::Sigma => rgb8(245, 245, 220),
        LeafLabel::Phi => rgb8(0, 255, 0),
        LeafLabel::Psi => rgb8(0, 255, 255),
    }
}

/// Everything the classifier derives for one leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafClass {
    pub label: LeafLabel,
    pub orientation: Orientation,
    pub mystic: bool,
    pub flipped: bool,
    pub color: ColorClass,
}

/// Classify a leaf placed by `transform` in a generation of `depth`.
pub fn classify_leaf(
    transform: &Transform,
    label: LeafLabel,
    depth: u32,
) -> SpectreResult<LeafClass> {
    let orientation = rotation_degrees(transform)?;
    let mystic = label.is_mystic();
    let flipped = orientation.mirrored != expected_mirrored(depth);
    let color = if mystic {
        ColorClass::Mystic
    } else if flipped {
        ColorClass::Flipped
    } else {
        ColorClass::Label(label)
    };
    Ok(LeafClass {
        label,
        orientation,
        mystic,
        flipped,
        color,
    })
}
