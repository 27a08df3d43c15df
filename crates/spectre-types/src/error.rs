// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all tiling kernel failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectreError {
    /// An edge length of the prototile is zero, negative or not finite.
    #[error("invalid edge length: {edge} = {value} (must be finite and > 0)")]
    InvalidEdgeLength { edge: &'static str, value: f64 },

    /// Negative substitution depth requested.
    #[error("invalid iteration count: {0} (must be >= 0)")]
    InvalidIterationCount(i64),

    /// Mystic rotation is not a multiple of the 30° base step.
    #[error("invalid rotation: {0}° is not a multiple of 30°")]
    InvalidRotation(i32),

    /// A composed linear part matched no (rotation × mirror) table entry.
    ///
    /// Only a defect in the substitution table or in transform composition
    /// can produce this; it is never caused by user input.
    #[error("unrecognized orientation: linear part [[{a}, {b}], [{c}, {d}]]")]
    UnrecognizedOrientation { a: f64, b: f64, c: f64, d: f64 },

    /// Unknown tile label name.
    #[error("unknown label: {0}")]
    UnknownLabel(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

pub type SpectreResult<T> = Result<T, SpectreError>;
