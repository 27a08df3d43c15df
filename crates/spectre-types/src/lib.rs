// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Labels, configuration, export records and the error hierarchy for
//! the spectre aperiodic-monotile tiling kernel.

pub mod config;
pub mod error;
pub mod label;
pub mod record;

pub use config::{TilingConfig, ROTATION_STEP_DEG};
pub use error::{SpectreError, SpectreResult};
pub use label::{Label, LeafLabel};
pub use record::{records_from_json, records_to_json, TileRecord};
