// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Hierarchical substitution engine for the spectre aperiodic monotile.
//!
//! A depth-0 generation of nine labelled tiles is grown by repeated
//! supertile substitution; leaves are then enumerated depth-first with
//! their absolute transforms.
//!
//! # Invariants
//!
//! 1. **Generations are immutable**: `build_supertiles` borrows the
//!    previous generation and shares its tiles through `Arc`. Nothing is
//!    mutated after construction, so a `Generation` can be walked from
//!    any number of threads at once.
//!
//! 2. **Every placement stays on the orientation lattice**: linear parts
//!    are rotations by multiples of 30°, optionally mirrored. An
//!    orientation that fails to match is reported as
//!    `SpectreError::UnrecognizedOrientation`, never silently rounded.
//!
//! 3. **Enumeration order is deterministic**: children are visited in
//!    substitution-slot order, so identical inputs produce bit-identical
//!    `(transform, label)` sequences.

pub mod cache;
pub mod census;
pub mod classify;
pub mod export;
pub mod substitution;
pub mod supertile;
pub mod tile;
pub mod traversal;

pub use cache::GenerationCache;
pub use census::{OrientationHistogram, QuadrantCounts, TileCensus};
pub use classify::{classify_leaf, expected_mirrored, ColorClass, LeafClass};
pub use export::{collect_records, records_for_config, RecordCollector};
pub use substitution::{substitution, SLOT_COUNT, SUBSTITUTIONS};
pub use supertile::{base_generation, build, build_from_config, build_supertiles, canonical_transforms};
pub use tile::{Generation, GenerationParams, ReferenceQuad, Tile};
pub use traversal::{
    collect_leaves, count_leaves, for_each_leaf, for_each_leaf_limited, for_each_tile, LeafVisitor,
    TileLimit,
};
