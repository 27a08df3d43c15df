// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Tiles and Generations
// ─────────────────────────────────────────────────────────────────────
//! Tile trees and the per-depth label → tile mapping.
//!
//! Supertiles hold their children behind `Arc`, so one generation's tiles
//! are shared by every supertile of the next. A tile tree is therefore a
//! DAG, built once and never mutated.

use std::sync::Arc;

use spectre_geometry::{Point, Transform};
use spectre_types::{Label, LeafLabel};

/// Four points that align a tile when it becomes a child in the next
/// generation.
pub type ReferenceQuad = [Point; 4];

/// A tile: a single prototile placement or a composite supertile.
#[derive(Debug, Clone, PartialEq)]
pub enum Tile {
    Leaf(LeafLabel),
    Meta {
        /// Ordered children, each with its transform relative to this tile.
        children: Vec<(Arc<Tile>, Transform)>,
        quad: ReferenceQuad,
    },
}

impl Tile {
    pub fn leaf(label: LeafLabel) -> Arc<Tile> {
        Arc::new(Tile::Leaf(label))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Tile::Leaf(_))
    }

    /// Direct children; empty for a leaf.
    pub fn children(&self) -> &[(Arc<Tile>, Transform)] {
        match self {
            Tile::Leaf(_) => &[],
            Tile::Meta { children, .. } => children,
        }
    }

    pub fn quad(&self) -> Option<&ReferenceQuad> {
        match self {
            Tile::Leaf(_) => None,
            Tile::Meta { quad, .. } => Some(quad),
        }
    }

    /// Number of leaf instances below this tile, counting shared subtrees
    /// once per occurrence.
    pub fn leaf_count(&self) -> usize {
        match self {
            Tile::Leaf(_) => 1,
            Tile::Meta { children, .. } => children.iter().map(|(c, _)| c.leaf_count()).sum(),
        }
    }

    /// Longest path from this tile down to a leaf.
    pub fn height(&self) -> usize {
        match self {
            Tile::Leaf(_) => 0,
            Tile::Meta { children, .. } => {
                1 + children.iter().map(|(c, _)| c.height()).max().unwrap_or(0)
            }
        }
    }
}

/// Parameters a generation was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub edge_a: f64,
    pub edge_b: f64,
    pub rotation: i32,
}

/// Every label's tile at one substitution depth.
///
/// Immutable once built; cloning only bumps reference counts.
#[derive(Debug, Clone)]
pub struct Generation {
    depth: u32,
    tiles: [Arc<Tile>; Label::COUNT],
    quad: ReferenceQuad,
    params: GenerationParams,
}

impl Generation {
    pub(crate) fn new(
        depth: u32,
        tiles: [Arc<Tile>; Label::COUNT],
        quad: ReferenceQuad,
        params: GenerationParams,
    ) -> Self {
        Self {
            depth,
            tiles,
            quad,
            params,
        }
    }

    /// Number of substitution steps applied to the base generation.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn get(&self, label: Label) -> &Arc<Tile> {
        &self.tiles[label.index()]
    }

    /// Reference quad shared by all tiles of this generation.
    pub fn quad(&self) -> &ReferenceQuad {
        &self.quad
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn iter(&self) -> impl Iterator<Item = (Label, &Arc<Tile>)> {
        Label::ALL.iter().map(move |&l| (l, self.get(l)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_generation_is_send_sync() {
        assert_send_sync::<Tile>();
        assert_send_sync::<Generation>();
    }

    #[test]
    fn test_leaf_accessors() {
        let leaf = Tile::leaf(LeafLabel::Psi);
        assert!(leaf.is_leaf());
        assert!(leaf.children().is_empty());
        assert!(leaf.quad().is_none());
        assert_eq!(leaf.leaf_count(), 1);
        assert_eq!(leaf.height(), 0);
    }

    #[test]
    fn test_shared_child_counted_per_occurrence() {
        let shared = Tile::leaf(LeafLabel::Phi);
        let meta = Tile::Meta {
            children: vec![
                (Arc::clone(&shared), Transform::IDENTITY),
                (Arc::clone(&shared), Transform::translation(1.0, 0.0)),
            ],
            quad: [Point::default(); 4],
        };
        assert_eq!(meta.leaf_count(), 2);
        assert_eq!(meta.height(), 1);
        assert_eq!(Arc::strong_count(&shared), 3);
    }
}
