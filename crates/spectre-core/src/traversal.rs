// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Leaf Enumeration
// ─────────────────────────────────────────────────────────────────────
//! Depth-first walk that composes transforms down to every leaf.
//!
//! Visitors return [`ControlFlow`]; `Break` aborts the whole walk, not
//! just the current subtree. Recursion depth equals the generation
//! depth plus one for the `Gamma` split, so it stays shallow.

use std::ops::ControlFlow;

use spectre_geometry::Transform;
use spectre_types::{Label, LeafLabel};

use crate::tile::{Generation, Tile};

/// Receives the absolute transform and label of each leaf instance.
pub trait LeafVisitor {
    fn visit(&mut self, transform: &Transform, label: LeafLabel) -> ControlFlow<()>;
}

impl<F> LeafVisitor for F
where
    F: FnMut(&Transform, LeafLabel) -> ControlFlow<()>,
{
    fn visit(&mut self, transform: &Transform, label: LeafLabel) -> ControlFlow<()> {
        self(transform, label)
    }
}

/// Walk `tile` with `accumulated` as its placement.
pub fn for_each_tile<V>(tile: &Tile, accumulated: &Transform, visitor: &mut V) -> ControlFlow<()>
where
    V: LeafVisitor + ?Sized,
{
    match tile {
        Tile::Leaf(label) => visitor.visit(accumulated, *label),
        Tile::Meta { children, .. } => {
            for (child, t) in children {
                for_each_tile(child, &accumulated.compose(t), visitor)?;
            }
            ControlFlow::Continue(())
        }
    }
}

/// Walk the `root` supertile of a generation from the identity placement.
pub fn for_each_leaf<V>(generation: &Generation, root: Label, visitor: &mut V) -> ControlFlow<()>
where
    V: LeafVisitor + ?Sized,
{
    for_each_tile(generation.get(root), &Transform::IDENTITY, visitor)
}

/// Stops the walk once `max_tiles` leaves have been delivered.
pub struct TileLimit<V> {
    inner: V,
    max_tiles: usize,
    visited: usize,
}

impl<V: LeafVisitor> TileLimit<V> {
    pub fn new(inner: V, max_tiles: usize) -> Self {
        Self {
            inner,
            max_tiles,
            visited: 0,
        }
    }

    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: LeafVisitor> LeafVisitor for TileLimit<V> {
    fn visit(&mut self, transform: &Transform, label: LeafLabel) -> ControlFlow<()> {
        if self.visited >= self.max_tiles {
            return ControlFlow::Break(());
        }
        self.visited += 1;
        self.inner.visit(transform, label)?;
        if self.visited >= self.max_tiles {
            log::info!("tile limit of {} reached, stopping walk", self.max_tiles);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}

/// [`for_each_leaf`] with an optional leaf cap.
pub fn for_each_leaf_limited<V>(
    generation: &Generation,
    root: Label,
    max_tiles: Option<usize>,
    visitor: &mut V,
) -> ControlFlow<()>
where
    V: LeafVisitor + ?Sized,
{
    match max_tiles {
        Some(max) => {
            let inner = |t: &Transform, label: LeafLabel| visitor.visit(t, label);
            for_each_leaf(generation, root, &mut TileLimit::new(inner, max))
        }
        None => for_each_leaf(generation, root, visitor),
    }
}

/// Number of leaf instances under `root`.
pub fn count_leaves(generation: &Generation, root: Label) -> usize {
    generation.get(root).leaf_count()
}

/// Every `(transform, label)` pair under `root`, in walk order.
pub fn collect_leaves(generation: &Generation, root: Label) -> Vec<(Transform, LeafLabel)> {
    let mut out = Vec::with_capacity(count_leaves(generation, root));
    let _ = for_each_leaf(generation, root, &mut |t: &Transform, label: LeafLabel| {
        out.push((*t, label));
        ControlFlow::Continue(())
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supertile::build;

    #[test]
    fn test_depth_zero_delta_is_single_identity_leaf() {
        let g = build(10.0, 10.0, 0, 30).unwrap();
        let leaves = collect_leaves(&g, Label::Delta);
        assert_eq!(leaves, vec![(Transform::IDENTITY, LeafLabel::Delta)]);
    }

    #[test]
    fn test_depth_zero_gamma_splits() {
        let g = build(10.0, 10.0, 0, 30).unwrap();
        let labels: Vec<LeafLabel> = collect_leaves(&g, Label::Gamma)
            .into_iter()
            .map(|(_, l)| l)
            .collect();
        assert_eq!(labels, vec![LeafLabel::Gamma1, LeafLabel::Gamma2]);
    }

    #[test]
    fn test_depth_one_leaf_order() {
        use LeafLabel::*;
        let g = build(10.0, 10.0, 1, 30).unwrap();
        let labels: Vec<LeafLabel> = collect_leaves(&g, Label::Delta)
            .into_iter()
            .map(|(_, l)| l)
            .collect();
        assert_eq!(
            labels,
            vec![Xi, Delta, Xi, Phi, Sigma, Pi, Phi, Gamma1, Gamma2]
        );
    }

    #[test]
    fn test_break_stops_whole_walk() {
        let g = build(10.0, 10.0, 3, 30).unwrap();
        let mut seen = 0;
        let flow = for_each_leaf(&g, Label::Delta, &mut |_: &Transform, _: LeafLabel| {
            seen += 1;
            if seen == 5 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(seen, 5);
    }

    #[test]
    fn test_tile_limit() {
        let g = build(10.0, 10.0, 2, 30).unwrap();
        let mut seen = 0usize;
        let mut counter = |_: &Transform, _: LeafLabel| {
            seen += 1;
            ControlFlow::Continue(())
        };
        let flow = for_each_leaf_limited(&g, Label::Delta, Some(20), &mut counter);
        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(seen, 20);
    }

    #[test]
    fn test_no_limit_completes() {
        let g = build(10.0, 10.0, 2, 30).unwrap();
        let mut seen = 0usize;
        let mut counter = |_: &Transform, _: LeafLabel| {
            seen += 1;
            ControlFlow::Continue(())
        };
        let flow = for_each_leaf_limited(&g, Label::Delta, None, &mut counter);
        assert_eq!(flow, ControlFlow::Continue(()));
        assert_eq!(seen, 71);
    }

    #[test]
    fn test_limit_zero_visits_nothing() {
        let g = build(10.0, 10.0, 1, 30).unwrap();
        let mut limit = TileLimit::new(|_: &Transform, _: LeafLabel| ControlFlow::Continue(()), 0);
        assert_eq!(for_each_leaf(&g, Label::Delta, &mut limit), ControlFlow::Break(()));
        assert_eq!(limit.visited(), 0);
    }

    #[test]
    fn test_count_matches_walk() {
        let g = build(10.0, 10.0, 3, 30).unwrap();
        for label in Label::ALL {
            assert_eq!(count_leaves(&g, label), collect_leaves(&g, label).len());
        }
    }
}
