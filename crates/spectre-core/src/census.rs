// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Census Visitors
// ─────────────────────────────────────────────────────────────────────
//! Accumulating visitors: label/quadrant census and orientation
//! histogram.

use std::collections::BTreeMap;
use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use spectre_geometry::{
    mystic_spectre_points, rotation_degrees, spectre_points, vertex_centroid, Orientation, Point,
    Transform,
};
use spectre_types::{Label, LeafLabel, SpectreError, SpectreResult};

use crate::tile::Generation;
use crate::traversal::{for_each_leaf, LeafVisitor};

/// Sign counts of leaf centroids along each axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantCounts {
    pub positive_x: usize,
    pub negative_x: usize,
    pub zero_x: usize,
    pub positive_y: usize,
    pub negative_y: usize,
    pub zero_y: usize,
}

impl QuadrantCounts {
    fn record(&mut self, c: Point) {
        if c.x < 0.0 {
            self.negative_x += 1;
        } else if c.x > 0.0 {
            self.positive_x += 1;
        } else {
            self.zero_x += 1;
        }
        if c.y < 0.0 {
            self.negative_y += 1;
        } else if c.y > 0.0 {
            self.positive_y += 1;
        } else {
            self.zero_y += 1;
        }
    }
}

/// Label counts and centroid placement of every visited leaf.
///
/// Centroids are the mean of the placed prototile's vertices (mystic
/// vertices for `Gamma2`), matching where the sensor scripts put a
/// tile's sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileCensus {
    pub total: usize,
    pub mystic: usize,
    /// Indexed by [`LeafLabel::index`].
    pub per_label: [usize; LeafLabel::COUNT],
    pub quadrants: QuadrantCounts,
    #[serde(skip)]
    centroids: [Point; 2],
}

impl TileCensus {
    pub fn new(edge_a: f64, edge_b: f64) -> SpectreResult<Self> {
        let normal = vertex_centroid(&spectre_points(edge_a, edge_b)?);
        let mystic = vertex_centroid(&mystic_spectre_points(edge_a, edge_b)?);
        Ok(Self {
            total: 0,
            mystic: 0,
            per_label: [0; LeafLabel::COUNT],
            quadrants: QuadrantCounts::default(),
            centroids: [normal, mystic],
        })
    }

    /// Census of the `root` supertile of `generation`.
    pub fn of(generation: &Generation, root: Label) -> SpectreResult<Self> {
        let params = generation.params();
        let mut census = Self::new(params.edge_a, params.edge_b)?;
        let _ = for_each_leaf(generation, root, &mut census);
        Ok(census)
    }

    pub fn count(&self, label: LeafLabel) -> usize {
        self.per_label[label.index()]
    }

    /// Non-zero label counts in label order.
    pub fn label_counts(&self) -> Vec<(LeafLabel, usize)> {
        LeafLabel::ALL
            .iter()
            .map(|&l| (l, self.count(l)))
            .filter(|&(_, n)| n > 0)
            .collect()
    }
}

impl LeafVisitor for TileCensus {
    fn visit(&mut self, transform: &Transform, label: LeafLabel) -> ControlFlow<()> {
        self.total += 1;
        self.per_label[label.index()] += 1;
        if label.is_mystic() {
            self.mystic += 1;
        }
        let local = self.centroids[usize::from(label.is_mystic())];
        self.quadrants.record(transform.apply(local));
        ControlFlow::Continue(())
    }
}

/// Count of leaves per recovered `(angle, mirrored)`.
///
/// The first orientation that cannot be recovered stops the walk and is
/// reported by [`OrientationHistogram::finish`].
#[derive(Debug, Clone, Default)]
pub struct OrientationHistogram {
    counts: BTreeMap<Orientation, usize>,
    error: Option<SpectreError>,
}

impl OrientationHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Histogram of the `root` supertile of `generation`.
    pub fn of(generation: &Generation, root: Label) -> SpectreResult<Self> {
        let mut histogram = Self::new();
        let _ = for_each_leaf(generation, root, &mut histogram);
        histogram.finish()
    }

    pub fn get(&self, orientation: Orientation) -> usize {
        self.counts.get(&orientation).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries sorted by angle, unmirrored first.
    pub fn entries(&self) -> Vec<(Orientation, usize)> {
        self.counts.iter().map(|(&o, &n)| (o, n)).collect()
    }

    pub fn finish(self) -> SpectreResult<Self> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self),
        }
    }
}

impl LeafVisitor for OrientationHistogram {
    fn visit(&mut self, transform: &Transform, _label: LeafLabel) -> ControlFlow<()> {
        match rotation_degrees(transform) {
            Ok(o) => {
                *self.counts.entry(o).or_insert(0) += 1;
                ControlFlow::Continue(())
            }
            Err(e) => {
                self.error = Some(e);
                ControlFlow::Break(())
            }
        }
    }
}
