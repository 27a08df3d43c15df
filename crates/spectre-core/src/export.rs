// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Tile Record Export
// ─────────────────────────────────────────────────────────────────────
//! Flattens a walk into [`TileRecord`]s for the JSON files the
//! sensor-placement scripts consume.

use std::ops::ControlFlow;

use spectre_geometry::{mystic_spectre_points, spectre_points, vertex_centroid, Point, Transform};
use spectre_types::{Label, LeafLabel, SpectreError, SpectreResult, TileRecord, TilingConfig};

use crate::classify::classify_leaf;
use crate::supertile::build_from_config;
use crate::tile::Generation;
use crate::traversal::{for_each_leaf_limited, LeafVisitor};

/// Visitor that classifies each leaf and stores its record.
pub struct RecordCollector {
    depth: u32,
    centroids: [Point; 2],
    records: Vec<TileRecord>,
    error: Option<SpectreError>,
}

impl RecordCollector {
    pub fn new(edge_a: f64, edge_b: f64, depth: u32) -> SpectreResult<Self> {
        Ok(Self {
            depth,
            centroids: [
                vertex_centroid(&spectre_points(edge_a, edge_b)?),
                vertex_centroid(&mystic_spectre_points(edge_a, edge_b)?),
            ],
            records: Vec::new(),
            error: None,
        })
    }

    pub fn finish(self) -> SpectreResult<Vec<TileRecord>> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.records),
        }
    }
}

impl LeafVisitor for RecordCollector {
    fn visit(&mut self, transform: &Transform, label: LeafLabel) -> ControlFlow<()> {
        let class = match classify_leaf(transform, label, self.depth) {
            Ok(c) => c,
            Err(e) => {
                self.error = Some(e);
                return ControlFlow::Break(());
            }
        };
        let c = transform.apply(self.centroids[usize::from(label.is_mystic())]);
        self.records.push(TileRecord {
            name: label.name().to_string(),
            index: self.records.len(),
            x: c.x,
            y: c.y,
            angle: class.orientation.angle,
            color: class.color.rgb(),
        });
        ControlFlow::Continue(())
    }
}

/// Records for the leaves under `root`, at most `max_tiles` of them.
pub fn collect_records(
    generation: &Generation,
    root: Label,
    max_tiles: Option<usize>,
) -> SpectreResult<Vec<TileRecord>> {
    let params = generation.params();
    let mut collector = RecordCollector::new(params.edge_a, params.edge_b, generation.depth())?;
    let _ = for_each_leaf_limited(generation, root, max_tiles, &mut collector);
    collector.finish()
}

/// Build and export in one step, honouring `root` and `max_tiles`.
pub fn records_for_config(config: &TilingConfig) -> SpectreResult<Vec<TileRecord>> {
    let generation = build_from_config(config)?;
    collect_records(&generation, config.root, config.max_tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::MYSTIC_RGB;
    use crate::supertile::build;
    use spectre_types::records_to_json;

    #[test]
    fn test_depth_one_records() {
        let g = build(10.0, 10.0, 1, 30).unwrap();
        let records = collect_records(&g, Label::Delta, None).unwrap();
        assert_eq!(records.len(), 9);
        let first = &records[0];
        assert_eq!(first.name, "Xi");
        assert_eq!(first.index, 0);
        assert_eq!(first.angle, 180);
        assert!((first.x + 14.738553).abs() < 1e-5);
        assert!((first.y - 10.452839).abs() < 1e-5);
        let last = &records[8];
        assert_eq!(last.name, "Gamma2");
        assert_eq!(last.color, MYSTIC_RGB);
        assert!(records.iter().enumerate().all(|(i, r)| r.index == i));
    }

    #[test]
    fn test_max_tiles_truncates() {
        let g = build(10.0, 10.0, 2, 30).unwrap();
        let records = collect_records(&g, Label::Delta, Some(10)).unwrap();
        assert_eq!(records.len(), 10);
    }

    #[test]
    fn test_records_for_config() {
        let json = r#"{"iterations": 1, "root": "Gamma", "max_tiles": 3}"#;
        let cfg = TilingConfig::from_json(json).unwrap();
        let records = records_for_config(&cfg).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records_to_json(&records).unwrap().starts_with('['));
    }
}
