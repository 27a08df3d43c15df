// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Generation Cache
// ─────────────────────────────────────────────────────────────────────
//! Memoised generations for one parameter set.
//!
//! Sweeps over depths 1..n (density vs. iteration studies) build each
//! level once; later requests extend the chain from the deepest cached
//! generation.

use std::sync::Arc;

use parking_lot::Mutex;

use spectre_types::config::validate_iterations;
use spectre_types::{SpectreResult, TilingConfig};

use crate::supertile::{base_generation, build_supertiles};
use crate::tile::{Generation, GenerationParams};

/// Thread-safe: the generation chain is guarded by a `parking_lot::Mutex`.
pub struct GenerationCache {
    params: GenerationParams,
    levels: Mutex<Vec<Arc<Generation>>>,
}

impl GenerationCache {
    /// Validates the parameters and builds the depth-0 generation.
    pub fn new(edge_a: f64, edge_b: f64, rotation: i32) -> SpectreResult<Self> {
        let base = base_generation(edge_a, edge_b, rotation)?;
        Ok(Self {
            params: *base.params(),
            levels: Mutex::new(vec![Arc::new(base)]),
        })
    }

    pub fn from_config(config: &TilingConfig) -> SpectreResult<Self> {
        config.validate()?;
        Self::new(config.edge_a, config.edge_b, config.rotation)
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Generation at `depth`, building missing levels on demand.
    pub fn get(&self, depth: i32) -> SpectreResult<Arc<Generation>> {
        validate_iterations(i64::from(depth))?;
        let depth = depth as usize;
        let mut levels = self.levels.lock();
        while levels.len() <= depth {
            let next = match levels.last() {
                Some(prev) => build_supertiles(prev),
                None => base_generation(self.params.edge_a, self.params.edge_b, self.params.rotation)?,
            };
            levels.push(Arc::new(next));
        }
        log::debug!("generation cache holds {} levels", levels.len());
        Ok(Arc::clone(&levels[depth]))
    }

    /// Number of generations built so far.
    pub fn cached_levels(&self) -> usize {
        self.levels.lock().len()
    }

    /// Drop everything above the base generation.
    pub fn clear(&self) {
        self.levels.lock().truncate(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::count_leaves;
    use spectre_types::{Label, SpectreError};

    #[test]
    fn test_builds_on_demand() {
        let cache = GenerationCache::new(10.0, 10.0, 30).unwrap();
        assert_eq!(cache.cached_levels(), 1);
        let g3 = cache.get(3).unwrap();
        assert_eq!(g3.depth(), 3);
        assert_eq!(cache.cached_levels(), 4);
        assert_eq!(count_leaves(&g3, Label::Delta), 559);
    }

    #[test]
    fn test_returns_same_generation() {
        let cache = GenerationCache::new(10.0, 10.0, 30).unwrap();
        let a = cache.get(2).unwrap();
        let b = cache.get(2).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        let shallow = cache.get(1).unwrap();
        assert_eq!(shallow.depth(), 1);
        assert_eq!(cache.cached_levels(), 3);
    }

    #[test]
    fn test_clear_keeps_base() {
        let cache = GenerationCache::new(10.0, 10.0, 30).unwrap();
        cache.get(2).unwrap();
        cache.clear();
        assert_eq!(cache.cached_levels(), 1);
        assert_eq!(cache.get(0).unwrap().depth(), 0);
    }

    #[test]
    fn test_negative_depth_rejected() {
        let cache = GenerationCache::new(10.0, 10.0, 30).unwrap();
        assert!(matches!(
            cache.get(-2),
            Err(SpectreError::InvalidIterationCount(-2))
        ));
    }

    #[test]
    fn test_shared_across_threads() {
        let cache = GenerationCache::new(10.0, 10.0, 30).unwrap();
        std::thread::scope(|s| {
            for depth in 1..=3 {
                let cache = &cache;
                s.spawn(move || {
                    let g = cache.get(depth).unwrap();
                    assert_eq!(g.depth(), depth as u32);
                });
            }
        });
        assert_eq!(cache.cached_levels(), 4);
    }
}
