// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied; PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the spectre tiling kernel.
//!
//! Exposes `TilingConfig`, `SpectreTiling`, `GenerationCache` and
//! `prototile_points` to the sensor-placement scripts.
//!
//! # FFI Safety
//!
//! - Leaf callbacks run with the GIL held for the whole walk.
//! - A callback that raises stops the walk; the exception is re-raised
//!   once the walk has unwound.
//! - All config validated before storage (`TilingConfig::validate()`).
//!
//! Install: `pip install -e crates/spectre-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! from spectre_kernel import TilingConfig, SpectreTiling
//!
//! tiling = SpectreTiling(TilingConfig(iterations=2))
//! tiling.for_each_leaf(lambda rows, label: print(label, rows))
//! ```

use std::ops::ControlFlow;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use spectre_core::{
    build_from_config, collect_leaves, collect_records, count_leaves, for_each_leaf_limited,
    Generation, OrientationHistogram, TileCensus,
};
use spectre_geometry::Transform;
use spectre_types::{records_to_json, Label, LeafLabel, SpectreError, TilingConfig};

fn to_py_err(e: SpectreError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

type Rows = ((f64, f64, f64), (f64, f64, f64));

fn rows(t: &Transform) -> Rows {
    ((t.a, t.b, t.tx), (t.c, t.d, t.ty))
}

// ─── PyTilingConfig ─────────────────────────────────────────────────

/// Python-visible tiling configuration.
#[pyclass(name = "TilingConfig")]
#[derive(Clone)]
struct PyTilingConfig {
    inner: TilingConfig,
}

#[pymethods]
impl PyTilingConfig {
    #[new]
    #[pyo3(signature = (
        edge_a = 10.0,
        edge_b = 10.0,
        iterations = 3,
        rotation = 30,
        root = "Delta",
        max_tiles = None,
    ))]
    fn new(
        edge_a: f64,
        edge_b: f64,
        iterations: i32,
        rotation: i32,
        root: &str,
        max_tiles: Option<usize>,
    ) -> PyResult<Self> {
        let config = TilingConfig {
            edge_a,
            edge_b,
            iterations,
            rotation,
            root: root.parse::<Label>().map_err(to_py_err)?,
            max_tiles,
        };
        config.validate().map_err(to_py_err)?;
        Ok(Self { inner: config })
    }

    /// Construct from JSON string.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = TilingConfig::from_json(json).map_err(to_py_err)?;
        config.validate().map_err(to_py_err)?;
        Ok(Self { inner: config })
    }

    fn to_json(&self) -> PyResult<String> {
        self.inner.to_json().map_err(to_py_err)
    }

    #[getter]
    fn edge_a(&self) -> f64 {
        self.inner.edge_a
    }

    #[getter]
    fn edge_b(&self) -> f64 {
        self.inner.edge_b
    }

    #[getter]
    fn iterations(&self) -> i32 {
        self.inner.iterations
    }

    #[getter]
    fn rotation(&self) -> i32 {
        self.inner.rotation
    }

    #[getter]
    fn root(&self) -> &'static str {
        self.inner.root.name()
    }

    #[getter]
    fn max_tiles(&self) -> Option<usize> {
        self.inner.max_tiles
    }

    fn __repr__(&self) -> String {
        format!(
            "TilingConfig(edge_a={}, edge_b={}, iterations={}, rotation={}, root={})",
            self.inner.edge_a,
            self.inner.edge_b,
            self.inner.iterations,
            self.inner.rotation,
            self.inner.root
        )
    }
}

// ─── SpectreTiling ──────────────────────────────────────────────────

/// A built tiling plus the config it was built from.
#[pyclass(name = "SpectreTiling")]
struct PySpectreTiling {
    config: TilingConfig,
    generation: Generation,
}

impl PySpectreTiling {
    fn root_label(&self, root: Option<&str>) -> PyResult<Label> {
        match root {
            Some(name) => name.parse::<Label>().map_err(to_py_err),
            None => Ok(self.config.root),
        }
    }
}

#[pymethods]
impl PySpectreTiling {
    #[new]
    #[pyo3(signature = (config = None))]
    fn new(config: Option<PyTilingConfig>) -> PyResult<Self> {
        let config = config.map(|c| c.inner).unwrap_or_default();
        let generation = build_from_config(&config).map_err(to_py_err)?;
        Ok(Self { config, generation })
    }

    #[getter]
    fn depth(&self) -> u32 {
        self.generation.depth()
    }

    #[getter]
    fn config(&self) -> PyTilingConfig {
        PyTilingConfig {
            inner: self.config.clone(),
        }
    }

    /// Reference quad of the built generation as `[(x, y); 4]`.
    #[getter]
    fn quad(&self) -> Vec<(f64, f64)> {
        self.generation.quad().iter().map(|p| (p.x, p.y)).collect()
    }

    #[pyo3(signature = (root = None))]
    fn leaf_count(&self, root: Option<&str>) -> PyResult<usize> {
        Ok(count_leaves(&self.generation, self.root_label(root)?))
    }

    /// All leaves as `(label, ((a, b, tx), (c, d, ty)))`, in walk order.
    #[pyo3(signature = (root = None))]
    fn leaves(&self, root: Option<&str>) -> PyResult<Vec<(&'static str, Rows)>> {
        let root = self.root_label(root)?;
        Ok(collect_leaves(&self.generation, root)
            .iter()
            .map(|(t, label)| (label.name(), rows(t)))
            .collect())
    }

    /// Call `callback(rows, label)` for each leaf.
    ///
    /// Returning `False` stops the walk; any other return continues.
    /// The config's `max_tiles` caps the walk. Returns the number of
    /// leaves delivered.
    #[pyo3(signature = (callback, root = None))]
    fn for_each_leaf(
        &self,
        py: Python<'_>,
        callback: PyObject,
        root: Option<&str>,
    ) -> PyResult<usize> {
        let root = self.root_label(root)?;
        let mut delivered = 0usize;
        let mut raised: Option<PyErr> = None;
        let mut visitor = |t: &Transform, label: LeafLabel| -> ControlFlow<()> {
            delivered += 1;
            match callback.call1(py, (rows(t), label.name())) {
                Ok(ret) => {
                    if matches!(ret.extract::<bool>(py), Ok(false)) {
                        ControlFlow::Break(())
                    } else {
                        ControlFlow::Continue(())
                    }
                }
                Err(e) => {
                    raised = Some(e);
                    ControlFlow::Break(())
                }
            }
        };
        let _ = for_each_leaf_limited(&self.generation, root, self.config.max_tiles, &mut visitor);
        match raised {
            Some(e) => Err(e),
            None => Ok(delivered),
        }
    }

    /// Label and quadrant counts. Returns a dict.
    #[pyo3(signature = (root = None))]
    fn census<'py>(&self, py: Python<'py>, root: Option<&str>) -> PyResult<Bound<'py, PyDict>> {
        let census =
            TileCensus::of(&self.generation, self.root_label(root)?).map_err(to_py_err)?;
        let dict = PyDict::new(py);
        dict.set_item("total", census.total)?;
        dict.set_item("mystic", census.mystic)?;
        let labels = PyDict::new(py);
        for (label, n) in census.label_counts() {
            labels.set_item(label.name(), n)?;
        }
        dict.set_item("labels", labels)?;
        let q = census.quadrants;
        dict.set_item("positive_x", q.positive_x)?;
        dict.set_item("negative_x", q.negative_x)?;
        dict.set_item("x_zeros", q.zero_x)?;
        dict.set_item("positive_y", q.positive_y)?;
        dict.set_item("negative_y", q.negative_y)?;
        dict.set_item("y_zeros", q.zero_y)?;
        Ok(dict)
    }

    /// `[(angle, mirrored, count)]` sorted by orientation.
    #[pyo3(signature = (root = None))]
    fn orientation_histogram(&self, root: Option<&str>) -> PyResult<Vec<(i32, bool, usize)>> {
        let histogram = OrientationHistogram::of(&self.generation, self.root_label(root)?)
            .map_err(to_py_err)?;
        Ok(histogram
            .entries()
            .into_iter()
            .map(|(o, n)| (o.angle, o.mirrored, n))
            .collect())
    }

    /// Exported tile records as a JSON array string.
    #[pyo3(signature = (root = None))]
    fn records_json(&self, root: Option<&str>) -> PyResult<String> {
        let root = self.root_label(root)?;
        let records =
            collect_records(&self.generation, root, self.config.max_tiles).map_err(to_py_err)?;
        records_to_json(&records).map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "SpectreTiling(depth={}, root={}, leaves={})",
            self.generation.depth(),
            self.config.root,
            count_leaves(&self.generation, self.config.root)
        )
    }
}

// ─── GenerationCache ────────────────────────────────────────────────

/// Builds each depth once for a fixed parameter set.
#[pyclass(name = "GenerationCache")]
struct PyGenerationCache {
    inner: spectre_core::GenerationCache,
}

#[pymethods]
impl PyGenerationCache {
    #[new]
    #[pyo3(signature = (edge_a = 10.0, edge_b = 10.0, rotation = 30))]
    fn new(edge_a: f64, edge_b: f64, rotation: i32) -> PyResult<Self> {
        let inner =
            spectre_core::GenerationCache::new(edge_a, edge_b, rotation).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Leaf count under `root` at `depth`.
    #[pyo3(signature = (depth, root = "Delta"))]
    fn leaf_count(&self, depth: i32, root: &str) -> PyResult<usize> {
        let label = root.parse::<Label>().map_err(to_py_err)?;
        let generation = self.inner.get(depth).map_err(to_py_err)?;
        Ok(count_leaves(&generation, label))
    }

    #[getter]
    fn cached_levels(&self) -> usize {
        self.inner.cached_levels()
    }

    fn clear(&self) {
        self.inner.clear();
    }
}

// ─── Free functions ─────────────────────────────────────────────────

/// Prototile vertices for a leaf label, `[(x, y); 14]`.
#[pyfunction]
#[pyo3(signature = (label, edge_a = 10.0, edge_b = 10.0))]
fn prototile_points(label: &str, edge_a: f64, edge_b: f64) -> PyResult<Vec<(f64, f64)>> {
    let label = label.parse::<LeafLabel>().map_err(to_py_err)?;
    let points = spectre_geometry::prototile_points(label, edge_a, edge_b).map_err(to_py_err)?;
    Ok(points.iter().map(|p| (p.x, p.y)).collect())
}

// ─── Module Registration ────────────────────────────────────────────

/// Spectre Tiling Kernel — Rust-accelerated aperiodic monotile tilings.
///
/// - `TilingConfig`: configuration
/// - `SpectreTiling`: built tiling, leaf enumeration, census, export
/// - `GenerationCache`: depth sweeps for one parameter set
/// - `prototile_points`: prototile polygon vertices
#[pymodule]
fn spectre_kernel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTilingConfig>()?;
    m.add_class::<PySpectreTiling>()?;
    m.add_class::<PyGenerationCache>()?;
    m.add_function(wrap_pyfunction!(prototile_points, m)?)?;
    Ok(())
}
