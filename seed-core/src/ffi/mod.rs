//! PyO3 wrapper for SeedAuthority
//!
//! Exposes the authority to Python generation pipelines. 128-bit seeds cross
//! the boundary as `(high, low)` tuples.
//!
//! # Example (from Python)
//!
//! ```python
//! from genesis_seed_core import SeedAuthority
//!
//! authority = SeedAuthority()
//! authority.import_from_string("deadbeefcafebabe")
//! terrain = authority.derive_seed_64("terrain", 0)
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::authority::SeedAuthority;
use crate::error::SeedError;
use crate::seed::Seed128;

/// Map seed errors onto Python exceptions
///
/// `NotSet` / `WrongWidth` are state errors (RuntimeError); `Parse` is bad
/// input (ValueError).
fn to_py_err(err: SeedError) -> PyErr {
    match err {
        SeedError::Parse { .. } => PyValueError::new_err(err.to_string()),
        SeedError::NotSet | SeedError::WrongWidth { .. } => {
            PyRuntimeError::new_err(err.to_string())
        }
    }
}

/// Python wrapper for Rust SeedAuthority
#[pyclass(name = "SeedAuthority")]
pub struct PySeedAuthority {
    inner: SeedAuthority,
}

#[pymethods]
impl PySeedAuthority {
    #[new]
    fn new() -> Self {
        PySeedAuthority {
            inner: SeedAuthority::new(),
        }
    }

    fn set_seed_64(&self, value: u64) {
        self.inner.set_seed_64(value);
    }

    fn set_seed_128(&self, high: u64, low: u64) {
        self.inner.set_seed_128(Seed128::new(high, low));
    }

    fn get_seed_64(&self) -> PyResult<u64> {
        self.inner.get_seed_64().map_err(to_py_err)
    }

    fn get_seed_128(&self) -> PyResult<(u64, u64)> {
        let seed = self.inner.get_seed_128().map_err(to_py_err)?;
        Ok((seed.high, seed.low))
    }

    fn is_set(&self) -> bool {
        self.inner.is_set()
    }

    fn derive_seed_64(&self, context: &str, identifier: u64) -> PyResult<u64> {
        self.inner
            .derive_seed_64(context, identifier)
            .map_err(to_py_err)
    }

    fn derive_seed_128(&self, context: &str, identifier: u64) -> PyResult<(u64, u64)> {
        let seed = self
            .inner
            .derive_seed_128(context, identifier)
            .map_err(to_py_err)?;
        Ok((seed.high, seed.low))
    }

    fn export_to_string(&self) -> PyResult<String> {
        self.inner.export_to_string().map_err(to_py_err)
    }

    /// Import a seed string
    ///
    /// Returns True on success; raises ValueError and keeps the old seed on
    /// failure.
    fn import_from_string(&self, value: &str) -> PyResult<bool> {
        self.inner.import_from_string(value).map_err(to_py_err)?;
        Ok(true)
    }

    fn clear(&self) {
        self.inner.clear();
    }

    fn __repr__(&self) -> String {
        match self.inner.width() {
            Some(width) => format!("SeedAuthority({} seed set)", width),
            None => "SeedAuthority(unset)".to_string(),
        }
    }
}
