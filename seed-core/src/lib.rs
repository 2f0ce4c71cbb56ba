//! Genesis Seed Core - master seed custody and derivation
//!
//! Holds one authoritative master seed (64-bit or 128-bit) and derives
//! reproducible, context-scoped sub-seeds from it for procedural generation.
//!
//! # Architecture
//!
//! - **seed**: Seed value types (Seed64, Seed128, MasterSeed) and the string format
//! - **hash**: FNV-1a style mixing function used for derivation
//! - **authority**: Thread-safe SeedAuthority container
//! - **source**: Configurable seed sources (fixed, imported, OS entropy)
//! - **error**: SeedError and parse failure kinds
//!
//! # Critical Invariants
//!
//! 1. Exactly one seed width is stored at a time (64-bit XOR 128-bit)
//! 2. Derivation is a pure function of (master seed, context, identifier)
//! 3. Every authority operation runs under a single lock (no torn reads)
//! 4. Failed imports never mutate the stored seed
//!
//! The mixing function is not cryptographically secure. Derived seeds are
//! reproducible, not unpredictable.

// Module declarations
pub mod authority;
pub mod error;
pub mod hash;
pub mod seed;
pub mod source;

// Re-exports for convenience
pub use authority::SeedAuthority;
pub use error::{ParseErrorKind, SeedError, SeedField};
pub use hash::{mix, FIXED_SALT};
pub use seed::{MasterSeed, Seed128, Seed64, SeedWidth};
pub use source::SeedSource;

// FFI module (when feature enabled)
#[cfg(feature = "python")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn genesis_seed_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::PySeedAuthority>()?;
    Ok(())
}
