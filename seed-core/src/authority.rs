//! SeedAuthority - custody of the master seed
//!
//! Holds at most one master seed behind a single mutex. Every operation
//! takes the lock for its whole duration, so the stored width and value are
//! always observed together.
//!
//! # Lifecycle
//!
//! - Starts unset
//! - `set_*` / `import_from_string` overwrite the seed and its width
//! - `clear` zeroizes the stored words and returns to unset
//!
//! # Memory hygiene
//!
//! Zeroizing covers the authority's own copy only. `MasterSeed` is `Copy`,
//! so values handed out by the accessors, `snapshot`, `import_from_string`
//! and `set_random_*` belong to the caller and are not wiped by `clear`.
//!
//! # Determinism
//!
//! Derivation keeps no counters: the same master seed, context and
//! identifier always yield the same sub-seed.

use parking_lot::Mutex;
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use tracing::{debug, warn};
use zeroize::Zeroize;

use crate::error::SeedError;
use crate::seed::{parse_seed, MasterSeed, Seed128, Seed64, SeedWidth};

/// Thread-safe container for one master seed
///
/// Owned by whichever component coordinates a generation session; share it
/// by reference or `Arc` with anything that needs derived seeds.
///
/// # Example
/// ```
/// use genesis_seed_core::{SeedAuthority, SeedError};
///
/// let authority = SeedAuthority::new();
/// assert_eq!(authority.derive_seed_64("terrain", 0), Err(SeedError::NotSet));
///
/// authority.set_seed_64(42);
/// let chunk = authority.derive_seed_64("terrain", 7).unwrap();
/// assert_eq!(chunk, authority.derive_seed_64("terrain", 7).unwrap());
/// ```
#[derive(Default)]
pub struct SeedAuthority {
    /// `None` = unset
    state: Mutex<Option<MasterSeed>>,
}

impl SeedAuthority {
    /// Create an unset authority
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an authority already holding `seed`
    pub fn with_seed(seed: MasterSeed) -> Self {
        Self {
            state: Mutex::new(Some(seed)),
        }
    }

    /// Store a 64-bit master seed, replacing any previous seed of either width
    pub fn set_seed_64(&self, value: Seed64) {
        self.set_seed(MasterSeed::Bits64(value));
    }

    /// Store a 128-bit master seed, replacing any previous seed of either width
    pub fn set_seed_128(&self, value: Seed128) {
        self.set_seed(MasterSeed::Bits128(value));
    }

    /// Store `seed`, zeroizing the previously stored words first
    pub fn set_seed(&self, seed: MasterSeed) {
        let mut state = self.state.lock();
        if let Some(previous) = state.as_mut() {
            previous.zeroize();
        }
        *state = Some(seed);
        debug!(width = %seed.width(), "master seed set");
    }

    /// Store a fresh 64-bit master seed drawn from OS entropy
    ///
    /// Returns the stored value so the session can be recorded and replayed.
    pub fn set_random_seed_64(&self) -> Seed64 {
        let seed = OsRng.next_u64();
        self.set_seed_64(seed);
        seed
    }

    /// Store a fresh 128-bit master seed drawn from OS entropy
    pub fn set_random_seed_128(&self) -> Seed128 {
        let seed = Seed128 {
            high: OsRng.next_u64(),
            low: OsRng.next_u64(),
        };
        self.set_seed_128(seed);
        seed
    }

    /// Read the 64-bit master seed
    ///
    /// # Errors
    /// - `NotSet` if no seed is stored
    /// - `WrongWidth` if a 128-bit seed is stored
    pub fn get_seed_64(&self) -> Result<Seed64, SeedError> {
        match *self.state.lock() {
            None => Err(SeedError::NotSet),
            Some(MasterSeed::Bits64(seed)) => Ok(seed),
            Some(MasterSeed::Bits128(_)) => Err(SeedError::WrongWidth {
                requested: SeedWidth::Bits64,
                stored: SeedWidth::Bits128,
            }),
        }
    }

    /// Read the 128-bit master seed
    ///
    /// # Errors
    /// - `NotSet` if no seed is stored
    /// - `WrongWidth` if a 64-bit seed is stored
    pub fn get_seed_128(&self) -> Result<Seed128, SeedError> {
        match *self.state.lock() {
            None => Err(SeedError::NotSet),
            Some(MasterSeed::Bits128(seed)) => Ok(seed),
            Some(MasterSeed::Bits64(_)) => Err(SeedError::WrongWidth {
                requested: SeedWidth::Bits128,
                stored: SeedWidth::Bits64,
            }),
        }
    }

    pub fn is_set(&self) -> bool {
        self.state.lock().is_some()
    }

    /// Width of the stored seed, `None` when unset
    pub fn width(&self) -> Option<SeedWidth> {
        self.state.lock().as_ref().map(MasterSeed::width)
    }

    /// Copy of the stored seed, `None` when unset
    pub fn snapshot(&self) -> Option<MasterSeed> {
        *self.state.lock()
    }

    /// Derive a 64-bit sub-seed for `context` / `identifier`
    ///
    /// # Errors
    /// `NotSet` if no seed is stored.
    pub fn derive_seed_64(&self, context: &str, identifier: u64) -> Result<Seed64, SeedError> {
        let state = self.state.lock();
        let seed = state.as_ref().ok_or(SeedError::NotSet)?;
        Ok(seed.derive_64(context, identifier))
    }

    /// Derive a 128-bit sub-seed for `context` / `identifier`
    ///
    /// Works for either master width; see [`MasterSeed::derive_128`].
    ///
    /// # Errors
    /// `NotSet` if no seed is stored.
    pub fn derive_seed_128(&self, context: &str, identifier: u64) -> Result<Seed128, SeedError> {
        let state = self.state.lock();
        let seed = state.as_ref().ok_or(SeedError::NotSet)?;
        Ok(seed.derive_128(context, identifier))
    }

    /// Export the master seed as `hex` or `hex:hex`
    ///
    /// # Errors
    /// `NotSet` if no seed is stored; there is no placeholder output.
    pub fn export_to_string(&self) -> Result<String, SeedError> {
        let state = self.state.lock();
        state
            .as_ref()
            .map(MasterSeed::to_string)
            .ok_or(SeedError::NotSet)
    }

    /// Replace the master seed with one parsed from `input`
    ///
    /// The string is parsed before the lock is taken; on failure the stored
    /// seed is left exactly as it was.
    ///
    /// # Errors
    /// `Parse` if `input` is not `hex` or `hex:hex` with 1-16 digits per field.
    pub fn import_from_string(&self, input: &str) -> Result<MasterSeed, SeedError> {
        let seed = parse_seed(input).map_err(|err| {
            warn!(error = %err, "rejected master seed import");
            err
        })?;
        self.set_seed(seed);
        Ok(seed)
    }

    /// Zeroize the stored seed and return to unset
    pub fn clear(&self) {
        let mut state = self.state.lock();
        if let Some(seed) = state.as_mut() {
            seed.zeroize();
            debug!("master seed cleared");
        }
        *state = None;
    }
}

impl Drop for SeedAuthority {
    fn drop(&mut self) {
        if let Some(seed) = self.state.get_mut().as_mut() {
            seed.zeroize();
        }
    }
}

// Never print the seed itself.
impl fmt::Debug for SeedAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedAuthority")
            .field("width", &self.width())
            .finish()
    }
}
