//! Seed sources
//!
//! Describes where a session's master seed comes from: a fixed constant, a
//! previously exported string, or fresh OS entropy. Sources deserialize from
//! configuration, e.g.
//!
//! ```json
//! { "type": "Imported", "value": "deadbeefcafebabe" }
//! ```

use serde::{Deserialize, Serialize};

use crate::authority::SeedAuthority;
use crate::error::SeedError;
use crate::seed::{MasterSeed, Seed128};

/// Where a master seed comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SeedSource {
    /// Fixed 64-bit constant
    Fixed64 { seed: u64 },

    /// Fixed 128-bit constant
    Fixed128 { high: u64, low: u64 },

    /// Export string (`hex` or `hex:hex`)
    Imported { value: String },

    /// Fresh 64-bit seed from OS entropy
    Random64,

    /// Fresh 128-bit seed from OS entropy
    Random128,
}

impl SeedSource {
    /// True if applying this source twice can yield different seeds
    pub fn is_random(&self) -> bool {
        matches!(self, SeedSource::Random64 | SeedSource::Random128)
    }
}

impl SeedAuthority {
    /// Create an authority seeded from `source`
    ///
    /// # Example
    /// ```
    /// use genesis_seed_core::{SeedAuthority, SeedSource};
    ///
    /// let authority = SeedAuthority::from_source(&SeedSource::Fixed64 { seed: 42 }).unwrap();
    /// assert_eq!(authority.get_seed_64(), Ok(42));
    /// ```
    pub fn from_source(source: &SeedSource) -> Result<Self, SeedError> {
        let authority = SeedAuthority::new();
        authority.apply_source(source)?;
        Ok(authority)
    }

    /// Replace the master seed according to `source`
    ///
    /// Returns the seed now held, which for random sources is the only record
    /// of the value.
    ///
    /// # Errors
    /// `Parse` for a malformed `Imported` value; the stored seed is unchanged.
    pub fn apply_source(&self, source: &SeedSource) -> Result<MasterSeed, SeedError> {
        let seed = match source {
            SeedSource::Fixed64 { seed } => {
                self.set_seed_64(*seed);
                MasterSeed::Bits64(*seed)
            }
            SeedSource::Fixed128 { high, low } => {
                let seed = Seed128::new(*high, *low);
                self.set_seed_128(seed);
                MasterSeed::Bits128(seed)
            }
            SeedSource::Imported { value } => self.import_from_string(value)?,
            SeedSource::Random64 => MasterSeed::Bits64(self.set_random_seed_64()),
            SeedSource::Random128 => MasterSeed::Bits128(self.set_random_seed_128()),
        };
        Ok(seed)
    }
}
