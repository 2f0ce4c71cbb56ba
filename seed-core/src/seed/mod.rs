//! Seed value types
//!
//! `MasterSeed` is a tagged value: it carries exactly one of a 64-bit or a
//! 128-bit seed, so the "never both" invariant is structural.

mod format;

pub use format::{format_seed, parse_seed};

use std::fmt;
use zeroize::Zeroize;

use crate::hash::{mix, FIXED_SALT};

/// 64-bit seed value
pub type Seed64 = u64;

/// 128-bit seed value, stored as two independent 64-bit halves
///
/// The halves are never combined with carry-propagating arithmetic; each is
/// hashed on its own during derivation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Seed128 {
    pub high: u64,
    pub low: u64,
}

impl Seed128 {
    pub const fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }
}

impl Zeroize for Seed128 {
    fn zeroize(&mut self) {
        self.high.zeroize();
        self.low.zeroize();
    }
}

/// Width of a stored master seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedWidth {
    Bits64,
    Bits128,
}

impl fmt::Display for SeedWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedWidth::Bits64 => write!(f, "64-bit"),
            SeedWidth::Bits128 => write!(f, "128-bit"),
        }
    }
}

/// A master seed of either width
///
/// Text form (used by `Display`, `FromStr` and serde) is 16 lowercase hex
/// digits for 64-bit seeds and `high:low` for 128-bit seeds.
///
/// # Example
/// ```
/// use genesis_seed_core::{MasterSeed, Seed128};
///
/// let seed = MasterSeed::Bits128(Seed128::new(1, 2));
/// assert_eq!(seed.to_string(), "0000000000000001:0000000000000002");
/// assert_eq!("0000000000000001:0000000000000002".parse::<MasterSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MasterSeed {
    Bits64(Seed64),
    Bits128(Seed128),
}

impl MasterSeed {
    pub fn width(&self) -> SeedWidth {
        match self {
            MasterSeed::Bits64(_) => SeedWidth::Bits64,
            MasterSeed::Bits128(_) => SeedWidth::Bits128,
        }
    }

    /// Derive a 64-bit sub-seed
    ///
    /// Hashes `context` with the low 64 bits of the master (the `low` half
    /// for 128-bit seeds) and XORs in `identifier`.
    pub fn derive_64(&self, context: &str, identifier: u64) -> Seed64 {
        let base = match self {
            MasterSeed::Bits64(seed) => *seed,
            MasterSeed::Bits128(seed) => seed.low,
        };
        mix(context, base) ^ identifier
    }

    /// Derive a 128-bit sub-seed
    ///
    /// A 128-bit master hashes each half independently. A 64-bit master
    /// hashes itself for `high` and itself XOR [`FIXED_SALT`] for `low`, so
    /// the two halves never coincide.
    pub fn derive_128(&self, context: &str, identifier: u64) -> Seed128 {
        match self {
            MasterSeed::Bits128(seed) => Seed128 {
                high: mix(context, seed.high) ^ identifier,
                low: mix(context, seed.low) ^ identifier,
            },
            MasterSeed::Bits64(seed) => Seed128 {
                high: mix(context, *seed) ^ identifier,
                low: mix(context, *seed ^ FIXED_SALT) ^ identifier,
            },
        }
    }
}

impl Zeroize for MasterSeed {
    fn zeroize(&mut self) {
        match self {
            MasterSeed::Bits64(seed) => seed.zeroize(),
            MasterSeed::Bits128(seed) => seed.zeroize(),
        }
    }
}

impl From<Seed64> for MasterSeed {
    fn from(seed: Seed64) -> Self {
        MasterSeed::Bits64(seed)
    }
}

impl From<Seed128> for MasterSeed {
    fn from(seed: Seed128) -> Self {
        MasterSeed::Bits128(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_follows_variant() {
        assert_eq!(MasterSeed::Bits64(5).width(), SeedWidth::Bits64);
        assert_eq!(
            MasterSeed::Bits128(Seed128::new(5, 6)).width(),
            SeedWidth::Bits128
        );
    }

    #[test]
    fn test_derive_64_uses_low_half_of_128_bit_master() {
        let wide = MasterSeed::Bits128(Seed128::new(0xAAAA, 77));
        let narrow = MasterSeed::Bits64(77);
        assert_eq!(wide.derive_64("terrain", 3), narrow.derive_64("terrain", 3));
    }

    #[test]
    fn test_derive_128_from_64_bit_master_salts_low_half() {
        let seed = MasterSeed::Bits64(42);
        let derived = seed.derive_128("weather", 0);
        assert_eq!(derived.high, mix("weather", 42));
        assert_eq!(derived.low, mix("weather", 42 ^ FIXED_SALT));
        assert_ne!(derived.high, derived.low);
    }

    #[test]
    fn test_zeroize_clears_payload() {
        let mut seed = MasterSeed::Bits128(Seed128::new(u64::MAX, 12));
        seed.zeroize();
        assert_eq!(seed, MasterSeed::Bits128(Seed128::default()));
    }
}
