//! FNV-1a style mixing function
//!
//! Combines a 64-bit seed and a context label into a new 64-bit value.
//! The seed is folded into the FNV offset basis, then each UTF-8 byte of the
//! context is XORed into the accumulator, followed by a wrapping multiply by
//! the FNV prime.
//!
//! # Limitations
//!
//! This is a demo-grade mixer, NOT a cryptographic hash. Outputs are
//! reproducible but predictable to anyone who knows the master seed.
//!
//! For a fixed context, `mix` is a bijection on the seed: both the XOR and the
//! multiply by an odd constant are invertible modulo 2^64. Distinct seeds
//! therefore always produce distinct outputs for the same context.

/// FNV-1a 64-bit offset basis
pub const FNV_OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;

/// FNV-1a 64-bit prime
pub const FNV_PRIME: u64 = 1_099_511_628_211;

/// Salt applied to a 64-bit master when deriving the low half of a 128-bit seed
pub const FIXED_SALT: u64 = 0xDEAD_BEEF_CAFE_BABE;

/// Mix `context` into `seed`
///
/// # Example
/// ```
/// use genesis_seed_core::hash::{mix, FNV_OFFSET_BASIS};
///
/// // Empty context leaves the seeded basis untouched
/// assert_eq!(mix("", 0), FNV_OFFSET_BASIS);
/// assert_ne!(mix("terrain", 42), mix("weather", 42));
/// ```
pub fn mix(context: &str, seed: u64) -> u64 {
    context
        .bytes()
        .fold(FNV_OFFSET_BASIS ^ seed, |acc, byte| {
            (acc ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        })
}
