//! Text form of a master seed
//!
//! Grammar: `hex` or `hex:hex`, each field 1 to 16 hex digits. Output is
//! always zero-padded lowercase; input accepts either case.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::{MasterSeed, Seed128};
use crate::error::{ParseErrorKind, SeedError, SeedField};

/// Maximum hex digits per 64-bit field
const MAX_HEX_DIGITS: usize = 16;

/// Render a seed in its export form
///
/// # Example
/// ```
/// use genesis_seed_core::seed::format_seed;
/// use genesis_seed_core::MasterSeed;
///
/// assert_eq!(format_seed(&MasterSeed::Bits64(0xff)), "00000000000000ff");
/// ```
pub fn format_seed(seed: &MasterSeed) -> String {
    seed.to_string()
}

/// Parse a seed from its export form
///
/// A colon selects the 128-bit form; everything after the first colon is the
/// low half, so a second colon is reported as an invalid digit.
///
/// # Errors
/// `SeedError::Parse` for empty fields, non-hex characters or fields longer
/// than 16 digits. The error names the field and byte offset only.
pub fn parse_seed(input: &str) -> Result<MasterSeed, SeedError> {
    match input.split_once(':') {
        Some((high, low)) => {
            let low_start = high.len() + 1;
            let high = parse_field(high, SeedField::High, 0)?;
            let low = parse_field(low, SeedField::Low, low_start)?;
            Ok(MasterSeed::Bits128(Seed128 { high, low }))
        }
        None => parse_field(input, SeedField::Whole, 0).map(MasterSeed::Bits64),
    }
}

/// Parse one hex field starting at byte `start` of the full input
fn parse_field(text: &str, field: SeedField, start: usize) -> Result<u64, SeedError> {
    let fail = |offset: usize, kind: ParseErrorKind| SeedError::Parse {
        field,
        offset: start + offset,
        kind,
    };

    if text.is_empty() {
        return Err(fail(0, ParseErrorKind::Empty));
    }

    let mut value = 0u64;
    let mut digits = 0usize;
    for (offset, ch) in text.char_indices() {
        let digit = ch
            .to_digit(16)
            .ok_or_else(|| fail(offset, ParseErrorKind::InvalidDigit { found: ch }))?;
        digits += 1;
        if digits > MAX_HEX_DIGITS {
            continue;
        }
        value = (value << 4) | u64::from(digit);
    }

    if digits > MAX_HEX_DIGITS {
        return Err(fail(0, ParseErrorKind::TooLong { digits }));
    }
    Ok(value)
}

impl fmt::Display for MasterSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MasterSeed::Bits64(seed) => write!(f, "{:016x}", seed),
            MasterSeed::Bits128(seed) => write!(f, "{:016x}:{:016x}", seed.high, seed.low),
        }
    }
}

impl FromStr for MasterSeed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_seed(s)
    }
}

impl Serialize for MasterSeed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MasterSeed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_seed(&text).map_err(de::Error::custom)
    }
}
