//! Seed errors
//!
//! Every precondition violation surfaces as a distinct `SeedError` variant so
//! callers can match on the kind instead of the message text.

use crate::seed::SeedWidth;
use std::fmt;
use thiserror::Error;

/// Errors returned by `SeedAuthority` operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeedError {
    /// Accessor, derivation or export called before any master seed was set
    #[error("Master seed not set")]
    NotSet,

    /// Accessor width does not match the stored seed width
    #[error("Master seed is {stored}, cannot read it as {requested}")]
    WrongWidth {
        requested: SeedWidth,
        stored: SeedWidth,
    },

    /// Import string does not match the `hex` / `hex:hex` grammar
    ///
    /// Carries a position, never the input: a rejected string is often a
    /// real seed with stray characters around it.
    #[error("Malformed seed string: {kind} in {field} field at byte {offset}")]
    Parse {
        field: SeedField,
        offset: usize,
        kind: ParseErrorKind,
    },
}

/// Which field of a seed string failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedField {
    /// The only field of a 64-bit seed string
    Whole,
    High,
    Low,
}

impl fmt::Display for SeedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedField::Whole => write!(f, "seed"),
            SeedField::High => write!(f, "high"),
            SeedField::Low => write!(f, "low"),
        }
    }
}

/// Why a seed string was rejected
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("empty hex field")]
    Empty,

    #[error("{digits} hex digits exceed the 16 digit limit")]
    TooLong { digits: usize },

    #[error("invalid hex digit {found:?}")]
    InvalidDigit { found: char },
}
