//! Error types for the exponentiation engine.

use thiserror::Error;

/// Errors that can occur while building tables or exponentiating.
///
/// None of these are transient: retrying the same call fails the same way.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No bases were given to an operation that needs at least one.
    #[error("at least one base is required")]
    EmptyInput,
    #[error("block width must be at least 1")]
    ZeroBlockWidth,
    #[error("batch length must be at least 1")]
    ZeroBatchLength,
    /// The base and exponent vectors do not pair up.
    #[error("got {bases} bases but {exponents} exponents")]
    LengthMismatch { bases: usize, exponents: usize },
    /// A fixed-base table only covers exponents up to the bit length it was
    /// built for.
    #[error("exponent has {bits} bits but the table covers at most {max_bits}")]
    ExponentTooLarge { bits: u64, max_bits: u64 },
    /// The requested table would hold `2^width` elements, which is more than
    /// the engine is willing to allocate.
    #[error("block width {width} exceeds the maximum of {max}")]
    BlockWidthTooLarge { width: usize, max: usize },
    #[error("failed to allocate a table of {entries} elements")]
    AllocationFailed { entries: usize },
}

/// Coarse classification of [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The call itself was malformed.
    InvalidInput,
    /// The call was well formed but needs more memory than is available or
    /// allowed.
    ResourceLimit,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::BlockWidthTooLarge { .. } | Error::AllocationFailed { .. } => {
                ErrorKind::ResourceLimit
            }
            _ => ErrorKind::InvalidInput,
        }
    }
}
