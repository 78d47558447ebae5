//! Tuning constants for the exponentiation engine.

/// Number of bases processed per batch when the caller does not choose.
///
/// With 100 bases sharing every squaring, the amortized cost of the
/// squarings is small compared to the multiplications.
pub const DEFAULT_BATCH_LEN: usize = 100;

/// Largest block width for which a table will be built.
///
/// A block of width `w` owns `2^w` group elements, so this bounds a single
/// block table at 65536 entries. Both width selectors clamp to it and an
/// explicitly requested wider block is refused.
pub const MAX_BLOCK_WIDTH: usize = 16;

/// Starting cost of the fixed-base width search, as a multiple of the
/// exponent bit length.
pub(crate) const FIXED_BASE_INITIAL_COST_FACTOR: f64 = 1.5;
