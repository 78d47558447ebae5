//! Fixed-base exponentiation.
//!
//! For a base `b` and a slice length `L`, the table holds the subset products
//! of `d_k = b^(2^(k*L))` for `k = 0..w`. An exponent `e` is cut into `w`
//! slices `e_k` of `L` bits, and `b^e = prod d_k^(e_k)` is evaluated as a
//! simultaneous exponentiation with `L` rounds.

use algebra::Group;
use num_bigint::BigUint;
use num_traits::One;
use tracing::{debug, instrument};

use crate::constants::MAX_BLOCK_WIDTH;
use crate::errors::Error;
use crate::table::SimExpTable;
use crate::width::fixed_base_block_width;

/// Precomputed table for repeated exponentiation of one base.
pub struct FixedBaseTable<'g, G: Group> {
    table: SimExpTable<'g, G>,
    slice_bit_len: u64,
}

impl<'g, G: Group> FixedBaseTable<'g, G> {
    /// Builds a table for exponents of at most `bit_len` bits, sized for
    /// about `expected_exps` exponentiations.
    pub fn new(
        group: &'g G,
        base: &G::Element,
        bit_len: u64,
        expected_exps: usize,
    ) -> Result<Self, Error> {
        let width = fixed_base_block_width(bit_len, expected_exps);
        debug!(width, bit_len, expected_exps, "selected fixed-base width");
        Self::with_width(group, base, bit_len, width)
    }

    /// Builds a table of the given width for exponents of at most `bit_len`
    /// bits.
    #[instrument(skip_all, name = "multiexp::fixed_base", fields(bit_len = bit_len, width = width))]
    pub fn with_width(
        group: &'g G,
        base: &G::Element,
        bit_len: u64,
        width: usize,
    ) -> Result<Self, Error> {
        if width == 0 {
            return Err(Error::ZeroBlockWidth);
        }
        if width > MAX_BLOCK_WIDTH {
            return Err(Error::BlockWidthTooLarge {
                width,
                max: MAX_BLOCK_WIDTH,
            });
        }

        // A table always covers at least one bit per slice.
        let slice_bit_len = bit_len.div_ceil(width as u64).max(1);

        let mut derived = Vec::with_capacity(width);
        derived.push(base.clone());
        for k in 1..width {
            let next = group.square_n(&derived[k - 1], slice_bit_len);
            derived.push(next);
        }

        let table = SimExpTable::build(group, &derived, width)?;
        debug!(slice_bit_len, "built fixed-base table");

        Ok(Self {
            table,
            slice_bit_len,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.table.block_width()
    }

    /// Bit length `L` of each exponent slice.
    #[inline]
    pub fn slice_bit_len(&self) -> u64 {
        self.slice_bit_len
    }

    /// Longest exponent the table can handle, `width * L` bits.
    #[inline]
    pub fn max_bit_len(&self) -> u64 {
        self.width() as u64 * self.slice_bit_len
    }

    /// Computes `base^exponent`.
    pub fn exp(&self, exponent: &BigUint) -> Result<G::Element, Error> {
        let bits = exponent.bits();
        if bits > self.max_bit_len() {
            return Err(Error::ExponentTooLarge {
                bits,
                max_bits: self.max_bit_len(),
            });
        }

        let slices = self.slice(exponent);
        Ok(self.table.exp_with_bit_len(&slices, self.slice_bit_len))
    }

    /// Splits `exponent` into `width` slices of `L` bits, least significant
    /// slice first.
    fn slice(&self, exponent: &BigUint) -> Vec<BigUint> {
        let mask = (BigUint::one() << self.slice_bit_len) - 1u32;
        (0..self.width() as u64)
            .map(|k| (exponent >> (k * self.slice_bit_len)) & &mask)
            .collect()
    }
}
