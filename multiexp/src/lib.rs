//! Windowed, batched multi-base exponentiation over abstract groups.
//!
//! This library computes products of powers `prod b_i^(e_i)` and powers of a
//! fixed base faster than independent square-and-multiply, for any
//! [`Group`] from the `algebra` crate:
//! - Bases are split into blocks of `w` elements and every block is
//!   expanded into a table of all `2^w` subset products.
//! - All exponents are scanned together, one bit position per round, so the
//!   squarings are shared by every base.
//! - Long base vectors are processed in batches to bound table memory.
//! - A fixed base is turned into `w` derived bases so that a single exponent
//!   becomes a `w`-base simultaneous exponentiation.
//!
//! # Example
//!
//! ```
//! use algebra::{BigUint, Group, ModGroup};
//! use multiexp::{FixedBaseTable, MultiExp};
//!
//! let group = ModGroup::new(BigUint::from(101u32)).expect("modulus");
//! let bases = [2u32, 3, 5].map(|b| group.element(b));
//! let exponents = [7u32, 11, 13].map(BigUint::from);
//!
//! let product = group.simultaneous_exp(&bases, &exponents).expect("exp");
//! assert_eq!(product, group.product_of_powers(&bases, &exponents));
//!
//! let table = FixedBaseTable::with_width(&group, &bases[2], 7, 3).expect("table");
//! let power = table.exp(&BigUint::from(97u32)).expect("exp");
//! assert_eq!(power, group.exp(&bases[2], &BigUint::from(97u32)));
//! ```
//!
//! The engine is not constant time: the sequence of group operations
//! depends on the exponent bits.

mod batch;
mod constants;
mod errors;
mod fixed;
mod params;
mod partition;
mod sexp;
mod table;
mod width;

#[cfg(test)]
mod tests;

use algebra::Group;
use num_bigint::BigUint;

pub use batch::{simultaneous_exp, simultaneous_exp_batched, simultaneous_exp_with};
pub use constants::{DEFAULT_BATCH_LEN, MAX_BLOCK_WIDTH};
pub use errors::{Error, ErrorKind};
pub use fixed::FixedBaseTable;
pub use params::SimExpParams;
pub use partition::BlockPartition;
pub use sexp::{bit_mask, max_bit_len};
pub use table::{BlockTable, SimExpTable};
pub use width::{fixed_base_block_width, sim_exp_block_width};

/// Exponentiation engine entry points as methods on any [`Group`].
pub trait MultiExp: Group + Sized {
    /// See [`simultaneous_exp`].
    fn simultaneous_exp(
        &self,
        bases: &[Self::Element],
        exponents: &[BigUint],
    ) -> Result<Self::Element, Error> {
        batch::simultaneous_exp(self, bases, exponents)
    }

    /// See [`simultaneous_exp_with`].
    fn simultaneous_exp_with(
        &self,
        bases: &[Self::Element],
        exponents: &[BigUint],
        params: &SimExpParams,
    ) -> Result<Self::Element, Error> {
        batch::simultaneous_exp_with(self, bases, exponents, params)
    }

    /// See [`FixedBaseTable::new`].
    fn fixed_base_table(
        &self,
        base: &Self::Element,
        bit_len: u64,
        expected_exps: usize,
    ) -> Result<FixedBaseTable<'_, Self>, Error> {
        FixedBaseTable::new(self, base, bit_len, expected_exps)
    }
}

impl<G: Group> MultiExp for G {}
