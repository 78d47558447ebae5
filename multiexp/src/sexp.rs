//! Bit-sliced simultaneous square-and-multiply.

use algebra::Group;
use num_bigint::BigUint;

use crate::partition::BlockPartition;
use crate::table::BlockTable;

/// Largest bit length among `exponents`, 0 when all of them are zero.
pub fn max_bit_len(exponents: &[BigUint]) -> u64 {
    exponents.iter().map(BigUint::bits).max().unwrap_or(0)
}

/// Packs bit `bit` of every exponent into a table index. The first exponent
/// contributes the least significant bit.
pub fn bit_mask(exponents: &[BigUint], bit: u64) -> usize {
    exponents
        .iter()
        .rev()
        .fold(0, |mask, e| (mask << 1) | usize::from(e.bit(bit)))
}

/// Computes `prod base_i^exponents[i]` from the block tables of the bases.
///
/// Runs one round per bit from `bit_len - 1` down to 0. Each round squares
/// the accumulator and then multiplies in, for every block, the table entry
/// selected by that block's exponent bits. Zero masks select the identity
/// and are skipped.
pub(crate) fn simultaneous_exp<G: Group>(
    group: &G,
    partition: &BlockPartition,
    blocks: &[BlockTable<G::Element>],
    exponents: &[BigUint],
    bit_len: u64,
) -> G::Element {
    debug_assert_eq!(partition.num_blocks(), blocks.len());

    let mut result = group.identity();
    for bit in (0..bit_len).rev() {
        result = group.square(&result);

        for (table, range) in blocks.iter().zip(partition.ranges()) {
            let mask = bit_mask(&exponents[range], bit);
            if mask != 0 {
                result = group.mul(&result, &table[mask]);
            }
        }
    }
    result
}
