//! Subset-product tables.
//!
//! A block of `w` bases is expanded into `2^w` group elements, one per subset
//! of the bases: entry `mask` holds the product of the bases whose index bit
//! is set in `mask`, and entry 0 is the identity.

use core::ops::Index;

use algebra::Group;
use num_bigint::BigUint;
use tracing::{debug, instrument};

use crate::constants::MAX_BLOCK_WIDTH;
use crate::errors::Error;
use crate::partition::BlockPartition;
use crate::sexp::{max_bit_len, simultaneous_exp};

/// Subset-product table of a single block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockTable<E> {
    width: usize,
    entries: Vec<E>,
}

impl<E: Clone> BlockTable<E> {
    /// Builds the table for `bases`, whose length is the block width.
    ///
    /// Each entry that is not the identity or a single base costs exactly one
    /// group multiplication, `2^w - w - 1` in total: the entry for `mask` is
    /// `table[mask ^ low] * table[low]` where `low` is the lowest set bit of
    /// `mask`, and both factors have smaller indices.
    pub fn build<G>(group: &G, bases: &[E]) -> Result<Self, Error>
    where
        G: Group<Element = E>,
    {
        let width = bases.len();
        if width == 0 {
            return Err(Error::ZeroBlockWidth);
        }
        if width > MAX_BLOCK_WIDTH {
            return Err(Error::BlockWidthTooLarge {
                width,
                max: MAX_BLOCK_WIDTH,
            });
        }

        let len = 1usize << width;
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed { entries: len })?;

        entries.push(group.identity());
        for mask in 1..len {
            let entry = if mask.is_power_of_two() {
                bases[mask.trailing_zeros() as usize].clone()
            } else {
                let low = mask & mask.wrapping_neg();
                group.mul(&entries[mask ^ low], &entries[low])
            };
            entries.push(entry);
        }

        Ok(Self { width, entries })
    }
}

impl<E> BlockTable<E> {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of entries, `2^width`.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, mask: usize) -> Option<&E> {
        self.entries.get(mask)
    }
}

impl<E> Index<usize> for BlockTable<E> {
    type Output = E;

    #[inline]
    fn index(&self, mask: usize) -> &E {
        &self.entries[mask]
    }
}

/// Precomputed tables for a fixed vector of bases, split into blocks.
///
/// The table borrows the group, so it can only be applied with the
/// parameters it was built for. Building it once and calling [`exp`] for
/// many exponent vectors amortizes the precomputation.
///
/// [`exp`]: SimExpTable::exp
pub struct SimExpTable<'g, G: Group> {
    group: &'g G,
    partition: BlockPartition,
    blocks: Vec<BlockTable<G::Element>>,
}

impl<'g, G: Group> SimExpTable<'g, G> {
    #[instrument(skip_all, name = "multiexp::table", fields(len = bases.len(), block_width = block_width))]
    pub fn build(group: &'g G, bases: &[G::Element], block_width: usize) -> Result<Self, Error> {
        let partition = BlockPartition::new(bases.len(), block_width)?;

        // The first block is the widest one.
        let widest = partition.block_width(0);
        if widest > MAX_BLOCK_WIDTH {
            return Err(Error::BlockWidthTooLarge {
                width: widest,
                max: MAX_BLOCK_WIDTH,
            });
        }

        let mut blocks = Vec::with_capacity(partition.num_blocks());
        for range in partition.ranges() {
            blocks.push(BlockTable::build(group, &bases[range])?);
        }

        debug!(
            blocks = partition.num_blocks(),
            last_width = partition.last_width(),
            "built simultaneous exponentiation table"
        );

        Ok(Self {
            group,
            partition,
            blocks,
        })
    }

    #[inline]
    pub fn group(&self) -> &'g G {
        self.group
    }

    /// Number of bases the table was built for.
    #[inline]
    pub fn num_bases(&self) -> usize {
        self.partition.num_bases()
    }

    #[inline]
    pub fn block_width(&self) -> usize {
        self.partition.width()
    }

    #[inline]
    pub fn partition(&self) -> &BlockPartition {
        &self.partition
    }

    #[inline]
    pub fn blocks(&self) -> &[BlockTable<G::Element>] {
        &self.blocks
    }

    /// Computes `prod bases[i]^exponents[i]`.
    pub fn exp(&self, exponents: &[BigUint]) -> Result<G::Element, Error> {
        if exponents.len() != self.num_bases() {
            return Err(Error::LengthMismatch {
                bases: self.num_bases(),
                exponents: exponents.len(),
            });
        }
        Ok(self.exp_with_bit_len(exponents, max_bit_len(exponents)))
    }

    /// Runs `bit_len` rounds of square-and-multiply. The exponent count must
    /// match and no exponent may be longer than `bit_len`.
    pub(crate) fn exp_with_bit_len(&self, exponents: &[BigUint], bit_len: u64) -> G::Element {
        debug_assert_eq!(exponents.len(), self.num_bases());
        debug_assert!(max_bit_len(exponents) <= bit_len);
        simultaneous_exp(
            self.group,
            &self.partition,
            &self.blocks,
            exponents,
            bit_len,
        )
    }
}
