//! Batched simultaneous exponentiation.
//!
//! Large base vectors are processed in consecutive batches so that only one
//! batch's tables are alive at a time. Every batch runs the same number of
//! rounds, the maximal bit length over all exponents, and its result is
//! multiplied into a running product.

use algebra::Group;
use num_bigint::BigUint;
use tracing::{debug, instrument, trace};

use crate::errors::Error;
use crate::params::SimExpParams;
use crate::sexp::max_bit_len;
use crate::table::SimExpTable;
use crate::width::sim_exp_block_width;

fn check_shape<E>(bases: &[E], exponents: &[BigUint]) -> Result<(), Error> {
    if bases.len() != exponents.len() {
        return Err(Error::LengthMismatch {
            bases: bases.len(),
            exponents: exponents.len(),
        });
    }
    if bases.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(())
}

/// Computes `prod bases[i]^exponents[i]` with tables of width `block_width`,
/// processing at most `batch_len` bases at a time.
///
/// The result does not depend on `block_width` or `batch_len`.
#[instrument(
    skip_all,
    name = "multiexp::batched",
    fields(len = bases.len(), block_width = block_width, batch_len = batch_len)
)]
pub fn simultaneous_exp_batched<G: Group>(
    group: &G,
    bases: &[G::Element],
    exponents: &[BigUint],
    block_width: usize,
    batch_len: usize,
) -> Result<G::Element, Error> {
    check_shape(bases, exponents)?;
    if block_width == 0 {
        return Err(Error::ZeroBlockWidth);
    }
    if batch_len == 0 {
        return Err(Error::ZeroBatchLength);
    }

    let bit_len = max_bit_len(exponents);

    let mut result = group.identity();
    for (i, (batch_bases, batch_exponents)) in bases
        .chunks(batch_len)
        .zip(exponents.chunks(batch_len))
        .enumerate()
    {
        // The last batch may be shorter and gets its own, smaller table.
        let table = SimExpTable::build(group, batch_bases, block_width)?;
        let partial = table.exp_with_bit_len(batch_exponents, bit_len);
        result = group.mul(&result, &partial);

        trace!(batch = i, len = batch_bases.len(), "batch done");
    }

    Ok(result)
}

/// Computes `prod bases[i]^exponents[i]` with the given parameters, picking
/// the block width when none is configured.
pub fn simultaneous_exp_with<G: Group>(
    group: &G,
    bases: &[G::Element],
    exponents: &[BigUint],
    params: &SimExpParams,
) -> Result<G::Element, Error> {
    params.validate()?;
    check_shape(bases, exponents)?;

    let batch_len = params.batch_len.min(bases.len());
    let block_width = match params.block_width {
        Some(width) => width,
        None => {
            let width = sim_exp_block_width(max_bit_len(exponents), batch_len);
            debug!(width, batch_len, "selected block width");
            width
        }
    };

    simultaneous_exp_batched(group, bases, exponents, block_width, batch_len)
}

/// Computes `prod bases[i]^exponents[i]` with default batching and an
/// automatically selected block width.
pub fn simultaneous_exp<G: Group>(
    group: &G,
    bases: &[G::Element],
    exponents: &[BigUint],
) -> Result<G::Element, Error> {
    simultaneous_exp_with(group, bases, exponents, &SimExpParams::default())
}
