//! Block width selection.
//!
//! Two cost models are used. Both trade the cost of building a `2^w` entry
//! table against the number of multiplications per exponent bit, and both
//! are discrete local-minimum searches rather than closed forms.

use crate::constants::{FIXED_BASE_INITIAL_COST_FACTOR, MAX_BLOCK_WIDTH};

/// Block width for simultaneous exponentiation of `batch_len` bases with
/// exponents of at most `bit_len` bits.
///
/// Cost of width `w` is `(2^w - w + bit_len) / batch_len + bit_len / w`. The
/// width is increased while the cost strictly decreases.
pub fn sim_exp_block_width(bit_len: u64, batch_len: usize) -> usize {
    if bit_len == 0 || batch_len == 0 {
        return 1;
    }

    let cost = |width: usize| -> f64 {
        let bits = bit_len as f64;
        let table = ((1u64 << width) as f64 - width as f64 + bits) / batch_len as f64;
        let multiply = bits / width as f64;
        table + multiply
    };

    let mut width = 1;
    let mut best = cost(width);
    while width < MAX_BLOCK_WIDTH {
        let next = cost(width + 1);
        if next >= best {
            break;
        }
        width += 1;
        best = next;
    }
    width
}

/// Block width for a fixed-base table serving about `size` exponentiations
/// with exponents of `bit_len` bits.
///
/// Cost of width `w` is `(2^w - w + bit_len) / size + bit_len / w` in integer
/// arithmetic. The search starts at 2 and returns the first width whose cost
/// does not improve on its predecessor, i.e. one above the model's optimum.
/// That offset is an empirical correction for table overhead and is only
/// validated by benchmarks.
pub fn fixed_base_block_width(bit_len: u64, size: usize) -> usize {
    let size = size.max(1) as u64;

    let mut width: u64 = 2;
    let mut cost = FIXED_BASE_INITIAL_COST_FACTOR * bit_len as f64;
    loop {
        let old_cost = cost;

        // Amortized cost for table.
        let t = ((1u64 << width) - width + bit_len) / size;
        // Cost for multiplication.
        let m = bit_len / width;
        cost = (t + m) as f64;

        width += 1;
        if cost >= old_cost || width > MAX_BLOCK_WIDTH as u64 {
            break;
        }
    }

    (width - 1) as usize
}
