use num_bigint::BigUint;
use rand::RngCore;

use crate::ModGroup;

/// Samples a uniformly random integer of at most `bits` bits.
pub fn random_exponent<R: RngCore + ?Sized>(rng: &mut R, bits: u64) -> BigUint {
    if bits == 0 {
        return BigUint::default();
    }

    let mut bytes = vec![0u8; bits.div_ceil(8) as usize];
    rng.fill_bytes(&mut bytes);

    // Clear the excess high bits of the most significant byte.
    let excess = bytes.len() as u64 * 8 - bits;
    if let Some(top) = bytes.last_mut() {
        *top &= 0xff >> excess;
    }

    BigUint::from_bytes_le(&bytes)
}

/// Samples a uniformly random integer in `[0, bound)` by rejection.
pub fn random_below<R: RngCore + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    let bits = bound.bits();
    loop {
        let candidate = random_exponent(rng, bits);
        if &candidate < bound {
            return candidate;
        }
    }
}

/// Helper trait for sampling random group elements.
pub trait RandomElement {
    type Element;

    fn random_element<R: RngCore + ?Sized>(&self, rng: &mut R) -> Self::Element;
}

impl RandomElement for ModGroup {
    type Element = BigUint;

    /// Uniform non-zero residue.
    fn random_element<R: RngCore + ?Sized>(&self, rng: &mut R) -> BigUint {
        let upper = self.modulus() - 1u32;
        random_below(rng, &upper) + 1u32
    }
}
