use core::fmt::Debug;

use num_bigint::BigUint;

/// Abelian group written multiplicatively.
///
/// Implementors carry the group parameters (modulus, curve coefficients) and
/// the elements are plain values that only make sense relative to the group
/// they were produced by.
pub trait Group {
    type Element: Clone + Debug + PartialEq + Eq;

    fn identity(&self) -> Self::Element;
    fn is_identity(&self, a: &Self::Element) -> bool;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn square(&self, a: &Self::Element) -> Self::Element;

    /// Plain square-and-multiply, scanning the exponent from bit 0 upwards.
    fn exp(&self, base: &Self::Element, exponent: &BigUint) -> Self::Element {
        let mut result = self.identity();
        let mut temp = base.clone();
        let bits = exponent.bits();

        for i in 0..bits {
            if exponent.bit(i) {
                result = self.mul(&result, &temp);
            }
            if i + 1 < bits {
                temp = self.square(&temp);
            }
        }

        result
    }

    fn exp_u64(&self, base: &Self::Element, n: u64) -> Self::Element {
        if n == 0 {
            return self.identity();
        }
        if n == 1 {
            return base.clone();
        }

        let mut result = self.identity();
        let mut temp = base.clone();
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result = self.mul(&result, &temp);
            }
            bits >>= 1;
            if bits > 0 {
                temp = self.square(&temp);
            }
        }

        result
    }

    /// Computes `a^(2^n)` by squaring `n` times.
    fn square_n(&self, a: &Self::Element, n: u64) -> Self::Element {
        let mut result = a.clone();
        for _ in 0..n {
            result = self.square(&result);
        }
        result
    }

    /// Product of independent powers, `prod bases[i]^exponents[i]`.
    fn product_of_powers(&self, bases: &[Self::Element], exponents: &[BigUint]) -> Self::Element {
        assert_eq!(
            bases.len(),
            exponents.len(),
            "Bases and exponents must have same length"
        );

        let mut result = self.identity();
        for (base, exponent) in bases.iter().zip(exponents.iter()) {
            result = self.mul(&result, &self.exp(base, exponent));
        }
        result
    }
}
