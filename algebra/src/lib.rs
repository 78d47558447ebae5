//! Groups for exponentiation over arbitrary-precision integers.
//!
//! This crate provides the [`Group`] abstraction consumed by the `multiexp`
//! engine together with two instantiations: the multiplicative group of
//! integers modulo `N` and the point group of a short Weierstrass curve over
//! a prime field. Group parameters live in the group value; elements are
//! plain data.

mod affine;
mod errors;
mod group;
mod modular;
mod random;

pub use affine::{Affine, CurveGroup};
pub use errors::GroupError;
pub use group::Group;
pub use modular::ModGroup;
pub use num_bigint::BigUint;
pub use random::{random_below, random_exponent, RandomElement};
