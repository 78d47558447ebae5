use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};

use crate::{Group, GroupError};

/// Multiplicative group of integers modulo `N`.
///
/// Elements are canonical residues in `[0, N)`. Nothing checks that an
/// element is a unit; products of non-units stay well defined, they just
/// fall outside the group proper.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModGroup {
    modulus: BigUint,
}

impl ModGroup {
    pub fn new(modulus: BigUint) -> Result<Self, GroupError> {
        if modulus < BigUint::from(2u32) {
            return Err(GroupError::ModulusTooSmall(modulus));
        }
        Ok(Self { modulus })
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Reduces an arbitrary integer into the group's canonical range.
    pub fn element(&self, value: impl Into<BigUint>) -> BigUint {
        value.into() % &self.modulus
    }
}

impl Group for ModGroup {
    type Element = BigUint;

    #[inline]
    fn identity(&self) -> BigUint {
        BigUint::one()
    }

    #[inline]
    fn is_identity(&self, a: &BigUint) -> bool {
        a.is_one()
    }

    #[inline]
    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    #[inline]
    fn square(&self, a: &BigUint) -> BigUint {
        (a * a) % &self.modulus
    }
}
