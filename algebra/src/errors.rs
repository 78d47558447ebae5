//! Errors raised when constructing groups or their elements.

use num_bigint::BigUint;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    /// Integers modulo 0 or 1 do not form a useful multiplicative group.
    #[error("modulus {0} is too small, it must be at least 2")]
    ModulusTooSmall(BigUint),
    /// Curves are only supported over odd prime fields.
    #[error("curve modulus {0} must be an odd prime")]
    InvalidFieldModulus(BigUint),
    /// The curve is singular, i.e. `4a^3 + 27b^2 = 0`.
    #[error("curve coefficients describe a singular curve")]
    SingularCurve,
    #[error("point ({x}, {y}) is not on the curve")]
    NotOnCurve { x: BigUint, y: BigUint },
}
