// Short Weierstrass curves E(GF(p)) : y^2 = x^3 + a*x + b
//
// secp256k1 is provided as a named instance:
//   p = 2^256 - 2^32 - 977
//   a = 0, b = 7
//   order n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
//   cofactor 1

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::{Group, GroupError};

// Little-endian u32 digits.
const SECP256K1_P: [u32; 8] = [
    0xfffffc2f, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
];
const SECP256K1_N: [u32; 8] = [
    0xd0364141, 0xbfd25e8c, 0xaf48a03b, 0xbaaedce6, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff,
];
const SECP256K1_GX: [u32; 8] = [
    0x16f81798, 0x59f2815b, 0x2dce28d9, 0x029bfcdb, 0xce870b07, 0x55a06295, 0xf9dcbbac, 0x79be667e,
];
const SECP256K1_GY: [u32; 8] = [
    0xfb10d4b8, 0x9c47d08f, 0xa6855419, 0xfd17b448, 0x0e1108a8, 0x5da4fbfc, 0x26a3c465, 0x483ada77,
];

/// Affine point on a short Weierstrass curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
///
/// The point at infinity always has zero coordinates so that derived
/// equality is meaningful.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Affine {
    pub x: BigUint,
    pub y: BigUint,
    pub is_infinity: bool,
}

impl Affine {
    /// The point at infinity (identity element)
    pub fn infinity() -> Self {
        Affine {
            x: BigUint::zero(),
            y: BigUint::zero(),
            is_infinity: true,
        }
    }

    /// Create a new affine point without any validation.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }
}

/// Point group of `y^2 = x^3 + a*x + b` over the prime field `GF(p)`.
///
/// `mul` is point addition and `square` is point doubling. The modulus must
/// be prime; only oddness is checked since primality testing lives outside
/// this crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveGroup {
    modulus: BigUint,
    a: BigUint,
    b: BigUint,
}

impl CurveGroup {
    pub fn new(modulus: BigUint, a: BigUint, b: BigUint) -> Result<Self, GroupError> {
        if modulus < BigUint::from(3u32) || !modulus.bit(0) {
            return Err(GroupError::InvalidFieldModulus(modulus));
        }
        let a = a % &modulus;
        let b = b % &modulus;

        // 4a^3 + 27b^2 != 0
        let disc = (BigUint::from(4u32) * &a * &a * &a + BigUint::from(27u32) * &b * &b) % &modulus;
        if disc.is_zero() {
            return Err(GroupError::SingularCurve);
        }

        Ok(Self { modulus, a, b })
    }

    pub fn secp256k1() -> Self {
        Self {
            modulus: BigUint::from_slice(&SECP256K1_P),
            a: BigUint::zero(),
            b: BigUint::from(7u32),
        }
    }

    /// Standard generator of secp256k1.
    pub fn secp256k1_generator() -> Affine {
        Affine::new(
            BigUint::from_slice(&SECP256K1_GX),
            BigUint::from_slice(&SECP256K1_GY),
        )
    }

    /// Prime order of the secp256k1 generator.
    pub fn secp256k1_order() -> BigUint {
        BigUint::from_slice(&SECP256K1_N)
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    #[inline]
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Creates a point after reducing its coordinates and checking that it
    /// lies on the curve.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Affine, GroupError> {
        let point = Affine::new(x % &self.modulus, y % &self.modulus);
        if !self.is_on_curve(&point) {
            return Err(GroupError::NotOnCurve {
                x: point.x,
                y: point.y,
            });
        }
        Ok(point)
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn is_on_curve(&self, point: &Affine) -> bool {
        if point.is_infinity {
            return true;
        }

        let y2 = self.fmul(&point.y, &point.y);
        let x2 = self.fmul(&point.x, &point.x);
        let x3 = self.fmul(&x2, &point.x);
        let ax = self.fmul(&self.a, &point.x);
        let rhs = (x3 + ax + &self.b) % &self.modulus;

        y2 == rhs
    }

    /// Point doubling: 2*P.
    pub fn double(&self, point: &Affine) -> Affine {
        if point.is_infinity {
            return point.clone();
        }

        // If y = 0, then 2P = O
        if point.y.is_zero() {
            return Affine::infinity();
        }

        // Compute slope: λ = (3x^2 + a) / (2y)
        let x2 = self.fmul(&point.x, &point.x);
        let numerator = (BigUint::from(3u32) * x2 + &self.a) % &self.modulus;
        let denominator = self.fadd(&point.y, &point.y);
        let lambda = self.fmul(&numerator, &self.finv(&denominator));

        // x_r = λ^2 - 2x
        let lambda2 = self.fmul(&lambda, &lambda);
        let x_r = self.fsub(&self.fsub(&lambda2, &point.x), &point.x);

        // y_r = λ(x - x_r) - y
        let y_r = self.fsub(&self.fmul(&lambda, &self.fsub(&point.x, &x_r)), &point.y);

        Affine::new(x_r, y_r)
    }

    /// Point addition: P + Q.
    pub fn add(&self, p: &Affine, q: &Affine) -> Affine {
        // Handle infinity cases
        if p.is_infinity {
            return q.clone();
        }
        if q.is_infinity {
            return p.clone();
        }

        // Check if points are the same
        if p.x == q.x {
            if p.y == q.y {
                return self.double(p);
            } else {
                // Points are inverses, return infinity
                return Affine::infinity();
            }
        }

        // λ = (y2 - y1) / (x2 - x1)
        let numerator = self.fsub(&q.y, &p.y);
        let denominator = self.fsub(&q.x, &p.x);
        let lambda = self.fmul(&numerator, &self.finv(&denominator));

        // x_r = λ^2 - x1 - x2
        let lambda2 = self.fmul(&lambda, &lambda);
        let x_r = self.fsub(&self.fsub(&lambda2, &p.x), &q.x);

        // y_r = λ(x1 - x_r) - y1
        let y_r = self.fsub(&self.fmul(&lambda, &self.fsub(&p.x, &x_r)), &p.y);

        Affine::new(x_r, y_r)
    }

    /// Negate a point.
    pub fn negate(&self, point: &Affine) -> Affine {
        if point.is_infinity || point.y.is_zero() {
            return point.clone();
        }
        Affine::new(point.x.clone(), &self.modulus - &point.y)
    }

    #[inline]
    fn fadd(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    #[inline]
    fn fsub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + &self.modulus - b) % &self.modulus
    }

    #[inline]
    fn fmul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    // Fermat inversion, a^(p-2). Callers never pass zero.
    fn finv(&self, a: &BigUint) -> BigUint {
        let e = &self.modulus - BigUint::from(2u32);
        a.modpow(&e, &self.modulus)
    }
}

impl Group for CurveGroup {
    type Element = Affine;

    #[inline]
    fn identity(&self) -> Affine {
        Affine::infinity()
    }

    #[inline]
    fn is_identity(&self, a: &Affine) -> bool {
        a.is_infinity
    }

    #[inline]
    fn mul(&self, a: &Affine, b: &Affine) -> Affine {
        self.add(a, b)
    }

    #[inline]
    fn square(&self, a: &Affine) -> Affine {
        self.double(a)
    }
}
