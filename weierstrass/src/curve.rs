use crate::CurveError;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use std::fmt;

/// Elliptic curve of Weierstrass normal form `y^2 = x^3 + ax + b` over a
/// prime field.
///
/// The coefficients are kept exactly as supplied, so two curves with the
/// same point set but differently represented coefficients (e.g. `-1` and
/// `p - 1`) compare unequal. The name participates in equality as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curve {
    a: BigInt,
    b: BigInt,
    p: BigInt,
    name: String,
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: y^2 = x^3 + {}x + {} mod {}",
            self.name, self.a, self.b, self.p
        )
    }
}

impl Curve {
    /// Fails with `InvalidCurve` if the defining cubic has a repeated root,
    /// i.e. `4a^3 + 27b^2 = 0 mod p`.
    ///
    /// The modulus is assumed to be an odd prime greater than 3; primality
    /// is the caller's responsibility and is not verified here.
    pub fn new(a: BigInt, b: BigInt, p: BigInt, name: &str) -> Result<Self, CurveError> {
        let curve = Self {
            a,
            b,
            p,
            name: name.to_string(),
        };
        if curve.is_singular() {
            Err(CurveError::InvalidCurve(curve.to_string()))
        } else {
            Ok(curve)
        }
    }

    pub fn is_singular(&self) -> bool {
        let discriminant = BigInt::from(4u8) * self.a.pow(3) + BigInt::from(27u8) * self.b.pow(2);
        discriminant.mod_floor(&self.p).is_zero()
    }

    pub fn on_curve(&self, x: &BigInt, y: &BigInt) -> bool {
        (y.pow(2) - x.pow(3) - &self.a * x - &self.b)
            .mod_floor(&self.p)
            .is_zero()
    }

    pub fn a(&self) -> &BigInt {
        &self.a
    }

    pub fn b(&self) -> &BigInt {
        &self.b
    }

    pub fn modulus(&self) -> &BigInt {
        &self.p
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
