use super::modular::inverse;
use crate::curve::Curve;
use crate::CurveError;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use serde::Serialize;

use std::fmt;

/// Group element of an elliptic curve over a prime field.
///
/// The additive group has two kinds of elements: finite affine points and
/// the point at infinity, the neutral element. Every operation matches on
/// both variants so no case of the group law can be left unhandled.
///
/// Elements keep a shared reference to the curve they live on. Arithmetic
/// between elements of different curves fails with `CurveMismatch`, while
/// comparing them is allowed and simply yields inequality.
///
/// Affine coordinates are normalized into `[0, p)` on construction, so the
/// derived structural equality coincides with equality of residue classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Point<'c> {
    Affine {
        curve: &'c Curve,
        x: BigInt,
        y: BigInt,
    },
    Identity(&'c Curve),
}

impl fmt::Display for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Affine { x, y, .. } => write!(f, "({}, {})", x, y),
            Self::Identity(_) => write!(f, "infinity"),
        }
    }
}

impl std::ops::Neg for Point<'_> {
    type Output = Self;
    fn neg(self) -> Self {
        match self {
            Self::Identity(curve) => Self::Identity(curve),
            Self::Affine { curve, x, y } => {
                let y = (-y).mod_floor(curve.modulus());
                Self::Affine { curve, x, y }
            }
        }
    }
}

impl<'c> std::ops::Neg for &Point<'c> {
    type Output = Point<'c>;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<'c> std::ops::Mul<&BigInt> for &Point<'c> {
    type Output = Point<'c>;
    fn mul(self, rhs: &BigInt) -> Self::Output {
        self.scalar_mul(rhs)
    }
}

impl<'c> Point<'c> {
    /// Fails with `NotOnCurve` if the coordinates do not satisfy the curve
    /// equation.
    pub fn new(curve: &'c Curve, x: BigInt, y: BigInt) -> Result<Self, CurveError> {
        if !curve.on_curve(&x, &y) {
            return Err(CurveError::NotOnCurve {
                x,
                y,
                curve: curve.to_string(),
            });
        }
        let p = curve.modulus();
        Ok(Self::Affine {
            curve,
            x: x.mod_floor(p),
            y: y.mod_floor(p),
        })
    }

    pub fn identity(curve: &'c Curve) -> Self {
        Self::Identity(curve)
    }

    pub fn curve(&self) -> &'c Curve {
        match self {
            Self::Affine { curve, .. } | Self::Identity(curve) => *curve,
        }
    }

    pub fn x(&self) -> Option<&BigInt> {
        match self {
            Self::Affine { x, .. } => Some(x),
            Self::Identity(_) => None,
        }
    }

    pub fn y(&self) -> Option<&BigInt> {
        match self {
            Self::Affine { y, .. } => Some(y),
            Self::Identity(_) => None,
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity(_))
    }

    pub fn is_on_curve(&self) -> bool {
        match self {
            Self::Affine { curve, x, y } => curve.on_curve(x, y),
            Self::Identity(_) => true,
        }
    }

    /// Chord-and-tangent addition. Fails with `CurveMismatch` when the
    /// operands are bound to unequal curves.
    pub fn geometric_add(&self, rhs: &Self) -> Result<Self, CurveError> {
        if self.curve() != rhs.curve() {
            return Err(CurveError::CurveMismatch(
                self.curve().to_string(),
                rhs.curve().to_string(),
            ));
        }
        Ok(self.add_unchecked(rhs))
    }

    pub fn double(&self) -> Self {
        self.add_unchecked(self)
    }

    /// Double-and-add over the binary digits of the scalar, least
    /// significant bit first. The scalar is not reduced by any group order
    /// and a negative scalar multiplies the negated point.
    ///
    /// The loop visits a digit per bit, so the scalar's bit pattern leaks
    /// through timing. Callers feeding secret scalars need a constant-time
    /// ladder instead.
    pub fn scalar_mul(&self, scalar: &BigInt) -> Self {
        let mut q = Self::Identity(self.curve());
        let mut current = if scalar.sign() == Sign::Minus {
            -self
        } else {
            self.clone()
        };
        let magnitude = scalar.magnitude();
        for i in 0..magnitude.bits() {
            if magnitude.bit(i) {
                q = q.add_unchecked(&current);
            }
            current = current.double();
        }
        q
    }

    // Operands must be bound to the same curve; `geometric_add` checks.
    fn add_unchecked(&self, rhs: &Self) -> Self {
        let (curve, x1, y1, x2, y2) = match (self, rhs) {
            (Self::Identity(_), _) => return rhs.clone(),
            (_, Self::Identity(_)) => return self.clone(),
            (
                Self::Affine {
                    curve,
                    x: x1,
                    y: y1,
                },
                Self::Affine { x: x2, y: y2, .. },
            ) => (*curve, x1, y1, x2, y2),
        };
        let p = curve.modulus();

        // The operands sit on a vertical line: same x, opposite y. Their
        // sum is the point at infinity. This also covers doubling a point
        // with y = 0, whose tangent is vertical, and it has to be checked
        // before the slope computation below ever divides by zero.
        if x1 == x2 && *y2 == (-y1).mod_floor(p) {
            return Self::Identity(curve);
        }

        let lambda = if x1 == x2 {
            let numer = BigInt::from(3u8) * x1.pow(2) + curve.a();
            let denom = BigInt::from(2u8) * y1;
            // NOTE unwrap is fine because y1 is nonzero modulo the odd
            // prime p, so 2 * y1 is invertible
            (numer * inverse(&denom, p).unwrap()).mod_floor(p)
        } else {
            let numer = y2 - y1;
            let denom = x2 - x1;
            // NOTE unwrap is fine because x1 != x2 modulo p
            (numer * inverse(&denom, p).unwrap()).mod_floor(p)
        };

        let x3 = (lambda.pow(2) - x1 - x2).mod_floor(p);
        let y3 = ((x1 - &x3) * lambda - y1).mod_floor(p);
        debug_assert!(curve.on_curve(&x3, &y3));

        Self::Affine {
            curve,
            x: x3,
            y: y3,
        }
    }
}
