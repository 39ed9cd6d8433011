//! Affine curve points.

use crate::{Error, Result};
use core::fmt;
use num_bigint::{BigInt, BigUint};
use primefield::Field;

/// Point on a short Weierstrass curve `y² = x³ + ax + b` in affine
/// coordinates.
///
/// Either both coordinates are present or neither is; a point without
/// coordinates is the identity (the point at infinity).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint<F> {
    /// Coordinates `(x, y)`, or `None` for the point at infinity.
    coordinates: Option<(F, F)>,

    /// Coefficient `a` in the curve equation.
    a: F,

    /// Coefficient `b` in the curve equation.
    b: F,
}

#[allow(clippy::should_implement_trait)]
impl<F: Field> AffinePoint<F> {
    /// Create a new point, checking that `(x, y)` satisfies the curve
    /// equation.
    pub fn new(x: F, y: F, a: F, b: F) -> Result<Self> {
        let lhs = y.square()?;
        let rhs = x.square()?.mul(&x)?.add(&a.mul(&x)?)?.add(&b)?;

        if lhs != rhs {
            return Err(Error::CurveMembership);
        }

        Ok(Self {
            coordinates: Some((x, y)),
            a,
            b,
        })
    }

    /// Create a point from optional coordinates: `None` gives the identity.
    pub fn from_coordinates(coordinates: Option<(F, F)>, a: F, b: F) -> Result<Self> {
        match coordinates {
            Some((x, y)) => Self::new(x, y, a, b),
            None => Ok(Self::identity(a, b)),
        }
    }

    /// Create a point without checking the curve equation.
    ///
    /// The caller must ensure `(x, y)` lies on the curve, e.g. for hardcoded
    /// generator coordinates.
    pub fn from_coordinates_unchecked(x: F, y: F, a: F, b: F) -> Self {
        Self {
            coordinates: Some((x, y)),
            a,
            b,
        }
    }

    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity(a: F, b: F) -> Self {
        Self {
            coordinates: None,
            a,
            b,
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.coordinates.is_none()
    }

    /// Affine coordinates, if this is not the point at infinity.
    pub fn coordinates(&self) -> Option<(&F, &F)> {
        self.coordinates.as_ref().map(|(x, y)| (x, y))
    }

    /// x-coordinate
    pub fn x(&self) -> Option<&F> {
        self.coordinates.as_ref().map(|(x, _)| x)
    }

    /// y-coordinate
    pub fn y(&self) -> Option<&F> {
        self.coordinates.as_ref().map(|(_, y)| y)
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &F {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &F {
        &self.b
    }

    /// Returns `-self`: the point with the same x-coordinate and negated y.
    pub fn neg(&self) -> Self {
        Self {
            coordinates: self.coordinates.as_ref().map(|(x, y)| (x.clone(), y.neg())),
            a: self.a.clone(),
            b: self.b.clone(),
        }
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.a != other.a || self.b != other.b {
            return Err(Error::CurveMismatch);
        }

        let ((x1, y1), (x2, y2)) = match (&self.coordinates, &other.coordinates) {
            (None, _) => return Ok(other.clone()),
            (_, None) => return Ok(self.clone()),
            (Some(p), Some(q)) => (p, q),
        };

        if x1 == x2 {
            // Either `other == self` or `other == -self`
            return if y1 == y2 {
                self.double()
            } else {
                Ok(self.to_identity())
            };
        }

        let slope = y2.sub(y1)?.div(&x2.sub(x1)?)?;
        self.chord(&slope, x1, y1, x2)
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Result<Self> {
        let (x, y) = match &self.coordinates {
            Some((x, y)) => (x, y),
            None => return Ok(self.clone()),
        };

        // Vertical tangent
        if y.is_zero() {
            return Ok(self.to_identity());
        }

        let numerator = x.square()?.scalar_mul(&BigInt::from(3u8)).add(&self.a)?;
        let slope = numerator.div(&y.scalar_mul(&BigInt::from(2u8)))?;
        self.chord(&slope, x, y, x)
    }

    /// Returns `[k] self`.
    ///
    /// Double-and-add over the bits of `k`, least significant first. `k` is
    /// not reduced; see [`PrimeCurveParams::mul`](crate::PrimeCurveParams::mul).
    ///
    /// **This operation is variable time with respect to the scalar.**
    pub fn mul_vartime(&self, k: &BigUint) -> Result<Self> {
        let mut result = self.to_identity();
        let mut current = self.clone();

        for i in 0..k.bits() {
            if k.bit(i) {
                result = result.add(&current)?;
            }

            current = current.double()?;
        }

        Ok(result)
    }

    /// Third point on the line of slope `s` through `(x1, y1)` and `(x2, _)`,
    /// reflected over the x-axis.
    fn chord(&self, slope: &F, x1: &F, y1: &F, x2: &F) -> Result<Self> {
        let x3 = slope.square()?.sub(x1)?.sub(x2)?;
        let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;

        Ok(Self {
            coordinates: Some((x3, y3)),
            a: self.a.clone(),
            b: self.b.clone(),
        })
    }

    fn to_identity(&self) -> Self {
        Self::identity(self.a.clone(), self.b.clone())
    }
}

impl<F: Field + fmt::Display> fmt::Display for AffinePoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coordinates {
            Some((x, y)) => write!(f, "Point({x}, {y})_{}_{}", self.a, self.b),
            None => f.write_str("Point(infinity)"),
        }
    }
}
