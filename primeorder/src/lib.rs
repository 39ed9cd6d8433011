#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

#[cfg(test)]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod affine;
mod dev;
mod error;

pub use crate::{
    affine::AffinePoint,
    error::{Error, Result},
};
pub use num_bigint;
pub use primefield::{self, Field};

use num_bigint::BigUint;

/// Parameters for elliptic curves of prime order which can be described by the
/// short Weierstrass equation.
pub trait PrimeCurveParams: 'static {
    /// Base field element type.
    type FieldElement: Field;

    /// Coefficient `a` in the curve equation.
    fn equation_a() -> &'static Self::FieldElement;

    /// Coefficient `b` in the curve equation.
    fn equation_b() -> &'static Self::FieldElement;

    /// Order of the group generated by [`PrimeCurveParams::generator`].
    fn order() -> &'static BigUint;

    /// Base point of the curve.
    fn generator() -> &'static AffinePoint<Self::FieldElement>;

    /// Additive identity of the group a.k.a. the point at infinity.
    fn identity() -> AffinePoint<Self::FieldElement> {
        AffinePoint::identity(Self::equation_a().clone(), Self::equation_b().clone())
    }

    /// Multiply `point` by the scalar `k`.
    ///
    /// `k` is reduced modulo the group order before the double-and-add
    /// ladder runs.
    fn mul(
        point: &AffinePoint<Self::FieldElement>,
        k: &BigUint,
    ) -> Result<AffinePoint<Self::FieldElement>> {
        if point.a() != Self::equation_a() || point.b() != Self::equation_b() {
            return Err(Error::CurveMismatch);
        }

        point.mul_vartime(&(k % Self::order()))
    }

    /// Multiply the generator by the scalar `k`.
    fn mul_by_generator(k: &BigUint) -> Result<AffinePoint<Self::FieldElement>> {
        Self::mul(Self::generator(), k)
    }

    /// Calculates `x * k + y * l`.
    fn lincomb(
        x: &AffinePoint<Self::FieldElement>,
        k: &BigUint,
        y: &AffinePoint<Self::FieldElement>,
        l: &BigUint,
    ) -> Result<AffinePoint<Self::FieldElement>> {
        Self::mul(x, k)?.add(&Self::mul(y, l)?)
    }
}
