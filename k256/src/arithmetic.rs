//! Group operations on secp256k1.

pub(crate) mod field;
pub(crate) mod scalar;

pub(crate) mod util;

pub use field::FieldElement;
pub use scalar::Scalar;

use crate::{FieldBytes, PrimeCurveParams, Secp256k1};
use alloc::boxed::Box;
use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::race::OnceBox;

/// A point on the secp256k1 curve in affine coordinates.
pub type AffinePoint = primeorder::AffinePoint<FieldElement>;

const CURVE_EQUATION_B_SINGLE: u64 = 7;

const GENERATOR_X: FieldBytes =
    hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");

const GENERATOR_Y: FieldBytes =
    hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");

impl PrimeCurveParams for Secp256k1 {
    type FieldElement = FieldElement;

    fn equation_a() -> &'static FieldElement {
        static EQUATION_A: OnceBox<FieldElement> = OnceBox::new();
        EQUATION_A.get_or_init(|| Box::new(FieldElement::zero()))
    }

    fn equation_b() -> &'static FieldElement {
        static EQUATION_B: OnceBox<FieldElement> = OnceBox::new();
        EQUATION_B.get_or_init(|| Box::new(FieldElement::from_u64(CURVE_EQUATION_B_SINGLE)))
    }

    fn order() -> &'static BigUint {
        scalar::order()
    }

    fn generator() -> &'static AffinePoint {
        static GENERATOR: OnceBox<AffinePoint> = OnceBox::new();
        GENERATOR.get_or_init(|| {
            Box::new(AffinePoint::from_coordinates_unchecked(
                FieldElement::from_bytes_unchecked(&GENERATOR_X),
                FieldElement::from_bytes_unchecked(&GENERATOR_Y),
                Self::equation_a().clone(),
                Self::equation_b().clone(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AffinePoint, FieldElement, GENERATOR_X, GENERATOR_Y};
    use crate::{PrimeCurveParams, Secp256k1};
    use hex_literal::hex;
    use num_bigint::BigUint;

    #[test]
    fn generator_is_on_curve() {
        let x = FieldElement::from_bytes(&GENERATOR_X).unwrap();
        let y = FieldElement::from_bytes(&GENERATOR_Y).unwrap();

        let checked =
            AffinePoint::new(x, y, FieldElement::zero(), FieldElement::from_u64(7)).unwrap();
        assert_eq!(&checked, Secp256k1::generator());
    }

    #[test]
    fn order_times_generator_is_identity() {
        let g = Secp256k1::generator();
        assert!(g.mul_vartime(Secp256k1::order()).unwrap().is_identity());
    }

    #[test]
    fn scalar_reduced_before_mul() {
        let k = Secp256k1::order() + BigUint::from(2u32);
        assert_eq!(
            Secp256k1::mul_by_generator(&k).unwrap(),
            Secp256k1::generator().double().unwrap()
        );
    }

    #[test]
    fn known_multiple() {
        let p = Secp256k1::mul_by_generator(&BigUint::from(5000u32)).unwrap();
        let (x, y) = p.coordinates().unwrap();

        assert_eq!(
            x.to_bytes(),
            hex!("ffe558e388852f0120e46af2d1b370f85854a8eb0841811ece0e3e03d282d57c")
        );
        assert_eq!(
            y.to_bytes(),
            hex!("315dc72890a4f10a1481c031b03b351b0dc79901ca18a00cf009dbdb157a1d10")
        );
    }
}
