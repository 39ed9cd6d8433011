//! Development-related functionality.

/// Implement group law tests for a type which impls [`PrimeCurveParams`].
///
/// The calling crate needs `proptest` as a dev-dependency.
///
/// [`PrimeCurveParams`]: crate::PrimeCurveParams
#[macro_export]
macro_rules! impl_group_law_tests {
    ($curve:ty) => {
        mod group_law {
            use super::*;
            use proptest::prelude::*;
            use $crate::{AffinePoint, PrimeCurveParams, num_bigint::BigUint};

            type Point = AffinePoint<<$curve as PrimeCurveParams>::FieldElement>;

            fn mul_by_generator(k: u64) -> Point {
                <$curve>::mul_by_generator(&BigUint::from(k)).unwrap()
            }

            #[test]
            fn identity_is_neutral() {
                let generator = <$curve>::generator();
                let identity = <$curve>::identity();

                assert_eq!(identity.add(generator).unwrap(), *generator);
                assert_eq!(generator.add(&identity).unwrap(), *generator);
            }

            #[test]
            fn generator_plus_negation_is_identity() {
                let generator = <$curve>::generator();
                assert!(generator.add(&generator.neg()).unwrap().is_identity());
            }

            #[test]
            fn order_annihilates_generator() {
                let generator = <$curve>::generator();
                let order = <$curve>::order();

                assert!(generator.mul_vartime(order).unwrap().is_identity());
                assert_eq!(<$curve>::mul_by_generator(order).unwrap(), <$curve>::identity());
            }

            #[test]
            fn order_minus_one_is_negation() {
                let generator = <$curve>::generator();
                let k = <$curve>::order() - 1u32;

                assert_eq!(<$curve>::mul_by_generator(&k).unwrap(), generator.neg());
            }

            #[test]
            fn one_is_generator() {
                assert_eq!(mul_by_generator(1), *<$curve>::generator());
            }

            #[test]
            fn double_matches_add() {
                let generator = <$curve>::generator();
                assert_eq!(generator.double().unwrap(), generator.add(generator).unwrap());
            }

            #[test]
            fn repeated_add_matches_mul() {
                let generator = <$curve>::generator();
                let mut p = <$curve>::identity();

                for k in 0..16u64 {
                    assert_eq!(p, mul_by_generator(k));
                    p = p.add(generator).unwrap();
                }
            }

            proptest! {
                #![proptest_config(ProptestConfig::with_cases(32))]

                #[test]
                fn add_is_commutative(a in any::<u64>(), b in any::<u64>()) {
                    let (p, q) = (mul_by_generator(a), mul_by_generator(b));
                    prop_assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
                }

                #[test]
                fn add_is_associative(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
                    let (p, q, r) = (mul_by_generator(a), mul_by_generator(b), mul_by_generator(c));
                    prop_assert_eq!(
                        p.add(&q).unwrap().add(&r).unwrap(),
                        p.add(&q.add(&r).unwrap()).unwrap()
                    );
                }

                #[test]
                fn negation_cancels(a in any::<u64>()) {
                    let p = mul_by_generator(a);
                    prop_assert!(p.add(&p.neg()).unwrap().is_identity());
                }

                #[test]
                fn scalar_mul_distributes(a in any::<u64>(), b in any::<u64>()) {
                    let sum = BigUint::from(a) + BigUint::from(b);
                    prop_assert_eq!(
                        <$curve>::mul_by_generator(&sum).unwrap(),
                        mul_by_generator(a).add(&mul_by_generator(b)).unwrap()
                    );
                }
            }
        }
    };
}
