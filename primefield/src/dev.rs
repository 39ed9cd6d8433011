//! Development-related functionality.

/// Implement property-based tests of the field axioms for a type which
/// impls the [`Field`](crate::Field) trait.
///
/// - `$element`: maps an arbitrary `u64` onto an element of the field
/// - `$one`: multiplicative identity of the field
/// - `$order`: `p - 1` as a [`BigInt`](num_bigint::BigInt)
///
/// The calling crate needs `proptest` as a dev-dependency.
#[macro_export]
macro_rules! impl_field_axiom_tests {
    ($element:expr, $one:expr, $order:expr) => {
        mod field_axioms {
            use super::*;
            use proptest::prelude::*;
            use $crate::Field as _;

            proptest! {
                #[test]
                fn add_is_commutative(a in any::<u64>(), b in any::<u64>()) {
                    let (a, b) = (($element)(a), ($element)(b));
                    prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
                }

                #[test]
                fn mul_is_commutative(a in any::<u64>(), b in any::<u64>()) {
                    let (a, b) = (($element)(a), ($element)(b));
                    prop_assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
                }

                #[test]
                fn add_is_associative(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
                    let (a, b, c) = (($element)(a), ($element)(b), ($element)(c));
                    prop_assert_eq!(
                        a.add(&b).unwrap().add(&c).unwrap(),
                        a.add(&b.add(&c).unwrap()).unwrap()
                    );
                }

                #[test]
                fn mul_is_associative(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
                    let (a, b, c) = (($element)(a), ($element)(b), ($element)(c));
                    prop_assert_eq!(
                        a.mul(&b).unwrap().mul(&c).unwrap(),
                        a.mul(&b.mul(&c).unwrap()).unwrap()
                    );
                }

                #[test]
                fn mul_distributes_over_add(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
                    let (a, b, c) = (($element)(a), ($element)(b), ($element)(c));
                    prop_assert_eq!(
                        a.mul(&b.add(&c).unwrap()).unwrap(),
                        a.mul(&b).unwrap().add(&a.mul(&c).unwrap()).unwrap()
                    );
                }

                #[test]
                fn sub_undoes_add(a in any::<u64>(), b in any::<u64>()) {
                    let (a, b) = (($element)(a), ($element)(b));
                    prop_assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
                }

                #[test]
                fn self_division_is_one(a in any::<u64>()) {
                    let a = ($element)(a);
                    prop_assume!(!a.is_zero());
                    prop_assert_eq!(a.div(&a).unwrap(), $one);
                }

                #[test]
                fn fermat_little_theorem(a in any::<u64>()) {
                    let a = ($element)(a);
                    prop_assume!(!a.is_zero());
                    prop_assert_eq!(a.pow(&$order), $one);
                }

                #[test]
                fn negative_power_is_inverse(a in any::<u64>()) {
                    let a = ($element)(a);
                    prop_assume!(!a.is_zero());
                    let inverse = a.pow(&$crate::num_bigint::BigInt::from(-1));
                    prop_assert_eq!(a.mul(&inverse).unwrap(), $one);
                }

                #[test]
                fn neg_is_additive_inverse(a in any::<u64>()) {
                    let a = ($element)(a);
                    prop_assert!(a.add(&a.neg()).unwrap().is_zero());
                }
            }
        }
    };
}
