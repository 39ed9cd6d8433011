//! Field elements carrying a runtime modulus.

use crate::{Error, Field, Result};
use core::fmt;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Element of the prime field GF(p), where `p` is the element's modulus.
///
/// The value is always kept in canonical form, i.e. `0 <= value < modulus`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    modulus: BigUint,
}

#[allow(clippy::should_implement_trait)]
impl FieldElement {
    /// Create a new field element, checking that `value` is in `[0, modulus)`.
    ///
    /// The modulus is assumed to be prime: division and exponentiation rely on
    /// Fermat's little theorem and give meaningless results otherwise.
    pub fn new(value: impl Into<BigUint>, modulus: impl Into<BigUint>) -> Result<Self> {
        let value = value.into();
        let modulus = modulus.into();

        if modulus < BigUint::from(2u8) {
            return Err(Error::InvalidModulus);
        }

        if value >= modulus {
            return Err(Error::InvalidElement);
        }

        Ok(Self { value, modulus })
    }

    /// Create a new field element by reducing `value` modulo `modulus`.
    pub fn from_uint_reduced(value: &BigUint, modulus: impl Into<BigUint>) -> Result<Self> {
        let modulus = modulus.into();

        if modulus < BigUint::from(2u8) {
            return Err(Error::InvalidModulus);
        }

        Ok(Self {
            value: value % &modulus,
            modulus,
        })
    }

    /// Create a field element without checking its invariants.
    ///
    /// The caller must ensure `modulus` is a prime and `value < modulus`.
    pub fn new_unchecked(value: BigUint, modulus: BigUint) -> Self {
        debug_assert!(value < modulus);
        Self { value, modulus }
    }

    /// Zero element (additive identity) of the field with the given modulus.
    pub fn zero(modulus: impl Into<BigUint>) -> Result<Self> {
        Self::new(BigUint::zero(), modulus)
    }

    /// Multiplicative identity of the field with the given modulus.
    pub fn one(modulus: impl Into<BigUint>) -> Result<Self> {
        Self::new(BigUint::one(), modulus)
    }

    /// Canonical integer value of this element.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Modulus of the field this element belongs to.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Consume this element, returning its canonical integer value.
    pub fn into_value(self) -> BigUint {
        self.value
    }

    /// Is this the zero element?
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Is the canonical integer value of this element odd?
    pub fn is_odd(&self) -> bool {
        self.value.is_odd()
    }

    /// Returns `self + rhs mod p`.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_value((&self.value + &rhs.value) % &self.modulus))
    }

    /// Returns `self - rhs mod p`.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_value((&self.value + &self.modulus - &rhs.value) % &self.modulus))
    }

    /// Returns `self * rhs mod p`.
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_value((&self.value * &rhs.value) % &self.modulus))
    }

    /// Returns `self * self mod p`.
    pub fn square(&self) -> Self {
        self.with_value((&self.value * &self.value) % &self.modulus)
    }

    /// Returns `-self mod p`.
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            self.clone()
        } else {
            self.with_value(&self.modulus - &self.value)
        }
    }

    /// Multiplies by an arbitrary integer `coefficient`, reducing mod `p`.
    pub fn scalar_mul(&self, coefficient: &BigInt) -> Self {
        let coefficient = reduce_signed(coefficient, &self.modulus);
        self.with_value((&self.value * coefficient) % &self.modulus)
    }

    /// Returns `self^exponent mod p`.
    ///
    /// The exponent is first reduced modulo `p - 1`, which makes negative
    /// exponents compute powers of the multiplicative inverse.
    ///
    /// **This operation is variable time with respect to the exponent.**
    pub fn pow(&self, exponent: &BigInt) -> Self {
        let order = &self.modulus - 1u32;
        let exponent = reduce_signed(exponent, &order);
        self.with_value(self.value.modpow(&exponent, &self.modulus))
    }

    /// Returns the multiplicative inverse of `self`.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }

        // We need to find b such that b * a ≡ 1 mod p. As we are in a prime
        // field, we can apply Fermat's Little Theorem:
        //
        //    a^(p-1)     ≡ 1 mod p
        //    a^(p-2) * a ≡ 1 mod p
        let exponent = &self.modulus - 2u32;
        Ok(self.with_value(self.value.modpow(&exponent, &self.modulus)))
    }

    /// Returns `self / rhs mod p`.
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        self.mul(&rhs.invert()?)
    }

    fn check_field(&self, rhs: &Self) -> Result<()> {
        if self.modulus == rhs.modulus {
            Ok(())
        } else {
            Err(Error::FieldMismatch)
        }
    }

    fn with_value(&self, value: BigUint) -> Self {
        Self {
            value,
            modulus: self.modulus.clone(),
        }
    }
}

impl Field for FieldElement {
    fn add(&self, rhs: &Self) -> Result<Self> {
        FieldElement::add(self, rhs)
    }

    fn sub(&self, rhs: &Self) -> Result<Self> {
        FieldElement::sub(self, rhs)
    }

    fn mul(&self, rhs: &Self) -> Result<Self> {
        FieldElement::mul(self, rhs)
    }

    fn div(&self, rhs: &Self) -> Result<Self> {
        FieldElement::div(self, rhs)
    }

    fn scalar_mul(&self, coefficient: &BigInt) -> Self {
        FieldElement::scalar_mul(self, coefficient)
    }

    fn pow(&self, exponent: &BigInt) -> Self {
        FieldElement::pow(self, exponent)
    }

    fn neg(&self) -> Self {
        FieldElement::neg(self)
    }

    fn is_zero(&self) -> bool {
        FieldElement::is_zero(self)
    }

    fn square(&self) -> Result<Self> {
        Ok(FieldElement::square(self))
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.modulus, self.value)
    }
}

/// Reduce a signed integer into `[0, modulus)`.
fn reduce_signed(n: &BigInt, modulus: &BigUint) -> BigUint {
    let modulus = BigInt::from(modulus.clone());
    // `mod_floor` takes the sign of the (positive) modulus.
    n.mod_floor(&modulus).magnitude().clone()
}
