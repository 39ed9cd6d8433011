//! Field arithmetic modulo p = 2^256 - 2^32 - 2^9 - 2^8 - 2^7 - 2^6 - 2^4 - 1

use super::util::uint_to_field_bytes;
use crate::{FieldBytes, Result};
use alloc::boxed::Box;
use core::fmt;
use hex_literal::hex;
use num_bigint::{BigInt, BigUint};
use once_cell::race::OnceBox;
use primefield::Field;

const MODULUS: FieldBytes = hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");

/// Base field modulus `p`.
pub(crate) fn modulus() -> &'static BigUint {
    static MODULUS_UINT: OnceBox<BigUint> = OnceBox::new();
    MODULUS_UINT.get_or_init(|| Box::new(BigUint::from_bytes_be(&MODULUS)))
}

/// `(p + 1) / 4`
///
/// `p ≡ 3 (mod 4)`, so raising a quadratic residue to this power yields one
/// of its square roots.
fn sqrt_exponent() -> &'static BigInt {
    static SQRT_EXPONENT: OnceBox<BigInt> = OnceBox::new();
    SQRT_EXPONENT.get_or_init(|| Box::new(BigInt::from((modulus() + 1u32) >> 2u32)))
}

/// An element in the finite field used for curve coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement(primefield::FieldElement);

impl FieldElement {
    /// Returns the zero element.
    pub fn zero() -> Self {
        Self::from_u64(0)
    }

    /// Returns the multiplicative identity.
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    /// Create a field element from a small integer.
    pub fn from_u64(n: u64) -> Self {
        // Every `u64` is below the modulus.
        Self(primefield::FieldElement::new_unchecked(
            BigUint::from(n),
            modulus().clone(),
        ))
    }

    /// Create a field element from an integer in `[0, p)`.
    pub fn from_uint(value: BigUint) -> Result<Self> {
        Ok(Self(primefield::FieldElement::new(value, modulus().clone())?))
    }

    /// Attempts to parse the given byte array as a big endian integer in
    /// `[0, p)`.
    pub fn from_bytes(bytes: &FieldBytes) -> Result<Self> {
        Self::from_uint(BigUint::from_bytes_be(bytes))
    }

    /// Parses the given byte array without checking it is below the modulus.
    pub(crate) fn from_bytes_unchecked(bytes: &FieldBytes) -> Self {
        Self(primefield::FieldElement::new_unchecked(
            BigUint::from_bytes_be(bytes),
            modulus().clone(),
        ))
    }

    /// Returns the big endian encoding of this field element.
    pub fn to_bytes(&self) -> FieldBytes {
        uint_to_field_bytes(self.0.value())
    }

    /// Canonical integer value of this field element.
    pub fn as_uint(&self) -> &BigUint {
        self.0.value()
    }

    /// Determine if this `FieldElement` is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Determine if this `FieldElement` is odd in the SEC1 sense.
    pub fn is_odd(&self) -> bool {
        self.0.is_odd()
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Self {
        Self(self.0.neg())
    }

    /// Returns `self^((p + 1) / 4)`.
    ///
    /// This is a square root of `self` whenever one exists. No quadratic
    /// residue check is made: for a non-residue the result is not a root.
    pub fn sqrt(&self) -> Self {
        Self(self.0.pow(sqrt_exponent()))
    }
}

impl Field for FieldElement {
    fn add(&self, rhs: &Self) -> primefield::Result<Self> {
        self.0.add(&rhs.0).map(Self)
    }

    fn sub(&self, rhs: &Self) -> primefield::Result<Self> {
        self.0.sub(&rhs.0).map(Self)
    }

    fn mul(&self, rhs: &Self) -> primefield::Result<Self> {
        self.0.mul(&rhs.0).map(Self)
    }

    fn div(&self, rhs: &Self) -> primefield::Result<Self> {
        self.0.div(&rhs.0).map(Self)
    }

    fn scalar_mul(&self, coefficient: &BigInt) -> Self {
        Self(self.0.scalar_mul(coefficient))
    }

    fn pow(&self, exponent: &BigInt) -> Self {
        Self(self.0.pow(exponent))
    }

    fn neg(&self) -> Self {
        self.negate()
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn square(&self) -> primefield::Result<Self> {
        Ok(Self(self.0.square()))
    }
}

impl From<u64> for FieldElement {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:064x}", self.0.value())
    }
}

impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:064x}", self.0.value())
    }
}

impl fmt::UpperHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:064X}", self.0.value())
    }
}
