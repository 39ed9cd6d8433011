//! Scalar field arithmetic.

use super::util::uint_to_field_bytes;
use crate::FieldBytes;
use alloc::boxed::Box;
use core::fmt;
use hex_literal::hex;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::race::OnceBox;

/// Constant representing the modulus
/// n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141
const ORDER: FieldBytes = hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

/// Order of the secp256k1 group `n`.
pub(crate) fn order() -> &'static BigUint {
    static ORDER_UINT: OnceBox<BigUint> = OnceBox::new();
    ORDER_UINT.get_or_init(|| Box::new(BigUint::from_bytes_be(&ORDER)))
}

/// Constant representing the modulus / 2
fn frac_order_2() -> &'static BigUint {
    static FRAC_ORDER_2: OnceBox<BigUint> = OnceBox::new();
    FRAC_ORDER_2.get_or_init(|| Box::new(order() >> 1u32))
}

/// An element in the finite field modulo n.
///
/// Always holds a canonical value in `[0, n)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scalar(BigUint);

impl From<u64> for Scalar {
    fn from(k: u64) -> Self {
        Self(BigUint::from(k))
    }
}

impl Scalar {
    /// Returns the zero scalar.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Returns the multiplicative identity.
    pub fn one() -> Self {
        Self(BigUint::one())
    }

    /// Returns `Some` if `n` is in `[0, n)`.
    pub fn from_uint(n: BigUint) -> Option<Self> {
        (&n < order()).then_some(Self(n))
    }

    /// Reduce an arbitrary integer modulo the group order.
    pub fn from_uint_reduced(n: &BigUint) -> Self {
        Self(n % order())
    }

    /// Attempts to parse the given byte array as a big endian scalar.
    ///
    /// Returns `None` if the bytes do not encode an integer in `[0, n)`.
    pub fn from_bytes(bytes: &FieldBytes) -> Option<Self> {
        Self::from_uint(BigUint::from_bytes_be(bytes))
    }

    /// Parses the given byte array as a big endian integer and reduces it
    /// modulo the group order.
    pub fn from_bytes_reduced(bytes: &FieldBytes) -> Self {
        Self::from_uint_reduced(&BigUint::from_bytes_be(bytes))
    }

    /// Returns the big endian encoding of this scalar.
    pub fn to_bytes(&self) -> FieldBytes {
        uint_to_field_bytes(&self.0)
    }

    /// Canonical integer value of this scalar.
    pub fn as_uint(&self) -> &BigUint {
        &self.0
    }

    /// Consume this scalar, returning its canonical integer value.
    pub fn into_uint(self) -> BigUint {
        self.0
    }

    /// Is this scalar equal to zero?
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Is this scalar greater than `n / 2`?
    pub fn is_high(&self) -> bool {
        &self.0 > frac_order_2()
    }

    /// Returns `self + rhs mod n`.
    pub fn add(&self, rhs: &Self) -> Self {
        Self((&self.0 + &rhs.0) % order())
    }

    /// Returns `self * rhs mod n`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self((&self.0 * &rhs.0) % order())
    }

    /// Returns `-self mod n`.
    pub fn negate(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else {
            Self(order() - &self.0)
        }
    }

    /// Inverts this scalar via Fermat's little theorem: `self^(n - 2) mod n`.
    ///
    /// Returns `None` if the scalar is zero.
    pub fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        let exponent = order() - 2u32;
        Some(Self(self.0.modpow(&exponent, order())))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:064x}", self.0)
    }
}

impl fmt::LowerHex for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:064x}", self.0)
    }
}
