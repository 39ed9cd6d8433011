//! Elliptic Curve Digital Signature Algorithm (ECDSA).
//!
//! Signing is deterministic: the per-signature nonce is derived from the
//! secret key and the message digest using the HMAC-SHA256 construction of
//! [RFC 6979], so signing the same digest twice yields the same signature.
//!
//! Digests are passed as integers; callers hash the message themselves
//! (e.g. with `hash256`) before signing or verifying.
//!
//! Signatures produced by [`SigningKey::sign`] are always normalized to
//! "low S" form as described in [BIP 0062: Dealing with Malleability][1].
//!
//! # Usage
//!
//! ```
//! use k256::{BigUint, ecdsa::{Signature, SigningKey}};
//!
//! let signing_key = SigningKey::new(BigUint::from(1u8))?;
//! let z = BigUint::from_bytes_be(&[0xaa; 32]);
//!
//! let signature = signing_key.sign(&z)?;
//! assert!(signature.is_low_s());
//!
//! let verifying_key = signing_key.verifying_key();
//! assert!(verifying_key.verify(&z, &signature));
//!
//! let bytes = signature.to_bytes();
//! assert_eq!(Signature::from_bytes(&bytes)?, signature);
//! # Ok::<(), k256::Error>(())
//! ```
//!
//! [RFC 6979]: https://datatracker.ietf.org/doc/html/rfc6979
//! [1]: https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki

mod signing;
mod verifying;

pub use self::{signing::SigningKey, verifying::VerifyingKey};

use crate::{Error, FieldBytes, Result, Scalar};
use core::fmt;
use num_bigint::BigUint;

/// Size of a fixed-width `r ‖ s` signature encoding.
pub const SIGNATURE_SIZE: usize = 64;

/// Fixed-width `r ‖ s` signature encoding, both components big endian.
pub type SignatureBytes = [u8; SIGNATURE_SIZE];

/// ECDSA/secp256k1 signature.
///
/// Both components are guaranteed to lie in `[1, n - 1]`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Signature {
    r: Scalar,
    s: Scalar,
}

impl Signature {
    /// Create a signature from its integer components, checking both are in
    /// `[1, n - 1]`.
    pub fn new(r: BigUint, s: BigUint) -> Result<Self> {
        let r = Scalar::from_uint(r).ok_or(Error::InvalidSignatureComponent)?;
        let s = Scalar::from_uint(s).ok_or(Error::InvalidSignatureComponent)?;
        Self::from_scalars(r, s)
    }

    /// Create a signature from its scalar components, rejecting zeroes.
    pub fn from_scalars(r: Scalar, s: Scalar) -> Result<Self> {
        if r.is_zero() || s.is_zero() {
            return Err(Error::InvalidSignatureComponent);
        }

        Ok(Self { r, s })
    }

    /// Parse a signature from its fixed-width `r ‖ s` encoding.
    pub fn from_bytes(bytes: &SignatureBytes) -> Result<Self> {
        Self::from_slice(bytes)
    }

    /// Parse a signature from a byte slice holding `r ‖ s`.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != SIGNATURE_SIZE {
            return Err(Error::InvalidSignatureComponent);
        }

        let (r_bytes, s_bytes) = slice.split_at(32);
        let (mut r, mut s) = (FieldBytes::default(), FieldBytes::default());
        r.copy_from_slice(r_bytes);
        s.copy_from_slice(s_bytes);

        let r = Scalar::from_bytes(&r).ok_or(Error::InvalidSignatureComponent)?;
        let s = Scalar::from_bytes(&s).ok_or(Error::InvalidSignatureComponent)?;
        Self::from_scalars(r, s)
    }

    /// Serialize this signature as `r ‖ s`.
    pub fn to_bytes(&self) -> SignatureBytes {
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes[..32].copy_from_slice(&self.r.to_bytes());
        bytes[32..].copy_from_slice(&self.s.to_bytes());
        bytes
    }

    /// Get the `r` component of this signature.
    pub fn r(&self) -> &Scalar {
        &self.r
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> &Scalar {
        &self.s
    }

    /// Split the signature into its `r` and `s` components.
    pub fn split_scalars(self) -> (Scalar, Scalar) {
        (self.r, self.s)
    }

    /// Is `s` in the lower half of the scalar field?
    pub fn is_low_s(&self) -> bool {
        !self.s.is_high()
    }

    /// Normalize signature into "low S" form: `s` is replaced with `n - s`
    /// if it lies in the upper half of the scalar field.
    pub fn normalize_s(&self) -> Self {
        let s = if self.s.is_high() {
            self.s.negate()
        } else {
            self.s.clone()
        };

        Self {
            r: self.r.clone(),
            s,
        }
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

impl From<Signature> for SignatureBytes {
    fn from(signature: Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({:x}, {:x})", self.r, self.s)
    }
}
