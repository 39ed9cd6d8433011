//! ECDSA signing key.

use super::{Signature, VerifyingKey};
use crate::{
    AffinePoint, Error, FieldBytes, PrimeCurveParams, Result, Scalar, Secp256k1,
    arithmetic::util::uint_to_field_bytes,
};
use alloc::{format, string::String};
use core::fmt;
use generic_array::{GenericArray, typenum::U32};
use num_bigint::BigUint;
use sha2::Sha256;

/// ECDSA/secp256k1 signing key.
///
/// Holds a secret scalar in `[1, n - 1]` together with the public point
/// `secret × G`, which is derived once on construction.
#[derive(Clone, Eq, PartialEq)]
pub struct SigningKey {
    /// Secret scalar value
    secret_scalar: Scalar,

    /// Verifying key which corresponds to this signing key
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Create a signing key from a secret integer in `[1, n - 1]`.
    pub fn new(secret: BigUint) -> Result<Self> {
        let secret_scalar = Scalar::from_uint(secret)
            .filter(|s| !s.is_zero())
            .ok_or(Error::InvalidSecretKey)?;

        Self::from_scalar(secret_scalar)
    }

    /// Initialize signing key from a raw scalar serialized as big endian
    /// bytes.
    pub fn from_bytes(bytes: &FieldBytes) -> Result<Self> {
        Self::new(BigUint::from_bytes_be(bytes))
    }

    /// Initialize signing key from a byte slice, which must be 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != 32 {
            return Err(Error::InvalidSecretKey);
        }

        Self::new(BigUint::from_bytes_be(slice))
    }

    fn from_scalar(secret_scalar: Scalar) -> Result<Self> {
        let public_point = Secp256k1::mul_by_generator(secret_scalar.as_uint())?;
        let verifying_key = VerifyingKey::from_affine(public_point)?;

        Ok(Self {
            secret_scalar,
            verifying_key,
        })
    }

    /// Serialize this [`SigningKey`] as bytes.
    pub fn to_bytes(&self) -> FieldBytes {
        self.secret_scalar.to_bytes()
    }

    /// Serialize the secret as 64 lowercase, zero-padded hex characters.
    pub fn to_hex(&self) -> String {
        format!("{:064x}", self.secret_scalar.as_uint())
    }

    /// Borrow the secret scalar value.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    pub fn as_secret_scalar(&self) -> &Scalar {
        &self.secret_scalar
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Public point `secret × G`.
    pub fn public_point(&self) -> &AffinePoint {
        self.verifying_key.as_affine()
    }

    /// Derive the ephemeral scalar `k` used to sign the digest `z`, using
    /// HMAC-SHA256 as described in [RFC 6979 § 3.2].
    ///
    /// `z` is reduced modulo the group order before it is mixed into the
    /// nonce derivation.
    ///
    /// [RFC 6979 § 3.2]: https://datatracker.ietf.org/doc/html/rfc6979#section-3
    pub fn deterministic_nonce(&self, z: &BigUint) -> Result<Scalar> {
        let x = GenericArray::<u8, U32>::from(self.to_bytes());
        let n = GenericArray::<u8, U32>::from(uint_to_field_bytes(Secp256k1::order()));
        let h = GenericArray::<u8, U32>::from(Scalar::from_uint_reduced(z).to_bytes());

        let k: FieldBytes = rfc6979::generate_k::<Sha256, U32>(&x, &n, &h, &[]).into();

        Scalar::from_bytes(&k)
            .filter(|k| !k.is_zero())
            .ok_or(Error::SigningFailed)
    }

    /// Sign the message digest `z` using a deterministic ephemeral scalar.
    ///
    /// The returned signature is normalized to low-S form.
    pub fn sign(&self, z: &BigUint) -> Result<Signature> {
        let k = self.deterministic_nonce(z)?;
        self.try_sign_prehashed(&k, z)
    }

    /// Sign the message digest `z` with the given ephemeral scalar `k`.
    ///
    /// # ⚠️ Warning
    ///
    /// Reusing `k` for two different digests reveals the secret key. Prefer
    /// [`SigningKey::sign`], which derives `k` deterministically.
    #[allow(non_snake_case)]
    pub fn try_sign_prehashed(&self, k: &Scalar, z: &BigUint) -> Result<Signature> {
        if k.is_zero() {
            return Err(Error::SigningFailed);
        }

        // Compute scalar inversion of 𝑘
        let k_inv = k.invert().ok_or(Error::SigningFailed)?;

        // Compute 𝑹 = 𝑘×𝑮
        let R = Secp256k1::mul_by_generator(k.as_uint())?;

        // Lift x-coordinate of 𝑹 (element of base field) into a serialized big
        // integer, then reduce it into an element of the scalar field
        let r = R
            .x()
            .map(|x| Scalar::from_uint_reduced(x.as_uint()))
            .ok_or(Error::SigningFailed)?;

        // Reduce message hash to an element of the scalar field
        let z = Scalar::from_uint_reduced(z);

        // Compute 𝒔 as a signature over 𝒓 and 𝒛.
        let s = k_inv.mul(&z.add(&r.mul(&self.secret_scalar)));

        Signature::from_scalars(r, s)
            .map(|signature| signature.normalize_s())
            .map_err(|_| Error::SigningFailed)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl TryFrom<&[u8]> for SigningKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(signing_key: &SigningKey) -> VerifyingKey {
        signing_key.verifying_key.clone()
    }
}
