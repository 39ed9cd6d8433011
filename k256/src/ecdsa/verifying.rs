//! ECDSA verifying key.

use super::Signature;
use crate::{
    AffinePoint, EncodedPoint, Error, PrimeCurveParams, Result, Scalar, Secp256k1,
    sec1::{FromEncodedPoint, ToEncodedPoint},
};
use alloc::vec::Vec;
use num_bigint::BigUint;

/// ECDSA/secp256k1 verifying key: a non-identity point on secp256k1.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey {
    inner: AffinePoint,
}

impl VerifyingKey {
    /// Initialize a verifying key from an affine point.
    ///
    /// Returns [`Error::InvalidPublicKey`] for the identity and for points
    /// which do not lie on secp256k1.
    pub fn from_affine(point: AffinePoint) -> Result<Self> {
        let (x, y) = point.coordinates().ok_or(Error::InvalidPublicKey)?;

        AffinePoint::new(
            x.clone(),
            y.clone(),
            Secp256k1::equation_a().clone(),
            Secp256k1::equation_b().clone(),
        )
        .map(|inner| Self { inner })
        .map_err(|_| Error::InvalidPublicKey)
    }

    /// Initialize a verifying key from an SEC1-encoded public key.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_encoded_point(&EncodedPoint::from_bytes(bytes)?)
    }

    /// Initialize a verifying key from an [`EncodedPoint`].
    pub fn from_encoded_point(point: &EncodedPoint) -> Result<Self> {
        Self::from_affine(AffinePoint::from_encoded_point(point)?)
    }

    /// Serialize this verifying key as an SEC1 [`EncodedPoint`], optionally
    /// applying point compression.
    pub fn to_encoded_point(&self, compress: bool) -> Result<EncodedPoint> {
        self.inner.to_encoded_point(compress)
    }

    /// Serialize this verifying key as SEC1 bytes.
    pub fn to_sec1_bytes(&self, compress: bool) -> Result<Vec<u8>> {
        self.inner.to_sec1_bytes(compress)
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.inner
    }

    /// Verify `signature` over the message digest `z`.
    ///
    /// Computes `u₁ = z·s⁻¹`, `u₂ = r·s⁻¹` and accepts if the x-coordinate
    /// of `u₁×G + u₂×Q`, reduced modulo `n`, equals `r`. A sum equal to the
    /// identity has no x-coordinate and is rejected.
    pub fn verify(&self, z: &BigUint, signature: &Signature) -> bool {
        let (r, s) = (signature.r(), signature.s());

        let s_inv = match s.invert() {
            Some(s_inv) => s_inv,
            None => return false,
        };

        let z = Scalar::from_uint_reduced(z);
        let u1 = z.mul(&s_inv);
        let u2 = r.mul(&s_inv);

        let total = match Secp256k1::lincomb(
            Secp256k1::generator(),
            u1.as_uint(),
            &self.inner,
            u2.as_uint(),
        ) {
            Ok(total) => total,
            Err(_) => return false,
        };

        total
            .x()
            .map(|x| Scalar::from_uint_reduced(x.as_uint()) == *r)
            .unwrap_or(false)
    }
}

impl TryFrom<AffinePoint> for VerifyingKey {
    type Error = Error;

    fn try_from(point: AffinePoint) -> Result<Self> {
        Self::from_affine(point)
    }
}

impl From<VerifyingKey> for AffinePoint {
    fn from(verifying_key: VerifyingKey) -> AffinePoint {
        verifying_key.inner
    }
}

impl AsRef<AffinePoint> for VerifyingKey {
    fn as_ref(&self) -> &AffinePoint {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::VerifyingKey;
    use crate::{
        AffinePoint, Error, FieldElement, PrimeCurveParams, Secp256k1,
        ecdsa::{Signature, SigningKey},
    };
    use hex_literal::hex;
    use num_bigint::BigUint;

    fn uint(bytes: [u8; 32]) -> BigUint {
        BigUint::from_bytes_be(&bytes)
    }

    fn fe(bytes: [u8; 32]) -> FieldElement {
        FieldElement::from_bytes(&bytes).unwrap()
    }

    fn book_key() -> VerifyingKey {
        let point = AffinePoint::new(
            fe(hex!("04519fac3d910ca7e7138f7013706f619fa8f033e6ec6e09370ea38cee6a7574")),
            fe(hex!("82b51eab8c27c66e26c858a079bcdf4f1ada34cec420cafc7eac1a42216fb6c4")),
            FieldElement::zero(),
            FieldElement::from_u64(7),
        )
        .unwrap();

        VerifyingKey::from_affine(point).unwrap()
    }

    #[test]
    fn verify_known_signature() {
        let z = uint(hex!("bc62d4b80d9e36da29c16c5d4d9f11731f36052c72401a76c23c0fb5a9b74423"));
        let sig = Signature::new(
            uint(hex!("37206a0610995c58074999cb9767b87af4c4978db68c06e8e6e81d282047a7c6")),
            uint(hex!("8ca63759c1157ebeaec0d03cecca119fc9a75bf8e6d0fa65c841c8e2738cdaec")),
        )
        .unwrap();

        let key = book_key();
        assert!(key.verify(&z, &sig));
        assert!(!key.verify(&(z + 1u8), &sig));
    }

    #[test]
    fn high_s_signatures_verify() {
        let key = SigningKey::new(BigUint::from(1u8)).unwrap();
        let z = BigUint::from_bytes_be(&[0xaa; 32]);
        let sig = key.sign(&z).unwrap();

        let (r, s) = sig.split_scalars();
        let high = Signature::from_scalars(r, s.negate()).unwrap();
        assert!(!high.is_low_s());
        assert!(key.verifying_key().verify(&z, &high));
    }

    #[test]
    fn rejects_identity() {
        assert_eq!(
            VerifyingKey::from_affine(Secp256k1::identity()),
            Err(Error::InvalidPublicKey)
        );
    }

    #[test]
    fn rejects_point_on_another_curve() {
        let point = AffinePoint::new(
            FieldElement::zero(),
            FieldElement::zero(),
            FieldElement::zero(),
            FieldElement::zero(),
        )
        .unwrap();

        assert_eq!(VerifyingKey::from_affine(point), Err(Error::InvalidPublicKey));
    }

    #[test]
    fn sec1_round_trip() {
        let key = book_key();

        for compress in [true, false] {
            let bytes = key.to_sec1_bytes(compress).unwrap();
            assert_eq!(VerifyingKey::from_sec1_bytes(&bytes).unwrap(), key);
        }
    }

    #[test]
    fn rejects_malformed_sec1() {
        assert_eq!(
            VerifyingKey::from_sec1_bytes(&[0x05; 33]),
            Err(Error::MalformedSecEncoding)
        );
    }

    #[test]
    fn verify_against_wrong_key_fails() {
        let signer = SigningKey::new(BigUint::from(1u8)).unwrap();
        let other = SigningKey::new(BigUint::from(2u8)).unwrap();
        let z = BigUint::from_bytes_be(&[0xaa; 32]);
        let sig = signer.sign(&z).unwrap();

        assert!(signer.verifying_key().verify(&z, &sig));
        assert!(!other.verifying_key().verify(&z, &sig));
    }
}
