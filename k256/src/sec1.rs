//! Support for SEC1 elliptic curve encoding formats.
//!
//! <https://www.secg.org/sec1-v2.pdf>
//!
//! The byte-level container is [`sec1::point::EncodedPoint`], specialized to the
//! 32-byte field of secp256k1. This module adds conversions between it and
//! [`AffinePoint`].

use crate::{AffinePoint, Error, FieldBytes, FieldElement, PrimeCurveParams, Result, Secp256k1};
use alloc::vec::Vec;
use generic_array::{GenericArray, typenum::U32};
use primefield::Field;

pub use sec1::point::{Coordinates, Tag};

/// SEC1-encoded secp256k1 curve point.
///
/// The tag byte and the length are validated on construction. Whether the
/// coordinates describe a point on the curve is checked when decoding with
/// [`FromEncodedPoint`].
pub type EncodedPoint = sec1::point::EncodedPoint<U32>;

/// Size of a compressed SEC1 point: tag byte followed by `x`.
pub const COMPRESSED_POINT_SIZE: usize = 33;

/// Size of an uncompressed SEC1 point: tag byte followed by `x` and `y`.
pub const UNCOMPRESSED_POINT_SIZE: usize = 65;

impl From<sec1::Error> for Error {
    fn from(_: sec1::Error) -> Self {
        Error::MalformedSecEncoding
    }
}

/// Serialize a curve point into its SEC1 encoding.
pub trait ToEncodedPoint {
    /// Serialize this value as an SEC1 [`EncodedPoint`], optionally applying
    /// point compression.
    ///
    /// The identity has no SEC1 encoding here and returns
    /// [`Error::MalformedSecEncoding`].
    fn to_encoded_point(&self, compress: bool) -> Result<EncodedPoint>;

    /// Serialize this value as SEC1 bytes.
    fn to_sec1_bytes(&self, compress: bool) -> Result<Vec<u8>> {
        self.to_encoded_point(compress)
            .map(|point| point.as_bytes().to_vec())
    }
}

/// Deserialize a curve point from its SEC1 encoding.
pub trait FromEncodedPoint: Sized {
    /// Deserialize the type this trait is impl'd on from an
    /// [`EncodedPoint`].
    fn from_encoded_point(point: &EncodedPoint) -> Result<Self>;

    /// Deserialize from SEC1 bytes.
    fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_encoded_point(&EncodedPoint::from_bytes(bytes)?)
    }
}

impl ToEncodedPoint for AffinePoint {
    fn to_encoded_point(&self, compress: bool) -> Result<EncodedPoint> {
        let (x, y) = self.coordinates().ok_or(Error::MalformedSecEncoding)?;
        let x: GenericArray<u8, U32> = x.to_bytes().into();
        let y: GenericArray<u8, U32> = y.to_bytes().into();

        Ok(EncodedPoint::from_affine_coordinates(&x, &y, compress))
    }
}

impl FromEncodedPoint for AffinePoint {
    /// Attempts to parse the given [`EncodedPoint`] as an SEC1-encoded
    /// [`AffinePoint`].
    ///
    /// Coordinates which are not canonical field elements or do not lie on
    /// the curve are rejected, as are the identity and compact encodings.
    fn from_encoded_point(point: &EncodedPoint) -> Result<Self> {
        let a = Secp256k1::equation_a().clone();
        let b = Secp256k1::equation_b().clone();

        match point.coordinates() {
            Coordinates::Identity | Coordinates::Compact { .. } => {
                Err(Error::MalformedSecEncoding)
            }
            Coordinates::Compressed { x, y_is_odd } => {
                let x = FieldElement::from_bytes(field_bytes(x))?;
                let y = decompress_y(&x, y_is_odd)?;
                Ok(AffinePoint::new(x, y, a, b)?)
            }
            Coordinates::Uncompressed { x, y } => {
                let x = FieldElement::from_bytes(field_bytes(x))?;
                let y = FieldElement::from_bytes(field_bytes(y))?;
                Ok(AffinePoint::new(x, y, a, b)?)
            }
        }
    }
}

fn field_bytes(bytes: &GenericArray<u8, U32>) -> &FieldBytes {
    bytes.as_ref()
}

/// Recover the y-coordinate with the requested parity from `x`.
///
/// The result only lies on the curve if `x³ + 7` is a quadratic residue;
/// the caller checks this when constructing the point.
fn decompress_y(x: &FieldElement, y_is_odd: bool) -> Result<FieldElement> {
    let alpha = x.square()?.mul(x)?.add(Secp256k1::equation_b())?;
    let beta = alpha.sqrt();

    if beta.is_odd() == y_is_odd {
        Ok(beta)
    } else {
        Ok(beta.negate())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        COMPRESSED_POINT_SIZE, EncodedPoint, FromEncodedPoint, Tag, ToEncodedPoint,
        UNCOMPRESSED_POINT_SIZE,
    };
    use crate::{AffinePoint, Error, PrimeCurveParams, Secp256k1};
    use hex_literal::hex;
    use num_bigint::BigUint;

    const UNCOMPRESSED_BASEPOINT: &[u8] = &hex!(
        "0479BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798
         483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"
    );
    const COMPRESSED_BASEPOINT: &[u8] =
        &hex!("0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");

    fn mul_by_generator(k: u32) -> AffinePoint {
        Secp256k1::mul_by_generator(&BigUint::from(k)).unwrap()
    }

    #[test]
    fn uncompressed_round_trip() {
        let pubkey = EncodedPoint::from_bytes(UNCOMPRESSED_BASEPOINT).unwrap();
        let res = AffinePoint::from_encoded_point(&pubkey)
            .unwrap()
            .to_encoded_point(false)
            .unwrap();

        assert_eq!(res, pubkey);
    }

    #[test]
    fn compressed_round_trip() {
        let pubkey = EncodedPoint::from_bytes(COMPRESSED_BASEPOINT).unwrap();
        let res = AffinePoint::from_encoded_point(&pubkey)
            .unwrap()
            .to_encoded_point(true)
            .unwrap();

        assert_eq!(res, pubkey);
    }

    #[test]
    fn uncompressed_to_compressed() {
        let point = AffinePoint::from_sec1_bytes(UNCOMPRESSED_BASEPOINT).unwrap();
        assert_eq!(point.to_sec1_bytes(true).unwrap(), COMPRESSED_BASEPOINT);
    }

    #[test]
    fn compressed_to_uncompressed() {
        let point = AffinePoint::from_sec1_bytes(COMPRESSED_BASEPOINT).unwrap();
        assert_eq!(point.to_sec1_bytes(false).unwrap(), UNCOMPRESSED_BASEPOINT);
        assert_eq!(&point, Secp256k1::generator());
    }

    #[test]
    fn encode_multiples_of_generator() {
        let p = mul_by_generator(5000);
        assert_eq!(
            p.to_sec1_bytes(false).unwrap(),
            hex!(
                "04ffe558e388852f0120e46af2d1b370f85854a8eb0841811ece0e3e03d282d57c
                 315dc72890a4f10a1481c031b03b351b0dc79901ca18a00cf009dbdb157a1d10"
            )
        );
        assert_eq!(
            p.to_sec1_bytes(true).unwrap(),
            hex!("02ffe558e388852f0120e46af2d1b370f85854a8eb0841811ece0e3e03d282d57c")
        );

        let q = mul_by_generator(5001);
        assert_eq!(
            q.to_sec1_bytes(false).unwrap(),
            hex!(
                "0457a4f368868a8a6d572991e484e664810ff14c05c0fa023275251151fe0e53d1
                 0d6cc87c5bc29b83368e17869e964f2f53d52ea3aa3e5a9efa1fa578123a0c6d"
            )
        );
        assert_eq!(
            q.to_sec1_bytes(true).unwrap(),
            hex!("0357a4f368868a8a6d572991e484e664810ff14c05c0fa023275251151fe0e53d1")
        );
    }

    #[test]
    fn decompress_selects_parity() {
        let q = mul_by_generator(5001);
        let compressed = q.to_encoded_point(true).unwrap();
        assert_eq!(compressed.tag(), Tag::CompressedOddY);
        assert_eq!(AffinePoint::from_encoded_point(&compressed).unwrap(), q);

        // Flipping the tag yields the negation
        let mut flipped = compressed.as_bytes().to_vec();
        flipped[0] = Tag::CompressedEvenY as u8;
        assert_eq!(AffinePoint::from_sec1_bytes(&flipped).unwrap(), q.neg());
    }

    #[test]
    fn identity_has_no_encoding() {
        assert_eq!(
            Secp256k1::identity().to_encoded_point(true),
            Err(Error::MalformedSecEncoding)
        );
    }

    #[test]
    fn reject_malformed_encodings() {
        assert!(EncodedPoint::from_bytes([0u8; 0]).is_err());
        assert!(EncodedPoint::from_bytes(&COMPRESSED_BASEPOINT[..32]).is_err());
        assert!(EncodedPoint::from_bytes(&UNCOMPRESSED_BASEPOINT[..33]).is_err());

        for bytes in [
            &[][..],
            &COMPRESSED_BASEPOINT[..32],
            &UNCOMPRESSED_BASEPOINT[..33],
            &UNCOMPRESSED_BASEPOINT[..34],
        ] {
            assert_eq!(
                AffinePoint::from_sec1_bytes(bytes),
                Err(Error::MalformedSecEncoding)
            );
        }

        let mut bad_tag = COMPRESSED_BASEPOINT.to_vec();
        bad_tag[0] = 0x07;
        assert_eq!(
            AffinePoint::from_sec1_bytes(&bad_tag),
            Err(Error::MalformedSecEncoding)
        );
    }

    #[test]
    fn reject_identity_and_compact_encodings() {
        // Both are valid SEC1 containers but carry no affine coordinates
        let identity = EncodedPoint::from_bytes([0x00u8]).unwrap();
        assert_eq!(
            AffinePoint::from_encoded_point(&identity),
            Err(Error::MalformedSecEncoding)
        );

        let mut compact = COMPRESSED_BASEPOINT.to_vec();
        compact[0] = 0x05;
        assert_eq!(
            AffinePoint::from_sec1_bytes(&compact),
            Err(Error::MalformedSecEncoding)
        );
    }

    #[test]
    fn reject_point_off_curve() {
        let mut bytes = UNCOMPRESSED_BASEPOINT.to_vec();
        bytes[64] ^= 1;

        assert_eq!(
            AffinePoint::from_sec1_bytes(&bytes),
            Err(Error::Curve(primeorder::Error::CurveMembership))
        );
    }

    #[test]
    fn reject_non_canonical_coordinate() {
        let mut bytes = [0xffu8; 33];
        bytes[0] = 0x02;
        assert!(AffinePoint::from_sec1_bytes(&bytes).is_err());
    }

    #[test]
    fn accessors() {
        let encoded = EncodedPoint::from_bytes(UNCOMPRESSED_BASEPOINT).unwrap();
        assert!(!encoded.is_compressed());
        assert_eq!(encoded.len(), UNCOMPRESSED_POINT_SIZE);
        assert_eq!(&encoded.x().unwrap()[..], &UNCOMPRESSED_BASEPOINT[1..33]);
        assert_eq!(&encoded.y().unwrap()[..], &UNCOMPRESSED_BASEPOINT[33..]);

        let compressed = EncodedPoint::from_bytes(COMPRESSED_BASEPOINT).unwrap();
        assert!(compressed.is_compressed());
        assert_eq!(compressed.len(), COMPRESSED_POINT_SIZE);
        assert!(compressed.y().is_none());
    }

    #[test]
    fn hex_formatting() {
        let encoded = EncodedPoint::from_bytes(COMPRESSED_BASEPOINT).unwrap();
        assert_eq!(
            alloc::format!("{encoded:x}"),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }
}
