#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod sec1;

#[cfg(feature = "ecdsa")]
pub mod ecdsa;

mod arithmetic;
mod error;

pub use crate::{
    arithmetic::{AffinePoint, FieldElement, Scalar},
    error::{Error, Result},
    sec1::EncodedPoint,
};
pub use num_bigint::BigUint;
pub use primefield;
pub use primeorder::{self, PrimeCurveParams};

/// Byte representation of a base field element or scalar: 32 bytes,
/// big endian.
pub type FieldBytes = [u8; 32];

/// secp256k1 elliptic curve.
///
/// The group law is provided by [`PrimeCurveParams`], e.g.
/// [`Secp256k1::mul_by_generator`](PrimeCurveParams::mul_by_generator).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Secp256k1;

impl Secp256k1 {
    /// Base field modulus: `p = 2²⁵⁶ − 2³² − 977`.
    pub const MODULUS_HEX: &'static str =
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";

    /// Order of the group generated by the base point.
    pub const ORDER_HEX: &'static str =
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";
}
