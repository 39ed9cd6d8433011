#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

#[cfg(test)]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod dev;
mod element;
mod error;

pub use crate::{
    element::FieldElement,
    error::{Error, Result},
};
pub use num_bigint;

use core::fmt::Debug;
use num_bigint::BigInt;

/// Elements of a finite field.
///
/// Arithmetic is exposed as named methods rather than operator overloads.
/// Operations between two elements are fallible since implementations may
/// carry their modulus at runtime.
pub trait Field: Clone + Debug + PartialEq + Sized {
    /// Returns `self + rhs`.
    fn add(&self, rhs: &Self) -> Result<Self>;

    /// Returns `self - rhs`.
    fn sub(&self, rhs: &Self) -> Result<Self>;

    /// Returns `self * rhs`.
    fn mul(&self, rhs: &Self) -> Result<Self>;

    /// Returns `self / rhs`.
    fn div(&self, rhs: &Self) -> Result<Self>;

    /// Multiplies by an integer coefficient which is not itself a field element.
    fn scalar_mul(&self, coefficient: &BigInt) -> Self;

    /// Raises to an integer power. Negative exponents are permitted.
    fn pow(&self, exponent: &BigInt) -> Self;

    /// Returns the additive inverse.
    fn neg(&self) -> Self;

    /// Is this the zero element?
    fn is_zero(&self) -> bool;

    /// Returns `self * self`.
    fn square(&self) -> Result<Self> {
        self.mul(self)
    }
}
