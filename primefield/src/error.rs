//! Error types.

use core::fmt;

/// Field arithmetic errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Element value is outside of `[0, modulus)`.
    InvalidElement,

    /// Operands belong to fields with different moduli.
    FieldMismatch,

    /// Modulus is too small to define a prime field.
    InvalidModulus,

    /// Attempted to divide by the zero element.
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidElement => f.write_str("field element not in range [0, modulus)"),
            Error::FieldMismatch => f.write_str("field elements belong to different fields"),
            Error::InvalidModulus => f.write_str("field modulus must be at least 2"),
            Error::DivisionByZero => f.write_str("division by the zero element"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
