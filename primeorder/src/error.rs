//! Error types.

use core::fmt;

/// Elliptic curve group law errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Error in the underlying field arithmetic.
    Field(primefield::Error),

    /// Coordinates do not satisfy the curve equation.
    CurveMembership,

    /// Points lie on curves with different equation coefficients.
    CurveMismatch,
}

impl From<primefield::Error> for Error {
    fn from(err: primefield::Error) -> Self {
        Error::Field(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Field(err) => write!(f, "field error: {err}"),
            Error::CurveMembership => f.write_str("point is not on the curve"),
            Error::CurveMismatch => f.write_str("points are not on the same curve"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Field(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
