//! Error types.

use core::fmt;

/// secp256k1 errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Error in the underlying field or group arithmetic.
    Curve(primeorder::Error),

    /// SEC1 bytes have an unrecognized tag or the wrong length for their tag.
    MalformedSecEncoding,

    /// Signature component is outside of `[1, n - 1]`.
    InvalidSignatureComponent,

    /// Secret scalar is outside of `[1, n - 1]`.
    InvalidSecretKey,

    /// Public key is the identity or does not lie on secp256k1.
    InvalidPublicKey,

    /// Signing produced a zero `r` or `s`.
    SigningFailed,
}

impl From<primeorder::Error> for Error {
    fn from(err: primeorder::Error) -> Self {
        Error::Curve(err)
    }
}

impl From<primefield::Error> for Error {
    fn from(err: primefield::Error) -> Self {
        Error::Curve(err.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Curve(err) => write!(f, "curve error: {err}"),
            Error::MalformedSecEncoding => f.write_str("malformed SEC1 point encoding"),
            Error::InvalidSignatureComponent => f.write_str("signature component out of range"),
            Error::InvalidSecretKey => f.write_str("secret key out of range"),
            Error::InvalidPublicKey => f.write_str("invalid public key"),
            Error::SigningFailed => f.write_str("signing failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Curve(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
