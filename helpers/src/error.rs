//! Error types.

use core::fmt;

/// Helper errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Integer does not fit in the requested number of bytes.
    IntegerOverflow {
        /// Requested width in bytes.
        length: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IntegerOverflow { length } => {
                write!(f, "integer does not fit in {length} bytes")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
