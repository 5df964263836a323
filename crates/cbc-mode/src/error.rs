//! Error type for the mode layer.

use core::fmt;

/// Failures surfaced by CBC encryption and decryption.
///
/// Length variants are raised before any cryptographic transform runs.
/// `InvalidPadding` is the one post-decryption failure: the ciphertext
/// decrypted cleanly but its PKCS#7 trailer is malformed, which means the
/// key, IV, or ciphertext was wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The supplied key is not exactly 32 bytes.
    InvalidKeyLength {
        /// Length of the rejected key in bytes.
        actual: usize,
    },
    /// The supplied IV is not exactly 16 bytes.
    InvalidBlockLength {
        /// Length of the rejected buffer in bytes.
        actual: usize,
    },
    /// The ciphertext is empty or not a whole number of blocks.
    InvalidLength {
        /// Length of the rejected ciphertext in bytes.
        actual: usize,
    },
    /// The decrypted PKCS#7 trailer is malformed.
    InvalidPadding,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength { actual } => {
                write!(f, "invalid key length: expected 32 bytes, got {actual}")
            }
            Error::InvalidBlockLength { actual } => {
                write!(f, "invalid block length: expected 16 bytes, got {actual}")
            }
            Error::InvalidLength { actual } => write!(
                f,
                "invalid ciphertext length: expected a positive multiple of 16 bytes, got {actual}"
            ),
            Error::InvalidPadding => write!(f, "invalid PKCS#7 padding"),
        }
    }
}

impl std::error::Error for Error {}

impl From<aes_core::Error> for Error {
    fn from(err: aes_core::Error) -> Self {
        match err {
            aes_core::Error::InvalidKeyLength { actual } => Error::InvalidKeyLength { actual },
            aes_core::Error::InvalidBlockLength { actual } => Error::InvalidBlockLength { actual },
        }
    }
}
