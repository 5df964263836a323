//! Error type for the cipher engine.

use core::fmt;

/// Validation failures surfaced before any cryptographic transform runs.
///
/// A failing call never produces output bytes; these are input errors, not
/// transient faults, so there is nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The supplied key is not exactly 32 bytes.
    InvalidKeyLength {
        /// Length of the rejected key in bytes.
        actual: usize,
    },
    /// The supplied block (or IV) is not exactly 16 bytes.
    InvalidBlockLength {
        /// Length of the rejected buffer in bytes.
        actual: usize,
    },
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
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_length() {
        let message = Error::InvalidKeyLength { actual: 31 }.to_string();
        assert!(message.contains("31"));
        let message = Error::InvalidBlockLength { actual: 15 }.to_string();
        assert!(message.contains("15"));
    }
}
