//! Key types for AES-256.

use crate::block::Block;
use crate::error::Error;

/// AES-256 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes256Key(pub [u8; 32]);

impl Aes256Key {
    /// Copies a slice into a key, rejecting anything that is not exactly
    /// 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != 32 {
            return Err(Error::InvalidKeyLength {
                actual: bytes.len(),
            });
        }
        let mut key = [0u8; 32];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }
}

impl From<[u8; 32]> for Aes256Key {
    fn from(value: [u8; 32]) -> Self {
        Self(value)
    }
}

/// Expanded round keys for AES-256: 15 round keys of 16 bytes, covering the
/// initial key addition plus 14 rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 15]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=14).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_accepts_exactly_32_bytes() {
        let key = Aes256Key::from_slice(&[0xab; 32]).expect("32 bytes is valid");
        assert_eq!(key.0, [0xab; 32]);
    }

    #[test]
    fn from_slice_rejects_other_lengths() {
        for len in [0usize, 16, 31, 33, 64] {
            let bytes = vec![0u8; len];
            assert!(matches!(
                Aes256Key::from_slice(&bytes),
                Err(Error::InvalidKeyLength { actual }) if actual == len
            ));
        }
    }
}
