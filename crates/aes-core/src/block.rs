//! Block representation helpers.

use crate::error::Error;

/// Width of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies a slice into a [`Block`], rejecting anything that is not exactly
/// 16 bytes.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block, Error> {
    if bytes.len() != BLOCK_SIZE {
        return Err(Error::InvalidBlockLength {
            actual: bytes.len(),
        });
    }
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(bytes);
    Ok(block)
}
