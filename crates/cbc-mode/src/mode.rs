//! CBC chaining over the block cipher.

use aes_core::{
    block_from_slice, decrypt_block, encrypt_block, expand_key, xor_in_place, Aes256Key, Block,
    BLOCK_SIZE,
};

use crate::error::Error;
use crate::padding::{pad_pkcs7, unpad_pkcs7};

/// Splits a buffer into 16-byte blocks, rejecting anything that is not a
/// positive multiple of the block size.
pub fn split_blocks(data: &[u8]) -> Result<Vec<Block>, Error> {
    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidLength { actual: data.len() });
    }
    let blocks = data
        .chunks_exact(BLOCK_SIZE)
        .map(|chunk| {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            block
        })
        .collect();
    Ok(blocks)
}

/// XORs two blocks into a fresh block.
#[inline]
pub fn xor_blocks(a: &Block, b: &Block) -> Block {
    let mut out = *a;
    xor_in_place(&mut out, b);
    out
}

/// Encrypts a message of any length under AES-256-CBC.
///
/// The plaintext is PKCS#7-padded, split into blocks, and each block is XORed
/// with the previous ciphertext block (the IV for the first) before
/// encryption. The chaining input of block `i` is the ciphertext of block
/// `i - 1`, so the blocks of one message are processed strictly in order.
///
/// The ciphertext is always a non-empty multiple of 16 bytes, one block
/// longer than the plaintext rounded down to a block boundary.
pub fn encrypt_cbc(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, Error> {
    let key = Aes256Key::from_slice(key)?;
    let iv = block_from_slice(iv)?;
    let round_keys = expand_key(&key);

    let padded = pad_pkcs7(plaintext);
    let blocks = split_blocks(&padded)?;

    let mut ciphertext = Vec::with_capacity(padded.len());
    let mut chain = iv;
    for block in &blocks {
        chain = encrypt_block(&xor_blocks(block, &chain), &round_keys);
        ciphertext.extend_from_slice(&chain);
    }
    Ok(ciphertext)
}

/// Decrypts an AES-256-CBC ciphertext and strips the PKCS#7 trailer.
///
/// Each block is decrypted and XORed with the previous ciphertext block (the
/// IV for the first). Unlike encryption, the per-block transform reads only
/// ciphertext, so the blocks carry no sequential data dependency; this
/// implementation still walks them in order.
///
/// Fails with [`Error::InvalidLength`] unless the ciphertext is a positive
/// multiple of 16 bytes, and with [`Error::InvalidPadding`] if the recovered
/// trailer is malformed, which indicates a wrong key, wrong IV, or corrupted
/// ciphertext.
pub fn decrypt_cbc(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, Error> {
    let key = Aes256Key::from_slice(key)?;
    let iv = block_from_slice(iv)?;
    let blocks = split_blocks(ciphertext)?;
    let round_keys = expand_key(&key);

    let mut plaintext = Vec::with_capacity(ciphertext.len());
    let mut chain = iv;
    for block in &blocks {
        let recovered = xor_blocks(&decrypt_block(block, &round_keys), &chain);
        plaintext.extend_from_slice(&recovered);
        chain = *block;
    }

    let message_len = unpad_pkcs7(&plaintext)?.len();
    plaintext.truncate(message_len);
    Ok(plaintext)
}
