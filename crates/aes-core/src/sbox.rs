//! AES substitution tables.
//!
//! The tables are derived at compile time from GF(2^8) inverses plus the
//! fixed affine transform rather than pasted from the standard; the tests pin
//! the result to the published FIPS-197 values.

use crate::gf::gf_inv;

/// The affine step of the S-box construction: bit-matrix multiply expressed
/// as rotations, then the 0x63 constant.
const fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ 0x63
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        table[x] = affine(gf_inv(x as u8));
        x += 1;
    }
    table
}

const fn build_inv_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        table[SBOX[x] as usize] = x as u8;
        x += 1;
    }
    table
}

/// Forward S-box.
pub const SBOX: [u8; 256] = build_sbox();

/// Inverse S-box: the exact inverse permutation of [`SBOX`].
pub const INV_SBOX: [u8; 256] = build_inv_sbox();

/// Substitutes one byte through the forward S-box.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Substitutes one byte through the inverse S-box.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}
