//! AES round transformations.
//!
//! The state is a 4x4 byte grid stored column-major in a [`Block`]: byte `i`
//! sits at row `i % 4`, column `i / 4`.

use crate::block::{xor_in_place, Block};
use crate::gf::{gf_mul, xtime};
use crate::sbox::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
pub fn shift_rows(state: &mut Block) {
    let tmp = *state;

    // Row 0 stays put.
    state[1] = tmp[5];
    state[5] = tmp[9];
    state[9] = tmp[13];
    state[13] = tmp[1];

    state[2] = tmp[10];
    state[6] = tmp[14];
    state[10] = tmp[2];
    state[14] = tmp[6];

    state[3] = tmp[15];
    state[7] = tmp[3];
    state[11] = tmp[7];
    state[15] = tmp[11];
}

/// Performs the inverse of ShiftRows: row `r` rotates right by `r` positions.
pub fn inv_shift_rows(state: &mut Block) {
    let tmp = *state;

    state[1] = tmp[13];
    state[5] = tmp[1];
    state[9] = tmp[5];
    state[13] = tmp[9];

    state[2] = tmp[10];
    state[6] = tmp[14];
    state[10] = tmp[2];
    state[14] = tmp[6];

    state[3] = tmp[7];
    state[7] = tmp[11];
    state[11] = tmp[15];
    state[15] = tmp[3];
}

/// MixColumns over all four columns: each column is multiplied by the fixed
/// polynomial matrix with rows {02, 03, 01, 01} cyclically shifted.
pub fn mix_columns(state: &mut Block) {
    for col in 0..4 {
        let i = col * 4;
        let (s0, s1, s2, s3) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = xtime(s0) ^ (xtime(s1) ^ s1) ^ s2 ^ s3;
        state[i + 1] = s0 ^ xtime(s1) ^ (xtime(s2) ^ s2) ^ s3;
        state[i + 2] = s0 ^ s1 ^ xtime(s2) ^ (xtime(s3) ^ s3);
        state[i + 3] = (xtime(s0) ^ s0) ^ s1 ^ s2 ^ xtime(s3);
    }
}

/// Inverse MixColumns: multiplication by the {0e, 0b, 0d, 09} matrix.
pub fn inv_mix_columns(state: &mut Block) {
    for col in 0..4 {
        let i = col * 4;
        let (s0, s1, s2, s3) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = gf_mul(s0, 0x0e) ^ gf_mul(s1, 0x0b) ^ gf_mul(s2, 0x0d) ^ gf_mul(s3, 0x09);
        state[i + 1] = gf_mul(s0, 0x09) ^ gf_mul(s1, 0x0e) ^ gf_mul(s2, 0x0b) ^ gf_mul(s3, 0x0d);
        state[i + 2] = gf_mul(s0, 0x0d) ^ gf_mul(s1, 0x09) ^ gf_mul(s2, 0x0e) ^ gf_mul(s3, 0x0b);
        state[i + 3] = gf_mul(s0, 0x0b) ^ gf_mul(s1, 0x0d) ^ gf_mul(s2, 0x09) ^ gf_mul(s3, 0x0e);
    }
}

/// Adds (XORs) a round key into the state. Self-inverse, so encryption and
/// decryption share it.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn shift_rows_round_trips() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let mut state = [0u8; 16];
            rng.fill_bytes(&mut state);
            let original = state;
            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn shift_rows_leaves_row_zero_alone() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        assert_eq!([state[0], state[4], state[8], state[12]], [0, 4, 8, 12]);
    }

    #[test]
    fn mix_columns_matches_worked_example() {
        // The classic single-column vector: [db, 13, 53, 45] -> [8e, 4d, a1, bc].
        // Columns of equal bytes are fixed points of the matrix.
        let mut state: Block = [
            0xdb, 0x13, 0x53, 0x45, 0xc6, 0xc6, 0xc6, 0xc6, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00,
            0x00, 0x00,
        ];
        mix_columns(&mut state);
        assert_eq!(&state[..4], &[0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(&state[4..8], &[0xc6, 0xc6, 0xc6, 0xc6]);
        assert_eq!(&state[8..12], &[0x01, 0x01, 0x01, 0x01]);
        assert_eq!(&state[12..16], &[0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn mix_columns_round_trips() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let mut state = [0u8; 16];
            rng.fill_bytes(&mut state);
            let original = state;
            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn sub_bytes_round_trips() {
        let mut state: Block = core::array::from_fn(|i| (i * 17) as u8);
        let original = state;
        sub_bytes(&mut state);
        inv_sub_bytes(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn add_round_key_is_self_inverse() {
        let mut state: Block = *b"another 16b blck";
        let key: Block = [0x3c; 16];
        let original = state;
        add_round_key(&mut state, &key);
        add_round_key(&mut state, &key);
        assert_eq!(state, original);
    }
}
