//! AES-256 key schedule and block encryption/decryption.

use core::convert::TryInto;

use crate::block::Block;
use crate::gf::gf_mul;
use crate::key::{Aes256Key, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;

/// Number of rounds for a 256-bit key.
pub const ROUNDS: usize = 14;

/// Words in the expanded schedule: `4 * (ROUNDS + 1)`.
const SCHEDULE_WORDS: usize = 60;

// Round constants, indexed 1..=7; slot 0 is never read. Each entry is the
// previous one doubled in GF(2^8), starting from 0x01.
const RCON: [u8; 8] = build_rcon();

const fn build_rcon() -> [u8; 8] {
    let mut rcon = [0u8; 8];
    rcon[1] = 0x01;
    let mut i = 2;
    while i < 8 {
        rcon[i] = gf_mul(rcon[i - 1], 0x02);
        i += 1;
    }
    rcon
}

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Expands a 256-bit key into 15 round keys.
pub fn expand_key(key: &Aes256Key) -> RoundKeys {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (i, chunk) in key.0.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    for i in 8..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % 8 == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / 8]) << 24);
        } else if i % 8 == 4 {
            // The 256-bit schedule substitutes every fourth word as well.
            temp = sub_word(temp);
        }
        w[i] = w[i - 8] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; 15];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for word_idx in 0..4 {
            let bytes = w[round * 4 + word_idx].to_be_bytes();
            let offset = word_idx * 4;
            round_key[offset..offset + 4].copy_from_slice(&bytes);
        }
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(ROUNDS));
    for round in (1..ROUNDS).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state
}
