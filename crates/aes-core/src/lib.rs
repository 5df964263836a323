//! Reference AES-256 implementation used by the CBC mode layer and CLI.
//!
//! This crate intentionally mirrors the FIPS-197 specification and provides:
//! - Finite-field arithmetic over GF(2^8) and the derived substitution tables.
//! - Key schedule for AES-256.
//! - Single-block encryption and decryption.
//! - Public types shared across the workspace.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;

pub use crate::block::{block_from_slice, xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, ROUNDS};
pub use crate::error::Error;
pub use crate::gf::{gf_inv, gf_mul, xtime};
pub use crate::key::{Aes256Key, RoundKeys};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, SBOX};
