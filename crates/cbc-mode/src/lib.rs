//! AES-256 in Cipher Block Chaining mode with PKCS#7 padding.
//!
//! This crate layers message-level encryption over the `aes-core` block
//! cipher and provides:
//! - PKCS#7 padding and validation.
//! - Block splitting and XOR chaining.
//! - Whole-message `encrypt_cbc` / `decrypt_cbc` entry points.
//!
//! Keys and IVs are caller-supplied raw byte buffers; key derivation,
//! randomness, and encoding are left to the caller. Padding validation is not
//! constant-time, so the crate inherits the side-channel caveats of
//! `aes-core`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod mode;
mod padding;

pub use crate::error::Error;
pub use crate::mode::{decrypt_cbc, encrypt_cbc, split_blocks, xor_blocks};
pub use crate::padding::{pad_pkcs7, unpad_pkcs7};
