//! Demonstrates encrypting and decrypting a short message under AES-256-CBC.

use cbc_mode::{decrypt_cbc, encrypt_cbc};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn main() {
    // Deterministic seed for reproducibility in the example.
    let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
    let mut key = [0u8; 32];
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);

    let message = b"attack at dawn, bring the long ladders";
    let ciphertext = encrypt_cbc(message, &key, &iv).expect("key and IV are well formed");
    assert_eq!(ciphertext.len() % 16, 0);
    assert_ne!(&ciphertext[..message.len()], &message[..]);

    let recovered = decrypt_cbc(&ciphertext, &key, &iv).expect("ciphertext is well formed");
    assert_eq!(recovered, message);

    println!(
        "example succeeded; {} plaintext bytes became {} ciphertext bytes and back",
        message.len(),
        ciphertext.len()
    );
}
