//! Command-line interface for `aes256-cbc-rs`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use cbc_mode::{decrypt_cbc, encrypt_cbc};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-256-CBC CLI.
#[derive(Parser)]
#[command(
    name = "aescbc",
    version,
    author,
    about = "AES-256-CBC file encryption CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random key and IV and print them as hex.
    Keygen {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt a file.
    Enc {
        /// AES-256 key as 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// IV as 32 hex characters; generated and printed when omitted.
        #[arg(long, value_name = "HEX")]
        iv_hex: Option<String>,
        /// Input plaintext path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Optional RNG seed for IV generation.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Decrypt a file.
    Dec {
        /// AES-256 key as 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// IV as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        iv_hex: String,
        /// Input ciphertext path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Run a local demo: random key and IV, encrypt random data, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Keygen { seed } => cmd_keygen(seed),
        Commands::Enc {
            key_hex,
            iv_hex,
            input,
            output,
            seed,
        } => cmd_enc(&key_hex, iv_hex.as_deref(), &input, &output, seed),
        Commands::Dec {
            key_hex,
            iv_hex,
            input,
            output,
        } => cmd_dec(&key_hex, &iv_hex, &input, &output),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_keygen(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 32];
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);
    println!("key: {}", hex::encode(key));
    println!("iv: {}", hex::encode(iv));
    Ok(())
}

fn cmd_enc(
    key_hex: &str,
    iv_hex: Option<&str>,
    input_path: &PathBuf,
    output_path: &PathBuf,
    seed: Option<u64>,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let iv = match iv_hex {
        Some(hex_str) => parse_iv_hex(hex_str)?,
        None => {
            let mut iv = [0u8; 16];
            seeded_rng(seed).fill_bytes(&mut iv);
            println!("iv: {}", hex::encode(iv));
            iv
        }
    };
    let plaintext =
        fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let ciphertext = encrypt_cbc(&plaintext, &key, &iv).context("encrypt")?;
    fs::write(output_path, ciphertext)
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_dec(
    key_hex: &str,
    iv_hex: &str,
    input_path: &PathBuf,
    output_path: &PathBuf,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let iv = parse_iv_hex(iv_hex)?;
    let ciphertext =
        fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let plaintext = decrypt_cbc(&ciphertext, &key, &iv).context("decrypt")?;
    fs::write(output_path, plaintext)
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 32];
    let mut iv = [0u8; 16];
    let mut message = [0u8; 40];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);
    rng.fill_bytes(&mut message);

    let ciphertext = encrypt_cbc(&message, &key, &iv).context("encrypt")?;
    let recovered = decrypt_cbc(&ciphertext, &key, &iv).context("decrypt")?;

    println!("demo key: {}", hex::encode(key));
    println!("demo iv: {}", hex::encode(iv));
    println!("plaintext: {}", hex::encode(message));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&recovered));
    if recovered != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if bytes.len() != 32 {
        bail!("AES-256 key must be 32 bytes (64 hex characters)");
    }
    let mut key = [0u8; 32];
    key.copy_from_slice(&bytes);
    Ok(key)
}

fn parse_iv_hex(hex_str: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(hex_str.trim()).context("decode IV hex")?;
    if bytes.len() != 16 {
        bail!("IV must be 16 bytes (32 hex characters)");
    }
    let mut iv = [0u8; 16];
    iv.copy_from_slice(&bytes);
    Ok(iv)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
