use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_core::{decrypt_block, encrypt_block, expand_key, Aes256Key};
use cbc_mode::{decrypt_cbc, encrypt_cbc};

fn bench_key_schedule(c: &mut Criterion) {
    let key = Aes256Key::from([0x42u8; 32]);
    let mut group = c.benchmark_group("key_schedule");
    group.bench_function("expand_key", |b| {
        b.iter(|| expand_key(&key));
    });
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let key = Aes256Key::from([0x42u8; 32]);
    let round_keys = expand_key(&key);
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);

    let mut group = c.benchmark_group("block");
    group.bench_function("encrypt_block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| encrypt_block(&block, &round_keys));
    });
    group.bench_function("decrypt_block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| decrypt_block(&block, &round_keys));
    });
    group.finish();
}

fn bench_message(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut key = [0u8; 32];
    let mut iv = [0u8; 16];
    let mut plaintext = vec![0u8; 4096];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);
    rng.fill_bytes(&mut plaintext);
    let ciphertext = encrypt_cbc(&plaintext, &key, &iv).expect("inputs are well formed");

    let mut group = c.benchmark_group("message_4k");
    group.sample_size(50);
    group.bench_function("encrypt_cbc", |b| {
        b.iter(|| {
            let _ = encrypt_cbc(&plaintext, &key, &iv);
        });
    });
    group.bench_function("decrypt_cbc", |b| {
        b.iter(|| {
            let _ = decrypt_cbc(&ciphertext, &key, &iv);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_block, bench_message);
criterion_main!(benches);
