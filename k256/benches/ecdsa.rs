//! secp256k1 ECDSA benchmarks

use core::hint::black_box;
use criterion::{Criterion, criterion_group, criterion_main};
use k256::{BigUint, ecdsa::SigningKey};

fn test_signing_key() -> SigningKey {
    SigningKey::from_bytes(&[
        0xbb, 0x48, 0x8a, 0xef, 0x41, 0x6a, 0x41, 0xd7, 0x68, 0x0d, 0x1c, 0xf0, 0x1d, 0x70, 0xf5,
        0x9b, 0x60, 0xd7, 0xf5, 0xf7, 0x7e, 0x30, 0xe7, 0x8b, 0x8b, 0xf9, 0xd2, 0xd8, 0x82, 0xf1,
        0x56, 0xa6,
    ])
    .unwrap()
}

fn test_digest() -> BigUint {
    BigUint::from_bytes_be(&[
        0xe3, 0x35, 0x80, 0xeb, 0x6e, 0xd0, 0x22, 0xae, 0xd6, 0xaf, 0x20, 0xd9, 0x22, 0x37, 0x63,
        0x5e, 0x7c, 0x20, 0xc5, 0xf1, 0xbc, 0xd6, 0xae, 0xe8, 0x81, 0x82, 0xed, 0x71, 0x80, 0xf6,
        0xe2, 0x67,
    ])
}

fn bench_ecdsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa");

    let d = test_signing_key();
    let z = test_digest();

    group.bench_function("deterministic_nonce", |b| {
        b.iter(|| black_box(&d).deterministic_nonce(black_box(&z)).unwrap())
    });

    group.bench_function("sign", |b| {
        b.iter(|| black_box(&d).sign(black_box(&z)).unwrap())
    });

    let q = d.verifying_key();
    let s = d.sign(&z).unwrap();

    group.bench_function("verify", |b| {
        b.iter(|| assert!(black_box(q).verify(black_box(&z), black_box(&s))))
    });

    group.finish();
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
