use criterion::{black_box, criterion_group, criterion_main, Criterion};

use keycore_bip32::{taproot, ChildNumber, DerivationPath, Keychain, Seed};

const H: u32 = ChildNumber::HARDENED_FLAG;

pub fn derivation_benchmark(c: &mut Criterion) {
    let keychain = Keychain::new(Seed::new([0x5au8; 64]).expect("valid seed"));
    let path = DerivationPath::from([84 | H, H, H, 0, 0]);

    c.bench_function("Keychain::derive_private_key", |b| b.iter(|| keychain.derive_private_key(black_box(&path)).is_ok()));

    c.bench_function("Keychain::extended_pubkey_string_at_path", |b| {
        b.iter(|| keychain.extended_pubkey_string_at_path(black_box(&path), 0x0488_b21e).expect("derivation"))
    });
}

pub fn ckd_pub_benchmark(c: &mut Criterion) {
    let keychain = Keychain::new(Seed::new([0x5au8; 64]).expect("valid seed"));
    let xpub = keychain.extended_pubkey_at_path(&DerivationPath::from([84 | H, H, H]), 0x0488_b21e).expect("derivation");

    c.bench_function("ExtendedPublicKey::ckd_pub", |b| {
        b.iter(|| {
            let mut key = xpub.clone();
            key.ckd_pub(black_box(ChildNumber(0))).expect("non-hardened");
            key
        })
    });
}

pub fn taproot_benchmark(c: &mut Criterion) {
    let keychain = Keychain::new(Seed::new([0x5au8; 64]).expect("valid seed"));
    let (public_key, _) = keychain.public_key_at_path(&DerivationPath::from([86 | H, H, H, 0, 0])).expect("derivation");
    let x_only: [u8; 32] = public_key[1..].try_into().expect("33-byte key");

    c.bench_function("taproot::tweak_pubkey", |b| b.iter(|| taproot::tweak_pubkey(black_box(&x_only)).expect("on curve")));
}

criterion_group!(benches, derivation_benchmark, ckd_pub_benchmark, taproot_benchmark);
criterion_main!(benches);
