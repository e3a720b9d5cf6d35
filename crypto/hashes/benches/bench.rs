use criterion::{black_box, criterion_group, criterion_main, Criterion};

use keycore_hashes::{hash160, TaggedHash};

pub fn hash160_benchmark(c: &mut Criterion) {
    let key = [0x02u8; 33];
    c.bench_function("hash160", |b| b.iter(|| hash160(black_box(&key))));
}

pub fn tagged_hash_benchmark(c: &mut Criterion) {
    let data = [0x5au8; 32];
    let engine = TaggedHash::new(b"TapTweak");
    c.bench_function("TaggedHash::hash (cached midstate)", |b| b.iter(|| engine.hash(black_box(&data))));
    c.bench_function("tagged_hash (fresh)", |b| b.iter(|| keycore_hashes::tagged_hash(b"TapTweak", black_box(&data))));
}

criterion_group!(benches, hash160_benchmark, tagged_hash_benchmark);
criterion_main!(benches);
