use core::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn engine(c: &mut Criterion) {
  let mut group = c.benchmark_group("engine");
  for len in [64usize, 1024, 16384] {
    let data = vec![0xa5u8; len];
    group.throughput(Throughput::Bytes(len as u64));

    group.bench_with_input(BenchmarkId::new("hash/sha256", len), &data, |b, d| {
      b.iter(|| omnihash::hash("sha256", black_box(d)).unwrap())
    });
    group.bench_with_input(BenchmarkId::new("hash/sha512", len), &data, |b, d| {
      b.iter(|| omnihash::hash("sha512", black_box(d)).unwrap())
    });
    group.bench_with_input(BenchmarkId::new("hmac/sha256", len), &data, |b, d| {
      b.iter(|| omnihash::hmac("sha256", black_box(d), b"bench key").unwrap())
    });
  }
  group.finish();

  c.bench_function("pbkdf2/sha256/1000", |b| {
    b.iter(|| omnihash::pbkdf2("sha256", black_box(b"password"), b"salt", 1_000, 32).unwrap())
  });

  c.bench_function("hkdf/sha256/64", |b| {
    b.iter(|| omnihash::hkdf("sha256", black_box(b"input keying material"), b"salt", b"info", 64).unwrap())
  });
}

criterion_group!(benches, engine);
criterion_main!(benches);
