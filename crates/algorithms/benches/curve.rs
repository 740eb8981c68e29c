//! Benchmarks for SM2 curve arithmetic

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gmcrypt_algorithms::ec::{PointFormat, PrimeFieldCurve};
use rand::rngs::OsRng;

fn bench_point_arithmetic(c: &mut Criterion) {
    let curve = PrimeFieldCurve::sm2().unwrap();
    let mut group = c.benchmark_group("sm2_point");

    let (_, p) = curve.generate_keypair(&mut OsRng).unwrap();
    let (_, q) = curve.generate_keypair(&mut OsRng).unwrap();

    group.bench_function("add", |bench| {
        bench.iter(|| curve.add(black_box(&p), black_box(&q)).unwrap())
    });

    group.bench_function("double", |bench| {
        bench.iter(|| curve.double(black_box(&p)).unwrap())
    });

    group.finish();
}

fn bench_scalar_multiplication(c: &mut Criterion) {
    let curve = PrimeFieldCurve::sm2().unwrap();
    let mut group = c.benchmark_group("sm2_scalar_mult");
    group.sample_size(20);

    let k = curve.random_scalar(&mut OsRng).unwrap();
    let (_, p) = curve.generate_keypair(&mut OsRng).unwrap();

    group.bench_function("double_and_add", |bench| {
        bench.iter(|| curve.multiply(black_box(&p), black_box(&k)).unwrap())
    });

    group.bench_function("ladder", |bench| {
        bench.iter(|| curve.multiply_ladder(black_box(&p), black_box(&k)).unwrap())
    });

    group.bench_function("check_point", |bench| {
        bench.iter(|| curve.check_point(black_box(&p)).unwrap())
    });

    group.finish();
}

fn bench_point_encoding(c: &mut Criterion) {
    let curve = PrimeFieldCurve::sm2().unwrap();
    let mut group = c.benchmark_group("sm2_point_encoding");

    let (_, p) = curve.generate_keypair(&mut OsRng).unwrap();
    let compressed = curve.encode_point(&p, PointFormat::Compressed).unwrap();
    let uncompressed = curve.encode_point(&p, PointFormat::Uncompressed).unwrap();

    group.bench_function("decode_compressed", |bench| {
        bench.iter(|| curve.decode_point(black_box(&compressed)).unwrap())
    });

    group.bench_function("decode_uncompressed", |bench| {
        bench.iter(|| curve.decode_point(black_box(&uncompressed)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_point_arithmetic,
    bench_scalar_multiplication,
    bench_point_encoding
);
criterion_main!(benches);
