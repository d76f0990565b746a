use criterion::{criterion_group, criterion_main, Criterion};
use weierstrass::{BigInt, Curve, Point};

use num_bigint::Sign;
use rand::rngs::OsRng;
use rand::Rng;

fn secp256k1() -> Curve {
    let p = BigInt::parse_bytes(
        b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        16,
    )
    .unwrap();
    Curve::new(0.into(), 7.into(), p, "secp256k1").unwrap()
}

fn random_scalar(rng: &mut OsRng) -> BigInt {
    let bytes: [u8; 32] = rng.gen();
    BigInt::from_bytes_be(Sign::Plus, &bytes)
}

fn bench_point_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_mul");

    let mut rng = OsRng;
    let curve = secp256k1();
    let generator_x = BigInt::parse_bytes(
        b"79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        16,
    )
    .unwrap();
    let generator_y = BigInt::parse_bytes(
        b"483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        16,
    )
    .unwrap();
    let generator = Point::new(&curve, generator_x, generator_y).unwrap();

    let n = 50_usize;
    let random_scalars: Vec<BigInt> = (0..n).map(|_| random_scalar(&mut rng)).collect();

    group.bench_function("single_mul", |b| {
        let i = rng.gen_range(0..n);
        b.iter(|| &generator * &random_scalars[i])
    });

    group.bench_function("double", |b| {
        b.iter(|| generator.double())
    });

    group.finish();
}

criterion_group!(benches, bench_point_mul);
criterion_main!(benches);
