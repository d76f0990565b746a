use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

/// Modular inverse computed with the extended Euclidean algorithm.
///
/// Returns `None` when `num` and `modulus` are not coprime, which for a
/// prime modulus only happens when `num` reduces to zero. The input may be
/// any representative of its residue class, negative ones included.
pub fn inverse(num: &BigInt, modulus: &BigInt) -> Option<BigInt> {
    let reduced = num.mod_floor(modulus);
    let egcd = reduced.extended_gcd(modulus);
    if egcd.gcd.is_one() {
        Some(egcd.x.mod_floor(modulus))
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_inverses() {
        assert_eq!(inverse(&2.into(), &17.into()), Some(9.into()));
        assert_eq!(inverse(&10.into(), &23.into()), Some(7.into()));
        assert_eq!(inverse(&1.into(), &17.into()), Some(1.into()));
        assert_eq!(inverse(&16.into(), &17.into()), Some(16.into()));
    }

    #[test]
    fn negative_representatives() {
        // -4 = 13 mod 17 and 13 * 4 = 52 = 1 mod 17
        assert_eq!(inverse(&(-4).into(), &17.into()), Some(4.into()));
        assert_eq!(inverse(&(-1).into(), &17.into()), Some(16.into()));
    }

    #[test]
    fn zero_has_no_inverse() {
        assert_eq!(inverse(&0.into(), &17.into()), None);
        assert_eq!(inverse(&17.into(), &17.into()), None);
        assert_eq!(inverse(&(-34).into(), &17.into()), None);
    }

    #[test]
    fn product_with_inverse_is_one() {
        let modulus = BigInt::from(23);
        for n in 1..23 {
            let n = BigInt::from(n);
            let inv = inverse(&n, &modulus).unwrap();
            assert_eq!((n * inv).mod_floor(&modulus), 1.into());
        }
    }
}
