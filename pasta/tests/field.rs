//! Field arithmetic tests for `Fp` and `Fq`, checked against `num-bigint`.

use num_bigint::BigUint;
use proptest::prelude::*;

fn to_biguint(bytes: &[u8; 32]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

fn to_le_bytes(n: &BigUint) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    let digits = n.to_bytes_le();
    bytes[..digits.len()].copy_from_slice(&digits);
    bytes
}

macro_rules! field_tests {
    ($module:ident, $fe:ident, $params:ident) => {
        mod $module {
            use super::{to_biguint, to_le_bytes};
            use mina_pasta::{$fe, $params, ff::Field, primefield::MontyFieldParams};
            use num_bigint::BigUint;
            use proptest::prelude::*;

            fn modulus() -> BigUint {
                let mut bytes = [0u8; 32];
                for (chunk, limb) in bytes.chunks_exact_mut(8).zip($params::MODULUS.limbs()) {
                    chunk.copy_from_slice(&limb.to_le_bytes());
                }
                to_biguint(&bytes)
            }

            fn to_big(fe: &$fe) -> BigUint {
                to_biguint(&fe.to_bytes())
            }

            fn from_big(n: &BigUint) -> $fe {
                $fe::from_bytes(&to_le_bytes(n)).unwrap()
            }

            prop_compose! {
                fn field_element()(bytes in any::<[u8; 32]>()) -> $fe {
                    $fe::reduce_bytes(&bytes)
                }
            }

            #[test]
            fn boundaries() {
                let m = modulus();
                let max = from_big(&(&m - 1u32));

                assert_eq!(max + $fe::ONE, $fe::ZERO);
                assert_eq!($fe::ZERO - $fe::ONE, max);
                assert_eq!(max + max, from_big(&(&m - 2u32)));
                assert_eq!(-$fe::ZERO, $fe::ZERO);
                assert_eq!(-max, $fe::ONE);
                assert_eq!(max * max, $fe::ONE);
            }

            #[test]
            fn encoding_rejects_modulus() {
                let m = modulus();
                assert!(bool::from($fe::from_bytes(&to_le_bytes(&m)).is_none()));
                assert!(bool::from($fe::from_bytes(&[0xff; 32]).is_none()));
                assert!($fe::from_slice(&to_le_bytes(&m)).is_err());
                assert!($fe::from_slice(&[0u8; 31]).is_err());

                assert_eq!($fe::reduce_bytes(&to_le_bytes(&m)), $fe::ZERO);
                assert_eq!($fe::reduce_bytes(&to_le_bytes(&(&m + 5u32))), $fe::from_u64(5));
            }

            #[test]
            fn five_is_a_non_residue() {
                let five = $fe::from_u64(5);
                assert!(bool::from(five.sqrt().is_none()));
                assert_eq!(five.legendre(), -$fe::ONE);
            }

            #[test]
            fn montgomery_constants_match_oracle() {
                let m = modulus();
                let r = (BigUint::from(1u32) << 256u32) % &m;
                let r2 = (&r * &r) % &m;

                let mut limbs = [0u8; 32];
                for (chunk, limb) in limbs.chunks_exact_mut(8).zip($params::MODULUS.r()) {
                    chunk.copy_from_slice(&limb.to_le_bytes());
                }
                assert_eq!(to_biguint(&limbs), r);

                for (chunk, limb) in limbs.chunks_exact_mut(8).zip($params::MODULUS.r2()) {
                    chunk.copy_from_slice(&limb.to_le_bytes());
                }
                assert_eq!(to_biguint(&limbs), r2);

                let inv = $params::MODULUS.inv();
                assert_eq!($params::MODULUS.limbs()[0].wrapping_mul(inv), u64::MAX);
            }

            proptest! {
                #[test]
                fn add_matches_oracle(a in field_element(), b in field_element()) {
                    prop_assert_eq!(to_big(&(a + b)), (to_big(&a) + to_big(&b)) % modulus());
                }

                #[test]
                fn sub_matches_oracle(a in field_element(), b in field_element()) {
                    let m = modulus();
                    prop_assert_eq!(to_big(&(a - b)), (to_big(&a) + &m - to_big(&b)) % m);
                }

                #[test]
                fn mul_matches_oracle(a in field_element(), b in field_element()) {
                    prop_assert_eq!(to_big(&(a * b)), (to_big(&a) * to_big(&b)) % modulus());
                }

                #[test]
                fn neg_matches_oracle(a in field_element()) {
                    let m = modulus();
                    prop_assert_eq!(to_big(&-a), (&m - to_big(&a)) % m);
                }

                #[test]
                fn invert_matches_oracle(a in field_element()) {
                    prop_assume!(!bool::from(a.is_zero()));
                    let m = modulus();
                    let expected = to_big(&a).modpow(&(&m - 2u32), &m);
                    prop_assert_eq!(to_big(&a.invert().unwrap()), expected);
                    prop_assert_eq!(a * a.invert().unwrap(), $fe::ONE);
                }

                #[test]
                fn reduce_bytes_matches_oracle(bytes in any::<[u8; 32]>()) {
                    let fe = $fe::reduce_bytes(&bytes);
                    prop_assert_eq!(to_big(&fe), to_biguint(&bytes) % modulus());
                }

                #[test]
                fn from_bytes_accepts_exactly_canonical(bytes in any::<[u8; 32]>()) {
                    let canonical = to_biguint(&bytes) < modulus();
                    prop_assert_eq!(bool::from($fe::from_bytes(&bytes).is_some()), canonical);
                }

                #[test]
                fn sub_then_add(a in field_element(), b in field_element()) {
                    prop_assert_eq!((a - b) + b, a);
                }

                #[test]
                fn byte_round_trip(a in field_element()) {
                    prop_assert_eq!($fe::from_bytes(&a.to_bytes()).unwrap(), a);
                    prop_assert_eq!($fe::from_slice(&a.to_bytes()).unwrap(), a);
                }

                #[test]
                fn montgomery_round_trip(a in field_element()) {
                    prop_assert_eq!($fe::from_montgomery(*a.as_montgomery()), a);
                    prop_assert_eq!($fe::from_uint(&a.to_canonical()).unwrap(), a);
                }

                #[test]
                fn multiplicative_identity(a in field_element()) {
                    prop_assert_eq!(a * $fe::ONE, a);
                }

                #[test]
                fn commutative_and_associative(
                    a in field_element(),
                    b in field_element(),
                    c in field_element(),
                ) {
                    prop_assert_eq!(a + b, b + a);
                    prop_assert_eq!(a * b, b * a);
                    prop_assert_eq!((a + b) + c, a + (b + c));
                    prop_assert_eq!((a * b) * c, a * (b * c));
                    prop_assert_eq!(a * (b + c), a * b + a * c);
                }

                #[test]
                fn square_is_self_product(a in field_element()) {
                    prop_assert_eq!(a.square(), a * a);
                    prop_assert_eq!(a.double(), a + a);
                }

                #[test]
                fn sqrt_of_square(a in field_element()) {
                    let square = a.square();
                    let root = square.sqrt().unwrap();
                    prop_assert_eq!(root.square(), square);
                    prop_assert!(root == a || root == -a);
                    prop_assert!(bool::from(square.is_square()));
                }

                #[test]
                fn pow_forms_agree(a in field_element(), e in any::<u64>()) {
                    let bits: Vec<bool> = (0..64).rev().map(|i| (e >> i) & 1 == 1).collect();
                    let expected = to_big(&a).modpow(&BigUint::from(e), &modulus());
                    prop_assert_eq!(to_big(&a.pow_vartime(&[e, 0, 0, 0])), expected);
                    prop_assert_eq!(a.pow_bits(&bits), a.pow_vartime(&[e, 0, 0, 0]));
                }

                #[test]
                fn random_elements_are_canonical(seed in any::<u64>()) {
                    use rand_core::SeedableRng;
                    let rng = rand_core::block::BlockRng::<Lcg>::seed_from_u64(seed);
                    let fe = <$fe as Field>::random(rng);
                    prop_assert!(to_big(&fe) < modulus());
                }
            }

            /// Small linear congruential generator, only used to drive `Field::random`.
            struct Lcg(u64);

            impl rand_core::block::BlockRngCore for Lcg {
                type Item = u32;
                type Results = [u32; 4];

                fn generate(&mut self, results: &mut Self::Results) {
                    for word in results.iter_mut() {
                        self.0 = self
                            .0
                            .wrapping_mul(6_364_136_223_846_793_005)
                            .wrapping_add(1_442_695_040_888_963_407);
                        *word = (self.0 >> 32) as u32;
                    }
                }
            }

            impl rand_core::SeedableRng for Lcg {
                type Seed = [u8; 8];

                fn from_seed(seed: Self::Seed) -> Self {
                    Lcg(u64::from_le_bytes(seed))
                }
            }
        }
    };
}

field_tests!(fp, Fp, FpParams);
field_tests!(fq, Fq, FqParams);

#[test]
fn moduli_are_ordered() {
    use mina_pasta::{FpParams, FqParams, primefield::MontyFieldParams};

    let limbs_to_big = |limbs: &[u64; 4]| {
        let mut bytes = [0u8; 32];
        for (chunk, limb) in bytes.chunks_exact_mut(8).zip(limbs) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        to_biguint(&bytes)
    };

    let p = limbs_to_big(FpParams::MODULUS.limbs());
    let q = limbs_to_big(FqParams::MODULUS.limbs());
    assert!(p < q);
    assert!((&q - &p) < (BigUint::from(1u32) << 125u32));
    assert_eq!(p.bits(), 255);
    assert_eq!(q.bits(), 255);
}

proptest! {
    #[test]
    fn base_elements_carry_into_scalars(bytes in any::<[u8; 32]>()) {
        let fe = mina_pasta::Fp::reduce_bytes(&bytes);
        let scalar = mina_pasta::scalar_from_base(&fe);
        prop_assert_eq!(scalar.to_bytes(), fe.to_bytes());
    }
}
