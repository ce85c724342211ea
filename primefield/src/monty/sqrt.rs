//! Modular square root implementations, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use crate::{
    modulus::{add_small, shr_vartime, sub_small},
    MontyFieldElement, MontyFieldParams,
};
use ff::PrimeField;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Algorithm {
    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks algorithm for any odd prime.
    #[default]
    TonelliShanks,
}

impl Algorithm {
    /// Determine the best algorithm to use with a particular modulus.
    const fn for_modulus(p: &[u64; 4]) -> Self {
        if p[0] & 3 == 3 {
            Self::Shanks
        } else {
            Self::TonelliShanks
        }
    }
}

impl<MOD: MontyFieldParams> MontyFieldElement<MOD> {
    /// Returns the square root of self mod p, or `None` if no square root exists.
    ///
    /// The returned value is computed the same way whether or not `self` is a
    /// square; only the `is_some` flag tells the two cases apart.
    #[inline]
    pub fn sqrt(&self) -> CtOption<Self> {
        match const { Algorithm::for_modulus(MOD::MODULUS.limbs()) } {
            Algorithm::Shanks => self.sqrt_shanks(),
            Algorithm::TonelliShanks => self.sqrt_tonelli_shanks(),
        }
    }

    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    ///
    /// For `q = 3 (mod 4)`, sqrt can be computed with only one exponentiation as
    /// `self^((q + 1) / 4) (mod q)`.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)
    fn sqrt_shanks(&self) -> CtOption<Self> {
        debug_assert!(MOD::MODULUS.limbs()[0] & 3 == 3);

        let mod_plus_1_over_4 = const { shr_vartime(&add_small(MOD::MODULUS.limbs(), 1), 2) };

        let sqrt = self.pow_vartime(&mod_plus_1_over_4);
        CtOption::new(sqrt, (sqrt * sqrt).ct_eq(self))
    }

    /// Tonelli-Shanks algorithm works for every odd prime.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)
    fn sqrt_tonelli_shanks(&self) -> CtOption<Self> {
        let t_minus_1_over_2 =
            const { shr_vartime(&sub_small(&super::compute_t(&MOD::MODULUS), 1), 1) };
        let w = self.pow_vartime(&t_minus_1_over_2);

        let mut v = Self::S;
        let mut x = *self * w;
        let mut b = x * w;
        let mut z = Self::ROOT_OF_UNITY;

        for max_v in (1..=Self::S).rev() {
            let mut k = 1;
            let mut tmp = b.square();
            let mut j_less_than_v = Choice::from(1);

            for j in 2..max_v {
                let tmp_is_one = tmp.ct_eq(&Self::ONE);
                let squared = Self::conditional_select(&tmp, &z, tmp_is_one).square();
                tmp = Self::conditional_select(&squared, &tmp, tmp_is_one);
                let new_z = Self::conditional_select(&z, &squared, tmp_is_one);
                j_less_than_v &= !j.ct_eq(&v);
                k = u32::conditional_select(&j, &k, tmp_is_one);
                z = Self::conditional_select(&z, &new_z, j_less_than_v);
            }

            let result = x * z;
            x = Self::conditional_select(&result, &x, b.ct_eq(&Self::ONE));
            z = z.square();
            b *= z;
            v = k;
        }

        CtOption::new(x, x.square().ct_eq(self))
    }
}

#[cfg(test)]
mod tests {
    use super::Algorithm;
    use crate::{monty_field_params, MontyFieldElement, MontyFieldParams};
    use ff::PrimeField;
    use subtle::CtOption;

    /// Generic sqrt test.
    fn sqrt_test<Fe: PrimeField, F: Fn(&Fe) -> CtOption<Fe>>(f: F) {
        for &n in &[1u64, 4, 9, 16, 25, 36, 49, 64] {
            let fe = Fe::from(n);
            let sqrt = f(&fe).unwrap();
            assert_eq!(sqrt.square(), fe);
        }
    }

    /// Tests the Shanks algorithm implementation, where `p ≡ 3 mod 4`
    #[test]
    fn shanks() {
        // P-256 base field
        monty_field_params!(
            name: P256FieldParams,
            modulus: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
            multiplicative_generator: 6,
            doc: "P-256 field modulus"
        );

        assert_eq!(
            Algorithm::for_modulus(P256FieldParams::MODULUS.limbs()),
            Algorithm::Shanks
        );

        type P256Fe = MontyFieldElement<P256FieldParams>;
        sqrt_test(P256Fe::sqrt_shanks);
        assert!(bool::from(P256Fe::from_u64(6).sqrt_shanks().is_none()));
    }

    /// Tests the generic Tonelli-Shanks implementation, where `p ≡ 1 mod 4`
    #[test]
    fn tonelli_shanks() {
        // P-256 scalar field
        monty_field_params!(
            name: P256ScalarParams,
            modulus: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
            multiplicative_generator: 7,
            doc: "P-256 scalar modulus"
        );

        assert_eq!(
            Algorithm::for_modulus(P256ScalarParams::MODULUS.limbs()),
            Algorithm::TonelliShanks
        );

        type P256Scalar = MontyFieldElement<P256ScalarParams>;
        sqrt_test(P256Scalar::sqrt_tonelli_shanks);
        assert!(bool::from(P256Scalar::from_u64(7).sqrt_tonelli_shanks().is_none()));
    }
}
