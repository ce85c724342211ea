//! Field modulus descriptor and the raw 4-limb arithmetic written against it.
//!
//! Every operation here works on little-endian `[u64; 4]` limb arrays and takes
//! the modulus explicitly via `&self`, which is how two different prime fields
//! share a single implementation. Branching on *which* modulus is in use is
//! fine (moduli are public); nothing branches on the values being operated on.
//!
//! Unless noted otherwise, inputs are expected to be fully reduced (`< m`) and
//! in Montgomery form, and outputs are fully reduced.

use crate::limb::{adc, is_nonzero_mask, mac, sbb, select_limbs};

/// A 4-limb odd prime modulus `m` along with its Montgomery constants for
/// `R = 2^256`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Modulus {
    /// Little-endian limbs of `m`.
    limbs: [u64; 4],

    /// `R mod m`, i.e. the Montgomery form of `1`.
    r: [u64; 4],

    /// `R^2 mod m`, used to enter the Montgomery domain.
    r2: [u64; 4],

    /// `-m^{-1} mod 2^64`.
    inv: u64,
}

impl Modulus {
    /// Build a modulus descriptor from its little-endian limbs, deriving the
    /// Montgomery constants.
    ///
    /// # Panics
    ///
    /// If `m` is even or smaller than `2^192`. Intended for use in `const`
    /// items, where this becomes a compile error.
    pub const fn new(limbs: [u64; 4]) -> Self {
        assert!(limbs[0] & 1 == 1, "modulus must be odd");
        assert!(limbs[3] != 0, "modulus must use all four limbs");

        // 2^256 mod m and 2^512 mod m by repeated doubling of 1.
        let mut r = [1, 0, 0, 0];
        let mut i = 0;
        while i < 256 {
            r = add_inner(&r, &r, &limbs);
            i += 1;
        }

        let mut r2 = r;
        while i < 512 {
            r2 = add_inner(&r2, &r2, &limbs);
            i += 1;
        }

        Self {
            limbs,
            r,
            r2,
            inv: compute_inv(limbs[0]),
        }
    }

    /// Build a modulus descriptor from 64 big-endian hex digits.
    ///
    /// # Panics
    ///
    /// If the string is not exactly 64 hex digits, or under the same
    /// conditions as [`Modulus::new`].
    pub const fn from_be_hex(hex: &str) -> Self {
        Self::new(limbs_from_be_hex(hex))
    }

    /// Little-endian limbs of the modulus.
    pub const fn limbs(&self) -> &[u64; 4] {
        &self.limbs
    }

    /// `R mod m`: the Montgomery representation of `1`.
    pub const fn r(&self) -> &[u64; 4] {
        &self.r
    }

    /// `R^2 mod m`.
    pub const fn r2(&self) -> &[u64; 4] {
        &self.r2
    }

    /// `-m^{-1} mod 2^64`.
    pub const fn inv(&self) -> u64 {
        self.inv
    }

    /// Number of significant bits in the modulus.
    pub const fn bits(&self) -> u32 {
        256 - self.limbs[3].leading_zeros()
    }

    /// Modular addition: `a + b mod m`.
    #[inline]
    pub const fn add(&self, a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
        add_inner(a, b, &self.limbs)
    }

    /// Modular subtraction: `a - b mod m`.
    #[inline]
    pub const fn sub(&self, a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
        sub_inner(
            [a[0], a[1], a[2], a[3], 0],
            [b[0], b[1], b[2], b[3], 0],
            &self.limbs,
        )
    }

    /// Modular negation: `-a mod m`.
    #[inline]
    pub const fn neg(&self, a: &[u64; 4]) -> [u64; 4] {
        self.sub(&[0; 4], a)
    }

    /// Montgomery multiplication: `a * b * R^-1 mod m`.
    ///
    /// Coarsely integrated operand scanning: each of the four outer iterations
    /// accumulates `a[i] * b` and then clears the lowest word by adding a
    /// multiple of `m`. The running value stays below `2m`, so one conditional
    /// subtraction at the end fully reduces it.
    ///
    /// `b` must be `< m`; `a` may be any 256-bit value, which is what lets
    /// [`Modulus::to_montgomery`] reduce non-canonical input.
    #[inline]
    pub const fn mul(&self, a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
        let m = &self.limbs;
        let mut t = [0u64; 6];

        let mut i = 0;
        while i < 4 {
            let mut carry = 0;
            let mut j = 0;
            while j < 4 {
                let (w, c) = mac(t[j], a[i], b[j], carry);
                t[j] = w;
                carry = c;
                j += 1;
            }
            let (w, c) = adc(t[4], carry, 0);
            t[4] = w;
            t[5] = c;

            let k = t[0].wrapping_mul(self.inv);
            let (_, mut carry) = mac(t[0], k, m[0], 0);
            let mut j = 1;
            while j < 4 {
                let (w, c) = mac(t[j], k, m[j], carry);
                t[j - 1] = w;
                carry = c;
                j += 1;
            }
            let (w, c) = adc(t[4], carry, 0);
            t[3] = w;
            t[4] = t[5] + c;

            i += 1;
        }

        sub_inner(
            [t[0], t[1], t[2], t[3], t[4]],
            [m[0], m[1], m[2], m[3], 0],
            m,
        )
    }

    /// Montgomery squaring: `a^2 * R^-1 mod m`.
    #[inline]
    pub const fn square(&self, a: &[u64; 4]) -> [u64; 4] {
        self.mul(a, a)
    }

    /// Montgomery reduction of the 512-bit value `hi * 2^256 + lo`, returning
    /// `(hi * 2^256 + lo) * R^-1 mod m`.
    ///
    /// Requires `hi * 2^256 + lo < m * 2^256`.
    ///
    /// ```text
    /// A <- input (2n b-limbs)
    /// for i in 0..n {
    ///     k <- A[i] p' mod b
    ///     A <- A + k p b^i
    /// }
    /// A <- A / b^n
    /// if A >= p {
    ///     A <- A - p
    /// }
    /// ```
    pub const fn montgomery_reduce(&self, lo: &[u64; 4], hi: &[u64; 4]) -> [u64; 4] {
        let m = &self.limbs;
        let mut t = [lo[0], lo[1], lo[2], lo[3], hi[0], hi[1], hi[2], hi[3]];
        let mut carry2 = 0;

        let mut i = 0;
        while i < 4 {
            let k = t[i].wrapping_mul(self.inv);
            let mut carry = 0;
            let mut j = 0;
            while j < 4 {
                let (w, c) = mac(t[i + j], k, m[j], carry);
                t[i + j] = w;
                carry = c;
                j += 1;
            }
            let (w, c) = adc(t[i + 4], carry2, carry);
            t[i + 4] = w;
            carry2 = c;
            i += 1;
        }

        sub_inner(
            [t[4], t[5], t[6], t[7], carry2],
            [m[0], m[1], m[2], m[3], 0],
            m,
        )
    }

    /// Enter the Montgomery domain: `a * R mod m`.
    ///
    /// Any 256-bit `a` is accepted; values `>= m` come out reduced.
    #[inline]
    pub const fn to_montgomery(&self, a: &[u64; 4]) -> [u64; 4] {
        self.mul(a, &self.r2)
    }

    /// Leave the Montgomery domain: `a * R^-1 mod m`.
    #[inline]
    pub const fn from_montgomery(&self, a: &[u64; 4]) -> [u64; 4] {
        self.montgomery_reduce(a, &[0; 4])
    }

    /// Returns a non-zero word iff `a` is non-zero.
    ///
    /// Zero is zero in both domains, so this works on either representation.
    #[inline]
    pub const fn is_nonzero(a: &[u64; 4]) -> u64 {
        a[0] | a[1] | a[2] | a[3]
    }

    /// Returns `u64::MAX` if `a` is zero and `0` otherwise.
    #[inline]
    pub const fn is_zero(a: &[u64; 4]) -> u64 {
        !is_nonzero_mask(Self::is_nonzero(a))
    }

    /// Returns `u64::MAX` if `a == b (mod m)` and `0` otherwise.
    #[inline]
    pub const fn eq(&self, a: &[u64; 4], b: &[u64; 4]) -> u64 {
        Self::is_zero(&self.sub(a, b))
    }

    /// Returns `u64::MAX` if `a < b` as integers and `0` otherwise.
    #[inline]
    pub const fn lt(a: &[u64; 4], b: &[u64; 4]) -> u64 {
        let (_, borrow) = sbb(a[0], b[0], 0);
        let (_, borrow) = sbb(a[1], b[1], borrow);
        let (_, borrow) = sbb(a[2], b[2], borrow);
        let (_, borrow) = sbb(a[3], b[3], borrow);
        borrow
    }

    /// Returns `u64::MAX` if `a < m` and `0` otherwise.
    #[inline]
    pub const fn is_canonical(&self, a: &[u64; 4]) -> u64 {
        Self::lt(a, &self.limbs)
    }

    /// Returns `b` if `flag` is non-zero and `a` otherwise.
    #[inline]
    pub const fn select(flag: u64, a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
        select_limbs(flag, a, b)
    }

    /// Returns `a^exp` where `exp` is a little-endian 256-bit integer.
    ///
    /// **Variable time with respect to the exponent**, which must be public.
    pub const fn pow_vartime(&self, a: &[u64; 4], exp: &[u64; 4]) -> [u64; 4] {
        let mut res = self.r;
        let mut i = 4;
        while i > 0 {
            i -= 1;
            let mut j = 64;
            while j > 0 {
                j -= 1;
                res = self.square(&res);
                if (exp[i] >> j) & 1 == 1 {
                    res = self.mul(&res, a);
                }
            }
        }
        res
    }

    /// Returns `a^e` where `e` is given as a most-significant-bit-first
    /// sequence of bits.
    ///
    /// **Variable time with respect to the exponent**, which must be public.
    pub const fn pow_bits(&self, a: &[u64; 4], msb_first: &[bool]) -> [u64; 4] {
        let mut res = self.r;
        let mut i = 0;
        while i < msb_first.len() {
            res = self.square(&res);
            if msb_first[i] {
                res = self.mul(&res, a);
            }
            i += 1;
        }
        res
    }

    /// Multiplicative inverse `a^(m - 2)`; maps zero to zero.
    pub const fn invert(&self, a: &[u64; 4]) -> [u64; 4] {
        self.pow_vartime(a, &sub_small(&self.limbs, 2))
    }
}

/// `a + b mod m` for `a, b < m`.
///
/// Bit 256 of the sum may be set, so it is carried into a fifth word before the
/// trial subtraction.
#[inline(always)]
const fn add_inner(a: &[u64; 4], b: &[u64; 4], m: &[u64; 4]) -> [u64; 4] {
    let (w0, carry) = adc(a[0], b[0], 0);
    let (w1, carry) = adc(a[1], b[1], carry);
    let (w2, carry) = adc(a[2], b[2], carry);
    let (w3, w4) = adc(a[3], b[3], carry);

    // Attempt to subtract the modulus, to ensure the result is in the field
    sub_inner([w0, w1, w2, w3, w4], [m[0], m[1], m[2], m[3], 0], m)
}

/// Computes `l - r` over five words and adds `m` back if that underflowed.
#[inline(always)]
const fn sub_inner(l: [u64; 5], r: [u64; 5], m: &[u64; 4]) -> [u64; 4] {
    let (w0, borrow) = sbb(l[0], r[0], 0);
    let (w1, borrow) = sbb(l[1], r[1], borrow);
    let (w2, borrow) = sbb(l[2], r[2], borrow);
    let (w3, borrow) = sbb(l[3], r[3], borrow);
    let (_, borrow) = sbb(l[4], r[4], borrow);

    // If underflow occurred on the final limb, borrow = 0xfff...fff, otherwise
    // borrow = 0x000...000. Thus, we use it as a mask to conditionally add the
    // modulus.
    let (w0, carry) = adc(w0, m[0] & borrow, 0);
    let (w1, carry) = adc(w1, m[1] & borrow, carry);
    let (w2, carry) = adc(w2, m[2] & borrow, carry);
    let (w3, _) = adc(w3, m[3] & borrow, carry);

    [w0, w1, w2, w3]
}

/// `a - n` over plain integers, for small public `n`.
pub(crate) const fn sub_small(a: &[u64; 4], n: u64) -> [u64; 4] {
    let (w0, borrow) = sbb(a[0], n, 0);
    let (w1, borrow) = sbb(a[1], 0, borrow);
    let (w2, borrow) = sbb(a[2], 0, borrow);
    let (w3, _) = sbb(a[3], 0, borrow);
    [w0, w1, w2, w3]
}

/// `a + n` over plain integers, for small public `n`. Wraps at `2^256`.
pub(crate) const fn add_small(a: &[u64; 4], n: u64) -> [u64; 4] {
    let (w0, carry) = adc(a[0], n, 0);
    let (w1, carry) = adc(a[1], 0, carry);
    let (w2, carry) = adc(a[2], 0, carry);
    let (w3, _) = adc(a[3], 0, carry);
    [w0, w1, w2, w3]
}

/// Logical right shift of a 4-limb integer. Variable time in `n`.
pub(crate) const fn shr_vartime(a: &[u64; 4], n: u32) -> [u64; 4] {
    let words = (n / 64) as usize;
    let bits = n % 64;
    let mut out = [0u64; 4];

    let mut i = 0;
    while i + words < 4 {
        let lo = a[i + words] >> bits;
        let hi = if bits > 0 && i + words + 1 < 4 {
            a[i + words + 1] << (64 - bits)
        } else {
            0
        };
        out[i] = lo | hi;
        i += 1;
    }
    out
}

/// Number of trailing zero bits of a non-zero 4-limb integer.
pub(crate) const fn trailing_zeros(a: &[u64; 4]) -> u32 {
    let mut i = 0;
    while i < 4 {
        if a[i] != 0 {
            return i as u32 * 64 + a[i].trailing_zeros();
        }
        i += 1;
    }
    256
}

/// `-m0^{-1} mod 2^64` by Newton iteration; `m0` must be odd.
const fn compute_inv(m0: u64) -> u64 {
    let mut inv = 1u64;
    let mut i = 0;
    while i < 63 {
        inv = inv.wrapping_mul(inv);
        inv = inv.wrapping_mul(m0);
        i += 1;
    }
    inv.wrapping_neg()
}

/// Parse 64 big-endian hex digits into little-endian limbs.
pub(crate) const fn limbs_from_be_hex(hex: &str) -> [u64; 4] {
    let bytes = hex.as_bytes();
    assert!(bytes.len() == 64, "hex must be exactly 64 digits");

    let mut limbs = [0u64; 4];
    let mut i = 0;
    while i < 64 {
        let nibble = match bytes[i] {
            b @ b'0'..=b'9' => b - b'0',
            b @ b'a'..=b'f' => b - b'a' + 10,
            b @ b'A'..=b'F' => b - b'A' + 10,
            _ => panic!("invalid hex digit"),
        };
        let limb = 3 - i / 16;
        limbs[limb] = (limbs[limb] << 4) | nibble as u64;
        i += 1;
    }
    limbs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_be_hex_matches_limbs() {
        let m = Modulus::from_be_hex(
            "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        );
        assert_eq!(m, P256);
    }

    // P-256 base field: the top bit of the modulus is set, which exercises the
    // fifth carry word in addition and multiplication.
    // p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1
    const P256: Modulus = Modulus::new([
        0xffff_ffff_ffff_ffff,
        0x0000_0000_ffff_ffff,
        0x0000_0000_0000_0000,
        0xffff_ffff_0000_0001,
    ]);

    /// R^2 = 2^512 mod p
    const P256_R2: [u64; 4] = [
        0x0000_0000_0000_0003,
        0xffff_fffb_ffff_ffff,
        0xffff_ffff_ffff_fffe,
        0x0000_0004_ffff_fffd,
    ];

    #[test]
    fn derived_constants() {
        assert_eq!(P256.r2(), &P256_R2);
        assert_eq!(P256.inv(), 1);
        assert_eq!(P256.bits(), 256);
        assert_eq!(P256.r(), &[1, 0xffff_ffff_0000_0000, u64::MAX, 0xffff_fffe]);
    }

    #[test]
    fn montgomery_round_trip() {
        let x = [0x0123_4567_89ab_cdef, 42, 0, 7];
        assert_eq!(P256.from_montgomery(&P256.to_montgomery(&x)), x);
    }

    #[test]
    fn to_montgomery_reduces() {
        // m + 5 enters the domain as 5.
        let m_plus_5 = add_small(P256.limbs(), 5);
        assert_eq!(
            P256.from_montgomery(&P256.to_montgomery(&m_plus_5)),
            [5, 0, 0, 0]
        );
    }

    #[test]
    fn add_wraps_exactly_once() {
        let m_minus_1 = sub_small(P256.limbs(), 1);
        assert_eq!(P256.add(&m_minus_1, &[1, 0, 0, 0]), [0; 4]);
        assert_eq!(P256.add(&m_minus_1, &[2, 0, 0, 0]), [1, 0, 0, 0]);
        assert_eq!(P256.add(&m_minus_1, &m_minus_1), sub_small(P256.limbs(), 2));
        assert_eq!(P256.add(&[3, 0, 0, 0], &[4, 0, 0, 0]), [7, 0, 0, 0]);
    }

    #[test]
    fn sub_borrows_exactly_once() {
        let m_minus_1 = sub_small(P256.limbs(), 1);
        assert_eq!(P256.sub(&[0; 4], &[1, 0, 0, 0]), m_minus_1);
        assert_eq!(P256.sub(&[1, 0, 0, 0], &m_minus_1), [2, 0, 0, 0]);
        assert_eq!(P256.sub(&m_minus_1, &m_minus_1), [0; 4]);
        assert_eq!(P256.neg(&[0; 4]), [0; 4]);
        assert_eq!(P256.neg(&[1, 0, 0, 0]), m_minus_1);
    }

    #[test]
    fn comparisons() {
        assert_eq!(P256.is_canonical(&sub_small(P256.limbs(), 1)), u64::MAX);
        assert_eq!(P256.is_canonical(P256.limbs()), 0);
        assert_eq!(Modulus::lt(&[0, 0, 0, 1], &[u64::MAX, 0, 0, 0]), 0);
        assert_eq!(P256.eq(&[5, 0, 0, 0], &[5, 0, 0, 0]), u64::MAX);
        assert_eq!(P256.eq(&[5, 0, 0, 0], &[6, 0, 0, 0]), 0);
        assert_eq!(Modulus::is_zero(&[0; 4]), u64::MAX);
        assert_eq!(Modulus::is_zero(&[0, 0, 0, 1]), 0);
    }

    #[test]
    fn pow_forms_agree() {
        let a = P256.to_montgomery(&[3, 0, 0, 0]);
        // 3^5 = 243, exponent 0b101
        let expected = P256.to_montgomery(&[243, 0, 0, 0]);
        assert_eq!(P256.pow_vartime(&a, &[5, 0, 0, 0]), expected);
        assert_eq!(P256.pow_bits(&a, &[true, false, true]), expected);
        assert_eq!(P256.pow_bits(&a, &[]), *P256.r());
    }

    #[test]
    fn invert_small() {
        let three = P256.to_montgomery(&[3, 0, 0, 0]);
        let inv = P256.invert(&three);
        assert_eq!(P256.mul(&three, &inv), *P256.r());
        assert_eq!(P256.invert(&[0; 4]), [0; 4]);
    }

    #[test]
    fn shifts_and_trailing_zeros() {
        let x = [0, 0x8000_0000_0000_0000, 1, 0];
        assert_eq!(trailing_zeros(&x), 127);
        assert_eq!(shr_vartime(&x, 127), [3, 0, 0, 0]);
        assert_eq!(shr_vartime(&x, 64), [0x8000_0000_0000_0000, 1, 0, 0]);
        assert_eq!(shr_vartime(&x, 0), x);
    }

    mod oracle {
        use super::P256;
        use num_bigint::BigUint;
        use proptest::prelude::*;

        fn to_big(limbs: &[u64; 4]) -> BigUint {
            let words: [u32; 8] = core::array::from_fn(|i| (limbs[i / 2] >> (32 * (i % 2))) as u32);
            BigUint::from_slice(&words)
        }

        fn modulus() -> BigUint {
            to_big(P256.limbs())
        }

        fn r_inv() -> BigUint {
            let m = modulus();
            (BigUint::from(1u32) << 256u32).modpow(&(&m - 2u32), &m)
        }

        prop_compose! {
            fn canonical()(limbs in any::<[u64; 4]>()) -> [u64; 4] {
                // Any 256-bit value enters the domain reduced.
                P256.to_montgomery(&limbs)
            }
        }

        proptest! {
            #[test]
            fn add_sub_match_biguint(a in canonical(), b in canonical()) {
                let m = modulus();
                prop_assert_eq!(to_big(&P256.add(&a, &b)), (to_big(&a) + to_big(&b)) % &m);
                prop_assert_eq!(to_big(&P256.sub(&a, &b)), (to_big(&a) + &m - to_big(&b)) % &m);
            }

            #[test]
            fn mul_matches_biguint(a in canonical(), b in canonical()) {
                let expected = to_big(&a) * to_big(&b) * r_inv() % modulus();
                prop_assert_eq!(to_big(&P256.mul(&a, &b)), expected);
            }

            #[test]
            fn reduce_matches_biguint(lo in any::<[u64; 4]>(), hi in canonical()) {
                let wide = (to_big(&hi) << 256u32) + to_big(&lo);
                let expected = wide * r_inv() % modulus();
                prop_assert_eq!(to_big(&P256.montgomery_reduce(&lo, &hi)), expected);
            }

            #[test]
            fn to_montgomery_matches_biguint(a in any::<[u64; 4]>()) {
                let m = modulus();
                let expected = (to_big(&a) << 256u32) % &m;
                prop_assert_eq!(to_big(&P256.to_montgomery(&a)), expected);
            }
        }
    }
}
