//! Field elements which use an internal Montgomery form representation, implemented on top of
//! the raw limb arithmetic in [`Modulus`].

mod sqrt;

use crate::{
    modulus::{limbs_from_be_hex, shr_vartime, sub_small, trailing_zeros},
    Error, Modulus, Result,
};
use core::{
    fmt,
    iter::{Product, Sum},
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use ff::{Field, PrimeField};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Size of a serialized field element in bytes.
pub const FIELD_BYTES: usize = 32;

/// Serialized representation of a field element: 32 bytes, little endian.
pub type FieldBytes = [u8; FIELD_BYTES];

/// Parameters of a prime field, attached to [`MontyFieldElement`] through a
/// zero-sized marker type.
pub trait MontyFieldParams: 'static + Copy + Send + Sync {
    /// Modulus descriptor with precomputed Montgomery constants.
    const MODULUS: Modulus;

    /// Field modulus as a big endian hexadecimal string, without a prefix.
    const MODULUS_HEX: &'static str;

    /// A fixed multiplicative generator of `modulus - 1` order.
    ///
    /// This element must also be a quadratic nonresidue.
    const MULTIPLICATIVE_GENERATOR: u64;

    /// Optional precomputed canonical `ROOT_OF_UNITY`, otherwise it will be computed at
    /// compile-time.
    const ROOT_OF_UNITY: Option<[u64; 4]> = None;
}

/// Field element type which uses an internal Montgomery form representation.
pub struct MontyFieldElement<MOD: MontyFieldParams> {
    /// Montgomery form: `value * R mod p`.
    limbs: [u64; 4],
    params: PhantomData<MOD>,
}

impl<MOD: MontyFieldParams> MontyFieldElement<MOD> {
    /// Zero element (additive identity).
    pub const ZERO: Self = Self::from_montgomery([0; 4]);

    /// Multiplicative identity.
    pub const ONE: Self = Self::from_montgomery(*MOD::MODULUS.r());

    /// Decode field element from a canonical little-endian bytestring.
    ///
    /// Encodings of integers `>= modulus` are rejected rather than reduced; use
    /// [`MontyFieldElement::reduce_bytes`] to reduce instead.
    #[inline]
    pub fn from_bytes(repr: &FieldBytes) -> CtOption<Self> {
        Self::from_uint(&bytes_to_limbs(repr))
    }

    /// Decode a field element from a canonical little-endian byte slice.
    ///
    /// The length is checked before anything else is done with the input.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let repr: &FieldBytes = slice.try_into().map_err(|_| Error)?;
        Option::from(Self::from_bytes(repr)).ok_or(Error)
    }

    /// Decode a field element from 32 little-endian bytes, reducing the encoded
    /// integer modulo the field modulus.
    #[inline]
    pub fn reduce_bytes(repr: &FieldBytes) -> Self {
        Self::from_uint_reduced(&bytes_to_limbs(repr))
    }

    /// Decode a field element from 64 big-endian hex digits.
    ///
    /// This is primarily intended for defining constants using hex literals.
    ///
    /// # Panics
    ///
    /// - When hex is malformed or the wrong length
    /// - If input overflows the modulus
    pub const fn from_hex_vartime(hex: &str) -> Self {
        let uint = limbs_from_be_hex(hex);
        assert!(
            MOD::MODULUS.is_canonical(&uint) != 0,
            "hex encoded integer overflows the modulus"
        );
        Self::from_uint_reduced(&uint)
    }

    /// Convert little-endian limbs into [`MontyFieldElement`], first converting them into
    /// Montgomery form:
    ///
    /// ```text
    /// w * R^2 * R^-1 mod p = wR mod p
    /// ```
    ///
    /// Reduces the input modulo `p`.
    #[inline]
    pub const fn from_uint_reduced(uint: &[u64; 4]) -> Self {
        Self::from_montgomery(MOD::MODULUS.to_montgomery(uint))
    }

    /// Convert little-endian limbs into [`MontyFieldElement`].
    ///
    /// # Returns
    ///
    /// The `CtOption` equivalent of `None` if the input overflows the modulus.
    #[inline]
    pub fn from_uint(uint: &[u64; 4]) -> CtOption<Self> {
        let is_some = MOD::MODULUS.is_canonical(uint);
        CtOption::new(Self::from_uint_reduced(uint), mask_to_choice(is_some))
    }

    /// Convert a `u64` into a [`MontyFieldElement`].
    #[inline]
    pub const fn from_u64(w: u64) -> Self {
        Self::from_uint_reduced(&[w, 0, 0, 0])
    }

    /// Create [`MontyFieldElement`] from limbs which are already in Montgomery form.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is expected to be in Montgomery form and reduced. Failure to maintain these
    /// invariants will lead to miscomputation and potential security issues!
    #[inline]
    pub const fn from_montgomery(limbs: [u64; 4]) -> Self {
        Self {
            limbs,
            params: PhantomData,
        }
    }

    /// Borrow the inner limbs, which are in Montgomery form.
    ///
    /// # ⚠️ Warning
    ///
    /// Make sure you are actually expecting a value in Montgomery form! This is not the correct
    /// function for converting *out* of Montgomery form: that would be
    /// [`MontyFieldElement::to_canonical`].
    pub const fn as_montgomery(&self) -> &[u64; 4] {
        &self.limbs
    }

    /// Returns the little-endian bytestring encoding of this field element.
    #[inline]
    pub fn to_bytes(self) -> FieldBytes {
        let mut repr = [0u8; FIELD_BYTES];
        for (chunk, limb) in repr.chunks_exact_mut(8).zip(self.to_canonical()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        repr
    }

    /// Translate field element out of the Montgomery domain, returning little-endian limbs in
    /// canonical form.
    #[inline]
    pub const fn to_canonical(self) -> [u64; 4] {
        MOD::MODULUS.from_montgomery(&self.limbs)
    }

    /// Determine if this field element is odd: `self mod 2 == 1`.
    #[inline]
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_canonical()[0] & 1) as u8)
    }

    /// Determine if this field element is zero.
    #[inline]
    pub fn is_zero(&self) -> Choice {
        mask_to_choice(Modulus::is_zero(&self.limbs))
    }

    /// Add elements.
    #[inline]
    pub const fn add(&self, rhs: &Self) -> Self {
        Self::from_montgomery(MOD::MODULUS.add(&self.limbs, &rhs.limbs))
    }

    /// Double element (add it to itself).
    #[inline]
    #[must_use]
    pub const fn double(&self) -> Self {
        self.add(self)
    }

    /// Subtract elements.
    #[inline]
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self::from_montgomery(MOD::MODULUS.sub(&self.limbs, &rhs.limbs))
    }

    /// Multiply elements.
    #[inline]
    pub const fn multiply(&self, rhs: &Self) -> Self {
        Self::from_montgomery(MOD::MODULUS.mul(&self.limbs, &rhs.limbs))
    }

    /// Negate element.
    #[inline]
    pub const fn neg(&self) -> Self {
        Self::from_montgomery(MOD::MODULUS.neg(&self.limbs))
    }

    /// Compute modular square.
    #[inline]
    #[must_use]
    pub const fn square(&self) -> Self {
        Self::from_montgomery(MOD::MODULUS.square(&self.limbs))
    }

    /// Compute field inversion: `1 / self`.
    ///
    /// Computed as `self^(p - 2)`, so the running time does not depend on `self`.
    #[inline]
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.invert_unchecked(), !self.is_zero())
    }

    /// Compute field inversion as a `const fn`. Panics if `self` is zero.
    ///
    /// This is mainly intended for inverting constants at compile time.
    pub const fn const_invert(&self) -> Self {
        assert!(
            Modulus::is_nonzero(&self.limbs) != 0,
            "input to invert should be non-zero"
        );
        self.invert_unchecked()
    }

    /// Returns `self^(p - 2)`, which is `1 / self` for non-zero `self` and zero otherwise.
    const fn invert_unchecked(&self) -> Self {
        Self::from_montgomery(MOD::MODULUS.invert(&self.limbs))
    }

    /// Returns `self^exp`, where `exp` is a little-endian integer exponent.
    ///
    /// **This operation is variable time with respect to the exponent `exp`.**
    ///
    /// If `exp` is fixed, this operation is constant time. Note that `exp` will still be branched
    /// upon and should NOT be a secret.
    pub const fn pow_vartime(&self, exp: &[u64; 4]) -> Self {
        Self::from_montgomery(MOD::MODULUS.pow_vartime(&self.limbs, exp))
    }

    /// Returns `self^e`, where `e` is given as bits ordered most significant first.
    ///
    /// **This operation is variable time with respect to the exponent bits.**
    pub const fn pow_bits(&self, msb_first: &[bool]) -> Self {
        Self::from_montgomery(MOD::MODULUS.pow_bits(&self.limbs, msb_first))
    }

    /// Returns `self^(2^n) mod p`.
    ///
    /// **This operation is variable time with respect to the exponent `n`.**
    ///
    /// If the exponent is fixed, this operation is constant time.
    pub const fn sqn_vartime(&self, n: usize) -> Self {
        let mut x = *self;
        let mut i = 0;
        while i < n {
            x = x.square();
            i += 1;
        }
        x
    }

    /// Euler's criterion: `self^((p - 1) / 2)`.
    ///
    /// Returns [`Self::ONE`] for non-zero squares, `-ONE` for non-squares and zero for zero.
    pub const fn legendre(&self) -> Self {
        let p_minus_1_over_2 = shr_vartime(&sub_small(MOD::MODULUS.limbs(), 1), 1);
        self.pow_vartime(&p_minus_1_over_2)
    }

    /// Returns `Choice(1)` if `self` has a square root in the field (zero included).
    pub fn is_square(&self) -> Choice {
        let legendre = self.legendre();
        legendre.ct_eq(&Self::ONE) | legendre.is_zero()
    }
}

/// Decode 32 little-endian bytes into little-endian limbs, without reduction.
fn bytes_to_limbs(bytes: &FieldBytes) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *limb = u64::from_le_bytes(word);
    }
    limbs
}

/// Convert a `0` / `u64::MAX` mask into a [`Choice`].
#[inline(always)]
fn mask_to_choice(mask: u64) -> Choice {
    Choice::from((mask & 1) as u8)
}

//
// `ff` crate trait impls
//

impl<MOD: MontyFieldParams> Field for MontyFieldElement<MOD> {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn random(mut rng: impl RngCore) -> Self {
        let mut bytes = FieldBytes::default();
        let top_bits = (MOD::MODULUS.bits() % 8) as u8;

        loop {
            rng.fill_bytes(&mut bytes);
            // Clear the bits above the modulus' bit length so at least half of the draws land
            // in range.
            if top_bits != 0 {
                bytes[FIELD_BYTES - 1] &= (1u8 << top_bits) - 1;
            }
            if let Some(fe) = Option::from(Self::from_bytes(&bytes)) {
                return fe;
            }
        }
    }

    fn is_zero(&self) -> Choice {
        Self::is_zero(self)
    }

    fn square(&self) -> Self {
        self.square()
    }

    fn double(&self) -> Self {
        self.double()
    }

    fn invert(&self) -> CtOption<Self> {
        self.invert()
    }

    fn sqrt(&self) -> CtOption<Self> {
        self.sqrt()
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        ff::helpers::sqrt_ratio_generic(num, div)
    }
}

impl<MOD: MontyFieldParams> PrimeField for MontyFieldElement<MOD> {
    type Repr = FieldBytes;

    const MODULUS: &'static str = MOD::MODULUS_HEX;
    const NUM_BITS: u32 = MOD::MODULUS.bits();
    const CAPACITY: u32 = Self::NUM_BITS - 1;
    const TWO_INV: Self = Self::from_u64(2).const_invert();
    const MULTIPLICATIVE_GENERATOR: Self = Self::from_u64(MOD::MULTIPLICATIVE_GENERATOR);
    const S: u32 = compute_s(&MOD::MODULUS);
    const ROOT_OF_UNITY: Self = match MOD::ROOT_OF_UNITY {
        Some(root_of_unity) => Self::from_uint_reduced(&root_of_unity),
        None => Self::MULTIPLICATIVE_GENERATOR.pow_vartime(&compute_t(&MOD::MODULUS)),
    };
    const ROOT_OF_UNITY_INV: Self = Self::ROOT_OF_UNITY.const_invert();
    const DELTA: Self = Self::MULTIPLICATIVE_GENERATOR.sqn_vartime(Self::S as usize);

    fn from_repr(bytes: Self::Repr) -> CtOption<Self> {
        Self::from_bytes(&bytes)
    }

    fn to_repr(&self) -> Self::Repr {
        self.to_bytes()
    }

    fn is_odd(&self) -> Choice {
        self.is_odd()
    }
}

//
// Arithmetic trait impls
//

/// Emit a `core::ops` trait wrapper for an inherent method.
macro_rules! monty_field_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl<MOD: MontyFieldParams> $op for MontyFieldElement<MOD> {
            type Output = MontyFieldElement<MOD>;

            #[inline]
            fn $func(self, rhs: MontyFieldElement<MOD>) -> MontyFieldElement<MOD> {
                <MontyFieldElement<MOD>>::$inner_func(&self, &rhs)
            }
        }

        impl<MOD: MontyFieldParams> $op<&Self> for MontyFieldElement<MOD> {
            type Output = MontyFieldElement<MOD>;

            #[inline]
            fn $func(self, rhs: &MontyFieldElement<MOD>) -> MontyFieldElement<MOD> {
                <MontyFieldElement<MOD>>::$inner_func(&self, rhs)
            }
        }

        impl<MOD: MontyFieldParams> $op<Self> for &MontyFieldElement<MOD> {
            type Output = MontyFieldElement<MOD>;

            #[inline]
            fn $func(self, rhs: &MontyFieldElement<MOD>) -> MontyFieldElement<MOD> {
                <MontyFieldElement<MOD>>::$inner_func(self, rhs)
            }
        }
    };
}

monty_field_op!(Add, add, add);
monty_field_op!(Sub, sub, sub);
monty_field_op!(Mul, mul, multiply);

/// Emit a `core::ops` assignment trait wrapper, by value and by reference.
macro_rules! monty_field_assign_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl<MOD: MontyFieldParams> $op<Self> for MontyFieldElement<MOD> {
            #[inline]
            fn $func(&mut self, other: MontyFieldElement<MOD>) {
                *self = <MontyFieldElement<MOD>>::$inner_func(self, &other);
            }
        }

        impl<MOD: MontyFieldParams> $op<&Self> for MontyFieldElement<MOD> {
            #[inline]
            fn $func(&mut self, other: &MontyFieldElement<MOD>) {
                *self = <MontyFieldElement<MOD>>::$inner_func(self, other);
            }
        }
    };
}

monty_field_assign_op!(AddAssign, add_assign, add);
monty_field_assign_op!(SubAssign, sub_assign, sub);
monty_field_assign_op!(MulAssign, mul_assign, multiply);

impl<MOD: MontyFieldParams> Neg for MontyFieldElement<MOD> {
    type Output = MontyFieldElement<MOD>;

    #[inline]
    fn neg(self) -> MontyFieldElement<MOD> {
        <MontyFieldElement<MOD>>::neg(&self)
    }
}

impl<MOD: MontyFieldParams> Neg for &MontyFieldElement<MOD> {
    type Output = MontyFieldElement<MOD>;

    #[inline]
    fn neg(self) -> MontyFieldElement<MOD> {
        <MontyFieldElement<MOD>>::neg(self)
    }
}

impl<MOD: MontyFieldParams> Sum for MontyFieldElement<MOD> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Add::add).unwrap_or(Self::ZERO)
    }
}

impl<'a, MOD: MontyFieldParams> Sum<&'a Self> for MontyFieldElement<MOD> {
    fn sum<I: Iterator<Item = &'a MontyFieldElement<MOD>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<MOD: MontyFieldParams> Product for MontyFieldElement<MOD> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Mul::mul).unwrap_or(Self::ONE)
    }
}

impl<'a, MOD: MontyFieldParams> Product<&'a Self> for MontyFieldElement<MOD> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}

//
// `subtle` trait impls
//

impl<MOD: MontyFieldParams> ConditionallySelectable for MontyFieldElement<MOD> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::from_montgomery(Modulus::select(
            choice.unwrap_u8() as u64,
            &a.limbs,
            &b.limbs,
        ))
    }
}

impl<MOD: MontyFieldParams> ConstantTimeEq for MontyFieldElement<MOD> {
    /// Equal iff `self - other` is zero.
    fn ct_eq(&self, other: &Self) -> Choice {
        mask_to_choice(MOD::MODULUS.eq(&self.limbs, &other.limbs))
    }
}

//
// `core::fmt` trait impls
//

impl<MOD: MontyFieldParams> fmt::Debug for MontyFieldElement<MOD> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MontyFieldElement<p={}>(0x{:X})", MOD::MODULUS_HEX, self)
    }
}

impl<MOD: MontyFieldParams> fmt::Display for MontyFieldElement<MOD> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl<MOD: MontyFieldParams> fmt::LowerHex for MontyFieldElement<MOD> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.to_canonical().iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        Ok(())
    }
}

impl<MOD: MontyFieldParams> fmt::UpperHex for MontyFieldElement<MOD> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.to_canonical().iter().rev() {
            write!(f, "{:016X}", limb)?;
        }
        Ok(())
    }
}

//
// Miscellaneous trait impls
//

impl<MOD: MontyFieldParams> Clone for MontyFieldElement<MOD> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<MOD: MontyFieldParams> Copy for MontyFieldElement<MOD> {}

impl<MOD: MontyFieldParams> Default for MontyFieldElement<MOD> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<MOD: MontyFieldParams> Eq for MontyFieldElement<MOD> {}
impl<MOD: MontyFieldParams> PartialEq for MontyFieldElement<MOD> {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

impl<MOD: MontyFieldParams> From<u32> for MontyFieldElement<MOD> {
    #[inline]
    fn from(n: u32) -> MontyFieldElement<MOD> {
        Self::from_u64(n.into())
    }
}

impl<MOD: MontyFieldParams> From<u64> for MontyFieldElement<MOD> {
    #[inline]
    fn from(n: u64) -> MontyFieldElement<MOD> {
        Self::from_u64(n)
    }
}

impl<MOD: MontyFieldParams> From<MontyFieldElement<MOD>> for FieldBytes {
    fn from(fe: MontyFieldElement<MOD>) -> Self {
        fe.to_bytes()
    }
}

impl<MOD: MontyFieldParams> TryFrom<&[u8]> for MontyFieldElement<MOD> {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

impl<MOD: MontyFieldParams> zeroize::DefaultIsZeroes for MontyFieldElement<MOD> {}

/// Compute `S = (modulus - 1).trailing_zeros()`
pub const fn compute_s(modulus: &Modulus) -> u32 {
    trailing_zeros(&sub_small(modulus.limbs(), 1))
}

/// Compute `t = (modulus - 1) >> S`
pub const fn compute_t(modulus: &Modulus) -> [u64; 4] {
    shr_vartime(&sub_small(modulus.limbs(), 1), compute_s(modulus))
}

#[cfg(test)]
mod tests {
    use super::{compute_s, compute_t, MontyFieldElement, MontyFieldParams};
    use crate::{monty_field_params, test_primefield};
    use ff::{Field, PrimeField};

    extern crate alloc;

    // Example modulus: P-256 base field.
    // p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1
    monty_field_params!(
        name: FieldParams,
        modulus: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        multiplicative_generator: 6,
        doc: "P-256 field modulus"
    );

    /// P-256 field element
    type FieldElement = MontyFieldElement<FieldParams>;

    test_primefield!(FieldElement);

    #[test]
    fn modulus_bits_constant() {
        assert_eq!(FieldElement::NUM_BITS, 256);
    }

    #[test]
    fn s_constant() {
        assert_eq!(FieldElement::S, 1);
        assert_eq!(compute_s(&FieldParams::MODULUS), 1);
    }

    #[test]
    fn t_constant() {
        // (p - 1) / 2
        assert_eq!(
            compute_t(&FieldParams::MODULUS),
            [
                0xffff_ffff_ffff_ffff,
                0x0000_0000_7fff_ffff,
                0x8000_0000_0000_0000,
                0x7fff_ffff_8000_0000,
            ]
        );
    }

    #[test]
    fn computed_delta_constant() {
        assert_eq!(FieldElement::DELTA, FieldElement::from_u64(36));
    }

    #[test]
    fn from_bytes_rejects_modulus() {
        let mut bytes = [0u8; 32];
        for (chunk, limb) in bytes.chunks_exact_mut(8).zip(FieldParams::MODULUS.limbs()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        assert!(bool::from(FieldElement::from_bytes(&bytes).is_none()));
        assert_eq!(FieldElement::reduce_bytes(&bytes), FieldElement::ZERO);

        bytes[0] -= 1;
        assert_eq!(FieldElement::from_bytes(&bytes).unwrap(), -FieldElement::ONE);
    }

    #[test]
    fn from_slice_checks_length() {
        assert!(FieldElement::from_slice(&[0u8; 31]).is_err());
        assert!(FieldElement::from_slice(&[0u8; 33]).is_err());
        assert_eq!(FieldElement::from_slice(&[0u8; 32]).unwrap(), FieldElement::ZERO);
    }

    #[test]
    fn hex_constants() {
        let fe = FieldElement::from_hex_vartime(
            "0000000000000000000000000000000000000000000000000000000000000abc",
        );
        assert_eq!(fe, FieldElement::from_u64(0xabc));
        assert_eq!(
            FieldElement::from_hex_vartime(
                "ffffffff00000001000000000000000000000000fffffffffffffffffffffffe"
            ),
            -FieldElement::ONE
        );
    }

    #[test]
    fn bytes_are_little_endian() {
        let fe = FieldElement::from_u64(0x0102);
        let bytes = fe.to_bytes();
        assert_eq!(bytes[0], 0x02);
        assert_eq!(bytes[1], 0x01);
        assert!(bytes[2..].iter().all(|&b| b == 0));
        assert_eq!(FieldElement::from_bytes(&bytes).unwrap(), fe);
    }

    #[test]
    fn legendre_symbol() {
        assert_eq!(FieldElement::from_u64(4).legendre(), FieldElement::ONE);
        assert_eq!(FieldElement::ZERO.legendre(), FieldElement::ZERO);
        assert_eq!(
            FieldElement::MULTIPLICATIVE_GENERATOR.legendre(),
            -FieldElement::ONE
        );
        assert!(bool::from(FieldElement::ZERO.is_square()));
        assert!(!bool::from(FieldElement::MULTIPLICATIVE_GENERATOR.is_square()));
    }

    #[test]
    fn hex_formatting() {
        let fe = FieldElement::from_u64(0xabc);
        let expected = "0000000000000000000000000000000000000000000000000000000000000abc";
        assert_eq!(alloc::format!("{:x}", fe), expected);
        assert_eq!(alloc::format!("{}", fe), expected.to_uppercase());
    }

    #[test]
    fn random_is_canonical() {
        let mut seed = 0u64;
        let rng = rand_core::block::BlockRng::new(Counter(&mut seed));
        let fe = FieldElement::random(rng);
        assert!(bool::from(FieldElement::from_bytes(&fe.to_bytes()).is_some()));
    }

    struct Counter<'a>(&'a mut u64);

    impl rand_core::block::BlockRngCore for Counter<'_> {
        type Item = u32;
        type Results = [u32; 8];

        fn generate(&mut self, results: &mut Self::Results) {
            for word in results.iter_mut() {
                *self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                *word = (*self.0 >> 32) as u32;
            }
        }
    }
}
