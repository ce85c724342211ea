//! Single-word arithmetic primitives.
//!
//! Everything here is branch-free: carries and borrows are propagated
//! arithmetically and selection is done with masks, so the time taken never
//! depends on the words being operated on.

/// Computes `a + b + carry`, returning the result along with the new carry.
///
/// `carry` must be `0` or `1`; the returned carry is `0` or `1`.
#[inline(always)]
pub const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow.
///
/// Borrows are represented as masks: `0` when the subtraction did not
/// underflow and `u64::MAX` when it did. Only the top bit of the incoming
/// `borrow` is consulted, so either form may be chained.
#[inline(always)]
pub const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
///
/// The result never overflows 128 bits: `(2^64 - 1)^2 + 2 * (2^64 - 1) = 2^128 - 1`.
#[inline(always)]
pub const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Full 128-bit product of two words, returned as `(low, high)`.
#[inline(always)]
pub const fn wide_mul(a: u64, b: u64) -> (u64, u64) {
    mac(0, a, b, 0)
}

/// Returns `u64::MAX` if `x` is non-zero and `0` otherwise.
#[inline(always)]
pub const fn is_nonzero_mask(x: u64) -> u64 {
    // The top bit of `x | -x` is set exactly when `x != 0`.
    0u64.wrapping_sub((x | x.wrapping_neg()) >> 63)
}

/// Returns `b` if `flag` is non-zero and `a` otherwise.
#[inline(always)]
pub const fn select(flag: u64, a: u64, b: u64) -> u64 {
    let mask = is_nonzero_mask(flag);
    (mask & b) | (!mask & a)
}

/// Limb-wise [`select`] over a 4-limb value.
#[inline(always)]
pub const fn select_limbs(flag: u64, a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    [
        select(flag, a[0], b[0]),
        select(flag, a[1], b[1]),
        select(flag, a[2], b[2]),
        select(flag, a[3], b[3]),
    ]
}
