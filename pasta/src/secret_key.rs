//! Mina secret keys.

use crate::{Error, FieldBytes, Fq, Result};
use core::fmt;
use primefield::FIELD_BYTES;
use rand_core::CryptoRngCore;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Secret key: a non-zero element of the Pallas scalar field.
///
/// Encoded as 32 little-endian bytes holding an integer `v` with `0 < v < q`.
/// The scalar is zeroized when the key is dropped.
#[derive(Clone)]
pub struct SecretKey {
    inner: Fq,
}

impl SecretKey {
    /// Generate a random [`SecretKey`].
    ///
    /// Draws 32 bytes at a time, clearing the bit above `q`'s length, until
    /// the encoded integer is a non-zero scalar.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        let mut bytes = Zeroizing::new(FieldBytes::default());

        loop {
            rng.fill_bytes(&mut bytes[..]);
            bytes[FIELD_BYTES - 1] &= 0x7f;

            if let Ok(secret_key) = Self::from_bytes(&bytes) {
                return secret_key;
            }
        }
    }

    /// Deserialize a secret key from its little-endian encoding.
    ///
    /// Rejects zero and any integer `>= q`.
    pub fn from_bytes(bytes: &FieldBytes) -> Result<Self> {
        let inner: Fq = Option::from(Fq::from_bytes(bytes)).ok_or(Error)?;

        if inner.is_zero().into() {
            return Err(Error);
        }

        Ok(Self { inner })
    }

    /// Deserialize a secret key from a byte slice, which must be exactly 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes: &FieldBytes = slice.try_into().map_err(|_| Error)?;
        Self::from_bytes(bytes)
    }

    /// Serialize the secret scalar as a little-endian integer.
    pub fn to_bytes(&self) -> FieldBytes {
        self.inner.to_bytes()
    }

    /// Borrow the secret scalar.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_scalar(&self) -> &Fq {
        &self.inner
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.inner.ct_eq(&other.inner)
    }
}

impl Eq for SecretKey {}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

impl TryFrom<&[u8]> for SecretKey {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}
