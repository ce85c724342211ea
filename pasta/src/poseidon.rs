//! Poseidon sponge over the Pallas base field, as used by Mina to hash
//! messages into the scalar field.
//!
//! The instance has three lanes, absorbs two elements per permutation, and
//! runs 53 full rounds with an `x^7` S-box followed by one last round-key
//! addition. The sponge state lives in [`Fp`]; the digest is returned as an
//! [`Fq`].

mod params;

use crate::{Error, Fp, Fq, Result, scalar_from_base};
use core::fmt;
use params::{
    FULL_ROUNDS, MAINNET_IV, MDS, ROUND_KEYS, SPONGE_RATE, SPONGE_WIDTH, TESTNET_IV,
};

/// Maximum length of a domain prefix packed by [`prefix_to_field`].
pub const MAX_PREFIX_LEN: usize = 31;

/// Mina network a sponge is separated for.
///
/// Signatures made for one network never verify on another, because each
/// network seeds the sponge with a different initial state.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum NetworkId {
    /// Mina testnets.
    Testnet = 0,

    /// Mina mainnet.
    Mainnet = 1,
}

impl NetworkId {
    /// Signature domain prefix for this network.
    ///
    /// The sponge IV for the network is obtained by absorbing this prefix
    /// (see [`prefix_to_field`]) into an all-zero state and permuting once.
    pub const fn domain_prefix(self) -> &'static str {
        match self {
            NetworkId::Testnet => "CodaSignature*******",
            NetworkId::Mainnet => "MinaSignatureMainnet",
        }
    }

    /// Wire identifier of this network.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    const fn iv(self) -> &'static [Fp; SPONGE_WIDTH] {
        match self {
            NetworkId::Testnet => &TESTNET_IV,
            NetworkId::Mainnet => &MAINNET_IV,
        }
    }
}

impl TryFrom<u8> for NetworkId {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            0 => Ok(NetworkId::Testnet),
            1 => Ok(NetworkId::Mainnet),
            _ => Err(Error),
        }
    }
}

impl From<NetworkId> for u8 {
    fn from(network: NetworkId) -> u8 {
        network.to_u8()
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkId::Testnet => f.write_str("testnet"),
            NetworkId::Mainnet => f.write_str("mainnet"),
        }
    }
}

/// Pack a short byte string into a single base field element.
///
/// The bytes are read as a little-endian integer. At most [`MAX_PREFIX_LEN`]
/// bytes are accepted, which keeps the integer below `2^248 < p`.
pub fn prefix_to_field(prefix: &[u8]) -> Result<Fp> {
    if prefix.len() > MAX_PREFIX_LEN {
        return Err(Error);
    }

    let mut bytes = [0u8; 32];
    bytes[..prefix.len()].copy_from_slice(prefix);
    Option::from(Fp::from_bytes(&bytes)).ok_or(Error)
}

/// Poseidon sponge state.
///
/// Each hash computation owns its own sponge; there is no shared state
/// between instances.
#[derive(Clone)]
pub struct Poseidon {
    state: [Fp; SPONGE_WIDTH],
    absorbed: usize,
    network: Option<NetworkId>,
}

impl Poseidon {
    /// Create a sponge for the given network.
    ///
    /// `None` selects the "null" network, which starts from the all-zero
    /// state.
    pub fn new(network: Option<NetworkId>) -> Self {
        let state = match network {
            Some(network) => *network.iv(),
            None => [Fp::ZERO; SPONGE_WIDTH],
        };

        Self {
            state,
            absorbed: 0,
            network,
        }
    }

    /// Network this sponge was created for.
    pub fn network(&self) -> Option<NetworkId> {
        self.network
    }

    /// Absorb field elements into the sponge.
    ///
    /// Elements are added into the rate lanes in order; the permutation runs
    /// lazily, just before an element would overflow the rate.
    pub fn absorb(&mut self, input: &[Fp]) {
        for fe in input {
            if self.absorbed == SPONGE_RATE {
                self.permute();
                self.absorbed = 0;
            }
            self.state[self.absorbed] += fe;
            self.absorbed += 1;
        }
    }

    /// Permute, then return lane 0 as a scalar.
    ///
    /// Calling this again permutes again and yields a new value.
    pub fn squeeze(&mut self) -> Fq {
        self.permute();
        scalar_from_base(&self.state[0])
    }

    /// Run the Poseidon permutation over the full state.
    pub(crate) fn permute(&mut self) {
        for round_keys in &ROUND_KEYS[..FULL_ROUNDS] {
            for (lane, key) in self.state.iter_mut().zip(round_keys) {
                *lane = sbox(&(*lane + key));
            }
            self.state = mds_mul(&self.state);
        }

        for (lane, key) in self.state.iter_mut().zip(&ROUND_KEYS[FULL_ROUNDS]) {
            *lane += key;
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &[Fp; SPONGE_WIDTH] {
        &self.state
    }
}

impl fmt::Debug for Poseidon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Poseidon")
            .field("network", &self.network)
            .field("absorbed", &self.absorbed)
            .finish_non_exhaustive()
    }
}

/// Hash a sequence of base field elements into the scalar field.
pub fn hash(network: Option<NetworkId>, input: &[Fp]) -> Fq {
    let mut sponge = Poseidon::new(network);
    sponge.absorb(input);
    sponge.squeeze()
}

/// `x^7`
#[inline]
fn sbox(x: &Fp) -> Fp {
    let x2 = x.square();
    let x4 = x2.square();
    x4 * x2 * x
}

fn mds_mul(state: &[Fp; SPONGE_WIDTH]) -> [Fp; SPONGE_WIDTH] {
    let mut out = [Fp::ZERO; SPONGE_WIDTH];
    for (row, acc) in out.iter_mut().enumerate() {
        for col in 0..SPONGE_WIDTH {
            *acc += state[col] * MDS[row][col];
        }
    }
    out
}
