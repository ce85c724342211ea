#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! use mina_pasta::{Fp, NetworkId, poseidon};
//!
//! let input = [Fp::from_u64(1), Fp::from_u64(2)];
//! let digest = poseidon::hash(Some(NetworkId::Testnet), &input);
//!
//! assert_eq!(digest, poseidon::hash(Some(NetworkId::Testnet), &input));
//! assert_ne!(digest, poseidon::hash(Some(NetworkId::Mainnet), &input));
//! ```

mod arithmetic;
mod secret_key;

pub mod poseidon;

pub use crate::{
    arithmetic::{
        field::{Fp, FpParams},
        scalar::{Fq, FqParams, scalar_from_base},
    },
    poseidon::{NetworkId, Poseidon},
    secret_key::SecretKey,
};
pub use primefield::{self, Error, FieldBytes, Result, ff, subtle};
