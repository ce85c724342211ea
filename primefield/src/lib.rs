#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

pub mod limb;

mod dev;
mod error;
mod macros;
mod modulus;
mod monty;

pub use crate::{
    error::{Error, Result},
    modulus::Modulus,
    monty::{compute_s, compute_t, FieldBytes, MontyFieldElement, MontyFieldParams, FIELD_BYTES},
};
pub use ff;
pub use rand_core;
pub use subtle;
pub use zeroize;
