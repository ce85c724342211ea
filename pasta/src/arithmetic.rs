//! Pallas field arithmetic.
//!
//! Both fields share the generic Montgomery implementation from `primefield`;
//! each submodule only pins down its modulus and `ff` constants.

pub(crate) mod field;
pub(crate) mod scalar;
