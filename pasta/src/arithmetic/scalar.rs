//! Scalar field arithmetic modulo q = 0x40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001
//!
//! Secret keys and Poseidon digests are elements of this field.

use super::field::Fp;
use primefield::{MontyFieldElement, monty_field_params_with_root_of_unity};

monty_field_params_with_root_of_unity!(
    name: FqParams,
    modulus: "40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001",
    multiplicative_generator: 5,
    root_of_unity: Some([
        0xa70e_2c11_02b6_d05f,
        0x9bb9_7ea3_c106_f049,
        0x9e5c_4dfd_492a_e26e,
        0x2de6_a9b8_746d_3f58,
    ]),
    doc: "Montgomery parameters for the Pallas scalar field modulus q"
);

/// Element of the Pallas scalar field, in Montgomery form.
pub type Fq = MontyFieldElement<FqParams>;

/// Carry a base field element over into the scalar field.
///
/// The value leaves `Fp`'s Montgomery domain as a canonical integer and is
/// reduced into `Fq`'s. Since `p < q` the integer itself never changes.
pub fn scalar_from_base(fe: &Fp) -> Fq {
    Fq::from_uint_reduced(&fe.to_canonical())
}
