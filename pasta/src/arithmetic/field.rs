//! Field arithmetic modulo p = 0x40000000000000000000000000000000224698fc094cf91b992d30ed00000001
//!
//! This is the base field of the Pallas curve and the scalar field of Vesta.
//! Poseidon's state lives here.

use primefield::{MontyFieldElement, monty_field_params_with_root_of_unity};

monty_field_params_with_root_of_unity!(
    name: FpParams,
    modulus: "40000000000000000000000000000000224698fc094cf91b992d30ed00000001",
    multiplicative_generator: 5,
    root_of_unity: Some([
        0xbdad_6fab_d87e_a32f,
        0xea32_2bf2_b7bb_7584,
        0x3621_2083_0561_f81a,
        0x2bce_74de_ac30_ebda,
    ]),
    doc: "Montgomery parameters for the Pallas base field modulus p"
);

/// Element of the Pallas base field, in Montgomery form.
pub type Fp = MontyFieldElement<FpParams>;
