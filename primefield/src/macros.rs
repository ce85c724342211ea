//! Macros for defining field parameter types.

/// Creates a ZST representing the Montgomery parameters for a given field modulus.
///
/// Accepts the following parameters:
///
/// - name of the ZST representing the field modulus
/// - big endian hex serialization of the modulus (64 digits, no prefix)
/// - multiplicative generator, which must be a quadratic nonresidue
/// - documentation string for the field modulus type
///
/// ```
/// mina_primefield::monty_field_params!(
///     name: FieldParams,
///     modulus: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
///     multiplicative_generator: 6,
///     doc: "P-256 field modulus"
/// );
/// ```
#[macro_export]
macro_rules! monty_field_params {
    (
        name: $name:ident,
        modulus: $modulus_hex:expr,
        multiplicative_generator: $multiplicative_generator:expr,
        doc: $doc:expr
    ) => {
        $crate::monty_field_params_with_root_of_unity! {
            name: $name,
            modulus: $modulus_hex,
            multiplicative_generator: $multiplicative_generator,
            root_of_unity: None,
            doc: $doc
        }
    };
}

/// Same as [`monty_field_params!`], but with a precomputed canonical `ROOT_OF_UNITY`.
#[macro_export]
macro_rules! monty_field_params_with_root_of_unity {
    (
        name: $name:ident,
        modulus: $modulus_hex:expr,
        multiplicative_generator: $multiplicative_generator:expr,
        root_of_unity: $root_of_unity:expr,
        doc: $doc:expr
    ) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name;

        impl $crate::MontyFieldParams for $name {
            const MODULUS: $crate::Modulus = $crate::Modulus::from_be_hex($modulus_hex);
            const MODULUS_HEX: &'static str = $modulus_hex;
            const MULTIPLICATIVE_GENERATOR: u64 = $multiplicative_generator;
            const ROOT_OF_UNITY: Option<[u64; 4]> = $root_of_unity;
        }
    };
}
