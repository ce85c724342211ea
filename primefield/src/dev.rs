//! Development-related functionality: test and benchmark macros shared by
//! crates which define fields on top of this one.

/// Write a series of `criterion`-based benchmarks for a field implementation.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $fe_a:expr, $fe_b:expr } => {
        fn bench_add<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("add", |b| b.iter(|| x + y));
        }

        fn bench_sub<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("sub", |b| b.iter(|| x - y));
        }

        fn bench_mul<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("mul", |b| b.iter(|| x * y));
        }

        fn bench_neg<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("neg", |b| b.iter(|| -x));
        }

        fn bench_invert<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("invert", |b| b.iter(|| x.invert()));
        }

        fn bench_square<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("square", |b| b.iter(|| x.square()));
        }

        fn bench_sqrt<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("sqrt", |b| b.iter(|| x.sqrt()));
        }

        fn bench_to_bytes<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("to_bytes", |b| b.iter(|| x.to_bytes()));
        }

        fn $name(c: &mut ::criterion::Criterion) {
            let mut group = c.benchmark_group($desc);
            bench_add(&mut group);
            bench_sub(&mut group);
            bench_mul(&mut group);
            bench_neg(&mut group);
            bench_invert(&mut group);
            bench_square(&mut group);
            bench_sqrt(&mut group);
            bench_to_bytes(&mut group);
            group.finish();
        }
    };
}

/// Implement all tests for a type which impls the `PrimeField` trait.
#[macro_export]
macro_rules! test_primefield {
    ($fe:tt) => {
        $crate::test_primefield_constants!($fe);
        $crate::test_field_identity!($fe);
        $crate::test_field_invert!($fe);
        $crate::test_field_sqrt!($fe);
    };
}

/// Implement tests for constants defined by the `PrimeField` trait.
#[macro_export]
macro_rules! test_primefield_constants {
    ($fe:tt) => {
        const MODULUS: $crate::Modulus =
            $crate::Modulus::from_be_hex(<$fe as $crate::ff::PrimeField>::MODULUS);
        const T: [u64; 4] = $crate::compute_t(&MODULUS);

        #[test]
        fn delta_constant() {
            // DELTA^{t} mod m == 1
            let delta = <$fe as $crate::ff::PrimeField>::DELTA;
            assert_eq!(delta.pow_vartime(&T), $fe::ONE);
        }

        #[test]
        fn multiplicative_generator_constant() {
            // Euler's criterion: a quadratic non-residue raised to (m - 1) / 2 is -1
            let generator = <$fe as $crate::ff::PrimeField>::MULTIPLICATIVE_GENERATOR;
            assert_eq!(generator.legendre(), -$fe::ONE);
        }

        #[test]
        fn root_of_unity_constant() {
            let generator = <$fe as $crate::ff::PrimeField>::MULTIPLICATIVE_GENERATOR;
            let root = <$fe as $crate::ff::PrimeField>::ROOT_OF_UNITY;
            let s = <$fe as $crate::ff::PrimeField>::S;

            // ROOT_OF_UNITY^{2^s} mod m == 1
            assert_eq!(root.sqn_vartime(s as usize), $fe::ONE);

            // MULTIPLICATIVE_GENERATOR^{t} mod m == ROOT_OF_UNITY
            assert_eq!(generator.pow_vartime(&T), root)
        }

        #[test]
        fn root_of_unity_inv_constant() {
            assert_eq!(
                <$fe as $crate::ff::PrimeField>::ROOT_OF_UNITY
                    * <$fe as $crate::ff::PrimeField>::ROOT_OF_UNITY_INV,
                $fe::ONE
            );
        }

        #[test]
        fn two_inv_constant() {
            assert_eq!(
                $fe::from(2u32) * <$fe as $crate::ff::PrimeField>::TWO_INV,
                $fe::ONE
            );
        }

        #[test]
        fn capacity_constant() {
            let num_bits = <$fe as $crate::ff::PrimeField>::NUM_BITS;
            assert_eq!(<$fe as $crate::ff::PrimeField>::CAPACITY, num_bits - 1);
            assert_eq!(num_bits, MODULUS.bits());
        }
    };
}

/// Implement field element identity tests.
#[macro_export]
macro_rules! test_field_identity {
    ($fe:tt) => {
        #[test]
        fn zero_is_additive_identity() {
            let zero = $fe::ZERO;
            let one = $fe::ONE;
            assert_eq!(zero.add(&zero), zero);
            assert_eq!(one.add(&zero), one);
        }

        #[test]
        fn one_is_multiplicative_identity() {
            let one = $fe::ONE;
            assert_eq!(one.multiply(&one), one);
        }

        #[test]
        fn minus_one_plus_one_is_zero() {
            assert_eq!((-$fe::ONE) + $fe::ONE, $fe::ZERO);
            assert_eq!($fe::ZERO.neg(), $fe::ZERO);
        }
    };
}

/// Implement field element inversion tests.
#[macro_export]
macro_rules! test_field_invert {
    ($fe:tt) => {
        #[test]
        fn invert() {
            let one = $fe::ONE;
            assert_eq!(one.invert().unwrap(), one);

            let three = one + &one + &one;
            let inv_three = three.invert().unwrap();
            assert_eq!(three * &inv_three, one);

            let minus_three = -three;
            let inv_minus_three = minus_three.invert().unwrap();
            assert_eq!(inv_minus_three, -inv_three);
            assert_eq!(three * &inv_minus_three, -one);

            assert!(bool::from($fe::ZERO.invert().is_none()));
        }
    };
}

/// Implement field element square root tests.
#[macro_export]
macro_rules! test_field_sqrt {
    ($fe:tt) => {
        #[test]
        fn sqrt() {
            for &n in &[1u64, 4, 9, 16, 25, 36, 49, 64] {
                let fe = $fe::from(n);
                let sqrt = $crate::ff::Field::sqrt(&fe).unwrap();
                assert_eq!(sqrt.square(), fe);
            }

            assert_eq!($crate::ff::Field::sqrt(&$fe::ZERO).unwrap(), $fe::ZERO);
            assert!(bool::from(
                $crate::ff::Field::sqrt(
                    &<$fe as $crate::ff::PrimeField>::MULTIPLICATIVE_GENERATOR
                )
                .is_none()
            ));
        }
    };
}
