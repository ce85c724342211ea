//! Pallas scalar field element benchmarks

use criterion::{criterion_group, criterion_main};
use mina_pasta::Fq;

const SCALAR_A: Fq =
    Fq::from_hex_vartime("35a659214a23d5962217beaddbc496cb8e81973e0becd7b03898d190f9ebdacc");
const SCALAR_B: Fq =
    Fq::from_hex_vartime("0c789ae95f557203301850c5a38fd547923a736994e3bf911a61dbe22e44158b");

primefield::bench_field!(bench_scalar, "Fq", SCALAR_A, SCALAR_B);
criterion_group!(benches, bench_scalar);
criterion_main!(benches);
