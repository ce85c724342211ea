//! Poseidon sponge tests.

use hex_literal::hex;
use mina_pasta::{
    Fp, Fq, NetworkId, Poseidon,
    poseidon::{self, prefix_to_field},
};
use proptest::prelude::*;

/// `p - 1`, the largest base field element.
fn fp_max() -> Fp {
    -Fp::ONE
}

fn digest(network: Option<NetworkId>, input: &[u64]) -> [u8; 32] {
    let input: Vec<Fp> = input.iter().copied().map(Fp::from_u64).collect();
    poseidon::hash(network, &input).to_bytes()
}

#[test]
fn testnet_vectors() {
    let net = Some(NetworkId::Testnet);
    assert_eq!(
        digest(net, &[]),
        hex!("e1b4a7032f8326718da03491e08c929790d3b3578af19449f4269cfb76ac9c31")
    );
    assert_eq!(
        digest(net, &[0, 0, 0]),
        hex!("e3f7e340bf55a104785f09f261c619e21a5161a80682c598a3f21b98ea11611e")
    );
    assert_eq!(
        digest(net, &[1, 2, 3, 4, 5]),
        hex!("b0d48108670c29122e41ef2f9853840ff30550c01f29a2bec259a5b5f331c501")
    );
    assert_eq!(
        poseidon::hash(net, &[fp_max()]).to_bytes(),
        hex!("5b41d273f5fca9002e759741930b23412a9decde9b20a243f25fad17b5745736")
    );
}

#[test]
fn mainnet_vectors() {
    let net = Some(NetworkId::Mainnet);
    assert_eq!(
        digest(net, &[]),
        hex!("d735d1e0e3b4c655344fd895f23e1799e4048711be4bd9c5ad5b9504c2dbfe2e")
    );
    assert_eq!(
        digest(net, &[0, 0, 0]),
        hex!("f279de812336430b4abf0cf3b251e736e970a97b160d04e36579f63117412501")
    );
    assert_eq!(
        digest(net, &[1, 2, 3, 4, 5]),
        hex!("f34b4d1b027346b29a6451c2cb74df80e174858d72608dc41982327cf9ebd42b")
    );
    assert_eq!(
        poseidon::hash(net, &[fp_max()]).to_bytes(),
        hex!("0c518904f421cdd9c34c498e089b57493e1b5f759bc168584814bec80f04a821")
    );
}

#[test]
fn null_network_vectors() {
    assert_eq!(
        digest(None, &[]),
        hex!("87b24ed3fe1f35af6497c504acd6de35f06bd9c2e2490a1b5012715719de8d05")
    );
    assert_eq!(
        digest(None, &[0, 0, 0]),
        hex!("7d3c757e5ae102a1c59aa4f7fc295a6fa8ddae58911a2a6037a88fdf4fdb503a")
    );
    assert_eq!(
        digest(None, &[1, 2, 3, 4, 5]),
        hex!("e1f758b9db153fc714a6c839ec67944dcc727104f11cb6d362a2659e56050a07")
    );
    assert_eq!(
        poseidon::hash(None, &[fp_max()]).to_bytes(),
        hex!("1b73d17722908c1d662da681ec41a69ac1be8a9a1ae6898ab42f3855e3805623")
    );
}

#[test]
fn absorbing_zero_is_a_no_op_before_the_first_permutation() {
    for network in [None, Some(NetworkId::Testnet), Some(NetworkId::Mainnet)] {
        assert_eq!(digest(network, &[]), digest(network, &[0]));
    }
}

#[test]
fn squeezing_twice_permutes_again() {
    let mut sponge = Poseidon::new(Some(NetworkId::Testnet));
    sponge.absorb(&[Fp::from_u64(1)]);
    let first = sponge.squeeze();
    let second = sponge.squeeze();
    assert_ne!(first, second);
}

#[test]
fn sponge_remembers_its_network() {
    assert_eq!(Poseidon::new(None).network(), None);
    assert_eq!(
        Poseidon::new(Some(NetworkId::Mainnet)).network(),
        Some(NetworkId::Mainnet)
    );
}

#[test]
fn domain_prefixes() {
    for network in [NetworkId::Testnet, NetworkId::Mainnet] {
        let prefix = network.domain_prefix();
        assert_eq!(prefix.len(), 20);
        assert!(prefix_to_field(prefix.as_bytes()).is_ok());
        assert_eq!(NetworkId::try_from(u8::from(network)).unwrap(), network);
    }
    assert_eq!(NetworkId::Testnet.to_string(), "testnet");
    assert_eq!(NetworkId::Mainnet.to_string(), "mainnet");
}

prop_compose! {
    fn field_elements()(input in prop::collection::vec(any::<[u8; 32]>(), 0..8)) -> Vec<Fp> {
        input.iter().map(Fp::reduce_bytes).collect()
    }
}

proptest! {
    #[test]
    fn hashing_is_deterministic(input in field_elements()) {
        for network in [None, Some(NetworkId::Testnet), Some(NetworkId::Mainnet)] {
            prop_assert_eq!(poseidon::hash(network, &input), poseidon::hash(network, &input));
        }
    }

    #[test]
    fn networks_are_separated(input in field_elements()) {
        let testnet = poseidon::hash(Some(NetworkId::Testnet), &input);
        let mainnet = poseidon::hash(Some(NetworkId::Mainnet), &input);
        let null = poseidon::hash(None, &input);
        prop_assert_ne!(testnet, mainnet);
        prop_assert_ne!(testnet, null);
        prop_assert_ne!(mainnet, null);
    }

    #[test]
    fn chunked_absorb_matches_hash(input in field_elements(), split in 0usize..8) {
        let split = split.min(input.len());
        let mut sponge = Poseidon::new(Some(NetworkId::Mainnet));
        sponge.absorb(&input[..split]);
        sponge.absorb(&input[split..]);
        let expected: Fq = poseidon::hash(Some(NetworkId::Mainnet), &input);
        prop_assert_eq!(sponge.squeeze(), expected);
    }

    #[test]
    fn digests_are_canonical_scalars(input in field_elements()) {
        let digest = poseidon::hash(Some(NetworkId::Testnet), &input);
        prop_assert!(bool::from(Fq::from_bytes(&digest.to_bytes()).is_some()));
    }
}
