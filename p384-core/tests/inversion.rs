//! Field and scalar inversion tests.

#![cfg(feature = "test-vectors")]

use hex_literal::hex;
use p384_core::{
    Elem, GENERATOR_X, GENERATOR_Y, Scalar, ScalarMont, elem_inv, elem_mul_mont,
    scalar_inv_to_mont, scalar_mul_mont, scalar_to_mont, test_vectors::field::HALF,
};

/// Plain field element 2.
const TWO: [u8; 48] = hex!(
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000002"
);

#[test]
fn invert_two() {
    let two = Elem::from_be_bytes(&TWO).unwrap().to_mont();
    let inv = elem_inv(&two);

    // 2^-1 mod q = (q + 1) / 2
    assert_eq!(inv.from_mont().to_be_bytes(), HALF);
    assert_eq!(elem_mul_mont(&two, &inv), Elem::ONE);
}

#[test]
fn invert_generator_coordinates() {
    for a in [GENERATOR_X, GENERATOR_Y] {
        assert_eq!(elem_mul_mont(&a, &elem_inv(&a)), Elem::ONE);
        assert_eq!(elem_inv(&elem_inv(&a)), a);
    }
}

#[test]
fn invert_scalars() {
    let scalars = [
        hex!("201b432d8df14324182d6261db3e4b3f46a8284482d52e370da41e6cbdf45ec2952f5db7ccbce3bc29449f4fb080ac97"),
        hex!("23d9f4ea6d87b7d6163d64256e3449255db14786401a51daa7847161bf56d494325ad2ac8ba928394e01061d882c3528"),
        hex!("ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52972"),
        hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000002"),
    ];

    for bytes in &scalars {
        let a = Scalar::from_be_bytes(bytes).unwrap();
        let inv = scalar_inv_to_mont(&a);
        assert_eq!(scalar_mul_mont(&scalar_to_mont(&a), &inv), ScalarMont::ONE);
    }
}

#[test]
fn invert_scalar_two() {
    // 2^-1 mod n = (n + 1) / 2
    let expected = Scalar::from_be_bytes(&hex!(
        "7fffffffffffffffffffffffffffffffffffffffffffffffe3b1a6c0fa1b96efac0d06d9245853bd76760cb5666294ba"
    ))
    .unwrap();

    let two = Scalar::from_be_bytes(&TWO).unwrap();
    assert_eq!(scalar_inv_to_mont(&two).from_mont(), expected);
}
