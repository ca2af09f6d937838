#![no_main]
use libfuzzer_sys::fuzz_target;
use p384_core::{Scalar, ScalarMont, scalar_inv_to_mont, scalar_mul_mont, scalar_to_mont};

fn test_scalar(s1: Scalar, s2: Scalar) {
    let (m1, m2) = (scalar_to_mont(&s1), scalar_to_mont(&s2));

    // Round trip
    assert_eq!(m1.from_mont(), s1);
    assert_eq!(Scalar::from_be_bytes(&s1.to_be_bytes()).unwrap(), s1);

    // Commutativity and identity
    assert_eq!(scalar_mul_mont(&m1, &m2), scalar_mul_mont(&m2, &m1));
    assert_eq!(scalar_mul_mont(&m1, &ScalarMont::ONE), m1);

    // Inversion
    if !bool::from(s1.is_zero()) {
        assert_eq!(scalar_mul_mont(&m1, &scalar_inv_to_mont(&s1)), ScalarMont::ONE);
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let s1 = Scalar::from_be_bytes(data[0..48].try_into().unwrap()).unwrap_or(Scalar::ZERO);
    let s2 = Scalar::from_be_bytes(data[48..96].try_into().unwrap()).unwrap_or(Scalar::ZERO);
    test_scalar(s1, s2);
});
