#![no_main]
use libfuzzer_sys::fuzz_target;
use p384_core::{
    Elem, Point, elem_add, elem_inv, elem_mul_mont, elem_neg, elem_sub, point_select_w5,
};

fn test_field(fe1: Elem, fe2: Elem, fe3: Elem) {
    // Associativity
    assert_eq!(elem_add(&fe1, &elem_add(&fe2, &fe3)), elem_add(&elem_add(&fe1, &fe2), &fe3));
    assert_eq!(
        elem_mul_mont(&fe1, &elem_mul_mont(&fe2, &fe3)),
        elem_mul_mont(&elem_mul_mont(&fe1, &fe2), &fe3)
    );

    // Commutativity
    assert_eq!(elem_add(&fe1, &fe2), elem_add(&fe2, &fe1));
    assert_eq!(elem_mul_mont(&fe1, &fe2), elem_mul_mont(&fe2, &fe1));

    // Identity
    assert_eq!(elem_add(&fe1, &Elem::ZERO), fe1);
    assert_eq!(elem_mul_mont(&fe1, &Elem::ONE), fe1);
    assert_eq!(elem_sub(&fe1, &fe1), Elem::ZERO);

    // Distributivity
    assert_eq!(
        elem_mul_mont(&fe1, &elem_add(&fe2, &fe3)),
        elem_add(&elem_mul_mont(&fe1, &fe2), &elem_mul_mont(&fe1, &fe3))
    );

    // Negation, halving, tripling
    assert_eq!(elem_add(&fe1, &elem_neg(&fe1)), Elem::ZERO);
    assert_eq!(fe1.halve().double(), fe1);
    assert_eq!(fe1.triple(), elem_add(&fe1.double(), &fe1));

    // Inversion
    if !bool::from(fe1.is_zero()) {
        assert_eq!(elem_mul_mont(&fe1, &elem_inv(&fe1)), Elem::ONE);
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 145 {
        return;
    }

    // Out-of-range encodings fall back to zero
    let fe = |i: usize| -> Elem {
        let bytes: &[u8; 48] = data[i * 48..(i + 1) * 48].try_into().unwrap();
        Elem::from_be_bytes(bytes).unwrap_or(Elem::ZERO)
    };
    let (fe1, fe2, fe3) = (fe(0), fe(1), fe(2));
    test_field(fe1, fe2, fe3);

    let mut table = [Point::IDENTITY_LIKE; 16];
    for (i, entry) in table.iter_mut().enumerate() {
        let x = Elem::from_be_bytes(&[i as u8; 48]).unwrap_or(Elem::ZERO);
        *entry = Point { x, y: fe2, z: fe3 };
    }
    let index = usize::from(data[144] % 17);
    let expected = if index == 0 { Point::IDENTITY_LIKE } else { table[index - 1] };
    assert_eq!(point_select_w5(&table, index), expected);
});
