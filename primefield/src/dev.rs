/// Implement tests for the constants which parameterize Montgomery arithmetic for a modulus.
///
/// Takes the modulus `m`, `R^2 mod m`, `R mod m` (the Montgomery form of one), and
/// `n0 = -m^-1 mod 2^w`, all as little-endian limb arrays.
#[macro_export]
macro_rules! test_monty_constants {
    ($modulus:expr, $r2:expr, $one:expr, $n0:expr) => {
        #[test]
        fn n0_constant() {
            // m * n0 == -1 (mod 2^w)
            assert_eq!($modulus[0].wrapping_mul($n0), $crate::Limb::MAX);
        }

        #[test]
        fn r2_constant() {
            // R^2 * 1 * R^-1 == R (mod m)
            let mut one = $modulus;
            one.iter_mut().for_each(|limb| *limb = $crate::Limb::ZERO);
            one[0] = $crate::Limb::ONE;
            assert_eq!($crate::mul_mont(&$r2, &one, &$modulus, $n0), $one);
        }

        #[test]
        fn one_is_multiplicative_identity() {
            assert_eq!($crate::mul_mont(&$one, &$one, &$modulus, $n0), $one);
            assert_eq!($crate::mul_mont(&$r2, &$one, &$modulus, $n0), $r2);
        }

        #[test]
        fn montgomery_round_trip() {
            let mut zero = $modulus;
            zero.iter_mut().for_each(|limb| *limb = $crate::Limb::ZERO);
            let mut one = zero;
            one[0] = $crate::Limb::ONE;
            let (m_minus_1, _) = $crate::limbs::sub(&$modulus, &one);

            for value in [zero, one, m_minus_1] {
                let mont = $crate::mul_mont(&value, &$r2, &$modulus, $n0);
                assert_eq!($crate::mul_mont(&mont, &one, &$modulus, $n0), value);
            }
        }
    };
}
