//! Montgomery multiplication over a caller-supplied odd modulus.

use crate::limbs;
use bigint::Limb;

/// Computes the Montgomery product `a * b * R^-1 mod m`, where `R = 2^(N * Limb::BITS)`.
///
/// Uses the Coarsely Integrated Operand Scanning (CIOS) method: each word of
/// `b` is multiplied in and immediately followed by one word of reduction,
/// so the intermediate never exceeds `N + 2` limbs.
///
/// # Requirements
///
/// - `m` is odd
/// - `a < m` and `b < m`
/// - `n0 = -m^-1 mod 2^Limb::BITS`
///
/// Under these conditions the result is fully reduced into `[0, m)`.
///
/// References:
/// - Handbook of Applied Cryptography, Chapter 14, Algorithm 14.36
///   <http://cacr.uwaterloo.ca/hac/about/chap14.pdf>
/// - Koç, Acar, Kaliski, "Analyzing and Comparing Montgomery Multiplication
///   Algorithms", IEEE Micro 16(3), 1996
pub fn mul_mont<const N: usize>(
    a: &[Limb; N],
    b: &[Limb; N],
    m: &[Limb; N],
    n0: Limb,
) -> [Limb; N] {
    let mut t = [Limb::ZERO; N];
    let mut t_hi = Limb::ZERO;

    for i in 0..N {
        // t += a * b[i]
        let mut carry = Limb::ZERO;
        for j in 0..N {
            (t[j], carry) = t[j].mac(a[j], b[i], carry);
        }
        let (t_n, t_n1) = t_hi.adc(carry, Limb::ZERO);

        // t = (t + u * m) / 2^w, where u is chosen so the low word vanishes
        let u = t[0].wrapping_mul(n0);
        let (_, mut carry) = t[0].mac(u, m[0], Limb::ZERO);
        for j in 1..N {
            (t[j - 1], carry) = t[j].mac(u, m[j], carry);
        }
        let (top, carry) = t_n.adc(carry, Limb::ZERO);
        t[N - 1] = top;
        t_hi = t_n1.wrapping_add(carry);
    }

    // The intermediate is less than 2m: subtract m once if that doesn't underflow.
    let (reduced, borrow) = limbs::sub(&t, m);
    let (_, borrow) = t_hi.sbb(Limb::ZERO, borrow);
    limbs::select(&reduced, &t, limbs::is_nonzero_limb(borrow))
}

#[cfg(test)]
mod tests {
    use super::mul_mont;
    use bigint::{
        Limb, U256, Word,
        modular::runtime_mod::{DynResidue, DynResidueParams},
    };
    use proptest::prelude::*;

    // Example modulus: P-256 base field.
    // p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1
    const MODULUS: [Limb; U256::LIMBS] =
        U256::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff")
            .to_limbs();

    /// R^2 = 2^512 mod p
    const R_2: [Limb; U256::LIMBS] =
        U256::from_be_hex("00000004fffffffdfffffffffffffffefffffffbffffffff0000000000000003")
            .to_limbs();

    /// R mod p
    const R: [Limb; U256::LIMBS] =
        U256::from_be_hex("00000000fffffffeffffffffffffffffffffffff000000000000000000000001")
            .to_limbs();

    /// -p^-1 mod 2^w, which is 1 for both 32-bit and 64-bit limbs
    const N0: Limb = Limb::ONE;

    crate::test_monty_constants!(MODULUS, R_2, R, N0);

    #[test]
    fn mul_mont_small_values() {
        let mut two = [Limb::ZERO; U256::LIMBS];
        two[0] = Limb(2);
        let mut three = [Limb::ZERO; U256::LIMBS];
        three[0] = Limb(3);
        let mut six = [Limb::ZERO; U256::LIMBS];
        six[0] = Limb(6);

        let two_m = mul_mont(&two, &R_2, &MODULUS, N0);
        let three_m = mul_mont(&three, &R_2, &MODULUS, N0);
        let six_m = mul_mont(&two_m, &three_m, &MODULUS, N0);
        assert_eq!(mul_mont(&six_m, &ONE, &MODULUS, N0), six);
    }

    const ONE: [Limb; U256::LIMBS] = U256::ONE.to_limbs();

    proptest! {
        #[test]
        fn mul_mont_matches_dyn_residue(
            a in prop::array::uniform4(any::<Word>()),
            b in prop::array::uniform4(any::<Word>()),
        ) {
            let p = U256::new(MODULUS);
            let params = DynResidueParams::new(&p);
            let a = U256::from_words(a).wrapping_rem(&p);
            let b = U256::from_words(b).wrapping_rem(&p);

            let a_m = mul_mont(a.as_limbs(), &R_2, &MODULUS, N0);
            let b_m = mul_mont(b.as_limbs(), &R_2, &MODULUS, N0);
            let ab_m = mul_mont(&a_m, &b_m, &MODULUS, N0);

            let expected = DynResidue::new(&a, params) * DynResidue::new(&b, params);
            prop_assert_eq!(&ab_m, expected.as_montgomery().as_limbs());
            prop_assert_eq!(
                mul_mont(&ab_m, &ONE, &MODULUS, N0),
                expected.retrieve().to_limbs()
            );
        }
    }
}
