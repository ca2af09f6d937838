//! Fixed-width limb vector arithmetic.
//!
//! Values are little-endian arrays of [`Limb`]s. Every function here runs in
//! time independent of the limb values: loops are bounded by the array length
//! and carries/borrows flow through arithmetic rather than branches.

use bigint::{Limb, Word};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Computes `a + b`, returning the sum along with the carry out of the most
/// significant limb (`0` or `1`).
#[inline]
pub fn add<const N: usize>(a: &[Limb; N], b: &[Limb; N]) -> ([Limb; N], Limb) {
    let mut r = [Limb::ZERO; N];
    let mut carry = Limb::ZERO;

    for i in 0..N {
        (r[i], carry) = a[i].adc(b[i], carry);
    }

    (r, carry)
}

/// Computes `a - b`, returning the difference along with the borrow out of the
/// most significant limb.
///
/// The borrow is `Limb::MAX` if `a < b` and `Limb::ZERO` otherwise, so it can be
/// used directly as a mask.
#[inline]
pub fn sub<const N: usize>(a: &[Limb; N], b: &[Limb; N]) -> ([Limb; N], Limb) {
    let mut r = [Limb::ZERO; N];
    let mut borrow = Limb::ZERO;

    for i in 0..N {
        (r[i], borrow) = a[i].sbb(b[i], borrow);
    }

    (r, borrow)
}

/// Shifts `a` right by one bit, returning the shifted value along with the bit
/// that was shifted out.
#[inline]
pub fn shr1<const N: usize>(a: &[Limb; N]) -> ([Limb; N], Choice) {
    let mut r = [Limb::ZERO; N];

    for i in 0..N {
        let hi: Word = match a.get(i + 1) {
            Some(next) => next.0 << (Limb::BITS - 1),
            None => 0,
        };
        r[i] = Limb((a[i].0 >> 1) | hi);
    }

    (r, a[0].is_odd())
}

/// Converts a carry or borrow limb into a [`Choice`] which is set when the limb
/// is nonzero.
#[inline]
pub fn is_nonzero_limb(limb: Limb) -> Choice {
    !limb.ct_eq(&Limb::ZERO)
}

/// Returns `Choice(1)` if every limb of `a` is zero.
#[inline]
pub fn is_zero<const N: usize>(a: &[Limb; N]) -> Choice {
    let mut acc = Limb::ZERO;

    for limb in a {
        acc = acc | *limb;
    }

    acc.ct_eq(&Limb::ZERO)
}

/// Returns `Choice(1)` if `a == b`.
#[inline]
pub fn ct_eq<const N: usize>(a: &[Limb; N], b: &[Limb; N]) -> Choice {
    a[..].ct_eq(&b[..])
}

/// Returns `Choice(1)` if `a < b`.
#[inline]
pub fn ct_lt<const N: usize>(a: &[Limb; N], b: &[Limb; N]) -> Choice {
    let (_, borrow) = sub(a, b);
    is_nonzero_limb(borrow)
}

/// Returns `b` if `choice` is set, otherwise `a`.
///
/// Both inputs are read in full regardless of `choice`.
#[inline]
pub fn select<const N: usize>(a: &[Limb; N], b: &[Limb; N], choice: Choice) -> [Limb; N] {
    let mut r = [Limb::ZERO; N];

    for i in 0..N {
        r[i] = Limb::conditional_select(&a[i], &b[i], choice);
    }

    r
}

/// Assigns `src` to `dst` if `choice` is set.
#[inline]
pub fn conditional_assign<const N: usize>(dst: &mut [Limb; N], src: &[Limb; N], choice: Choice) {
    for (d, s) in dst.iter_mut().zip(src) {
        d.conditional_assign(s, choice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigint::{U256, Uint};
    use proptest::prelude::*;

    const N: usize = U256::LIMBS;

    fn limbs(words: [Word; N]) -> [Limb; N] {
        *Uint::<N>::from_words(words).as_limbs()
    }

    #[test]
    fn add_carries_out_of_top_limb() {
        let (r, carry) = add(&[Limb::MAX; N], &limbs({
            let mut w = [0; N];
            w[0] = 1;
            w
        }));
        assert_eq!(r, [Limb::ZERO; N]);
        assert_eq!(carry, Limb::ONE);
    }

    #[test]
    fn sub_borrow_is_mask() {
        let (r, borrow) = sub(&[Limb::ZERO; N], &limbs({
            let mut w = [0; N];
            w[0] = 1;
            w
        }));
        assert_eq!(r, [Limb::MAX; N]);
        assert_eq!(borrow, Limb::MAX);
        assert!(bool::from(is_nonzero_limb(borrow)));
    }

    #[test]
    fn shr1_moves_bits_across_limbs() {
        let mut w = [0; N];
        w[1] = 1;
        w[0] = 3;
        let (r, dropped) = shr1(&limbs(w));
        assert!(bool::from(dropped));
        assert_eq!(r[0].0, 1 | (1 << (Limb::BITS - 1)));
        assert_eq!(r[1], Limb::ZERO);
    }

    #[test]
    fn zero_and_eq() {
        assert!(bool::from(is_zero(&[Limb::ZERO; N])));
        assert!(!bool::from(is_zero(&[Limb::ONE; N])));
        assert!(bool::from(ct_eq(&[Limb::ONE; N], &[Limb::ONE; N])));
        assert!(!bool::from(ct_eq(&[Limb::ONE; N], &[Limb::MAX; N])));
    }

    #[test]
    fn select_and_assign() {
        let a = [Limb::ONE; N];
        let b = [Limb::MAX; N];
        assert_eq!(select(&a, &b, Choice::from(0)), a);
        assert_eq!(select(&a, &b, Choice::from(1)), b);

        let mut c = a;
        conditional_assign(&mut c, &b, Choice::from(0));
        assert_eq!(c, a);
        conditional_assign(&mut c, &b, Choice::from(1));
        assert_eq!(c, b);
    }

    proptest! {
        #[test]
        fn add_matches_uint(
            a in prop::array::uniform4(any::<Word>()),
            b in prop::array::uniform4(any::<Word>()),
        ) {
            let (expected, expected_carry) = U256::from_words(a).adc(&U256::from_words(b), Limb::ZERO);
            let (r, carry) = add(&limbs(a), &limbs(b));
            prop_assert_eq!(&r, expected.as_limbs());
            prop_assert_eq!(carry, expected_carry);
        }

        #[test]
        fn sub_matches_uint(
            a in prop::array::uniform4(any::<Word>()),
            b in prop::array::uniform4(any::<Word>()),
        ) {
            let (expected, expected_borrow) = U256::from_words(a).sbb(&U256::from_words(b), Limb::ZERO);
            let (r, borrow) = sub(&limbs(a), &limbs(b));
            prop_assert_eq!(&r, expected.as_limbs());
            prop_assert_eq!(borrow, expected_borrow);
            prop_assert_eq!(
                bool::from(ct_lt(&limbs(a), &limbs(b))),
                U256::from_words(a) < U256::from_words(b)
            );
        }

        #[test]
        fn shr1_matches_uint(a in prop::array::uniform4(any::<Word>())) {
            let expected = U256::from_words(a).shr_vartime(1);
            let (r, dropped) = shr1(&limbs(a));
            prop_assert_eq!(&r, expected.as_limbs());
            prop_assert_eq!(bool::from(dropped), a[0] & 1 == 1);
        }
    }
}
