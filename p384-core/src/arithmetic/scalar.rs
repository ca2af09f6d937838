//! Scalar arithmetic modulo the group order
//! n = 0xffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973
//!
//! Only the operations needed by inversion are provided: Montgomery
//! multiplication and conversion into the Montgomery domain. A plain residue
//! is a [`Scalar`] and its Montgomery form a [`ScalarMont`], so the two domains
//! cannot be confused.

use super::{FieldBytes, LIMBS, limbs_from_be_bytes, limbs_from_hex, limbs_to_be_bytes, n0};
use primefield::{Limb, limbs, subtle::CtOption};

/// The group order.
pub const ORDER: [Limb; LIMBS] = limbs_from_hex(
    "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
);

/// -n^-1 mod 2^64
const N0: Limb = n0(0x6ed4_6089_e88f_dc45);

/// R^2 = 2^768 mod n
const R_2: [Limb; LIMBS] = limbs_from_hex(
    "0c84ee012b39bf213fb05b7a28266895d40d49174aab1cc5bc3e483afcb82947ff3d81e5df1aa4192d319b2419b409a9",
);

/// A plain residue modulo the group order, in `[0, n)`.
#[derive(Clone, Copy)]
pub struct Scalar(pub(crate) [Limb; LIMBS]);

impl_limbs_newtype!(Scalar);

/// A residue modulo the group order in the Montgomery domain, `aR mod n`
/// with `R = 2^384`.
#[derive(Clone, Copy)]
pub struct ScalarMont(pub(crate) [Limb; LIMBS]);

impl_limbs_newtype!(ScalarMont);

impl Scalar {
    /// Zero scalar.
    pub const ZERO: Self = Self([Limb::ZERO; LIMBS]);

    /// Decode a scalar from its big endian serialization.
    ///
    /// Returns `None` if the encoded integer is not less than n.
    pub fn from_be_bytes(bytes: &FieldBytes) -> CtOption<Self> {
        let limbs = limbs_from_be_bytes(bytes);
        let in_range = limbs::ct_lt(&limbs, &ORDER);
        CtOption::new(Self(limbs), in_range)
    }

    /// Serialize this scalar as big endian bytes.
    pub fn to_be_bytes(&self) -> FieldBytes {
        limbs_to_be_bytes(&self.0)
    }

    /// Convert into the Montgomery domain.
    pub fn to_mont(&self) -> ScalarMont {
        ScalarMont(primefield::mul_mont(&self.0, &R_2, &ORDER, N0))
    }

    /// Returns the inverse of `self` modulo n, in the Montgomery domain.
    ///
    /// Computes `self^(n - 2)` by Fermat's Little Theorem. Zero maps to zero.
    pub fn inv_to_mont(&self) -> ScalarMont {
        let b_1 = self.to_mont();
        let b_10 = b_1.sqr_mont();
        let b_11 = b_10.mul_mont(&b_1);
        let b_101 = b_10.sqr_mul_mont(1, &b_1);
        let b_111 = b_101.mul_mont(&b_10);
        let b_1111 = b_111.sqr_mul_mont(1, &b_1);
        let digits = [b_1, b_10, b_11, b_101, b_111, b_1111];

        // The top 192 bits of n - 2 are all ones.
        let ff = b_1111.sqr_mul_mont(4, &b_1111);
        let ffff = ff.sqr_mul_mont(8, &ff);
        let ffffffff = ffff.sqr_mul_mont(16, &ffff);

        let mut acc = ffffffff.sqr_mul_mont(32, &ffffffff);
        acc = acc.sqr_mul_mont(32, &ffffffff);
        acc = acc.sqr_mul_mont(96, &acc);

        for window in REMAINING_WINDOWS {
            acc = acc.sqr_mul_mont(usize::from(window.squarings), &digits[window.digit as usize]);
        }

        acc
    }
}

impl ScalarMont {
    /// Zero scalar.
    pub const ZERO: Self = Self([Limb::ZERO; LIMBS]);

    /// Multiplicative identity in the Montgomery domain, `R mod n`.
    pub const ONE: Self = Self(limbs_from_hex(
        "000000000000000000000000000000000000000000000000389cb27e0bc8d220a7e5f24db74f58851313e695333ad68d",
    ));

    /// Convert out of the Montgomery domain.
    pub fn from_mont(&self) -> Scalar {
        let mut one = [Limb::ZERO; LIMBS];
        one[0] = Limb::ONE;
        Scalar(primefield::mul_mont(&self.0, &one, &ORDER, N0))
    }

    /// Montgomery multiplication: returns `self * rhs * R^-1 mod n`.
    pub fn mul_mont(&self, rhs: &Self) -> Self {
        Self(primefield::mul_mont(&self.0, &rhs.0, &ORDER, N0))
    }

    /// Montgomery squaring: returns `self^2 * R^-1 mod n`.
    pub fn sqr_mont(&self) -> Self {
        self.mul_mont(self)
    }

    /// Square `self` `squarings` times, then multiply by `b`.
    pub fn sqr_mul_mont(&self, squarings: usize, b: &Self) -> Self {
        check_invariant!(squarings >= 1);

        let mut acc = *self;
        for _ in 0..squarings {
            acc = acc.sqr_mont();
        }
        acc.mul_mont(b)
    }
}

/// Index into the table of small powers built at the start of scalar
/// inversion. Each variant is named after the binary exponent of its entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Digit {
    /// `a^1`
    B1 = 0,
    /// `a^2`
    B10 = 1,
    /// `a^3`
    B11 = 2,
    /// `a^5`
    B101 = 3,
    /// `a^7`
    B111 = 4,
    /// `a^15`
    B1111 = 5,
}

/// One step of the scalar inversion addition chain: square the accumulator
/// `squarings` times, then multiply in the table entry for `digit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// Number of squarings, always at least one.
    pub squarings: u8,
    /// Table entry to multiply in after squaring.
    pub digit: Digit,
}

const fn w(squarings: u8, digit: Digit) -> Window {
    Window { squarings, digit }
}

/// The low 192 bits of n - 2, most significant first. Each window is a run of
/// zero bits followed by one of the odd digits `1`, `11`, `101`, `111` or `1111`.
pub const REMAINING_WINDOWS: [Window; 48] = {
    use Digit::*;
    [
        w(2, B11),
        w(6, B111),
        w(3, B11),
        w(5, B11),
        w(2, B1),
        w(4, B11),
        w(3, B11),
        w(10, B1111),
        w(3, B101),
        w(6, B11),
        w(4, B111),
        w(5, B101),
        w(1, B1),
        w(4, B111),
        w(5, B1111),
        w(3, B101),
        w(3, B11),
        w(8, B11),
        w(2, B1),
        w(7, B11),
        w(3, B11),
        w(3, B11),
        w(3, B1),
        w(3, B1),
        w(3, B1),
        w(4, B1),
        w(3, B11),
        w(5, B1),
        w(2, B1),
        w(5, B111),
        w(5, B1111),
        w(2, B1),
        w(4, B111),
        w(3, B11),
        w(5, B111),
        w(3, B11),
        w(7, B11),
        w(3, B1),
        w(3, B11),
        w(4, B101),
        w(3, B11),
        w(4, B11),
        w(4, B11),
        w(6, B101),
        w(5, B101),
        w(3, B1),
        w(4, B111),
        w(4, B1),
    ]
};

/// Returns the Montgomery product `a * b * R^-1 mod n`.
pub fn scalar_mul_mont(a: &ScalarMont, b: &ScalarMont) -> ScalarMont {
    a.mul_mont(b)
}

/// Returns the Montgomery square `a^2 * R^-1 mod n`.
pub fn scalar_sqr_mont(a: &ScalarMont) -> ScalarMont {
    a.sqr_mont()
}

/// Converts the plain scalar `a` into the Montgomery domain.
pub fn scalar_to_mont(a: &Scalar) -> ScalarMont {
    a.to_mont()
}

/// Returns the inverse of the plain scalar `a` in the Montgomery domain.
///
/// Note the asymmetry: the input is a plain residue, the output is not.
pub fn scalar_inv_to_mont(a: &Scalar) -> ScalarMont {
    a.inv_to_mont()
}
