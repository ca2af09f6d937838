//! Field arithmetic modulo q = 2^{384} − 2^{128} − 2^{96} + 2^{32} − 1
//!
//! [`Elem`] does not record whether it holds a plain residue or one in the
//! Montgomery domain (`aR mod q`, `R = 2^384`): addition, subtraction, negation
//! and halving work the same in both, while the `*_mont` operations expect
//! Montgomery-domain operands and produce a Montgomery-domain result.

use super::{FieldBytes, LIMBS, limbs_from_be_bytes, limbs_from_hex, limbs_to_be_bytes, n0};
use primefield::{Limb, limbs, subtle::CtOption};

/// The field modulus.
/// q = 2^{384} − 2^{128} − 2^{96} + 2^{32} − 1
pub const MODULUS: [Limb; LIMBS] = limbs_from_hex(
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
);

/// -q^-1 mod 2^64
const N0: Limb = n0(0x0000_0001_0000_0001);

/// R^2 = 2^768 mod q
const R_2: [Limb; LIMBS] = limbs_from_hex(
    "000000000000000000000000000000010000000200000000fffffffe000000000000000200000000fffffffe00000001",
);

/// (q + 1) / 2, added back when halving an odd value.
const MODULUS_PLUS_ONE_HALF: [Limb; LIMBS] = limbs_from_hex(
    "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7fffffff800000000000000080000000",
);

/// Curve equation coefficient `a = -3`, in the Montgomery domain.
pub const CURVE_EQUATION_A: Elem = Elem::from_be_hex(
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffbfffffffc0000000000000003fffffffc",
);

/// Curve equation coefficient `b`, in the Montgomery domain.
pub const CURVE_EQUATION_B: Elem = Elem::from_be_hex(
    "cd08114b604fbff9b62b21f41f022094e3374bee94938ae277f2209b1920022ef729add87a4c32ec081188719d412dcc",
);

/// Affine x-coordinate of the generator, in the Montgomery domain.
pub const GENERATOR_X: Elem = Elem::from_be_hex(
    "4d3aadc2299e1513812ff723614ede2b6454868459a30eff879c3afc541b4d6e20e378e2a0d6ce383dd0756649c0b528",
);

/// Affine y-coordinate of the generator, in the Montgomery domain.
pub const GENERATOR_Y: Elem = Elem::from_be_hex(
    "2b78abc25a15c5e9dd8002263969a840c6c3521968f4ffd98bade7562e83b050a1bfa8bf7bb4a9ac23043dad4b03a4fe",
);

/// q - n as a plain residue.
///
/// An x-coordinate `x < q - n` has two candidate scalars, `x` and `x + n`.
pub const Q_MINUS_N: Elem = Elem::from_be_hex(
    "000000000000000000000000000000000000000000000000389cb27e0bc8d21fa7e5f24cb74f58851313e696333ad68c",
);

/// An element of the finite field modulo q.
///
/// The internal representation is in little-endian limb order and is always
/// fully reduced into `[0, q)`.
#[derive(Clone, Copy)]
pub struct Elem(pub(crate) [Limb; LIMBS]);

impl_limbs_newtype!(Elem);

impl Elem {
    /// Zero element.
    pub const ZERO: Self = Self([Limb::ZERO; LIMBS]);

    /// Multiplicative identity in the Montgomery domain, `R mod q`.
    pub const ONE: Self = Self(limbs_from_hex(
        "000000000000000000000000000000000000000000000000000000000000000100000000ffffffffffffffff00000001",
    ));

    /// Create an element from a big endian hex string.
    ///
    /// Panics at compile time on malformed input when used in a `const`.
    pub(crate) const fn from_be_hex(hex: &str) -> Self {
        Self(limbs_from_hex(hex))
    }

    /// Decode a plain residue from its big endian serialization.
    ///
    /// Returns `None` if the encoded integer is not less than q.
    pub fn from_be_bytes(bytes: &FieldBytes) -> CtOption<Self> {
        let limbs = limbs_from_be_bytes(bytes);
        let in_range = limbs::ct_lt(&limbs, &MODULUS);
        CtOption::new(Self(limbs), in_range)
    }

    /// Serialize this element as big endian bytes.
    pub fn to_be_bytes(&self) -> FieldBytes {
        limbs_to_be_bytes(&self.0)
    }

    /// Returns `self + rhs mod q`.
    pub fn add(&self, rhs: &Self) -> Self {
        let (sum, carry) = limbs::add(&self.0, &rhs.0);
        let (reduced, borrow) = limbs::sub(&sum, &MODULUS);

        // The sum may occupy 385 bits, in which case the subtraction borrows
        // from the carry and the reduced value is the right one.
        let use_reduced = limbs::is_nonzero_limb(carry) | !limbs::is_nonzero_limb(borrow);
        Self(limbs::select(&sum, &reduced, use_reduced))
    }

    /// Returns `self - rhs mod q`.
    pub fn sub(&self, rhs: &Self) -> Self {
        let (diff, borrow) = limbs::sub(&self.0, &rhs.0);
        let (corrected, _) = limbs::add(&diff, &MODULUS);
        Self(limbs::select(&diff, &corrected, limbs::is_nonzero_limb(borrow)))
    }

    /// Returns `-self mod q`.
    pub fn neg(&self) -> Self {
        let (diff, borrow) = limbs::sub(&MODULUS, &self.0);
        check_invariant!(borrow == Limb::ZERO, "field element is not reduced");

        // q - 0 = q, which is not a valid representative of zero
        Self(limbs::select(&diff, &[Limb::ZERO; LIMBS], self.is_zero()))
    }

    /// Returns `2 * self mod q`.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Returns `3 * self mod q`.
    pub fn triple(&self) -> Self {
        self.double().add(self)
    }

    /// Returns `self / 2 mod q`.
    pub fn halve(&self) -> Self {
        let (shifted, odd) = limbs::shr1(&self.0);

        // For odd `a`, `(a >> 1) + (q + 1) / 2 = (a + q) / 2 < q`, so the sum
        // needs no further reduction. Both addends are below 2^383, so the
        // addition never carries whichever value is selected.
        let (sum, carry) = limbs::add(&shifted, &MODULUS_PLUS_ONE_HALF);
        check_invariant!(carry == Limb::ZERO, "halving overflowed");

        Self(limbs::select(&shifted, &sum, odd))
    }

    /// Montgomery multiplication: returns `self * rhs * R^-1 mod q`.
    pub fn mul_mont(&self, rhs: &Self) -> Self {
        Self(primefield::mul_mont(&self.0, &rhs.0, &MODULUS, N0))
    }

    /// Montgomery squaring: returns `self^2 * R^-1 mod q`.
    pub fn sqr_mont(&self) -> Self {
        self.mul_mont(self)
    }

    /// Square `self` in the Montgomery domain `squarings` times, then multiply
    /// the result by `b`.
    ///
    /// This is the step from which the inversion addition chain is built:
    /// in exponent terms it computes `e * 2^squarings + f` for `self = a^e` and
    /// `b = a^f`.
    pub fn sqr_mul_mont(&self, squarings: usize, b: &Self) -> Self {
        check_invariant!(squarings >= 1);

        let mut acc = *self;
        for _ in 0..squarings {
            acc = acc.sqr_mont();
        }
        acc.mul_mont(b)
    }

    /// Convert a plain residue into the Montgomery domain.
    pub fn to_mont(&self) -> Self {
        self.mul_mont(&Self(R_2))
    }

    /// Convert a Montgomery-domain value back to a plain residue.
    pub fn from_mont(&self) -> Self {
        let mut one = [Limb::ZERO; LIMBS];
        one[0] = Limb::ONE;
        self.mul_mont(&Self(one))
    }

    /// Returns the inverse of `self` in the Montgomery domain.
    ///
    /// Computes `self^(q - 2)` by Fermat's Little Theorem. Zero maps to zero.
    pub fn inv(&self) -> Self {
        // q - 2 in binary, most significant bit first:
        //
        //     255 × 1, 0, 32 × 1, 64 × 0, 30 × 1, 0, 1
        //
        // `xN` below is `self` raised to `2^N - 1`, i.e. N consecutive one bits.
        let x1 = self;
        let x2 = x1.sqr_mul_mont(1, x1);
        let x4 = x2.sqr_mul_mont(2, &x2);
        let x8 = x4.sqr_mul_mont(4, &x4);
        let x16 = x8.sqr_mul_mont(8, &x8);
        let x24 = x16.sqr_mul_mont(8, &x8);
        let x28 = x24.sqr_mul_mont(4, &x4);
        let x56 = x28.sqr_mul_mont(28, &x28);
        let x112 = x56.sqr_mul_mont(56, &x56);
        let x224 = x112.sqr_mul_mont(112, &x112);

        // 255 leading ones
        let acc = x224.sqr_mul_mont(28, &x28);
        let acc = acc.sqr_mul_mont(2, &x2);
        let acc = acc.sqr_mul_mont(1, x1);

        // 0, then 32 ones
        let acc = acc.sqr_mul_mont(1 + 28, &x28);
        let acc = acc.sqr_mul_mont(4, &x4);

        // 64 zeros, then 30 ones
        let acc = acc.sqr_mul_mont(64 + 28, &x28);
        let acc = acc.sqr_mul_mont(2, &x2);

        // 0, 1
        acc.sqr_mul_mont(2, x1)
    }
}

/// Returns `a + b mod q`.
pub fn elem_add(a: &Elem, b: &Elem) -> Elem {
    a.add(b)
}

/// Returns `a - b mod q`.
pub fn elem_sub(a: &Elem, b: &Elem) -> Elem {
    a.sub(b)
}

/// Returns `-a mod q`.
pub fn elem_neg(a: &Elem) -> Elem {
    a.neg()
}

/// Returns the Montgomery product `a * b * R^-1 mod q`.
pub fn elem_mul_mont(a: &Elem, b: &Elem) -> Elem {
    a.mul_mont(b)
}

/// Returns the Montgomery square `a^2 * R^-1 mod q`.
pub fn elem_sqr_mont(a: &Elem) -> Elem {
    a.sqr_mont()
}

/// Returns the Montgomery-domain inverse of the Montgomery-domain element `a`.
pub fn elem_inv(a: &Elem) -> Elem {
    a.inv()
}
