//! Jacobian points and constant-time table lookup.

use super::{LIMBS, field::Elem};
use primefield::{
    Limb,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
};

/// Number of entries in a table indexed by a 5-bit signed window.
pub const W5_TABLE_SIZE: usize = 16;

/// A point in Jacobian coordinates `(X, Y, Z)` over the P-384 base field.
///
/// Coordinates are Montgomery-domain field elements. Point arithmetic is done
/// by the caller; this crate only moves points around.
#[derive(Clone, Copy, Default)]
pub struct Point {
    /// X coordinate.
    pub x: Elem,
    /// Y coordinate.
    pub y: Elem,
    /// Z coordinate.
    pub z: Elem,
}

impl Point {
    /// The all-zero point returned for a lookup with index 0.
    pub const IDENTITY_LIKE: Self = Self {
        x: Elem::ZERO,
        y: Elem::ZERO,
        z: Elem::ZERO,
    };

    /// Returns `table[index - 1]`, or [`Point::IDENTITY_LIKE`] when `index` is 0.
    ///
    /// See [`point_select_w5`].
    pub fn select_w5(table: &[Point; W5_TABLE_SIZE], index: usize) -> Self {
        point_select_w5(table, index)
    }
}

impl ConstantTimeEq for Point {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & self.z.ct_eq(&other.z)
    }
}

impl ConditionallySelectable for Point {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: Elem::conditional_select(&a.x, &b.x, choice),
            y: Elem::conditional_select(&a.y, &b.y, choice),
            z: Elem::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Point {}

impl core::fmt::Debug for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl primefield::zeroize::DefaultIsZeroes for Point {}

/// Select `table[index - 1]` in constant time, or the all-zero point when
/// `index` is 0.
///
/// `index` must be in `[0, 16]`. Every limb of every entry is read whatever the
/// index, and the selected entry is accumulated with masks rather than by
/// indexing, so neither timing nor memory access depends on `index`.
pub fn point_select_w5(table: &[Point; W5_TABLE_SIZE], index: usize) -> Point {
    check_invariant!(index <= W5_TABLE_SIZE, "window index out of range");

    let mut x = [Limb::ZERO; LIMBS];
    let mut y = [Limb::ZERO; LIMBS];
    let mut z = [Limb::ZERO; LIMBS];

    for (i, entry) in table.iter().enumerate() {
        // All ones for the matching entry, zero for every other
        let mask = Limb::conditional_select(&Limb::ZERO, &Limb::MAX, index.ct_eq(&(i + 1)));

        for j in 0..LIMBS {
            x[j] = x[j] | (entry.x.0[j] & mask);
            y[j] = y[j] | (entry.y.0[j] & mask);
            z[j] = z[j] | (entry.z.0[j] & mask);
        }
    }

    Point {
        x: Elem(x),
        y: Elem(y),
        z: Elem(z),
    }
}
