/// Assert an arithmetic invariant.
///
/// Checked when `debug_assertions` are on or the `checked-invariants` feature is
/// enabled, and compiled out otherwise. Every invariant checked this way holds
/// for all in-range inputs, so whether a check fires never depends on a secret.
macro_rules! check_invariant {
    ($cond:expr $(, $($arg:tt)+)?) => {
        if cfg!(any(debug_assertions, feature = "checked-invariants")) {
            assert!($cond $(, $($arg)+)?);
        }
    };
}

/// Implement the common constant-time trait surface for a newtype around
/// `[Limb; LIMBS]`.
macro_rules! impl_limbs_newtype {
    ($name:ident) => {
        impl $name {
            /// Create a value from little-endian limbs.
            ///
            /// The caller is responsible for the limbs being reduced.
            pub const fn from_limbs(limbs: [primefield::Limb; $crate::arithmetic::LIMBS]) -> Self {
                Self(limbs)
            }

            /// Borrow the little-endian limbs of this value.
            pub const fn as_limbs(&self) -> &[primefield::Limb; $crate::arithmetic::LIMBS] {
                &self.0
            }

            /// Returns `Choice(1)` if this value is zero.
            pub fn is_zero(&self) -> primefield::subtle::Choice {
                primefield::limbs::is_zero(&self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self([primefield::Limb::ZERO; $crate::arithmetic::LIMBS])
            }
        }

        impl primefield::subtle::ConstantTimeEq for $name {
            fn ct_eq(&self, other: &Self) -> primefield::subtle::Choice {
                primefield::limbs::ct_eq(&self.0, &other.0)
            }
        }

        impl primefield::subtle::ConditionallySelectable for $name {
            fn conditional_select(a: &Self, b: &Self, choice: primefield::subtle::Choice) -> Self {
                Self(primefield::limbs::select(&a.0, &b.0, choice))
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                primefield::subtle::ConstantTimeEq::ct_eq(self, other).into()
            }
        }

        impl Eq for $name {}

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}(0x", stringify!($name))?;
                for limb in self.0.iter().rev() {
                    write!(f, "{:0width$X}", limb.0, width = primefield::Limb::BYTES * 2)?;
                }
                write!(f, ")")
            }
        }

        impl primefield::zeroize::DefaultIsZeroes for $name {}
    };
}
