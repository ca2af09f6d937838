#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::implicit_saturating_sub,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Constant-time operation
//!
//! Every operation runs in time independent of the values of field elements,
//! scalars and table indices. Loops are bounded by limb counts and by the
//! public exponents `q - 2` and `n - 2`; reductions and lookups use masks and
//! constant-time selection instead of branches.

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod arithmetic;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::arithmetic::{
    FieldBytes, LIMBS,
    field::{
        CURVE_EQUATION_A, CURVE_EQUATION_B, Elem, GENERATOR_X, GENERATOR_Y, Q_MINUS_N, elem_add,
        elem_inv, elem_mul_mont, elem_neg, elem_sqr_mont, elem_sub,
    },
    point::{Point, W5_TABLE_SIZE, point_select_w5},
    scalar::{
        Digit, REMAINING_WINDOWS, Scalar, ScalarMont, Window, scalar_inv_to_mont, scalar_mul_mont,
        scalar_sqr_mont, scalar_to_mont,
    },
};
pub use primefield;
pub use primefield::{Limb, Word, subtle, zeroize};
