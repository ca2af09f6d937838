//! secp384r1 test vectors.

pub mod field;
pub mod group;
