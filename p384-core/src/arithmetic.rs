//! Constant-time arithmetic modulo the P-384 prime and the P-384 group order.

#[macro_use]
mod macros;

pub mod field;
pub mod point;
pub mod scalar;

use primefield::bigint::{Limb, U384};

/// Number of limbs in a field element or scalar.
///
/// Six 64-bit limbs or twelve 32-bit limbs, depending on the target.
pub const LIMBS: usize = U384::LIMBS;

const _: () = assert!(
    LIMBS * Limb::BITS == 384,
    "a 384-bit value must fill a whole number of limbs"
);

/// Big endian serialization of a field element or scalar.
pub type FieldBytes = [u8; 48];

/// Decode little-endian limbs from a big endian hex string at compile time.
pub(crate) const fn limbs_from_hex(hex: &str) -> [Limb; LIMBS] {
    U384::from_be_hex(hex).to_limbs()
}

/// Decode little-endian limbs from big endian bytes.
///
/// The value is not reduced.
pub(crate) const fn limbs_from_be_bytes(bytes: &FieldBytes) -> [Limb; LIMBS] {
    U384::from_be_slice(bytes).to_limbs()
}

/// Encode little-endian limbs as big endian bytes.
pub(crate) fn limbs_to_be_bytes(limbs: &[Limb; LIMBS]) -> FieldBytes {
    let mut out = [0u8; 48];

    for (chunk, limb) in out.chunks_exact_mut(Limb::BYTES).zip(limbs.iter().rev()) {
        chunk.copy_from_slice(&limb.0.to_be_bytes());
    }

    out
}

/// Truncate a 64-bit Montgomery constant to the limb width.
///
/// `-m^-1 mod 2^32` is the low half of `-m^-1 mod 2^64`, so one constant serves
/// both limb sizes.
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn n0(n0: u64) -> Limb {
    Limb(n0 as primefield::Word)
}

#[cfg(test)]
mod tests {
    use super::{LIMBS, limbs_from_be_bytes, limbs_from_hex, limbs_to_be_bytes};
    use hex_literal::hex;
    use primefield::Limb;

    #[test]
    fn hex_and_bytes_agree() {
        let bytes = hex!(
            "c2b47944fb5de342d03285880177ca5f7d0f2fcad7678cce4229d6e1932fcac11bfc3c3e97d942a3c56bf34123013dbf"
        );
        let from_hex = limbs_from_hex(
            "c2b47944fb5de342d03285880177ca5f7d0f2fcad7678cce4229d6e1932fcac11bfc3c3e97d942a3c56bf34123013dbf",
        );

        assert_eq!(limbs_from_be_bytes(&bytes), from_hex);
        assert_eq!(limbs_to_be_bytes(&from_hex), bytes);
    }

    #[test]
    fn low_limb_is_least_significant() {
        let mut bytes = [0u8; 48];
        bytes[47] = 1;
        let mut expected = [Limb::ZERO; LIMBS];
        expected[0] = Limb::ONE;
        assert_eq!(limbs_from_be_bytes(&bytes), expected);
    }
}
