//! Field element test vectors.

use crate::arithmetic::{FieldBytes, field::Elem};
use hex_literal::hex;

/// Repeated doubling of a plain field element, starting from a value above
/// `q / 2` so that most steps need a reduction.
pub const DBL_TEST_VECTORS: &[FieldBytes] = &[
    hex!("c2b47944fb5de342d03285880177ca5f7d0f2fcad7678cce4229d6e1932fcac11bfc3c3e97d942a3c56bf34123013dbf"),
    hex!("8568f289f6bbc685a0650b1002ef94befa1e5f95aecf199c8453adc3265f958337f8787e2fb285478ad7e68146027b7f"),
    hex!("0ad1e513ed778d0b40ca162005df297df43cbf2b5d9e333908a75b864cbf2b076ff0f0fd5f650a8f15afcd018c04f6ff"),
    hex!("15a3ca27daef1a1681942c400bbe52fbe8797e56bb3c6672114eb70c997e560edfe1e1fabeca151e2b5f9a031809edfe"),
    hex!("2b47944fb5de342d03285880177ca5f7d0f2fcad7678cce4229d6e1932fcac1dbfc3c3f57d942a3c56bf34063013dbfc"),
    hex!("568f289f6bbc685a0650b1002ef94befa1e5f95aecf199c8453adc3265f9583b7f8787eafb285478ad7e680c6027b7f8"),
    hex!("ad1e513ed778d0b40ca162005df297df43cbf2b5d9e333908a75b864cbf2b076ff0f0fd5f650a8f15afcd018c04f6ff0"),
    hex!("5a3ca27daef1a1681942c400bbe52fbe8797e56bb3c6672114eb70c997e560eefe1e1faceca151e2b5f9a030809edfe1"),
    hex!("b47944fb5de342d03285880177ca5f7d0f2fcad7678cce4229d6e1932fcac1ddfc3c3f59d942a3c56bf34061013dbfc2"),
    hex!("68f289f6bbc685a0650b1002ef94befa1e5f95aecf199c8453adc3265f9583bcf8787eb4b285478ad7e680c1027b7f85"),
    hex!("d1e513ed778d0b40ca162005df297df43cbf2b5d9e333908a75b864cbf2b0779f0f0fd69650a8f15afcd018204f6ff0a"),
    hex!("a3ca27daef1a1681942c400bbe52fbe8797e56bb3c6672114eb70c997e560ef4e1e1fad3ca151e2b5f9a030309edfe15"),
    hex!("47944fb5de342d03285880177ca5f7d0f2fcad7678cce4229d6e1932fcac1deac3c3f5a8942a3c56bf34060513dbfc2b"),
    hex!("8f289f6bbc685a0650b1002ef94befa1e5f95aecf199c8453adc3265f9583bd58787eb51285478ad7e680c0a27b7f856"),
    hex!("1e513ed778d0b40ca162005df297df43cbf2b5d9e333908a75b864cbf2b077ac0f0fd6a350a8f15afcd018134f6ff0ad"),
    hex!("3ca27daef1a1681942c400bbe52fbe8797e56bb3c6672114eb70c997e560ef581e1fad46a151e2b5f9a030269edfe15a"),
    hex!("7944fb5de342d03285880177ca5f7d0f2fcad7678cce4229d6e1932fcac1deb03c3f5a8d42a3c56bf340604d3dbfc2b4"),
    hex!("f289f6bbc685a0650b1002ef94befa1e5f95aecf199c8453adc3265f9583bd60787eb51a85478ad7e680c09a7b7f8568"),
    hex!("e513ed778d0b40ca162005df297df43cbf2b5d9e333908a75b864cbf2b077ac1f0fd6a360a8f15afcd018133f6ff0ad1"),
    hex!("ca27daef1a1681942c400bbe52fbe8797e56bb3c6672114eb70c997e560ef584e1fad46d151e2b5f9a030266edfe15a3"),
];

/// Montgomery form of 2.
pub const TWO_MONT: Elem = Elem::from_be_hex(
    "000000000000000000000000000000000000000000000000000000000000000200000001fffffffffffffffe00000002",
);

/// Montgomery form of 1/2, i.e. `2^383`.
pub const HALF_MONT: Elem = Elem::from_be_hex(
    "800000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
);

/// Plain representation of 1/2 mod q, i.e. `(q + 1) / 2`.
pub const HALF: FieldBytes =
    hex!("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7fffffff800000000000000080000000");
