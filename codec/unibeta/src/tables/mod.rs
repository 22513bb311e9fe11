//! Static lookup tables.
//!
//! - [`ascii_to_greek`]: unmarked Beta Code letters and punctuation.
//! - [`beta_mark`]: the combining-mark alphabet.
//! - [`precomposed`]: (marks, letter) to a single precomposed code point.
//! - [`reverse_03xx`] / [`reverse_1fxx`]: Greek code points back to Beta Code.
//!
//! All tables are read-only process-wide data. The precomposed map is built
//! once on first use; everything else is a compile-time constant.

mod precomposed;
mod reverse;

pub use precomposed::{
    precomposed, precomposed_column, precomposed_rules, PrecomposedRule, PRECOMPOSABLE_LETTERS,
};
pub use reverse::{reverse_03xx, reverse_1fxx, ReverseEntry};

/// Beta Code letters and the Greek lowercase letter each one stands for.
///
/// Capitals sit 0x20 below their lowercase letter, except digamma.
const LETTERS: [(u8, u32); 25] = [
    (b'a', 0x03B1), // alpha
    (b'b', 0x03B2), // beta
    (b'g', 0x03B3), // gamma
    (b'd', 0x03B4), // delta
    (b'e', 0x03B5), // epsilon
    (b'z', 0x03B6), // zeta
    (b'h', 0x03B7), // eta
    (b'q', 0x03B8), // theta
    (b'i', 0x03B9), // iota
    (b'k', 0x03BA), // kappa
    (b'l', 0x03BB), // lambda
    (b'm', 0x03BC), // mu
    (b'n', 0x03BD), // nu
    (b'c', 0x03BE), // xi
    (b'o', 0x03BF), // omicron
    (b'p', 0x03C0), // pi
    (b'r', 0x03C1), // rho
    (b's', 0x03C3), // sigma
    (b't', 0x03C4), // tau
    (b'u', 0x03C5), // upsilon
    (b'f', 0x03C6), // phi
    (b'x', 0x03C7), // chi
    (b'y', 0x03C8), // psi
    (b'w', 0x03C9), // omega
    (b'v', 0x03DD), // digamma
];

/// Beta Code punctuation with a dedicated Greek or typographic code point.
const PUNCTUATION: [(u8, u32); 8] = [
    (b':', 0x00B7),  // ano teleia (middle dot)
    (b';', 0x037E),  // Greek question mark
    (b'\'', 0x2019), // apostrophe
    (b'-', 0x2010),  // hyphen
    (b'_', 0x2014),  // em dash
    (b'#', 0x0374),  // numeral sign (keraia)
    (b'<', 0x2039),  // single left-pointing angle quotation mark
    (b'>', 0x203A),  // single right-pointing angle quotation mark
];

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop index is below 128"
)]
const fn build_ascii_to_greek() -> [u32; 128] {
    let mut table = [0u32; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = i as u32;
        i += 1;
    }
    let mut i = 0;
    while i < LETTERS.len() {
        let (beta, small) = LETTERS[i];
        table[beta as usize] = small;
        let capital = if small == 0x03DD { 0x03DC } else { small - 0x20 };
        table[beta.to_ascii_uppercase() as usize] = capital;
        i += 1;
    }
    let mut i = 0;
    while i < PUNCTUATION.len() {
        let (beta, codepoint) = PUNCTUATION[i];
        table[beta as usize] = codepoint;
        i += 1;
    }
    table
}

/// Unmarked Beta Code byte to Greek code point, indexed by ASCII value.
///
/// Bytes with no Greek counterpart map to themselves.
static ASCII_TO_GREEK: [u32; 128] = build_ascii_to_greek();

/// Greek code point for an unmarked Beta Code byte.
///
/// Lowercase letters give small letters, uppercase give capitals. Non-ASCII
/// bytes are returned unchanged.
#[inline]
pub fn ascii_to_greek(byte: u8) -> u32 {
    ASCII_TO_GREEK
        .get(usize::from(byte))
        .copied()
        .unwrap_or(u32::from(byte))
}

/// Combining code point for a Beta Code mark character.
///
/// `)` is smooth breathing and `(` rough breathing.
#[inline]
pub const fn beta_mark(byte: u8) -> Option<u32> {
    match byte {
        b')' => Some(0x0313),
        b'(' => Some(0x0314),
        b'/' => Some(0x0301),
        b'\\' => Some(0x0300),
        b'=' => Some(0x0342),
        b'+' => Some(0x0308),
        b'|' => Some(0x0345),
        _ => None,
    }
}
