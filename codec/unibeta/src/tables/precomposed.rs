//! Precomposed polytonic letters.
//!
//! Sixteen letters (the seven vowels and rho, in both cases) have
//! precomposed code points for some combinations of marks. The table is
//! sparse: of the 128 x 16 possible (marks, letter) pairs only a couple of
//! hundred exist. It is stored as a static rule list and turned into a
//! hash map keyed by the packed pair on first use.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

use crate::marks::CombiningMarks;
use crate::options::AcuteForm;

/// Letters that admit precomposed forms, in lookup column order.
pub const PRECOMPOSABLE_LETTERS: [u8; 16] = *b"AEHIORUWaehioruw";

/// One precomposed code point and the (letter, marks) pair it encodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrecomposedRule {
    /// ASCII Beta Code letter; uppercase for capitals.
    pub letter: u8,
    pub marks: CombiningMarks,
    pub codepoint: u32,
}

/// Column of `letter` in the lookup, `None` if it never precomposes.
pub fn precomposed_column(letter: u8) -> Option<u8> {
    PRECOMPOSABLE_LETTERS
        .iter()
        .position(|&l| l == letter)
        .and_then(|i| u8::try_from(i).ok())
}

/// Packed (marks, column) pair: marks in the high bits, column in the low four.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct PrecomposedKey(u16);

impl PrecomposedKey {
    fn new(marks: CombiningMarks, column: u8) -> Self {
        Self((u16::from(marks.bits()) << 4) | u16::from(column & 0x0F))
    }
}

/// Rules for both acute styles; the tonos map is the oxia map with the
/// acute-only (and diaeresis + acute) entries replaced.
struct PrecomposedMap {
    oxia: FxHashMap<PrecomposedKey, u32>,
    tonos: FxHashMap<PrecomposedKey, u32>,
}

impl PrecomposedMap {
    fn new() -> Self {
        Self {
            oxia: Self::build(AcuteForm::Oxia),
            tonos: Self::build(AcuteForm::Tonos),
        }
    }

    fn build(form: AcuteForm) -> FxHashMap<PrecomposedKey, u32> {
        let mut map = FxHashMap::default();
        for rule in precomposed_rules(form) {
            if let Some(column) = precomposed_column(rule.letter) {
                map.insert(PrecomposedKey::new(rule.marks, column), rule.codepoint);
            }
        }
        map
    }

    fn lookup(&self, key: PrecomposedKey, form: AcuteForm) -> Option<u32> {
        let map = match form {
            AcuteForm::Oxia => &self.oxia,
            AcuteForm::Tonos => &self.tonos,
        };
        map.get(&key).copied()
    }
}

static GLOBAL_PRECOMPOSED: OnceLock<PrecomposedMap> = OnceLock::new();

fn global_precomposed() -> &'static PrecomposedMap {
    GLOBAL_PRECOMPOSED.get_or_init(PrecomposedMap::new)
}

/// Precomposed code point for `letter` carrying `marks`.
///
/// Returns `None` when the letter never precomposes, when `marks` is
/// empty, or when Unicode has no single code point for the combination.
pub fn precomposed(letter: u8, marks: CombiningMarks, form: AcuteForm) -> Option<u32> {
    if marks.is_empty() {
        return None;
    }
    let column = precomposed_column(letter)?;
    global_precomposed().lookup(PrecomposedKey::new(marks, column), form)
}

/// Every precomposed rule for the given acute style.
pub fn precomposed_rules(form: AcuteForm) -> impl Iterator<Item = PrecomposedRule> {
    let overrides: &'static [(u8, u8, u32)] = match form {
        AcuteForm::Oxia => &[],
        AcuteForm::Tonos => TONOS_RULES,
    };
    let base = OXIA_RULES.iter().filter(move |&&(bits, letter, _)| {
        !overrides
            .iter()
            .any(|&(o_bits, o_letter, _)| o_bits == bits && o_letter == letter)
    });
    overrides
        .iter()
        .chain(base)
        .map(|&(bits, letter, codepoint)| PrecomposedRule {
            letter,
            marks: CombiningMarks::from_bits_truncate(bits),
            codepoint,
        })
}

// (marks bits, letter, code point). The comment is the Beta Code spelling.
// Mark bits: ) 0x40, ( 0x20, \ 0x10, / 0x08, = 0x04, + 0x02, | 0x01.
static OXIA_RULES: &[(u8, u8, u32)] = &[
    (0x01, b'A', 0x1FBC), // *|a
    (0x01, b'H', 0x1FCC), // *|h
    (0x01, b'W', 0x1FFC), // *|w
    (0x01, b'a', 0x1FB3), // a|
    (0x01, b'h', 0x1FC3), // h|
    (0x01, b'w', 0x1FF3), // w|
    (0x02, b'I', 0x03AA), // *+i
    (0x02, b'U', 0x03AB), // *+u
    (0x02, b'i', 0x03CA), // i+
    (0x02, b'u', 0x03CB), // u+
    (0x04, b'a', 0x1FB6), // a=
    (0x04, b'h', 0x1FC6), // h=
    (0x04, b'i', 0x1FD6), // i=
    (0x04, b'u', 0x1FE6), // u=
    (0x04, b'w', 0x1FF6), // w=
    (0x05, b'a', 0x1FB7), // a=|
    (0x05, b'h', 0x1FC7), // h=|
    (0x05, b'w', 0x1FF7), // w=|
    (0x06, b'i', 0x1FD7), // i+=
    (0x06, b'u', 0x1FE7), // u+=
    (0x08, b'A', 0x1FBB), // */a
    (0x08, b'E', 0x1FC9), // */e
    (0x08, b'H', 0x1FCB), // */h
    (0x08, b'I', 0x1FDB), // */i
    (0x08, b'O', 0x1FF9), // */o
    (0x08, b'U', 0x1FEB), // */u
    (0x08, b'W', 0x1FFB), // */w
    (0x08, b'a', 0x1F71), // a/
    (0x08, b'e', 0x1F73), // e/
    (0x08, b'h', 0x1F75), // h/
    (0x08, b'i', 0x1F77), // i/
    (0x08, b'o', 0x1F79), // o/
    (0x08, b'u', 0x1F7B), // u/
    (0x08, b'w', 0x1F7D), // w/
    (0x09, b'a', 0x1FB4), // a/|
    (0x09, b'h', 0x1FC4), // h/|
    (0x09, b'w', 0x1FF4), // w/|
    (0x0a, b'i', 0x1FD3), // i+/
    (0x0a, b'u', 0x1FE3), // u+/
    (0x10, b'A', 0x1FBA), // *\a
    (0x10, b'E', 0x1FC8), // *\e
    (0x10, b'H', 0x1FCA), // *\h
    (0x10, b'I', 0x1FDA), // *\i
    (0x10, b'O', 0x1FF8), // *\o
    (0x10, b'U', 0x1FEA), // *\u
    (0x10, b'W', 0x1FFA), // *\w
    (0x10, b'a', 0x1F70), // a\
    (0x10, b'e', 0x1F72), // e\
    (0x10, b'h', 0x1F74), // h\
    (0x10, b'i', 0x1F76), // i\
    (0x10, b'o', 0x1F78), // o\
    (0x10, b'u', 0x1F7A), // u\
    (0x10, b'w', 0x1F7C), // w\
    (0x11, b'a', 0x1FB2), // a\|
    (0x11, b'h', 0x1FC2), // h\|
    (0x11, b'w', 0x1FF2), // w\|
    (0x12, b'i', 0x1FD2), // i+\
    (0x12, b'u', 0x1FE2), // u+\
    (0x20, b'A', 0x1F09), // *(a
    (0x20, b'E', 0x1F19), // *(e
    (0x20, b'H', 0x1F29), // *(h
    (0x20, b'I', 0x1F39), // *(i
    (0x20, b'O', 0x1F49), // *(o
    (0x20, b'R', 0x1FEC), // *(r
    (0x20, b'U', 0x1F59), // *(u
    (0x20, b'W', 0x1F69), // *(w
    (0x20, b'a', 0x1F01), // a(
    (0x20, b'e', 0x1F11), // e(
    (0x20, b'h', 0x1F21), // h(
    (0x20, b'i', 0x1F31), // i(
    (0x20, b'o', 0x1F41), // o(
    (0x20, b'r', 0x1FE5), // r(
    (0x20, b'u', 0x1F51), // u(
    (0x20, b'w', 0x1F61), // w(
    (0x21, b'A', 0x1F89), // *(|a
    (0x21, b'H', 0x1F99), // *(|h
    (0x21, b'W', 0x1FA9), // *(|w
    (0x21, b'a', 0x1F81), // a(|
    (0x21, b'h', 0x1F91), // h(|
    (0x21, b'w', 0x1FA1), // w(|
    (0x24, b'A', 0x1F0F), // *(=a
    (0x24, b'H', 0x1F2F), // *(=h
    (0x24, b'I', 0x1F3F), // *(=i
    (0x24, b'U', 0x1F5F), // *(=u
    (0x24, b'W', 0x1F6F), // *(=w
    (0x24, b'a', 0x1F07), // a(=
    (0x24, b'h', 0x1F27), // h(=
    (0x24, b'i', 0x1F37), // i(=
    (0x24, b'u', 0x1F57), // u(=
    (0x24, b'w', 0x1F67), // w(=
    (0x25, b'A', 0x1F8F), // *(=|a
    (0x25, b'H', 0x1F9F), // *(=|h
    (0x25, b'W', 0x1FAF), // *(=|w
    (0x25, b'a', 0x1F87), // a(=|
    (0x25, b'h', 0x1F97), // h(=|
    (0x25, b'w', 0x1FA7), // w(=|
    (0x28, b'A', 0x1F0D), // *(/a
    (0x28, b'E', 0x1F1D), // *(/e
    (0x28, b'H', 0x1F2D), // *(/h
    (0x28, b'I', 0x1F3D), // *(/i
    (0x28, b'O', 0x1F4D), // *(/o
    (0x28, b'U', 0x1F5D), // *(/u
    (0x28, b'W', 0x1F6D), // *(/w
    (0x28, b'a', 0x1F05), // a(/
    (0x28, b'e', 0x1F15), // e(/
    (0x28, b'h', 0x1F25), // h(/
    (0x28, b'i', 0x1F35), // i(/
    (0x28, b'o', 0x1F45), // o(/
    (0x28, b'u', 0x1F55), // u(/
    (0x28, b'w', 0x1F65), // w(/
    (0x29, b'A', 0x1F8D), // *(/|a
    (0x29, b'H', 0x1F9D), // *(/|h
    (0x29, b'W', 0x1FAD), // *(/|w
    (0x29, b'a', 0x1F85), // a(/|
    (0x29, b'h', 0x1F95), // h(/|
    (0x29, b'w', 0x1FA5), // w(/|
    (0x30, b'A', 0x1F0B), // *(\a
    (0x30, b'E', 0x1F1B), // *(\e
    (0x30, b'H', 0x1F2B), // *(\h
    (0x30, b'I', 0x1F3B), // *(\i
    (0x30, b'O', 0x1F4B), // *(\o
    (0x30, b'U', 0x1F5B), // *(\u
    (0x30, b'W', 0x1F6B), // *(\w
    (0x30, b'a', 0x1F03), // a(\
    (0x30, b'e', 0x1F13), // e(\
    (0x30, b'h', 0x1F23), // h(\
    (0x30, b'i', 0x1F33), // i(\
    (0x30, b'o', 0x1F43), // o(\
    (0x30, b'u', 0x1F53), // u(\
    (0x30, b'w', 0x1F63), // w(\
    (0x31, b'A', 0x1F8B), // *(\|a
    (0x31, b'H', 0x1F9B), // *(\|h
    (0x31, b'W', 0x1FAB), // *(\|w
    (0x31, b'a', 0x1F83), // a(\|
    (0x31, b'h', 0x1F93), // h(\|
    (0x31, b'w', 0x1FA3), // w(\|
    (0x40, b'A', 0x1F08), // *)a
    (0x40, b'E', 0x1F18), // *)e
    (0x40, b'H', 0x1F28), // *)h
    (0x40, b'I', 0x1F38), // *)i
    (0x40, b'O', 0x1F48), // *)o
    (0x40, b'W', 0x1F68), // *)w
    (0x40, b'a', 0x1F00), // a)
    (0x40, b'e', 0x1F10), // e)
    (0x40, b'h', 0x1F20), // h)
    (0x40, b'i', 0x1F30), // i)
    (0x40, b'o', 0x1F40), // o)
    (0x40, b'r', 0x1FE4), // r)
    (0x40, b'u', 0x1F50), // u)
    (0x40, b'w', 0x1F60), // w)
    (0x41, b'A', 0x1F88), // *)|a
    (0x41, b'H', 0x1F98), // *)|h
    (0x41, b'W', 0x1FA8), // *)|w
    (0x41, b'a', 0x1F80), // a)|
    (0x41, b'h', 0x1F90), // h)|
    (0x41, b'w', 0x1FA0), // w)|
    (0x44, b'A', 0x1F0E), // *)=a
    (0x44, b'H', 0x1F2E), // *)=h
    (0x44, b'I', 0x1F3E), // *)=i
    (0x44, b'W', 0x1F6E), // *)=w
    (0x44, b'a', 0x1F06), // a)=
    (0x44, b'h', 0x1F26), // h)=
    (0x44, b'i', 0x1F36), // i)=
    (0x44, b'u', 0x1F56), // u)=
    (0x44, b'w', 0x1F66), // w)=
    (0x45, b'A', 0x1F8E), // *)=|a
    (0x45, b'H', 0x1F9E), // *)=|h
    (0x45, b'W', 0x1FAE), // *)=|w
    (0x45, b'a', 0x1F86), // a)=|
    (0x45, b'h', 0x1F96), // h)=|
    (0x45, b'w', 0x1FA6), // w)=|
    (0x48, b'A', 0x1F0C), // *)/a
    (0x48, b'E', 0x1F1C), // *)/e
    (0x48, b'H', 0x1F2C), // *)/h
    (0x48, b'I', 0x1F3C), // *)/i
    (0x48, b'O', 0x1F4C), // *)/o
    (0x48, b'W', 0x1F6C), // *)/w
    (0x48, b'a', 0x1F04), // a)/
    (0x48, b'e', 0x1F14), // e)/
    (0x48, b'h', 0x1F24), // h)/
    (0x48, b'i', 0x1F34), // i)/
    (0x48, b'o', 0x1F44), // o)/
    (0x48, b'u', 0x1F54), // u)/
    (0x48, b'w', 0x1F64), // w)/
    (0x49, b'A', 0x1F8C), // *)/|a
    (0x49, b'H', 0x1F9C), // *)/|h
    (0x49, b'W', 0x1FAC), // *)/|w
    (0x49, b'a', 0x1F84), // a)/|
    (0x49, b'h', 0x1F94), // h)/|
    (0x49, b'w', 0x1FA4), // w)/|
    (0x50, b'A', 0x1F0A), // *)\a
    (0x50, b'E', 0x1F1A), // *)\e
    (0x50, b'H', 0x1F2A), // *)\h
    (0x50, b'I', 0x1F3A), // *)\i
    (0x50, b'O', 0x1F4A), // *)\o
    (0x50, b'W', 0x1F6A), // *)\w
    (0x50, b'a', 0x1F02), // a)\
    (0x50, b'e', 0x1F12), // e)\
    (0x50, b'h', 0x1F22), // h)\
    (0x50, b'i', 0x1F32), // i)\
    (0x50, b'o', 0x1F42), // o)\
    (0x50, b'u', 0x1F52), // u)\
    (0x50, b'w', 0x1F62), // w)\
    (0x51, b'A', 0x1F8A), // *)\|a
    (0x51, b'H', 0x1F9A), // *)\|h
    (0x51, b'W', 0x1FAA), // *)\|w
    (0x51, b'a', 0x1F82), // a)\|
    (0x51, b'h', 0x1F92), // h)\|
    (0x51, b'w', 0x1FA2), // w)\|
];

static TONOS_RULES: &[(u8, u8, u32)] = &[
    (0x08, b'A', 0x0386), // */a
    (0x08, b'E', 0x0388), // */e
    (0x08, b'H', 0x0389), // */h
    (0x08, b'I', 0x038A), // */i
    (0x08, b'O', 0x038C), // */o
    (0x08, b'U', 0x038E), // */u
    (0x08, b'W', 0x038F), // */w
    (0x08, b'a', 0x03AC), // a/
    (0x08, b'e', 0x03AD), // e/
    (0x08, b'h', 0x03AE), // h/
    (0x08, b'i', 0x03AF), // i/
    (0x08, b'o', 0x03CC), // o/
    (0x08, b'u', 0x03CD), // u/
    (0x08, b'w', 0x03CE), // w/
    (0x0a, b'i', 0x0390), // i+/
    (0x0a, b'u', 0x03B0), // u+/
];
