//! Combining-mark flag set.
//!
//! A Beta Code letter carries at most one mark of each kind. The marks are
//! stored as a 7-bit set rather than a list, so a repeated mark (`a//`)
//! coalesces into one. The set's bits double as the row key of the
//! precomposed lookup in [`crate::tables`].

use bitflags::bitflags;

use crate::tables;

bitflags! {
    /// Breathing, accent, diaeresis and iota-subscript marks on one letter.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CombiningMarks: u8 {
        /// Smooth breathing, Beta Code `)`, U+0313.
        const PSILI = 0x40;
        /// Rough breathing, Beta Code `(`, U+0314.
        const DASIA = 0x20;
        /// Grave accent, Beta Code `\`, U+0300.
        const VARIA = 0x10;
        /// Acute accent, Beta Code `/`, U+0301.
        const OXIA = 0x08;
        /// Circumflex, Beta Code `=`, U+0342.
        const PERISPOMENI = 0x04;
        /// Diaeresis, Beta Code `+`, U+0308.
        const DIALYTIKA = 0x02;
        /// Iota subscript, Beta Code `|`, U+0345.
        const YPOGEGRAMMENI = 0x01;
    }
}

/// Order in which marks follow a base letter when no precomposed form exists.
const DECOMPOSED_ORDER: [CombiningMarks; 7] = [
    CombiningMarks::DIALYTIKA,
    CombiningMarks::PSILI,
    CombiningMarks::DASIA,
    CombiningMarks::VARIA,
    CombiningMarks::OXIA,
    CombiningMarks::PERISPOMENI,
    CombiningMarks::YPOGEGRAMMENI,
];

/// Each flag with its Unicode combining code point.
const MARK_CODEPOINTS: [(CombiningMarks, u32); 7] = [
    (CombiningMarks::PSILI, 0x0313),
    (CombiningMarks::DASIA, 0x0314),
    (CombiningMarks::VARIA, 0x0300),
    (CombiningMarks::OXIA, 0x0301),
    (CombiningMarks::PERISPOMENI, 0x0342),
    (CombiningMarks::DIALYTIKA, 0x0308),
    (CombiningMarks::YPOGEGRAMMENI, 0x0345),
];

/// Capital-letter form of the iota subscript (prosgegrammeni).
pub const PROSGEGRAMMENI: u32 = 0x1FBE;

impl CombiningMarks {
    /// Flag for a Unicode combining code point, empty if it is not one of
    /// the seven Greek marks.
    pub fn from_combining(codepoint: u32) -> Self {
        MARK_CODEPOINTS
            .iter()
            .find(|&&(_, cp)| cp == codepoint)
            .map_or(Self::empty(), |&(mark, _)| mark)
    }

    /// Flag for a Beta Code mark character, `None` for any other byte.
    pub fn from_beta(byte: u8) -> Option<Self> {
        tables::beta_mark(byte).map(Self::from_combining)
    }

    /// Combining code point of a single flag.
    ///
    /// Returns `None` for the empty set or a set of more than one flag.
    pub fn combining_codepoint(self) -> Option<u32> {
        MARK_CODEPOINTS
            .iter()
            .find(|&&(mark, _)| mark == self)
            .map(|&(_, cp)| cp)
    }

    /// The individual flags of this set, in decomposed emission order:
    /// diaeresis, smooth, rough, grave, acute, circumflex, subscript.
    pub fn decomposed(self) -> impl Iterator<Item = CombiningMarks> {
        DECOMPOSED_ORDER
            .into_iter()
            .filter(move |mark| self.contains(*mark))
    }

    /// Code points to append after a base letter, in decomposed order.
    ///
    /// The iota subscript becomes U+1FBE (prosgegrammeni) after a capital.
    pub fn decomposed_codepoints(self, capital: bool) -> impl Iterator<Item = u32> {
        self.decomposed().filter_map(move |mark| {
            if capital && mark == Self::YPOGEGRAMMENI {
                Some(PROSGEGRAMMENI)
            } else {
                mark.combining_codepoint()
            }
        })
    }
}
