//! Conversion options.

/// Which code points to use for a vowel carrying only an acute accent
/// (optionally with diaeresis).
///
/// Unicode has two canonically equivalent sets: the monotonic "tonos"
/// letters in U+0386..U+03CE and the polytonic "oxia" letters in
/// U+1F71..U+1FFB. Fonts sometimes draw them differently, so the choice
/// is left to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AcuteForm {
    /// U+1F71 GREEK SMALL LETTER ALPHA WITH OXIA and friends.
    #[default]
    Oxia,
    /// U+03AC GREEK SMALL LETTER ALPHA WITH TONOS and friends.
    Tonos,
}

/// Options for the Beta Code to Greek direction.
///
/// The plain conversion functions always use `Options::default()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Options {
    pub acute: AcuteForm,
}

impl Options {
    /// Options selecting the monotonic tonos letters.
    pub fn tonos() -> Self {
        Self {
            acute: AcuteForm::Tonos,
        }
    }
}
