//! Beta Code token scanner.
//!
//! Splits Beta Code input into tokens, one Greek letter (with all of its
//! marks) or one other character per token. The scanner carries no state
//! between tokens beyond its cursor position; the sigma rule needs only
//! one byte of lookahead.
//!
//! # Token shapes
//!
//! - `*` marks... letter `|`?: a capital. Marks come between the asterisk
//!   and the letter; only the iota subscript may follow it.
//! - letter marks...: a small letter. Uppercase ASCII without `*` is read
//!   as small.
//! - `s` digit?: small sigma, see [`SigmaForm`]. Marks after a small sigma
//!   are not part of the token.
//! - `"`: a quotation mark, resolved to open/close by the converter.
//! - any other ASCII byte: itself.
//! - a non-ASCII lead byte: the whole UTF-8 sequence, passed through.

use unibeta_core::utf8::sequence_len;
use unibeta_core::Cursor;

use crate::marks::CombiningMarks;

/// Which of the three small sigma letters a Beta Code `s` stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SigmaForm {
    /// σ, explicit `s1`.
    Medial,
    /// ς, explicit `s2`.
    Final,
    /// ϲ, explicit `s3`.
    Lunate,
}

impl SigmaForm {
    /// Form selected by an explicit digit after `s`.
    pub fn from_digit(byte: u8) -> Option<Self> {
        match byte {
            b'1' => Some(SigmaForm::Medial),
            b'2' => Some(SigmaForm::Final),
            b'3' => Some(SigmaForm::Lunate),
            _ => None,
        }
    }

    /// Form of a bare `s` given the byte after it.
    ///
    /// Medial before a letter or an apostrophe (elision), final otherwise.
    /// End of input reads as `0x00` and so gives the final form.
    pub fn infer(next: u8) -> Self {
        if next == b'\'' || next.is_ascii_alphabetic() {
            SigmaForm::Medial
        } else {
            SigmaForm::Final
        }
    }

    pub fn codepoint(self) -> u32 {
        match self {
            SigmaForm::Medial => 0x03C3,
            SigmaForm::Final => 0x03C2,
            SigmaForm::Lunate => 0x03F2,
        }
    }

    /// The explicit digit spelling this form.
    pub fn digit(self) -> u8 {
        match self {
            SigmaForm::Medial => b'1',
            SigmaForm::Final => b'2',
            SigmaForm::Lunate => b'3',
        }
    }
}

/// Capital sigma, U+03A3.
pub const CAPITAL_SIGMA: u32 = 0x03A3;
/// Capital lunate sigma, U+03F9.
pub const CAPITAL_LUNATE_SIGMA: u32 = 0x03F9;

/// One classified Beta Code token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BetaToken {
    /// A letter other than sigma. `letter` is uppercase ASCII for capitals
    /// and lowercase otherwise.
    Letter { letter: u8, marks: CombiningMarks },
    /// A small sigma.
    Sigma(SigmaForm),
    /// `*s`, or `*s3` for the lunate capital.
    CapitalSigma { lunate: bool, marks: CombiningMarks },
    /// `"`.
    Quote,
    /// Any other single ASCII byte.
    Other(u8),
    /// A non-ASCII UTF-8 sequence, copied through unchanged.
    Passthrough,
}

/// A token together with the source bytes it was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannedToken<'a> {
    pub token: BetaToken,
    /// Byte offset of the token in the input.
    pub start: usize,
    pub source: &'a [u8],
}

impl ScannedToken<'_> {
    /// Offset just past the token.
    pub fn end(&self) -> usize {
        self.start + self.source.len()
    }
}

/// Iterator over the Beta Code tokens of a NUL-terminated input.
#[derive(Clone, Debug)]
pub struct BetaScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> BetaScanner<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        BetaScanner {
            cursor: Cursor::new(input),
        }
    }

    /// Offset of the next unread byte.
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Reads the next token, `None` at end of input.
    pub fn next_token(&mut self) -> Option<ScannedToken<'a>> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let rest = self.cursor.rest();
        let token = match self.cursor.current() {
            b'*' => self.capital(),
            b'"' => {
                self.cursor.advance();
                BetaToken::Quote
            }
            byte if byte.is_ascii_alphabetic() => self.small(byte),
            byte if byte.is_ascii() => {
                self.cursor.advance();
                BetaToken::Other(byte)
            }
            lead => self.passthrough(lead, rest.len()),
        };
        let len = self.cursor.pos() - start;
        Some(ScannedToken {
            token,
            start,
            source: &rest[..len],
        })
    }

    /// `*` marks... letter `|`?
    fn capital(&mut self) -> BetaToken {
        let star = self.cursor;
        self.cursor.advance();
        let mut marks = self.eat_marks();
        let letter = self.cursor.current();
        if !letter.is_ascii_alphabetic() {
            // A stray asterisk; whatever follows starts a new token.
            self.cursor = star;
            self.cursor.advance();
            return BetaToken::Other(b'*');
        }
        self.cursor.advance();
        let letter = letter.to_ascii_uppercase();

        let lunate = letter == b'S' && self.cursor.current() == b'3';
        if lunate {
            self.cursor.advance();
        }
        if self.cursor.current() == b'|' {
            marks |= CombiningMarks::YPOGEGRAMMENI;
            self.cursor.advance();
        }

        if letter == b'S' {
            BetaToken::CapitalSigma { lunate, marks }
        } else {
            BetaToken::Letter { letter, marks }
        }
    }

    /// letter marks..., or `s` with its sigma digit.
    fn small(&mut self, byte: u8) -> BetaToken {
        let letter = byte.to_ascii_lowercase();
        if letter == b's' {
            // The form hangs on the byte after `s`: a digit or the context.
            let next = self.cursor.peek();
            self.cursor.advance();
            return match SigmaForm::from_digit(next) {
                Some(form) => {
                    self.cursor.advance();
                    BetaToken::Sigma(form)
                }
                None => BetaToken::Sigma(SigmaForm::infer(next)),
            };
        }
        self.cursor.advance();
        let marks = self.eat_marks();
        BetaToken::Letter { letter, marks }
    }

    fn eat_marks(&mut self) -> CombiningMarks {
        let mut marks = CombiningMarks::empty();
        while let Some(mark) = CombiningMarks::from_beta(self.cursor.current()) {
            marks |= mark;
            self.cursor.advance();
        }
        marks
    }

    /// Whole UTF-8 sequence, clamped to the input. Bytes that cannot
    /// start a sequence are passed through one at a time.
    fn passthrough(&mut self, lead: u8, available: usize) -> BetaToken {
        let len = sequence_len(lead).unwrap_or(1).min(available);
        self.cursor.advance_n(len);
        tracing::trace!(lead, len, "passing through non-ASCII sequence");
        BetaToken::Passthrough
    }
}

impl<'a> Iterator for BetaScanner<'a> {
    type Item = ScannedToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests;
