//! UTF-8 Greek to Beta Code.
//!
//! The input is decoded one scalar at a time and each scalar is spelled
//! by Unicode range: ASCII is copied, the Greek and Greek Extended blocks
//! go through the reverse tables, a handful of punctuation marks have
//! fixed spellings, and everything else becomes a `{\uXXXX}` escape.
//!
//! An escape is only written with at least ten bytes of room left.
//! Otherwise the scalar is dropped and conversion carries on, so shorter
//! spellings after it can still fit. The result is then reported as
//! truncated, since a larger buffer would have kept the escape.
//!
//! # Sigma
//!
//! Small sigma is first written with its explicit digit (`s1` medial,
//! `s2` final) and the digit's position is remembered. When the next
//! spelling is known, the digit is dropped if a bare `s` would read back
//! as the same form: a medial sigma before a Greek letter, or a final
//! sigma before anything that is not a letter. A final sigma at the end
//! of the input also loses its digit. Lunate sigma always keeps `s3`.

use smallvec::SmallVec;
use tracing::{debug, trace};
use unibeta_core::utf8::{self, Decoded};
use unibeta_core::Cursor;

use crate::scanner::SigmaForm;
use crate::sink::Sink;
use crate::tables::{self, ReverseEntry};
use crate::Progress;

/// Stands in for a byte that cannot start a sequence.
const REPLACEMENT: u32 = 0xFFFD;

/// Room an escape needs before it is attempted.
const ESCAPE_HEADROOM: usize = 10;

/// Hex digits in an escape, beyond which the scalar needs more.
const ESCAPE_MIN_DIGITS: u32 = 4;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Beta Code for one scalar. The longest table spelling is `*)/a|`; an
/// escape is eight bytes, up to ten above U+FFFF.
type Spelled = SmallVec<[u8; 12]>;

/// How one scalar is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Spelling {
    Ascii(u8),
    Beta { text: &'static str, letter: bool },
    Escape(u32),
}

fn spell(scalar: u32) -> Spelling {
    let fixed = |text| Spelling::Beta {
        text,
        letter: false,
    };
    match scalar {
        0..=0x7E => u8::try_from(scalar).map_or(Spelling::Escape(scalar), Spelling::Ascii),
        0x0300..=0x03FF => from_table(tables::reverse_03xx(scalar), scalar),
        0x1F00..=0x1FFF => from_table(tables::reverse_1fxx(scalar), scalar),
        0x00AB | 0x00BB => fixed("\""),
        0x00B7 => fixed(":"),
        0x02BC | 0x2019 => fixed("'"),
        0x2010 => fixed("-"),
        0x2014 => fixed("_"),
        0x2039 => fixed("<"),
        0x203A => fixed(">"),
        _ => Spelling::Escape(scalar),
    }
}

fn from_table(entry: Option<&'static ReverseEntry>, scalar: u32) -> Spelling {
    match entry {
        Some(entry) if entry.is_mapped() => Spelling::Beta {
            text: entry.beta,
            letter: entry.letter,
        },
        _ => Spelling::Escape(scalar),
    }
}

/// Writes the spelling into `buf` and returns whether it is a letter.
fn render(spelling: Spelling, buf: &mut Spelled) -> bool {
    match spelling {
        Spelling::Ascii(byte) => buf.push(byte),
        Spelling::Beta { text, letter } => {
            buf.extend_from_slice(text.as_bytes());
            return letter;
        }
        Spelling::Escape(scalar) => {
            let significant = (u32::BITS - scalar.leading_zeros()).div_ceil(4);
            buf.extend_from_slice(b"{\\u");
            for digit in (0..significant.max(ESCAPE_MIN_DIGITS)).rev() {
                buf.push(HEX_DIGITS[((scalar >> (digit * 4)) & 0xF) as usize]);
            }
            buf.push(b'}');
        }
    }
    false
}

/// A sigma digit written but not yet known to be needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingSigma {
    /// Output offset of the digit.
    marker: usize,
    form: SigmaForm,
}

impl PendingSigma {
    /// Pending state after writing `scalar`, whose spelling ended at `end`.
    fn after(scalar: u32, end: usize) -> Option<Self> {
        let form = match scalar {
            0x03C3 => SigmaForm::Medial,
            0x03C2 => SigmaForm::Final,
            _ => return None,
        };
        Some(PendingSigma {
            marker: end.checked_sub(1)?,
            form,
        })
    }

    /// Whether a bare `s` followed by `next` reads back as this form.
    fn collapses_before(self, next: &[u8], letter: bool) -> bool {
        let Some(&first) = next.first() else {
            return false;
        };
        if SigmaForm::from_digit(first).is_some() {
            return false;
        }
        match self.form {
            SigmaForm::Medial => letter && SigmaForm::infer(first) == SigmaForm::Medial,
            SigmaForm::Final => !letter && SigmaForm::infer(first) == SigmaForm::Final,
            SigmaForm::Lunate => false,
        }
    }
}

/// Converts UTF-8 Greek `input` into Beta Code, writing to `out`.
///
/// Input ends at its first NUL. Conversion stops early, with
/// [`Progress::truncated`] set, at the first spelling `out` cannot hold.
/// An escape without ten bytes of room is dropped instead, and also
/// marks the result truncated.
#[tracing::instrument(level = "trace", skip_all, fields(input_len = input.len()))]
pub fn convert<S: Sink + ?Sized>(input: &[u8], out: &mut S) -> Progress {
    let mut cursor = Cursor::new(input);
    let mut pending: Option<PendingSigma> = None;
    let mut spelled = Spelled::new();
    let mut consumed = 0;
    let mut dropped = false;

    while !cursor.is_eof() {
        let start = cursor.pos();
        // The decoder reads a lone continuation byte as a one-byte
        // sequence, which would copy its low bits out as ASCII.
        let (scalar, len) = if cursor.current().leading_ones() == 1 {
            (REPLACEMENT, 1)
        } else {
            match utf8::decode(cursor.rest()) {
                Decoded::Scalar { value, len } => (value, len),
                Decoded::Malformed => (REPLACEMENT, 1),
            }
        };
        cursor.advance_n(len);
        let end = cursor.pos().min(cursor.source_len());

        let spelling = spell(scalar);
        spelled.clear();
        let letter = render(spelling, &mut spelled);

        if let Spelling::Escape(scalar) = spelling {
            let needed = ESCAPE_HEADROOM.max(spelled.len() + 1);
            if out.headroom().is_some_and(|room| room < needed) {
                debug!(
                    at = start,
                    scalar,
                    written = out.len(),
                    "no room for escape, dropping scalar"
                );
                dropped = true;
                consumed = end;
                continue;
            }
            debug!(at = start, scalar, "escaping scalar");
        }

        let collapsed = pending.filter(|sigma| sigma.collapses_before(&spelled, letter));
        if let Some(sigma) = collapsed {
            trace!(form = ?sigma.form, "dropping sigma digit");
            out.truncate(sigma.marker);
        }
        if !out.try_push(&spelled) {
            if let Some(sigma) = collapsed {
                // The digit occupied this slot a moment ago, so it fits again.
                let restored = out.try_push(&[sigma.form.digit()]);
                debug_assert!(restored);
            }
            debug!(
                at = start,
                needed = spelled.len(),
                written = out.len(),
                "output full, truncating"
            );
            return Progress {
                consumed,
                truncated: true,
            };
        }

        pending = PendingSigma::after(scalar, out.len());
        consumed = end;
    }

    if let Some(sigma) = pending.filter(|sigma| sigma.form == SigmaForm::Final) {
        trace!("final sigma at end of input");
        out.truncate(sigma.marker);
    }

    Progress {
        consumed,
        truncated: dropped,
    }
}
