//! Beta Code to UTF-8 Greek.
//!
//! Each token from [`BetaScanner`] is rendered into a small scratch
//! buffer, then pushed to the sink as a unit. The first token that does
//! not fit ends the conversion, so the output is always a whole-token
//! prefix of the full result.
//!
//! Letters with marks prefer a single precomposed code point. When Unicode
//! has none for the combination, the Greek base letter is followed by each
//! combining mark in fixed order (see [`CombiningMarks::decomposed`]).

use smallvec::SmallVec;
use tracing::{debug, trace};
use unibeta_core::utf8;

use crate::marks::CombiningMarks;
use crate::options::Options;
use crate::scanner::{BetaScanner, BetaToken, ScannedToken, CAPITAL_LUNATE_SIGMA, CAPITAL_SIGMA};
use crate::sink::Sink;
use crate::tables;
use crate::Progress;

/// Opening guillemet, emitted for the first `"` of each pair.
const OPEN_QUOTE: u32 = 0x00AB;
/// Closing guillemet.
const CLOSE_QUOTE: u32 = 0x00BB;

/// UTF-8 for one token. A letter with all seven marks decomposed needs
/// 2 + 7 * 3 bytes, well within the inline capacity.
type Rendered = SmallVec<[u8; 32]>;

/// Converts Beta Code `input` into UTF-8, writing to `out`.
///
/// Input ends at its first NUL. Conversion stops early, with
/// [`Progress::truncated`] set, at the first token `out` cannot hold.
#[tracing::instrument(level = "trace", skip_all, fields(input_len = input.len()))]
pub fn convert<S: Sink + ?Sized>(input: &[u8], options: Options, out: &mut S) -> Progress {
    let mut quote_open = false;
    let mut rendered = Rendered::new();
    let mut consumed = 0;

    for scanned in BetaScanner::new(input) {
        rendered.clear();
        let quote_after = render(&scanned, options, quote_open, &mut rendered);
        if !out.try_push(&rendered) {
            debug!(
                at = scanned.start,
                needed = rendered.len(),
                written = out.len(),
                "output full, truncating"
            );
            return Progress {
                consumed,
                truncated: true,
            };
        }
        trace!(token = ?scanned.token, bytes = rendered.len(), "emitted");
        quote_open = quote_after;
        consumed = scanned.end();
    }

    Progress {
        consumed,
        truncated: false,
    }
}

/// Renders one token and returns the quotation state after it.
fn render(
    scanned: &ScannedToken<'_>,
    options: Options,
    quote_open: bool,
    buf: &mut Rendered,
) -> bool {
    match scanned.token {
        BetaToken::Quote => {
            push_scalar(buf, if quote_open { CLOSE_QUOTE } else { OPEN_QUOTE });
            return !quote_open;
        }
        BetaToken::Sigma(form) => push_scalar(buf, form.codepoint()),
        BetaToken::CapitalSigma { lunate, marks } => {
            let base = if lunate {
                CAPITAL_LUNATE_SIGMA
            } else {
                CAPITAL_SIGMA
            };
            push_scalar(buf, base);
            push_marks(buf, marks, true);
        }
        BetaToken::Letter { letter, marks } => render_letter(buf, letter, marks, options),
        BetaToken::Other(byte) => push_scalar(buf, tables::ascii_to_greek(byte)),
        BetaToken::Passthrough => buf.extend_from_slice(scanned.source),
    }
    quote_open
}

fn render_letter(buf: &mut Rendered, letter: u8, marks: CombiningMarks, options: Options) {
    if let Some(codepoint) = tables::precomposed(letter, marks, options.acute) {
        push_scalar(buf, codepoint);
        return;
    }
    push_scalar(buf, tables::ascii_to_greek(letter));
    if !marks.is_empty() {
        trace!(letter = %char::from(letter), ?marks, "no precomposed form, decomposing");
        push_marks(buf, marks, letter.is_ascii_uppercase());
    }
}

fn push_marks(buf: &mut Rendered, marks: CombiningMarks, capital: bool) {
    for codepoint in marks.decomposed_codepoints(capital) {
        push_scalar(buf, codepoint);
    }
}

#[inline]
fn push_scalar(buf: &mut Rendered, scalar: u32) {
    buf.extend_from_slice(utf8::encode(scalar).as_bytes());
}
