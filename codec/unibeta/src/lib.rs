//! Greek Beta Code to UTF-8 and back.
//!
//! Beta Code writes polytonic Greek in 7-bit ASCII: `lo/gos` is λόγος,
//! `*)/aggelos` is Ἄγγελος. This crate converts in both directions,
//! preferring precomposed code points and falling back to combining marks
//! when Unicode has no single code point for a letter.
//!
//! # Architecture
//!
//! - [`scanner`]: splits Beta Code into letter tokens
//! - [`beta_to_greek`]: renders tokens as UTF-8
//! - [`greek_to_beta`]: spells UTF-8 scalars as Beta Code
//! - [`tables`]: static lookup data shared by both directions
//! - [`sink`]: bounded and unbounded output
//!
//! # Output capacity
//!
//! The slice-based functions never write past the output slice and always
//! leave it NUL-terminated. When the output fills up, conversion stops at
//! a token boundary and the bytes written so far are returned. The `try_`
//! variants report that case as [`ConvertError::OutputExhausted`].
//!
//! ```
//! let mut out = [0u8; 32];
//! let n = unibeta::beta_to_utf8(b"a)/nqrwpos", &mut out);
//! assert_eq!(&out[..n], "\u{1F04}νθρωπος".as_bytes());
//! assert_eq!(unibeta::greek_to_beta("\u{1F04}νθρωπος"), "a)/nqrwpos");
//! ```

pub mod beta_to_greek;
pub mod error;
pub mod greek_to_beta;
pub mod marks;
pub mod options;
pub mod scanner;
pub mod sink;
pub mod tables;

pub use error::ConvertError;
pub use marks::CombiningMarks;
pub use options::{AcuteForm, Options};
pub use sink::{BoundedBuf, Sink};

/// How far a conversion got.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Progress {
    /// Input bytes converted and written.
    pub consumed: usize,
    /// Some input did not make it into the output: it filled up before
    /// the input ended, or an escape was dropped for lack of room.
    pub truncated: bool,
}

/// Conversion direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    BetaToGreek,
    GreekToBeta,
}

impl Direction {
    /// Runs one conversion into `out`. `options` only affects
    /// [`Direction::BetaToGreek`].
    pub fn convert_into<S: Sink + ?Sized>(
        self,
        input: &[u8],
        options: Options,
        out: &mut S,
    ) -> Progress {
        match self {
            Direction::BetaToGreek => beta_to_greek::convert(input, options, out),
            Direction::GreekToBeta => greek_to_beta::convert(input, out),
        }
    }

    /// Command-line name of the direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::BetaToGreek => "beta2greek",
            Direction::GreekToBeta => "greek2beta",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "beta2greek" => Some(Direction::BetaToGreek),
            "greek2beta" => Some(Direction::GreekToBeta),
            _ => None,
        }
    }
}

fn into_bounded(
    direction: Direction,
    input: &[u8],
    output: &mut [u8],
    options: Options,
) -> (usize, Progress) {
    let mut sink = BoundedBuf::new(output);
    let progress = direction.convert_into(input, options, &mut sink);
    (sink.len(), progress)
}

fn checked(written: usize, progress: Progress) -> Result<usize, ConvertError> {
    if progress.truncated {
        Err(ConvertError::OutputExhausted {
            written,
            consumed: progress.consumed,
        })
    } else {
        Ok(written)
    }
}

/// Converts Beta Code to UTF-8 Greek in `output`.
///
/// `input` ends at its first NUL or at the end of the slice. Returns the
/// number of bytes written, not counting the NUL terminator.
pub fn beta_to_utf8(input: &[u8], output: &mut [u8]) -> usize {
    beta_to_utf8_with(input, output, Options::default())
}

/// [`beta_to_utf8`] with explicit options.
pub fn beta_to_utf8_with(input: &[u8], output: &mut [u8], options: Options) -> usize {
    into_bounded(Direction::BetaToGreek, input, output, options).0
}

/// Like [`beta_to_utf8`], but fails if the output had to be truncated.
pub fn try_beta_to_utf8(input: &[u8], output: &mut [u8]) -> Result<usize, ConvertError> {
    try_beta_to_utf8_with(input, output, Options::default())
}

pub fn try_beta_to_utf8_with(
    input: &[u8],
    output: &mut [u8],
    options: Options,
) -> Result<usize, ConvertError> {
    let (written, progress) = into_bounded(Direction::BetaToGreek, input, output, options);
    checked(written, progress)
}

/// Converts UTF-8 Greek to Beta Code in `output`.
///
/// `input` ends at its first NUL or at the end of the slice. Returns the
/// number of bytes written, not counting the NUL terminator.
pub fn utf8_to_beta(input: &[u8], output: &mut [u8]) -> usize {
    into_bounded(Direction::GreekToBeta, input, output, Options::default()).0
}

/// Like [`utf8_to_beta`], but fails if the output had to be truncated.
pub fn try_utf8_to_beta(input: &[u8], output: &mut [u8]) -> Result<usize, ConvertError> {
    let (written, progress) =
        into_bounded(Direction::GreekToBeta, input, output, Options::default());
    checked(written, progress)
}

fn into_string(direction: Direction, input: &str, options: Options) -> String {
    let mut out = Vec::with_capacity(input.len() * 2);
    direction.convert_into(input.as_bytes(), options, &mut out);
    // Valid input yields valid output: non-ASCII Beta Code input is copied
    // through in whole sequences.
    String::from_utf8(out)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

/// Converts Beta Code to Greek. Stops at an embedded NUL.
pub fn beta_to_greek(input: &str) -> String {
    beta_to_greek_with(input, Options::default())
}

/// [`beta_to_greek`] with explicit options.
pub fn beta_to_greek_with(input: &str, options: Options) -> String {
    into_string(Direction::BetaToGreek, input, options)
}

/// Converts Greek to Beta Code. Stops at an embedded NUL.
pub fn greek_to_beta(input: &str) -> String {
    into_string(Direction::GreekToBeta, input, Options::default())
}

/// Fixed-buffer converter, as used by applications that convert short
/// strings such as single words or dictionary forms.
///
/// Each call converts through a buffer of [`capacity`](Betacode::capacity)
/// bytes and fails rather than return a truncated result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Betacode {
    capacity: usize,
    options: Options,
}

impl Default for Betacode {
    fn default() -> Self {
        Self::new()
    }
}

impl Betacode {
    /// Buffer size, terminator included.
    pub const DEFAULT_CAPACITY: usize = 150;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Betacode {
            capacity,
            options: Options::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn beta2greek(&self, beta: &str) -> Result<String, ConvertError> {
        self.convert(Direction::BetaToGreek, beta)
    }

    pub fn greek2beta(&self, greek: &str) -> Result<String, ConvertError> {
        self.convert(Direction::GreekToBeta, greek)
    }

    /// Converts `input` in either direction.
    pub fn convert(&self, direction: Direction, input: &str) -> Result<String, ConvertError> {
        let mut buf = vec![0u8; self.capacity];
        let (written, progress) =
            into_bounded(direction, input.as_bytes(), &mut buf, self.options);
        let written = checked(written, progress)?;
        let text = std::str::from_utf8(&buf[..written])?;
        tracing::trace!(direction = direction.name(), written, "converted");
        Ok(text.to_owned())
    }
}
