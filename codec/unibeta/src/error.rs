//! Errors for the checked conversion API.
//!
//! The plain conversion functions never fail: a full output buffer ends
//! the conversion and the caller sees a short result. The `try_` variants
//! and [`Betacode`](crate::Betacode) report that case instead.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The output buffer filled before the input was used up.
    ///
    /// `written` bytes of whole tokens are in the buffer, converted from
    /// the first `consumed` input bytes.
    #[error("output buffer full after {written} bytes ({consumed} input bytes converted)")]
    OutputExhausted { written: usize, consumed: usize },

    /// The converted bytes are not valid UTF-8. Only possible when the
    /// Beta Code input itself carried invalid non-ASCII bytes.
    #[error("converted text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
