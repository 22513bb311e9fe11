//! UTF-8 scalar codec.
//!
//! Converts one Unicode scalar value to its UTF-8 byte sequence and back.
//! Errors are reported as sentinel values rather than `Result::Err`:
//! an out-of-range scalar encodes to zero bytes, and a lead byte with
//! more than four leading 1-bits decodes to [`Decoded::Malformed`]
//! (length `-1` through [`Decoded::len_or_sentinel`]).
//!
//! # Leniency
//!
//! The decoder only looks at the lead byte to decide the sequence length.
//! Continuation bytes contribute their low six bits whether or not their
//! high bits are `10`. Conformant input decodes exactly; non-conformant
//! continuation bytes are not rejected.

/// Highest valid Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10_FFFF;

/// Number of significant binary digits in `value`.
///
/// Counts from the highest set bit down to bit 0, starting at bit 31, so
/// a value with bit 31 set (e.g. `-1` reinterpreted as unsigned) reports
/// 32 and falls outside every encoding length.
#[inline]
pub const fn bit_width(value: u32) -> u32 {
    u32::BITS - value.leading_zeros()
}

/// One encoded UTF-8 sequence (0 to 4 bytes).
///
/// An empty sequence is the "invalid scalar" sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Utf8Seq {
    bytes: [u8; 4],
    len: u8,
}

impl Utf8Seq {
    /// The encoded bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }

    /// Number of encoded bytes; 0 for an out-of-range scalar.
    #[inline]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// Returns `true` if the scalar could not be encoded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Encode `scalar` as UTF-8.
///
/// The length is picked from the scalar's bit width: under 8 bits one
/// byte, under 12 two, under 17 three, under 22 four. Anything above
/// [`MAX_SCALAR`] yields an empty sequence.
#[allow(
    clippy::cast_possible_truncation,
    reason = "every byte lane is masked to at most 8 bits before the cast"
)]
pub fn encode(scalar: u32) -> Utf8Seq {
    if scalar > MAX_SCALAR {
        return Utf8Seq::default();
    }
    let width = bit_width(scalar);
    let (bytes, len) = if width < 8 {
        ([scalar as u8, 0, 0, 0], 1)
    } else if width < 12 {
        (
            [
                0xC0 | ((scalar >> 6) & 0x1F) as u8,
                0x80 | (scalar & 0x3F) as u8,
                0,
                0,
            ],
            2,
        )
    } else if width < 17 {
        (
            [
                0xE0 | ((scalar >> 12) & 0x0F) as u8,
                0x80 | ((scalar >> 6) & 0x3F) as u8,
                0x80 | (scalar & 0x3F) as u8,
                0,
            ],
            3,
        )
    } else if width < 22 {
        (
            [
                0xF0 | ((scalar >> 18) & 0x07) as u8,
                0x80 | ((scalar >> 12) & 0x3F) as u8,
                0x80 | ((scalar >> 6) & 0x3F) as u8,
                0x80 | (scalar & 0x3F) as u8,
            ],
            4,
        )
    } else {
        return Utf8Seq::default();
    };
    Utf8Seq { bytes, len }
}

/// Encode `scalar` into `out`, followed by a NUL terminator.
///
/// Returns the number of bytes written, not counting the terminator.
/// Returns 0 and leaves `out` untouched when the scalar is out of range
/// or `out` cannot hold the sequence plus its terminator.
pub fn encode_into(scalar: u32, out: &mut [u8]) -> usize {
    let seq = encode(scalar);
    let n = seq.len();
    if n == 0 || out.len() <= n {
        return 0;
    }
    out[..n].copy_from_slice(seq.as_bytes());
    out[n] = 0;
    n
}

/// Result of decoding the first scalar of a byte sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decoded {
    /// A scalar and the number of bytes it occupied.
    Scalar { value: u32, len: usize },
    /// The lead byte announced more than four bytes.
    Malformed,
}

impl Decoded {
    /// The byte length, or `-1` for a malformed lead byte.
    pub fn len_or_sentinel(self) -> isize {
        match self {
            Decoded::Scalar { len, .. } => isize::try_from(len).unwrap_or(-1),
            Decoded::Malformed => -1,
        }
    }

    /// The decoded scalar, if the lead byte was well-formed.
    pub fn value(self) -> Option<u32> {
        match self {
            Decoded::Scalar { value, .. } => Some(value),
            Decoded::Malformed => None,
        }
    }
}

/// Sequence length announced by a lead byte.
///
/// Zero leading 1-bits is plain ASCII (length 1). One to four leading
/// 1-bits give that many bytes. Five or more is malformed (`None`).
#[inline]
pub fn sequence_len(lead: u8) -> Option<usize> {
    match lead.leading_ones() {
        0 => Some(1),
        n @ 1..=4 => Some(n as usize),
        _ => None,
    }
}

/// Decode the first scalar of `seq`.
///
/// Bytes past the end of `seq` read as `0x00`, the terminator a
/// C-string caller would have supplied. An empty slice therefore
/// decodes to scalar 0 with length 1.
pub fn decode(seq: &[u8]) -> Decoded {
    let lead = seq.first().copied().unwrap_or(0);
    let Some(len) = sequence_len(lead) else {
        return Decoded::Malformed;
    };
    // Low (7 - n) bits of the lead byte, where n is the count of leading 1-bits.
    let mut value = u32::from(lead & (0x7F >> lead.leading_ones()));
    for i in 1..len {
        let byte = seq.get(i).copied().unwrap_or(0);
        value = (value << 6) | u32::from(byte & 0x3F);
    }
    Decoded::Scalar { value, len }
}
