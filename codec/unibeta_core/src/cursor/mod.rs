//! Byte cursor with a virtual sentinel.
//!
//! The cursor advances through a borrowed byte slice. The input ends at
//! its first NUL byte or at the end of the slice, whichever comes first,
//! matching a NUL-terminated buffer with an explicit capacity.
//!
//! Every read at or past the end returns `0x00`, so scanners can look
//! ahead with [`peek()`](Cursor::peek) without checking bounds
//! themselves. No copy of the input is made.

/// Byte cursor over a NUL-terminated (or capacity-bounded) input.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source content, already cut at the first NUL.
    src: &'a [u8],
    /// Current read position (byte index into `src`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// Content after the first NUL in `bytes` is ignored.
    pub fn new(bytes: &'a [u8]) -> Self {
        let end = memchr::memchr(0, bytes).unwrap_or(bytes.len());
        Self {
            src: &bytes[..end],
            pos: 0,
        }
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.src.get(index).copied().unwrap_or(0)
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    ///
    /// May move past the end; the cursor then reports EOF.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Returns `true` once the position has reached the end of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source content (up to the first NUL).
    #[inline]
    pub fn source_len(&self) -> usize {
        self.src.len()
    }

    /// Source bytes from the current position to the end.
    ///
    /// Empty at EOF.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        self.src.get(self.pos..).unwrap_or(&[])
    }
}
