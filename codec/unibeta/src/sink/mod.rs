//! Output sinks.
//!
//! Both converters write whole tokens through [`Sink::try_push`]: a token
//! is either written in full or not at all, so output never ends in half a
//! UTF-8 sequence or half a Beta Code letter.
//!
//! [`BoundedBuf`] wraps a caller-supplied byte slice and keeps it
//! NUL-terminated after every write. `Vec<u8>` is the unbounded sink behind
//! the owned-string API.

/// Destination for converted bytes.
pub trait Sink {
    /// Bytes written so far, excluding any terminator.
    fn len(&self) -> usize;

    /// Appends `bytes` if they fit in full. Returns `false` and leaves the
    /// sink unchanged otherwise.
    fn try_push(&mut self, bytes: &[u8]) -> bool;

    /// Shortens the output to `len` bytes. No effect if `len` is not
    /// shorter than the current length.
    fn truncate(&mut self, len: usize);

    /// Bytes left in the destination, counting the terminator slot.
    /// `None` for a sink without a bound.
    fn headroom(&self) -> Option<usize>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fixed-capacity sink over a caller buffer.
///
/// One byte is always reserved for the NUL terminator: a token of `n`
/// bytes fits iff `len + n < capacity`. A zero-length buffer accepts
/// nothing and is never written to.
#[derive(Debug)]
pub struct BoundedBuf<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> BoundedBuf<'a> {
    /// Wraps `buf`, writing an initial terminator if there is room for one.
    pub fn new(buf: &'a mut [u8]) -> Self {
        if let Some(first) = buf.first_mut() {
            *first = 0;
        }
        BoundedBuf { buf, len: 0 }
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Largest token that would still fit.
    pub fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.len + 1)
    }

    fn terminate(&mut self) {
        if let Some(slot) = self.buf.get_mut(self.len) {
            *slot = 0;
        }
    }
}

impl Sink for BoundedBuf<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn try_push(&mut self, bytes: &[u8]) -> bool {
        let end = self.len + bytes.len();
        if end >= self.buf.len() {
            return false;
        }
        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;
        self.terminate();
        true
    }

    fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
            self.terminate();
        }
    }

    fn headroom(&self) -> Option<usize> {
        Some(self.buf.len() - self.len)
    }
}

impl Sink for Vec<u8> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn try_push(&mut self, bytes: &[u8]) -> bool {
        self.extend_from_slice(bytes);
        true
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }

    fn headroom(&self) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests;
