//! Low-level building blocks for Beta Code conversion.
//!
//! This crate is standalone: it knows nothing about Greek. It provides the
//! UTF-8 scalar codec both converters are built on, and the byte [`Cursor`]
//! the scanners walk their input with.
//!
//! Nothing here allocates. Both pieces operate on caller-owned byte slices.

pub mod cursor;
pub mod utf8;

pub use cursor::Cursor;
pub use utf8::{decode, encode, encode_into, Decoded, Utf8Seq, MAX_SCALAR};
