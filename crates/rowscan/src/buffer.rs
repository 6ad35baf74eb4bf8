//! Growable output buffers and the sentinel value encoding.
//!
//! Buffer format: every emitted field value is terminated by
//! [`FIELD_TERM`]. A zero-length value is encoded as a single
//! [`EMPTY_FIELD`] byte followed by the terminator — never as two adjacent
//! terminators — so the read side can tell "empty value" from "end of
//! buffer". These two constants are the entire contract between the
//! scanner and [`FieldIter`](crate::FieldIter); violating it corrupts the
//! stream for every subsequent field.

use alloc::vec::Vec;
use bstr::ByteSlice;

/// Terminator written after every field value.
pub(crate) const FIELD_TERM: u8 = 0x00;

/// Marker for a zero-length field value; always followed by [`FIELD_TERM`].
pub(crate) const EMPTY_FIELD: u8 = 0x01;

const INITIAL_CAPACITY: usize = 64;

/// An owned, growable byte region with a write position.
///
/// Growth doubles the allocation and preserves written bytes. Read-side
/// cursors are plain offsets, so reallocation can never invalidate them.
/// Allocation failure aborts; it is not a recoverable error here.
#[derive(Debug, Clone, Default)]
pub(crate) struct FieldBuffer {
    data: Vec<u8>,
}

impl FieldBuffer {
    pub(crate) fn new() -> Self {
        Self {
            data: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub(crate) fn push(&mut self, byte: u8) {
        if self.data.len() == self.data.capacity() {
            self.data.reserve(self.data.capacity().max(INITIAL_CAPACITY));
        }
        self.data.push(byte);
    }

    /// Truncates to the first `count` terminated fields, dropping any
    /// partial trailing field left by an unterminated final line.
    pub(crate) fn truncate_fields(&mut self, count: usize) {
        let mut end = 0;
        for _ in 0..count {
            match self.data[end..].find_byte(FIELD_TERM) {
                Some(i) => end += i + 1,
                None => return,
            }
        }
        self.data.truncate(end);
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_bytes_across_growth() {
        let mut buf = FieldBuffer::new();
        for i in 0..10_000u32 {
            buf.push((i % 251) as u8);
        }
        assert_eq!(buf.as_slice().len(), 10_000);
        for (i, &b) in buf.as_slice().iter().enumerate() {
            assert_eq!(b, (i % 251) as u8);
        }
    }

    #[test]
    fn truncate_fields_drops_a_partial_trailing_field() {
        let mut buf = FieldBuffer::new();
        for &b in b"a\x00b\x00cc" {
            buf.push(b);
        }
        buf.truncate_fields(2);
        assert_eq!(buf.as_slice(), b"a\x00b\x00");
        buf.truncate_fields(5);
        assert_eq!(buf.as_slice(), b"a\x00b\x00");
        buf.truncate_fields(1);
        assert_eq!(buf.as_slice(), b"a\x00");
    }

    #[test]
    fn clear_resets_write_position() {
        let mut buf = FieldBuffer::new();
        buf.push(b'x');
        buf.push(FIELD_TERM);
        buf.clear();
        assert!(buf.as_slice().is_empty());
        buf.push(b'y');
        assert_eq!(buf.as_slice(), b"y");
    }
}
