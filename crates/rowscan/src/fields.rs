//! Sequential read-back over completed header and column buffers.

use bstr::ByteSlice;

use crate::buffer::{EMPTY_FIELD, FIELD_TERM};

/// Canonical empty value shared by every decoded empty field.
const EMPTY: &[u8] = b"";

/// Iterator over the field values of one completed buffer.
///
/// Yields each value in row order, decoding the empty-field sentinel to a
/// shared canonical empty slice without allocating. The views borrow the
/// tokenizer's own buffers, not the source, so they stay valid after the
/// source is dropped — but only until the next tokenize pass.
///
/// # Examples
///
/// ```rust
/// use rowscan::{Tokenizer, TokenizerOptions};
///
/// let mut tokenizer = Tokenizer::new(TokenizerOptions {
///     fill_extra_cols: true,
///     ..Default::default()
/// });
/// tokenizer.set_resolved_cols(2);
/// tokenizer.tokenize_rows(b"1,2\n3\n", 0, None, &[true, true]).unwrap();
///
/// let mut fields = tokenizer.column_fields(1).unwrap();
/// assert!(fields.has_more());
/// assert_eq!(fields.next(), Some(b"2".as_slice()));
/// assert_eq!(fields.next(), Some(b"".as_slice())); // padded empty value
/// assert!(!fields.has_more());
/// ```
#[derive(Debug, Clone)]
pub struct FieldIter<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> FieldIter<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns `true` while the cursor has not reached the end of the
    /// buffer, distinguishing a decoded empty value from exhaustion.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.pos < self.buf.len()
    }
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if !self.has_more() {
            return None;
        }
        let rest = &self.buf[self.pos..];
        // Buffers are always terminator-complete; the fallback covers a
        // truncated buffer from an errored pass.
        let end = rest.find_byte(FIELD_TERM).unwrap_or(rest.len());
        self.pos += end + 1;
        let value = &rest[..end];
        if *value == [EMPTY_FIELD] {
            Some(EMPTY)
        } else {
            Some(value)
        }
    }
}
