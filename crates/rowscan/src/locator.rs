//! Row-range pre-scan.
//!
//! Computes the byte offset where a tokenize pass should begin, so one
//! tokenizer instance can serve "read the header only" and "read rows
//! 5000–6000 of a huge buffer" without the scanner re-deriving row
//! boundaries. This is an offset precomputation, not a parse: nothing is
//! emitted and no quoting rules apply.

use crate::error::TokenizeError;

/// Returns the byte offset from which a pass producing row `start` first
/// should begin scanning.
///
/// Rows are counted over non-blank, non-comment lines; a blank line holds
/// only spaces and tabs, and a comment line is one whose first non-blank
/// byte equals `comment`. Blank or comment lines may still sit between
/// the returned offset and row `start`; the scanner skips those itself.
/// The implicit final line is never counted, so seeking past the last
/// complete row fails with [`TokenizeError::InvalidLine`].
pub(crate) fn locate_row(
    source: &[u8],
    start: usize,
    comment: u8,
) -> Result<usize, TokenizeError> {
    let mut pos = 0;
    let mut row = 0;
    let mut blank = true;
    let mut is_comment = false;

    while row < start {
        if pos + 1 >= source.len() {
            return Err(TokenizeError::InvalidLine { row: start });
        }
        let c = source[pos];
        if c == b'\n' {
            if !blank && !is_comment {
                row += 1;
            }
            blank = true;
            is_comment = false;
        } else if blank && c != b' ' && c != b'\t' {
            blank = false;
            is_comment = c == comment;
        }
        pos += 1;
    }

    Ok(pos)
}
