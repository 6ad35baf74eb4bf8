use bstr::BString;
use thiserror::Error;

/// Errors reported by tokenize passes and field conversions.
///
/// A tokenize pass returns at the first error; the buffers produced so far
/// are left in place but may be partial, so a caller receiving an error
/// must treat them as invalid. Whether to retry with a smaller row range
/// or skip a bad row is the caller's policy, not the tokenizer's.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// The row-range pre-scan ran off the end of the source before
    /// reaching the requested start row.
    #[error("source exhausted before reaching row {row}")]
    InvalidLine {
        /// The row the pass was asked to start at.
        row: usize,
    },

    /// A data row produced more included fields than the resolved column
    /// count allows.
    #[error("row {row} has more than the {expected} resolved columns")]
    TooManyCols {
        /// Zero-based index of the offending row within the pass.
        row: usize,
        /// The resolved column count.
        expected: usize,
    },

    /// A data row produced fewer fields than the resolved column count
    /// and padding is disabled.
    #[error("row {row} has fewer than the {expected} resolved columns")]
    NotEnoughCols {
        /// Zero-based index of the offending row within the pass.
        row: usize,
        /// The resolved column count.
        expected: usize,
    },

    /// A field's text is empty or is not fully consumed by the requested
    /// numeric parse.
    #[error("field {text:?} does not parse as a number")]
    ConversionError {
        /// The offending field text.
        text: BString,
    },
}
