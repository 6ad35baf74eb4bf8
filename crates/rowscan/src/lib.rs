//! A streaming, single-pass tokenizer for delimited tabular text.
//!
//! `rowscan` turns a raw byte buffer holding CSV-like text (comments,
//! quoting, configurable delimiters) into a header row and a set of
//! per-column value streams, ready for typed conversion. A single
//! [`Tokenizer`] serves re-entrant, range-limited passes — "tokenize only
//! rows 100–200" — without re-running the state machine over rows it
//! already produced.
//!
//! # Examples
//!
//! ```rust
//! use rowscan::{Tokenizer, TokenizerOptions};
//!
//! let source = b"a,b,c\n1,\"2,2\",3\n#skip\n4,5,6\n";
//! let mut tokenizer = Tokenizer::new(TokenizerOptions::default());
//!
//! // Header pass: row 0 holds the column names.
//! let cols = tokenizer.tokenize_header(source, 0).unwrap();
//! assert_eq!(cols, 3);
//! let names: Vec<&[u8]> = tokenizer.header_fields().collect();
//! assert_eq!(names, [b"a".as_slice(), b"b", b"c"]);
//!
//! // Data pass: rows 1..3, all columns included.
//! tokenizer.set_resolved_cols(cols);
//! let rows = tokenizer
//!     .tokenize_rows(source, 1, Some(3), &[true, true, true])
//!     .unwrap();
//! assert_eq!(rows, 2);
//!
//! let col1: Vec<&[u8]> = tokenizer.column_fields(1).unwrap().collect();
//! assert_eq!(col1, [b"2,2".as_slice(), b"5"]);
//! ```
//!
//! The tokenizer borrows the source only for the duration of a call;
//! returned field views point into the tokenizer's own buffers.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod convert;
mod error;
mod fields;
mod locator;
mod options;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use convert::{parse_float, parse_int};
pub use error::TokenizeError;
pub use fields::FieldIter;
pub use options::TokenizerOptions;
pub use tokenizer::Tokenizer;
