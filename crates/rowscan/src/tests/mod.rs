mod rows;

use alloc::vec::Vec;

use crate::Tokenizer;

/// Collects one column of the last data pass as owned values.
pub(crate) fn column(tokenizer: &Tokenizer, col: usize) -> Vec<Vec<u8>> {
    tokenizer
        .column_fields(col)
        .expect("column index in range")
        .map(<[u8]>::to_vec)
        .collect()
}

/// Collects the header of the last header pass as owned values.
pub(crate) fn header(tokenizer: &Tokenizer) -> Vec<Vec<u8>> {
    tokenizer.header_fields().map(<[u8]>::to_vec).collect()
}
