/// Configuration for a [`Tokenizer`].
///
/// Options are fixed at construction; every tokenize pass on the same
/// instance uses the same dialect. All comparisons are single-byte, so a
/// multi-byte delimiter or quote cannot be expressed.
///
/// # Examples
///
/// ```rust
/// use rowscan::TokenizerOptions;
///
/// let options = TokenizerOptions {
///     delimiter: b'|',
///     ..Default::default()
/// };
/// assert_eq!(options.comment, b'#');
/// ```
///
/// [`Tokenizer`]: crate::Tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Byte separating fields within a row.
    ///
    /// # Default
    ///
    /// `b','`
    pub delimiter: u8,

    /// Lines whose first non-blank byte equals this byte are skipped
    /// entirely: they produce no output and do not count as rows.
    ///
    /// # Default
    ///
    /// `b'#'`
    pub comment: u8,

    /// Byte opening and closing a quoted field. Inside quotes the
    /// delimiter loses its meaning and newlines become field data.
    ///
    /// # Default
    ///
    /// `b'"'`
    pub quote: u8,

    /// Policy for rows with fewer fields than the resolved column count.
    ///
    /// When `true`, missing trailing columns are padded with empty values;
    /// when `false`, such a row fails the pass with
    /// [`TokenizeError::NotEnoughCols`](crate::TokenizeError::NotEnoughCols).
    ///
    /// # Default
    ///
    /// `false`
    pub fill_extra_cols: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            comment: b'#',
            quote: b'"',
            fill_extra_cols: false,
        }
    }
}
