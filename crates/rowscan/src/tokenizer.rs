//! The per-byte state machine that fills header and column buffers.

use alloc::vec::Vec;

use crate::{
    buffer::{EMPTY_FIELD, FIELD_TERM, FieldBuffer},
    error::TokenizeError,
    fields::FieldIter,
    locator::locate_row,
    options::TokenizerOptions,
};

// ------------------------------------------------------------------------------------------------
// Scanner states
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    StartLine,
    StartField,
    StartQuotedField,
    Field,
    QuotedField,
    QuotedFieldNewline,
    Comment,
}

/// What to do with the current input byte after a transition.
///
/// `Retry` re-evaluates the same byte under the new state; the byte is
/// only ever consumed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Consume,
    Retry,
}

/// Where a pass materializes completed fields.
///
/// A header pass writes every field of exactly one row into the header
/// buffer; a data pass writes each included column's values into that
/// column's buffer, skipping excluded real columns while still counting
/// them.
enum Sink<'a> {
    Header(&'a mut FieldBuffer),
    Columns {
        bufs: &'a mut [FieldBuffer],
        use_cols: &'a [bool],
    },
}

// ------------------------------------------------------------------------------------------------
// One tokenize pass
// ------------------------------------------------------------------------------------------------

struct Scan<'a> {
    opts: TokenizerOptions,
    sink: Sink<'a>,
    /// Resolved (included) column count; unused by header passes.
    num_cols: usize,
    start: usize,
    end: Option<usize>,
    state: State,
    /// Current column counting only included columns.
    col: usize,
    /// Current column counting excluded columns as well.
    real_col: usize,
    rows: usize,
    done: bool,
}

impl Scan<'_> {
    fn is_header(&self) -> bool {
        matches!(self.sink, Sink::Header(_))
    }

    fn included(&self, real_col: usize) -> bool {
        match &self.sink {
            Sink::Header(_) => true,
            // An index past the mask counts as included so an over-long
            // row reaches the column-count check instead of being dropped.
            Sink::Columns { use_cols, .. } => use_cols.get(real_col).copied().unwrap_or(true),
        }
    }

    fn push(&mut self, byte: u8) {
        if !self.included(self.real_col) {
            return;
        }
        match &mut self.sink {
            Sink::Header(buf) => buf.push(byte),
            Sink::Columns { bufs, .. } => {
                if self.col < self.num_cols {
                    bufs[self.col].push(byte);
                }
            }
        }
    }

    fn end_field(&mut self) -> Result<(), TokenizeError> {
        if self.included(self.real_col) {
            self.push(FIELD_TERM);
            if !self.is_header() {
                self.col += 1;
                if self.col > self.num_cols {
                    return Err(TokenizeError::TooManyCols {
                        row: self.rows,
                        expected: self.num_cols,
                    });
                }
            }
        }
        self.real_col += 1;
        Ok(())
    }

    fn end_line(&mut self) -> Result<(), TokenizeError> {
        if self.is_header() {
            // A header pass reads exactly one row.
            self.done = true;
            return Ok(());
        }
        if self.opts.fill_extra_cols {
            while self.col < self.num_cols {
                self.push(EMPTY_FIELD);
                self.end_field()?;
            }
        } else if self.col < self.num_cols {
            return Err(TokenizeError::NotEnoughCols {
                row: self.rows,
                expected: self.num_cols,
            });
        }
        self.rows += 1;
        if let Some(end) = self.end {
            if self.rows == end - self.start {
                self.done = true;
            }
        }
        Ok(())
    }

    #[allow(clippy::too_many_lines)]
    fn step(&mut self, c: u8) -> Result<Flow, TokenizeError> {
        use State::*;
        match self.state {
            StartLine => match c {
                b'\n' | b' ' | b'\t' => Ok(Flow::Consume),
                c if c == self.opts.comment => {
                    self.state = Comment;
                    Ok(Flow::Consume)
                }
                _ => {
                    self.col = 0;
                    self.real_col = 0;
                    self.state = StartField;
                    Ok(Flow::Retry)
                }
            },

            StartField => match c {
                // Leading whitespace is stripped from unquoted fields.
                b' ' | b'\t' => Ok(Flow::Consume),
                c if c == self.opts.delimiter => {
                    self.push(EMPTY_FIELD);
                    self.end_field()?;
                    Ok(Flow::Consume)
                }
                b'\n' => {
                    self.end_line()?;
                    self.state = StartLine;
                    Ok(Flow::Consume)
                }
                c if c == self.opts.quote => {
                    self.state = StartQuotedField;
                    Ok(Flow::Consume)
                }
                _ => {
                    self.state = Field;
                    Ok(Flow::Retry)
                }
            },

            StartQuotedField => match c {
                b' ' | b'\t' => Ok(Flow::Consume),
                c if c == self.opts.quote => {
                    // Empty quoted field.
                    self.push(EMPTY_FIELD);
                    self.end_field()?;
                    Ok(Flow::Consume)
                }
                _ => {
                    self.state = QuotedField;
                    Ok(Flow::Retry)
                }
            },

            Field => match c {
                c if c == self.opts.delimiter => {
                    self.end_field()?;
                    self.state = StartField;
                    Ok(Flow::Consume)
                }
                b'\n' => {
                    self.end_field()?;
                    self.end_line()?;
                    self.state = StartLine;
                    Ok(Flow::Consume)
                }
                _ => {
                    self.push(c);
                    Ok(Flow::Consume)
                }
            },

            QuotedField => match c {
                c if c == self.opts.quote => {
                    // Bytes after the closing quote continue as unquoted data.
                    self.state = Field;
                    Ok(Flow::Consume)
                }
                b'\n' => {
                    // The embedded newline is part of the value.
                    self.push(b'\n');
                    self.state = QuotedFieldNewline;
                    Ok(Flow::Consume)
                }
                _ => {
                    self.push(c);
                    Ok(Flow::Consume)
                }
            },

            QuotedFieldNewline => match c {
                b' ' | b'\t' | b'\n' => Ok(Flow::Consume),
                c if c == self.opts.quote => {
                    self.state = Field;
                    Ok(Flow::Consume)
                }
                _ => {
                    self.state = QuotedField;
                    Ok(Flow::Retry)
                }
            },

            Comment => {
                if c == b'\n' {
                    self.state = StartLine;
                }
                Ok(Flow::Consume)
            }
        }
    }

    fn run(&mut self, source: &[u8], offset: usize) -> Result<(), TokenizeError> {
        self.done = self.end.is_some_and(|end| end <= self.start);
        let mut pos = offset;
        while pos < source.len() && !self.done {
            let c = source[pos];
            while self.step(c)? == Flow::Retry && !self.done {}
            pos += 1;
        }
        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// Public tokenizer
// ------------------------------------------------------------------------------------------------

/// A streaming, single-pass tokenizer for delimited tabular text.
///
/// One instance serves a header pass followed by any number of data
/// passes over row ranges of the same logical input. Each pass tears down
/// and rebuilds the output buffers; nothing carries over between passes
/// except the options and the resolved column count.
///
/// Row indices count non-blank, non-comment lines from the start of the
/// source, so the header line itself occupies a row index and data passes
/// normally start one past it. A final line not terminated by `\n` does
/// not produce a row.
///
/// # Examples
///
/// ```rust
/// use rowscan::{Tokenizer, TokenizerOptions};
///
/// let mut tokenizer = Tokenizer::new(TokenizerOptions::default());
/// let cols = tokenizer.tokenize_header(b"x,y\n1,2\n", 0).unwrap();
/// tokenizer.set_resolved_cols(cols);
/// tokenizer
///     .tokenize_rows(b"x,y\n1,2\n", 1, None, &[true, true])
///     .unwrap();
/// assert_eq!(tokenizer.num_rows(), 1);
/// ```
#[derive(Debug)]
pub struct Tokenizer {
    options: TokenizerOptions,
    header: FieldBuffer,
    columns: Vec<FieldBuffer>,
    resolved_cols: usize,
    num_rows: usize,
}

impl Tokenizer {
    /// Creates a tokenizer with the given dialect options.
    #[must_use]
    pub fn new(options: TokenizerOptions) -> Self {
        Self {
            options,
            header: FieldBuffer::new(),
            columns: Vec::new(),
            resolved_cols: 0,
            num_rows: 0,
        }
    }

    /// Runs a header pass: seeks to `start_row`, tokenizes exactly one
    /// row into the header buffer, and returns its field count.
    ///
    /// Replaces the header buffer and releases any column buffers from a
    /// previous pass.
    ///
    /// # Errors
    ///
    /// [`TokenizeError::InvalidLine`] if the source is exhausted before
    /// `start_row` is reached.
    pub fn tokenize_header(
        &mut self,
        source: &[u8],
        start_row: usize,
    ) -> Result<usize, TokenizeError> {
        self.header.clear();
        self.columns.clear();
        self.num_rows = 0;

        let offset = locate_row(source, start_row, self.options.comment)?;
        let mut scan = Scan {
            opts: self.options,
            sink: Sink::Header(&mut self.header),
            num_cols: 0,
            start: start_row,
            end: None,
            state: State::StartLine,
            col: 0,
            real_col: 0,
            rows: 0,
            done: false,
        };
        scan.run(source, offset)?;
        Ok(self.header_fields().count())
    }

    /// Runs a data pass over rows `start_row..end_row` (`None` means
    /// unbounded), materializing included columns, and returns the number
    /// of rows produced.
    ///
    /// `use_cols` is indexed by real column and is normally sized to the
    /// header's field count; the resolved column count set via
    /// [`set_resolved_cols`](Self::set_resolved_cols) must equal the
    /// number of `true` entries. All column buffers are replaced.
    ///
    /// On error the buffers produced so far remain readable but may be
    /// partial; callers must discard them.
    ///
    /// # Errors
    ///
    /// [`TokenizeError::InvalidLine`] if the source is exhausted before
    /// `start_row`; [`TokenizeError::TooManyCols`] or
    /// [`TokenizeError::NotEnoughCols`] when a row violates the resolved
    /// column count (see [`TokenizerOptions::fill_extra_cols`]).
    pub fn tokenize_rows(
        &mut self,
        source: &[u8],
        start_row: usize,
        end_row: Option<usize>,
        use_cols: &[bool],
    ) -> Result<usize, TokenizeError> {
        self.header.clear();
        self.columns.clear();
        self.columns.resize_with(self.resolved_cols, FieldBuffer::new);
        self.num_rows = 0;

        let offset = locate_row(source, start_row, self.options.comment)?;
        let (result, rows) = {
            let mut scan = Scan {
                opts: self.options,
                sink: Sink::Columns {
                    bufs: &mut self.columns,
                    use_cols,
                },
                num_cols: self.resolved_cols,
                start: start_row,
                end: end_row,
                state: State::StartLine,
                col: 0,
                real_col: 0,
                rows: 0,
                done: false,
            };
            let result = scan.run(source, offset);
            (result, scan.rows)
        };
        self.num_rows = rows;
        result?;
        // Drop the partial trailing fields of an unterminated final line
        // so read-back yields exactly the produced rows.
        for buf in &mut self.columns {
            buf.truncate_fields(rows);
        }
        Ok(rows)
    }

    /// Fixes the column count data passes must produce per row.
    ///
    /// Column-count resolution is the caller's responsibility: establish
    /// it from the header buffer's contents (and the inclusion mask), then
    /// supply it here before the first data pass.
    pub fn set_resolved_cols(&mut self, num_cols: usize) {
        self.resolved_cols = num_cols;
    }

    /// The column count data passes produce per row.
    #[must_use]
    pub fn resolved_cols(&self) -> usize {
        self.resolved_cols
    }

    /// Rows produced by the most recent data pass.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Read-back over the header buffer filled by the last header pass.
    #[must_use]
    pub fn header_fields(&self) -> FieldIter<'_> {
        FieldIter::new(self.header.as_slice())
    }

    /// Read-back over one included column's values from the last data
    /// pass, in row order. Returns `None` when `col` is out of range.
    #[must_use]
    pub fn column_fields(&self, col: usize) -> Option<FieldIter<'_>> {
        self.columns.get(col).map(|buf| FieldIter::new(buf.as_slice()))
    }
}
