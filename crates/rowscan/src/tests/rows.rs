use alloc::vec;

use rstest::rstest;

use super::column;
use crate::{TokenizeError, Tokenizer, TokenizerOptions};

const SOURCE: &[u8] = b"a,b,c\n1,\"2,2\",3\n#skip\n4,5,6\n";

fn data_tokenizer(cols: usize) -> Tokenizer {
    let mut tokenizer = Tokenizer::new(TokenizerOptions::default());
    tokenizer.set_resolved_cols(cols);
    tokenizer
}

#[test]
fn data_pass_fills_columns_in_row_order() {
    let mut tokenizer = data_tokenizer(3);
    let rows = tokenizer
        .tokenize_rows(SOURCE, 1, Some(3), &[true, true, true])
        .unwrap();
    assert_eq!(rows, 2);
    assert_eq!(tokenizer.num_rows(), 2);
    assert_eq!(column(&tokenizer, 0), [b"1".to_vec(), b"4".to_vec()]);
    assert_eq!(column(&tokenizer, 1), [b"2,2".to_vec(), b"5".to_vec()]);
    assert_eq!(column(&tokenizer, 2), [b"3".to_vec(), b"6".to_vec()]);
}

#[test]
fn comment_lines_are_neither_counted_nor_emitted() {
    let mut tokenizer = data_tokenizer(3);
    // Unbounded end: the comment line between the data rows is invisible.
    let rows = tokenizer
        .tokenize_rows(SOURCE, 1, None, &[true, true, true])
        .unwrap();
    assert_eq!(rows, 2);
    assert_eq!(column(&tokenizer, 0), [b"1".to_vec(), b"4".to_vec()]);
}

#[test]
fn range_limited_passes_resume_without_rescanning_rows() {
    let mut tokenizer = data_tokenizer(3);
    let mask = [true, true, true];

    let rows = tokenizer.tokenize_rows(SOURCE, 1, Some(2), &mask).unwrap();
    assert_eq!(rows, 1);
    assert_eq!(column(&tokenizer, 1), [b"2,2".to_vec()]);

    // A later call picks up at row 2; the earlier buffers are replaced.
    let rows = tokenizer.tokenize_rows(SOURCE, 2, Some(3), &mask).unwrap();
    assert_eq!(rows, 1);
    assert_eq!(column(&tokenizer, 1), [b"5".to_vec()]);
}

#[rstest]
#[case(0, None, 4)]
#[case(1, None, 3)]
#[case(0, Some(2), 2)]
#[case(2, Some(3), 1)]
#[case(1, Some(1), 0)]
#[case(3, Some(9), 1)]
fn produced_rows_match_the_requested_range(
    #[case] start: usize,
    #[case] end: Option<usize>,
    #[case] expected: usize,
) {
    let source = b"0\n1\n2\n3\n";
    let mut tokenizer = data_tokenizer(1);
    let rows = tokenizer.tokenize_rows(source, start, end, &[true]).unwrap();
    assert_eq!(rows, expected);
    assert_eq!(column(&tokenizer, 0).len(), expected);
}

#[test]
fn start_past_the_last_row_is_invalid_line() {
    let mut tokenizer = data_tokenizer(1);
    assert_eq!(
        tokenizer.tokenize_rows(b"0\n1\n", 2, None, &[true]),
        Err(TokenizeError::InvalidLine { row: 2 })
    );
}

#[test]
fn blank_lines_never_become_rows() {
    let mut tokenizer = data_tokenizer(2);
    let rows = tokenizer
        .tokenize_rows(b"1,2\n\n   \n\t\n3,4\n", 0, None, &[true, true])
        .unwrap();
    assert_eq!(rows, 2);
    assert_eq!(column(&tokenizer, 0), [b"1".to_vec(), b"3".to_vec()]);
}

#[test]
fn final_row_without_newline_is_not_produced() {
    let mut tokenizer = data_tokenizer(2);
    let rows = tokenizer
        .tokenize_rows(b"1,2\n3,4", 0, None, &[true, true])
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(column(&tokenizer, 0), [b"1".to_vec()]);
}

#[test]
fn leading_whitespace_is_stripped_and_trailing_kept() {
    let mut tokenizer = data_tokenizer(2);
    tokenizer
        .tokenize_rows(b"  a , b\n", 0, None, &[true, true])
        .unwrap();
    assert_eq!(column(&tokenizer, 0), [b"a ".to_vec()]);
    assert_eq!(column(&tokenizer, 1), [b"b".to_vec()]);
}

#[test]
fn empty_fields_round_trip_as_empty_values() {
    let mut tokenizer = data_tokenizer(3);
    tokenizer
        .tokenize_rows(b"1,,3\n", 0, None, &[true, true, true])
        .unwrap();
    assert_eq!(column(&tokenizer, 1), [b"".to_vec()]);

    let mut fields = tokenizer.column_fields(1).unwrap();
    assert!(fields.has_more());
    assert_eq!(fields.next(), Some(b"".as_slice()));
    assert!(!fields.has_more());
}

#[test]
fn rows_error_replaces_row_count() {
    let mut tokenizer = data_tokenizer(2);
    tokenizer
        .tokenize_rows(b"1,2\n3,4\n", 0, None, &[true, true])
        .unwrap();
    assert_eq!(tokenizer.num_rows(), 2);

    let err = tokenizer
        .tokenize_rows(b"1,2\n3\n", 0, None, &[true, true])
        .unwrap_err();
    assert_eq!(err, TokenizeError::NotEnoughCols { row: 1, expected: 2 });
    assert_eq!(tokenizer.num_rows(), 1);
}

#[test]
fn alternate_delimiter_splits_fields() {
    let mut tokenizer = Tokenizer::new(TokenizerOptions {
        delimiter: b'|',
        ..Default::default()
    });
    tokenizer.set_resolved_cols(3);
    tokenizer
        .tokenize_rows(b"1|2,5|3\n", 0, None, &[true, true, true])
        .unwrap();
    assert_eq!(column(&tokenizer, 1), [b"2,5".to_vec()]);
    assert_eq!(column(&tokenizer, 2), vec![b"3".to_vec()]);
}
