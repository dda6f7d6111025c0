use pretty_assertions::assert_eq;

use super::*;

/// Reference: walk every character from the start, exactly as the
/// lexer's location contract describes.
fn rescan(source: &str, offset: usize) -> (u32, u32) {
    let mut line = 1;
    let mut column = 0;
    for (i, ch) in source.char_indices() {
        if i + ch.len_utf8() > offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }
    (line, column)
}

#[test]
fn first_char_is_line_one_column_zero() {
    assert_eq!(line_col("abc", 0), (1, 0));
}

#[test]
fn empty_source() {
    assert_eq!(line_col("", 0), (1, 0));
    assert_eq!(line_col("", 10), (1, 0));
}

#[test]
fn second_line_resets_column() {
    let src = "a\nb";
    assert_eq!(line_col(src, 0), (1, 0));
    assert_eq!(line_col(src, 1), (1, 1)); // the newline itself
    assert_eq!(line_col(src, 2), (2, 0));
}

#[test]
fn offset_past_end_counts_everything() {
    assert_eq!(line_col("ab\ncd", 5), (2, 2));
    assert_eq!(line_col("ab\ncd", 99), (2, 2));
    assert_eq!(line_col("ab\n", 3), (2, 0));
}

#[test]
fn multibyte_chars_take_one_column() {
    // 'é' is 2 bytes, '日' is 3 bytes.
    let src = "é日x";
    assert_eq!(line_col(src, 0), (1, 0));
    assert_eq!(line_col(src, 2), (1, 1));
    assert_eq!(line_col(src, 5), (1, 2));
}

#[test]
fn offset_inside_multibyte_char_resolves_to_that_char() {
    let src = "a日b";
    assert_eq!(line_col(src, 2), (1, 1));
    assert_eq!(line_col(src, 3), (1, 1));
    assert_eq!(line_col(src, 4), (1, 2));
}

#[test]
fn crlf_counts_carriage_return_as_a_column() {
    let src = "a\r\nb";
    assert_eq!(line_col(src, 1), (1, 1));
    assert_eq!(line_col(src, 3), (2, 0));
}

#[test]
fn matches_rescan_on_mixed_input() {
    let src = "let x = \"日本\"\n  y + 1\n\n\té";
    for offset in 0..=src.len() + 2 {
        assert_eq!(line_col(src, offset), rescan(src, offset), "offset {offset}");
    }
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_line_col {
    use super::{line_col, rescan};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn memchr_matches_rescan(
            src in "[a-c\n日é ]{0,48}",
            offset in 0usize..160,
        ) {
            prop_assert_eq!(line_col(&src, offset), rescan(&src, offset));
        }
    }
}
