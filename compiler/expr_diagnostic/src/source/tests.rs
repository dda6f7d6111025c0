use expr_ir::Location;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn line_lookup_is_one_based() {
    let src = Source::new("first\nsecond\r\nthird");
    assert_eq!(src.line(1), Some("first"));
    assert_eq!(src.line(2), Some("second"));
    assert_eq!(src.line(3), Some("third"));
    assert_eq!(src.line(4), None);
    assert_eq!(src.line(0), None);
}

#[test]
fn line_after_trailing_newline_is_empty() {
    let src = Source::new("a\n");
    assert_eq!(src.line(2), Some(""));
}

#[test]
fn empty_source_has_no_lines() {
    assert_eq!(Source::new("").line(1), None);
}

#[test]
fn render_with_snippet_and_caret() {
    let src = Source::new("a + \"abc");
    let diag = Diagnostic::new(Location::new(1, 7), "literal not terminated");
    assert_eq!(
        src.render(&diag),
        "literal not terminated (1:8)\n | a + \"abc\n | .......^"
    );
}

#[test]
fn render_named_source_prefixes_name() {
    let src = Source::named("rules.expr", "x\n\"\\q\"");
    let diag = Diagnostic::new(Location::new(2, 2), "invalid char escape");
    assert_eq!(
        src.render(&diag),
        "rules.expr: invalid char escape (2:3)\n | \"\\q\"\n | ..^"
    );
}

#[test]
fn render_without_snippet_for_empty_source() {
    let src = Source::new("");
    let diag = Diagnostic::new(Location::new(1, 0), "unexpected end");
    assert_eq!(src.render(&diag), "unexpected end (1:1)");
}

#[test]
fn render_unlocated_diagnostic_is_message_only() {
    let src = Source::new("abc");
    let diag = Diagnostic::new(Location::default(), "input too large");
    assert_eq!(src.render(&diag), "input too large");
}

#[test]
fn render_error_keeps_raw_diagnostic() {
    let src = Source::new("#");
    let diag = Diagnostic::new(Location::new(1, 0), "boom");
    let err = src.render_error(diag.clone());
    assert_eq!(err.diagnostic, diag);
    assert_eq!(err.to_string(), "boom (1:1)\n | #\n | ^");
    assert_eq!(
        err.rendered(),
        &Rendered {
            header: "boom (1:1)".to_string(),
            snippet: Some("#".to_string()),
            caret: Some("^".to_string()),
        }
    );
}

#[test]
fn tabs_in_snippet_become_spaces() {
    let src = Source::new("\t@");
    let diag = Diagnostic::new(Location::new(1, 1), "x");
    assert_eq!(src.render(&diag), "x (1:2)\n |  @\n | .^");
}

#[test]
fn caret_omitted_after_wide_character() {
    let src = Source::new("名 = @");
    let diag = Diagnostic::new(Location::new(1, 4), "unrecognized character: U+0040 '@'");
    let layout = src.layout(&diag);
    assert_eq!(layout.snippet.as_deref(), Some("名 = @"));
    assert_eq!(layout.caret, None);
    assert_eq!(
        src.render(&diag),
        "unrecognized character: U+0040 '@' (1:5)\n | 名 = @"
    );
}

#[test]
fn wide_character_after_column_keeps_caret() {
    let src = Source::new("@ 名");
    let diag = Diagnostic::new(Location::new(1, 0), "x");
    assert_eq!(src.layout(&diag).caret.as_deref(), Some("^"));
}
