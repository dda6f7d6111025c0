#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use expr_ir::{Location, TokenKind};
use pretty_assertions::assert_eq;

use super::Lexer;

fn advance(lexer: &mut Lexer<'_>, n: usize) {
    for _ in 0..n {
        lexer.cursor.next();
    }
}

// === Token emitter ===

#[test]
fn emit_takes_pending_span_and_closes_it() {
    let mut lexer = Lexer::new("foo bar");
    advance(&mut lexer, 3);
    lexer.emit(TokenKind::Identifier);

    assert_eq!(lexer.cursor.start(), 3);
    assert_eq!(lexer.cursor.end(), 3);
    let tok = &lexer.tokens()[0];
    assert_eq!(tok.kind, TokenKind::Identifier);
    assert_eq!(tok.value, "foo");
    assert_eq!(tok.location, Location::new(1, 0));
}

#[test]
fn emit_locates_token_at_span_start() {
    let mut lexer = Lexer::new("a\n  bc");
    advance(&mut lexer, 4);
    lexer.ignore();
    advance(&mut lexer, 2);
    lexer.emit(TokenKind::Identifier);

    let tok = &lexer.tokens()[0];
    assert_eq!(tok.value, "bc");
    assert_eq!(tok.location, Location::new(2, 2));
}

#[test]
fn emit_value_overrides_text() {
    let mut lexer = Lexer::new("\"a\"");
    advance(&mut lexer, 3);
    lexer.emit_value(TokenKind::String, "a");

    let tok = &lexer.tokens()[0];
    assert_eq!(tok.value, "a");
    assert_eq!(lexer.cursor.start(), 3);
}

#[test]
fn ignore_discards_span() {
    let mut lexer = Lexer::new("   x");
    advance(&mut lexer, 3);
    lexer.ignore();
    assert!(lexer.tokens().is_empty());
    assert_eq!(lexer.cursor.start(), 3);
}

#[test]
fn emit_eof_on_empty_input_is_at_start() {
    let mut lexer = Lexer::new("");
    lexer.cursor.next();
    lexer.emit_eof();

    let tok = &lexer.tokens()[0];
    assert_eq!(tok.kind, TokenKind::Eof);
    assert_eq!(tok.value, "");
    assert_eq!(tok.location, Location::new(1, 0));
}

#[test]
fn emit_eof_points_at_last_character() {
    let mut lexer = Lexer::new("ab\ncd");
    advance(&mut lexer, 6);
    lexer.ignore();
    lexer.emit_eof();
    assert_eq!(lexer.tokens()[0].location, Location::new(2, 1));
}

#[test]
fn emit_eof_after_trailing_newline_points_at_newline() {
    let mut lexer = Lexer::new("ab\n");
    advance(&mut lexer, 4);
    lexer.ignore();
    lexer.emit_eof();
    assert_eq!(lexer.tokens()[0].location, Location::new(1, 2));
}

// === Error reporter ===

#[test]
fn error_is_located_at_last_consumed_char() {
    let mut lexer = Lexer::new("ab@");
    advance(&mut lexer, 3);
    assert_eq!(lexer.error("boom"), None);

    let err = lexer.finish().unwrap_err();
    assert_eq!(err.location, Location::new(1, 2));
    assert_eq!(err.message, "boom");
}

#[test]
fn first_error_wins() {
    let mut lexer = Lexer::new("abc");
    lexer.cursor.next();
    lexer.error("first");
    lexer.cursor.next();
    lexer.error("second");

    assert!(lexer.has_error());
    let err = lexer.finish().unwrap_err();
    assert_eq!(err.message, "first");
    assert_eq!(err.location, Location::new(1, 0));
}

#[test]
fn error_drops_emitted_tokens() {
    let mut lexer = Lexer::new("a b");
    lexer.cursor.next();
    lexer.emit(TokenKind::Identifier);
    lexer.error("late failure");
    assert!(lexer.finish().is_err());
}

#[test]
fn error_before_any_input_is_at_start() {
    let mut lexer = Lexer::new("");
    lexer.error("nothing here");
    assert_eq!(lexer.finish().unwrap_err().location, Location::new(1, 0));
}

#[test]
fn finish_without_error_returns_tokens() {
    let mut lexer = Lexer::new("x");
    lexer.cursor.next();
    lexer.emit(TokenKind::Identifier);
    lexer.emit_eof();

    let tokens = lexer.finish().unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, TokenKind::Eof);
    assert_eq!(tokens[1].location, Location::new(1, 0));
}
