use pretty_assertions::assert_eq;

use super::*;
use crate::Location;

#[test]
fn token_debug_shows_kind_value_and_location() {
    let tok = Token::new(TokenKind::Identifier, "foo", Location::new(3, 4));
    assert_eq!(format!("{tok:?}"), r#"Identifier("foo") @ 3:4"#);
}

#[test]
fn kind_display_names() {
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
    assert_eq!(TokenKind::String.to_string(), "String");
    assert_eq!(TokenKind::Bracket.as_str(), "Bracket");
}

#[test]
fn list_preserves_push_order() {
    let mut list = TokenList::new();
    assert!(list.is_empty());
    list.push(Token::new(TokenKind::Number, "1", Location::new(1, 0)));
    list.push(Token::new(TokenKind::Eof, "", Location::new(1, 0)));

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].value, "1");
    assert_eq!(list.last().map(|t| t.kind), Some(TokenKind::Eof));
    let kinds: Vec<_> = list.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn list_into_iter_yields_owned_tokens() {
    let mut list = TokenList::new();
    list.push(Token::new(TokenKind::Identifier, "a", Location::new(1, 0)));
    list.push(Token::new(TokenKind::Eof, "", Location::new(1, 1)));

    let values: Vec<String> = list.into_iter().map(|t| t.value).collect();
    assert_eq!(values, vec!["a".to_string(), String::new()]);
}
