//! Decoding of quoted literals.
//!
//! Takes the full source form of a literal, quotes included, as validated
//! by the string scanner, and produces its value.
//!
//! Recognized escapes:
//! - `\a \b \f \n \r \t \v`
//! - `\\ \' \" \` \?` (the character itself)
//! - `\xHH` / `\XHH`, `\uHHHH`, `\UHHHHHHHH` (hex code point)
//! - `\OOO` octal, first digit `0`-`3`

use std::str::Chars;

/// Why a literal could not be decoded.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum UnescapeError {
    #[error("unable to unescape string: not a quoted literal")]
    NotQuoted,
    #[error("unable to unescape string, found '\\' as last character")]
    TrailingBackslash,
    #[error("unable to unescape string: unknown escape '\\{0}'")]
    UnknownEscape(char),
    #[error("unable to unescape string: invalid hex escape")]
    InvalidHex,
    #[error("unable to unescape octal sequence in string")]
    InvalidOctal,
    #[error("unable to unescape string: U+{0:X} is not a valid character")]
    InvalidCodePoint(u32),
}

/// Decode a quoted literal (`"..."` or `'...'`) into its value.
pub fn unescape(quoted: &str) -> Result<String, UnescapeError> {
    let inner = strip_quotes(quoted).ok_or(UnescapeError::NotQuoted)?;

    // Fast path: nothing to decode.
    if !inner.contains('\\') {
        return Ok(inner.to_owned());
    }

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        let esc = chars.next().ok_or(UnescapeError::TrailingBackslash)?;
        let value = match esc {
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{0B}',
            '\\' | '\'' | '"' | '`' | '?' => esc,
            'x' | 'X' => hex_escape(&mut chars, 2)?,
            'u' => hex_escape(&mut chars, 4)?,
            'U' => hex_escape(&mut chars, 8)?,
            '0'..='3' => octal_escape(esc, &mut chars)?,
            _ => return Err(UnescapeError::UnknownEscape(esc)),
        };
        result.push(value);
    }
    Ok(result)
}

/// Content between matching single or double quotes.
fn strip_quotes(quoted: &str) -> Option<&str> {
    let quote = quoted.chars().next()?;
    if !matches!(quote, '"' | '\'') || quoted.len() < 2 || !quoted.ends_with(quote) {
        return None;
    }
    Some(&quoted[1..quoted.len() - 1])
}

fn hex_escape(chars: &mut Chars<'_>, digits: usize) -> Result<char, UnescapeError> {
    let mut value: u32 = 0;
    for _ in 0..digits {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or(UnescapeError::InvalidHex)?;
        value = (value << 4) | digit;
    }
    char::from_u32(value).ok_or(UnescapeError::InvalidCodePoint(value))
}

/// `\OOO`: `first` is the leading digit, two more octal digits follow.
fn octal_escape(first: char, chars: &mut Chars<'_>) -> Result<char, UnescapeError> {
    let mut value = first.to_digit(8).ok_or(UnescapeError::InvalidOctal)?;
    for _ in 0..2 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(8))
            .ok_or(UnescapeError::InvalidOctal)?;
        value = value * 8 + digit;
    }
    char::from_u32(value).ok_or(UnescapeError::InvalidCodePoint(value))
}
