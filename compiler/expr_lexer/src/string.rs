//! Quoted literal scanning.
//!
//! These routines only validate and consume; decoding the literal's value
//! is done afterwards by [`unescape`](crate::unescape) on the scanned text.
//!
//! Every routine returns the character that follows what it consumed,
//! already taken from the cursor. The string loop dispatches on that
//! character without re-reading it.

use crate::lexer::Lexer;

const INVALID_ESCAPE: &str = "invalid char escape";
const NOT_TERMINATED: &str = "literal not terminated";

/// Value of `ch` as a digit in bases up to 16, or 16 if it is not one.
///
/// Hex letters are accepted in either case.
fn digit_val(ch: Option<char>) -> u32 {
    ch.and_then(|c| c.to_digit(16)).unwrap_or(16)
}

impl Lexer<'_> {
    /// Consume a literal up to and including the closing `quote`.
    ///
    /// The opening quote must already be consumed. Returns the number of
    /// logical elements read: each plain character and each escape
    /// sequence counts once.
    ///
    /// A newline or end of input before the closing quote records
    /// "literal not terminated".
    pub(crate) fn scan_string(&mut self, quote: char) -> usize {
        let mut count = 0;
        let mut ch = self.cursor.next();
        loop {
            match ch {
                Some(c) if c == quote => break,
                None | Some('\n') => {
                    self.error(NOT_TERMINATED);
                    return count;
                }
                Some('\\') => ch = self.scan_escape(quote),
                Some(_) => ch = self.cursor.next(),
            }
            count += 1;
        }
        count
    }

    /// Consume one escape sequence; the backslash is already consumed.
    ///
    /// | form | consumes |
    /// |---|---|
    /// | `\a \b \f \n \r \t \v \\`, `\` + quote | the marker |
    /// | `\0`..`\7` | 3 octal digits |
    /// | `\x` | 2 hex digits |
    /// | `\u` | 4 hex digits |
    /// | `\U` | 8 hex digits |
    ///
    /// Anything else records "invalid char escape".
    pub(crate) fn scan_escape(&mut self, quote: char) -> Option<char> {
        let ch = self.cursor.next();
        match ch {
            Some('a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '\\') => self.cursor.next(),
            Some(c) if c == quote => self.cursor.next(),
            Some('0'..='7') => self.scan_digits(ch, 8, 3),
            Some('x') => {
                let first = self.cursor.next();
                self.scan_digits(first, 16, 2)
            }
            Some('u') => {
                let first = self.cursor.next();
                self.scan_digits(first, 16, 4)
            }
            Some('U') => {
                let first = self.cursor.next();
                self.scan_digits(first, 16, 8)
            }
            _ => {
                self.error(INVALID_ESCAPE);
                ch
            }
        }
    }

    /// Consume `count` digits in `base`, starting with the already
    /// consumed `ch`.
    ///
    /// Stops early at the first non-digit; fewer than `count` digits
    /// records "invalid char escape".
    pub(crate) fn scan_digits(
        &mut self,
        mut ch: Option<char>,
        base: u32,
        count: usize,
    ) -> Option<char> {
        let mut remaining = count;
        while remaining > 0 && digit_val(ch) < base {
            ch = self.cursor.next();
            remaining -= 1;
        }
        if remaining > 0 {
            self.error(INVALID_ESCAPE);
        }
        ch
    }
}
