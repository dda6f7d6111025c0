//! Scanning states.
//!
//! Each state consumes some input, may emit tokens, and returns the state
//! to run next. `None` ends the run: either `Eof` was emitted or an error
//! was recorded.

use expr_ir::TokenKind;
use tracing::trace;

use crate::lexer::Lexer;
use crate::unescape::unescape;

/// Words that combine with a preceding `not` into one operator.
const NOT_OPERATORS: [&str; 5] = ["in", "matches", "contains", "startsWith", "endsWith"];

/// A unit of scanning logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    /// Between tokens.
    Root,
    /// Numeric literal; head rests on its first character.
    Number,
    /// `.` operator, `..` range, or a number like `.5`.
    Dot,
    /// Identifier or word operator; head rests on its first character.
    Identifier,
    /// After a `not` word: tries to form `not in`, `not matches`, ...
    Not,
    /// After `?`: `?`, `?.` or `??`.
    QuestionMark,
    /// After `/`: division or a comment opener.
    Slash,
    LineComment,
    BlockComment,
}

impl State {
    /// Run this state once and return the next one.
    pub(crate) fn run(self, lexer: &mut Lexer<'_>) -> Option<State> {
        trace!(
            state = ?self,
            offset = lexer.cursor.end(),
            width = lexer.cursor.width(),
            "state"
        );
        match self {
            State::Root => lexer.root(),
            State::Number => lexer.number(),
            State::Dot => lexer.dot(),
            State::Identifier => lexer.identifier(),
            State::Not => lexer.not(),
            State::QuestionMark => lexer.question_mark(),
            State::Slash => lexer.slash(),
            State::LineComment => lexer.line_comment(),
            State::BlockComment => lexer.block_comment(),
        }
    }
}

/// Characters that may appear in identifiers: letters, ASCII digits,
/// `_` and `$`.
///
/// Numeric symbols such as `²` or `½` are not identifier characters.
fn is_alphanumeric(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_ascii_digit() || ch.is_alphabetic()
}

/// `U+0040 '@'` form for error messages; control characters omit the glyph.
fn describe(ch: char) -> String {
    if ch.is_control() {
        format!("U+{:04X}", u32::from(ch))
    } else {
        format!("U+{:04X} '{ch}'", u32::from(ch))
    }
}

impl Lexer<'_> {
    fn root(&mut self) -> Option<State> {
        let Some(ch) = self.cursor.next() else {
            self.emit_eof();
            return None;
        };
        match ch {
            ' ' | '\t' | '\r' | '\n' => self.ignore(),
            '\'' | '"' => return self.string(ch),
            '0'..='9' => {
                self.cursor.backup();
                return Some(State::Number);
            }
            '?' => return Some(State::QuestionMark),
            '/' => return Some(State::Slash),
            '(' | '[' | '{' | ')' | ']' | '}' => self.emit(TokenKind::Bracket),
            '#' | ',' | ':' | '%' | '+' | '-' | '^' => self.emit(TokenKind::Operator),
            '&' | '|' | '!' | '=' | '*' | '<' | '>' => {
                // Possible two-char operator: `&&`, `||`, `!=`, `==`, `**`, `<=`, ...
                self.cursor.accept("&|=*");
                self.emit(TokenKind::Operator);
            }
            '.' => {
                self.cursor.backup();
                return Some(State::Dot);
            }
            c if is_alphanumeric(c) => {
                self.cursor.backup();
                return Some(State::Identifier);
            }
            _ => return self.error(format!("unrecognized character: {}", describe(ch))),
        }
        Some(State::Root)
    }

    /// Quoted literal; the opening `quote` is consumed.
    fn string(&mut self, quote: char) -> Option<State> {
        let elements = self.scan_string(quote);
        if self.has_error() {
            return None;
        }
        match unescape(self.cursor.pending()) {
            Ok(value) => {
                trace!(elements, "string literal");
                self.emit_value(TokenKind::String, value);
                Some(State::Root)
            }
            Err(err) => self.error(err.to_string()),
        }
    }

    fn number(&mut self) -> Option<State> {
        if !self.scan_number() {
            return self.error(format!("bad number syntax: {:?}", self.cursor.pending()));
        }
        self.emit(TokenKind::Number);
        Some(State::Root)
    }

    /// Consume a numeric literal. Returns `false` if it runs straight into
    /// an identifier character (`12abc`), with that character consumed.
    fn scan_number(&mut self) -> bool {
        let mut digits = "0123456789_";
        if self.cursor.accept("0") {
            // A leading 0 does not mean octal.
            if self.cursor.accept("xX") {
                digits = "0123456789abcdefABCDEF_";
            } else if self.cursor.accept("oO") {
                digits = "01234567_";
            } else if self.cursor.accept("bB") {
                digits = "01_";
            }
        }
        self.cursor.accept_run(digits);

        let before_dot = self.cursor.end();
        if self.cursor.accept(".") {
            // `1..2` is a range: leave both dots for the operator.
            if self.cursor.peek() == Some('.') {
                self.cursor.reset_to(before_dot);
                return true;
            }
            self.cursor.accept_run(digits);
        }
        if self.cursor.accept("eE") {
            self.cursor.accept("+-");
            self.cursor.accept_run(digits);
        }

        if self.cursor.peek().is_some_and(is_alphanumeric) {
            self.cursor.next();
            return false;
        }
        true
    }

    fn dot(&mut self) -> Option<State> {
        self.cursor.next();
        if self.cursor.accept("0123456789") {
            self.cursor.backup();
            return Some(State::Number);
        }
        self.cursor.accept(".");
        self.emit(TokenKind::Operator);
        Some(State::Root)
    }

    fn identifier(&mut self) -> Option<State> {
        self.cursor.accept_while(is_alphanumeric);
        match self.cursor.pending() {
            "not" => return Some(State::Not),
            "in" | "or" | "and" | "matches" | "contains" | "startsWith" | "endsWith" => {
                self.emit(TokenKind::Operator);
            }
            _ => self.emit(TokenKind::Identifier),
        }
        Some(State::Root)
    }

    fn not(&mut self) -> Option<State> {
        self.emit(TokenKind::Operator);

        self.cursor.accept_run(" ");
        self.ignore();

        for word in NOT_OPERATORS {
            if !self.cursor.accept_word(word) {
                continue;
            }
            // `not inside` is `not` followed by the identifier `inside`.
            if self.cursor.peek().is_some_and(is_alphanumeric) {
                self.cursor.reset_to(self.cursor.start());
                continue;
            }
            self.emit(TokenKind::Operator);
            break;
        }
        Some(State::Root)
    }

    fn question_mark(&mut self) -> Option<State> {
        self.cursor.accept(".?");
        self.emit(TokenKind::Operator);
        Some(State::Root)
    }

    fn slash(&mut self) -> Option<State> {
        if self.cursor.accept("/") {
            return Some(State::LineComment);
        }
        if self.cursor.accept("*") {
            return Some(State::BlockComment);
        }
        self.emit(TokenKind::Operator);
        Some(State::Root)
    }

    fn line_comment(&mut self) -> Option<State> {
        self.cursor.accept_while(|c| c != '\n');
        self.ignore();
        Some(State::Root)
    }

    fn block_comment(&mut self) -> Option<State> {
        loop {
            match self.cursor.next() {
                None => return self.error("unclosed comment"),
                Some('*') if self.cursor.accept("/") => break,
                Some(_) => {}
            }
        }
        self.ignore();
        Some(State::Root)
    }
}
