//! Per-run lexer state: the token emitter and the error reporter.

use expr_diagnostic::Diagnostic;
use expr_ir::{Location, Token, TokenKind, TokenList};
use expr_lexer_core::{line_col, Cursor};
use tracing::{debug, trace};

use crate::state::State;

/// Mutable scanning state for one lexing run.
///
/// Created fresh for each input and consumed by [`finish`](Self::finish).
pub(crate) struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    tokens: TokenList,
    /// First error recorded in this run, if any.
    error: Option<Diagnostic>,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(input),
            tokens: TokenList::new(),
            error: None,
        }
    }

    /// Emit the pending span as a token of `kind`.
    pub(crate) fn emit(&mut self, kind: TokenKind) {
        let value = self.cursor.pending();
        self.emit_value(kind, value);
    }

    /// Emit a token of `kind` covering the pending span, with an explicit
    /// value instead of the raw source text.
    pub(crate) fn emit_value(&mut self, kind: TokenKind, value: impl Into<String>) {
        let location = self.location_of(self.cursor.start());
        self.push(Token::new(kind, value, location));
    }

    /// Drop the pending span without producing a token.
    pub(crate) fn ignore(&mut self) {
        self.cursor.close_span();
    }

    /// Emit the terminal `Eof` token.
    ///
    /// Located at the last real character (`end - 1`), so "unexpected end"
    /// diagnostics downstream point into the source instead of past it.
    pub(crate) fn emit_eof(&mut self) {
        let location = self.location_of(self.cursor.end().saturating_sub(1));
        self.push(Token::new(TokenKind::Eof, String::new(), location));
    }

    fn push(&mut self, token: Token) {
        trace!(?token, "emit");
        self.tokens.push(token);
        self.cursor.close_span();
    }

    /// Record `message` at the character that was just consumed and halt.
    ///
    /// Only the first error of a run is kept; later calls do nothing.
    /// Always returns `None` so states can `return self.error(..)`.
    pub(crate) fn error(&mut self, message: impl Into<String>) -> Option<State> {
        if self.error.is_none() {
            let location = self.location_of(self.cursor.end().saturating_sub(1));
            let diagnostic = Diagnostic::new(location, message);
            debug!(%diagnostic, "lex error recorded");
            self.error = Some(diagnostic);
        }
        None
    }

    pub(crate) fn has_error(&self) -> bool {
        self.error.is_some()
    }

    fn location_of(&self, offset: usize) -> Location {
        Location::from(line_col(self.cursor.source(), offset))
    }

    /// The emitted tokens, or the recorded error.
    pub(crate) fn finish(self) -> Result<TokenList, Diagnostic> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.tokens),
        }
    }

    #[cfg(test)]
    pub(crate) fn tokens(&self) -> &TokenList {
        &self.tokens
    }
}

#[cfg(test)]
mod tests;
