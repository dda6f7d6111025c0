//! Lexer for the expression language.
//!
//! Turns source text into a [`TokenList`] ending with an `Eof` token, or
//! into the single diagnostic that stopped the scan.
//!
//! # Architecture
//!
//! The scanner is a state machine. Each [`State`](state::State) reads
//! characters through the lexer's cursor, may emit tokens, and names the
//! state to run next. The driver loop below runs states until one returns
//! `None`, which happens after the `Eof` token is emitted or after an
//! error is recorded.
//!
//! Errors are fail-fast: the first recorded error wins and every later
//! attempt to record one is ignored. Tokens produced before the error are
//! dropped.

mod lexer;
mod state;
mod string;
mod unescape;

use expr_diagnostic::{Diagnostic, RenderedError, Source};
use expr_ir::TokenList;
use tracing::debug;

use lexer::Lexer;
use state::State;

pub use unescape::{unescape, UnescapeError};

/// A lexical diagnostic: location plus message.
pub type LexError = Diagnostic;

/// Lex `input` into tokens.
///
/// On success the list always ends with an `Eof` token. On failure no
/// tokens are returned, only the first error encountered.
pub fn lex(input: &str) -> Result<TokenList, LexError> {
    let mut lexer = Lexer::new(input);
    let mut state = Some(State::Root);
    while let Some(current) = state {
        state = current.run(&mut lexer);
    }

    let result = lexer.finish();
    match &result {
        Ok(tokens) => debug!(tokens = tokens.len(), bytes = input.len(), "lexed"),
        Err(err) => debug!(%err, "lexing failed"),
    }
    result
}

/// Lex a [`Source`], rendering any error against it.
pub fn lex_source(source: &Source) -> Result<TokenList, RenderedError> {
    lex(source.content()).map_err(|err| source.render_error(err))
}
