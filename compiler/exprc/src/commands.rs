//! `lex` and `check` commands.
//!
//! Commands write to caller-supplied writers so they can be exercised
//! without a terminal.

use std::fs;
use std::io::{self, Read, Write};

use expr_diagnostic::emitter::{ColorMode, TerminalEmitter};
use expr_diagnostic::Source;
use expr_ir::{Token, TokenList};
use tracing::debug;

use crate::cli::{CliError, Input};

/// Read the whole input into a named [`Source`].
pub fn read_source(input: &Input) -> Result<Source, CliError> {
    let name = input.display_name();
    let content = match input {
        Input::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map(|_| buf)
                .map_err(|source| CliError::Read {
                    name: name.clone(),
                    source,
                })?
        }
        Input::File(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            name: name.clone(),
            source,
        })?,
    };
    debug!(%name, bytes = content.len(), "read source");
    Ok(Source::named(name, content))
}

/// One line of `exprc lex` output: `Identifier "foo" @ 1:5`, with the
/// 1-based column of `Location`'s `Display`.
pub fn format_token(token: &Token) -> String {
    format!("{} {:?} @ {}", token.kind, token.value, token.location)
}

/// How diagnostics should be written.
#[derive(Clone, Copy, Debug)]
pub struct Report {
    pub color: ColorMode,
    pub is_tty: bool,
}

/// Lex `source`, printing every token to `out`.
///
/// Returns `Ok(false)` when the source failed to lex; the diagnostic has
/// already been written to `err`.
pub fn lex_command(
    source: &Source,
    report: Report,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let Some(tokens) = lex_or_report(source, report, err)? else {
        return Ok(false);
    };
    for token in &tokens {
        writeln!(out, "{}", format_token(token))?;
    }
    out.flush()?;
    Ok(true)
}

/// Lex `source` and only report failure.
pub fn check_command(source: &Source, report: Report, err: &mut impl Write) -> io::Result<bool> {
    Ok(lex_or_report(source, report, err)?.is_some())
}

fn lex_or_report(
    source: &Source,
    report: Report,
    err: &mut impl Write,
) -> io::Result<Option<TokenList>> {
    match expr_lexer::lex_source(source) {
        Ok(tokens) => Ok(Some(tokens)),
        Err(error) => {
            let mut emitter = TerminalEmitter::with_color_mode(err, report.color, report.is_tty);
            emitter.emit(&error)?;
            emitter.flush()?;
            Ok(None)
        }
    }
}
