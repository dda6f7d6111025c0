//! Terminal Emitter
//!
//! Writes rendered diagnostics to a terminal, with optional ANSI colors.

use std::io::{self, Write};

use crate::diagnostic::GUTTER;
use crate::RenderedError;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` flag value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is consulted for `ColorMode::Auto` only.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Emit one laid-out diagnostic.
    ///
    /// The plain-text form is exactly the error's `Display`; colors only
    /// wrap its parts.
    pub fn emit(&mut self, error: &RenderedError) -> io::Result<()> {
        let rendered = error.rendered();
        if !self.colors {
            return writeln!(self.writer, "{rendered}");
        }

        write!(self.writer, "{}error{}: ", colors::ERROR, colors::RESET)?;
        writeln!(
            self.writer,
            "{}{}{}",
            colors::BOLD,
            rendered.header,
            colors::RESET
        )?;
        let Some(snippet) = &rendered.snippet else {
            return Ok(());
        };
        writeln!(
            self.writer,
            "{}{GUTTER}{}{snippet}",
            colors::SECONDARY,
            colors::RESET
        )?;
        if let Some(caret) = &rendered.caret {
            writeln!(
                self.writer,
                "{}{GUTTER}{}{}{caret}{}",
                colors::SECONDARY,
                colors::RESET,
                colors::ERROR,
                colors::RESET
            )?;
        }
        Ok(())
    }

    /// Flush buffered output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
