//! Source text with an optional name, used to render diagnostics.

use std::fmt::Write;

use crate::{Diagnostic, Rendered, RenderedError};

/// The original text handed to the lexer, plus the name it came from.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Source {
    name: Option<String>,
    content: String,
}

impl Source {
    /// An anonymous source (e.g. an expression typed at a prompt).
    pub fn new(content: impl Into<String>) -> Self {
        Source {
            name: None,
            content: content.into(),
        }
    }

    /// A source read from a file or other named origin.
    pub fn named(name: impl Into<String>, content: impl Into<String>) -> Self {
        Source {
            name: Some(name.into()),
            content: content.into(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Text of the 1-based `line`, without its line terminator.
    ///
    /// Returns `None` for line 0, for lines past the end, and for an empty
    /// source.
    pub fn line(&self, line: u32) -> Option<&str> {
        if self.content.is_empty() || line == 0 {
            return None;
        }
        let text = self.content.split('\n').nth(line as usize - 1)?;
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Lay out `diagnostic` against this source.
    ///
    /// Tabs in the snippet become single spaces so the caret lines up. When
    /// a multi-byte character precedes the column the dots cannot line up
    /// in a terminal, so the caret line is left out.
    pub fn layout(&self, diagnostic: &Diagnostic) -> Rendered {
        let mut header = String::new();
        if let Some(name) = &self.name {
            let _ = write!(header, "{name}: ");
        }
        if diagnostic.location.is_empty() {
            header.push_str(&diagnostic.message);
            return Rendered::header_only(header);
        }
        let _ = write!(header, "{diagnostic}");

        let Some(line) = self.line(diagnostic.location.line) else {
            return Rendered::header_only(header);
        };
        let column = diagnostic.location.column as usize;
        let aligned = line.chars().take(column).all(|c| c.is_ascii());
        let caret = aligned.then(|| {
            let mut caret = ".".repeat(column);
            caret.push('^');
            caret
        });
        Rendered {
            header,
            snippet: Some(line.replace('\t', " ")),
            caret,
        }
    }

    /// Render `diagnostic` as a located message with a snippet.
    ///
    /// ```text
    /// expr.txt: invalid char escape (1:3)
    ///  | "\q"
    ///  | ..^
    /// ```
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        self.layout(diagnostic).to_string()
    }

    /// Lay out `diagnostic` and keep both forms in one error value.
    pub fn render_error(&self, diagnostic: Diagnostic) -> RenderedError {
        let rendered = self.layout(&diagnostic);
        RenderedError::new(diagnostic, rendered)
    }
}

#[cfg(test)]
mod tests;
