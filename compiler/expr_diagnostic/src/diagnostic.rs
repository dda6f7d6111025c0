//! The located diagnostic record.

use std::fmt;

use expr_ir::Location;

/// A single located diagnostic.
///
/// The message is free text ("literal not terminated", "invalid char
/// escape", ...). `Display` shows the message followed by the 1-based
/// `line:column`; use [`Source::render`](crate::Source::render) for output
/// with source context.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{message} ({location})")]
pub struct Diagnostic {
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Diagnostic {
            location,
            message: message.into(),
        }
    }
}

/// Gutter printed before snippet and caret lines.
pub(crate) const GUTTER: &str = " | ";

/// A diagnostic laid out for display, kept in parts so an emitter can style
/// each one without re-parsing text.
///
/// `Display` joins the parts into the plain-text form:
///
/// ```text
/// <header>
///  | <snippet>
///  | <caret>
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rendered {
    /// `name: message (line:col)`, or the bare message when unlocated.
    pub header: String,
    /// The offending source line, tabs replaced by spaces.
    pub snippet: Option<String>,
    /// Dots then `^` under the offending column. Only present with a
    /// snippet.
    pub caret: Option<String>,
}

impl Rendered {
    pub(crate) fn header_only(header: String) -> Self {
        Rendered {
            header,
            snippet: None,
            caret: None,
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header)?;
        if let Some(snippet) = &self.snippet {
            write!(f, "\n{GUTTER}{snippet}")?;
            if let Some(caret) = &self.caret {
                write!(f, "\n{GUTTER}{caret}")?;
            }
        }
        Ok(())
    }
}

/// A diagnostic already laid out against its source.
///
/// Keeps the raw diagnostic for callers that need the location, and the
/// layout for callers that print.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{rendered}")]
pub struct RenderedError {
    pub diagnostic: Diagnostic,
    rendered: Rendered,
}

impl RenderedError {
    pub(crate) fn new(diagnostic: Diagnostic, rendered: Rendered) -> Self {
        RenderedError {
            diagnostic,
            rendered,
        }
    }

    pub fn rendered(&self) -> &Rendered {
        &self.rendered
    }
}
