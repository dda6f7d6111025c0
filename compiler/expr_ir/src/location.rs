//! Line/column source positions.

use std::fmt;

/// A position in source text.
///
/// `line` is 1-based, `column` is 0-based and counts decoded characters
/// (not bytes) since the start of the line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Location { line, column }
    }

    /// Whether this location carries no position (the `Default` value).
    ///
    /// Lexer output never produces an empty location; line 0 is reserved
    /// for diagnostics that are not tied to the source.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.line == 0
    }
}

impl From<(u32, u32)> for Location {
    #[inline]
    fn from((line, column): (u32, u32)) -> Self {
        Location { line, column }
    }
}

/// Stored form: 0-based column. Traces and `{:?}` output use this.
impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Human-facing form: 1-based column, as editors display it. Diagnostics
/// and CLI output use this.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Location;
    crate::static_assert_size!(Location, 8);
}
