//! Token kinds.

use std::fmt;

/// Category tag of a token.
///
/// The set is open: recognizers may grow new kinds without breaking
/// exhaustive matches downstream.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[non_exhaustive]
pub enum TokenKind {
    /// `foo`, `$env`, `_x1`
    Identifier,
    /// `42`, `0x1F`, `1_000`, `2.5e-3`
    Number,
    /// `"text"` or `'text'` (value holds the decoded content)
    String,
    /// `+`, `==`, `and`, `not in`, `?.`, `..`
    Operator,
    /// `( ) [ ] { }`
    Bracket,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Display name used in CLI output and diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Operator => "Operator",
            TokenKind::Bracket => "Bracket",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
