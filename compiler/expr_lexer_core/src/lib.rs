//! Scanning primitives for the expression lexer.
//!
//! - [`Cursor`]: char-at-a-time reader over a `&str` with one-step
//!   backup, set acceptance and all-or-nothing literal matching.
//! - [`line_col`]: maps a byte offset to a 1-based line and 0-based,
//!   char-counted column.
//!
//! Both are independent of token kinds and diagnostics so that tools other
//! than the compiler can reuse them.

mod cursor;
mod location;

pub use cursor::Cursor;
pub use location::line_col;
