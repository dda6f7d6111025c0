//! Diagnostics for the expression compiler.
//!
//! A [`Diagnostic`] is a raw `(location, message)` pair produced by the
//! lexer. A [`Source`] knows the original text and optional file name and
//! turns a diagnostic into a human-readable, located message with a
//! snippet of the offending line:
//!
//! ```text
//! literal not terminated (1:8)
//!  | a + "abc
//!  | .......^
//! ```

mod diagnostic;
pub mod emitter;
mod source;

pub use diagnostic::{Diagnostic, Rendered, RenderedError};
pub use source::Source;
