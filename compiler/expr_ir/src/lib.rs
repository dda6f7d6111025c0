//! Expr IR - shared types for the expression lexer.
//!
//! This crate contains the data produced by lexing:
//! - `Location` for line/column positions used in diagnostics
//! - `Token`, `TokenKind` and `TokenList` for lexer output
//!
//! Every type derives Clone, Eq, `PartialEq`, Hash and Debug so downstream
//! stages can cache and compare token streams freely.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod location;
mod token;

pub use location::Location;
pub use token::{Token, TokenKind, TokenList};
