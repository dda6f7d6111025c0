//! Byte offset to line/column translation.
//!
//! The lexer works in byte offsets; diagnostics want lines and columns.
//! Lines are 1-based and advance on `\n`. Columns are 0-based and count
//! decoded characters, so a multi-byte character occupies one column.
//!
//! The computation rescans from the start of the source on every call. It
//! runs once per emitted token and once per error, which keeps the scanner
//! free of per-character bookkeeping.

/// Compute `(line, column)` for the character containing byte `offset`.
///
/// - An offset inside a multi-byte character resolves to that character.
/// - An offset at or past the end of the source resolves to the position
///   just after the last character.
///
/// Newline search uses `memchr` for SIMD-accelerated scanning.
pub fn line_col(source: &str, offset: usize) -> (u32, u32) {
    let offset = floor_char_boundary(source, offset);
    let before = &source.as_bytes()[..offset];

    let newlines = memchr::memchr_iter(b'\n', before).count();
    let line_start = memchr::memrchr(b'\n', before).map_or(0, |nl| nl + 1);
    let column = source[line_start..offset].chars().count();

    (saturating_u32(newlines + 1), saturating_u32(column))
}

/// Largest char boundary `<= offset`, clamped to the source length.
fn floor_char_boundary(source: &str, offset: usize) -> usize {
    if offset >= source.len() {
        return source.len();
    }
    let mut pos = offset;
    // Offset 0 is always a boundary, so this terminates.
    while !source.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

#[inline]
fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
