//! Char-at-a-time cursor over a source string.
//!
//! The cursor tracks two byte offsets into the source:
//!
//! ```text
//! "foo + bar"
//!  ^  ^
//!  |  end    scanning head
//!  start     beginning of the pending (not yet emitted) span
//! ```
//!
//! Invariant: `0 <= start <= end <= source.len()`, and both offsets always
//! sit on UTF-8 character boundaries.
//!
//! `next()` decodes one character and advances `end` by its encoded width.
//! The width of the last decoded character is remembered so `backup()` can
//! undo exactly one step. End of input is reported as `None`, which no
//! decoded character can collide with.

/// Cursor over a source string.
///
/// One cursor serves one lexing run. It never owns the source.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Start of the pending span (byte offset).
    start: usize,
    /// Scanning head (byte offset).
    end: usize,
    /// Encoded width of the last char returned by `next()`; 0 after EOF.
    width: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0 with an empty pending span.
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            start: 0,
            end: 0,
            width: 0,
        }
    }

    /// The full source being scanned.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset where the pending span begins.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the scanning head.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Encoded width of the most recently consumed character.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Consume and return the character at the head.
    ///
    /// Returns `None` at end of input and records a width of zero, so a
    /// following `backup()` is a no-op.
    #[allow(
        clippy::should_implement_trait,
        reason = "cursor is not an iterator: it supports backup and span tracking"
    )]
    #[inline]
    pub fn next(&mut self) -> Option<char> {
        let Some(ch) = self.source[self.end..].chars().next() else {
            self.width = 0;
            return None;
        };
        self.width = ch.len_utf8();
        self.end += self.width;
        Some(ch)
    }

    /// Look at the character at the head without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<char> {
        let ch = self.next();
        self.backup();
        ch
    }

    /// Undo the most recent `next()`.
    ///
    /// Valid once per `next()`. A second call without an intervening
    /// `next()` does nothing.
    #[inline]
    pub fn backup(&mut self) {
        self.end -= self.width;
        self.width = 0;
    }

    /// Consume the next character if it is one of `valid`.
    ///
    /// On mismatch (including end of input) the head is left where it was.
    pub fn accept(&mut self, valid: &str) -> bool {
        if self.next().is_some_and(|ch| valid.contains(ch)) {
            return true;
        }
        self.backup();
        false
    }

    /// Consume characters while they are in `valid`.
    ///
    /// Leaves the head just before the first rejected character.
    pub fn accept_run(&mut self, valid: &str) {
        while self.next().is_some_and(|ch| valid.contains(ch)) {}
        self.backup();
    }

    /// Consume characters while `pred` holds.
    ///
    /// Same stopping rule as [`accept_run`](Self::accept_run) with a
    /// predicate instead of a set.
    pub fn accept_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.next().is_some_and(&pred) {}
        self.backup();
    }

    /// Consume `word` exactly, or nothing at all.
    ///
    /// On any mismatch the head is restored to where the attempt began.
    pub fn accept_word(&mut self, word: &str) -> bool {
        let pos = self.end;
        for expected in word.chars() {
            if self.next() != Some(expected) {
                self.end = pos;
                self.width = 0;
                return false;
            }
        }
        true
    }

    /// Source text of the pending span `start..end`.
    #[inline]
    pub fn pending(&self) -> &'a str {
        &self.source[self.start..self.end]
    }

    /// Close the pending span: `start = end`.
    #[inline]
    pub fn close_span(&mut self) {
        self.start = self.end;
    }

    /// Move the head back to a previously observed `end()` offset.
    ///
    /// Used by recognizers that need to undo more than one `next()`.
    ///
    /// # Contract
    ///
    /// `pos` must come from an earlier `end()` of this cursor and must not
    /// precede `start()`.
    pub fn reset_to(&mut self, pos: usize) {
        debug_assert!(
            pos >= self.start && pos <= self.source.len(),
            "reset position {pos} outside pending span start {} / source length {}",
            self.start,
            self.source.len()
        );
        debug_assert!(
            self.source.is_char_boundary(pos),
            "reset position {pos} is not a char boundary"
        );
        self.end = pos;
        self.width = 0;
    }
}
