//! Scanner: a cursor over the borrowed capability bytes.
//!
//! Every slice the scanner hands out borrows from the input, so the tag
//! readers can decide per token whether anything needs to be allocated.
//!
//! Invariants
//! - `start <= pos <= end <= input.len()`.
//! - Offsets reported by [`Scanner::offset`] index into the full input, not
//!   into the window being scanned, so errors point at the caller's bytes.
//! - No operation panics; a missing delimiter consumes to the end of the
//!   window.

use bstr::ByteSlice;

pub(crate) const WHITESPACE: &[u8] = b"\t\n\r ";
pub(crate) const WHITESPACE_OR_PARENTHESES: &[u8] = b"\t\n\r ()";
pub(crate) const PARENTHESES: &[u8] = b"()";

pub(crate) const OPEN: u8 = b'(';
pub(crate) const CLOSE: u8 = b')';

#[derive(Debug, Clone)]
pub(crate) struct Scanner<'src> {
    input: &'src [u8],
    pos: usize,
    end: usize,
}

impl<'src> Scanner<'src> {
    /// Scans `input[start..end]`, with offsets still relative to `input`.
    ///
    /// Out of range bounds are clamped to the input.
    pub fn new(input: &'src [u8], start: usize, end: usize) -> Self {
        let end = end.min(input.len());
        Self {
            input,
            pos: start.min(end),
            end,
        }
    }

    #[inline]
    fn remaining(&self) -> &'src [u8] {
        &self.input[self.pos..self.end]
    }

    /// Byte offset of the cursor within the full input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos == self.end
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.remaining().first().copied()
    }

    pub fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        self.pos += rest.find_not_byteset(WHITESPACE).unwrap_or(rest.len());
    }

    /// Consumes up to (not including) the next whitespace or parenthesis.
    #[inline]
    pub fn consume_token(&mut self) -> &'src [u8] {
        self.consume_until_any(WHITESPACE_OR_PARENTHESES)
    }

    /// Consumes up to (not including) the first byte found in `delimiters`,
    /// or to the end of the window when there is none.
    pub fn consume_until_any(&mut self, delimiters: &[u8]) -> &'src [u8] {
        let rest = self.remaining();
        let len = rest.find_byteset(delimiters).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Consumes `byte` if it is the next byte.
    #[inline]
    pub fn try_consume(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}
