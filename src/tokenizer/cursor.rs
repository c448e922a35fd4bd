use super::token::{Position, Span};

/// Scan position over one input buffer.
///
/// A cursor is a plain value: advancing returns a new cursor and leaves the
/// old one untouched, so any number of scans can run over the same
/// [`Matcher`](super::matcher::Matcher) at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            line: 1,   // 1-based
            column: 1, // 1-based
        }
    }

    /// Rebuilds a cursor from a previously saved offset and position.
    pub(crate) fn resume(input: &'a str, offset: usize, line: usize, column: usize) -> Self {
        Self {
            input,
            offset,
            line,
            column,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    pub fn is_done(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Unconsumed part of the input.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Moves past `text`, which must be a prefix of [`remaining`](Self::remaining).
    ///
    /// Lines are only counted when `line_breaks` is set; otherwise every
    /// char, newline included, moves the column by one.
    pub fn advance(self, text: &str, line_breaks: bool) -> (Span, Cursor<'a>) {
        debug_assert!(self.remaining().starts_with(text));
        let mut next = self;
        next.offset += text.len();
        if line_breaks {
            for c in text.chars() {
                if c == '\n' {
                    next.line += 1;
                    next.column = 1;
                } else {
                    next.column += 1;
                }
            }
        } else {
            next.column += text.chars().count();
        }
        (Span::new(self.offset, next.offset), next)
    }

    /// Moves past exactly one char, returning it; `None` at end of input.
    pub fn advance_char(self) -> Option<(char, Span, Cursor<'a>)> {
        let c = self.remaining().chars().next()?;
        let mut next = self;
        next.offset += c.len_utf8();
        next.column += 1;
        Some((c, Span::new(self.offset, next.offset), next))
    }
}
