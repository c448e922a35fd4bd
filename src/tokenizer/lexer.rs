use super::{
    cursor::Cursor,
    driver::{collect_tokens, TokenizeOptions},
    matcher::Matcher,
    token::{Position, Token},
};
use crate::{error::LexerResult, rule::Rules};

/// Pull-based lexer over one owned input at a time.
///
/// `Lexer` keeps its own buffer and scan position on top of a shared
/// [`Matcher`]; call [`reset`](Lexer::reset) to start over with new input.
/// Independent lexers built from clones of one `Matcher` can run on
/// different threads.
#[derive(Debug, Clone)]
pub struct Lexer {
    matcher: Matcher,
    buffer: String,
    current_position: usize,
    current_line: usize,
    current_column: usize,
}

impl Lexer {
    pub fn new(matcher: Matcher) -> Self {
        Self {
            matcher,
            buffer: String::new(),
            current_position: 0,
            current_line: 1,   // 1-based
            current_column: 1, // 1-based
        }
    }

    pub fn compile(rules: &Rules) -> LexerResult<Self> {
        Ok(Self::new(Matcher::compile(rules)?))
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Replaces the input and rewinds to its start.
    pub fn reset(&mut self, input: impl Into<String>) {
        self.buffer = input.into();
        self.current_position = 0;
        self.current_line = 1;
        self.current_column = 1;
    }

    pub fn input(&self) -> &str {
        &self.buffer
    }

    pub fn offset(&self) -> usize {
        self.current_position
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.current_line,
            column: self.current_column,
        }
    }

    pub fn is_done(&self) -> bool {
        self.current_position >= self.buffer.len()
    }

    /// Resets to `input` and collects its tokens under `options`.
    pub fn tokenize(&mut self, input: impl Into<String>, options: TokenizeOptions) -> Vec<Token> {
        self.reset(input);
        if self.buffer.is_empty() {
            return Vec::new();
        }
        collect_tokens(self.by_ref(), options)
    }

    fn update_position(&mut self, offset: usize, position: Position) {
        self.current_position = offset;
        self.current_line = position.line;
        self.current_column = position.column;
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Next token, or `None` once the input is exhausted.
    fn next(&mut self) -> Option<Token> {
        let cursor = Cursor::resume(
            &self.buffer,
            self.current_position,
            self.current_line,
            self.current_column,
        );
        let (token, next) = self.matcher.next(cursor)?;
        let (offset, position) = (next.offset(), next.position());
        self.update_position(offset, position);
        Some(token)
    }
}
