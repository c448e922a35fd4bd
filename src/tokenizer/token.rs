use serde::{Deserialize, Serialize};

/// Kind given to tokens built from input no rule matched.
pub const ERROR_KIND: &str = "error";

/// Half-open byte range `[start, end)` into the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The source text this span was built from.
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// 1-based line and column (in chars) of a token's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: String,
    /// Matched text after the rule's transform; `None` when that is empty.
    pub value: Option<String>,
    pub span: Span,
    pub position: Position,
}

impl Token {
    pub fn new(
        kind: impl Into<String>,
        value: impl Into<String>,
        span: Span,
        position: Position,
    ) -> Self {
        let value = value.into();
        Self {
            kind: kind.into(),
            value: (!value.is_empty()).then_some(value),
            span,
            position,
        }
    }

    pub fn error(value: char, span: Span, position: Position) -> Self {
        Self::new(ERROR_KIND, value, span, position)
    }

    pub fn is_error(&self) -> bool {
        self.kind == ERROR_KIND
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.position, self.kind)?;
        if let Some(value) = &self.value {
            write!(f, " {:?}", value)?;
        }
        Ok(())
    }
}
