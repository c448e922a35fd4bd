//! # Tokenizer Component
//!
//! The Tokenizer component scans input text with a compiled rule set and
//! produces tokens carrying a kind, a value and a source position.
//!
//! ## Design Principles
//!
//! * **Shared Matcher, Cheap Cursors**: compilation happens once into an
//!   immutable [`Matcher`](matcher::Matcher); each scan only owns a small
//!   [`Cursor`](cursor::Cursor) value.
//! * **Anchored Matching**: every step matches the fused pattern at the
//!   cursor, never searching forward, so a full scan is linear in the input.
//! * **Errors as Data**: input no rule matches becomes a one-char token of
//!   kind [`ERROR_KIND`](token::ERROR_KIND); the scan always makes progress.
//! * **Lossless Spans**: token spans are contiguous and together cover the
//!   scanned input exactly.
//!
//! ## Component Structure
//!
//! * [`token`]: `Token`, `Span` and `Position`
//! * [`cursor`]: scan position and line/column tracking
//! * [`matcher`]: compiled rule set, `next(cursor)` and the lazy `Tokens` sequence
//! * [`lexer`]: stateful `reset`/`next` lexer owning its input
//! * [`driver`]: eager tokenization and the stop-on-error policy
//!
//! ## Usage Example
//!
//! ```rust
//! use rulelex::{Rules, TokenizeOptions};
//!
//! let matcher = Rules::new()
//!     .alternatives("keyword", ["if", "else"])
//!     .pattern("ident", "[A-Za-z_][A-Za-z0-9_]*")
//!     .pattern("ws", r"\s+")
//!     .compile()
//!     .unwrap();
//!
//! let tokens = matcher.tokenize("if ifx", TokenizeOptions::default());
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind.as_str()).collect();
//! assert_eq!(kinds, ["keyword", "ws", "ident"]);
//! ```

pub mod cursor;
pub mod driver;
pub mod lexer;
pub mod matcher;
pub mod token;
