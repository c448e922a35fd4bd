//! # rulelex: rule-compiled lexical tokenizer
//!
//! `rulelex` turns a set of named rules into one deterministic matcher and
//! scans text into tokens. It is meant to be the first stage of a parser or
//! language tool.
//!
//! ## Pipeline
//!
//! ```text
//! Rules → Rule Compiler → Matcher → (Cursor → Token)* → Vec<Token>
//! ```
//!
//! ### Rules
//!
//! A [`Rules`] mapping associates each kind name with one [`Rule`]: a literal,
//! a regular expression fragment, a set of literal alternatives, or a
//! [`RuleConfig`] with a value transform, line tracking or explicit priority.
//! Rule sets can also be loaded from JSON ([`config`]).
//!
//! ### Rule Compiler
//!
//! The [`compiler`] orders all rules by priority and fuses them into a single
//! alternation, so keywords win over identifier patterns and `"=="` wins
//! over `"="` without the regex engine knowing about priorities.
//!
//! ### Scanning
//!
//! The [`tokenizer`] module scans with the compiled [`Matcher`]. It offers a
//! pure `next(cursor)` step, a lazy iterator, a stateful [`Lexer`] and the
//! eager [`tokenize`] driver.
//!
//! ## Errors
//!
//! Broken rules fail compilation with a [`LexerError`]. Input that no rule
//! matches is not an error: it becomes a one-char token of kind `"error"`,
//! and [`TokenizeOptions`] decides whether scanning stops there.
//!
//! ## Example
//!
//! ```rust
//! use rulelex::{Rules, TokenizeOptions};
//!
//! let matcher = Rules::new()
//!     .pattern("ws", r"\s+")
//!     .alternatives("increment", ["++", "--"])
//!     .alternatives("single_op", ["+", "-"])
//!     .pattern("ident", "[a-zA-Z]+")
//!     .compile()?;
//!
//! let tokens = matcher.tokenize("x++ + y", TokenizeOptions::default());
//! assert_eq!(tokens[1].kind, "increment");
//! assert_eq!(tokens[3].kind, "single_op");
//! # Ok::<(), rulelex::LexerError>(())
//! ```

pub mod compiler;
pub mod config;
pub mod error;
pub mod rule;
pub mod tokenizer;
pub mod transform;

// Re-exports
pub use config::RuleSetConfig;
pub use error::{LexerError, LexerResult};
pub use rule::{Rule, RuleConfig, Rules};
pub use tokenizer::{
    cursor::Cursor,
    driver::{tokenize, TokenizeOptions},
    lexer::Lexer,
    matcher::{Matcher, Tokens},
    token::{Position, Span, Token, ERROR_KIND},
};
pub use transform::{Transform, ValueTransform};
