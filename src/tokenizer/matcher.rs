use std::sync::Arc;

use regex_automata::util::captures::Captures;

use super::{
    cursor::Cursor,
    driver::{tokenize, TokenizeOptions},
    token::Token,
};
use crate::{
    compiler::{build_alternation, compile_rules, Alternation, CompiledRule},
    error::LexerResult,
    rule::Rules,
};

/// Compiled, immutable form of a rule set.
///
/// Cloning is cheap and a `Matcher` can be shared between threads; all scan
/// state lives in [`Cursor`] values.
#[derive(Debug, Clone)]
pub struct Matcher {
    inner: Arc<MatcherInner>,
}

#[derive(Debug)]
struct MatcherInner {
    entries: Vec<CompiledRule>,
    alternation: Option<Alternation>,
}

impl Matcher {
    pub fn compile(rules: &Rules) -> LexerResult<Self> {
        let entries = compile_rules(rules)?;
        let alternation = build_alternation(&entries)?;
        Ok(Self {
            inner: Arc::new(MatcherInner {
                entries,
                alternation,
            }),
        })
    }

    /// Compiled entries in matching order.
    pub fn entries(&self) -> &[CompiledRule] {
        &self.inner.entries
    }

    /// Source of the fused pattern; empty when there are no rules.
    pub fn pattern(&self) -> &str {
        self.inner
            .alternation
            .as_ref()
            .map_or("", |alternation| alternation.source.as_str())
    }

    /// Produces the token at `cursor` and the cursor just past it, or `None`
    /// at end of input.
    pub fn next<'a>(&self, cursor: Cursor<'a>) -> Option<(Token, Cursor<'a>)> {
        let mut captures = self.create_captures();
        self.step(cursor, captures.as_mut())
    }

    /// Lazy token sequence over `input`.
    pub fn tokens<'m, 'a>(&'m self, input: &'a str) -> Tokens<'m, 'a> {
        self.tokens_from(Cursor::new(input))
    }

    /// Lazy token sequence resuming at `cursor`.
    pub fn tokens_from<'m, 'a>(&'m self, cursor: Cursor<'a>) -> Tokens<'m, 'a> {
        Tokens {
            matcher: self,
            cursor,
            captures: self.create_captures(),
        }
    }

    pub fn tokenize(&self, input: &str, options: TokenizeOptions) -> Vec<Token> {
        tokenize(self, input, options)
    }

    fn create_captures(&self) -> Option<Captures> {
        self.inner
            .alternation
            .as_ref()
            .map(|alternation| alternation.regex.create_captures())
    }

    fn step<'a>(
        &self,
        cursor: Cursor<'a>,
        captures: Option<&mut Captures>,
    ) -> Option<(Token, Cursor<'a>)> {
        if cursor.is_done() {
            return None;
        }

        if let (Some(alternation), Some(captures)) = (&self.inner.alternation, captures) {
            if let Some(found) = self.match_at(alternation, cursor, captures) {
                return Some(found);
            }
        }

        // nothing matched: one char becomes an error token
        let position = cursor.position();
        let (c, span, next) = cursor.advance_char()?;
        tracing::trace!(offset = span.start, "unmatched {:?}", c);
        Some((Token::error(c, span, position), next))
    }

    fn match_at<'a>(
        &self,
        alternation: &Alternation,
        cursor: Cursor<'a>,
        captures: &mut Captures,
    ) -> Option<(Token, Cursor<'a>)> {
        let input = Alternation::anchored_at(cursor.input(), cursor.offset());
        alternation.regex.search_captures(&input, captures);
        let found = captures.get_match()?;

        let winner = alternation
            .groups
            .iter()
            .position(|&group| captures.get_group(group).is_some())?;
        // an empty match never advances, so a later entry gets the position
        let (index, end) = if found.is_empty() {
            alternation.first_non_empty_after(winner, &input)?
        } else {
            (winner, found.end())
        };

        let entry = &self.inner.entries[index];
        let text = &cursor.remaining()[..end - cursor.offset()];

        let position = cursor.position();
        let (span, next) = cursor.advance(text, entry.line_breaks);
        let value = match &entry.transform {
            Some(transform) => transform.apply(text),
            None => text.to_string(),
        };
        Some((Token::new(entry.name.as_str(), value, span, position), next))
    }
}

/// Lazy, finite token sequence produced by [`Matcher::tokens`].
#[derive(Debug)]
pub struct Tokens<'m, 'a> {
    matcher: &'m Matcher,
    cursor: Cursor<'a>,
    captures: Option<Captures>,
}

impl<'a> Tokens<'_, 'a> {
    /// Where the next token will start.
    pub fn cursor(&self) -> Cursor<'a> {
        self.cursor
    }
}

impl Iterator for Tokens<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let (token, next) = self.matcher.step(self.cursor, self.captures.as_mut())?;
        self.cursor = next;
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}
