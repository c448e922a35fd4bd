//! # Rule Compiler
//!
//! Folds a [`Rules`] mapping into one ordered list of [`CompiledRule`]s and
//! fuses them into a single alternation.
//!
//! ## Priority
//!
//! The regex engine resolves overlapping alternatives by their textual order,
//! first alternative wins. The compiler therefore sorts entries so that the
//! textual order is the intended priority:
//!
//! 1. a base priority per [`Category`]: keyword groups over operator groups
//!    over arbitrary patterns, so `["if"]` beats an identifier pattern
//! 2. plus a magnitude term from the entry's length (longest member, or the
//!    pattern source length), so `"++"` beats `"+"` within a category
//! 3. an explicit [`RuleConfig::priority`] replaces both
//!
//! Entries are ordered by priority, then length, both descending, then by
//! kind name ascending.
//!
//! ## Keyword boundaries
//!
//! Identifier-shaped literals are wrapped in ASCII `\b` assertions, so `if`
//! never matches the head of `ifx` or the tail of `1if`. Word chars are
//! `[A-Za-z0-9_]`, the same class used to classify literals. Punctuation is
//! left unprotected.

use lazy_static::lazy_static;
use regex::Regex;
use regex_automata::{meta, Anchored, Input};

use crate::{
    error::{LexerError, LexerResult},
    rule::{Rule, RuleConfig, Rules},
    tokenizer::token::ERROR_KIND,
    transform::Transform,
};

lazy_static! {
    static ref IDENTIFIER_SHAPED: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    static ref IDENTIFIER_CHARS: Regex = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
}

/// What kind of source an entry was compiled from; decides its base priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    /// Identifier-shaped literals, boundary protected.
    Keyword,
    /// Any other literals.
    Operator,
    /// Regular expression fragments.
    Pattern,
}

impl Category {
    pub fn base_priority(self) -> i32 {
        match self {
            Category::Keyword => 1000,
            Category::Operator => 800,
            Category::Pattern => 600,
        }
    }

    fn length_weight(self) -> i32 {
        match self {
            Category::Keyword | Category::Operator => 10,
            Category::Pattern => 5,
        }
    }

    /// Base priority plus the magnitude term for an entry of `length` chars.
    pub fn priority_for(self, length: usize) -> i32 {
        let length = i32::try_from(length).unwrap_or(i32::MAX);
        self.base_priority()
            .saturating_add(length.saturating_mul(self.length_weight()))
    }
}

/// One alternative of the fused pattern.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Regex source of this alternative, without its wrapping group.
    pub pattern: String,
    /// Kind name of the owning rule.
    pub name: String,
    pub transform: Option<Transform>,
    pub line_breaks: bool,
    pub priority: i32,
    pub original_length: usize,
    pub category: Category,
    /// Capture groups declared inside `pattern` itself.
    pub(crate) inner_groups: usize,
}

impl CompiledRule {
    fn literal_group(name: &str, category: Category, members: &[&str]) -> Self {
        let original_length = members
            .iter()
            .map(|m| m.chars().count())
            .max()
            .unwrap_or(0);
        let escaped: Vec<String> = members.iter().map(|m| regex::escape(m)).collect();
        let body = if escaped.len() == 1 {
            escaped.concat()
        } else {
            format!("(?:{})", escaped.join("|"))
        };
        let pattern = match category {
            Category::Keyword => format!(r"(?-u:\b){}(?-u:\b)", body),
            _ => body,
        };

        Self {
            pattern,
            name: name.to_string(),
            transform: None,
            line_breaks: false,
            priority: category.priority_for(original_length),
            original_length,
            category,
            inner_groups: 0,
        }
    }

    fn regex_fragment(name: &str, config: &RuleConfig) -> LexerResult<Self> {
        let inner_groups = Regex::new(&config.pattern)
            .map_err(|source| LexerError::InvalidPattern {
                name: name.to_string(),
                source,
            })?
            .captures_len()
            - 1;
        let original_length = config.pattern.chars().count();

        Ok(Self {
            pattern: config.pattern.clone(),
            name: name.to_string(),
            transform: config.transform.clone(),
            line_breaks: config.line_breaks,
            priority: config
                .priority
                .unwrap_or_else(|| Category::Pattern.priority_for(original_length)),
            original_length,
            category: Category::Pattern,
            inner_groups,
        })
    }
}

/// Compiles one rule into its entries: one for most rules, two for an
/// [`Rule::Alternatives`] mixing keyword-shaped and other members.
pub fn compile_rule(name: &str, rule: &Rule) -> LexerResult<Vec<CompiledRule>> {
    if name == ERROR_KIND {
        return Err(LexerError::ReservedKind(name.to_string()));
    }

    match rule {
        Rule::Literal(text) => {
            if text.is_empty() {
                return Err(LexerError::EmptyLiteral {
                    name: name.to_string(),
                });
            }
            let category = if IDENTIFIER_CHARS.is_match(text) {
                Category::Keyword
            } else {
                Category::Operator
            };
            Ok(vec![CompiledRule::literal_group(name, category, &[text.as_str()])])
        }
        Rule::Pattern(source) => Ok(vec![CompiledRule::regex_fragment(
            name,
            &RuleConfig::new(source.as_str()),
        )?]),
        Rule::Alternatives(items) => compile_alternatives(name, items),
        Rule::Configured(config) => Ok(vec![CompiledRule::regex_fragment(name, config)?]),
    }
}

fn compile_alternatives(name: &str, items: &[String]) -> LexerResult<Vec<CompiledRule>> {
    if items.is_empty() {
        return Err(LexerError::EmptyAlternatives {
            name: name.to_string(),
        });
    }
    if items.iter().any(String::is_empty) {
        return Err(LexerError::EmptyLiteral {
            name: name.to_string(),
        });
    }

    // longest first, so "==" is tried before "="
    let mut sorted: Vec<&str> = items.iter().map(String::as_str).collect();
    sorted.sort_by_key(|item| std::cmp::Reverse(item.chars().count()));

    let (keywords, operators): (Vec<&str>, Vec<&str>) = sorted
        .into_iter()
        .partition(|item| IDENTIFIER_SHAPED.is_match(item));

    let mut compiled = Vec::with_capacity(2);
    if !keywords.is_empty() {
        compiled.push(CompiledRule::literal_group(name, Category::Keyword, &keywords));
    }
    if !operators.is_empty() {
        compiled.push(CompiledRule::literal_group(name, Category::Operator, &operators));
    }
    Ok(compiled)
}

/// Compiles every rule and sorts the entries into matching order.
#[tracing::instrument(level = "debug", skip(rules), fields(rules = rules.len()))]
pub fn compile_rules(rules: &Rules) -> LexerResult<Vec<CompiledRule>> {
    let mut compiled = Vec::with_capacity(rules.len());
    for (name, rule) in rules.iter() {
        compiled.extend(compile_rule(name, rule)?);
    }

    compiled.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then(b.original_length.cmp(&a.original_length))
            .then_with(|| a.name.cmp(&b.name))
    });

    for entry in &compiled {
        tracing::trace!(
            name = %entry.name,
            category = %entry.category,
            priority = entry.priority,
            pattern = %entry.pattern,
            "compiled rule"
        );
    }
    tracing::debug!("compiled {} entries", compiled.len());
    Ok(compiled)
}

/// The fused pattern and, per entry, the index of the group wrapping it.
///
/// Searches are anchored at the cursor but run over the whole input, so `^`
/// and `\b` in a rule still see the text before the cursor.
#[derive(Debug, Clone)]
pub struct Alternation {
    pub regex: meta::Regex,
    pub source: String,
    pub groups: Vec<usize>,
    /// Each entry on its own, tried when the fused match is empty.
    singles: Vec<meta::Regex>,
}

impl Alternation {
    /// Anchored search at `offset` over the whole of `input`.
    pub fn anchored_at<'h>(input: &'h str, offset: usize) -> Input<'h> {
        Input::new(input).range(offset..).anchored(Anchored::Yes)
    }

    /// First entry after `winner` with a non-empty match, and where that
    /// match ends.
    pub fn first_non_empty_after(
        &self,
        winner: usize,
        input: &Input<'_>,
    ) -> Option<(usize, usize)> {
        self.singles
            .iter()
            .enumerate()
            .skip(winner + 1)
            .find_map(|(index, regex)| {
                regex
                    .search(input)
                    .filter(|found| !found.is_empty())
                    .map(|found| (index, found.end()))
            })
    }
}

/// Joins sorted entries into `(?:(e0)|(e1)|...)`.
///
/// Returns `None` when there is nothing to match.
pub fn build_alternation(entries: &[CompiledRule]) -> LexerResult<Option<Alternation>> {
    if entries.is_empty() {
        return Ok(None);
    }

    let mut source = String::from("(?:");
    let mut groups = Vec::with_capacity(entries.len());
    let mut next_group = 1;
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            source.push('|');
        }
        source.push('(');
        source.push_str(&entry.pattern);
        source.push(')');
        groups.push(next_group);
        next_group += 1 + entry.inner_groups;
    }
    source.push(')');

    tracing::debug!(pattern = %source, "built alternation");
    let regex = meta::Regex::new(&source).map_err(LexerError::Build)?;
    let singles = entries
        .iter()
        .map(|entry| meta::Regex::new(&entry.pattern).map_err(LexerError::Build))
        .collect::<LexerResult<Vec<_>>>()?;
    Ok(Some(Alternation {
        regex,
        source,
        groups,
        singles,
    }))
}
