//! # Rules
//!
//! A rule set is an ordered mapping from kind name to [`Rule`]. Insertion
//! order is only an input to compilation; matching priority is decided by the
//! [`compiler`](crate::compiler).

use crate::{
    error::LexerResult,
    tokenizer::matcher::Matcher,
    transform::{Transform, ValueTransform},
};

/// How one kind of token is recognized.
#[derive(Debug, Clone)]
pub enum Rule {
    /// One exact string.
    Literal(String),
    /// A regular expression fragment, used verbatim.
    Pattern(String),
    /// A set of exact strings, any of which produces this kind.
    Alternatives(Vec<String>),
    /// A pattern with a value transform, line tracking or explicit priority.
    Configured(RuleConfig),
}

impl Rule {
    pub fn literal(text: impl Into<String>) -> Self {
        Rule::Literal(text.into())
    }

    pub fn pattern(source: impl Into<String>) -> Self {
        Rule::Pattern(source.into())
    }

    pub fn alternatives<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Rule::Alternatives(items.into_iter().map(Into::into).collect())
    }
}

impl From<RuleConfig> for Rule {
    fn from(config: RuleConfig) -> Self {
        Rule::Configured(config)
    }
}

/// An explicit pattern plus the optional knobs a plain [`Rule::Pattern`] lacks.
#[derive(Debug, Clone)]
pub struct RuleConfig {
    pub pattern: String,
    pub transform: Option<Transform>,
    /// Track newlines inside matches of this rule when computing line/column.
    pub line_breaks: bool,
    /// Replaces the computed priority entirely when set.
    pub priority: Option<i32>,
}

impl RuleConfig {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            transform: None,
            line_breaks: false,
            priority: None,
        }
    }

    pub fn value<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.transform = Some(Transform::new(f));
        self
    }

    pub fn value_transform(mut self, transform: ValueTransform) -> Self {
        self.transform = Some(transform.into());
        self
    }

    pub fn line_breaks(mut self, line_breaks: bool) -> Self {
        self.line_breaks = line_breaks;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Insertion-ordered `kind name -> Rule` mapping.
#[derive(Debug, Clone, Default)]
pub struct Rules {
    entries: Vec<(String, Rule)>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule, replacing (in place) any rule already registered under `name`.
    pub fn insert(&mut self, name: impl Into<String>, rule: impl Into<Rule>) -> &mut Self {
        let name = name.into();
        let rule = rule.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = rule,
            None => self.entries.push((name, rule)),
        }
        self
    }

    pub fn with(mut self, name: impl Into<String>, rule: impl Into<Rule>) -> Self {
        self.insert(name, rule);
        self
    }

    pub fn literal(self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.with(name, Rule::literal(text))
    }

    pub fn pattern(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.with(name, Rule::pattern(source))
    }

    pub fn alternatives<I, S>(self, name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(name, Rule::alternatives(items))
    }

    pub fn configured(self, name: impl Into<String>, config: RuleConfig) -> Self {
        self.with(name, config)
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, rule)| rule)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.entries.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn compile(&self) -> LexerResult<Matcher> {
        Matcher::compile(self)
    }
}

impl<K: Into<String>, R: Into<Rule>> FromIterator<(K, R)> for Rules {
    fn from_iter<T: IntoIterator<Item = (K, R)>>(iter: T) -> Self {
        let mut rules = Rules::new();
        for (name, rule) in iter {
            rules.insert(name, rule);
        }
        rules
    }
}
