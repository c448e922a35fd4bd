//! # Value Transforms
//!
//! A rule may rewrite the text it matched before it becomes a token value,
//! e.g. a string rule that drops its quotes or a comment rule that drops its
//! leading `//`.
//!
//! * [`Transform`]: any `Fn(&str) -> String`, shared between clones of a rule
//! * [`ValueTransform`]: serializable built-ins, usable from rule-set files

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// A shared text rewrite applied to matched text.
#[derive(Clone)]
pub struct Transform(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl Transform {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn apply(&self, text: &str) -> String {
        (self.0)(text)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}

impl From<ValueTransform> for Transform {
    fn from(value: ValueTransform) -> Self {
        Transform::new(move |text| value.apply(text))
    }
}

/// Built-in transforms that can be named in a rule-set file.
///
/// Serialized as `"trim"`, `{"drop_prefix": 2}`, `{"chain": ["trim", ...]}`
/// and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ValueTransform {
    Trim,
    Lowercase,
    Uppercase,
    /// Drops the first and last character, e.g. surrounding quotes.
    Unquote,
    /// Replaces every `\x` escape with `x`.
    Unescape,
    /// Drops the first `n` characters.
    DropPrefix(usize),
    Constant(String),
    Chain(Vec<ValueTransform>),
}

impl ValueTransform {
    pub fn apply(&self, text: &str) -> String {
        match self {
            ValueTransform::Trim => text.trim().to_string(),
            ValueTransform::Lowercase => text.to_lowercase(),
            ValueTransform::Uppercase => text.to_uppercase(),
            ValueTransform::Unquote => unquote(text).to_string(),
            ValueTransform::Unescape => unescape(text),
            ValueTransform::DropPrefix(n) => text.chars().skip(*n).collect(),
            ValueTransform::Constant(value) => value.clone(),
            ValueTransform::Chain(steps) => steps
                .iter()
                .fold(text.to_string(), |acc, step| step.apply(&acc)),
        }
    }
}

fn unquote(text: &str) -> &str {
    let mut chars = text.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return "";
    }
    chars.as_str()
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                // dangling backslash is kept as-is
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_transforms() {
        assert_eq!(ValueTransform::Trim.apply("  x  "), "x");
        assert_eq!(ValueTransform::Lowercase.apply("ABC"), "abc");
        assert_eq!(ValueTransform::Uppercase.apply("abc"), "ABC");
        assert_eq!(ValueTransform::Unquote.apply("\"hi\""), "hi");
        assert_eq!(ValueTransform::Unquote.apply("\""), "");
        assert_eq!(ValueTransform::Unescape.apply(r#"a\"b\\c\"#), r#"a"b\c\"#);
        assert_eq!(ValueTransform::DropPrefix(2).apply("// note"), " note");
        assert_eq!(
            ValueTransform::Constant("\n".to_string()).apply("\r\n"),
            "\n"
        );
    }

    #[test]
    fn test_chain_applies_in_order() {
        let comment = ValueTransform::Chain(vec![
            ValueTransform::DropPrefix(2),
            ValueTransform::Trim,
        ]);
        assert_eq!(comment.apply("// comment  "), "comment");

        let string = ValueTransform::Chain(vec![ValueTransform::Unquote, ValueTransform::Unescape]);
        assert_eq!(string.apply(r#""say \"hi\"""#), r#"say "hi""#);
    }

    #[test]
    fn test_drop_prefix_counts_chars() {
        assert_eq!(ValueTransform::DropPrefix(1).apply("ééé"), "éé");
        assert_eq!(ValueTransform::DropPrefix(10).apply("abc"), "");
    }

    #[test]
    fn test_serde_names() {
        let parsed: ValueTransform = serde_json::from_str(r#""trim""#).unwrap();
        assert_eq!(parsed, ValueTransform::Trim);

        let parsed: ValueTransform =
            serde_json::from_str(r#"{"chain": [{"drop_prefix": 2}, "trim"]}"#).unwrap();
        assert_eq!(
            parsed,
            ValueTransform::Chain(vec![ValueTransform::DropPrefix(2), ValueTransform::Trim])
        );
        assert_eq!(ValueTransform::DropPrefix(2).to_string(), "drop_prefix");
    }

    #[test]
    fn test_transform_wraps_closure() {
        let transform = Transform::new(|text| text.replace('-', "_"));
        assert_eq!(transform.apply("a-b"), "a_b");
        assert_eq!(format!("{:?}", transform), "Transform(..)");

        let builtin = Transform::from(ValueTransform::Uppercase);
        assert_eq!(builtin.clone().apply("ok"), "OK");
    }
}
