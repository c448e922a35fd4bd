use thiserror::Error;

/// Errors raised while building a [`Matcher`](crate::tokenizer::matcher::Matcher)
/// or loading a rule set.
///
/// Unmatched input is never reported here; it comes back as tokens of the
/// reserved `"error"` kind.
#[derive(Error, Debug)]
pub enum LexerError {
    #[error("Invalid pattern for rule `{name}`: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule name `{0}` is reserved for unmatched input")]
    ReservedKind(String),

    #[error("Rule `{name}` contains an empty literal")]
    EmptyLiteral { name: String },

    #[error("Rule `{name}` has no alternatives")]
    EmptyAlternatives { name: String },

    #[error("Failed to build combined pattern: {0}")]
    Build(#[source] regex_automata::meta::BuildError),

    #[error("Rule set error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LexerResult<T> = Result<T, LexerError>;

impl LexerError {
    /// Name of the rule the error points at, when there is one.
    pub fn rule_name(&self) -> Option<&str> {
        match self {
            LexerError::InvalidPattern { name, .. }
            | LexerError::EmptyLiteral { name }
            | LexerError::EmptyAlternatives { name } => Some(name),
            LexerError::ReservedKind(name) => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = LexerError::ReservedKind("error".to_string());
        assert_eq!(
            error.to_string(),
            "Rule name `error` is reserved for unmatched input"
        );
        assert_eq!(error.rule_name(), Some("error"));

        let error = LexerError::EmptyAlternatives {
            name: "ops".to_string(),
        };
        assert_eq!(error.to_string(), "Rule `ops` has no alternatives");
        assert_eq!(error.rule_name(), Some("ops"));
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = LexerError::InvalidPattern {
            name: "broken".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("Invalid pattern for rule `broken`"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_config_error_has_no_rule_name() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = LexerError::from(source);
        assert!(error.rule_name().is_none());
    }
}
