use serde::{Deserialize, Serialize};

use super::{matcher::Matcher, token::Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenizeOptions {
    /// Keep scanning past unmatched input instead of stopping at the first
    /// error token.
    #[serde(default)]
    pub continue_on_error: bool,
}

impl TokenizeOptions {
    pub fn continue_on_error() -> Self {
        Self {
            continue_on_error: true,
        }
    }
}

/// Tokenizes all of `input`.
///
/// By default the scan stops at the first error token, which is kept as the
/// last element. With [`TokenizeOptions::continue_on_error`] every error
/// token is collected and the scan runs to end of input.
#[tracing::instrument(level = "debug", skip(matcher, input), fields(len = input.len()))]
pub fn tokenize(matcher: &Matcher, input: &str, options: TokenizeOptions) -> Vec<Token> {
    if input.is_empty() {
        return Vec::new();
    }

    collect_tokens(matcher.tokens(input), options)
}

/// Drains `tokens`, applying the error policy of `options`.
pub(crate) fn collect_tokens<I>(tokens: I, options: TokenizeOptions) -> Vec<Token>
where
    I: Iterator<Item = Token>,
{
    let mut collected = Vec::new();
    for token in tokens {
        let stop = token.is_error() && !options.continue_on_error;
        if stop {
            tracing::debug!(
                "unmatched input at {} ({}), stopping",
                token.position,
                token.span
            );
        }
        collected.push(token);
        if stop {
            break;
        }
    }
    collected
}
