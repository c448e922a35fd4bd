//! Property-based tests for the scanning guarantees.

mod common;

use proptest::prelude::*;
use rulelex::{Lexer, Matcher, RuleConfig, Rules, TokenizeOptions};

fn language() -> Rules {
    Rules::new()
        .pattern("ws", r"[ \t]+")
        .configured("nl", RuleConfig::new(r"\r?\n").line_breaks(true))
        .alternatives("keyword", ["if", "else", "let"])
        .alternatives("op", ["==", "=", "+", "++", "(", ")"])
        .pattern("ident", "[a-z_][a-z0-9_]*")
        .pattern("number", "[0-9]+")
}

fn matcher() -> Matcher {
    language().compile().expect("language rules compile")
}

/// Text mixing matched and unmatched chars, including multi-byte ones.
fn input_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9 =+()\\n$%é€]{0,48}"
}

/// Space-separated identifier-shaped words.
fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    let word = prop_oneof![
        prop::sample::select(vec!["if", "else", "let"]).prop_map(str::to_string),
        "[a-z]{1,6}",
    ];
    prop::collection::vec(word, 1..12)
}

proptest! {
    #[test]
    fn test_coverage_and_contiguity(input in input_strategy()) {
        let tokens = matcher().tokenize(&input, TokenizeOptions::continue_on_error());

        let mut offset = 0;
        for token in &tokens {
            // every token consumes at least one char
            prop_assert!(!token.span.is_empty());
            prop_assert_eq!(token.span.start, offset);
            offset = token.span.end;
        }
        prop_assert_eq!(offset, input.len());

        let rebuilt: String = tokens.iter().map(|t| t.span.slice(&input)).collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_stop_mode_ends_on_first_error(input in input_strategy()) {
        let matcher = matcher();
        let all = matcher.tokenize(&input, TokenizeOptions::continue_on_error());
        let stopped = matcher.tokenize(&input, TokenizeOptions::default());

        match all.iter().position(|t| t.is_error()) {
            Some(first_error) => prop_assert_eq!(&stopped[..], &all[..=first_error]),
            None => prop_assert_eq!(&stopped, &all),
        }
    }

    #[test]
    fn test_error_tokens_are_single_chars(input in input_strategy()) {
        let tokens = matcher().tokenize(&input, TokenizeOptions::continue_on_error());
        for token in tokens.iter().filter(|t| t.is_error()) {
            let text = token.span.slice(&input);
            prop_assert_eq!(text.chars().count(), 1);
            prop_assert_eq!(token.value(), Some(text));
        }
    }

    #[test]
    fn test_lazy_eager_and_pull_agree(input in input_strategy()) {
        let matcher = matcher();
        let eager = matcher.tokenize(&input, TokenizeOptions::continue_on_error());
        let lazy: Vec<_> = matcher.tokens(&input).collect();

        let mut lexer = Lexer::new(matcher.clone());
        lexer.reset(input.as_str());
        let pulled: Vec<_> = lexer.by_ref().collect();

        prop_assert_eq!(&eager, &lazy);
        prop_assert_eq!(&eager, &pulled);
    }

    #[test]
    fn test_compilation_is_deterministic(input in input_strategy()) {
        let first = matcher();
        let second = matcher();
        prop_assert_eq!(first.pattern(), second.pattern());
        prop_assert_eq!(
            first.tokenize(&input, TokenizeOptions::continue_on_error()),
            second.tokenize(&input, TokenizeOptions::continue_on_error())
        );
    }

    #[test]
    fn test_keywords_only_match_whole_words(words in words_strategy()) {
        let input = words.join(" ");
        let tokens = matcher().tokenize(&input, TokenizeOptions::default());
        let scanned: Vec<_> = tokens.iter().filter(|t| t.kind != "ws").collect();

        prop_assert_eq!(scanned.len(), words.len());
        for (token, word) in scanned.iter().zip(&words) {
            let expected = if ["if", "else", "let"].contains(&word.as_str()) {
                "keyword"
            } else {
                "ident"
            };
            prop_assert_eq!(token.kind.as_str(), expected);
            prop_assert_eq!(token.value(), Some(word.as_str()));
        }
    }

    #[test]
    fn test_lines_follow_newline_tokens(lines in prop::collection::vec("[a-z]{1,5}", 1..8)) {
        let input = lines.join("\n");
        let tokens = matcher().tokenize(&input, TokenizeOptions::default());
        let starts: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind != "nl")
            .map(|t| (t.position.line, t.position.column))
            .collect();
        let expected: Vec<_> = (1..=lines.len()).map(|line| (line, 1)).collect();
        prop_assert_eq!(starts, expected);
    }
}
