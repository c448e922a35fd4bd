use rulelex::Token;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    // one subscriber per test binary, filtered by RUST_LOG
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// `(kind, value, start, end)` per token, for compact assertions.
#[allow(dead_code)]
pub fn summarize(tokens: &[Token]) -> Vec<(&str, Option<&str>, usize, usize)> {
    tokens
        .iter()
        .map(|t| (t.kind.as_str(), t.value(), t.span.start, t.span.end))
        .collect()
}

/// Asserts spans start at 0, touch each other and end at `end`.
#[allow(dead_code)]
pub fn assert_contiguous(tokens: &[Token], end: usize) {
    let mut expected = 0;
    for token in tokens {
        assert_eq!(token.span.start, expected, "gap or overlap before {:?}", token);
        expected = token.span.end;
    }
    assert_eq!(expected, end);
}
