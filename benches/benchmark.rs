use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rulelex::{Matcher, RuleConfig, Rules, TokenizeOptions};

fn c_like_rules() -> Rules {
    Rules::new()
        .pattern("ws", r"[ \t]+")
        .configured("nl", RuleConfig::new(r"\r?\n").line_breaks(true))
        .configured(
            "comment",
            RuleConfig::new(r"//.*")
                .priority(900)
                .value(|text| text[2..].trim().to_string()),
        )
        .alternatives("keyword", ["if", "else", "while", "for", "return"])
        .alternatives("type", ["int", "float", "char", "void"])
        .alternatives(
            "op",
            ["++", "--", "+=", "-=", "==", "!=", "<=", ">=", "&&", "||"],
        )
        .alternatives(
            "single_op",
            ["=", "+", "-", "*", "/", "<", ">", "!", "&", "|"],
        )
        .alternatives("punct", ["(", ")", "{", "}", "[", "]", ";", ","])
        .pattern("ident", "[a-zA-Z_][a-zA-Z0-9_]*")
        .pattern("number", "[0-9]+")
        .pattern("string", r#""(?:[^"\\]|\\.)*""#)
}

fn source(copies: usize) -> String {
    let unit = "int sum(int* xs, int n) {\n\
                \x20   int total = 0; // running\n\
                \x20   for (int i = 0; i < n; i++) {\n\
                \x20       if (xs[i] >= 0 && xs[i] != 42) { total += xs[i]; }\n\
                \x20   }\n\
                \x20   return total;\n\
                }\n";
    unit.repeat(copies)
}

fn bench_compile(c: &mut Criterion) {
    let rules = c_like_rules();
    c.bench_function("compile c-like rules", |b| {
        b.iter(|| Matcher::compile(black_box(&rules)))
    });
}

fn bench_tokenize(c: &mut Criterion) {
    let matcher = c_like_rules().compile().expect("benchmark rules compile");
    let input = source(200);

    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("eager", |b| {
        b.iter(|| matcher.tokenize(black_box(&input), TokenizeOptions::default()))
    });
    group.bench_function("lazy", |b| {
        b.iter(|| matcher.tokens(black_box(&input)).count())
    });
    group.finish();
}

criterion_group!(benches, bench_compile, bench_tokenize);
criterion_main!(benches);
