use clap::{Parser, ValueEnum};
use rulelex::{LexerError, LexerResult, RuleSetConfig, Token, TokenizeOptions};
use std::{
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON rule set
    #[arg(short, long)]
    rules: PathBuf,

    /// Input file; stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Keep scanning past unmatched input
    #[arg(long)]
    continue_on_error: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the compiled rules in matching order instead of tokenizing
    #[arg(long)]
    explain: bool,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Returns whether the scan stopped on unmatched input.
fn run(cli: &Cli) -> LexerResult<bool> {
    let config = RuleSetConfig::from_file(&cli.rules)?;
    debug!("rule set loaded: {} rules", config.rules.len());
    let matcher = config.compile()?;

    let mut out = io::stdout().lock();
    if cli.explain {
        for entry in matcher.entries() {
            writeln!(
                out,
                "{:>6} {:<8} {:<16} {}",
                entry.priority,
                entry.category.as_ref(),
                entry.name,
                entry.pattern
            )?;
        }
        return Ok(false);
    }

    let source = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let options = TokenizeOptions {
        continue_on_error: cli.continue_on_error || config.continue_on_error,
    };
    let tokens = matcher.tokenize(&source, options);
    debug!("{} tokens", tokens.len());

    for token in &tokens {
        write_token(&mut out, token, cli.format)?;
    }

    Ok(!options.continue_on_error && tokens.last().is_some_and(Token::is_error))
}

fn write_token(out: &mut impl Write, token: &Token, format: Format) -> LexerResult<()> {
    match format {
        Format::Text => writeln!(out, "{}", token)?,
        Format::Json => writeln!(out, "{}", serde_json::to_string(token)?)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    match run(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(2),
        Err(LexerError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
