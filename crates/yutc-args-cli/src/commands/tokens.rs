//! Dump the token stream of an argument.

use std::fmt::Write;

use yutc_args::{Token, TokenKind, Tokenizer, token_text};

use crate::cli::TokenFormat;
use crate::colors::Colors;

pub struct TokensArgs {
    pub input: String,
    pub format: TokenFormat,
    pub escapes: bool,
    pub color: bool,
}

pub fn run(args: TokensArgs) {
    let tokens = Tokenizer::new(&args.input)
        .with_escapes(args.escapes)
        .run();

    let out = match args.format {
        TokenFormat::Table => format_table(&args.input, &tokens, Colors::new(args.color)),
        TokenFormat::Python => format_python(&args.input, &tokens),
    };
    print!("{out}");

    if tokens.last().is_some_and(|t| t.kind == TokenKind::Invalid) {
        std::process::exit(1);
    }
}

/// One token per line: span, kind, quoted text.
pub fn format_table(source: &str, tokens: &[Token], colors: Colors) -> String {
    let mut out = String::new();
    for token in tokens {
        let span = format!("{}..{}", token.start(), token.end());
        let kind = token.kind.as_str();
        let color = kind_color(token.kind, colors);
        writeln!(
            out,
            "{dim}{span:<9}{reset} {color}{kind:<16}{reset} {:?}",
            token_text(source, token),
            dim = colors.dim,
            reset = colors.reset,
        )
        .expect("String write never fails");
    }
    out
}

/// A Python list literal of `Token(...)` calls.
pub fn format_python(source: &str, tokens: &[Token]) -> String {
    let lines: Vec<String> = tokens
        .iter()
        .map(|token| {
            format!(
                "    Token(type={:?}, literal={:?}, span=({}, {}))",
                token.kind.as_str(),
                token_text(source, token),
                token.start(),
                token.end()
            )
        })
        .collect();

    format!("tokens = [\n{}\n]\n", lines.join(",\n"))
}

fn kind_color(kind: TokenKind, colors: Colors) -> &'static str {
    match kind {
        TokenKind::Key | TokenKind::KeyLiteral => colors.blue,
        TokenKind::Value | TokenKind::ValueLiteral => colors.green,
        TokenKind::Invalid => colors.red,
        _ => colors.dim,
    }
}
