//! Raw lexemes underneath the tokenizer state machine.
//!
//! Logos splits the input into single-character delimiters, whitespace runs
//! and text runs. Which of these are significant depends on the tokenizer
//! state, so no token kinds are decided here.

use std::ops::Range;

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LexemeKind {
    #[token(",")]
    Comma,

    #[token("=")]
    Equals,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("'")]
    SingleQuote,

    #[token("\"")]
    DoubleQuote,

    #[token("\\")]
    Backslash,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r#"[^,=()'"\\ \t\r\n]+"#)]
    Text,
}

impl LexemeKind {
    #[inline]
    pub(crate) fn is_quote(self) -> bool {
        matches!(self, Self::SingleQuote | Self::DoubleQuote)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Lexeme {
    pub kind: LexemeKind,
    pub span: Range<usize>,
}

/// Splits `source` into lexemes covering every byte, in order.
///
/// Anything Logos rejects is coalesced into `Text`, so the result never has gaps.
pub(crate) fn lexemes(source: &str) -> Vec<Lexeme> {
    let mut out: Vec<Lexeme> = Vec::new();
    let mut lexer = LexemeKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let kind = result.unwrap_or(LexemeKind::Text);
        match out.last_mut() {
            Some(prev) if kind == LexemeKind::Text && prev.kind == LexemeKind::Text => {
                prev.span.end = span.end;
            }
            _ => out.push(Lexeme { kind, span }),
        }
    }

    out
}
