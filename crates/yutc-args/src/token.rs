//! Token kinds produced by the tokenizer.
//!
//! Tokens are span-based: text is sliced from the input only when needed,
//! via [`token_text`].

use std::fmt;

use rowan::{TextRange, TextSize};

/// All token kinds. `Start` always opens a stream and exactly one of
/// `Eof`/`Invalid` closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Start,
    Eof,
    FieldSep,
    Eq,
    QuoteEnter,
    QuoteExit,
    Key,
    /// Reserved for quoted keys; the tokenizer currently reports quoted
    /// leading text as `ValueLiteral`.
    KeyLiteral,
    Value,
    ValueLiteral,
    ParenEnterCall,
    ParenExitCall,
    Invalid,
}

impl TokenKind {
    /// Terminal kinds end the stream.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Eof | Self::Invalid)
    }

    /// Name used in error messages and token dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Eof => "EOF",
            Self::FieldSep => "FIELD_SEP",
            Self::Eq => "EQ",
            Self::QuoteEnter => "QUOTE_ENTER",
            Self::QuoteExit => "QUOTE_EXIT",
            Self::Key => "KEY",
            Self::KeyLiteral => "KEY_LITERAL",
            Self::Value => "VALUE",
            Self::ValueLiteral => "VALUE_LITERAL",
            Self::ParenEnterCall => "PAREN_ENTER_CALL",
            Self::ParenExitCall => "PAREN_EXIT_CALL",
            Self::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }

    /// Byte offset where the token starts.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start().into()
    }

    /// Byte offset one past the token's last byte.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end().into()
    }
}

pub(crate) fn text_range(start: usize, end: usize) -> TextRange {
    TextRange::new(text_size(start), text_size(end))
}

/// Offsets past `u32::MAX` saturate; spans of inputs over 4 GiB are not exact.
pub(crate) fn text_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::from(u32::MAX))
}

/// Retrieves the text slice for a token. O(1) slice into the input.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
