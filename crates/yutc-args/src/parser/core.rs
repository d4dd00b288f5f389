//! Parser state and low-level token operations.

use std::borrow::Cow;
use std::cell::Cell;

use rowan::TextRange;

use crate::arg::Arg;
use crate::escape::unescape;
use crate::lexer::Tokenizer;
use crate::token::{Token, TokenKind, text_size, token_text};
use crate::validation::ValidationPolicy;
use crate::{Error, Result};

pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) policy: ValidationPolicy,
    pub(super) escapes: bool,
    pub(super) debug_fuel: Cell<u32>,
}

impl<'src> Parser<'src> {
    /// Parser with the default validation policy and escapes disabled.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            pos: 0,
            policy: ValidationPolicy::DEFAULT,
            escapes: false,
            debug_fuel: Cell::new(256),
        }
    }

    pub fn with_validation(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Treat `\x` as a literal `x` in values.
    pub fn with_escapes(mut self, enabled: bool) -> Self {
        self.escapes = enabled;
        self
    }

    pub fn parse(mut self) -> Result<Arg> {
        self.tokens = Tokenizer::new(self.source)
            .with_escapes(self.escapes)
            .run();
        tracing::trace!(tokens = self.tokens.len(), "tokenized input");
        self.parse_arg()
    }

    pub(super) fn current(&self) -> TokenKind {
        self.nth(0)
    }

    pub(super) fn peek(&self) -> TokenKind {
        self.nth(1)
    }

    fn nth(&self, lookahead: usize) -> TokenKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Current token; a synthetic `Eof` at the end of input past the buffer.
    pub(super) fn current_token(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or_else(|| {
            Token::new(TokenKind::Eof, TextRange::empty(text_size(self.source.len())))
        })
    }

    pub(super) fn advance(&mut self) {
        self.debug_fuel.set(256);
        self.pos += 1;
    }

    /// Consumes and returns the current token if it has the `expected` kind.
    pub(super) fn expect(&mut self, expected: TokenKind) -> Result<Token> {
        let token = self.current_token();
        if token.kind != expected {
            return Err(self.unexpected(expected));
        }
        self.advance();
        Ok(token)
    }

    pub(super) fn unexpected(&self, expected: TokenKind) -> Error {
        let found = self.current_token();
        Error::Syntax {
            expected,
            found: found.kind,
            span: found.span,
        }
    }

    pub(super) fn text(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }

    /// Token text, de-escaped when escapes are enabled.
    pub(super) fn value_text(&self, token: &Token) -> Cow<'src, str> {
        self.decode(self.text(token))
    }

    pub(super) fn decode(&self, text: &'src str) -> Cow<'src, str> {
        if self.escapes {
            unescape(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}
