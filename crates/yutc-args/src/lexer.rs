//! Tokenizer for input arguments.
//!
//! A finite-state machine over the raw lexemes from [`crate::lexeme`]. Each
//! `lex_*` method handles one state and returns the next one, or `None` once
//! a terminal token has been emitted. The tokenizer never fails: a grammar
//! violation produces a single `Invalid` token and stops.
//!
//! ## Lexing modes
//!
//! - Values of `src` and `path` are lexed literally: parentheses are ordinary
//!   characters, which is what allows file names like `myfile(1).docx`.
//! - Every other value may open a call, `type=schema(defaults=false)`.
//! - Quoted text is taken verbatim, without escape processing unless
//!   [`Tokenizer::with_escapes`] is enabled.

use std::cell::Cell;
use std::ops::Range;

use crate::lexeme::{Lexeme, LexemeKind, lexemes};
use crate::token::{Token, TokenKind, text_range};

/// Keys whose values are lexed without call syntax.
pub const LITERAL_KEYS: [&str; 2] = ["src", "path"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Key,
    Value,
    InsideParens,
    LiteralValue,
    QuotedValue,
    Sep,
}

/// An unclosed quote or call, reported when the input ends inside it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpenDelimiter {
    pub kind: LexemeKind,
    pub offset: usize,
}

pub struct Tokenizer<'src> {
    source: &'src str,
    lexemes: Vec<Lexeme>,
    pos: usize,
    tokens: Vec<Token>,
    /// Trimmed span of the text collected since the last emitted token.
    pending: Option<Range<usize>>,
    delimiter_stack: Vec<OpenDelimiter>,
    escapes: bool,
    pub(crate) debug_fuel: Cell<u32>,
}

/// Tokenizes `source` with escapes disabled.
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::new(source).run()
}

impl<'src> Tokenizer<'src> {
    /// Spans are `u32` offsets, so inputs are expected to stay under 4 GiB.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            lexemes: lexemes(source),
            pos: 0,
            tokens: Vec::with_capacity(16),
            pending: None,
            delimiter_stack: Vec::with_capacity(2),
            escapes: false,
            debug_fuel: Cell::new(256),
        }
    }

    /// Treat `\` plus the following character as ordinary text.
    pub fn with_escapes(mut self, enabled: bool) -> Self {
        self.escapes = enabled;
        self
    }

    /// Runs the state machine to completion.
    pub fn run(mut self) -> Vec<Token> {
        let mut state = Some(State::Start);
        while let Some(current) = state {
            state = match current {
                State::Start => self.lex_start(),
                State::Key => self.lex_key(),
                State::Value => self.lex_value(),
                State::InsideParens => self.lex_inside_parens(),
                State::LiteralValue => self.lex_literal_value(),
                State::QuotedValue => self.lex_quoted_value(),
                State::Sep => self.lex_sep(),
            };
        }
        self.tokens
    }

    fn lex_start(&mut self) -> Option<State> {
        self.emit(TokenKind::Start, 0..0);
        self.skip_whitespace();
        if self.at_end() {
            return self.emit_eof();
        }
        Some(State::Key)
    }

    fn lex_key(&mut self) -> Option<State> {
        if self.current().is_some_and(LexemeKind::is_quote) {
            return Some(State::QuotedValue);
        }

        while let Some(kind) = self.current() {
            match kind {
                LexemeKind::Comma => {
                    self.emit_pending_or_empty(TokenKind::Key);
                    return Some(State::Sep);
                }
                LexemeKind::Equals => {
                    let key = self.emit_pending_or_empty(TokenKind::Key);
                    let eq = self.bump();
                    self.emit(TokenKind::Eq, eq.span);
                    if LITERAL_KEYS.contains(&&self.source[key]) {
                        return Some(State::LiteralValue);
                    }
                    return Some(State::Value);
                }
                _ => self.collect(),
            }
        }

        self.emit_pending_or_empty(TokenKind::Key);
        self.emit_eof()
    }

    fn lex_value(&mut self) -> Option<State> {
        self.skip_whitespace();

        while let Some(kind) = self.current() {
            match kind {
                LexemeKind::SingleQuote | LexemeKind::DoubleQuote => {
                    self.emit_pending(TokenKind::Value);
                    if self.nth(1).is_some_and(|next| next.kind == kind) {
                        let open = self.bump();
                        self.emit(TokenKind::QuoteEnter, open.span);
                        let close = self.bump();
                        self.emit(TokenKind::QuoteExit, close.span);
                        continue;
                    }
                    if !self.scan_quoted() {
                        return self.emit_eof();
                    }
                }
                LexemeKind::ParenOpen => {
                    self.emit_pending(TokenKind::Value);
                    let open = self.bump();
                    self.push_delimiter(open.kind, open.span.start);
                    self.emit(TokenKind::ParenEnterCall, open.span);
                    return Some(State::InsideParens);
                }
                LexemeKind::Comma => {
                    self.emit_pending(TokenKind::Value);
                    return Some(State::Sep);
                }
                _ => self.collect(),
            }
        }

        self.emit_pending(TokenKind::Value);
        self.emit_eof()
    }

    fn lex_inside_parens(&mut self) -> Option<State> {
        self.skip_whitespace();
        let mut value_mode = false;
        let text_kind = |value_mode: bool| {
            if value_mode {
                TokenKind::Value
            } else {
                TokenKind::Key
            }
        };

        while let Some(kind) = self.current() {
            match kind {
                LexemeKind::ParenClose => {
                    self.emit_pending(text_kind(value_mode));
                    let close = self.bump();
                    self.pop_delimiter();
                    self.emit(TokenKind::ParenExitCall, close.span);
                    return self.lex_after_call();
                }
                LexemeKind::Comma => {
                    self.emit_pending(text_kind(value_mode));
                    let sep = self.bump();
                    self.emit(TokenKind::FieldSep, sep.span);
                    self.skip_whitespace();
                    value_mode = false;
                }
                LexemeKind::Equals => {
                    self.emit_pending(TokenKind::Key);
                    let eq = self.bump();
                    self.emit(TokenKind::Eq, eq.span);
                    self.skip_whitespace();
                    value_mode = true;
                }
                // Calls do not nest.
                LexemeKind::ParenOpen => return self.emit_invalid(),
                _ => self.collect(),
            }
        }

        self.emit_pending(text_kind(value_mode));
        self.emit_eof()
    }

    /// Only a separator or the end of input may follow a closed call.
    fn lex_after_call(&mut self) -> Option<State> {
        self.skip_whitespace();
        match self.current() {
            None => self.emit_eof(),
            Some(LexemeKind::Comma) => Some(State::Sep),
            Some(_) => self.emit_invalid(),
        }
    }

    fn lex_literal_value(&mut self) -> Option<State> {
        self.skip_whitespace();
        if self.current().is_some_and(LexemeKind::is_quote) {
            return Some(State::QuotedValue);
        }

        while let Some(kind) = self.current() {
            if kind == LexemeKind::Comma {
                self.emit_pending_or_empty(TokenKind::Value);
                return Some(State::Sep);
            }
            self.collect();
        }

        self.emit_pending_or_empty(TokenKind::Value);
        self.emit_eof()
    }

    fn lex_quoted_value(&mut self) -> Option<State> {
        if !self.scan_quoted() {
            return self.emit_eof();
        }

        self.skip_whitespace();
        match self.current() {
            Some(LexemeKind::Comma) => Some(State::Sep),
            None => self.emit_eof(),
            Some(_) => {
                tracing::debug!(
                    offset = self.offset(),
                    "discarding text after closing quote"
                );
                self.emit_eof()
            }
        }
    }

    fn lex_sep(&mut self) -> Option<State> {
        match self.current() {
            None => self.emit_eof(),
            Some(LexemeKind::Comma) => {
                let sep = self.bump();
                self.emit(TokenKind::FieldSep, sep.span);
                self.skip_whitespace();
                Some(State::Key)
            }
            Some(_) => self.emit_invalid(),
        }
    }

    /// Emits `QuoteEnter ValueLiteral QuoteExit` for the quote at the cursor.
    ///
    /// Returns `false` when the input ends first; the collected text is still
    /// emitted as `ValueLiteral`.
    fn scan_quoted(&mut self) -> bool {
        let open = self.bump();
        self.push_delimiter(open.kind, open.span.start);
        self.emit(TokenKind::QuoteEnter, open.span.clone());

        let interior_start = open.span.end;
        while let Some(kind) = self.current() {
            if kind == open.kind {
                let interior_end = self.offset();
                self.emit(TokenKind::ValueLiteral, interior_start..interior_end);
                let close = self.bump();
                self.pop_delimiter();
                self.emit(TokenKind::QuoteExit, close.span);
                return true;
            }
            self.advance_escaped();
        }

        self.emit(TokenKind::ValueLiteral, interior_start..self.source.len());
        false
    }

    fn current(&self) -> Option<LexemeKind> {
        self.nth(0).map(|lexeme| lexeme.kind)
    }

    fn nth(&self, lookahead: usize) -> Option<&Lexeme> {
        self.ensure_progress();
        self.lexemes.get(self.pos + lookahead)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.lexemes.len()
    }

    /// Byte offset of the cursor.
    fn offset(&self) -> usize {
        self.lexemes
            .get(self.pos)
            .map_or(self.source.len(), |lexeme| lexeme.span.start)
    }

    fn bump(&mut self) -> Lexeme {
        debug_assert!(!self.at_end(), "bump called at end of input");
        self.debug_fuel.set(256);
        let lexeme = self.lexemes[self.pos].clone();
        self.pos += 1;
        lexeme
    }

    /// Consumes one lexeme, plus the escaped character after a backslash when
    /// escapes are enabled. Returns the span consumed.
    fn advance_escaped(&mut self) -> Range<usize> {
        let lexeme = self.bump();
        let mut span = lexeme.span;
        if self.escapes
            && lexeme.kind == LexemeKind::Backslash
            && let Some(next) = self.lexemes.get_mut(self.pos)
        {
            let escaped_len = self.source[next.span.clone()]
                .chars()
                .next()
                .map_or(0, char::len_utf8);
            span.end = next.span.start + escaped_len;
            next.span.start = span.end;
            if next.span.is_empty() {
                self.pos += 1;
            }
        }
        span
    }

    /// Consumes one lexeme into the pending text. Whitespace only counts once
    /// more text follows it, which keeps the pending span trimmed.
    fn collect(&mut self) {
        let kind = self.current();
        let span = self.advance_escaped();
        if kind == Some(LexemeKind::Whitespace) {
            return;
        }
        self.pending = Some(match self.pending.take() {
            Some(pending) => pending.start..span.end,
            None => span,
        });
    }

    fn skip_whitespace(&mut self) {
        while self.current() == Some(LexemeKind::Whitespace) {
            self.bump();
        }
    }

    fn push_delimiter(&mut self, kind: LexemeKind, offset: usize) {
        self.delimiter_stack.push(OpenDelimiter { kind, offset });
    }

    fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    fn emit(&mut self, kind: TokenKind, span: Range<usize>) {
        self.tokens.push(Token::new(kind, text_range(span.start, span.end)));
    }

    fn emit_pending(&mut self, kind: TokenKind) -> Option<Range<usize>> {
        let span = self.pending.take()?;
        self.emit(kind, span.clone());
        Some(span)
    }

    fn emit_pending_or_empty(&mut self, kind: TokenKind) -> Range<usize> {
        let offset = self.offset();
        let span = self.pending.take().unwrap_or(offset..offset);
        self.emit(kind, span.clone());
        span
    }

    fn emit_eof(&mut self) -> Option<State> {
        let offset = self.offset();
        self.emit(TokenKind::Eof, offset..offset);
        tracing::trace!(
            tokens = self.tokens.len(),
            unclosed = ?self.delimiter_stack.last().map(|open| (open.kind, open.offset)),
            "tokenizer reached end"
        );
        None
    }

    /// Emits the character at the cursor as `Invalid` and stops.
    fn emit_invalid(&mut self) -> Option<State> {
        let offset = self.offset();
        let Some(ch) = self.source[offset..].chars().next() else {
            return self.emit_eof();
        };
        self.emit(TokenKind::Invalid, offset..offset + ch.len_utf8());
        tracing::trace!(offset, %ch, "tokenizer stopped on invalid character");
        None
    }
}
