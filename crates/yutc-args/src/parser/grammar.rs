//! Grammar productions.

use std::borrow::Cow;

use indexmap::IndexMap;

use super::core::Parser;
use crate::arg::{Arg, Field, FieldName};
use crate::token::TokenKind;
use crate::{Error, Result};

impl<'src> Parser<'src> {
    /// `Arg := START (BareSource | Field (SEP Field)*)? EOF`
    pub(super) fn parse_arg(&mut self) -> Result<Arg> {
        self.expect(TokenKind::Start)?;
        let mut arg = Arg::default();

        match self.current() {
            TokenKind::Eof => return Ok(arg),
            TokenKind::QuoteEnter => {
                let source = self.parse_quoted()?;
                arg.set(FieldName::Source, Field::new(source));
                if !self.finish_field()? {
                    return Ok(arg);
                }
            }
            // `./a.yaml` and `./a.yaml,type=schema`: bare first token is the source.
            TokenKind::Key if matches!(self.peek(), TokenKind::Eof | TokenKind::FieldSep) => {
                let token = self.expect(TokenKind::Key)?;
                arg.set(FieldName::Source, Field::new(self.value_text(&token)));
                if !self.finish_field()? {
                    return Ok(arg);
                }
            }
            _ => {}
        }

        loop {
            self.parse_field(&mut arg)?;
            if !self.finish_field()? {
                return Ok(arg);
            }
        }
    }

    /// Consumes the separator after a field. Returns `false` at end of input.
    fn finish_field(&mut self) -> Result<bool> {
        match self.current() {
            TokenKind::FieldSep => {
                self.advance();
                Ok(true)
            }
            TokenKind::Eof => Ok(false),
            _ => Err(self.unexpected(TokenKind::FieldSep)),
        }
    }

    /// `Field := KEY EQ Value (Call | Parens)?`
    fn parse_field(&mut self, arg: &mut Arg) -> Result<()> {
        let key_token = self.expect(TokenKind::Key)?;
        let key = self.text(&key_token);
        if let Err(error) = self.policy.validate_key(key) {
            tracing::debug!(key, %error, "key rejected");
            return Err(Error::Validation {
                error,
                span: key_token.span,
            });
        }

        self.expect(TokenKind::Eq)?;

        let value_span = self.current_token().span;
        let mut field = Field::new(self.parse_value()?);

        if self.current() == TokenKind::ParenEnterCall {
            if FieldName::accepts_call(key) {
                self.parse_call(&mut field.args)?;
                if let Err(error) = self
                    .policy
                    .validate_function(key, &field.value, &field.args)
                {
                    tracing::debug!(key, function = %field.value, %error, "call rejected");
                    return Err(Error::Validation {
                        error,
                        span: value_span,
                    });
                }
            } else {
                let parens = self.parse_literal_parens()?;
                field.value.push_str(&parens);
            }
        }

        match FieldName::from_key(key) {
            Some(name) => arg.set(name, field),
            None => tracing::debug!(key, "ignoring unknown key"),
        }
        Ok(())
    }

    /// `Value := (VALUE | Quoted)+`, pieces concatenated.
    fn parse_value(&mut self) -> Result<String> {
        let mut value = String::new();
        let mut pieces = 0;
        loop {
            match self.current() {
                TokenKind::Value => {
                    let token = self.expect(TokenKind::Value)?;
                    value.push_str(&self.value_text(&token));
                }
                TokenKind::QuoteEnter => value.push_str(&self.parse_quoted()?),
                _ if pieces == 0 => return Err(self.unexpected(TokenKind::Value)),
                _ => return Ok(value),
            }
            pieces += 1;
        }
    }

    /// `Quoted := QUOTE_ENTER VALUE_LITERAL? QUOTE_EXIT`
    fn parse_quoted(&mut self) -> Result<Cow<'src, str>> {
        self.expect(TokenKind::QuoteEnter)?;
        let mut text = Cow::Borrowed("");
        if self.current() == TokenKind::ValueLiteral {
            let token = self.expect(TokenKind::ValueLiteral)?;
            text = self.value_text(&token);
        }
        self.expect(TokenKind::QuoteExit)?;
        Ok(text)
    }

    /// `Call := "(" (KEY (EQ VALUE?)? SEP?)* ")"`
    ///
    /// A key without `=` or without a value maps to the empty string.
    fn parse_call(&mut self, args: &mut IndexMap<String, String>) -> Result<()> {
        self.assert_current(TokenKind::ParenEnterCall);
        self.advance();

        while self.current() != TokenKind::ParenExitCall {
            let key_token = self.expect(TokenKind::Key)?;
            let mut value = Cow::Borrowed("");
            if self.current() == TokenKind::Eq {
                self.advance();
                if self.current() == TokenKind::Value {
                    let token = self.expect(TokenKind::Value)?;
                    value = self.value_text(&token);
                }
            }
            args.insert(
                self.value_text(&key_token).into_owned(),
                value.into_owned(),
            );

            match self.current() {
                TokenKind::FieldSep => self.advance(),
                TokenKind::ParenExitCall => {}
                _ => return Err(self.unexpected(TokenKind::ParenExitCall)),
            }
        }

        self.expect(TokenKind::ParenExitCall)?;
        Ok(())
    }

    /// Parentheses after a key that takes no call are kept as text:
    /// the exact input from `(` through `)`.
    fn parse_literal_parens(&mut self) -> Result<Cow<'src, str>> {
        let open = self.expect(TokenKind::ParenEnterCall)?;
        while !matches!(
            self.current(),
            TokenKind::ParenExitCall | TokenKind::Eof | TokenKind::Invalid
        ) {
            self.advance();
        }
        let close = self.expect(TokenKind::ParenExitCall)?;
        Ok(self.decode(&self.source[open.start()..close.end()]))
    }
}
