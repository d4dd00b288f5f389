//! Parser for yutc input arguments.
//!
//! Each data or template input on the command line is a compact resource
//! reference: a bare path, or comma-separated `key=value` fields with an
//! optional call on `type`/`auth`.
//!
//! # Example
//!
//! ```
//! let arg = yutc_args::parse("src=./here.json,type=schema(defaults=false)").unwrap();
//!
//! assert_eq!(arg.source.unwrap().value, "./here.json");
//! let ty = arg.r#type.unwrap();
//! assert_eq!(ty.value, "schema");
//! assert_eq!(ty.arg("defaults"), Some("false"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod arg;
pub mod diagnostics;
pub mod escape;
pub mod lexer;
pub mod parser;
pub mod resolve;
pub mod token;
pub mod validation;

mod invariants;
mod lexeme;


use rowan::TextRange;

pub use arg::{Arg, Field, FieldName};
pub use diagnostics::ErrorPrinter;
pub use escape::unescape;
pub use lexer::{Tokenizer, tokenize};
pub use parser::Parser;
pub use token::{Token, TokenKind, token_text};
pub use validation::{ValidationError, ValidationPolicy};

/// Errors that end a parse. No partial [`Arg`] is returned alongside them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The token at `span` does not fit the grammar.
    #[error("parse error at position {}: expected {expected}, got {found}", usize::from(.span.start()))]
    Syntax {
        expected: TokenKind,
        found: TokenKind,
        span: TextRange,
    },

    /// A validator rejected the key or call at `span`.
    #[error("{error}")]
    Validation {
        error: ValidationError,
        span: TextRange,
    },
}

impl Error {
    /// Byte offset of the offending token.
    pub fn position(&self) -> usize {
        self.span().start().into()
    }

    pub fn span(&self) -> TextRange {
        match self {
            Self::Syntax { span, .. } | Self::Validation { span, .. } => *span,
        }
    }
}

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses `input` with the default validation policy.
pub fn parse(input: &str) -> Result<Arg> {
    Parser::new(input).parse()
}

pub fn parse_with(input: &str, policy: ValidationPolicy) -> Result<Arg> {
    Parser::new(input).with_validation(policy).parse()
}
