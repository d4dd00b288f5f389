//! Recursive-descent parser for input arguments.
//!
//! # Architecture
//!
//! The tokenizer runs to completion first; the parser then walks the token
//! buffer by index with one token of lookahead. Design points:
//!
//! - Zero-copy until the end: tokens carry spans and text is sliced only when
//!   a field is stored.
//! - No recovery: the first token that does not fit the grammar, or the first
//!   validator rejection, ends the parse with an [`Error`](crate::Error).
//! - Validation is pluggable through [`ValidationPolicy`](crate::ValidationPolicy).
//!
//! # Grammar
//!
//! ```text
//! Arg        := START (BareSource | Field (SEP Field)*)? (EOF | INVALID)
//! BareSource := KEY | Quoted
//! Field      := KEY EQ Value (Call | Parens)?
//! Value      := (VALUE | Quoted)+
//! Quoted     := QUOTE_ENTER VALUE_LITERAL? QUOTE_EXIT
//! Call       := "(" (KEY (EQ VALUE?)? SEP?)* ")"    -- type and auth only
//! ```

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use self::core::Parser;
