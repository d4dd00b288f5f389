//! Interpretation of a parsed [`Arg`] for the two kinds of inputs yutc takes.
//!
//! Nothing here touches the filesystem or the network. A resolver only
//! classifies the source, normalizes the nesting path and picks the mode that
//! the loaders downstream act on.

mod credentials;
mod data;
mod source;
mod template;

#[cfg(test)]
mod data_tests;
#[cfg(test)]
mod source_tests;

pub use credentials::Credentials;
pub use data::{DataInput, DataMode, parse_data_args};
pub use source::{SourceKind, clean_path};
pub use template::{TemplateInput, parse_template_args};

use crate::Arg;

/// Errors from turning an input argument into a data or template input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Parse(#[from] crate::Error),

    #[error("missing or empty 'src' parameter in argument: {0}")]
    MissingSource(String),

    #[error("key parameter is not supported for template arguments: {0}")]
    JsonPathNotSupported(String),

    #[error("unsupported scheme/source for input: {0}")]
    UnsupportedSource(String),

    #[error("unsupported input type '{0}'")]
    UnsupportedType(String),

    #[error("invalid boolean '{0}' for schema(defaults)")]
    InvalidBoolean(String),
}

/// Result type for resolvers.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Source location of `arg`: its kind and the name loaders should open.
/// File paths come back cleaned.
fn resolve_source(arg: &Arg, raw: &str) -> Result<(SourceKind, String)> {
    let value = arg
        .source
        .as_ref()
        .map(|field| field.value.as_str())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ResolveError::MissingSource(raw.to_owned()))?;

    let kind = SourceKind::classify(value)?;
    let name = match kind {
        SourceKind::File => clean_path(value),
        SourceKind::Url | SourceKind::Stdin => value.to_owned(),
    };
    tracing::debug!(?kind, %name, "resolved input source");
    Ok((kind, name))
}

fn resolve_auth(arg: &Arg) -> Option<Credentials> {
    arg.auth
        .as_ref()
        .map(|field| Credentials::from_auth(&field.value))
}
