//! Data inputs: files merged into the template context, or schemas.

use serde::Serialize;

use super::{Credentials, ResolveError, Result, SourceKind, resolve_auth, resolve_source};
use crate::Field;

/// Nesting path applied when none is given: the document root.
pub const ROOT_PATH: &str = "$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataInput {
    pub name: String,
    pub source: SourceKind,
    /// Where the loaded content is nested, always starting with `$`.
    pub json_path: String,
    pub mode: DataMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Credentials>,
}

/// What the loader does with a data input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    /// Merge the content into the data context.
    Merge,
    /// Validate the merged data against this schema, optionally filling in
    /// its defaults.
    Schema { apply_defaults: bool },
}

impl DataInput {
    /// Parses one `--data` argument with the default validation policy.
    pub fn from_arg(raw: &str) -> Result<Self> {
        let arg = crate::parse(raw)?;
        let (source, name) = resolve_source(&arg, raw)?;

        let json_path = arg
            .json_path
            .as_ref()
            .map_or_else(|| ROOT_PATH.to_owned(), |field| nesting_path(&field.value));
        let mode = DataMode::from_type(arg.r#type.as_ref())?;

        tracing::debug!(%name, %json_path, ?mode, "resolved data input");
        Ok(Self {
            name,
            source,
            json_path,
            mode,
            auth: resolve_auth(&arg),
        })
    }

    pub fn is_schema(&self) -> bool {
        matches!(self.mode, DataMode::Schema { .. })
    }
}

impl DataMode {
    fn from_type(field: Option<&Field>) -> Result<Self> {
        let Some(field) = field else {
            return Ok(Self::Merge);
        };
        match field.value.as_str() {
            "data" => Ok(Self::Merge),
            "schema" => {
                let apply_defaults = match field.arg("defaults") {
                    Some(value) => parse_bool(value)?,
                    None => true,
                };
                Ok(Self::Schema { apply_defaults })
            }
            other => Err(ResolveError::UnsupportedType(other.to_owned())),
        }
    }
}

/// Resolves every argument, stopping at the first failure.
pub fn parse_data_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<DataInput>> {
    args.iter()
        .map(|raw| DataInput::from_arg(raw.as_ref()))
        .collect()
}

/// `.Secrets` becomes `$.Secrets`; the path expression itself is not checked.
fn nesting_path(value: &str) -> String {
    if value.starts_with('$') {
        value.to_owned()
    } else {
        format!("{ROOT_PATH}{value}")
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ResolveError::InvalidBoolean(value.to_owned())),
    }
}
