//! Template inputs.

use serde::Serialize;

use super::{Credentials, ResolveError, Result, SourceKind, resolve_auth, resolve_source};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInput {
    pub name: String,
    pub source: SourceKind,
    /// Shared templates are made available to every other template.
    pub is_common: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Credentials>,
}

impl TemplateInput {
    /// Parses one template argument. Templates cannot be nested, so a
    /// `jsonpath` field is an error; `type` is ignored.
    pub fn from_arg(raw: &str, is_common: bool) -> Result<Self> {
        let arg = crate::parse(raw)?;
        let (source, name) = resolve_source(&arg, raw)?;

        if arg.json_path.is_some() {
            return Err(ResolveError::JsonPathNotSupported(raw.to_owned()));
        }

        tracing::debug!(%name, is_common, "resolved template input");
        Ok(Self {
            name,
            source,
            is_common,
            auth: resolve_auth(&arg),
        })
    }
}

pub fn parse_template_args<S: AsRef<str>>(
    args: &[S],
    is_common: bool,
) -> Result<Vec<TemplateInput>> {
    args.iter()
        .map(|raw| TemplateInput::from_arg(raw.as_ref(), is_common))
        .collect()
}
