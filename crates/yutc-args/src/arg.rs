//! The parsed descriptor of one input argument.

use indexmap::IndexMap;
use serde::Serialize;

/// Descriptor for one data or template input.
///
/// Serializes with the field names downstream tooling expects
/// (`Source`, `JSONPath`, `Type`, `Auth`); absent fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Arg {
    #[serde(rename = "Source", skip_serializing_if = "Option::is_none")]
    pub source: Option<Field>,
    #[serde(rename = "JSONPath", skip_serializing_if = "Option::is_none")]
    pub json_path: Option<Field>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Field>,
    #[serde(rename = "Auth", skip_serializing_if = "Option::is_none")]
    pub auth: Option<Field>,
}

impl Arg {
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
            && self.json_path.is_none()
            && self.r#type.is_none()
            && self.auth.is_none()
    }

    pub fn field(&self, name: FieldName) -> Option<&Field> {
        match name {
            FieldName::Source => self.source.as_ref(),
            FieldName::JsonPath => self.json_path.as_ref(),
            FieldName::Type => self.r#type.as_ref(),
            FieldName::Auth => self.auth.as_ref(),
        }
    }

    /// Stores `field` under `name`, replacing any earlier occurrence.
    pub(crate) fn set(&mut self, name: FieldName, field: Field) {
        let slot = match name {
            FieldName::Source => &mut self.source,
            FieldName::JsonPath => &mut self.json_path,
            FieldName::Type => &mut self.r#type,
            FieldName::Auth => &mut self.auth,
        };
        *slot = Some(field);
    }
}

/// One named part of an [`Arg`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Field {
    pub value: String,
    /// Call arguments, e.g. `defaults=false` in `schema(defaults=false)`.
    /// Only populated for `type` and `auth`.
    pub args: IndexMap<String, String>,
}

impl Field {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            args: IndexMap::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    pub fn arg(&self, key: &str) -> Option<&str> {
        self.args.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Source,
    JsonPath,
    Type,
    Auth,
}

impl FieldName {
    /// Maps a key as written in the input to its field, if it names one.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "src" => Some(Self::Source),
            "jsonpath" => Some(Self::JsonPath),
            "type" => Some(Self::Type),
            "auth" => Some(Self::Auth),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Source => "src",
            Self::JsonPath => "jsonpath",
            Self::Type => "type",
            Self::Auth => "auth",
        }
    }

    /// Whether a `(` after this field's value opens a call.
    pub(crate) fn accepts_call(key: &str) -> bool {
        matches!(Self::from_key(key), Some(Self::Type | Self::Auth))
    }
}
