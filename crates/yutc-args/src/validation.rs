//! Semantic checks invoked by the parser while it builds an [`Arg`](crate::Arg).
//!
//! A [`ValidationPolicy`] holds two optional hooks. The key validator runs
//! right after a field key is read; the function validator runs after a call
//! on `type` or `auth` has been closed. Either hook may be absent, in which
//! case every key (or call) is accepted and unknown keys are dropped.

use indexmap::IndexMap;

/// Checks a field key, e.g. `src` in `src=./a.yaml`.
pub type KeyValidator = fn(key: &str) -> Result<(), ValidationError>;

/// Checks a call, e.g. `schema` with `{defaults: false}` on key `type`.
pub type FunctionValidator =
    fn(key: &str, name: &str, args: &IndexMap<String, String>) -> Result<(), ValidationError>;

/// Key names accepted by [`default_key_validator`].
pub const ALLOWED_KEYS: [&str; 4] = ["src", "jsonpath", "auth", "type"];

/// Argument names accepted inside `schema(...)`.
pub const SCHEMA_ARGS: [&str; 1] = ["defaults"];

#[derive(Debug, Clone, Copy)]
pub struct ValidationPolicy {
    pub key: Option<KeyValidator>,
    pub function: Option<FunctionValidator>,
}

impl ValidationPolicy {
    /// Known keys only; calls limited to `type=schema(defaults=..)`.
    pub const DEFAULT: Self = Self {
        key: Some(default_key_validator),
        function: Some(default_function_validator),
    };

    /// Accepts everything.
    pub const DISABLED: Self = Self {
        key: None,
        function: None,
    };

    pub fn validate_key(&self, key: &str) -> Result<(), ValidationError> {
        match self.key {
            Some(validate) => validate(key),
            None => Ok(()),
        }
    }

    pub fn validate_function(
        &self,
        key: &str,
        name: &str,
        args: &IndexMap<String, String>,
    ) -> Result<(), ValidationError> {
        match self.function {
            Some(validate) => validate(key, name, args),
            None => Ok(()),
        }
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A rejected key or call. The message is shown to users verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub key: String,
    pub value: Option<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            key: key.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

pub fn default_key_validator(key: &str) -> Result<(), ValidationError> {
    if ALLOWED_KEYS.contains(&key) {
        return Ok(());
    }
    Err(ValidationError::new(
        format!(
            "invalid key '{key}': allowed keys are {}",
            ALLOWED_KEYS.join(", ")
        ),
        key,
    ))
}

pub fn default_function_validator(
    key: &str,
    name: &str,
    args: &IndexMap<String, String>,
) -> Result<(), ValidationError> {
    if key != "type" || name != "schema" {
        return Err(ValidationError::new(
            format!("function '{name}' not allowed on key '{key}': only schema() is allowed on type"),
            key,
        )
        .with_value(name));
    }

    if let Some(arg) = args.keys().find(|arg| !SCHEMA_ARGS.contains(&arg.as_str())) {
        return Err(ValidationError::new(
            format!(
                "invalid argument '{arg}' for schema(): allowed arguments are {}",
                SCHEMA_ARGS.join(", ")
            ),
            key,
        )
        .with_value(arg.as_str()));
    }

    Ok(())
}
