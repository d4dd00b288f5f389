use serde::Serialize;

/// Credentials taken from an `auth=` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Credentials {
    Basic { username: String, password: String },
    Bearer(String),
}

impl Credentials {
    /// `user:pass` is basic auth, split at the first colon. Anything else is
    /// a bearer token.
    pub fn from_auth(value: &str) -> Self {
        match value.split_once(':') {
            Some((username, password)) => Self::Basic {
                username: username.to_owned(),
                password: password.to_owned(),
            },
            None => Self::Bearer(value.to_owned()),
        }
    }
}
