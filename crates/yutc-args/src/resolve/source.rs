//! Where an input comes from.

use serde::Serialize;

use super::{ResolveError, Result};

/// URL prefixes loaders know how to fetch.
const URL_PREFIXES: [&str; 2] = ["http://", "https://"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    Url,
    /// Written as `-`.
    Stdin,
}

impl SourceKind {
    pub fn classify(value: &str) -> Result<Self> {
        if value == "-" {
            return Ok(Self::Stdin);
        }
        if !value.contains("://") {
            return Ok(Self::File);
        }
        if URL_PREFIXES.iter().any(|prefix| value.starts_with(prefix)) {
            return Ok(Self::Url);
        }
        Err(ResolveError::UnsupportedSource(value.to_owned()))
    }
}

/// Lexically normalizes a slash-separated path: repeated separators and `.`
/// segments are dropped and `..` removes the segment before it. The empty
/// path becomes `.`.
///
/// ```
/// use yutc_args::resolve::clean_path;
///
/// assert_eq!(clean_path("./my_file.yaml"), "my_file.yaml");
/// assert_eq!(clean_path("a//b/../c/"), "a/c");
/// ```
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            // Leading `..` is kept for relative paths and dropped at the root.
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_owned()
    } else {
        joined
    }
}
