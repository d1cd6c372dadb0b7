// ABOUTME: Bare image reference as supplied on the command line.
// ABOUTME: Handles formats like nginx, nginx:tag, bitnami/postgresql:11.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Namespace assumed for references without a `/`, as on Docker Hub.
pub const DEFAULT_NAMESPACE: &str = "library";

#[derive(Debug, Error)]
pub enum ParseImageReferenceError {
    #[error("image reference cannot be empty")]
    Empty,

    #[error("image reference cannot contain whitespace: {0:?}")]
    Whitespace(String),
}

/// An image reference without a registry domain, e.g. `bitnami/postgresql:11`.
///
/// Tag and digest syntax is not checked here. Anything the runtime cannot
/// make sense of is passed through and reported by the runtime itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageReference(String);

impl ImageReference {
    pub fn parse(input: &str) -> Result<Self, ParseImageReferenceError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseImageReferenceError::Empty);
        }

        if input.chars().any(char::is_whitespace) {
            return Err(ParseImageReferenceError::Whitespace(input.to_string()));
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the final `/`, or `library` when there is none.
    pub fn namespace(&self) -> &str {
        match self.0.rsplit_once('/') {
            Some((namespace, _)) => namespace,
            None => DEFAULT_NAMESPACE,
        }
    }

    /// The final `/`-delimited component, tag included (`postgresql:11`).
    pub fn last_segment(&self) -> &str {
        match self.0.rsplit_once('/') {
            Some((_, last)) => last,
            None => &self.0,
        }
    }

    /// Whether the first path component looks like a registry host.
    ///
    /// Uses the same rule as the Docker CLI: the component contains a dot or
    /// a colon, or is `localhost`.
    pub fn looks_registry_qualified(&self) -> bool {
        match self.0.split_once('/') {
            Some((first, _)) => first.contains('.') || first.contains(':') || first == "localhost",
            None => false,
        }
    }
}

impl FromStr for ImageReference {
    type Err = ParseImageReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
