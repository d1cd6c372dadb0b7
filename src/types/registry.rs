// ABOUTME: Validated registry host for the home registry and mirror sources.
// ABOUTME: Accepts host or host:port, rejects paths, schemes and whitespace.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryEndpointError {
    #[error("registry host cannot be empty")]
    Empty,

    #[error("registry host must not include a URL scheme: {0}")]
    HasScheme(String),

    #[error("invalid character in registry host: '{0}'")]
    InvalidChar(char),
}

/// A registry identified by `host[:port]`, e.g. `harbor.example.com:8443`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RegistryEndpoint(String);

impl RegistryEndpoint {
    pub fn new(value: &str) -> Result<Self, RegistryEndpointError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(RegistryEndpointError::Empty);
        }

        if trimmed.contains("://") {
            return Err(RegistryEndpointError::HasScheme(trimmed.to_string()));
        }

        for c in trimmed.chars() {
            if c == '/' || c.is_whitespace() {
                return Err(RegistryEndpointError::InvalidChar(c));
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Host part without the port.
    pub fn host(&self) -> &str {
        match self.0.split_once(':') {
            Some((host, _)) => host,
            None => &self.0,
        }
    }
}

impl fmt::Display for RegistryEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
