// ABOUTME: Config values that may be read from the environment.
// ABOUTME: Lets the registry password live outside the config file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A literal string or a reference to an environment variable.
///
/// ```yaml
/// password: s3cret
/// password: { env: HARBOR_PASSWORD }
/// password: { env: HARBOR_PASSWORD, default: changeme }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum EnvValue {
    Literal(String),
    FromEnv {
        #[serde(rename = "env")]
        var: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
}

impl EnvValue {
    pub fn resolve(&self) -> Result<String> {
        match self {
            EnvValue::Literal(s) => Ok(s.clone()),
            EnvValue::FromEnv { var, default } => match std::env::var(var) {
                Ok(val) => Ok(val),
                Err(_) => default
                    .clone()
                    .ok_or_else(|| Error::MissingEnvVar(var.clone())),
            },
        }
    }
}
