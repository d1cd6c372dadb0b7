// ABOUTME: Home (private) registry configuration.
// ABOUTME: Domain, project namespace and credentials used for pushes.

use serde::{Deserialize, Serialize};

use super::deserialize::{deserialize_password, deserialize_project, deserialize_registry};
use crate::runtime::RegistryAuth;
use crate::types::RegistryEndpoint;

pub const DEFAULT_PROJECT: &str = "public";

#[derive(Clone, Deserialize, Serialize)]
pub struct HomeRegistryConfig {
    #[serde(deserialize_with = "deserialize_registry")]
    pub domain: RegistryEndpoint,

    #[serde(default)]
    pub username: String,

    #[serde(default, deserialize_with = "deserialize_password")]
    pub password: String,

    #[serde(default = "default_project", deserialize_with = "deserialize_project")]
    pub project: String,
}

fn default_project() -> String {
    DEFAULT_PROJECT.to_string()
}

impl HomeRegistryConfig {
    pub fn new(domain: RegistryEndpoint) -> Self {
        Self {
            domain,
            username: String::new(),
            password: String::new(),
            project: default_project(),
        }
    }

    /// Credentials for logging in to the home registry.
    pub fn auth(&self) -> RegistryAuth {
        RegistryAuth {
            username: self.username.clone(),
            password: self.password.clone(),
            server: Some(self.domain.to_string()),
        }
    }
}

// Keeps the password out of `{:?}` output and therefore out of logs.
impl std::fmt::Debug for HomeRegistryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomeRegistryConfig")
            .field("domain", &self.domain)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("project", &self.project)
            .finish()
    }
}
