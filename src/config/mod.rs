// ABOUTME: Configuration types and persistence for docker-mirror.
// ABOUTME: Handles YAML parsing, the per-user config location, and saving.

mod deserialize;
mod env_value;
mod home;
mod init;

pub use env_value::EnvValue;
pub use home::{DEFAULT_PROJECT, HomeRegistryConfig};
pub use init::{InitOptions, init_config};

use crate::error::{Error, Result};
use crate::runtime::RuntimeType;
use crate::types::RegistryEndpoint;
use deserialize::deserialize_registries;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = "docker-mirror";
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "DOCKER_MIRROR_CONFIG";

/// Mirror sources written into freshly initialized configs.
pub const DEFAULT_MIRRORS: [&str; 3] = [
    "docker.m.daocloud.io",
    "quay.m.daocloud.io",
    "k8s.m.daocloud.io",
];

/// Everything the mirror engine needs: the home registry and the ordered
/// list of upstream mirror sources.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MirrorConfig {
    pub harbor: HomeRegistryConfig,

    #[serde(
        rename = "dockerRegistries",
        default,
        deserialize_with = "deserialize_registries"
    )]
    pub mirrors: Vec<RegistryEndpoint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<RuntimeType>,
}

impl MirrorConfig {
    pub fn new(harbor: HomeRegistryConfig, mirrors: Vec<RegistryEndpoint>) -> Self {
        Self {
            harbor,
            mirrors,
            runtime: None,
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(
            path = %path.display(),
            home = %config.harbor.domain,
            mirrors = config.mirrors.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Write the config, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    pub fn home_domain(&self) -> &RegistryEndpoint {
        &self.harbor.domain
    }

    /// Config used by `init` when only the home domain is known.
    pub fn template(domain: RegistryEndpoint) -> Self {
        let mirrors = DEFAULT_MIRRORS
            .iter()
            .filter_map(|host| RegistryEndpoint::new(host).ok())
            .collect();
        Self::new(HomeRegistryConfig::new(domain), mirrors)
    }
}

/// `<user config dir>/docker-mirror/config.yaml`.
pub fn default_config_path() -> Result<PathBuf> {
    let dirs = directories::BaseDirs::new().ok_or(Error::NoConfigDir)?;
    Ok(dirs.config_dir().join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}

/// An explicit path wins over the default location.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}
