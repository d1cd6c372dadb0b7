// ABOUTME: Config scaffolding for first-time setup.
// ABOUTME: Writes config.yaml from command-line values instead of prompts.

use std::path::Path;

use crate::error::{Error, Result};
use crate::runtime::RuntimeType;
use crate::types::RegistryEndpoint;

use super::{DEFAULT_PROJECT, MirrorConfig};

/// Values supplied to `docker-mirror init`.
#[derive(Clone, Default)]
pub struct InitOptions {
    pub domain: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub project: Option<String>,
    /// Replaces the default mirror list when non-empty.
    pub mirrors: Vec<String>,
    pub runtime: Option<RuntimeType>,
}

pub fn init_config(path: &Path, options: &InitOptions, force: bool) -> Result<MirrorConfig> {
    if path.exists() && !force {
        return Err(Error::AlreadyExists(path.to_path_buf()));
    }

    let domain =
        RegistryEndpoint::new(&options.domain).map_err(|e| Error::InvalidConfig(e.to_string()))?;
    let mut config = MirrorConfig::template(domain);

    if let Some(ref username) = options.username {
        config.harbor.username = username.clone();
    }

    if let Some(ref password) = options.password {
        config.harbor.password = password.clone();
    }

    config.harbor.project = options
        .project
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_PROJECT)
        .to_string();

    if !options.mirrors.is_empty() {
        config.mirrors = options
            .mirrors
            .iter()
            .map(|m| RegistryEndpoint::new(m))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
    }

    config.runtime = options.runtime;

    config.save(path)?;
    tracing::info!(path = %path.display(), "configuration written");

    Ok(config)
}
