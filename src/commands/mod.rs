// ABOUTME: Command module aggregator for the docker-mirror CLI.
// ABOUTME: Re-exports command handlers and the shared command context.

mod init;
mod mirror;
mod runtime_connection;

pub use init::init;
pub use mirror::mirror_image;

use docker_mirror::config::{self, MirrorConfig};
use docker_mirror::error::Result;
use docker_mirror::runtime::RuntimeType;
use std::path::PathBuf;

/// Global options shared by every command.
pub struct CommandContext {
    pub config_path: Option<PathBuf>,
    pub runtime: Option<RuntimeType>,
}

impl CommandContext {
    pub fn config_path(&self) -> Result<PathBuf> {
        config::config_path(self.config_path.as_deref())
    }

    pub fn load_config(&self) -> Result<MirrorConfig> {
        MirrorConfig::load(&self.config_path()?)
    }
}
