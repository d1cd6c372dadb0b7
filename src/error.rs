// ABOUTME: Application-wide error types for docker-mirror.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::mirror::MirrorError;
use crate::runtime::RuntimeError;
use crate::types::ParseImageReferenceError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0} (use --force to overwrite)")]
    AlreadyExists(PathBuf),

    #[error("configuration file not found: {0} (run `docker-mirror init` first)")]
    ConfigNotFound(PathBuf),

    #[error("no configuration directory could be determined for the current user")]
    NoConfigDir,

    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid image reference: {0}")]
    InvalidImage(#[from] ParseImageReferenceError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    Mirror(#[from] MirrorError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
