// ABOUTME: Image operations trait for container runtimes.
// ABOUTME: Pull, tag, remove, login and push, each reporting captured output on failure.

use super::shared_types::RegistryAuth;
use crate::types::{ImageName, RegistryEndpoint};
use async_trait::async_trait;

/// Image operations the mirror engine needs from a container runtime.
///
/// Every failure carries the runtime's combined output so the caller can
/// show it to the user verbatim.
#[async_trait]
pub trait ImageOps: Send + Sync {
    /// Pull an image into the local store.
    async fn pull_image(&self, image: &ImageName) -> Result<(), ImageError>;

    /// Add `target` as another tag for the local image `source`.
    async fn tag_image(&self, source: &ImageName, target: &ImageName) -> Result<(), ImageError>;

    /// Remove a local tag (the image data goes once no tag references it).
    async fn remove_image(&self, image: &ImageName) -> Result<(), ImageError>;

    /// Authenticate against a registry.
    async fn login(&self, registry: &RegistryEndpoint, auth: &RegistryAuth)
    -> Result<(), ImageError>;

    /// Push a local image to the registry named in its reference.
    async fn push_image(&self, image: &ImageName) -> Result<(), ImageError>;
}

/// Errors from image operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageError {
    #[error("pull failed: {0}")]
    PullFailed(String),

    #[error("tag failed: {0}")]
    TagFailed(String),

    #[error("remove failed: {0}")]
    RemoveFailed(String),

    #[error("authentication failed for registry: {0}")]
    AuthenticationFailed(String),

    #[error("push failed: {0}")]
    PushFailed(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
