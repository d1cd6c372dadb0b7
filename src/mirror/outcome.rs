// ABOUTME: Records produced while resolving an image.
// ABOUTME: Per-attempt outcomes, the chosen pull source, and the final report.

use crate::runtime::ImageError;
use crate::types::{ImageName, ImageReference, QualifiedImageName, RegistryEndpoint};
use std::fmt;

/// One pull attempt against one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptOutcome {
    /// Registry tried; None for a direct pull from the runtime's default registry.
    pub registry: Option<RegistryEndpoint>,
    /// Name that was pulled.
    pub image: String,
    pub succeeded: bool,
    /// Runtime output for failed attempts, empty on success.
    pub diagnostic: String,
}

impl AttemptOutcome {
    pub(crate) fn succeeded(image: &ImageName) -> Self {
        Self {
            registry: image.registry().cloned(),
            image: image.to_string(),
            succeeded: true,
            diagnostic: String::new(),
        }
    }

    pub(crate) fn failed(image: &ImageName, error: &ImageError) -> Self {
        Self {
            registry: image.registry().cloned(),
            image: image.to_string(),
            succeeded: false,
            diagnostic: error.to_string(),
        }
    }

    /// Human label for the source, e.g. `docker.m.daocloud.io` or `default registry`.
    pub fn source_label(&self) -> String {
        match self.registry {
            Some(ref registry) => registry.to_string(),
            None => "default registry".to_string(),
        }
    }
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.succeeded {
            write!(f, "{} ({}): ok", self.image, self.source_label())
        } else {
            write!(
                f,
                "{} ({}): {}",
                self.image,
                self.source_label(),
                self.diagnostic
            )
        }
    }
}

/// Where the image finally came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullResult {
    /// None when pulled directly by bare reference.
    pub source_registry: Option<RegistryEndpoint>,
    /// Fully qualified name that was actually pulled.
    pub source_image: ImageName,
}

impl PullResult {
    pub fn is_from(&self, registry: &RegistryEndpoint) -> bool {
        self.source_registry.as_ref() == Some(registry)
    }

    pub fn is_direct(&self) -> bool {
        self.source_registry.is_none()
    }
}

/// Summary of a finished mirror operation.
#[derive(Debug, Clone)]
pub struct MirrorReport {
    pub image: ImageReference,
    /// None in push-only mode.
    pub source: Option<PullResult>,
    pub attempts: Vec<AttemptOutcome>,
    /// Home registry name pushed to, if a push happened.
    pub pushed_to: Option<QualifiedImageName>,
}
