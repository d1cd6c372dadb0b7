// ABOUTME: Registry-qualified image names and the runtime-facing ImageName.
// ABOUTME: Formats registry/project/path without ad hoc string concatenation.

use super::image_ref::ImageReference;
use super::registry::RegistryEndpoint;
use std::fmt;

/// An image name prefixed with a registry, and optionally a project.
///
/// Displays as `{registry}/{project}/{path}` or `{registry}/{path}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedImageName {
    registry: RegistryEndpoint,
    project: Option<String>,
    path: String,
}

impl QualifiedImageName {
    /// Name under a mirror source, e.g. `docker.m.daocloud.io/bitnami/redis:7`.
    pub fn new(registry: RegistryEndpoint, path: impl Into<String>) -> Self {
        Self {
            registry,
            project: None,
            path: path.into(),
        }
    }

    /// Name under a project of the home registry, e.g. `harbor.local/public/redis:7`.
    pub fn in_project(
        registry: RegistryEndpoint,
        project: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            project: Some(project.into()),
            path: path.into(),
        }
    }

    pub fn registry(&self) -> &RegistryEndpoint {
        &self.registry
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for QualifiedImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.registry)?;
        if let Some(ref project) = self.project {
            write!(f, "{}/", project)?;
        }
        write!(f, "{}", self.path)
    }
}

/// Any name the runtime is asked to operate on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageName {
    /// A bare reference, resolved by the runtime against its default registry.
    Bare(ImageReference),
    Qualified(QualifiedImageName),
}

impl ImageName {
    pub fn registry(&self) -> Option<&RegistryEndpoint> {
        match self {
            ImageName::Bare(_) => None,
            ImageName::Qualified(name) => Some(name.registry()),
        }
    }

    pub fn is_qualified(&self) -> bool {
        matches!(self, ImageName::Qualified(_))
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageName::Bare(reference) => write!(f, "{}", reference),
            ImageName::Qualified(name) => write!(f, "{}", name),
        }
    }
}

impl From<ImageReference> for ImageName {
    fn from(reference: ImageReference) -> Self {
        ImageName::Bare(reference)
    }
}

impl From<&ImageReference> for ImageName {
    fn from(reference: &ImageReference) -> Self {
        ImageName::Bare(reference.clone())
    }
}

impl From<QualifiedImageName> for ImageName {
    fn from(name: QualifiedImageName) -> Self {
        ImageName::Qualified(name)
    }
}

impl From<&QualifiedImageName> for ImageName {
    fn from(name: &QualifiedImageName) -> Self {
        ImageName::Qualified(name.clone())
    }
}
