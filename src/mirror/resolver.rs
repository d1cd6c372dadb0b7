// ABOUTME: Name resolution between bare references and registry-qualified names.
// ABOUTME: Home targets keep only the last path segment; mirror names keep the full path.

use crate::config::HomeRegistryConfig;
use crate::types::{ImageReference, QualifiedImageName, RegistryEndpoint};

/// Name of `reference` in the home registry: `{domain}/{project}/{last segment}`.
///
/// Namespaces are dropped, so `bitnami/postgresql:11` and `postgresql:11`
/// land on the same target.
pub fn resolve_target(reference: &ImageReference, home: &HomeRegistryConfig) -> QualifiedImageName {
    QualifiedImageName::in_project(
        home.domain.clone(),
        home.project.clone(),
        reference.last_segment(),
    )
}

/// Name of `reference` on a mirror source: `{source}/{reference}`.
pub fn mirror_source_name(reference: &ImageReference, source: &RegistryEndpoint) -> QualifiedImageName {
    QualifiedImageName::new(source.clone(), reference.as_str())
}
