// ABOUTME: Diagnostics accumulator for non-fatal warnings before and during mirroring.
// ABOUTME: Collects warnings that shouldn't fail an operation but should be shown to users.

/// Collects non-fatal warnings during mirror operations.
#[derive(Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning. It is logged at debug level; showing it to the user
    /// is up to the caller.
    pub fn warn(&mut self, warning: Warning) {
        tracing::debug!(kind = ?warning.kind, "{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn has(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }
}

/// A non-fatal warning.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// The image reference seems to carry a registry domain already.
    pub fn qualified_reference(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::QualifiedReference,
            message: message.into(),
        }
    }

    /// No mirror sources are configured.
    pub fn no_mirrors(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::NoMirrors,
            message: message.into(),
        }
    }

    /// A mirror source is the home registry itself.
    pub fn mirror_is_home(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::MirrorIsHome,
            message: message.into(),
        }
    }
}

/// Categories of warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Reference starts with something that looks like a registry host.
    QualifiedReference,
    /// Pulls go straight to the runtime's default registry.
    NoMirrors,
    /// Images pulled from this mirror skip the push step.
    MirrorIsHome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_starts_empty() {
        let diag = Diagnostics::default();
        assert!(!diag.has_warnings());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn diagnostics_collects_warnings() {
        let mut diag = Diagnostics::default();

        diag.warn(Warning::qualified_reference("docker.io/nginx"));
        diag.warn(Warning::no_mirrors("none configured"));

        assert!(diag.has_warnings());
        assert_eq!(diag.warnings().len(), 2);
        assert!(diag.has(WarningKind::NoMirrors));
        assert!(!diag.has(WarningKind::MirrorIsHome));
    }

    #[test]
    fn warning_constructors_set_correct_kind() {
        assert_eq!(
            Warning::qualified_reference("x").kind,
            WarningKind::QualifiedReference
        );
        assert_eq!(Warning::no_mirrors("x").kind, WarningKind::NoMirrors);
        assert_eq!(Warning::mirror_is_home("x").kind, WarningKind::MirrorIsHome);
    }
}
