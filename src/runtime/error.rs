// ABOUTME: Runtime error types with SNAFU pattern.
// ABOUTME: Wraps detection failures for programmatic handling.

use snafu::Snafu;

use super::detection::DetectionError;

/// Unified runtime error raised before any image operation runs.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RuntimeError {
    #[snafu(display("runtime detection failed: {source}"))]
    Detection { source: DetectionError },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// Neither docker nor podman is installed.
    NoRuntimeFound,
    /// The configured runtime is not installed.
    RequestedRuntimeMissing,
}

impl RuntimeError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> RuntimeErrorKind {
        match self {
            RuntimeError::Detection { source } => match source {
                DetectionError::NoRuntimeFound => RuntimeErrorKind::NoRuntimeFound,
                DetectionError::BinaryNotFound(_) => RuntimeErrorKind::RequestedRuntimeMissing,
            },
        }
    }
}

impl From<DetectionError> for RuntimeError {
    fn from(source: DetectionError) -> Self {
        RuntimeError::Detection { source }
    }
}
