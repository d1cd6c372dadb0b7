// ABOUTME: Error types for mirror operations.
// ABOUTME: Source exhaustion and fatal runtime step failures.

use super::outcome::AttemptOutcome;
use crate::runtime::ImageError;
use std::fmt;

/// Runtime step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Tag,
    Remove,
    Login,
    Push,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Step::Tag => "tag",
            Step::Remove => "remove",
            Step::Login => "log in to",
            Step::Push => "push",
        };
        write!(f, "{}", verb)
    }
}

/// Errors that abort a mirror operation. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    /// Every source, including the implicit default registry, failed.
    #[error("failed to pull {image} from all configured sources{}", list_attempts(.attempts))]
    SourcesExhausted {
        image: String,
        attempts: Vec<AttemptOutcome>,
    },

    /// A tag, login, push or remove step failed. Earlier steps are not undone.
    #[error("failed to {step} {subject}: {source}")]
    RuntimeOperation {
        step: Step,
        subject: String,
        source: ImageError,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorErrorKind {
    SourceExhaustion,
    RuntimeOperation,
}

impl MirrorError {
    pub fn kind(&self) -> MirrorErrorKind {
        match self {
            MirrorError::SourcesExhausted { .. } => MirrorErrorKind::SourceExhaustion,
            MirrorError::RuntimeOperation { .. } => MirrorErrorKind::RuntimeOperation,
        }
    }

    /// Pull attempts made before giving up.
    pub fn attempts(&self) -> &[AttemptOutcome] {
        match self {
            MirrorError::SourcesExhausted { attempts, .. } => attempts,
            MirrorError::RuntimeOperation { .. } => &[],
        }
    }

    /// The step that failed, for runtime operation errors.
    pub fn step(&self) -> Option<Step> {
        match self {
            MirrorError::RuntimeOperation { step, .. } => Some(*step),
            MirrorError::SourcesExhausted { .. } => None,
        }
    }
}

fn list_attempts(attempts: &[AttemptOutcome]) -> String {
    attempts
        .iter()
        .map(|a| format!("\n  - {}", a))
        .collect()
}

/// Attach the failing step to a runtime error.
pub trait ImageErrorExt<T> {
    fn during(self, step: Step, subject: impl fmt::Display) -> Result<T, MirrorError>;
}

impl<T> ImageErrorExt<T> for Result<T, ImageError> {
    fn during(self, step: Step, subject: impl fmt::Display) -> Result<T, MirrorError> {
        self.map_err(|source| MirrorError::RuntimeOperation {
            step,
            subject: subject.to_string(),
            source,
        })
    }
}
