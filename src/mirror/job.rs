// ABOUTME: Generic mirror job struct parameterized by state marker.
// ABOUTME: Holds the config, the bare reference and the attempt log.

use super::outcome::{AttemptOutcome, MirrorReport, PullResult};
use super::resolver;
use super::state::{Published, Pulled, Resolved};
use crate::config::MirrorConfig;
use crate::types::{ImageReference, QualifiedImageName};

/// One mirror operation in progress, parameterized by its current state.
///
/// The config is owned by the job and never modified; everything the engine
/// needs comes through it rather than from the environment.
#[derive(Debug)]
pub struct MirrorJob<S> {
    pub(crate) config: MirrorConfig,
    pub(crate) image: ImageReference,
    pub(crate) attempts: Vec<AttemptOutcome>,
    pub(crate) state: S,
}

impl MirrorJob<Resolved> {
    pub fn new(config: MirrorConfig, image: ImageReference) -> Self {
        MirrorJob {
            config,
            image,
            attempts: Vec::new(),
            state: Resolved,
        }
    }
}

impl<S> MirrorJob<S> {
    /// The bare reference the caller asked for.
    pub fn image(&self) -> &ImageReference {
        &self.image
    }

    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// Pull attempts made so far, in order.
    pub fn attempts(&self) -> &[AttemptOutcome] {
        &self.attempts
    }

    /// Name of the image in the home registry.
    pub fn target(&self) -> QualifiedImageName {
        resolver::resolve_target(&self.image, &self.config.harbor)
    }

    pub(crate) fn transition<T>(self, state: T) -> MirrorJob<T> {
        MirrorJob {
            config: self.config,
            image: self.image,
            attempts: self.attempts,
            state,
        }
    }
}

impl MirrorJob<Pulled> {
    /// Source the image was pulled from.
    pub fn pull_result(&self) -> &PullResult {
        &self.state.result
    }

    /// Finish without publishing (pull-only mode).
    pub fn finish(self) -> MirrorReport {
        MirrorReport {
            image: self.image,
            source: Some(self.state.result),
            attempts: self.attempts,
            pushed_to: None,
        }
    }
}

impl MirrorJob<Published> {
    /// Home registry name pushed to; None when the image was already there.
    pub fn pushed_to(&self) -> Option<&QualifiedImageName> {
        self.state.pushed_to.as_ref()
    }

    pub fn finish(self) -> MirrorReport {
        MirrorReport {
            image: self.image,
            source: self.state.source,
            attempts: self.attempts,
            pushed_to: self.state.pushed_to,
        }
    }
}
