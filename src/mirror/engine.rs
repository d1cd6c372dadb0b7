// ABOUTME: One-shot entry points for the three mirror modes.
// ABOUTME: Chains the job transitions and runs pre-flight checks.

use super::error::MirrorError;
use super::job::MirrorJob;
use super::outcome::MirrorReport;
use crate::config::MirrorConfig;
use crate::diagnostics::{Diagnostics, Warning};
use crate::runtime::ImageOps;
use crate::types::ImageReference;
use std::fmt;

/// Which operation to run for an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorMode {
    /// Pull from the best source and make sure the home registry has it.
    Sync,
    /// Pull from the mirror sources only, never push.
    PullOnly,
    /// Push a local image to the home registry, never pull.
    PushOnly,
}

impl fmt::Display for MirrorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MirrorMode::Sync => "sync",
            MirrorMode::PullOnly => "pull-only",
            MirrorMode::PushOnly => "push-only",
        };
        write!(f, "{}", name)
    }
}

/// Pull `image` (home registry first, then mirrors) and push it to the home
/// registry unless it came from there.
pub async fn sync_image<R: ImageOps>(
    config: MirrorConfig,
    image: ImageReference,
    runtime: &R,
) -> Result<MirrorReport, MirrorError> {
    let job = MirrorJob::new(config, image)
        .pull_through_home(runtime)
        .await?;
    let job = job.publish(runtime).await?;
    Ok(job.finish())
}

/// Pull `image` from the mirror sources into the local store only.
pub async fn pull_local<R: ImageOps>(
    config: MirrorConfig,
    image: ImageReference,
    runtime: &R,
) -> Result<MirrorReport, MirrorError> {
    let job = MirrorJob::new(config, image)
        .pull_from_mirrors(runtime)
        .await?;
    Ok(job.finish())
}

/// Push the local `image` to the home registry.
pub async fn push_image<R: ImageOps>(
    config: MirrorConfig,
    image: ImageReference,
    runtime: &R,
) -> Result<MirrorReport, MirrorError> {
    let job = MirrorJob::new(config, image).push(runtime).await?;
    Ok(job.finish())
}

/// Run `mode` for `image`.
pub async fn run<R: ImageOps>(
    mode: MirrorMode,
    config: MirrorConfig,
    image: ImageReference,
    runtime: &R,
) -> Result<MirrorReport, MirrorError> {
    tracing::info!(%mode, %image, "starting mirror operation");
    match mode {
        MirrorMode::Sync => sync_image(config, image, runtime).await,
        MirrorMode::PullOnly => pull_local(config, image, runtime).await,
        MirrorMode::PushOnly => push_image(config, image, runtime).await,
    }
}

/// Non-fatal problems worth telling the user about before running `mode`.
pub fn preflight(
    mode: MirrorMode,
    config: &MirrorConfig,
    image: &ImageReference,
    diag: &mut Diagnostics,
) {
    if image.looks_registry_qualified() {
        diag.warn(Warning::qualified_reference(format!(
            "{} looks like it already includes a registry domain; pass the bare image name",
            image
        )));
    }

    if mode != MirrorMode::PushOnly {
        if config.mirrors.is_empty() {
            diag.warn(Warning::no_mirrors(
                "no mirror sources configured, pulling from the runtime's default registry",
            ));
        }

        if mode == MirrorMode::Sync && config.mirrors.contains(&config.harbor.domain) {
            diag.warn(Warning::mirror_is_home(format!(
                "mirror source {} is also the home registry; images pulled from it are not pushed",
                config.harbor.domain
            )));
        }
    }
}
