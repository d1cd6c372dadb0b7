// ABOUTME: State transition methods for mirror jobs.
// ABOUTME: Each method consumes self and returns the next state on success.

use super::error::{ImageErrorExt, MirrorError, Step};
use super::job::MirrorJob;
use super::outcome::{AttemptOutcome, PullResult};
use super::resolver;
use super::state::{Published, Pulled, Resolved};
use crate::runtime::ImageOps;
use crate::types::{ImageName, QualifiedImageName};

// =============================================================================
// Internal Helpers
// =============================================================================

impl<S> MirrorJob<S> {
    fn bare_name(&self) -> ImageName {
        ImageName::from(&self.image)
    }

    /// Retag a freshly pulled qualified image to the bare reference, then drop
    /// the qualified tag so only the bare reference is left.
    async fn adopt<R: ImageOps>(&self, runtime: &R, pulled: &ImageName) -> Result<(), MirrorError> {
        let bare = self.bare_name();

        tracing::info!(from = %pulled, to = %bare, "tagging pulled image");
        runtime
            .tag_image(pulled, &bare)
            .await
            .during(Step::Tag, format!("{} as {}", pulled, bare))?;

        tracing::info!(image = %pulled, "removing qualified tag");
        runtime
            .remove_image(pulled)
            .await
            .during(Step::Remove, pulled)?;

        Ok(())
    }

    /// Tag, log in, push and untag under the home registry target name.
    async fn push_to_home<R: ImageOps>(&self, runtime: &R) -> Result<QualifiedImageName, MirrorError> {
        let home = &self.config.harbor;
        let target = self.target();
        let target_name = ImageName::from(&target);
        let bare = self.bare_name();

        tracing::info!(from = %bare, to = %target_name, "tagging for home registry");
        runtime
            .tag_image(&bare, &target_name)
            .await
            .during(Step::Tag, format!("{} as {}", bare, target_name))?;

        tracing::info!(registry = %home.domain, user = %home.username, "logging in");
        runtime
            .login(&home.domain, &home.auth())
            .await
            .during(Step::Login, &home.domain)?;

        tracing::info!(image = %target_name, "pushing");
        runtime
            .push_image(&target_name)
            .await
            .during(Step::Push, &target_name)?;

        tracing::info!(image = %target_name, "removing home registry tag");
        runtime
            .remove_image(&target_name)
            .await
            .during(Step::Remove, &target_name)?;

        Ok(target)
    }

    /// Try one pull and log its outcome. Failures are not errors here.
    async fn attempt_pull<R: ImageOps>(&mut self, runtime: &R, name: &ImageName) -> bool {
        tracing::info!(image = %name, "pulling");
        match runtime.pull_image(name).await {
            Ok(()) => {
                self.attempts.push(AttemptOutcome::succeeded(name));
                true
            }
            Err(e) => {
                tracing::warn!(image = %name, error = %e, "pull failed");
                self.attempts.push(AttemptOutcome::failed(name, &e));
                false
            }
        }
    }

    fn exhausted(self) -> MirrorError {
        MirrorError::SourcesExhausted {
            image: self.image.to_string(),
            attempts: self.attempts,
        }
    }
}

// =============================================================================
// Resolved -> Pulled / Published
// =============================================================================

impl MirrorJob<Resolved> {
    /// Pull via the home registry first, then the mirror sources.
    ///
    /// # Errors
    ///
    /// `SourcesExhausted` when neither the home registry nor any mirror has
    /// the image; `RuntimeOperation` when retagging or cleanup fails.
    pub async fn pull_through_home<R: ImageOps>(
        mut self,
        runtime: &R,
    ) -> Result<MirrorJob<Pulled>, MirrorError> {
        let home_image = ImageName::from(self.target());

        if self.attempt_pull(runtime, &home_image).await {
            self.adopt(runtime, &home_image).await?;
            let result = PullResult {
                source_registry: Some(self.config.harbor.domain.clone()),
                source_image: home_image,
            };
            return Ok(self.transition(Pulled { result }));
        }

        self.pull_from_mirrors(runtime).await
    }

    /// Pull from the mirror sources in configured order; the first success
    /// wins and later sources are not tried. With no mirrors configured the
    /// bare reference is pulled directly from the runtime's default registry.
    ///
    /// # Errors
    ///
    /// `SourcesExhausted` when every source fails; `RuntimeOperation` when
    /// retagging or cleanup fails.
    pub async fn pull_from_mirrors<R: ImageOps>(
        mut self,
        runtime: &R,
    ) -> Result<MirrorJob<Pulled>, MirrorError> {
        if self.config.mirrors.is_empty() {
            tracing::info!("no mirror sources configured, pulling from default registry");
            let bare = self.bare_name();
            if self.attempt_pull(runtime, &bare).await {
                let result = PullResult {
                    source_registry: None,
                    source_image: bare,
                };
                return Ok(self.transition(Pulled { result }));
            }
            return Err(self.exhausted());
        }

        let mirrors = self.config.mirrors.clone();
        for source in &mirrors {
            let qualified = ImageName::from(resolver::mirror_source_name(&self.image, source));
            if self.attempt_pull(runtime, &qualified).await {
                self.adopt(runtime, &qualified).await?;
                let result = PullResult {
                    source_registry: Some(source.clone()),
                    source_image: qualified,
                };
                return Ok(self.transition(Pulled { result }));
            }
        }

        Err(self.exhausted())
    }

    /// Push an image that already exists locally, without pulling.
    ///
    /// # Errors
    ///
    /// `RuntimeOperation` when any of tag, login, push or remove fails.
    pub async fn push<R: ImageOps>(self, runtime: &R) -> Result<MirrorJob<Published>, MirrorError> {
        let target = self.push_to_home(runtime).await?;
        Ok(self.transition(Published {
            source: None,
            pushed_to: Some(target),
        }))
    }
}

// =============================================================================
// Pulled -> Published
// =============================================================================

impl MirrorJob<Pulled> {
    /// Make sure the image is in the home registry, pushing it unless it was
    /// pulled from there.
    ///
    /// # Errors
    ///
    /// `RuntimeOperation` when any push step fails. The pulled bare
    /// reference stays in the local store.
    pub async fn publish<R: ImageOps>(self, runtime: &R) -> Result<MirrorJob<Published>, MirrorError> {
        let source = self.state.result.clone();

        if source.is_from(&self.config.harbor.domain) {
            tracing::info!(registry = %self.config.harbor.domain, "image came from home registry, not pushing");
            return Ok(self.transition(Published {
                source: Some(source),
                pushed_to: None,
            }));
        }

        let target = self.push_to_home(runtime).await?;
        Ok(self.transition(Published {
            source: Some(source),
            pushed_to: Some(target),
        }))
    }
}
