// ABOUTME: Test support utilities.
// ABOUTME: Provides a scripted in-memory runtime and config builders for engine tests.

// Each test binary only uses some of these helpers, so allow dead_code.
#![allow(dead_code)]

use async_trait::async_trait;
use docker_mirror::config::{HomeRegistryConfig, MirrorConfig};
use docker_mirror::runtime::{ImageError, ImageOps, RegistryAuth};
use docker_mirror::types::{ImageName, ImageReference, RegistryEndpoint};
use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("docker_mirror=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub const HOME: &str = "home.example.com";

pub fn registry(host: &str) -> RegistryEndpoint {
    RegistryEndpoint::new(host).unwrap()
}

pub fn image(reference: &str) -> ImageReference {
    ImageReference::parse(reference).unwrap()
}

/// Config with home registry `domain` (project `public`) and the given mirrors.
pub fn config_with(domain: &str, mirrors: &[&str]) -> MirrorConfig {
    let mut home = HomeRegistryConfig::new(registry(domain));
    home.username = "admin".to_string();
    home.password = "s3cret".to_string();
    MirrorConfig::new(home, mirrors.iter().map(|m| registry(m)).collect())
}

/// A runtime call as the engine issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Pull(String),
    Tag(String, String),
    Remove(String),
    Login { registry: String, username: String },
    Push(String),
}

#[derive(Default)]
struct State {
    /// Tags present in the local image store.
    local: BTreeSet<String>,
    /// Fully qualified names (or bare names for the default registry) that
    /// can be pulled.
    remote: BTreeSet<String>,
    calls: Vec<Call>,
    fail_tag: bool,
    fail_remove: bool,
    fail_login: bool,
    fail_push: bool,
}

/// In-memory runtime with a simulated local store and remote registries.
///
/// Pulls succeed only for names registered with `with_remote`; tag, remove
/// and push operate on the local store the way the real CLI does.
#[derive(Default)]
pub struct ScriptedRuntime {
    state: Mutex<State>,
}

impl ScriptedRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remote(self, name: &str) -> Self {
        self.state.lock().remote.insert(name.to_string());
        self
    }

    pub fn with_local(self, name: &str) -> Self {
        self.state.lock().local.insert(name.to_string());
        self
    }

    pub fn failing_tag(self) -> Self {
        self.state.lock().fail_tag = true;
        self
    }

    pub fn failing_remove(self) -> Self {
        self.state.lock().fail_remove = true;
        self
    }

    pub fn failing_login(self) -> Self {
        self.state.lock().fail_login = true;
        self
    }

    pub fn failing_push(self) -> Self {
        self.state.lock().fail_push = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    /// Names pulled, in order.
    pub fn pulls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Pull(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn pushes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Push(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn local_images(&self) -> Vec<String> {
        self.state.lock().local.iter().cloned().collect()
    }

    pub fn has_remote(&self, name: &str) -> bool {
        self.state.lock().remote.contains(name)
    }
}

#[async_trait]
impl ImageOps for ScriptedRuntime {
    async fn pull_image(&self, image: &ImageName) -> Result<(), ImageError> {
        let name = image.to_string();
        let mut state = self.state.lock();
        state.calls.push(Call::Pull(name.clone()));
        if state.remote.contains(&name) {
            state.local.insert(name);
            Ok(())
        } else {
            Err(ImageError::PullFailed(format!("{}: manifest unknown", name)))
        }
    }

    async fn tag_image(&self, source: &ImageName, target: &ImageName) -> Result<(), ImageError> {
        let (source, target) = (source.to_string(), target.to_string());
        let mut state = self.state.lock();
        state.calls.push(Call::Tag(source.clone(), target.clone()));
        if state.fail_tag {
            return Err(ImageError::TagFailed(format!(
                "{} -> {}: tag refused",
                source, target
            )));
        }
        if !state.local.contains(&source) {
            return Err(ImageError::TagFailed(format!("No such image: {}", source)));
        }
        state.local.insert(target);
        Ok(())
    }

    async fn remove_image(&self, image: &ImageName) -> Result<(), ImageError> {
        let name = image.to_string();
        let mut state = self.state.lock();
        state.calls.push(Call::Remove(name.clone()));
        if state.fail_remove {
            return Err(ImageError::RemoveFailed(format!(
                "{}: image is in use",
                name
            )));
        }
        if state.local.remove(&name) {
            Ok(())
        } else {
            Err(ImageError::RemoveFailed(format!("No such image: {}", name)))
        }
    }

    async fn login(
        &self,
        registry: &RegistryEndpoint,
        auth: &RegistryAuth,
    ) -> Result<(), ImageError> {
        let mut state = self.state.lock();
        state.calls.push(Call::Login {
            registry: registry.to_string(),
            username: auth.username.clone(),
        });
        if state.fail_login {
            return Err(ImageError::AuthenticationFailed(format!(
                "{}: unauthorized: incorrect username or password",
                registry
            )));
        }
        Ok(())
    }

    async fn push_image(&self, image: &ImageName) -> Result<(), ImageError> {
        let name = image.to_string();
        let mut state = self.state.lock();
        state.calls.push(Call::Push(name.clone()));
        if state.fail_push {
            return Err(ImageError::PushFailed(format!(
                "{}: denied: requested access to the resource is denied",
                name
            )));
        }
        if !state.local.contains(&name) {
            return Err(ImageError::PushFailed(format!(
                "An image does not exist locally with the tag: {}",
                name
            )));
        }
        state.remote.insert(name);
        Ok(())
    }
}
