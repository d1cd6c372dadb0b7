// ABOUTME: ImageOps implementation that drives the docker or podman CLI.
// ABOUTME: Captures combined stdout/stderr of each command for diagnostics.

use super::traits::{CommandOutput, ImageError, ImageOps, RegistryAuth};
use super::types::{RuntimeInfo, RuntimeType};
use crate::types::{ImageName, RegistryEndpoint};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

const REDACTED: &str = "********";

/// Container runtime reached through its command-line client.
///
/// Docker and Podman share the `pull`/`tag`/`rmi`/`login`/`push` syntax, so
/// one implementation serves both.
#[derive(Debug, Clone)]
pub struct CliRuntime {
    runtime_type: RuntimeType,
    binary: PathBuf,
}

impl CliRuntime {
    pub fn new(info: RuntimeInfo) -> Self {
        Self {
            runtime_type: info.runtime_type,
            binary: info.binary,
        }
    }

    /// Use an explicit binary path instead of detection.
    pub fn with_binary(runtime_type: RuntimeType, binary: impl Into<PathBuf>) -> Self {
        Self {
            runtime_type,
            binary: binary.into(),
        }
    }

    pub fn runtime_type(&self) -> RuntimeType {
        self.runtime_type
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Run one command to completion. `secret` is masked in log output.
    async fn run(&self, args: &[&str], secret: Option<&str>) -> Result<CommandOutput, ImageError> {
        let shown: Vec<&str> = args
            .iter()
            .map(|arg| match secret {
                Some(s) if !s.is_empty() && *arg == s => REDACTED,
                _ => *arg,
            })
            .collect();
        tracing::debug!(
            runtime = %self.runtime_type,
            command = %shown.join(" "),
            "running runtime command"
        );

        let output = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                ImageError::Runtime(format!("failed to run {}: {}", self.binary.display(), e))
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        let result = CommandOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            combined,
        };

        tracing::debug!(
            success = result.success,
            exit_code = ?result.exit_code,
            output = %result.combined.trim(),
            "runtime command finished"
        );

        Ok(result)
    }
}

/// Turn a failed command into the matching error, naming its subject.
fn check(
    output: CommandOutput,
    subject: &str,
    error: fn(String) -> ImageError,
) -> Result<(), ImageError> {
    if output.success {
        Ok(())
    } else {
        Err(error(format!("{}: {}", subject, output.diagnostic())))
    }
}

#[async_trait]
impl ImageOps for CliRuntime {
    async fn pull_image(&self, image: &ImageName) -> Result<(), ImageError> {
        let name = image.to_string();
        let output = self.run(&["pull", &name], None).await?;
        check(output, &name, ImageError::PullFailed)
    }

    async fn tag_image(&self, source: &ImageName, target: &ImageName) -> Result<(), ImageError> {
        let source = source.to_string();
        let target = target.to_string();
        let output = self.run(&["tag", &source, &target], None).await?;
        check(
            output,
            &format!("{} -> {}", source, target),
            ImageError::TagFailed,
        )
    }

    async fn remove_image(&self, image: &ImageName) -> Result<(), ImageError> {
        let name = image.to_string();
        let output = self.run(&["rmi", &name], None).await?;
        check(output, &name, ImageError::RemoveFailed)
    }

    async fn login(
        &self,
        registry: &RegistryEndpoint,
        auth: &RegistryAuth,
    ) -> Result<(), ImageError> {
        let output = self
            .run(
                &[
                    "login",
                    registry.as_str(),
                    "-u",
                    &auth.username,
                    "-p",
                    &auth.password,
                ],
                Some(auth.password.as_str()),
            )
            .await?;
        check(output, registry.as_str(), ImageError::AuthenticationFailed)
    }

    async fn push_image(&self, image: &ImageName) -> Result<(), ImageError> {
        let name = image.to_string();
        let output = self.run(&["push", &name], None).await?;
        check(output, &name, ImageError::PushFailed)
    }
}
