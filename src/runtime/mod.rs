// ABOUTME: Container runtime access for Docker and Podman.
// ABOUTME: Detects the local CLI and exposes it through the ImageOps trait.

mod cli;
mod detection;
mod error;
pub mod traits;
mod types;

pub use cli::CliRuntime;
pub use detection::{DetectionError, detect_in, detect_local};
pub use error::{RuntimeError, RuntimeErrorKind};
pub use traits::{CommandOutput, ImageError, ImageOps, RegistryAuth};
pub use types::{RuntimeInfo, RuntimeType};

/// Detect the local runtime and wrap it in a [`CliRuntime`].
pub fn connect_local(preferred: Option<RuntimeType>) -> Result<CliRuntime, RuntimeError> {
    let info = detect_local(preferred)?;
    Ok(CliRuntime::new(info))
}
