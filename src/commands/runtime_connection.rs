// ABOUTME: Shared helper for connecting to the local container runtime.
// ABOUTME: Resolves the runtime preference from flags and config, then detects the CLI.

use docker_mirror::config::MirrorConfig;
use docker_mirror::error::Result;
use docker_mirror::output::Output;
use docker_mirror::runtime::{CliRuntime, RuntimeType, connect_local};

/// Connect to the container runtime CLI.
///
/// The `--runtime` flag wins over the config file; without either, docker
/// and then podman are looked up on PATH.
pub fn connect_to_runtime(
    flag: Option<RuntimeType>,
    config: &MirrorConfig,
    output: &Output,
) -> Result<CliRuntime> {
    let preferred = flag.or(config.runtime);

    let runtime = connect_local(preferred)?;

    output.progress(&format!(
        "  → Using {} at {}",
        runtime.runtime_type(),
        runtime.binary().display()
    ));

    Ok(runtime)
}
