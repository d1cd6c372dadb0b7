// ABOUTME: Init command implementation.
// ABOUTME: Writes the configuration file at the resolved config path.

use super::CommandContext;
use docker_mirror::config::{InitOptions, init_config};
use docker_mirror::error::Result;
use docker_mirror::output::Output;

pub fn init(
    ctx: &CommandContext,
    options: &InitOptions,
    force: bool,
    output: &Output,
) -> Result<()> {
    let path = ctx.config_path()?;
    let config = init_config(&path, options, force)?;

    output.progress(&format!(
        "  → Home registry: {}/{}",
        config.harbor.domain, config.harbor.project
    ));
    for source in &config.mirrors {
        output.progress(&format!("  → Mirror source: {}", source));
    }
    output.success(&format!("Configuration saved to {}", path.display()));
    Ok(())
}
