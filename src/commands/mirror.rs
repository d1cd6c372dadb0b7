// ABOUTME: pull, pull-local and push command implementations.
// ABOUTME: Drives the mirror job state machine and reports progress.

use super::CommandContext;
use super::runtime_connection::connect_to_runtime;
use docker_mirror::diagnostics::Diagnostics;
use docker_mirror::error::Result;
use docker_mirror::mirror::{self, AttemptOutcome, MirrorJob, MirrorMode, PullResult};
use docker_mirror::output::Output;
use docker_mirror::types::ImageReference;

/// Run one mirror operation for `image`.
pub async fn mirror_image(
    ctx: &CommandContext,
    mode: MirrorMode,
    image: ImageReference,
    mut output: Output,
) -> Result<()> {
    // Configuration problems surface before the runtime is touched.
    let config = ctx.load_config()?;
    output.start_timer();

    let mut diag = Diagnostics::default();
    mirror::preflight(mode, &config, &image, &mut diag);
    for warning in diag.warnings() {
        output.warning(&warning.message);
    }

    let runtime = connect_to_runtime(ctx.runtime, &config, &output)?;
    let job = MirrorJob::new(config, image);

    match mode {
        MirrorMode::Sync => {
            output.progress(&format!("Syncing {} to {}", job.image(), job.target()));

            output.progress("  → Pulling (home registry first, then mirrors)...");
            let job = job.pull_through_home(&runtime).await?;
            report_attempts(job.attempts(), &output);
            output.progress(&format!(
                "  ✓ Pulled from {}",
                describe_source(job.pull_result())
            ));

            output.progress("  → Publishing to home registry...");
            let job = job.publish(&runtime).await?;
            match job.pushed_to() {
                Some(target) => output.progress(&format!("  ✓ Pushed {}", target)),
                None => output.progress("  ✓ Already present in home registry"),
            }

            output.success(&format!("Image {} synced", job.image()));
        }
        MirrorMode::PullOnly => {
            output.progress(&format!("Pulling {}", job.image()));

            output.progress("  → Pulling from mirror sources...");
            let job = job.pull_from_mirrors(&runtime).await?;
            report_attempts(job.attempts(), &output);
            output.progress(&format!(
                "  ✓ Pulled from {}",
                describe_source(job.pull_result())
            ));

            output.success(&format!("Image {} pulled locally", job.image()));
        }
        MirrorMode::PushOnly => {
            let target = job.target();
            output.progress(&format!("Pushing {} to {}", job.image(), target));

            let job = job.push(&runtime).await?;
            output.success(&format!("Image {} pushed to {}", job.image(), target));
        }
    }

    Ok(())
}

fn report_attempts(attempts: &[AttemptOutcome], output: &Output) {
    for attempt in attempts.iter().filter(|a| !a.succeeded) {
        output.progress(&format!(
            "  ✗ {} not available from {}",
            attempt.image,
            attempt.source_label()
        ));
    }
}

fn describe_source(result: &PullResult) -> String {
    match result.source_registry {
        Some(ref registry) => format!("{} ({})", registry, result.source_image),
        None => format!("default registry ({})", result.source_image),
    }
}
