// ABOUTME: Compile-fail test verifying a pushed job cannot be pulled again.
// ABOUTME: This test should fail to compile, validating state machine safety.

use docker_mirror::config::MirrorConfig;
use docker_mirror::mirror::{MirrorJob, Published};
use docker_mirror::types::{ImageReference, RegistryEndpoint};

async fn try_pull_after_push<R: docker_mirror::runtime::ImageOps>(runtime: &R) {
    let config = MirrorConfig::template(RegistryEndpoint::new("harbor.example.com").unwrap());
    let image = ImageReference::parse("redis").unwrap();
    let job: MirrorJob<Published> = MirrorJob::new(config, image).push(runtime).await.unwrap();

    // ERROR: pull_from_mirrors() only exists on MirrorJob<Resolved>
    job.pull_from_mirrors(runtime).await;
}

fn main() {}
