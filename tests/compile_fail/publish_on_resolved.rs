// ABOUTME: Compile-fail test verifying publish cannot be called on Resolved.
// ABOUTME: This test should fail to compile, validating state machine safety.

use docker_mirror::config::MirrorConfig;
use docker_mirror::mirror::{MirrorJob, Resolved};
use docker_mirror::types::{ImageReference, RegistryEndpoint};

async fn try_publish_before_pull<R: docker_mirror::runtime::ImageOps>(runtime: &R) {
    let config = MirrorConfig::template(RegistryEndpoint::new("harbor.example.com").unwrap());
    let image = ImageReference::parse("redis").unwrap();
    let job: MirrorJob<Resolved> = MirrorJob::new(config, image);

    // ERROR: publish() only exists on MirrorJob<Pulled>
    job.publish(runtime).await;
}

fn main() {}
