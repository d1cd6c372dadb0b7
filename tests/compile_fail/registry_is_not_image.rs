// ABOUTME: Compile-fail test verifying registry hosts and image references don't mix.
// ABOUTME: This test should fail to compile, validating name type safety.

use docker_mirror::mirror::mirror_source_name;
use docker_mirror::types::RegistryEndpoint;

fn main() {
    let source = RegistryEndpoint::new("docker.m.daocloud.io").unwrap();

    // ERROR: first argument must be an ImageReference
    let _ = mirror_source_name(&source, &source);
}
