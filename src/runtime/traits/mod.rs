// ABOUTME: Capability traits for container runtimes.
// ABOUTME: Defines ImageOps and the types shared by its implementations.

mod image;
mod shared_types;

pub use image::{ImageError, ImageOps};
pub use shared_types::{CommandOutput, RegistryAuth};
