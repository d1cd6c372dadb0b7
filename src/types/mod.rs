// ABOUTME: Validated value types for image and registry names.
// ABOUTME: Keeps bare references, registry hosts and qualified names distinct.

mod image_ref;
mod qualified;
mod registry;

pub use image_ref::{DEFAULT_NAMESPACE, ImageReference, ParseImageReferenceError};
pub use qualified::{ImageName, QualifiedImageName};
pub use registry::{RegistryEndpoint, RegistryEndpointError};
