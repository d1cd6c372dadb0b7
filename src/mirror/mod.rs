// ABOUTME: Mirror resolution engine using the type state pattern.
// ABOUTME: Decides where an image comes from and keeps local and home registry tags consistent.

mod engine;
mod error;
mod job;
mod outcome;
pub mod resolver;
mod state;
mod transitions;

pub use engine::{MirrorMode, preflight, pull_local, push_image, run, sync_image};
pub use error::{ImageErrorExt, MirrorError, MirrorErrorKind, Step};
pub use job::MirrorJob;
pub use outcome::{AttemptOutcome, MirrorReport, PullResult};
pub use resolver::{mirror_source_name, resolve_target};
pub use state::{Published, Pulled, Resolved};
