// ABOUTME: Mirror job state markers for the type state pattern.
// ABOUTME: Later states carry the pull decision and push target.

use super::outcome::PullResult;
use crate::types::QualifiedImageName;

/// Initial state: names resolved, nothing touched yet.
/// Available actions: `pull_through_home()`, `pull_from_mirrors()`, `push()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolved;

/// Pulled: the bare reference exists locally.
/// Available actions: `publish()`, `finish()`
#[derive(Debug, Clone)]
pub struct Pulled {
    pub(crate) result: PullResult,
}

/// Published: the image is in the home registry.
/// Available actions: `finish()`
#[derive(Debug, Clone)]
pub struct Published {
    pub(crate) source: Option<PullResult>,
    pub(crate) pushed_to: Option<QualifiedImageName>,
}
