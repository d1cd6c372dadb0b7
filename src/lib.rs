// ABOUTME: Library root for docker-mirror - exposes the engine and its collaborators.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod mirror;
pub mod output;
pub mod runtime;
pub mod types;
