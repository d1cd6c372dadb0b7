// ABOUTME: Runtime detection on the local system.
// ABOUTME: Looks for the docker binary first, then podman, on PATH.

use super::types::{RuntimeInfo, RuntimeType};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Error during runtime detection.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("no container runtime found (checked docker and podman on PATH)")]
    NoRuntimeFound,

    #[error("{0} was requested but its binary is not on PATH")]
    BinaryNotFound(RuntimeType),
}

/// Detect the container runtime CLI.
///
/// Detection order (when `preferred` is None):
/// 1. `docker`
/// 2. `podman`
pub fn detect_local(preferred: Option<RuntimeType>) -> Result<RuntimeInfo, DetectionError> {
    let path_var = std::env::var_os("PATH").unwrap_or_default();
    detect_in(preferred, &path_var)
}

/// Detection against an explicit PATH-style search list.
pub fn detect_in(
    preferred: Option<RuntimeType>,
    path_var: &OsStr,
) -> Result<RuntimeInfo, DetectionError> {
    if let Some(runtime_type) = preferred {
        return find_executable(runtime_type.binary_name(), path_var)
            .map(|binary| RuntimeInfo {
                runtime_type,
                binary,
            })
            .ok_or(DetectionError::BinaryNotFound(runtime_type));
    }

    for runtime_type in [RuntimeType::Docker, RuntimeType::Podman] {
        if let Some(binary) = find_executable(runtime_type.binary_name(), path_var) {
            tracing::debug!(runtime = %runtime_type, binary = %binary.display(), "detected runtime");
            return Ok(RuntimeInfo {
                runtime_type,
                binary,
            });
        }
    }

    Err(DetectionError::NoRuntimeFound)
}

fn find_executable(name: &str, path_var: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
