//! Platform-specific data directory resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable that overrides the data root.
pub(super) const DATA_DIR_ENV: &str = "ROSTER_DATA_DIR";

/// Get the root directory for application data (database).
///
/// Resolution order:
/// 1. `ROSTER_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/roster`)
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = resolve_data_root(env::var(DATA_DIR_ENV).ok(), dirs::data_local_dir())?;

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

fn resolve_data_root(
    env_override: Option<String>,
    system_dir: Option<PathBuf>,
) -> Result<PathBuf, PathError> {
    if let Some(path) = env_override.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }

    system_dir
        .map(|dir| dir.join("roster"))
        .ok_or(PathError::NoDataDir)
}
