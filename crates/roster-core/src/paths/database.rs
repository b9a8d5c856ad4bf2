//! Database path resolution.

use std::fs;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// Get the path to the roster database file.
///
/// Returns `<data_root>/data/roster.db`. The `data/` subdirectory is
/// created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let data_dir = data_root()?.join("data");

    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(data_dir.join("roster.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path_ends_with_roster_db() {
        // Only meaningful where a data directory can be resolved
        if let Ok(path) = database_path() {
            assert!(path.to_string_lossy().ends_with("roster.db"));
        }
    }
}
