//! Storage utilities for the calculator
//!
//! Resolves the per-app config directory and reads/writes JSON preferences.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Get the config directory for an app, or `.` when no home directory exists.
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("de", "minirechner", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(StorageError::NotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serialize to pretty JSON and write, creating parent directories.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    tracing::debug!(path = %path.display(), "wrote json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let prefs = Prefs { name: "a".into(), count: 3 };

        save_json(&path, &prefs).unwrap();
        let loaded: Prefs = load_json(&path).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_json::<Prefs>(&path).unwrap_err();
        assert!(matches!(err, StorageError::NotFound(p) if p == path));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_json::<Prefs>(&path).unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }

    #[test]
    fn test_config_dir_ends_with_app_name() {
        let dir = config_dir("minicalc");
        // Falls back to "." in environments without a home directory
        if dir != PathBuf::from(".") {
            assert!(dir.to_string_lossy().contains("minicalc"));
        }
    }
}
