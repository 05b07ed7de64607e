//! Persisted calculator preferences

use crate::display::Language;
use crate::evaluator::Operator;
use minicore::storage::{self, config_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalcSettings {
    /// Operator bound to the Enter key
    #[serde(default = "default_enter_operator")]
    pub enter_operator: Operator,
    #[serde(default)]
    pub language: Language,
}

fn default_enter_operator() -> Operator {
    Operator::Add
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            enter_operator: default_enter_operator(),
            language: Language::default(),
        }
    }
}

impl CalcSettings {
    pub fn config_path() -> PathBuf {
        config_dir("minicalc").join("settings.json")
    }

    pub fn load_from(path: &Path) -> storage::Result<Self> {
        storage::load_json(path)
    }

    pub fn save_to(&self, path: &Path) -> storage::Result<()> {
        storage::save_json(path, self)
    }

    /// Load from the config dir, falling back to defaults.
    pub fn load() -> Self {
        let path = Self::config_path();
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(StorageError::NotFound(_)) => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "failed to load settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        let path = Self::config_path();
        match self.save_to(&path) {
            Ok(()) => tracing::info!(path = %path.display(), "settings saved"),
            Err(e) => tracing::warn!(path = %path.display(), "failed to save settings: {}", e),
        }
    }
}
