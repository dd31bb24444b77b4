// Theme preference persistence: one JSON file in the platform config
// directory, read once at startup and rewritten on every theme change.
// Last write wins; there is nothing else to reconcile.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::state::app_state::Theme;

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreferences {
    theme: String,
}

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Opens the store at the platform config location, creating the
    /// directory if needed.
    pub fn open() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "conversor")
            .context("no home directory available for the preference store")?;
        fs::create_dir_all(dirs.config_dir()).with_context(|| {
            format!(
                "failed to create config directory {}",
                dirs.config_dir().display()
            )
        })?;
        Ok(Self {
            path: dirs.config_dir().join("preferences.json"),
        })
    }

    /// Store rooted at an explicit path (tests, fallback locations).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Previously chosen theme, or `None` when the file is missing,
    /// unreadable or names an unknown theme. The caller falls back to the
    /// configured default.
    pub fn load_theme(&self) -> Option<Theme> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let stored: StoredPreferences = serde_json::from_str(&raw).ok()?;
        Theme::from_name(&stored.theme)
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        let stored = StoredPreferences {
            theme: theme.name().to_string(),
        };
        let json = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
