//! Persisted per-user settings.
//!
//! Settings live in a YAML file under a dot-directory in the user's home,
//! namespaced per application (`~/.<namespace>/settings.yaml`). A missing
//! file loads as defaults; unknown keys are ignored so the format can grow.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// User preferences persisted across runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    /// Absolute path of the chosen profile picture, if any.
    pub profile_picture_path: Option<String>,
}

impl ShellSettings {
    /// The settings file path for `namespace`: `~/.<namespace>/settings.yaml`.
    pub fn default_path(namespace: &str) -> Result<PathBuf, String> {
        let home = dirs::home_dir().ok_or_else(|| "home directory not found".to_string())?;
        Ok(home.join(format!(".{}", namespace)).join("settings.yaml"))
    }

    /// Load from the default path, falling back to defaults on any failure.
    ///
    /// A missing file is the normal first-run case and is only logged at
    /// debug level; other errors are warnings.
    pub fn load(namespace: &str) -> ShellSettings {
        let path = match Self::default_path(namespace) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("settings path unavailable: {}", e);
                return ShellSettings::default();
            }
        };
        if !path.exists() {
            log::debug!("no settings file at {:?}, using defaults", path);
            return ShellSettings::default();
        }
        match Self::load_from(&path) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("failed to load settings: {}", e);
                ShellSettings::default()
            }
        }
    }

    /// Save to the default path, creating the directory if needed.
    pub fn save(&self, namespace: &str) -> Result<(), String> {
        self.save_to(&Self::default_path(namespace)?)
    }

    pub fn load_from(path: &Path) -> Result<ShellSettings, String> {
        if !path.exists() {
            return Err(format!("settings file {:?} does not exist", path));
        }
        let s =
            fs::read_to_string(path).map_err(|e| format!("failed to read {:?}: {}", path, e))?;
        let settings: ShellSettings =
            serde_yaml::from_str(&s).map_err(|e| format!("deserialization error: {}", e))?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("failed to create dir {:?}: {}", dir, e))?;
        }
        let s = serde_yaml::to_string(self).map_err(|e| format!("serialization error: {}", e))?;
        let mut f =
            fs::File::create(path).map_err(|e| format!("failed to create file {:?}: {}", path, e))?;
        f.write_all(s.as_bytes())
            .map_err(|e| format!("failed to write file {:?}: {}", path, e))?;
        Ok(())
    }
}
