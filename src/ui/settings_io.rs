use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::ui::settings::GameSettings;

pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("narrative_rpg");
    path.push("settings.json");
    path
}

/// Read settings, falling back to defaults when the file is missing or invalid.
pub fn load_settings(path: &Path) -> GameSettings {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => {
            debug!("no settings at {}, using defaults", path.display());
            return GameSettings::default();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!("ignoring invalid settings at {}: {}", path.display(), e);
        GameSettings::default()
    })
}

pub fn save_settings(path: &Path, settings: &GameSettings) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_settings_use_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(load_settings(&dir.path().join("none.json")), GameSettings::default());
    }

    #[test]
    fn invalid_settings_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2").unwrap();

        assert_eq!(load_settings(&path), GameSettings::default());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = GameSettings {
            model: "mistral".into(),
            typing_delay_ms: 0,
            ..GameSettings::default()
        };
        save_settings(&path, &settings).unwrap();

        assert_eq!(load_settings(&path), settings);
    }
}
