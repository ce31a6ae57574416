use std::fs;
use std::io;
use std::path::Path;

use log::{info, warn};
use thiserror::Error;

use crate::model::game_state::{GameState, MAX_HP};

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file {0} not found")]
    NotFound(String),

    #[error("could not access save file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("corrupt save data: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("could not encode game state: {0}")]
    Encode(serde_json::Error),

    #[error("corrupt save data: hp {0} is above {max}", max = MAX_HP)]
    HpOutOfRange(u32),
}

/// Result of loading at startup. A failed load still yields a playable state.
#[derive(Debug)]
pub struct LoadOutcome {
    pub state: GameState,
    pub problem: Option<SaveError>,
}

/// Read and validate a saved game.
///
/// All four fields must be present; extra keys are ignored.
pub fn read_save(path: &Path) -> Result<GameState, SaveError> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SaveError::NotFound(path.display().to_string()),
        _ => SaveError::Io {
            path: path.display().to_string(),
            source: e,
        },
    })?;

    let state: GameState = serde_json::from_str(&raw)?;
    if state.hp > MAX_HP {
        return Err(SaveError::HpOutOfRange(state.hp));
    }

    Ok(state)
}

/// Load the saved game, falling back to a fresh one on any failure.
pub fn load_game(path: &Path) -> LoadOutcome {
    match read_save(path) {
        Ok(state) => {
            info!("loaded save from {}", path.display());
            LoadOutcome { state, problem: None }
        }
        Err(e) => {
            match e {
                SaveError::NotFound(_) => info!("no save at {}, starting fresh", path.display()),
                _ => warn!("discarding save at {}: {}", path.display(), e),
            }
            LoadOutcome {
                state: GameState::initial(),
                problem: Some(e),
            }
        }
    }
}

/// Overwrite the save file with `state`.
pub fn save_game(path: &Path, state: &GameState) -> Result<(), SaveError> {
    let json = serde_json::to_string_pretty(state).map_err(SaveError::Encode)?;
    fs::write(path, json).map_err(|source| SaveError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!("saved game to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_falls_back_to_initial_state() {
        let dir = tempdir().unwrap();
        let outcome = load_game(&dir.path().join("nope.json"));

        assert_eq!(outcome.state, GameState::initial());
        assert!(matches!(outcome.problem, Some(SaveError::NotFound(_))));
    }

    #[test]
    fn corrupt_json_falls_back_to_initial_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, "{ not json").unwrap();

        let outcome = load_game(&path);
        assert_eq!(outcome.state, GameState::initial());
        assert!(matches!(outcome.problem, Some(SaveError::Corrupt(_))));
    }

    #[test]
    fn missing_key_is_treated_as_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, r#"{"hp": 50, "inventory": [], "history": []}"#).unwrap();

        assert!(matches!(read_save(&path), Err(SaveError::Corrupt(_))));
    }

    #[test]
    fn hp_above_max_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(
            &path,
            r#"{"hp": 150, "inventory": [], "history": [], "current_scene": ""}"#,
        )
        .unwrap();

        assert!(matches!(read_save(&path), Err(SaveError::HpOutOfRange(150))));
    }

    #[test]
    fn extra_keys_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(
            &path,
            r#"{"hp": 7, "inventory": ["corda"], "history": [], "current_scene": "x", "gold": 3}"#,
        )
        .unwrap();

        let state = read_save(&path).unwrap();
        assert_eq!(state.hp, 7);
        assert_eq!(state.inventory, vec!["corda"]);
    }

    #[test]
    fn saved_game_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("save.json");

        let mut state = GameState::initial();
        state.hp = 35;
        state.inventory.push("escudo".into());
        state.push_scene("Um lobo uiva ao longe.");

        save_game(&path, &state).unwrap();
        let outcome = load_game(&path);

        assert!(outcome.problem.is_none());
        assert_eq!(outcome.state, state);
    }

    #[test]
    fn save_keeps_non_ascii_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("save.json");

        save_game(&path, &GameState::initial()).unwrap();
        let raw = fs::read_to_string(&path).unwrap();

        assert!(raw.contains("poção de cura"));
        assert!(raw.contains("\"current_scene\""));
    }

    #[test]
    fn save_into_missing_directory_reports_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("save.json");

        let err = save_game(&path, &GameState::initial()).unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));
    }
}
