use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::engine::llm_client::{SamplingOptions, DEFAULT_ENDPOINT, DEFAULT_MODEL};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub save_file: PathBuf,

    /// Base URL of the Ollama server.
    pub endpoint: String,
    pub model: String,
    pub sampling: SamplingOptions,

    /// Pause between revealed characters; 0 prints text at once.
    pub typing_delay_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            save_file: PathBuf::from("game_state.json"),
            endpoint: DEFAULT_ENDPOINT.into(),
            model: DEFAULT_MODEL.into(),
            sampling: SamplingOptions::default(),
            typing_delay_ms: 10,
        }
    }
}

impl GameSettings {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let settings: GameSettings =
            serde_json::from_str(r#"{"model": "llama3", "typing_delay_ms": 0}"#).unwrap();

        assert_eq!(settings.model, "llama3");
        assert_eq!(settings.typing_delay(), Duration::ZERO);
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.sampling.top_k, 30);
    }
}
