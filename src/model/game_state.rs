use serde::{Deserialize, Serialize};

pub const MAX_HP: u32 = 100;

pub const STARTING_ITEMS: [&str; 2] = ["espada", "poção de cura"];

pub const OPENING_SCENE: &str = "Você acorda em um floresta velha...";

/// The whole of a running game.
/// Owned by the engine; the extractor only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Always within `0..=MAX_HP`.
    pub hp: u32,

    /// Item names in order of first acquisition.
    pub inventory: Vec<String>,

    /// Every narration received so far, oldest first.
    pub history: Vec<String>,

    #[serde(alias = "currentScene")]
    pub current_scene: String,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            hp: MAX_HP,
            inventory: STARTING_ITEMS.iter().map(|s| s.to_string()).collect(),
            history: Vec::new(),
            current_scene: OPENING_SCENE.to_string(),
        }
    }
}

impl GameState {
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// The last `n` narrations, oldest first.
    pub fn recent_history(&self, n: usize) -> &[String] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }

    /// Record a narration as the newest scene.
    pub fn push_scene(&mut self, narrative: &str) {
        self.history.push(narrative.to_string());
        self.current_scene = narrative.to_string();
    }
}
