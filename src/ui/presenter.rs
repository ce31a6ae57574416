use crate::engine::protocol::GameEnd;
use crate::model::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// The scene the player wakes up in.
    Scene,
    Narration,
}

/// Everything the game loop shows to the player.
///
/// The engine never prints directly, so the loop can be driven with a
/// recording presenter in tests.
pub trait Presenter {
    /// Wipe the screen before anything else is shown.
    fn clear(&mut self);

    fn welcome(&mut self);

    /// Show text progressively.
    fn reveal(&mut self, text: &str, tone: Tone);

    fn show_status(&mut self, state: &GameState);

    fn info(&mut self, message: &str);

    fn error(&mut self, message: &str);

    /// Prompt for the next action.
    fn ask_action(&mut self);

    fn farewell(&mut self, end: GameEnd);
}

pub const HP_CELLS: u32 = 10;

/// `(full, empty)` cell counts for the HP bar.
pub fn hp_cells(hp: u32) -> (u32, u32) {
    let full = (hp / 10).min(HP_CELLS);
    (full, HP_CELLS - full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hp_bar_rounds_down() {
        assert_eq!(hp_cells(100), (10, 0));
        assert_eq!(hp_cells(99), (9, 1));
        assert_eq!(hp_cells(9), (0, 10));
        assert_eq!(hp_cells(0), (0, 10));
    }
}
