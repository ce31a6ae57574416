/// One line of player input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    Quit,
    /// Start over from the initial state and stop.
    Reset,
    Action(String),
}

impl PlayerCommand {
    /// Reserved words must match exactly; anything else is an action for the narrator.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\n', '\r']);
        match line {
            "quit" => PlayerCommand::Quit,
            "reset" => PlayerCommand::Reset,
            _ => PlayerCommand::Action(line.to_string()),
        }
    }
}

/// Why the game loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Quit,
    Reset,
    Defeated,
    InputClosed,
}
