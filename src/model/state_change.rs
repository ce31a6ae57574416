/// A change to the game state read out of a narration.
/// This does NOT mutate state directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    Damage { amount: u32 },
    Heal { amount: u32 },
    GainItem { item: String },
    LoseItem { item: String },
}

impl StateChange {
    pub fn short_name(&self) -> &'static str {
        match self {
            StateChange::Damage { .. } => "Damage",
            StateChange::Heal { .. } => "Heal",
            StateChange::GainItem { .. } => "GainItem",
            StateChange::LoseItem { .. } => "LoseItem",
        }
    }
}
