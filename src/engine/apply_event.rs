use crate::model::event_result::ChangeOutcome;
use crate::model::game_state::{GameState, MAX_HP};
use crate::model::state_change::StateChange;

/// Apply a single StateChange to the GameState, returning the outcome
pub fn apply_change(state: &mut GameState, change: &StateChange) -> ChangeOutcome {
    match change {
        StateChange::Damage { amount } => {
            let before = state.hp;
            state.hp = before.saturating_sub(*amount);

            if *amount > before {
                ChangeOutcome::Clamped {
                    requested: *amount,
                    applied: before,
                }
            } else {
                ChangeOutcome::Applied
            }
        }

        StateChange::Heal { amount } => {
            let room = MAX_HP.saturating_sub(state.hp);
            state.hp = MAX_HP.min(state.hp.saturating_add(*amount));

            if *amount > room {
                ChangeOutcome::Clamped {
                    requested: *amount,
                    applied: room,
                }
            } else {
                ChangeOutcome::Applied
            }
        }

        StateChange::GainItem { item } => {
            if state.has_item(item) {
                return ChangeOutcome::Ignored {
                    reason: format!("'{}' is already in the inventory", item),
                };
            }

            state.inventory.push(item.clone());
            ChangeOutcome::Applied
        }

        StateChange::LoseItem { item } => {
            let Some(idx) = state.inventory.iter().position(|i| i == item) else {
                return ChangeOutcome::Ignored {
                    reason: format!("'{}' is not in the inventory", item),
                };
            };

            state.inventory.remove(idx);
            ChangeOutcome::Applied
        }
    }
}
