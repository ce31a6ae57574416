pub mod event_result;
pub mod game_save;
pub mod game_state;
pub mod state_change;
pub mod vocabulary;
