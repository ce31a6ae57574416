//! A terminal RPG narrated by a language model.
//!
//! The model writes the story; [`engine::apply_narrative::StateExtractor`]
//! reads health and inventory changes back out of its text.

pub mod engine;
pub mod model;
pub mod ui;

pub use engine::apply_narrative::{extract, StateExtractor};
pub use model::game_state::GameState;
