use log::debug;

use crate::engine::apply_event::apply_change;
use crate::engine::narrative_parser::parse_changes;
use crate::model::event_result::{ChangeApplication, ExtractionReport};
use crate::model::game_state::GameState;
use crate::model::state_change::StateChange;
use crate::model::vocabulary::Vocabulary;

/// Derives the next GameState from a narration.
///
/// Extraction never fails: text without recognizable changes yields a copy
/// of the input state. The input is only borrowed, so the caller keeps an
/// untouched snapshot. History and the current scene are left to the caller.
#[derive(Debug, Clone, Default)]
pub struct StateExtractor {
    vocabulary: Vocabulary,
}

impl StateExtractor {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary: vocabulary.normalized(),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn scan_changes(&self, narrative: &str) -> Vec<StateChange> {
        parse_changes(narrative, &self.vocabulary)
    }

    pub fn extract(&self, narrative: &str, state: &GameState) -> GameState {
        self.extract_with_report(narrative, state).0
    }

    pub fn extract_with_report(
        &self,
        narrative: &str,
        state: &GameState,
    ) -> (GameState, ExtractionReport) {
        let mut next = state.clone();
        let mut applications = Vec::new();

        for change in self.scan_changes(narrative) {
            let outcome = apply_change(&mut next, &change);
            debug!("{} {:?}: {:?}", change.short_name(), change, outcome);
            applications.push(ChangeApplication { change, outcome });
        }

        (next, ExtractionReport { applications })
    }
}

/// Extract with the default vocabulary.
pub fn extract(narrative: &str, state: &GameState) -> GameState {
    StateExtractor::default().extract(narrative, state)
}
