use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::engine::apply_narrative::StateExtractor;
use crate::engine::llm_client::{NarrativeService, SamplingOptions};
use crate::engine::prompt_builder::PromptBuilder;
use crate::engine::protocol::{GameEnd, PlayerCommand};
use crate::model::game_save::{load_game, save_game, SaveError};
use crate::model::game_state::GameState;
use crate::ui::presenter::{Presenter, Tone};

/// The turn loop: input, narration, extraction, rendering, saving.
pub struct Engine<S: NarrativeService, P: Presenter> {
    service: S,
    presenter: P,
    extractor: StateExtractor,
    model: String,
    sampling: SamplingOptions,
    save_path: PathBuf,
    game_state: GameState,
}

impl<S: NarrativeService, P: Presenter> Engine<S, P> {
    pub fn new(
        service: S,
        presenter: P,
        save_path: impl Into<PathBuf>,
        model: impl Into<String>,
        sampling: SamplingOptions,
    ) -> Self {
        Self {
            service,
            presenter,
            extractor: StateExtractor::default(),
            model: model.into(),
            sampling,
            save_path: save_path.into(),
            game_state: GameState::initial(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.game_state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Load the saved game and show the opening scene.
    /// The screen is cleared first so load diagnostics stay visible.
    pub fn start(&mut self) {
        self.presenter.clear();

        let outcome = load_game(&self.save_path);
        match &outcome.problem {
            Some(SaveError::NotFound(_)) => {
                self.presenter.info("Save não encontrado, iniciando novo jogo")
            }
            Some(e) => self
                .presenter
                .error(&format!("Save corrompido: {}. Iniciando novo jogo", e)),
            None => {}
        }
        self.game_state = outcome.state;

        self.presenter.welcome();
        self.presenter.reveal(&self.game_state.current_scene, Tone::Scene);
        self.presenter.show_status(&self.game_state);
    }

    /// Play turns until the player quits, resets, runs out of input or dies.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<GameEnd> {
        let mut lines = input.lines();

        let end = loop {
            if self.game_state.is_defeated() {
                break GameEnd::Defeated;
            }

            self.presenter.ask_action();
            let Some(line) = lines.next() else {
                break GameEnd::InputClosed;
            };
            let line = line.context("reading player input")?;

            match PlayerCommand::parse(&line) {
                PlayerCommand::Quit => break GameEnd::Quit,
                PlayerCommand::Reset => {
                    self.game_state = GameState::initial();
                    self.persist();
                    break GameEnd::Reset;
                }
                PlayerCommand::Action(action) => self.play_turn(&action),
            }
        };

        info!("game ended: {:?}", end);
        self.presenter.farewell(end);
        Ok(end)
    }

    /// Narrate one action and fold its consequences into the state.
    /// A failed narration leaves the state as it was.
    pub fn play_turn(&mut self, action: &str) {
        let request = PromptBuilder::new(self.extractor.vocabulary(), &self.model, &self.sampling)
            .build(action, &self.game_state);

        let narrative = match self.service.generate(&request) {
            Ok(text) => text,
            Err(e) => {
                warn!("generation failed: {}", e);
                self.presenter
                    .error(&format!("Falha ao gerar narrativa: {}", e));
                return;
            }
        };

        let (next, report) = self
            .extractor
            .extract_with_report(&narrative, &self.game_state);
        info!(
            "turn: {} changes found, {} applied, hp {} -> {}",
            report.applications.len(),
            report.applied_count(),
            self.game_state.hp,
            next.hp
        );
        self.game_state = next;

        self.presenter.reveal(&narrative, Tone::Narration);
        self.presenter.show_status(&self.game_state);

        self.game_state.push_scene(&narrative);
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = save_game(&self.save_path, &self.game_state) {
            warn!("save failed: {}", e);
            self.presenter
                .error(&format!("Falha ao salvar jogo: {}", e));
        }
    }
}
