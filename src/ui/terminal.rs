use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::warn;

use crate::engine::protocol::GameEnd;
use crate::model::game_state::{GameState, MAX_HP};
use crate::ui::presenter::{hp_cells, Presenter, Tone};
use crate::ui::style::GameStyle;

/// Colored terminal output with a typewriter reveal.
///
/// A failed write abandons the rest of that output and is logged once.
pub struct TerminalPresenter<W: Write> {
    out: W,
    typing_delay: Duration,
    width: usize,
}

impl TerminalPresenter<io::Stdout> {
    pub fn new(typing_delay: Duration) -> Self {
        Self::with_writer(io::stdout(), typing_delay, textwrap::termwidth())
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn with_writer(out: W, typing_delay: Duration, width: usize) -> Self {
        Self {
            out,
            typing_delay,
            width,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn report(what: &str, result: io::Result<()>) {
        if let Err(e) = result {
            warn!("terminal write failed during {}: {}", what, e);
        }
    }

    fn write_reveal(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        let width = self.width.saturating_sub(2).max(20);

        for line in textwrap::wrap(text, width) {
            let line = match tone {
                Tone::Scene => format!("{:^width$}", line, width = width),
                Tone::Narration => line.into_owned(),
            };
            write!(self.out, " ")?;

            if self.typing_delay.is_zero() {
                writeln!(self.out, "{}", styled(&line, tone))?;
                continue;
            }

            for c in line.chars() {
                write!(self.out, "{}", styled(&c.to_string(), tone))?;
                self.out.flush()?;
                thread::sleep(self.typing_delay);
            }
            writeln!(self.out)?;
        }

        writeln!(self.out)?;
        self.out.flush()
    }

    fn write_status(&mut self, state: &GameState) -> io::Result<()> {
        let items = if state.inventory.is_empty() {
            "(vazio)".to_string()
        } else {
            state
                .inventory
                .iter()
                .map(|i| i.item_style().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(self.out, "Inventário: {}", items)?;

        let (full, empty) = hp_cells(state.hp);
        writeln!(
            self.out,
            "\nHP -> {}{}  [{}/{}]",
            "[X]".repeat(full as usize).hp_full_style(),
            "[ ]".repeat(empty as usize).hp_empty_style(),
            state.hp.to_string().hp_value_style(),
            MAX_HP
        )
    }
}

fn styled(text: &str, tone: Tone) -> colored::ColoredString {
    match tone {
        Tone::Scene => text.scene_style(),
        Tone::Narration => text.narration_style(),
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn clear(&mut self) {
        let result = write!(self.out, "\x1B[2J\x1B[H").and_then(|_| self.out.flush());
        Self::report("clear", result);
    }

    fn welcome(&mut self) {
        let result = writeln!(
            self.out,
            "{:^width$}\n",
            "Bem-vindo ao RPG!".title_style(),
            width = self.width
        );
        Self::report("welcome", result);
    }

    fn reveal(&mut self, text: &str, tone: Tone) {
        let result = self.write_reveal(text, tone);
        Self::report("reveal", result);
    }

    fn show_status(&mut self, state: &GameState) {
        let result = self.write_status(state);
        Self::report("status", result);
    }

    fn info(&mut self, message: &str) {
        let result = writeln!(
            self.out,
            "{:^width$}",
            format!("[INFO] {}", message).info_style(),
            width = self.width
        );
        Self::report("info", result);
    }

    fn error(&mut self, message: &str) {
        let result = writeln!(self.out, "{}", format!("[ERRO] {}", message).error_style());
        Self::report("error", result);
    }

    fn ask_action(&mut self) {
        let result = write!(self.out, "\n{} ", "> O que você faz?".prompt_style())
            .and_then(|_| self.out.flush());
        Self::report("prompt", result);
    }

    fn farewell(&mut self, end: GameEnd) {
        let mut result = Ok(());
        if end == GameEnd::Defeated {
            result = writeln!(self.out, "\n{}", "Você foi derrotado.".error_style());
        }
        let result = result.and_then(|_| {
            writeln!(
                self.out,
                "\n{:^width$}",
                "Fim do jogo!".error_style(),
                width = self.width
            )
        });
        Self::report("farewell", result);
    }
}
