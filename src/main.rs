use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use narrative_rpg::engine::engine::Engine;
use narrative_rpg::engine::llm_client::OllamaClient;
use narrative_rpg::ui::settings_io::{load_settings, save_settings, settings_path};
use narrative_rpg::ui::terminal::TerminalPresenter;

#[derive(Parser)]
#[command(name = "narrative_rpg", about = "A terminal RPG narrated by a local language model", version)]
struct Cli {
    /// Save file to load from and write to
    #[arg(long)]
    save_file: Option<PathBuf>,

    /// Base URL of the Ollama server
    #[arg(long)]
    endpoint: Option<String>,

    /// Model used for narration
    #[arg(long)]
    model: Option<String>,

    /// Milliseconds between revealed characters (0 disables the effect)
    #[arg(long)]
    typing_delay_ms: Option<u64>,

    /// Check that the model server answers, then exit
    #[arg(long)]
    check_connection: bool,

    /// Store the effective settings in the config directory
    #[arg(long)]
    write_settings: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = settings_path();
    let mut settings = load_settings(&config_path);
    if let Some(save_file) = cli.save_file {
        settings.save_file = save_file;
    }
    if let Some(endpoint) = cli.endpoint {
        settings.endpoint = endpoint;
    }
    if let Some(model) = cli.model {
        settings.model = model;
    }
    if let Some(delay) = cli.typing_delay_ms {
        settings.typing_delay_ms = delay;
    }

    if cli.write_settings {
        save_settings(&config_path, &settings)?;
        println!("Settings written to {}", config_path.display());
    }

    let client = OllamaClient::new(&settings.endpoint)
        .context("while building the model server client")?;

    if cli.check_connection {
        let status = client
            .check_connection()
            .with_context(|| format!("while contacting {}", settings.endpoint))?;
        println!("{status}");
        return Ok(());
    }

    info!(
        "starting with model {} at {}, save file {}",
        settings.model,
        client.endpoint(),
        settings.save_file.display()
    );

    let presenter = TerminalPresenter::new(settings.typing_delay());
    let mut engine = Engine::new(
        client,
        presenter,
        &settings.save_file,
        settings.model.clone(),
        settings.sampling.clone(),
    );

    engine.start();
    engine.run(io::stdin().lock())?;

    Ok(())
}
