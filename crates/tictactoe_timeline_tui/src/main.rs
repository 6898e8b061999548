//! Terminal front end for tictactoe_timeline.

#![warn(missing_docs)]

mod app;
mod cli;
mod input;
mod render;
mod settings;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tictactoe_timeline::{SortOrder, Timeline};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::{Cli, Command};
use settings::Settings;
use terminal::TerminalGuard;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, log_file } => run_play(&config, log_file),
        Command::Replay {
            moves,
            jump,
            sort,
            config,
        } => run_replay(&config, &moves, jump, sort.map(SortOrder::from)),
    }
}

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Runs the interactive game until the user quits.
fn run_play(config: &Path, log_file: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load_or_default(config)?;

    // The terminal belongs to the UI, so logs go to a file.
    let log_path = log_file.unwrap_or_else(|| settings.log_file().clone());
    let file = std::fs::File::create(&log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&settings))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    info!(log = %log_path.display(), sort_order = %settings.sort_order(), "Starting tictactoe_timeline");

    // Dropped on every exit path below, including panics.
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(Timeline::with_sort_order(*settings.sort_order()));
    let res = run_app(&mut terminal, app);

    if let Err(err) = &res {
        tracing::error!(error = %err, "UI loop failed");
    }
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    while !*app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(command) = input::command_for(key.code, *app.focus()) {
                app.handle(command);
            }
        }
    }
    info!(moves = app.timeline().len() - 1, "Exiting");
    Ok(())
}

/// Applies `moves` non-interactively and prints the resulting transcript.
fn run_replay(
    config: &Path,
    moves: &[usize],
    jump: Option<usize>,
    sort: Option<SortOrder>,
) -> Result<()> {
    let settings = Settings::load_or_default(config)?;
    let settings = match sort {
        Some(order) => settings.with_sort_order(order),
        None => settings,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&settings))
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    let timeline = app::replay_lenient(moves, jump, *settings.sort_order())
        .context("Replay failed")?;

    println!("{}", render::transcript(&timeline));
    Ok(())
}
