//! diffbro - compare two pieces of text side by side

mod app;
mod cli;
mod config;
mod print;
mod storage;
mod views;

use anyhow::{bail, Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use config::Config;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::execute;
use diffbro_core::DiffEngine;
use ratatui::DefaultTerminal;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use storage::{SlotStore, Slots};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(view) = cli.view {
        config.view = view;
    }
    if cli.no_char_diff {
        config.char_diff = false;
    }

    if cli.is_batch() {
        run_batch(&cli, &config)
    } else {
        run_interactive(&cli, &config)
    }
}

fn log_file_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("diffbro").join("diffbro.log"))
}

/// Logs go to stderr in batch mode and to a file while the TUI owns the screen
fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if cli.is_batch() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    let file = log_file_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });
    match file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init(),
    }
}

fn run_batch(cli: &Cli, config: &Config) -> Result<()> {
    let (Some(old), Some(new)) = (&cli.old, &cli.new) else {
        bail!("Printing a comparison needs both OLD and NEW files");
    };

    let engine = DiffEngine::new().with_max_input_bytes(config.input_limit());
    let comparison = engine
        .compare_files(old, new)
        .with_context(|| format!("Failed to compare {} and {}", old.display(), new.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print::write_comparison(&mut out, &comparison, cli.format, cli.stats_only)
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn run_interactive(cli: &Cli, config: &Config) -> Result<()> {
    let store = config
        .storage_path
        .clone()
        .or_else(SlotStore::default_path)
        .map(SlotStore::new);

    let stored = store.as_ref().map(SlotStore::load).unwrap_or_default();
    let slots = Slots {
        text1: match &cli.old {
            Some(path) => read_text(path)?,
            None => stored.text1,
        },
        text2: match &cli.new {
            Some(path) => read_text(path)?,
            None => stored.text2,
        },
    };
    if let Some(store) = &store {
        tracing::info!(path = %store.path().display(), "using slot file");
    }

    let mut app = App::new(config, slots, store);

    let mut terminal = ratatui::try_init().context("Failed to initialize terminal")?;
    let result = execute!(std::io::stdout(), EnableBracketedPaste)
        .map_err(anyhow::Error::from)
        .and_then(|_| event_loop(&mut terminal, &mut app));
    let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| views::render(frame, app))?;
        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Paste(text) => app.handle_paste(&text),
            _ => {}
        }
    }
    Ok(())
}
