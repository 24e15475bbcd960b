//! Guided breathing TUI
//!
//! A terminal user interface that paces inhale, hold and exhale phases
//! with a growing and shrinking circle.
//! Run with: breathtui [--pattern <NAME>] [--pace <BPM>] [--duration <MIN>]

mod app;
mod cli;
mod constants;
mod engine;
mod error;
mod event;
mod logging;
mod pattern;
mod scheduler;
mod session;
mod settings;
mod ui;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::app::App;
use crate::cli::Cli;
use crate::event::{Action, EventHandler};
use crate::scheduler::Scheduled;
use crate::settings::Settings;

/// Entry point for the application.
///
/// Parses the command line, optionally installs file logging and runs the
/// UI until the user quits.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_patterns {
        print_patterns();
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        logging::init(path)?;
    }

    // Resolve settings before taking over the terminal so errors stay readable
    let settings = Settings::from_cli(&cli)?;
    let mut app = App::new(settings);
    info!(
        pattern = app.settings.pattern().name,
        pace = app.settings.pace,
        minutes = app.settings.session_minutes,
        "starting"
    );

    // Initialize the terminal
    let terminal = ratatui::init();

    if cli.start {
        app.start_session();
    }

    // Run the application
    let result = run_app(terminal, app).await;

    // Restore the terminal to its original state
    ratatui::restore();

    result
}

/// What woke the main loop.
enum Step {
    Input(Option<Action>),
    Timer(Scheduled),
}

/// Main application loop.
///
/// This function runs the TUI event loop:
/// 1. Draw the current UI state
/// 2. Wait for either a key press or a session timer
/// 3. Update application state
/// 4. Repeat until the user quits
async fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    let mut events = EventHandler::new();

    loop {
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        if app.take_bell() {
            ring_bell().context("Failed to ring terminal bell")?;
        }

        let input_mode = app.is_editing();
        let step = tokio::select! {
            action = events.next(input_mode) => Step::Input(action.context("Failed to read terminal event")?),
            scheduled = app.scheduler.next() => Step::Timer(scheduled),
        };

        match step {
            Step::Input(Some(action)) => {
                if app.handle_event(action) {
                    break;
                }
            }
            Step::Input(None) => {}
            Step::Timer(Scheduled::Tick(elapsed)) => app.on_tick(elapsed),
            Step::Timer(Scheduled::SessionEnd) => app.on_session_end(),
        }
    }

    app.stop_session();
    Ok(())
}

/// Sounds the terminal bell.
fn ring_bell() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()
}

/// Prints the built-in pattern table for `--list-patterns`.
fn print_patterns() {
    print!("{}", pattern_listing());
}

/// Renders the pattern table, one row per pattern under a header row.
fn pattern_listing() -> String {
    let mut out = format!("{:<18} {:<8} {:<22} TIMING\n", "PATTERN", "RATIO", "PHASES");
    for entry in pattern::patterns() {
        let phases = entry
            .labels
            .iter()
            .map(|kind| kind.key())
            .collect::<Vec<_>>()
            .join(" > ");
        let timing = if entry.uses_pace {
            "follows pace"
        } else {
            "fixed seconds"
        };
        let marker = if entry.name == pattern::DEFAULT_PATTERN {
            " (default)"
        } else {
            ""
        };
        out.push_str(&format!(
            "{:<18} {:<8} {:<22} {timing}{marker}\n",
            entry.name,
            entry.ratio(),
            phases
        ));
    }
    out
}
