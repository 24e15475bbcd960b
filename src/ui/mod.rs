//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each part of the screen is rendered by a separate submodule for clarity.

mod breath;
mod colors;
mod controls;
mod dialogs;
mod header;
mod help;
mod status;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, View};
use crate::constants::layout;

use breath::draw_breathing_canvas;
use controls::draw_controls;
use dialogs::draw_input_dialog;
use header::draw_header;
use help::draw_help_overlay;
use status::{draw_commands_bar, draw_status_bar};

/// Main draw function - lays out the screen and dispatches to renderers.
pub fn draw(frame: &mut Frame, app: &App) {
    // Create the main layout: header, content, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Min(0), // Main content
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    // Breathing canvas on the left, controls on the right
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(layout::CONTROLS_WIDTH),
        ])
        .split(chunks[1]);

    draw_breathing_canvas(frame, body[0], app);
    draw_controls(frame, body[1], app);

    // Draw the input dialog on top of the session view
    if let View::Input(field) = app.current_view {
        draw_input_dialog(frame, field, app);
    }

    // Draw the commands bar (shows available actions)
    draw_commands_bar(frame, chunks[2], app);

    // Draw the status bar (shows messages)
    draw_status_bar(frame, chunks[3], app);

    // Draw help overlay if enabled
    if app.show_help {
        draw_help_overlay(frame);
    }
}
