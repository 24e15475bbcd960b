//! Dialog rendering (manual value entry).

use ratatui::{
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use crate::app::{App, EntryField};
use crate::constants::dialog;
use crate::settings::{PACE_RANGE, SESSION_RANGE};

use super::colors;
use super::utils::centered_rect;

/// Block cursor character for input fields.
pub(crate) const BLOCK_CURSOR: &str = "█";

/// Input field prompt indicator.
pub(crate) const INPUT_INDICATOR: &str = "› ";

/// Draws the text input dialog.
pub fn draw_input_dialog(frame: &mut Frame, field: EntryField, app: &App) {
    let (title, prompt) = match field {
        EntryField::Pace => (
            "Breath Pace",
            format!(
                "Breaths per minute ({} - {}, step {}):",
                PACE_RANGE.min, PACE_RANGE.max, PACE_RANGE.step
            ),
        ),
        EntryField::SessionLength => (
            "Session Duration",
            format!(
                "Minutes ({} - {}, step {}):",
                SESSION_RANGE.min, SESSION_RANGE.max, SESSION_RANGE.step
            ),
        ),
    };

    let area = centered_rect(dialog::INPUT_WIDTH, dialog::INPUT_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::PRIMARY))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(title, Style::default().fg(Color::White).bold()),
            Span::styled(" ", Style::default()),
        ]))
        .padding(Padding::uniform(1));

    let content = vec![
        Line::from(Span::styled(prompt, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {INPUT_INDICATOR}"),
                Style::default().fg(colors::MUTED),
            ),
            Span::styled(&app.input_buffer, Style::default().fg(Color::White)),
            Span::styled(
                BLOCK_CURSOR,
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled("Enter", Style::default().fg(colors::KEY).bold()),
            Span::styled(" submit  ", Style::default().fg(colors::MUTED)),
            Span::styled("Esc", Style::default().fg(colors::KEY).bold()),
            Span::styled(" cancel", Style::default().fg(colors::MUTED)),
        ]),
    ];

    let input_widget = Paragraph::new(content).block(block);

    frame.render_widget(input_widget, area);
}
