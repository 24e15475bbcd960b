//! Status bar and commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, View};

use super::colors;

/// Draws the commands bar showing available actions for current view.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App) {
    let commands = get_commands_for_view(&app.current_view, app.session.is_running());

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns the list of commands available for a given view.
fn get_commands_for_view(view: &View, running: bool) -> Vec<(&'static str, &'static str)> {
    match view {
        View::Session => vec![
            ("Space", if running { "stop" } else { "start" }),
            ("Tab", "pattern"),
            ("j/k", "pace"),
            ("[/]", "duration"),
            ("p/d", "type value"),
            ("r", "reset"),
            ("?", "help"),
            ("q", "quit"),
        ],
        View::Input(_) => vec![("Enter", "submit"), ("Esc", "cancel")],
    }
}

/// Draws the status bar at the bottom (for messages).
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(colors::ERROR)
        } else {
            Style::default().fg(colors::SUCCESS)
        };
        (format!(" {} ", status.text), style)
    } else {
        (" Ready".to_string(), Style::default().fg(colors::MUTED))
    };

    let status = Paragraph::new(text).style(style);
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::EntryField;

    #[test]
    fn test_start_stop_label_follows_session() {
        let idle = get_commands_for_view(&View::Session, false);
        assert_eq!(idle[0], ("Space", "start"));
        let running = get_commands_for_view(&View::Session, true);
        assert_eq!(running[0], ("Space", "stop"));
    }

    #[test]
    fn test_input_view_commands() {
        let commands = get_commands_for_view(&View::Input(EntryField::Pace), false);
        assert_eq!(commands, vec![("Enter", "submit"), ("Esc", "cancel")]);
    }
}
