//! Help overlay rendering.

use ratatui::{
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::dialog;

use super::colors;
use super::utils::centered_rect;

/// Draws a help overlay popup.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(dialog::HELP_WIDTH, dialog::HELP_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let help_text = get_help_text();

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::PRIMARY))
                .border_set(symbols::border::DOUBLE)
                .title(Line::from(vec![
                    Span::styled(" ", Style::default()),
                    Span::styled(" Help ", Style::default().fg(Color::White).bold()),
                    Span::styled(
                        "- Press any key to close ",
                        Style::default().fg(colors::MUTED),
                    ),
                ]))
                .style(Style::default()),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
}

/// One key binding line: padded key column and description.
fn binding(keys: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("    ", Style::default()),
        Span::styled(format!("{keys:<12}"), Style::default().fg(colors::KEY).bold()),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

fn section(title: &'static str) -> Line<'static> {
    let section_style = Style::default().fg(colors::PRIMARY).bold();
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled("◆", Style::default().fg(colors::ACCENT)),
        Span::styled(format!(" {title}"), section_style),
    ])
}

/// Returns the help text content.
fn get_help_text() -> Text<'static> {
    Text::from(vec![
        Line::from(""),
        section("SESSION"),
        Line::from(""),
        binding("Space/Enter", "Start or stop breathing"),
        binding("r", "Stop and reset all settings"),
        Line::from(""),
        section("PATTERN"),
        Line::from(""),
        binding("Tab  or l", "Next pattern"),
        binding("S-Tab or h", "Previous pattern"),
        binding("1-4", "Pick a pattern directly"),
        Line::from(""),
        section("SETTINGS"),
        Line::from(""),
        binding("k  or Up", "Faster pace (+0.5 bpm)"),
        binding("j  or Down", "Slower pace (-0.5 bpm)"),
        binding("]  or +", "Longer session (+0.5 min)"),
        binding("[  or -", "Shorter session (-0.5 min)"),
        binding("p", "Type a pace value"),
        binding("d", "Type a session length"),
        Line::from(Span::styled(
            "    Pace only applies to patterns without fixed timing.",
            Style::default().fg(colors::MUTED),
        )),
        Line::from(""),
        section("GENERAL"),
        Line::from(""),
        binding("?  or F1", "Show this help"),
        binding("q  or C-c", "Quit application"),
        Line::from(""),
    ])
}
