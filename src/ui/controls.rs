//! Controls panel: pattern list, sliders and session clock.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

use crate::app::App;
use crate::pattern;
use crate::settings::{self, PACE_RANGE, SESSION_RANGE};

use super::colors;
use super::utils::format_clock;

/// Draws the controls column.
pub fn draw_controls(frame: &mut Frame, area: Rect, app: &App) {
    let pattern_rows = pattern::patterns().len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(pattern_rows), // Pattern list
            Constraint::Length(3),            // Pace slider
            Constraint::Length(3),            // Duration slider
            Constraint::Min(0),               // Session clock
        ])
        .split(area);

    draw_pattern_list(frame, chunks[0], app);
    draw_pace_slider(frame, chunks[1], app);
    draw_session_slider(frame, chunks[2], app);
    draw_session_clock(frame, chunks[3], app);
}

fn panel(title: &str, title_color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(title, Style::default().fg(title_color).bold()),
            Span::styled(" ", Style::default()),
        ]))
}

/// Draws the list of breathing patterns.
fn draw_pattern_list(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.settings.pattern_index();

    let items: Vec<ListItem> = pattern::patterns()
        .iter()
        .enumerate()
        .map(|(idx, pattern)| {
            let is_selected = idx == selected;

            let style = if is_selected {
                Style::default()
                    .bg(colors::SELECTION)
                    .fg(colors::SELECTION_TEXT)
            } else {
                Style::default()
            };

            let content = Line::from(vec![
                Span::styled(format!("{}", idx + 1), Style::default().fg(colors::ACCENT)),
                Span::styled(" ", style),
                Span::styled(
                    if is_selected { "▸" } else { " " },
                    style.fg(colors::WARNING),
                ),
                Span::styled(" ", style),
                Span::styled(pattern.name, style.add_modifier(Modifier::BOLD)),
                Span::styled("  ", style),
                Span::styled(
                    pattern.ratio(),
                    style.fg(if is_selected {
                        colors::SELECTION_TEXT
                    } else {
                        colors::MUTED
                    }),
                ),
            ]);

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(panel("Pattern", colors::PRIMARY).padding(Padding::horizontal(1)))
        .highlight_style(Style::default()) // We handle highlighting in items
        .highlight_symbol("");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draws the pace slider, dimmed when the pattern has fixed timing.
fn draw_pace_slider(frame: &mut Frame, area: Rect, app: &App) {
    let enabled = app.settings.pace_enabled();
    let (title, title_color, filled) = if enabled {
        ("Breath Pace", colors::PRIMARY, colors::SECONDARY)
    } else {
        ("Breath Pace (fixed timing)", colors::DISABLED, colors::DISABLED)
    };

    let label_color = if enabled { Color::White } else { colors::DISABLED };
    let gauge = LineGauge::default()
        .block(panel(title, title_color))
        .filled_style(Style::default().fg(filled))
        .unfilled_style(Style::default().fg(colors::DISABLED))
        .line_set(symbols::line::THICK)
        .ratio(PACE_RANGE.fraction(app.settings.pace))
        .label(Span::styled(
            format!("{:>9} ", settings::format_pace(app.settings.pace)),
            Style::default().fg(label_color),
        ));

    frame.render_widget(gauge, area);
}

/// Draws the session length slider.
fn draw_session_slider(frame: &mut Frame, area: Rect, app: &App) {
    let gauge = LineGauge::default()
        .block(panel("Duration", colors::PRIMARY))
        .filled_style(Style::default().fg(colors::ACCENT))
        .unfilled_style(Style::default().fg(colors::DISABLED))
        .line_set(symbols::line::THICK)
        .ratio(SESSION_RANGE.fraction(app.settings.session_minutes))
        .label(Span::styled(
            format!("{:>9} ", settings::format_minutes(app.settings.session_minutes)),
            Style::default().fg(Color::White),
        ));

    frame.render_widget(gauge, area);
}

/// Draws elapsed and remaining session time.
fn draw_session_clock(frame: &mut Frame, area: Rect, app: &App) {
    let label_style = Style::default().fg(colors::MUTED);
    let value_style = Style::default().fg(Color::White).bold();

    let content = if app.session.is_running() {
        let phase = app
            .session
            .frame()
            .map_or(app.session.state().current_phase, |f| f.snapshot.phase);
        let step = app.session.frame().map_or(1, |f| f.snapshot.index + 1);
        let steps = app.settings.pattern().phases.len();
        vec![
            Line::from(vec![
                Span::styled("Phase      ", label_style),
                Span::styled(phase.label(), Style::default().fg(phase.color()).bold()),
                Span::styled(format!(" ({step}/{steps})"), label_style),
            ]),
            Line::from(vec![
                Span::styled("Elapsed    ", label_style),
                Span::styled(format_clock(app.session.elapsed()), value_style),
            ]),
            Line::from(vec![
                Span::styled("Remaining  ", label_style),
                Span::styled(format_clock(app.session.remaining()), value_style),
            ]),
            Line::from(vec![
                Span::styled("Breaths    ", label_style),
                Span::styled(app.session.cycles().to_string(), value_style),
            ]),
        ]
    } else {
        vec![
            Line::from(Span::styled("No session running", label_style)),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", label_style),
                Span::styled("Space", Style::default().fg(colors::KEY).bold()),
                Span::styled(" to begin", label_style),
            ]),
        ]
    };

    let clock = Paragraph::new(content).block(panel("Session", colors::PRIMARY).padding(Padding::horizontal(1)));
    frame.render_widget(clock, area);
}
