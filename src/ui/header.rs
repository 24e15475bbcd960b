//! Header rendering with ASCII art logo.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::pattern::PhaseKind;

use super::colors;

/// Columns between the info panel's side borders.
const INFO_PANEL_WIDTH: usize = 31;

/// Draws the header with ASCII art logo and session info.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = Style::default().fg(colors::BORDER);
    let dim_style = Style::default().fg(Color::Rgb(55, 65, 81));
    let muted_style = Style::default().fg(Color::Rgb(75, 85, 99));

    // The logo takes the color of the phase being breathed
    let phase = app
        .session
        .frame()
        .map_or(app.session.state().current_phase, |f| f.snapshot.phase);
    let logo_style = Style::default().fg(phase.color()).bold();

    // Status indicator
    let status = if app.session.is_running() {
        vec![
            Span::styled("┃", border_style),
            Span::styled(
                " ◉ ",
                Style::default()
                    .fg(phase.color())
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled("BREATHING", Style::default().fg(phase.color()).bold()),
            Span::styled(" ┃", border_style),
        ]
    } else {
        vec![
            Span::styled("┃", border_style),
            Span::styled(" ◈ ", Style::default().fg(colors::SUCCESS)),
            Span::styled("READY", Style::default().fg(colors::SUCCESS).bold()),
            Span::styled(" ┃", border_style),
        ]
    };

    let started = match app.started_at {
        Some(at) => format!("started {}", at.format("%H:%M")),
        None => "idle".to_string(),
    };

    // Top border with status indicator
    let mut line0 = vec![
        Span::styled("┏", Style::default().fg(colors::ACCENT)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("┓", Style::default().fg(colors::PRIMARY)),
        Span::styled("░▒▓", dim_style),
    ];
    line0.extend(status);
    line0.extend([
        Span::styled("▓▒░", dim_style),
        Span::styled("╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍", dim_style),
    ]);
    let line0 = Line::from(line0);

    // Logo line 1 + info panel top
    let line1 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled("    ▄▄████████▄▄       ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╭───────────────────────────────╮", border_style),
    ]);

    // Logo line 2 + BREATH::TUI title
    let line2 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled("  ▄██▀▀      ▀▀██▄     ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  │ ", border_style),
        Span::styled("◆", Style::default().fg(colors::ACCENT)),
        Span::styled(" BREATH", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled("::", muted_style),
        Span::styled("GUIDE", Style::default().fg(colors::KEY).bold()),
        Span::styled(" ▸▸ ", muted_style),
        Span::styled("TUI", Style::default().fg(colors::ACCENT).bold()),
        Span::styled(" ◆      │", border_style),
    ]);

    // Logo line 3 + one color swatch per phase
    let mut line3 = vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled("  ▀██▄▄      ▄▄██▀     ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  │", border_style),
    ];
    line3.extend(phase_tags());
    let line3 = Line::from(line3);

    // Logo line 4 + info panel bottom
    let line4 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled("    ▀▀████████▀▀       ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╰───────────────────────────────╯", border_style),
    ]);

    // Bottom border + pattern info
    let line5 = Line::from(vec![
        Span::styled("┗", Style::default().fg(colors::ACCENT)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("┛", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╾╢", border_style),
        Span::styled(" ⬢  ", Style::default().fg(colors::SECONDARY)),
        Span::styled(
            app.settings.pattern().name,
            Style::default().fg(colors::SECONDARY).bold(),
        ),
        Span::styled(format!(" · {started}"), Style::default().fg(colors::MUTED)),
        Span::styled(" ╟╼", border_style),
    ]);

    let header = Paragraph::new(vec![line0, line1, line2, line3, line4, line5]);
    frame.render_widget(header, area);
}

/// Phase legend inside the info panel, padded to the panel's right edge.
fn phase_tags() -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut used = 0;
    for kind in [PhaseKind::Inhale, PhaseKind::Hold, PhaseKind::Exhale] {
        let label = format!(" {}", kind.label().to_uppercase());
        used += 2 + label.chars().count();
        spans.push(Span::styled(" ▪", Style::default().fg(kind.color())));
        spans.push(Span::styled(label, Style::default().fg(colors::MUTED)));
    }
    let padding = INFO_PANEL_WIDTH.saturating_sub(used);
    spans.push(Span::styled(
        format!("{}│", " ".repeat(padding)),
        Style::default().fg(colors::BORDER),
    ));
    spans
}
