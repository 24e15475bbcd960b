//! Breathing circle rendering.
//!
//! The circle is drawn on a braille canvas. Its radius follows the session's
//! scale factor and a progress arc in the phase color sweeps from twelve
//! o'clock as the phase advances.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    symbols::{self, Marker},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};

use crate::app::App;
use crate::constants::circle::{ARC_SEGMENTS, BOUND, PADDING};
use crate::engine;
use crate::session::BreathFrame;

use super::colors;

/// Draws the breathing circle, arc and phase label.
pub fn draw_breathing_canvas(frame: &mut Frame, area: Rect, app: &App) {
    let title_color = app
        .session
        .frame()
        .map_or(colors::PRIMARY, |f| f.snapshot.phase.color());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("◯", Style::default().fg(title_color)),
            Span::styled(" Breathe ", Style::default().fg(title_color).bold()),
        ]));

    let inner = block.inner(area);
    let (x_bounds, y_bounds) = canvas_bounds(inner);
    let cell_width = (x_bounds[1] - x_bounds[0]) / f64::from(inner.width.max(1));
    let cell_height = (y_bounds[1] - y_bounds[0]) / f64::from(inner.height.max(1));

    let radius = (BOUND - PADDING) * app.session.scale();
    let breath = app.session.frame().copied();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius,
                color: colors::RING,
            });

            match breath {
                Some(breath) => paint_phase(ctx, &breath, radius, cell_width, cell_height),
                None => print_centered(ctx, 0.0, cell_width, "Ready", colors::PRIMARY),
            }
        });

    frame.render_widget(canvas, area);
}

fn paint_phase(ctx: &mut Context, breath: &BreathFrame, radius: f64, cell_width: f64, cell_height: f64) {
    let color = breath.snapshot.phase.color();
    let extent = engine::arc_extent(breath.snapshot.fraction);
    let points = arc_points(radius, extent);
    for pair in points.windows(2) {
        ctx.draw(&CanvasLine::new(pair[0].0, pair[0].1, pair[1].0, pair[1].1, color));
    }

    // Text is drawn on a layer above the shapes
    ctx.layer();
    print_centered(
        ctx,
        cell_height / 2.0,
        cell_width,
        breath.snapshot.phase.label(),
        color,
    );
    print_centered(
        ctx,
        -cell_height / 2.0,
        cell_width,
        &format!("{:.1}s", breath.snapshot.remaining_secs),
        colors::SELECTION_TEXT,
    );
}

fn print_centered(ctx: &mut Context, y: f64, cell_width: f64, text: &str, color: ratatui::style::Color) {
    let width = text.chars().count() as f64 * cell_width;
    ctx.print(
        -width / 2.0,
        y,
        Line::from(Span::styled(text.to_string(), Style::default().fg(color).bold())),
    );
}

/// Canvas bounds for `area` that keep the circle round.
///
/// Terminal cells are roughly twice as tall as they are wide, so the axis
/// with more room gets its bounds stretched.
pub(crate) fn canvas_bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    let width = f64::from(area.width.max(1));
    let height = f64::from(area.height.max(1)) * 2.0;
    if width >= height {
        let x = BOUND * width / height;
        ([-x, x], [-BOUND, BOUND])
    } else {
        let y = BOUND * height / width;
        ([-BOUND, BOUND], [-y, y])
    }
}

/// Points along an arc of `radius`, starting at twelve o'clock and sweeping
/// counter-clockwise by `extent` degrees.
pub(crate) fn arc_points(radius: f64, extent: f64) -> Vec<(f64, f64)> {
    if extent <= 0.0 {
        return Vec::new();
    }
    let segments = ((extent / 360.0) * ARC_SEGMENTS as f64).ceil().max(1.0) as usize;
    (0..=segments)
        .map(|i| {
            let angle = (90.0 + extent * i as f64 / segments as f64).to_radians();
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_bounds_keep_aspect() {
        // 80 columns by 20 rows is 80 by 40 in square units
        let (x, y) = canvas_bounds(Rect::new(0, 0, 80, 20));
        assert_eq!(y, [-BOUND, BOUND]);
        assert!((x[1] - 2.0 * BOUND).abs() < 1e-9);

        let (x, y) = canvas_bounds(Rect::new(0, 0, 20, 40));
        assert_eq!(x, [-BOUND, BOUND]);
        assert!((y[1] - 4.0 * BOUND).abs() < 1e-9);
    }

    #[test]
    fn test_arc_starts_at_top() {
        let points = arc_points(1.0, 90.0);
        let (x, y) = points[0];
        assert!(x.abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);

        // A quarter turn counter-clockwise ends at nine o'clock
        let (x, y) = points[points.len() - 1];
        assert!((x + 1.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn test_arc_stays_on_radius() {
        for (x, y) in arc_points(0.6, 359.99) {
            assert!(((x * x + y * y).sqrt() - 0.6).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_arc_has_no_points() {
        assert!(arc_points(1.0, 0.0).is_empty());
        assert!(arc_points(1.0, 0.5).len() >= 2);
    }
}
