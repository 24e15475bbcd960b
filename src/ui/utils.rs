//! Layout and formatting helpers shared by the renderers.

use std::time::Duration;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Returns a rectangle centered in `area`, sized as a percentage of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Formats a duration as MM:SS, rounding partial seconds up.
pub fn format_clock(duration: Duration) -> String {
    let secs = duration.as_secs() + u64::from(duration.subsec_nanos() > 0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(50, 50, area);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 25);
        assert_eq!(popup.x, 25);
        assert!(popup.y > 0);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::ZERO), "00:00");
        assert_eq!(format_clock(Duration::from_secs(300)), "05:00");
        assert_eq!(format_clock(Duration::from_millis(59_001)), "01:00");
        assert_eq!(format_clock(Duration::from_secs(3600)), "60:00");
    }
}
