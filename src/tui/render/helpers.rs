use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;

use crate::util::unicode;

/// Create a centered rectangle of the given percentage of the parent
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
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

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// One-row rect at `row` inside `area`, or None if the row is outside it
pub(super) fn row_rect(area: Rect, row: usize) -> Option<Rect> {
    let row = u16::try_from(row).ok()?;
    if row >= area.height {
        return None;
    }
    Some(Rect::new(area.x, area.y + row, area.width, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let r = centered_rect(80, 50, parent);
        assert_eq!(r.width, 80);
        assert_eq!(r.height, 20);
        assert_eq!(r.x, 10);
        assert_eq!(r.y, 10);
    }

    #[test]
    fn row_rect_clips() {
        let area = Rect::new(5, 5, 10, 3);
        assert_eq!(row_rect(area, 0), Some(Rect::new(5, 5, 10, 1)));
        assert_eq!(row_rect(area, 2), Some(Rect::new(5, 7, 10, 1)));
        assert_eq!(row_rect(area, 3), None);
    }

    #[test]
    fn spans_width_sums_cells() {
        let spans = vec![Span::raw("ab"), Span::raw("日")];
        assert_eq!(spans_width(&spans), 4);
    }
}
