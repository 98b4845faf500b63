mod helpers;
pub mod help_overlay;
pub mod lightbox_view;
pub mod page_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function: host page, then overlays on top
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.hits.clear();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | page | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // site header + separator
            Constraint::Min(1),    // project cards / contact
            Constraint::Length(1), // status row
        ])
        .split(area);

    page_view::render_header(frame, app, chunks[0]);
    page_view::render_page(frame, app, chunks[1]);

    // Lightbox modal over the page
    if app.lightbox.host().modal_visible {
        lightbox_view::render_lightbox(frame, app, chunks[1]);
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
