use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::spans_width;

const PAGE_HINT: &str = "\u{23CE} open  1-9 jump  c contact  t theme  ? help  q quit";
const LIGHTBOX_HINT: &str = "\u{2190}/\u{2192} prev/next  j/k scroll  1-9 media  c contact  esc close";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let host = app.lightbox.host();

    let mut spans = Vec::new();
    if let Some(notice) = &host.notice {
        spans.push(Span::styled(
            format!(" {}", unicode::truncate_to_width(notice, width.saturating_sub(2))),
            Style::default().fg(app.theme.yellow).bg(bg),
        ));
    }

    let hint = if host.modal_visible {
        LIGHTBOX_HINT
    } else {
        PAGE_HINT
    };
    let content_width = spans_width(&spans);
    let hint_width = unicode::display_width(hint) + 1;
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lightbox::LightboxHost;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_hint() {
        let app = sample_app();
        let out = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(out.trim_start(), PAGE_HINT);
        assert!(out.starts_with("    "));
    }

    #[test]
    fn notice_with_lightbox_hint() {
        let mut app = sample_app();
        app.open_index(0);
        app.lightbox.host_mut().show_notice("Coming soon");
        let out = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(out.starts_with(" Coming soon"));
        assert!(out.ends_with("esc close"));
    }
}
