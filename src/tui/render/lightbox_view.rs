use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::lightbox::{DetailView, IMAGE_PLACEHOLDER, MediaView, Pagination, VideoLink};
use crate::tui::app::App;
use crate::tui::host::TerminalHost;
use crate::tui::theme::Theme;
use crate::tui::wrap::wrap_text;
use crate::util::unicode;

use super::helpers::{centered_rect, row_rect};

const PREV_LABEL: &str = " \u{2039} prev ";
const NEXT_LABEL: &str = " next \u{203A} ";
const CLOSE_LABEL: &str = " \u{2715} close ";

/// Styled lines for a mounted view, with the rows that are clickable
pub struct DetailLines {
    pub lines: Vec<Line<'static>>,
    /// (line index, media index) for each media card's first row
    pub media_rows: Vec<(usize, usize)>,
    pub cta_row: usize,
}

/// Render the lightbox modal over `area`
pub fn render_lightbox(frame: &mut Frame, app: &mut App, area: Rect) {
    let modal = centered_rect(80, 90, area);
    app.hits.modal = Some(modal);
    frame.render_widget(Clear, modal);

    let theme = app.theme.clone();
    let bg = theme.surface;
    let host = app.lightbox.host();
    let showing = host.content.as_ref().filter(|_| !host.loading);

    let title = showing.map_or("Loading\u{2026}", |v| v.title.as_str());
    let title_w = usize::from(modal.width).saturating_sub(14);
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight).bg(bg))
        .style(Style::default().bg(bg))
        .title(Line::from(Span::styled(
            format!(" {} ", unicode::truncate_to_width(title, title_w)),
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )));
    let pagination = host.pagination;
    if let Some(p) = pagination {
        block = block.title(
            Line::from(Span::styled(
                format!(" {}/{} ", p.position, p.total),
                Style::default().fg(theme.dim).bg(bg),
            ))
            .right_aligned(),
        );
    }
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    let content = chunks[0];

    match showing {
        None => {
            let mid = content.height / 2;
            let loading = Paragraph::new(Line::from(Span::styled(
                "Loading\u{2026}",
                Style::default().fg(theme.dim).bg(bg),
            )))
            .alignment(Alignment::Center);
            if let Some(rect) = row_rect(content, usize::from(mid)) {
                frame.render_widget(loading, rect);
            }
        }
        Some(view) => {
            let detail = detail_lines(view, host, &theme, usize::from(content.width));
            let height = usize::from(content.height);
            let max_scroll = detail.lines.len().saturating_sub(height);
            let scroll = host.content_scroll.min(max_scroll);

            let visible: Vec<Line> = detail.lines.into_iter().skip(scroll).take(height).collect();
            frame.render_widget(
                Paragraph::new(visible).style(Style::default().bg(bg)),
                content,
            );

            for (row, index) in detail.media_rows {
                if let Some(rect) = row.checked_sub(scroll).and_then(|r| row_rect(content, r)) {
                    app.hits.media.push((rect, index));
                }
            }
            app.hits.call_to_action = detail
                .cta_row
                .checked_sub(scroll)
                .and_then(|r| row_rect(content, r));

            // Clamp so the next scroll key acts from what is on screen
            app.lightbox.host_mut().content_scroll = scroll;
            if max_scroll > scroll {
                let more = Paragraph::new(Span::styled(
                    "\u{2193} more",
                    Style::default().fg(theme.dim).bg(bg),
                ))
                .alignment(Alignment::Right);
                if let Some(rect) = row_rect(content, height.saturating_sub(1)) {
                    frame.render_widget(more, rect);
                }
            }
        }
    }

    render_footer(frame, app, &theme, chunks[1], pagination);
}

fn render_footer(
    frame: &mut Frame,
    app: &mut App,
    theme: &Theme,
    area: Rect,
    pagination: Option<Pagination>,
) {
    let bg = theme.surface;
    let enabled = Style::default().fg(theme.text_bright).bg(bg);
    let disabled = Style::default().fg(theme.dim).bg(bg);
    let (prev_on, next_on) = pagination.map_or((false, false), |p| (p.prev_enabled, p.next_enabled));

    let prev_w = unicode::display_width(PREV_LABEL) as u16;
    let next_w = unicode::display_width(NEXT_LABEL) as u16;
    let close_w = unicode::display_width(CLOSE_LABEL) as u16;
    // Squeezed below the buffer on very short terminals
    if area.height == 0 || !frame.area().intersects(area) {
        return;
    }
    if area.width < prev_w + next_w + close_w {
        return;
    }

    let prev = Rect::new(area.x, area.y, prev_w, 1);
    let next = Rect::new(area.x + area.width - next_w, area.y, next_w, 1);
    let close = Rect::new(area.x + (area.width - close_w) / 2, area.y, close_w, 1);

    frame.render_widget(
        Paragraph::new(Span::styled(PREV_LABEL, if prev_on { enabled } else { disabled })),
        prev,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            CLOSE_LABEL,
            Style::default().fg(theme.red).bg(bg),
        )),
        close,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(NEXT_LABEL, if next_on { enabled } else { disabled })),
        next,
    );

    app.hits.prev = Some(prev);
    app.hits.next = Some(next);
    app.hits.close = Some(close);
}

/// Lay out a detail view as styled lines `width` cells wide
pub fn detail_lines(
    view: &DetailView,
    host: &TerminalHost,
    theme: &Theme,
    width: usize,
) -> DetailLines {
    let bg = theme.surface;
    let text = Style::default().fg(theme.text).bg(bg);
    let dim = Style::default().fg(theme.dim).bg(bg);
    let bright = Style::default()
        .fg(theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let heading = Style::default()
        .fg(theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let body_w = width.saturating_sub(2).max(1);

    let mut lines: Vec<Line<'static>> = vec![Line::from("")];
    let mut media_rows = Vec::new();

    if let Some(tags) = &view.tags {
        let mut spans = vec![Span::styled(" ", text)];
        for (i, tag) in tags.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", text));
            }
            spans.push(Span::styled(
                format!("#{}", tag),
                Style::default().fg(theme.tag_color(i)).bg(bg),
            ));
        }
        lines.push(Line::from(spans));
    }
    push_wrapped(&mut lines, &view.title, " ", body_w, bright);
    push_wrapped(&mut lines, &view.description, " ", body_w, text);

    if let Some(stats) = &view.stats {
        lines.push(Line::from(""));
        let value_w = stats
            .iter()
            .map(|s| unicode::display_width(&s.value))
            .max()
            .unwrap_or(0);
        for stat in stats {
            let pad = unicode::fill_width(&stat.value, value_w);
            lines.push(Line::from(vec![
                Span::styled(" ", text),
                Span::styled(format!("{}{}", stat.value, " ".repeat(pad)), heading),
                Span::styled("  ", text),
                Span::styled(stat.label.clone(), dim),
            ]));
        }
    }

    if let Some(narrative) = &view.narrative {
        for block in narrative {
            section(&mut lines, block.heading, heading);
            push_wrapped(&mut lines, &block.body, " ", body_w, text);
        }
    }

    if let Some(tech) = &view.tech_stack {
        section(&mut lines, "Tech Stack", heading);
        let mut spans = vec![Span::styled(" ", text)];
        for (i, item) in tech.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", text));
            }
            spans.push(Span::styled("\u{25C6} ", Style::default().fg(theme.tag_color(i)).bg(bg)));
            spans.push(Span::styled(item.name.clone(), text));
            if !item.icon.is_empty() {
                spans.push(Span::styled(format!(" ({})", item.icon), dim));
            }
        }
        lines.push(Line::from(spans));
    }

    if let Some(workflow) = &view.workflow {
        section(&mut lines, "Workflow", heading);
        for step in workflow {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:>2}. ", step.step), heading),
                Span::styled(step.title.clone(), bright),
            ]));
            push_wrapped(&mut lines, &step.description, "     ", body_w.saturating_sub(4), dim);
        }
    }

    if let Some(media) = &view.media {
        section(&mut lines, "Media", heading);
        for (index, item) in media.iter().enumerate() {
            let key = if index < 9 {
                format!(" [{}] ", index + 1)
            } else {
                "     ".to_string()
            };
            media_rows.push((lines.len(), index));
            match item {
                MediaView::Image { src, alt, caption } => {
                    let label = if caption.is_empty() { alt } else { caption };
                    if host.asset_missing(src) {
                        lines.push(Line::from(vec![
                            Span::styled(key, heading),
                            Span::styled("\u{25A8} ", dim),
                            Span::styled(IMAGE_PLACEHOLDER, dim),
                            Span::styled(format!("  {}", label), dim),
                        ]));
                    } else {
                        lines.push(Line::from(vec![
                            Span::styled(key, heading),
                            Span::styled("\u{25A3} ", text),
                            Span::styled(label.clone(), text),
                            Span::styled(format!("  {}", src), dim),
                        ]));
                    }
                }
                MediaView::Video {
                    title,
                    description,
                    link,
                } => {
                    let action = match link {
                        VideoLink::External(_) => Span::styled(
                            "  \u{2197} open",
                            Style::default().fg(theme.cyan).bg(bg),
                        ),
                        VideoLink::ComingSoon => Span::styled(
                            "  coming soon",
                            Style::default().fg(theme.yellow).bg(bg),
                        ),
                    };
                    lines.push(Line::from(vec![
                        Span::styled(key, heading),
                        Span::styled("\u{25B6} ", text),
                        Span::styled(title.clone(), bright),
                        action,
                    ]));
                    if !description.is_empty() {
                        push_wrapped(&mut lines, description, "     ", body_w.saturating_sub(4), dim);
                    }
                }
            }
        }
    }

    if let Some(features) = &view.features {
        section(&mut lines, "Key Features", heading);
        for feature in features {
            let wrapped = wrap_text(feature, body_w.saturating_sub(2).max(1));
            for (i, part) in wrapped.into_iter().enumerate() {
                let bullet = if i == 0 { " \u{2022} " } else { "   " };
                lines.push(Line::from(vec![
                    Span::styled(bullet, Style::default().fg(theme.green).bg(bg)),
                    Span::styled(part, text),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
    let cta_row = lines.len();
    lines.push(Line::from(vec![
        Span::styled(" ", text),
        Span::styled(
            format!(" {} ", view.call_to_action),
            Style::default()
                .fg(theme.background)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  c", heading),
    ]));

    DetailLines {
        lines,
        media_rows,
        cta_row,
    }
}

fn section(lines: &mut Vec<Line<'static>>, title: &'static str, style: Style) {
    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::raw(" "), Span::styled(title, style)]));
}

fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    indent: &'static str,
    width: usize,
    style: Style,
) {
    for part in wrap_text(text, width.max(1)) {
        lines.push(Line::from(vec![
            Span::styled(indent, style.remove_modifier(Modifier::BOLD)),
            Span::styled(part, style),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lightbox::render;
    use crate::model::fixtures::full_record;
    use crate::tui::render::test_helpers::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn detail_lines_section_order() {
        let host = stub_host();
        let view = render(&full_record("lead", "Lead Scoring"));
        let detail = detail_lines(&view, &host, &Theme::dark(), 60);
        let text: Vec<String> = detail.lines.iter().map(plain).collect();
        let find = |needle: &str| {
            text.iter()
                .position(|l| l.contains(needle))
                .unwrap_or_else(|| panic!("missing {needle:?}"))
        };
        let order = [
            find("#HubSpot"),
            find("Lead Scoring"),
            find("The Challenge"),
            find("The Solution"),
            find("The Result"),
            find("Tech Stack"),
            find("Workflow"),
            find("Media"),
            find("Key Features"),
            find("Need something like this?"),
        ];
        assert!(order.windows(2).all(|w| w[0] < w[1]), "{order:?}");
        assert_eq!(detail.cta_row, find("Need something like this?"));
    }

    #[test]
    fn tech_stack_shows_icons() {
        let host = stub_host();
        let view = render(&full_record("lead", "Lead Scoring"));
        let detail = detail_lines(&view, &host, &Theme::dark(), 60);
        assert!(
            detail
                .lines
                .iter()
                .map(plain)
                .any(|l| l.contains("HubSpot (hs)") && l.contains("WhatsApp API (wa)"))
        );
    }

    #[test]
    fn tiny_terminals_do_not_panic() {
        for (w, h) in [(80, 2), (80, 1), (33, 1), (33, 2), (3, 1), (40, 4)] {
            let mut loading = app_with_delay(300);
            loading.open_index(0);
            let out = render_to_string(w, h, |frame, _| {
                crate::tui::render::render(frame, &mut loading);
            });
            assert!(out.lines().count() <= usize::from(h));

            let mut mounted = sample_app();
            mounted.open_index(0);
            let _ = render_to_string(w, h, |frame, _| {
                crate::tui::render::render(frame, &mut mounted);
            });
            if h <= 2 {
                // Controls that were not drawn are not clickable
                assert!(mounted.hits.prev.is_none());
                assert!(mounted.hits.close.is_none());
            }
        }
    }

    #[test]
    fn media_rows_point_at_cards() {
        let host = stub_host();
        let view = render(&full_record("lead", "Lead Scoring"));
        let detail = detail_lines(&view, &host, &Theme::dark(), 60);
        let rows: Vec<String> = detail
            .media_rows
            .iter()
            .map(|(row, _)| plain(&detail.lines[*row]))
            .collect();
        assert_eq!(detail.media_rows.len(), 3);
        assert!(rows[0].starts_with(" [1] "));
        assert!(rows[0].contains("Lead Scoring Dashboard"));
        assert!(rows[1].contains("Walkthrough") && rows[1].contains("open"));
        assert!(rows[2].contains("Deep dive") && rows[2].contains("coming soon"));
    }

    #[test]
    fn missing_image_shows_placeholder() {
        let mut app = app_with_catalog(full_catalog());
        app.open_index(0);
        // Media sits below the fold; jump to the end
        app.scroll_content(500);
        let out = render_to_string(TERM_W, TERM_H, |frame, _| {
            crate::tui::render::render(frame, &mut app);
        });
        assert!(out.contains("Visual loading\u{2026}"));
        assert!(out.contains("Lead Scoring Dashboard"));
    }

    #[test]
    fn modal_shows_title_position_and_controls() {
        let mut app = sample_app();
        app.open_index(2);
        let out = render_to_string(TERM_W, TERM_H, |frame, _| {
            crate::tui::render::render(frame, &mut app);
        });
        assert!(out.contains(" Charlie "));
        assert!(out.contains(" 3/5 "));
        assert!(out.contains("\u{2039} prev"));
        assert!(out.contains("next \u{203A}"));
        assert!(out.contains("\u{2715} close"));
        assert!(out.contains("Need something like this?"));
        assert!(app.hits.modal.is_some());
        assert!(app.hits.prev.is_some() && app.hits.next.is_some());
        assert!(app.hits.call_to_action.is_some());
    }

    #[test]
    fn modal_shows_loading_while_pending() {
        let mut app = app_with_delay(300);
        app.open_index(1);
        let out = render_to_string(TERM_W, TERM_H, |frame, _| {
            crate::tui::render::render(frame, &mut app);
        });
        assert!(out.contains("Loading\u{2026}"));
        assert!(out.contains(" 2/5 "));
        assert!(!out.contains("Bravo description"));
        assert!(app.hits.call_to_action.is_none());
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut app = app_with_catalog(full_catalog());
        app.open_index(0);
        app.scroll_content(500);
        let _ = render_to_string(TERM_W, TERM_H, |frame, _| {
            crate::tui::render::render(frame, &mut app);
        });
        let scroll = app.lightbox.host().content_scroll;
        assert!(scroll < 500);
        // The call-to-action is the last content row, so it is on screen
        assert!(app.hits.call_to_action.is_some());
    }
}
