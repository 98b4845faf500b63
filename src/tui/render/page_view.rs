use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Section};
use crate::util::unicode;

use super::helpers::spans_width;

/// Rows per project card: title, description, tags, spacer
const CARD_HEIGHT: u16 = 4;
const CONTACT_HEIGHT: u16 = 6;

/// Site name, tagline and theme indicator, with a separator below
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![
        Span::styled(" \u{25C6} ", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            app.site_name.clone(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if !app.tagline.is_empty() {
        spans.push(Span::styled(
            format!("  {}", app.tagline),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let indicator = format!("{} {} ", theme_glyph(app), app.theme.name);
    let used = spans_width(&spans);
    let indicator_w = unicode::display_width(&indicator);
    if used + indicator_w < width {
        spans.push(Span::styled(
            " ".repeat(width - used - indicator_w),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            indicator,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.border).bg(bg),
    ));
    let header = Paragraph::new(vec![Line::from(spans), separator]).style(Style::default().bg(bg));
    frame.render_widget(header, area);
}

fn theme_glyph(app: &App) -> &'static str {
    match app.theme.name {
        crate::model::ThemeName::Dark => "\u{263E}",
        crate::model::ThemeName::Light => "\u{2600}",
    }
}

/// Project cards, plus the contact panel when it has focus
pub fn render_page(frame: &mut Frame, app: &mut App, area: Rect) {
    let contact_h = if app.section == Section::Contact {
        CONTACT_HEIGHT.min(area.height.saturating_sub(3))
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(contact_h)])
        .split(area);

    render_cards(frame, app, chunks[0]);
    if contact_h > 0 {
        render_contact(frame, app, chunks[1]);
    }
}

fn render_cards(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let count = app.catalog.len();

    let heading = Line::from(vec![
        Span::styled(
            " Projects",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({})", count),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(heading).style(Style::default().bg(bg)),
        Rect::new(area.x, area.y, area.width, 1u16.min(area.height)),
    );

    if count == 0 {
        if area.height > 2 {
            let msg = Paragraph::new(Line::from(Span::styled(
                " No projects yet. Add [[projects]] entries to portfolio/projects.toml",
                Style::default().fg(app.theme.dim).bg(bg),
            )));
            frame.render_widget(msg, Rect::new(area.x, area.y + 2, area.width, 1));
        }
        return;
    }

    let list_top = area.y + 2u16.min(area.height);
    let list_h = area.height.saturating_sub(2);
    let visible = usize::from((list_h / CARD_HEIGHT).max(1));

    // Keep the cursor card on screen
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible {
        app.scroll_offset = app.cursor + 1 - visible;
    }

    for (slot, index) in (app.scroll_offset..count.min(app.scroll_offset + visible)).enumerate() {
        let Some(record) = app.catalog.id_at(index).and_then(|id| app.catalog.get(id)) else {
            break;
        };
        let y = list_top + slot as u16 * CARD_HEIGHT;
        if y >= area.y + area.height {
            break;
        }
        let h = (CARD_HEIGHT - 1).min(area.y + area.height - y);
        let card_area = Rect::new(area.x, y, area.width, h);

        let selected = index == app.cursor && app.section == Section::Projects;
        let card_bg = if selected { app.theme.selection_bg } else { bg };
        let base = Style::default().bg(card_bg);
        let marker = if selected { "\u{258C}" } else { " " };
        let number = if index < 9 {
            format!("{} ", index + 1)
        } else {
            "  ".to_string()
        };

        let title_w = width.saturating_sub(5);
        let title_line = Line::from(vec![
            Span::styled(marker, base.fg(app.theme.highlight)),
            Span::styled(format!(" {}", number), base.fg(app.theme.dim)),
            Span::styled(
                unicode::truncate_to_width(&record.title, title_w),
                base.fg(app.theme.text_bright).add_modifier(Modifier::BOLD),
            ),
        ]);

        let desc_line = Line::from(vec![
            Span::styled("    ", base),
            Span::styled(
                unicode::truncate_to_width(&record.description, title_w),
                base.fg(app.theme.text),
            ),
        ]);

        let mut tag_spans = vec![Span::styled("    ", base)];
        for (i, tag) in record.tags.iter().enumerate() {
            if i > 0 {
                tag_spans.push(Span::styled(" ", base));
            }
            tag_spans.push(Span::styled(
                format!("#{}", tag),
                base.fg(app.theme.tag_color(i)),
            ));
        }
        if selected {
            let hint = "\u{23CE} view details ";
            let used = spans_width(&tag_spans);
            let hint_w = unicode::display_width(hint);
            if used + hint_w < width {
                tag_spans.push(Span::styled(" ".repeat(width - used - hint_w), base));
                tag_spans.push(Span::styled(hint, base.fg(app.theme.dim)));
            }
        }

        let card = Paragraph::new(vec![title_line, desc_line, Line::from(tag_spans)]).style(base);
        frame.render_widget(card, card_area);
        app.hits.cards.push((card_area, index));
    }
}

fn render_contact(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let label = Style::default().fg(app.theme.dim).bg(bg);
    let value = Style::default().fg(app.theme.text_bright).bg(bg);

    let mut lines = Vec::new();
    if let Some(email) = &app.contact.email {
        lines.push(Line::from(vec![
            Span::styled(" \u{2709} email  ", label),
            Span::styled(email.clone(), value),
        ]));
    }
    if let Some(endpoint) = &app.contact.form_endpoint {
        lines.push(Line::from(vec![
            Span::styled(" \u{21E2} form   ", label),
            Span::styled(endpoint.clone(), value),
        ]));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            " No contact details configured.",
            label,
        )));
    }
    lines.push(Line::from(Span::styled(" c or Esc to go back", label)));

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(app.theme.border).bg(bg))
        .title(Span::styled(
            " Contact ",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
