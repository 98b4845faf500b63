use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

/// Keys while the lightbox is open
pub(super) fn handle_lightbox(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.lightbox.close(),
        KeyCode::Left | KeyCode::Char('h') => app.lightbox.show_previous(),
        KeyCode::Right | KeyCode::Char('l') => app.lightbox.show_next(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_content(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_content(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_content(10),
        KeyCode::PageUp => app.scroll_content(-10),
        KeyCode::Char('g') => app.lightbox.host_mut().content_scroll = 0,
        KeyCode::Char('c') => app.lightbox.contact(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.lightbox.activate_media(index);
        }
        _ => {}
    }
}
