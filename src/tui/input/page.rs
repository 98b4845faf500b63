use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Section};

/// Keys on the host page (lightbox closed)
pub(super) fn handle_page(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.jump_cursor(false),
        KeyCode::Char('G') | KeyCode::End => app.jump_cursor(true),
        KeyCode::Enter => {
            app.section = Section::Projects;
            app.open_selected();
        }
        KeyCode::Char(c @ '1'..='9') => app.open_index(c as usize - '1' as usize),
        KeyCode::Char('c') => {
            app.section = match app.section {
                Section::Projects => Section::Contact,
                Section::Contact => Section::Projects,
            };
        }
        KeyCode::Esc => app.section = Section::Projects,
        // Lightbox navigation keys reach the controller, which ignores them while closed
        KeyCode::Left | KeyCode::Char('h') => app.lightbox.show_previous(),
        KeyCode::Right | KeyCode::Char('l') => app.lightbox.show_next(),
        _ => {}
    }
}
