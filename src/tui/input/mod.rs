mod lightbox;
mod mouse;
mod page;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

use lightbox::handle_lightbox;
use page::handle_page;

pub use mouse::handle_mouse_event as handle_mouse;

/// Handle a key event: help overlay first, then the open lightbox, then the page
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    // Notices last until the next key press
    app.lightbox.host_mut().notice = None;

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    if app.lightbox.is_open() {
        handle_lightbox(app, key);
        app.sync_contact_request();
    } else {
        handle_page(app, key);
    }
}
